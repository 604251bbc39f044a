//! Selection of the next unassigned domains and in-place assignment.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::config::{AssignConfig, OrderingMode};
use crate::constants::apps::LOG_PREFIX;
use crate::data::{Dataset, DomainRecord};
use crate::types::{Assignee, OrderKey};

/// Outcome of one assignment pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// Ordering used for selection.
    pub ordering: OrderingMode,
    /// Uppercased assignee written to every selected record.
    pub assignee: Assignee,
    /// Number of domains asked for.
    pub requested: usize,
    /// Selected records after mutation, ascending by the ordering key.
    pub selected: Vec<DomainRecord>,
}

impl Assignment {
    /// Number of records that actually received the assignee.
    pub fn assigned_count(&self) -> usize {
        self.selected.len()
    }

    /// True when fewer unassigned records existed than were requested.
    pub fn is_short(&self) -> bool {
        self.selected.len() < self.requested
    }
}

/// Unassigned records sorted ascending by `mode`'s key, truncated to `limit`.
pub fn next_unassigned(dataset: &Dataset, mode: OrderingMode, limit: usize) -> Vec<&DomainRecord> {
    let mut candidates: Vec<&DomainRecord> = dataset
        .records()
        .iter()
        .filter(|record| record.is_unassigned())
        .collect();
    candidates.sort_by_key(|record| record.order_key(mode));
    candidates.truncate(limit);
    candidates
}

/// Stamp the next `config.num_domains` unassigned records with `config.assignee`.
///
/// Records are matched back into the dataset by ordering-key value, which is
/// unique per column, so only the selected rows change.
pub fn assign_next(dataset: &mut Dataset, config: &AssignConfig) -> Assignment {
    let mode = config.ordering;
    let mut selected: Vec<DomainRecord> = next_unassigned(dataset, mode, config.num_domains)
        .into_iter()
        .cloned()
        .collect();
    let keys: HashSet<OrderKey> = selected
        .iter()
        .map(|record| record.order_key(mode))
        .collect();

    for record in dataset.records_mut() {
        if keys.contains(&record.order_key(mode)) {
            record.assigned_change_password = Some(config.assignee.clone());
        }
    }
    for record in &mut selected {
        record.assigned_change_password = Some(config.assignee.clone());
    }

    let assignment = Assignment {
        ordering: mode,
        assignee: config.assignee.clone(),
        requested: config.num_domains,
        selected,
    };
    if assignment.is_short() {
        warn!(
            "{LOG_PREFIX} requested {} domains but only {} were unassigned",
            assignment.requested,
            assignment.assigned_count()
        );
    }
    info!(
        "{LOG_PREFIX} assigned {} {} domains to {}",
        assignment.assigned_count(),
        mode,
        assignment.assignee
    );
    assignment
}
