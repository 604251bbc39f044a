use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::OrderingMode;
use crate::errors::AssignError;

pub use crate::types::{Assignee, Domain, Note, OrderKey};

/// One row of the domain dataset.
///
/// Field order matches the on-disk column order; serde renames map the literal
/// headers (including the trailing space in `Trexa # `).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    /// Precomputed random ordering key.
    #[serde(rename = "shuffled #")]
    pub shuffled_index: OrderKey,
    /// Precomputed popularity-rank ordering key.
    #[serde(rename = "Trexa # ")]
    pub rank_index: OrderKey,
    /// Domain name.
    pub domain: Domain,
    /// Assignee for the new-password task. Never touched by this crate.
    #[serde(rename = "assigned for new-password forms")]
    pub assigned_new_password: Option<Assignee>,
    /// Assignee for the change-password task; `None` means unassigned.
    #[serde(rename = "assigned for change-password forms")]
    pub assigned_change_password: Option<Assignee>,
    /// Free-form annotation.
    pub note: Option<Note>,
}

impl DomainRecord {
    /// Ordering key for `mode`.
    pub fn order_key(&self, mode: OrderingMode) -> OrderKey {
        match mode {
            OrderingMode::Rank => self.rank_index,
            OrderingMode::Shuffled => self.shuffled_index,
        }
    }

    /// True when no change-password assignee is recorded.
    pub fn is_unassigned(&self) -> bool {
        self.assigned_change_password.is_none()
    }
}

/// In-memory dataset in file row order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<DomainRecord>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate ordering keys.
    pub fn new(records: Vec<DomainRecord>) -> Result<Self, AssignError> {
        ensure_unique(&records, OrderingMode::Shuffled)?;
        ensure_unique(&records, OrderingMode::Rank)?;
        Ok(Self { records })
    }

    /// Records in file order.
    pub fn records(&self) -> &[DomainRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [DomainRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records still waiting for a change-password assignee.
    pub fn unassigned_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.is_unassigned())
            .count()
    }

    pub fn into_records(self) -> Vec<DomainRecord> {
        self.records
    }
}

fn ensure_unique(records: &[DomainRecord], mode: OrderingMode) -> Result<(), AssignError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let key = record.order_key(mode);
        if !seen.insert(key) {
            return Err(AssignError::DuplicateKey {
                column: mode.column().to_string(),
                value: key,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(shuffled: OrderKey, rank: OrderKey, domain: &str) -> DomainRecord {
        DomainRecord {
            shuffled_index: shuffled,
            rank_index: rank,
            domain: domain.to_string(),
            assigned_new_password: None,
            assigned_change_password: None,
            note: None,
        }
    }

    #[test]
    fn order_key_follows_mode() {
        let rec = record(17, 3, "example.com");
        assert_eq!(rec.order_key(OrderingMode::Shuffled), 17);
        assert_eq!(rec.order_key(OrderingMode::Rank), 3);
    }

    #[test]
    fn duplicate_rank_is_rejected() {
        let err = Dataset::new(vec![record(1, 5, "a.com"), record(2, 5, "b.com")]).unwrap_err();
        assert!(matches!(
            err,
            AssignError::DuplicateKey { ref column, value: 5 } if column == "Trexa # "
        ));
    }

    #[test]
    fn duplicate_shuffled_index_is_rejected() {
        let err = Dataset::new(vec![record(9, 1, "a.com"), record(9, 2, "b.com")]).unwrap_err();
        assert!(matches!(
            err,
            AssignError::DuplicateKey { ref column, value: 9 } if column == "shuffled #"
        ));
    }

    #[test]
    fn unassigned_count_skips_assigned_rows() {
        let mut taken = record(2, 2, "b.com");
        taken.assigned_change_password = Some("VLAD".to_string());
        let dataset = Dataset::new(vec![record(1, 1, "a.com"), taken]).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.unassigned_count(), 1);
    }
}
