use std::fmt;
use std::path::PathBuf;

use crate::constants::dataset::{COLUMN_RANK_INDEX, COLUMN_SHUFFLED_INDEX, DEFAULT_DATASET_FILENAME};
use crate::constants::report::{MODE_LABEL_RANK, MODE_LABEL_SHUFFLED};
use crate::errors::AssignError;
use crate::types::Assignee;

/// Which precomputed ordering column drives selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrderingMode {
    /// Order by Trexa popularity rank (`Trexa # `).
    #[default]
    Rank,
    /// Order by the precomputed shuffled index (`shuffled #`).
    Shuffled,
}

impl OrderingMode {
    /// Map the `--shuffled` flag onto a mode.
    pub fn from_shuffled_flag(shuffled: bool) -> Self {
        if shuffled {
            OrderingMode::Shuffled
        } else {
            OrderingMode::Rank
        }
    }

    /// Header of the column this mode sorts by.
    pub fn column(self) -> &'static str {
        match self {
            OrderingMode::Rank => COLUMN_RANK_INDEX,
            OrderingMode::Shuffled => COLUMN_SHUFFLED_INDEX,
        }
    }

    /// Mode word used in the report summary line.
    pub fn label(self) -> &'static str {
        match self {
            OrderingMode::Rank => MODE_LABEL_RANK,
            OrderingMode::Shuffled => MODE_LABEL_SHUFFLED,
        }
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated parameters for one assignment run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignConfig {
    /// Dataset file to read and overwrite.
    pub dataset_path: PathBuf,
    /// Number of domains requested. Always greater than zero.
    pub num_domains: usize,
    /// Assignee, already uppercased.
    pub assignee: Assignee,
    /// Ordering column used for selection.
    pub ordering: OrderingMode,
}

impl AssignConfig {
    /// Validate raw inputs and normalize the assignee.
    pub fn new(
        dataset_path: impl Into<PathBuf>,
        num_domains: usize,
        assignee: &str,
        ordering: OrderingMode,
    ) -> Result<Self, AssignError> {
        if num_domains == 0 {
            return Err(AssignError::Configuration(
                "num_domains must be greater than zero".to_string(),
            ));
        }
        if assignee.trim().is_empty() {
            return Err(AssignError::Configuration(
                "assignee must not be empty".to_string(),
            ));
        }
        Ok(Self {
            dataset_path: dataset_path.into(),
            num_domains,
            assignee: assignee.to_uppercase(),
            ordering,
        })
    }

    /// Default dataset location in the current working directory.
    pub fn default_dataset_path() -> PathBuf {
        PathBuf::from(DEFAULT_DATASET_FILENAME)
    }
}
