/// Constants describing the on-disk dataset layout.
pub mod dataset {
    /// Fixed dataset filename, resolved relative to the current working directory.
    pub const DEFAULT_DATASET_FILENAME: &str = "tranco_100k_alexa_100k_union_shuffled_2019-12-14.csv";
    /// Field delimiter used for reading and writing the dataset.
    pub const DELIMITER: u8 = b'\t';
    /// Header for the precomputed shuffled ordering key.
    pub const COLUMN_SHUFFLED_INDEX: &str = "shuffled #";
    /// Header for the Trexa popularity rank. The trailing space is part of the header.
    pub const COLUMN_RANK_INDEX: &str = "Trexa # ";
    /// Header for the domain name.
    pub const COLUMN_DOMAIN: &str = "domain";
    /// Header for the new-password task assignee.
    pub const COLUMN_ASSIGNED_NEW_PASSWORD: &str = "assigned for new-password forms";
    /// Header for the change-password task assignee managed by this crate.
    pub const COLUMN_ASSIGNED_CHANGE_PASSWORD: &str = "assigned for change-password forms";
    /// Header for free-form notes.
    pub const COLUMN_NOTE: &str = "note";
    /// Canonical column order; the header row must match it exactly.
    pub const COLUMNS: [&str; 6] = [
        COLUMN_SHUFFLED_INDEX,
        COLUMN_RANK_INDEX,
        COLUMN_DOMAIN,
        COLUMN_ASSIGNED_NEW_PASSWORD,
        COLUMN_ASSIGNED_CHANGE_PASSWORD,
        COLUMN_NOTE,
    ];
}

/// Constants used by the assignment report.
pub mod report {
    /// Mode word printed for rank ordering (first word of the rank column header).
    pub const MODE_LABEL_RANK: &str = "Trexa";
    /// Mode word printed for shuffled ordering (first word of the shuffled column header).
    pub const MODE_LABEL_SHUFFLED: &str = "shuffled";
    /// Separator placed between report table columns.
    pub const COLUMN_GAP: &str = " ";
}

/// Constants used by the command-line runner.
pub mod apps {
    /// Binary name shown in usage output.
    pub const BIN_NAME: &str = "assign_change_password";
    /// Log prefix used by diagnostics.
    pub const LOG_PREFIX: &str = "[assign]";
}
