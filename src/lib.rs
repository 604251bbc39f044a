#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command-line runner for the assignment tool.
pub mod apps;
/// Selection and in-place assignment of unassigned domains.
pub mod assigner;
/// Run configuration and ordering modes.
pub mod config;
/// Centralized constants for the dataset layout, report and CLI.
pub mod constants;
/// Domain record and dataset types.
pub mod data;
/// Report rendering.
pub mod report;
/// Dataset file transports.
pub mod transport;
/// Shared type aliases.
pub mod types;

mod errors;

pub use assigner::{Assignment, assign_next, next_unassigned};
pub use config::{AssignConfig, OrderingMode};
pub use data::{Dataset, DomainRecord};
pub use errors::AssignError;
pub use transport::DatasetFile;
pub use types::{Assignee, ColumnName, Domain, Note, OrderKey};
