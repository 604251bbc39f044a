/// Tab-separated dataset file transport.
pub mod tsv;

pub use tsv::DatasetFile;
