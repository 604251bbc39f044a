use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use tracing::debug;

use crate::constants::apps::LOG_PREFIX;
use crate::constants::dataset::{COLUMNS, DELIMITER};
use crate::data::{Dataset, DomainRecord};
use crate::errors::AssignError;

/// Tab-separated dataset file with a single header row.
///
/// Loads are all-or-nothing. Saves truncate and rewrite the file in place, so
/// an interrupted save can leave a partial file behind.
#[derive(Clone, Debug)]
pub struct DatasetFile {
    path: PathBuf,
}

impl DatasetFile {
    /// Point at the dataset stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row, validating the header and ordering-key uniqueness.
    pub fn load(&self) -> Result<Dataset, AssignError> {
        let file = File::open(&self.path).map_err(|source| AssignError::DatasetUnavailable {
            path: self.path.clone(),
            source,
        })?;
        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(true)
            .flexible(false)
            .from_reader(file);

        let headers = reader.headers()?;
        if !headers.iter().eq(COLUMNS.iter().copied()) {
            return Err(AssignError::HeaderMismatch {
                expected: COLUMNS.iter().map(|column| column.to_string()).collect(),
                found: headers.iter().map(str::to_string).collect(),
            });
        }

        let mut records = Vec::new();
        for row in reader.deserialize::<DomainRecord>() {
            records.push(row?);
        }
        debug!(
            "{LOG_PREFIX} loaded {} rows from {}",
            records.len(),
            self.path.display()
        );
        Dataset::new(records)
    }

    /// Overwrite the file with `dataset`: header first, then rows in order.
    pub fn save(&self, dataset: &Dataset) -> Result<(), AssignError> {
        let file = File::create(&self.path).map_err(|source| AssignError::DatasetUnavailable {
            path: self.path.clone(),
            source,
        })?;
        let mut writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);

        writer.write_record(COLUMNS)?;
        for record in dataset.records() {
            writer.serialize(record)?;
        }
        writer.flush()?;
        debug!(
            "{LOG_PREFIX} wrote {} rows to {}",
            dataset.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "shuffled #\tTrexa # \tdomain\tassigned for new-password forms\tassigned for change-password forms\tnote\n";

    #[test]
    fn load_parses_optional_cells_as_none_when_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("domains.csv");
        fs::write(
            &path,
            format!("{HEADER}7\t1\tgoogle.com\tDANIEL\t\t\n3\t2\tyoutube.com\t\tERIK\tslow login\n"),
        )
        .unwrap();

        let dataset = DatasetFile::new(&path).load().unwrap();
        let records = dataset.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].shuffled_index, 7);
        assert_eq!(records[0].rank_index, 1);
        assert_eq!(records[0].domain, "google.com");
        assert_eq!(records[0].assigned_new_password.as_deref(), Some("DANIEL"));
        assert_eq!(records[0].assigned_change_password, None);
        assert_eq!(records[0].note, None);
        assert_eq!(records[1].assigned_change_password.as_deref(), Some("ERIK"));
        assert_eq!(records[1].note.as_deref(), Some("slow login"));
    }

    #[test]
    fn save_reproduces_loaded_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("domains.csv");
        let body = format!(
            "{HEADER}2\t1\ta.com\t\t\t\n1\t2\tb.com\tVLAD\tERIK\t\"has\ttab\"\n"
        );
        fs::write(&path, &body).unwrap();

        let file = DatasetFile::new(&path);
        let dataset = file.load().unwrap();
        file.save(&dataset).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), body);
        assert_eq!(dataset.records()[1].note.as_deref(), Some("has\ttab"));
    }

    #[test]
    fn save_writes_header_for_empty_dataset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("domains.csv");
        DatasetFile::new(&path).save(&Dataset::default()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), HEADER);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = DatasetFile::new(&path).load().unwrap_err();
        assert!(matches!(err, AssignError::DatasetUnavailable { path: ref p, .. } if p == &path));
        assert!(err.to_string().contains("absent.csv"));
    }

    #[test]
    fn header_without_trailing_space_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("domains.csv");
        fs::write(
            &path,
            "shuffled #\tTrexa #\tdomain\tassigned for new-password forms\tassigned for change-password forms\tnote\n1\t1\ta.com\t\t\t\n",
        )
        .unwrap();
        let err = DatasetFile::new(&path).load().unwrap_err();
        assert!(matches!(err, AssignError::HeaderMismatch { ref found, .. } if found[1] == "Trexa #"));
    }

    #[test]
    fn non_integer_key_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("domains.csv");
        fs::write(&path, format!("{HEADER}1\tfirst\ta.com\t\t\t\n")).unwrap();
        let err = DatasetFile::new(&path).load().unwrap_err();
        assert!(matches!(err, AssignError::Malformed { ref details, .. } if !details.is_empty()));
    }

    #[test]
    fn ragged_row_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("domains.csv");
        fs::write(&path, format!("{HEADER}1\t1\ta.com\n")).unwrap();
        let err = DatasetFile::new(&path).load().unwrap_err();
        assert!(matches!(err, AssignError::Malformed { .. }));
    }
}
