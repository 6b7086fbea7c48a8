use super::identifier::Identifier;
use super::types::{Record, StoreError};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the score log, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "pt_scores.csv";

/// Get the default score log path (./pt_scores.csv)
pub fn get_default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

/// Append-only CSV log of `<identifier>,<score>` rows with no header.
///
/// A missing file is an empty log. Rows are never rewritten or removed.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Read the raw log, treating a file that was never created as empty.
    fn read_contents(&self) -> Result<String, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// All records in append order. Blank lines are skipped.
    pub fn records(&self) -> Result<Vec<Record>, StoreError> {
        let contents = self.read_contents()?;
        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                Record::from_row(line).ok_or_else(|| StoreError::Malformed {
                    line: i + 1,
                    content: line.to_string(),
                })
            })
            .collect()
    }

    /// Whether any row's identifier field equals `identifier` exactly.
    ///
    /// This is a string comparison: "12345" never matches "012345".
    pub fn exists(&self, identifier: &str) -> Result<bool, StoreError> {
        let contents = self.read_contents()?;
        let found = contains_identifier(&contents, identifier);
        debug!(identifier, found, path = %self.path.display(), "checked score log");
        Ok(found)
    }

    /// Record a score for `identifier` unless that ID is already in the log.
    ///
    /// On a duplicate the file is left untouched. The scan and the write are
    /// not one atomic operation; `&mut self` only keeps a single writer per
    /// process, so two processes sharing a log can still race.
    pub fn append(
        &mut self,
        identifier: &Identifier,
        total_score: f64,
    ) -> Result<Record, StoreError> {
        let contents = self.read_contents()?;
        if contains_identifier(&contents, identifier.as_str()) {
            debug!(identifier = %identifier, "rejected duplicate identifier");
            return Err(StoreError::Duplicate {
                identifier: identifier.to_string(),
            });
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let record = Record {
            identifier: identifier.to_string(),
            total_score,
        };

        // A hand-edited log may lack a trailing newline; finish that row first
        let mut line = String::new();
        if !contents.is_empty() && !contents.ends_with('\n') {
            line.push('\n');
        }
        line.push_str(&record.to_row());
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.io_error(e))?;
        file.sync_data().map_err(|e| self.io_error(e))?;

        debug!(
            identifier = %identifier,
            total_score,
            path = %self.path.display(),
            "appended record"
        );
        Ok(record)
    }
}

fn contains_identifier(contents: &str, identifier: &str) -> bool {
    contents
        .lines()
        .filter_map(|line| line.split(',').next())
        .any(|field| field == identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> RecordStore {
        RecordStore::new(dir.path().join("pt_scores.csv"))
    }

    fn id(s: &str) -> Identifier {
        Identifier::parse(s).unwrap()
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(!store.exists("123456").unwrap());
        assert!(store.records().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_append_then_exists() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.append(&id("123456"), 88.5).unwrap();

        assert!(store.exists("123456").unwrap());
        assert!(!store.exists("654321").unwrap());
        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "123456,88.5\n");
    }

    #[test]
    fn test_duplicate_rejected_and_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.append(&id("123456"), 70.0).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        for score in [70.0, 0.0, 100.0] {
            let err = store.append(&id("123456"), score).unwrap_err();
            assert!(matches!(err, StoreError::Duplicate { ref identifier } if identifier == "123456"));
        }

        let after = fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
        assert_eq!(store.records().unwrap().len(), 1);
    }

    #[test]
    fn test_append_preserves_order_and_prior_rows() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.append(&id("111111"), 50.0).unwrap();
        store.append(&id("222222"), 100.0).unwrap();
        store.append(&id("000333"), 61.3).unwrap();

        let records = store.records().unwrap();
        assert_eq!(
            records,
            vec![
                Record { identifier: "111111".to_string(), total_score: 50.0 },
                Record { identifier: "222222".to_string(), total_score: 100.0 },
                Record { identifier: "000333".to_string(), total_score: 61.3 },
            ]
        );
        assert_eq!(
            records.iter().filter(|r| r.identifier == "000333").count(),
            1
        );
    }

    #[test]
    fn test_exists_is_exact_string_match() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.append(&id("012345"), 75.0).unwrap();

        assert!(store.exists("012345").unwrap());
        assert!(!store.exists("12345").unwrap());
        assert!(!store.exists("0123456").unwrap());
        assert!(!store.exists("12345.0").unwrap());
    }

    #[test]
    fn test_exists_does_not_match_score_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pt_scores.csv");
        fs::write(&path, "111111,100.0\n").unwrap();
        let store = RecordStore::new(&path);

        assert!(!store.exists("100.0").unwrap());
    }

    #[test]
    fn test_reads_crlf_rows() {
        // Logs written by the csv module of other tools end rows with \r\n
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pt_scores.csv");
        fs::write(&path, "123456,98.8\r\n654321,40.0\r\n").unwrap();
        let mut store = RecordStore::new(&path);

        assert!(store.exists("654321").unwrap());
        assert_eq!(store.records().unwrap()[1].total_score, 40.0);
        assert!(store.append(&id("654321"), 1.0).is_err());
    }

    #[test]
    fn test_append_terminates_unfinished_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pt_scores.csv");
        fs::write(&path, "111111,90.0").unwrap();
        let mut store = RecordStore::new(&path);

        store.append(&id("222222"), 80.0).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "111111,90.0\n222222,80.0\n");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pt_scores.csv");
        fs::write(&path, "111111,90.0\n\n222222,80.0\n").unwrap();
        let store = RecordStore::new(&path);

        assert_eq!(store.records().unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_row_reported_with_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pt_scores.csv");
        fs::write(&path, "111111,90.0\n222222,oops\n").unwrap();
        let store = RecordStore::new(&path);

        let err = store.records().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { line: 2, .. }));
        // Duplicate detection only needs the identifier column
        assert!(store.exists("222222").unwrap());
    }

    #[test]
    fn test_append_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::new(dir.path().join("nested").join("pt_scores.csv"));

        store.append(&id("123456"), 10.0).unwrap();

        assert!(store.exists("123456").unwrap());
    }

    #[test]
    fn test_unreadable_store_is_io_error() {
        // A directory where the log should be cannot be read as a file
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path());

        let err = store.exists("123456").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_default_store_path() {
        assert_eq!(get_default_store_path(), PathBuf::from("pt_scores.csv"));
    }
}
