// StatusBoard - app/store.rs
//
// Persisted dataset: one CSV file in the data directory.
//
// Every load re-reads the file; there is no in-memory cache. Saves are
// atomic (temp file + rename), so a reader sees either the previous
// dataset or the new one, never a torn write. There is no locking: two
// processes saving at once race and the last rename wins.

use crate::core::model::{CellValue, Dataset};
use crate::platform::fs::{remove_if_exists, write_atomic};
use crate::util::error::StoreError;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Handle to the persisted dataset file.
#[derive(Debug, Clone)]
pub struct TabularStore {
    path: PathBuf,
}

impl TabularStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when a dataset file is currently present.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the persisted dataset.
    ///
    /// A missing or zero-byte file yields an empty dataset. Anything that is
    /// present but unreadable is an error.
    pub fn load(&self) -> Result<Dataset, StoreError> {
        let file = match std::fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No dataset file; starting empty");
                return Ok(Dataset::empty());
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        let dataset = read_csv_from(file, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            rows = dataset.len(),
            columns = dataset.columns().len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Overwrite the persisted dataset wholesale.
    pub fn save(&self, dataset: &Dataset) -> Result<(), StoreError> {
        let bytes = write_csv_bytes(dataset, &self.path)?;
        write_atomic(&self.path, &bytes).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::info!(
            path = %self.path.display(),
            rows = dataset.len(),
            columns = dataset.columns().len(),
            "Dataset saved"
        );
        Ok(())
    }

    /// Append `incoming` after the persisted rows and save the result.
    ///
    /// Columns are unioned by name (existing first). With nothing persisted
    /// this is a plain save. Returns the combined dataset.
    pub fn append(&self, incoming: &Dataset) -> Result<Dataset, StoreError> {
        let existing = self.load()?;
        let combined = if existing.is_empty() {
            incoming.clone()
        } else {
            existing.concat(incoming)
        };
        self.save(&combined)?;
        tracing::info!(
            existing = existing.len(),
            appended = incoming.len(),
            total = combined.len(),
            "Dataset appended"
        );
        Ok(combined)
    }

    /// Delete the persisted dataset. Clearing an absent file is not an error.
    pub fn clear(&self) -> Result<(), StoreError> {
        let removed = remove_if_exists(&self.path).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::info!(path = %self.path.display(), removed, "Dataset cleared");
        Ok(())
    }
}

/// Read a CSV file into a typed dataset.
///
/// Shared by the store and CSV uploads. The first record is the header.
pub fn read_csv(path: &Path) -> Result<Dataset, StoreError> {
    let file = std::fs::File::open(path).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_csv_from(file, path)
}

fn read_csv_from<R: Read>(reader: R, path: &Path) -> Result<Dataset, StoreError> {
    let csv_err = |e| StoreError::Csv {
        path: path.to_path_buf(),
        source: e,
    };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = rdr.records();
    let header = match records.next() {
        Some(rec) => rec.map_err(csv_err)?,
        None => return Ok(Dataset::empty()),
    };
    let columns: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    let width = columns.len();

    let mut rows = Vec::new();
    for (idx, rec) in records.enumerate() {
        let rec = rec.map_err(csv_err)?;
        if rec.len() > width {
            return Err(StoreError::RaggedRow {
                path: path.to_path_buf(),
                row: idx + 1,
                fields: rec.len(),
                columns: width,
            });
        }
        rows.push(rec.iter().map(CellValue::parse).collect());
    }

    Ok(Dataset::new(columns, rows))
}

fn write_csv_bytes(dataset: &Dataset, path: &Path) -> Result<Vec<u8>, StoreError> {
    let csv_err = |e| StoreError::Csv {
        path: path.to_path_buf(),
        source: e,
    };
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(dataset.columns()).map_err(csv_err)?;
    for row in dataset.rows() {
        wtr.write_record(row.iter().map(|cell| cell.to_text()))
            .map_err(csv_err)?;
    }
    wtr.into_inner().map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e.into_error(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn store_in(dir: &TempDir) -> TabularStore {
        TabularStore::new(dir.path().join("data").join("project_data.csv"))
    }

    fn sample() -> Dataset {
        Dataset::new(
            vec!["Task".into(), "Status".into(), "Due Date".into(), "Hours".into()],
            vec![
                vec![text("Write report"), text("In Progress"), CellValue::parse("2026-03-01"), CellValue::Number(4.5)],
                vec![text("Ship, then celebrate"), text("Done"), CellValue::Missing, CellValue::Number(12.0)],
            ],
        )
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let ds = store_in(&dir).load().unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn test_load_zero_byte_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), b"").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let ds = sample();
        store.save(&ds).unwrap();
        assert_eq!(store.load().unwrap(), ds);
    }

    #[test]
    fn test_save_of_load_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample()).unwrap();
        let before = std::fs::read(store.path()).unwrap();
        store.save(&store.load().unwrap()).unwrap();
        assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_append_concatenates_and_unions_columns() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample()).unwrap();

        let extra = Dataset::new(
            vec!["Status".into(), "Owner".into()],
            vec![vec![text("Pending"), text("Mike")]],
        );
        let combined = store.append(&extra).unwrap();
        assert_eq!(combined.len(), 3);
        assert_eq!(
            combined.columns(),
            &["Task", "Status", "Due Date", "Hours", "Owner"].map(String::from)[..]
        );
        assert_eq!(combined.rows()[0][..4], sample().rows()[0][..]);
        assert_eq!(combined.rows()[2][1], text("Pending"));
        assert_eq!(combined.rows()[2][0], CellValue::Missing);
        assert_eq!(store.load().unwrap(), combined);
    }

    #[test]
    fn test_append_keeps_number_like_text_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let first = Dataset::new(
            vec!["Code".into(), "Batch".into(), "Shift".into(), "Ordered".into()],
            vec![vec![text("007"), text("1e3"), text("+5"), text("2026-1-5")]],
        );
        store.save(&first).unwrap();

        let extra = Dataset::new(vec!["Code".into()], vec![vec![text("008")]]);
        let combined = store.append(&extra).unwrap();
        assert_eq!(combined.rows()[0], first.rows()[0]);
        assert_eq!(combined.rows()[1][0], text("008"));
        assert_eq!(store.load().unwrap().rows()[0], first.rows()[0]);
    }

    #[test]
    fn test_append_without_existing_is_save() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let combined = store.append(&sample()).unwrap();
        assert_eq!(combined, sample());
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn test_clear_removes_file_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample()).unwrap();
        store.clear().unwrap();
        assert!(!store.exists());
        assert!(store.load().unwrap().is_empty());
        store.clear().unwrap();
    }

    #[test]
    fn test_long_row_is_rejected_short_row_is_padded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ragged.csv");
        std::fs::write(&path, "A,B\n1\n1,2,3\n").unwrap();
        match read_csv(&path) {
            Err(StoreError::RaggedRow { row, fields, columns, .. }) => {
                assert_eq!((row, fields, columns), (2, 3, 2));
            }
            other => panic!("expected RaggedRow, got {other:?}"),
        }

        std::fs::write(&path, "A,B\n1\n").unwrap();
        let ds = read_csv(&path).unwrap();
        assert_eq!(ds.rows()[0], vec![CellValue::Number(1.0), CellValue::Missing]);
    }

    #[test]
    fn test_header_only_file_keeps_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("header.csv");
        std::fs::write(&path, "Name,Status\n").unwrap();
        let ds = read_csv(&path).unwrap();
        assert_eq!(ds.columns().len(), 2);
        assert_eq!(ds.len(), 0);
    }
}
