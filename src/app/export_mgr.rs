// StatusBoard - app/export_mgr.rs
//
// Writes a filtered view to a new, timestamped file in the export
// directory. Existing files are never overwritten: names are claimed with
// create-new and a `_N` suffix is added on collision.

use crate::core::export::{build_workbook, export_csv, ExportFormat};
use crate::core::filter::View;
use crate::util::constants;
use crate::util::error::ExportError;
use chrono::{Local, NaiveDateTime};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Export `view` into `directory`, stamped with the current local time.
///
/// Returns the path of the file written.
pub fn export_view(
    view: &View<'_>,
    directory: &Path,
    format: ExportFormat,
    max_rows: usize,
) -> Result<PathBuf, ExportError> {
    export_view_at(view, directory, format, max_rows, Local::now().naive_local())
}

/// `export_view` with an explicit timestamp.
pub fn export_view_at(
    view: &View<'_>,
    directory: &Path,
    format: ExportFormat,
    max_rows: usize,
    now: NaiveDateTime,
) -> Result<PathBuf, ExportError> {
    if view.len() > max_rows {
        return Err(ExportError::TooManyRows {
            count: view.len(),
            max: max_rows,
        });
    }

    std::fs::create_dir_all(directory).map_err(|e| ExportError::Io {
        path: directory.to_path_buf(),
        source: e,
    })?;

    let stem = format!(
        "{}_{}",
        constants::EXPORT_FILE_PREFIX,
        now.format(constants::EXPORT_TIMESTAMP_FORMAT)
    );
    let (path, file) = claim_file_name(directory, &stem, format.extension())?;

    let result = match format {
        ExportFormat::Csv => export_csv(view, io::BufWriter::new(&file), &path).map(|_| ()),
        ExportFormat::Xlsx => build_workbook(view, constants::EXPORT_SHEET_NAME, &path).and_then(|bytes| {
            (&file).write_all(&bytes).map_err(|e| ExportError::Io {
                path: path.clone(),
                source: e,
            })
        }),
    };

    if let Err(e) = result {
        // Do not leave a half-written export behind under a claimed name.
        drop(file);
        let _ = std::fs::remove_file(&path);
        return Err(e);
    }

    tracing::info!(
        path = %path.display(),
        rows = view.len(),
        columns = view.column_indices().len(),
        format = %format,
        "View exported"
    );
    Ok(path)
}

/// Create the first free `<stem>[_N].<ext>` in `directory`.
fn claim_file_name(directory: &Path, stem: &str, ext: &str) -> Result<(PathBuf, File), ExportError> {
    for attempt in 0..constants::MAX_EXPORT_NAME_ATTEMPTS {
        let name = if attempt == 0 {
            format!("{stem}.{ext}")
        } else {
            format!("{stem}_{attempt}.{ext}")
        };
        let path = directory.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                tracing::debug!(path = %path.display(), "Export name taken; trying next suffix");
            }
            Err(e) => return Err(ExportError::Io { path, source: e }),
        }
    }
    Err(ExportError::NameExhausted {
        directory: directory.to_path_buf(),
        stem: stem.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::filter_by_values;
    use crate::core::model::{CellValue, Dataset};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(15, 9, 26)
            .unwrap()
    }

    fn sample() -> Dataset {
        Dataset::new(
            vec!["Item".into(), "Status".into()],
            vec![
                vec![CellValue::from("a"), CellValue::from("Done")],
                vec![CellValue::from("b"), CellValue::from("Pending")],
                vec![CellValue::from("c"), CellValue::from("Done")],
            ],
        )
    }

    #[test]
    fn test_export_name_is_timestamped() {
        let dir = TempDir::new().unwrap();
        let ds = sample();
        let path = export_view_at(&View::full(&ds), dir.path(), ExportFormat::Csv, 100, fixed_now()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "filtered_export_20260314_150926.csv"
        );
    }

    #[test]
    fn test_same_second_exports_get_distinct_names() {
        let dir = TempDir::new().unwrap();
        let ds = sample();
        let view = View::full(&ds);
        let first = export_view_at(&view, dir.path(), ExportFormat::Csv, 100, fixed_now()).unwrap();
        let first_bytes = std::fs::read(&first).unwrap();

        let narrowed = filter_by_values(&view, "Status", &[CellValue::from("Done")]);
        let second = export_view_at(&narrowed, dir.path(), ExportFormat::Csv, 100, fixed_now()).unwrap();
        let third = export_view_at(&narrowed, dir.path(), ExportFormat::Csv, 100, fixed_now()).unwrap();

        assert_ne!(first, second);
        assert!(second.to_string_lossy().ends_with("_1.csv"));
        assert!(third.to_string_lossy().ends_with("_2.csv"));
        assert_eq!(std::fs::read(&first).unwrap(), first_bytes, "earlier export untouched");
    }

    #[test]
    fn test_csv_export_contains_exactly_the_view() {
        let dir = TempDir::new().unwrap();
        let ds = sample();
        let view = filter_by_values(&View::full(&ds), "Status", &[CellValue::from("Done")]);
        let path = export_view_at(&view, dir.path(), ExportFormat::Csv, 100, fixed_now()).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text, "Item,Status\na,Done\nc,Done\n");
    }

    #[test]
    fn test_xlsx_export_writes_workbook() {
        let dir = TempDir::new().unwrap();
        let ds = sample();
        let path = export_view_at(&View::full(&ds), dir.path().join("exports").as_path(), ExportFormat::Xlsx, 100, fixed_now())
            .unwrap();
        assert_eq!(path.extension().unwrap(), "xlsx");
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_too_many_rows_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let ds = sample();
        let err = export_view_at(&View::full(&ds), dir.path(), ExportFormat::Csv, 2, fixed_now()).unwrap_err();
        assert!(matches!(err, ExportError::TooManyRows { count: 3, max: 2 }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
