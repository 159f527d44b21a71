// StatusBoard - app/upload.rs
//
// Reads an uploaded spreadsheet into a Dataset. Workbooks go through
// calamine (first sheet, first row is the header); CSV files reuse the
// store's reader.

use crate::app::store::read_csv;
use crate::core::model::{CellValue, Dataset};
use crate::util::error::UploadError;
use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDateTime;
use std::path::Path;

/// Workbook extensions calamine can open.
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Read `path` according to its extension.
///
/// Rows in which every cell is empty are dropped.
pub fn read_spreadsheet(path: &Path) -> Result<Dataset, UploadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let dataset = if extension == "csv" {
        read_csv(path).map_err(|e| UploadError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
    } else if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        read_workbook(path)?
    } else {
        return Err(UploadError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        });
    };

    tracing::info!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "Spreadsheet read"
    );
    Ok(dataset)
}

fn read_workbook(path: &Path) -> Result<Dataset, UploadError> {
    if !path.is_file() {
        return Err(UploadError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| UploadError::Workbook {
        path: path.to_path_buf(),
        source: e,
    })?;

    let sheet_name = workbook.sheet_names().first().cloned();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| UploadError::NoSheets {
            path: path.to_path_buf(),
        })?
        .map_err(|e| UploadError::Workbook {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(
        path = %path.display(),
        sheet = sheet_name.as_deref().unwrap_or("?"),
        height = range.height(),
        width = range.width(),
        "Reading first worksheet"
    );

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Dataset::empty());
    };
    let columns: Vec<String> = header.iter().map(|c| to_cell(c).to_text()).collect();

    let body: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(to_cell).collect::<Vec<_>>())
        .filter(|row| !row.iter().all(CellValue::is_missing))
        .collect();

    Ok(Dataset::new(columns, body))
}

/// Map one spreadsheet cell onto the typed cell model.
fn to_cell(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) if f.is_finite() => CellValue::Number(*f),
        Data::Float(f) => CellValue::Text(f.to_string()),
        Data::String(s) if s.is_empty() => CellValue::Missing,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => CellValue::Date(ndt),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Missing,
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(chrono::NaiveTime::MIN))
        })
}
