// StatusBoard - core/export.rs
//
// Serialises a filtered view to CSV or XLSX bytes.
// Core layer: writes to any Write trait object or an in-memory buffer;
// choosing the destination file is the app layer's job.

use crate::core::filter::View;
use crate::core::model::CellValue;
use crate::util::constants;
use crate::util::error::ExportError;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xlsx" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("unknown export format '{other}' (expected xlsx or csv)")),
        }
    }
}

/// Export the view to CSV: a header row of the displayed column names, then
/// one record per row in view order. Missing cells are empty fields.
///
/// Returns the number of data rows written.
pub fn export_csv<W: Write>(view: &View<'_>, writer: W, export_path: &Path) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(view.column_names()).map_err(csv_err)?;

    let mut count = 0;
    for row in view.iter_rows() {
        csv_writer
            .write_record(row.iter().map(|cell| cell.to_text()))
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Build a single-sheet workbook holding the view.
///
/// The header row is bold. Numbers are written as numbers; text and dates
/// as strings (dates in `YYYY-MM-DD[ HH:MM:SS]` form). Missing cells are
/// left blank.
pub fn build_workbook(view: &View<'_>, sheet_name: &str, export_path: &Path) -> Result<Vec<u8>, ExportError> {
    let xlsx_err = |e| ExportError::Xlsx {
        path: export_path.to_path_buf(),
        source: e,
    };

    let column_count = view.column_indices().len();
    let column_number = |c: usize| {
        u16::try_from(c)
            .ok()
            .filter(|_| c < constants::MAX_XLSX_COLUMNS)
            .ok_or(ExportError::TooManyColumns {
                count: column_count,
                max: constants::MAX_XLSX_COLUMNS,
            })
    };

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name).map_err(xlsx_err)?;

    for (col, name) in view.column_names().into_iter().enumerate() {
        sheet
            .write_string_with_format(0, column_number(col)?, name, &header)
            .map_err(xlsx_err)?;
    }

    for (r, cells) in view.iter_rows().enumerate() {
        let row = u32::try_from(r + 1).map_err(|_| ExportError::TooManyRows {
            count: view.len(),
            max: constants::ABSOLUTE_MAX_EXPORT_ROWS,
        })?;
        for (c, cell) in cells.into_iter().enumerate() {
            let col = column_number(c)?;
            match cell {
                CellValue::Number(n) => {
                    sheet.write_number(row, col, *n).map_err(xlsx_err)?;
                }
                CellValue::Missing => {}
                other => {
                    sheet.write_string(row, col, other.to_text()).map_err(xlsx_err)?;
                }
            }
        }
    }

    workbook.save_to_buffer().map_err(xlsx_err)
}
