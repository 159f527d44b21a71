// StatusBoard - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error keeps its causal source so it can be logged in full and
// shown to the user as a single readable line.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all StatusBoard operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum StatusBoardError {
    /// Reading or writing the persisted dataset failed.
    Store(StoreError),

    /// An uploaded spreadsheet could not be read.
    Upload(UploadError),

    /// Writing an export file failed.
    Export(ExportError),

    /// A grid edit referenced a row or column that does not exist.
    Edit(EditError),
}

impl fmt::Display for StatusBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "Storage error: {e}"),
            Self::Upload(e) => write!(f, "Upload error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Edit(e) => write!(f, "Edit error: {e}"),
        }
    }
}

impl std::error::Error for StatusBoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Upload(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Edit(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

/// Errors reading or writing the persisted dataset file.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure (create dir, write temp file, rename, remove).
    Io { path: PathBuf, source: io::Error },

    /// CSV encoding or decoding failure.
    Csv { path: PathBuf, source: csv::Error },

    /// A data row has more fields than the header declares.
    RaggedRow {
        path: PathBuf,
        row: usize,
        fields: usize,
        columns: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Dataset I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "Dataset CSV error '{}': {source}", path.display())
            }
            Self::RaggedRow {
                path,
                row,
                fields,
                columns,
            } => write!(
                f,
                "Dataset '{}' row {row} has {fields} fields but the header has {columns} columns",
                path.display()
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::RaggedRow { .. } => None,
        }
    }
}

impl From<StoreError> for StatusBoardError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

// ---------------------------------------------------------------------------
// Upload errors
// ---------------------------------------------------------------------------

/// Errors reading an uploaded spreadsheet.
#[derive(Debug)]
pub enum UploadError {
    /// File extension is not one of the accepted spreadsheet formats.
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The workbook could not be opened or a sheet could not be read.
    Workbook {
        path: PathBuf,
        source: calamine::Error,
    },

    /// The workbook contains no worksheets.
    NoSheets { path: PathBuf },

    /// CSV upload could not be decoded.
    Csv { path: PathBuf, source: StoreError },

    /// I/O error opening the uploaded file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat { path, extension } => write!(
                f,
                "'{}': unsupported file type '{extension}'. \
                 Expected .xlsx, .xlsm, .xlsb, .xls, .ods or .csv",
                path.display()
            ),
            Self::Workbook { path, source } => {
                write!(f, "Error reading workbook '{}': {source}", path.display())
            }
            Self::NoSheets { path } => {
                write!(f, "Workbook '{}' contains no worksheets", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "Error reading CSV '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Error opening '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for UploadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Workbook { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<UploadError> for StatusBoardError {
    fn from(e: UploadError) -> Self {
        Self::Upload(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// Workbook serialisation error.
    Xlsx {
        path: PathBuf,
        source: rust_xlsxwriter::XlsxError,
    },

    /// Every candidate file name for this timestamp is already taken.
    NameExhausted { directory: PathBuf, stem: String },

    /// Export would exceed maximum row count.
    TooManyRows { count: usize, max: usize },

    /// The view has more columns than one worksheet can hold.
    TooManyColumns { count: usize, max: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Xlsx { path, source } => {
                write!(f, "XLSX export error '{}': {source}", path.display())
            }
            Self::NameExhausted { directory, stem } => write!(
                f,
                "No free export file name for '{stem}' in '{}'",
                directory.display()
            ),
            Self::TooManyRows { count, max } => write!(
                f,
                "Export of {count} rows exceeds maximum of {max}. \
                 Apply filters to reduce the result set."
            ),
            Self::TooManyColumns { count, max } => write!(
                f,
                "Export of {count} columns exceeds the worksheet maximum of {max}. \
                 Select fewer columns or export as CSV."
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Xlsx { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExportError> for StatusBoardError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Edit errors
// ---------------------------------------------------------------------------

/// Errors from grid edits on a loaded dataset.
#[derive(Debug)]
pub enum EditError {
    /// Row index is past the end of the dataset.
    RowOutOfRange { row: usize, rows: usize },

    /// No column with this name exists.
    UnknownColumn { column: String },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowOutOfRange { row, rows } => {
                write!(f, "Row {row} does not exist (dataset has {rows} rows)")
            }
            Self::UnknownColumn { column } => write!(f, "Unknown column '{column}'"),
        }
    }
}

impl std::error::Error for EditError {}

impl From<EditError> for StatusBoardError {
    fn from(e: EditError) -> Self {
        Self::Edit(e)
    }
}

/// Convenience type alias for StatusBoard results.
pub type Result<T> = std::result::Result<T, StatusBoardError>;
