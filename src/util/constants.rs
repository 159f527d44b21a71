// StatusBoard - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "StatusBoard";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "StatusBoard";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Storage
// =============================================================================

/// File name of the persisted dataset inside the data directory.
pub const DEFAULT_DATA_FILE_NAME: &str = "project_data.csv";

/// Suffix appended to the dataset path while an atomic save is in flight.
pub const TEMP_FILE_SUFFIX: &str = "tmp";

/// Header given to a column whose name is blank in the source file.
/// The column index is appended: `Unnamed: 3`.
pub const UNNAMED_COLUMN_PREFIX: &str = "Unnamed: ";

// =============================================================================
// Role inference keywords
// =============================================================================

/// Substrings that mark a column as the status/progress column.
pub const DEFAULT_STATUS_KEYWORDS: &[&str] = &["status", "state", "progress", "stage"];

/// Substrings that mark a column as the date/timestamp column.
pub const DEFAULT_DATE_KEYWORDS: &[&str] = &["date", "time", "created", "updated"];

// =============================================================================
// Metric keywords
// =============================================================================

/// Status text fragments counted as "completed".
pub const DEFAULT_COMPLETED_KEYWORDS: &[&str] = &["complete", "done", "finished"];

/// Status text fragments counted as "in progress".
pub const DEFAULT_IN_PROGRESS_KEYWORDS: &[&str] = &["progress", "ongoing", "active"];

/// Status text fragments counted as "pending".
pub const DEFAULT_PENDING_KEYWORDS: &[&str] = &["pending", "not started", "new"];

/// Maximum number of keywords accepted in any one configured keyword list.
pub const MAX_KEYWORDS_PER_LIST: usize = 64;

// =============================================================================
// Charts
// =============================================================================

/// Default number of equal-width bins for the numeric histogram fallback.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Minimum configurable histogram bin count.
pub const MIN_HISTOGRAM_BINS: usize = 1;

/// Maximum configurable histogram bin count.
pub const MAX_HISTOGRAM_BINS: usize = 200;

/// Width in characters of the longest bar in text charts.
pub const CHART_BAR_WIDTH: usize = 40;

// =============================================================================
// Rendering
// =============================================================================

/// Rows shown in the upload preview table.
pub const PREVIEW_ROWS: usize = 10;

/// Cells wider than this are truncated with an ellipsis in text tables.
pub const MAX_CELL_WIDTH: usize = 32;

// =============================================================================
// Export
// =============================================================================

/// File name stem of filtered exports; the timestamp follows.
pub const EXPORT_FILE_PREFIX: &str = "filtered_export";

/// chrono format of the export timestamp (sortable, second resolution).
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Worksheet name used for exported workbooks.
pub const EXPORT_SHEET_NAME: &str = "Sheet1";

/// Maximum number of collision suffixes tried for one export timestamp.
pub const MAX_EXPORT_NAME_ATTEMPTS: usize = 1_000;

/// Default cap on rows written by a single export.
pub const DEFAULT_MAX_EXPORT_ROWS: usize = 1_000_000;

/// Hard upper bound on rows in one XLSX worksheet (format limit minus header).
pub const ABSOLUTE_MAX_EXPORT_ROWS: usize = 1_048_575;

/// Columns in one XLSX worksheet (format limit).
pub const MAX_XLSX_COLUMNS: usize = 16_384;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the data directory).
pub const SESSION_FILE_NAME: &str = "session.json";
