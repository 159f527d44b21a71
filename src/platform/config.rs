// StatusBoard - platform/config.rs
//
// Platform-specific configuration, data directory resolution, and
// config.toml loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::export::ExportFormat;
use crate::core::metrics::StatusKeywords;
use crate::core::roles::RoleKeywords;
use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for StatusBoard data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/statusboard/ or %APPDATA%\StatusBoard\config\)
    pub config_dir: PathBuf,

    /// Data directory holding the persisted dataset and the session file.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback.join("data"),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still loads in
/// an older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub storage: StorageSection,
    pub export: ExportSection,
    pub roles: RolesSection,
    pub metrics: MetricsSection,
    pub logging: LoggingSection,
}

/// `[storage]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct StorageSection {
    /// Directory holding the dataset file (overrides the platform data dir).
    pub data_dir: Option<String>,
    /// Dataset file name within the data directory.
    pub data_file: Option<String>,
}

/// `[export]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Directory exports are written to (default: the data directory).
    pub directory: Option<String>,
    /// "xlsx" or "csv".
    pub format: Option<String>,
    /// Refuse exports larger than this many rows.
    pub max_rows: Option<usize>,
}

/// `[roles]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RolesSection {
    pub status_keywords: Option<Vec<String>>,
    pub date_keywords: Option<Vec<String>>,
}

/// `[metrics]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct MetricsSection {
    pub completed_keywords: Option<Vec<String>>,
    pub in_progress_keywords: Option<Vec<String>>,
    pub pending_keywords: Option<Vec<String>>,
    /// Bin count of the numeric histogram fallback.
    pub histogram_bins: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- Storage --
    /// Data directory override; None = platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Dataset file name.
    pub data_file: String,

    // -- Export --
    /// Export directory override; None = data directory.
    pub export_dir: Option<PathBuf>,
    pub export_format: ExportFormat,
    pub max_export_rows: usize,

    // -- Heuristics --
    pub role_keywords: RoleKeywords,
    pub status_keywords: StatusKeywords,
    pub histogram_bins: usize,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            data_file: constants::DEFAULT_DATA_FILE_NAME.to_string(),
            export_dir: None,
            export_format: ExportFormat::default(),
            max_export_rows: constants::DEFAULT_MAX_EXPORT_ROWS,
            role_keywords: RoleKeywords::default(),
            status_keywords: StatusKeywords::default(),
            histogram_bins: constants::DEFAULT_HISTOGRAM_BINS,
            log_level: None,
            log_file: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unparseable, returns defaults with a warning; the
/// application still starts but the user is told.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults. \
                 See config.example.toml for the expected format.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

/// Check every field of a parsed config against the limits in `constants`,
/// accumulating all warnings rather than stopping at the first.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Storage --
    if let Some(dir) = raw.storage.data_dir.filter(|d| !d.trim().is_empty()) {
        config.data_dir = Some(PathBuf::from(dir));
    }
    if let Some(file) = raw.storage.data_file {
        let trimmed = file.trim();
        if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
            warnings.push(format!(
                "[storage] data_file = \"{file}\" must be a plain file name. Using default ({}).",
                constants::DEFAULT_DATA_FILE_NAME,
            ));
        } else {
            config.data_file = trimmed.to_string();
        }
    }

    // -- Export --
    if let Some(dir) = raw.export.directory.filter(|d| !d.trim().is_empty()) {
        config.export_dir = Some(PathBuf::from(dir));
    }
    if let Some(ref format) = raw.export.format {
        match format.parse::<ExportFormat>() {
            Ok(f) => config.export_format = f,
            Err(_) => warnings.push(format!(
                "[export] format = \"{format}\" is not recognised. \
                 Expected \"xlsx\" or \"csv\". Using default ({}).",
                ExportFormat::default(),
            )),
        }
    }
    if let Some(rows) = raw.export.max_rows {
        if (1..=constants::ABSOLUTE_MAX_EXPORT_ROWS).contains(&rows) {
            config.max_export_rows = rows;
        } else {
            warnings.push(format!(
                "[export] max_rows = {rows} is out of range (1-{}). Using default ({}).",
                constants::ABSOLUTE_MAX_EXPORT_ROWS,
                constants::DEFAULT_MAX_EXPORT_ROWS,
            ));
        }
    }

    // -- Keyword lists --
    if let Some(list) = keyword_list("[roles] status_keywords", raw.roles.status_keywords, warnings) {
        config.role_keywords.status = list;
    }
    if let Some(list) = keyword_list("[roles] date_keywords", raw.roles.date_keywords, warnings) {
        config.role_keywords.date = list;
    }
    if let Some(list) = keyword_list("[metrics] completed_keywords", raw.metrics.completed_keywords, warnings) {
        config.status_keywords.completed = list;
    }
    if let Some(list) = keyword_list("[metrics] in_progress_keywords", raw.metrics.in_progress_keywords, warnings) {
        config.status_keywords.in_progress = list;
    }
    if let Some(list) = keyword_list("[metrics] pending_keywords", raw.metrics.pending_keywords, warnings) {
        config.status_keywords.pending = list;
    }

    // -- Metrics: histogram_bins --
    if let Some(bins) = raw.metrics.histogram_bins {
        if (constants::MIN_HISTOGRAM_BINS..=constants::MAX_HISTOGRAM_BINS).contains(&bins) {
            config.histogram_bins = bins;
        } else {
            warnings.push(format!(
                "[metrics] histogram_bins = {bins} is out of range ({}-{}). Using default ({}).",
                constants::MIN_HISTOGRAM_BINS,
                constants::MAX_HISTOGRAM_BINS,
                constants::DEFAULT_HISTOGRAM_BINS,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file.clone());
        }
    }

    config
}

/// Normalise a configured keyword list: trim, lowercase, drop blanks.
///
/// Returns None (keep the default) when the list is empty after cleaning
/// or longer than `MAX_KEYWORDS_PER_LIST`.
fn keyword_list(field: &str, raw: Option<Vec<String>>, warnings: &mut Vec<String>) -> Option<Vec<String>> {
    let raw = raw?;
    let cleaned: Vec<String> = raw
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    if cleaned.is_empty() {
        warnings.push(format!("{field} is empty. Using default keywords."));
        return None;
    }
    if cleaned.len() > constants::MAX_KEYWORDS_PER_LIST {
        warnings.push(format!(
            "{field} has {} keywords (maximum {}). Using default keywords.",
            cleaned.len(),
            constants::MAX_KEYWORDS_PER_LIST,
        ));
        return None;
    }
    Some(cleaned)
}
