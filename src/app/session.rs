// StatusBoard - app/session.rs
//
// Session persistence: the state that has to survive between two command
// invocations. That is the last page shown, the delete-confirmation state
// (so "clear" needs two separate runs), and the last export path.
//
// - Saved atomically (write temp, rename) so a crash never corrupts the
//   previous session.
// - Load errors are discarded: a corrupt or incompatible session just
//   starts fresh.

use crate::app::state::DeleteConfirm;
use crate::core::model::Page;
use crate::platform::fs::write_atomic;
use crate::util::constants::SESSION_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment whenever `SessionData` changes in a breaking way. Version
/// mismatches silently discard the session.
pub const SESSION_VERSION: u32 = 1;

/// Complete persistent session snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version; must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    /// Page of the last command.
    #[serde(default)]
    pub page: Page,

    /// Two-step clear confirmation.
    #[serde(default)]
    pub delete_confirm: DeleteConfirm,

    /// File written by the most recent export.
    #[serde(default)]
    pub last_export: Option<PathBuf>,
}

impl Default for SessionData {
    fn default() -> Self {
        Self {
            version: SESSION_VERSION,
            page: Page::default(),
            delete_confirm: DeleteConfirm::default(),
            last_export: None,
        }
    }
}

/// Resolve the session file path from the data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Save `data` to `path` atomically.
///
/// Returns a descriptive error string for a tracing warn! call; callers
/// log it and carry on.
pub fn save(data: &SessionData, path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| format!("failed to serialise session: {e}"))?;

    write_atomic(path, json.as_bytes())
        .map_err(|e| format!("failed to write session file '{}': {e}", path.display()))?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

/// Load and validate a `SessionData` from `path`.
///
/// Returns `None` on any error (not found, bad JSON, version mismatch).
pub fn load(path: &Path) -> Option<SessionData> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read session file");
            }
        })
        .ok()?;

    let data: SessionData = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Session file is malformed, starting fresh"
            );
        })
        .ok()?;

    if data.version != SESSION_VERSION {
        tracing::warn!(
            found = data.version,
            expected = SESSION_VERSION,
            "Session file version mismatch, starting fresh"
        );
        return None;
    }

    tracing::debug!(path = %path.display(), "Session file loaded");
    Some(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn armed_session() -> SessionData {
        SessionData {
            version: SESSION_VERSION,
            page: Page::Edit,
            delete_confirm: DeleteConfirm::Armed,
            last_export: Some(PathBuf::from("/tmp/filtered_export_20260101_000000.xlsx")),
        }
    }

    #[test]
    fn test_session_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        save(&armed_session(), &path).expect("save should succeed");
        assert_eq!(load(&path), Some(armed_session()));
    }

    #[test]
    fn test_session_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join("nonexistent.json")).is_none());
    }

    #[test]
    fn test_session_load_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn test_session_load_wrong_version_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        let mut data = armed_session();
        data.version = 99;
        save(&data, &path).unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        std::fs::write(&path, format!("{{\"version\": {SESSION_VERSION}}}")).unwrap();
        assert_eq!(load(&path), Some(SessionData::default()));
    }

    #[test]
    fn test_session_json_uses_readable_names() {
        let json = serde_json::to_string(&armed_session()).unwrap();
        assert!(json.contains("\"page\":\"edit\""), "{json}");
        assert!(json.contains("\"delete_confirm\":\"armed\""), "{json}");
    }
}
