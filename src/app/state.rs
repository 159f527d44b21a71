// StatusBoard - app/state.rs
//
// Application state for one command invocation: validated config, the
// dataset store, and the persisted session. Every page action goes
// through here so that session bookkeeping (current page, delete
// confirmation, last export) happens in one place.

use crate::app::export_mgr;
use crate::app::session::{self, SessionData};
use crate::app::store::TabularStore;
use crate::app::upload;
use crate::core::export::ExportFormat;
use crate::core::filter::View;
use crate::core::model::{CellValue, Dataset, Page};
use crate::platform::config::AppConfig;
use crate::util::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// =============================================================================
// Delete confirmation
// =============================================================================

/// Two-step confirmation for clearing the dataset.
///
/// The first request arms it; the second performs the delete and returns
/// to Idle. Persisted in the session, so the two requests may come from
/// separate runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteConfirm {
    #[default]
    Idle,
    Armed,
}

/// What a clear request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Nothing deleted yet; the next request deletes.
    Armed,
    /// The dataset was deleted.
    Deleted,
}

impl DeleteConfirm {
    /// Advance the machine by one request.
    pub fn press(&mut self) -> ClearOutcome {
        match self {
            DeleteConfirm::Idle => {
                *self = DeleteConfirm::Armed;
                ClearOutcome::Armed
            }
            DeleteConfirm::Armed => {
                *self = DeleteConfirm::Idle;
                ClearOutcome::Deleted
            }
        }
    }

    /// Disarm. Returns true if it was armed.
    pub fn cancel(&mut self) -> bool {
        std::mem::take(self) == DeleteConfirm::Armed
    }
}

// =============================================================================
// Edits
// =============================================================================

/// One grid edit from the Edit page. Values are raw text, typed with
/// `CellValue::parse` when applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEdit {
    SetCell {
        row: usize,
        column: String,
        value: String,
    },
    AddRow(Vec<(String, String)>),
    DeleteRow(usize),
}

impl GridEdit {
    /// Apply to `dataset` in place.
    pub fn apply(&self, dataset: &mut Dataset) -> std::result::Result<(), crate::util::error::EditError> {
        match self {
            GridEdit::SetCell { row, column, value } => dataset.set_cell(*row, column, CellValue::parse(value)),
            GridEdit::AddRow(values) => dataset.push_row(
                values
                    .iter()
                    .map(|(c, v)| (c.clone(), CellValue::parse(v)))
                    .collect(),
            ),
            GridEdit::DeleteRow(row) => dataset.remove_row(*row).map(|_| ()),
        }
    }
}

/// Result of an upload: what the file held and what is now stored.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub uploaded: Dataset,
    pub stored: Dataset,
    pub appended: bool,
}

// =============================================================================
// AppState
// =============================================================================

#[derive(Debug)]
pub struct AppState {
    /// Validated configuration.
    pub config: AppConfig,

    /// Persisted dataset.
    pub store: TabularStore,

    /// Directory filtered exports are written to.
    pub export_dir: PathBuf,

    /// Session carried between invocations.
    pub session: SessionData,

    session_path: PathBuf,
}

impl AppState {
    /// Build state rooted at `data_dir`, restoring any saved session.
    pub fn new(config: AppConfig, data_dir: &Path) -> Self {
        let store = TabularStore::new(data_dir.join(&config.data_file));
        let export_dir = config
            .export_dir
            .clone()
            .unwrap_or_else(|| data_dir.to_path_buf());
        let session_path = session::session_path(data_dir);
        let session = session::load(&session_path).unwrap_or_default();

        tracing::debug!(
            dataset = %store.path().display(),
            exports = %export_dir.display(),
            page = %session.page,
            delete_confirm = ?session.delete_confirm,
            "Application state ready"
        );

        Self {
            config,
            store,
            export_dir,
            session,
            session_path,
        }
    }

    /// Record the page being shown.
    pub fn enter(&mut self, page: Page) {
        self.session.page = page;
    }

    /// Persist the session. Failures are logged, never fatal.
    pub fn save_session(&self) {
        if let Err(e) = session::save(&self.session, &self.session_path) {
            tracing::warn!(error = %e, "Could not save session");
        }
    }

    /// Current persisted dataset (re-read from disk).
    pub fn load_dataset(&self) -> Result<Dataset> {
        Ok(self.store.load()?)
    }

    /// Read a spreadsheet and either replace the stored dataset or append to it.
    pub fn upload(&mut self, path: &Path, append: bool) -> Result<UploadOutcome> {
        self.enter(Page::Upload);
        let uploaded = upload::read_spreadsheet(path)?;
        let stored = if append {
            self.store.append(&uploaded)?
        } else {
            self.store.save(&uploaded)?;
            uploaded.clone()
        };
        Ok(UploadOutcome {
            uploaded,
            stored,
            appended: append,
        })
    }

    /// Apply one grid edit to the stored dataset and save it.
    pub fn edit(&mut self, edit: &GridEdit) -> Result<Dataset> {
        self.enter(Page::Edit);
        let mut dataset = self.store.load()?;
        edit.apply(&mut dataset)?;
        self.store.save(&dataset)?;
        tracing::info!(edit = ?edit, rows = dataset.len(), "Edit saved");
        Ok(dataset)
    }

    /// One press of the clear button.
    ///
    /// The first call only arms the confirmation; the second deletes. If the
    /// delete fails the confirmation stays armed.
    pub fn request_clear(&mut self) -> Result<ClearOutcome> {
        self.enter(Page::Edit);
        let mut next = self.session.delete_confirm;
        let outcome = next.press();
        if outcome == ClearOutcome::Deleted {
            self.store.clear()?;
        }
        self.session.delete_confirm = next;
        tracing::info!(outcome = ?outcome, "Clear requested");
        Ok(outcome)
    }

    /// Disarm a pending clear. Returns true if one was pending.
    pub fn cancel_clear(&mut self) -> bool {
        self.enter(Page::Edit);
        let was_armed = self.session.delete_confirm.cancel();
        tracing::info!(was_armed, "Clear cancelled");
        was_armed
    }

    /// Export a view in `format` (or the configured default).
    pub fn export(&mut self, view: &View<'_>, format: Option<ExportFormat>) -> Result<PathBuf> {
        let format = format.unwrap_or(self.config.export_format);
        let path = export_mgr::export_view(view, &self.export_dir, format, self.config.max_export_rows)?;
        self.session.last_export = Some(path.clone());
        Ok(path)
    }
}
