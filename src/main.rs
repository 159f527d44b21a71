// StatusBoard - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation (debug mode support)
// 3. Dispatch of one page action
// 4. Session save, output, exit status

use clap::{Parser, Subcommand};
use statusboard::app::pages::{build_dashboard, build_view, DashboardRequest, ViewRequest};
use statusboard::app::state::{AppState, GridEdit};
use statusboard::core::export::ExportFormat;
use statusboard::core::model::Page;
use statusboard::platform::config::{load_config, PlatformPaths};
use statusboard::ui::{dashboard, info};
use statusboard::util;
use statusboard::util::error::Result;
use std::path::PathBuf;

/// StatusBoard - spreadsheet-backed project and inventory status dashboard.
///
/// Upload a spreadsheet, edit it, and view keyword-driven status metrics,
/// distributions, trends and filtered exports. The dataset lives in a single
/// CSV file with no locking: concurrent runs that save race, and the last
/// save wins.
#[derive(Parser, Debug)]
#[command(name = "statusboard", version, about)]
struct Cli {
    /// Directory holding the dataset and session (overrides config and platform default).
    #[arg(long = "data-dir", global = true)]
    data_dir: Option<PathBuf>,

    /// Directory containing config.toml.
    #[arg(long = "config-dir", global = true)]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload a spreadsheet (.xlsx, .xlsm, .xlsb, .xls, .ods, .csv) and save it.
    Upload {
        file: PathBuf,

        /// Append to the existing data instead of replacing it.
        #[arg(long)]
        append: bool,
    },

    /// Show current database info.
    Info,

    /// Show the data grid, or change it.
    Edit {
        #[command(subcommand)]
        action: Option<EditAction>,
    },

    /// Delete all data. Must be run twice to take effect.
    Clear {
        /// Disarm a pending clear instead.
        #[arg(long)]
        cancel: bool,
    },

    /// Key metrics, status distribution, trends and a filterable breakdown.
    Dashboard {
        /// Keep only these status values in the breakdown (and export).
        #[arg(long, num_args = 1..)]
        only: Vec<String>,

        /// Numeric column for the histogram shown when there is no trend.
        #[arg(long)]
        histogram: Option<String>,

        /// Export the filtered breakdown.
        #[arg(long)]
        export: bool,

        /// Export format: xlsx or csv (default from config).
        #[arg(long)]
        format: Option<ExportFormat>,
    },

    /// View all data with column selection and search.
    View {
        /// Columns to display, comma separated.
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Case-insensitive search across the displayed columns.
        #[arg(long, default_value = "")]
        search: String,

        /// Also print summary statistics.
        #[arg(long)]
        stats: bool,

        /// Also print column types and missing values.
        #[arg(long)]
        info: bool,
    },
}

#[derive(Subcommand, Debug)]
enum EditAction {
    /// Set one cell. Rows are numbered from 0.
    Set { row: usize, column: String, value: String },

    /// Append a row from COLUMN=VALUE pairs; unlisted columns stay empty.
    AddRow {
        #[arg(value_parser = parse_assignment)]
        values: Vec<(String, String)>,
    },

    /// Delete one row.
    DeleteRow { row: usize },
}

fn parse_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(c, v)| (c.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected COLUMN=VALUE, got '{raw}'"))
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = PlatformPaths::resolve();
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform_paths.config_dir.clone());
    let (config, warnings) = load_config(&config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref(), config.log_file.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "StatusBoard starting"
    );

    for w in &warnings {
        tracing::warn!(warning = %w, "Config warning");
        eprintln!("Warning: {w}");
    }

    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .unwrap_or(platform_paths.data_dir);

    let mut state = AppState::new(config, &data_dir);
    let result = run(cli.command, &mut state);
    state.save_session();

    match result {
        Ok(output) => print!("{output}"),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(command: Command, state: &mut AppState) -> Result<String> {
    match command {
        Command::Upload { file, append } => {
            let outcome = state.upload(&file, append)?;
            Ok(info::render_upload(&outcome))
        }

        Command::Info => {
            state.enter(Page::Upload);
            Ok(info::render_database_info(&state.load_dataset()?))
        }

        Command::Edit { action } => {
            let edit = match action {
                None => {
                    state.enter(Page::Edit);
                    return Ok(info::render_grid(&state.load_dataset()?));
                }
                Some(EditAction::Set { row, column, value }) => GridEdit::SetCell { row, column, value },
                Some(EditAction::AddRow { values }) => GridEdit::AddRow(values),
                Some(EditAction::DeleteRow { row }) => GridEdit::DeleteRow(row),
            };
            let dataset = state.edit(&edit)?;
            Ok(format!("Changes saved. Total Records: {}\n", dataset.len()))
        }

        Command::Clear { cancel } => {
            if cancel {
                let msg = if state.cancel_clear() {
                    "Pending clear cancelled.\n"
                } else {
                    "No clear was pending.\n"
                };
                return Ok(msg.to_string());
            }
            Ok(info::render_clear(state.request_clear()?))
        }

        Command::Dashboard {
            only,
            histogram,
            export,
            format,
        } => {
            state.enter(Page::Dashboard);
            let dataset = state.load_dataset()?;
            if dataset.is_empty() {
                return Ok(info::render_no_data());
            }
            let request = DashboardRequest {
                only,
                histogram_column: histogram,
            };
            let report = build_dashboard(&dataset, &request, &state.config);
            let mut output = dashboard::render_dashboard(&report);
            if export {
                let path = state.export(&report.breakdown, format)?;
                output.push_str(&format!("\nData exported to {}\n", path.display()));
            }
            Ok(output)
        }

        Command::View {
            columns,
            search,
            stats,
            info: show_info,
        } => {
            state.enter(Page::ViewAll);
            let dataset = state.load_dataset()?;
            if dataset.is_empty() {
                return Ok(info::render_no_data());
            }
            let report = build_view(&dataset, &ViewRequest { columns, search });
            let mut output = info::render_view(&report);
            if stats {
                output.push('\n');
                output.push_str(&info::render_summary(&dataset));
            }
            if show_info {
                output.push('\n');
                output.push_str(&info::render_data_info(&dataset));
            }
            Ok(output)
        }
    }
}
