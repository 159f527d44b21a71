// StatusBoard - bin/samples.rs
//
// Writes the two demonstration workbooks (projects and inventory) for
// trying out uploads and the dashboard.

use clap::Parser;
use statusboard::core::export::build_workbook;
use statusboard::core::filter::View;
use statusboard::core::metrics::category_distribution;
use statusboard::core::sample::{self, SampleSheet};
use statusboard::platform::fs::write_atomic;
use statusboard::util;
use statusboard::util::error::{ExportError, Result};
use std::path::Path;
use std::path::PathBuf;

/// Generate sample spreadsheets for StatusBoard.
#[derive(Parser, Debug)]
#[command(name = "statusboard-samples", version, about)]
struct Cli {
    /// Output directory (created if missing).
    #[arg(default_value = "data")]
    out_dir: PathBuf,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    util::logging::init(cli.debug, None, None);

    for sheet in sample::all() {
        match write_sample(&sheet, &cli.out_dir) {
            Ok(summary) => println!("{summary}"),
            Err(e) => {
                tracing::error!(error = %e, file = sheet.file_name, "Sample generation failed");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn write_sample(sheet: &SampleSheet, out_dir: &Path) -> Result<String> {
    let path = out_dir.join(sheet.file_name);
    let view = View::full(&sheet.dataset);
    let bytes = build_workbook(&view, sheet.sheet_name, &path)?;
    write_atomic(&path, &bytes).map_err(|e| ExportError::Io {
        path: path.clone(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), rows = sheet.dataset.len(), "Sample workbook written");

    let mut summary = format!(
        "Excel file created: {}\nTotal records: {}\nColumns: {}\n",
        path.display(),
        sheet.dataset.len(),
        sheet.dataset.columns().join(", ")
    );
    for column in sheet.breakdown_columns {
        summary.push_str(&format!("\n{column}:\n"));
        for (value, count) in category_distribution(&view, column) {
            summary.push_str(&format!("  {:<16}{count}\n", value.to_text()));
        }
    }
    Ok(summary)
}
