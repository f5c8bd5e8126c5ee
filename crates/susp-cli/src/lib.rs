//! The two pipeline stages behind the `sheet-to-json` and `json-to-step`
//! binaries.

pub mod config;

use std::path::{Path, PathBuf};

use anyhow::Context;
use file_format::{
    color_table_path, export_step, load_car_documents, save_sheets, save_vehicle_setup,
    write_color_table, write_step,
};
use sheet_parser::{extract_workbook, parse_reference_distance, Workbook};
use solid_kernel::TruckKernel;
use suspension_geometry::{build_car, BuildConfig};
use tracing::{info, warn};

pub use config::CliConfig;

/// Initialize logging from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();
}

/// The single input path argument, or a usage error.
pub fn input_path(args: impl IntoIterator<Item = String>, usage: &str) -> anyhow::Result<PathBuf> {
    let mut args = args.into_iter().skip(1);
    match (args.next(), args.next()) {
        (Some(path), None) => Ok(PathBuf::from(path)),
        _ => anyhow::bail!("usage: {usage}"),
    }
}

/// Summary of one extraction run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractSummary {
    pub sheets_written: usize,
    pub setup_path: PathBuf,
}

/// Extract every sheet of a workbook and write the JSON documents plus
/// `Vehicle_Setup.json` into `results_dir`.
pub fn sheet_to_json(workbook_path: &Path, results_dir: &Path) -> anyhow::Result<ExtractSummary> {
    let workbook = Workbook::open(workbook_path)
        .with_context(|| format!("opening workbook {}", workbook_path.display()))?;

    let schema = extract_workbook(&workbook);
    let setup = parse_reference_distance(&workbook);
    drop(workbook);

    let sheets_written = save_sheets(results_dir, &schema)
        .with_context(|| format!("writing sheets to {}", results_dir.display()))?;
    let setup_path = save_vehicle_setup(results_dir, &setup)?;
    info!(sheets_written, setup = %setup_path.display(), "extraction complete");
    Ok(ExtractSummary {
        sheets_written,
        setup_path,
    })
}

/// Summary of one STEP export run.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSummary {
    pub solids: usize,
    pub colors_path: PathBuf,
}

/// Load the documents in `results_dir`, build the car and write it to
/// `output` as STEP, plus a color table alongside it.
pub fn json_to_step(
    results_dir: &Path,
    output: &Path,
    config: &BuildConfig,
) -> anyhow::Result<StepSummary> {
    let docs = load_car_documents(results_dir)?;

    let mut kernel = TruckKernel::new();
    let built = build_car(&mut kernel, &docs.front, &docs.rear, &docs.setup, config)
        .context("building car geometry")?;
    for warning in &built.diagnostics.warnings {
        warn!("{warning}");
    }

    let file_name = output
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("Car_Assembly.step");
    let step = export_step(&mut kernel, &built.root, file_name)?;
    write_step(output, &step)?;
    let colors_path = color_table_path(output);
    write_color_table(&colors_path, &built.root)?;

    let solids = built.root.solid_count();
    info!(solids, output = %output.display(), colors = %colors_path.display(), "saved car assembly");
    Ok(StepSummary {
        solids,
        colors_path,
    })
}
