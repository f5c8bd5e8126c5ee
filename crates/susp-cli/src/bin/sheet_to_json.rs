//! Extract a suspension workbook into per-sheet JSON documents.

use susp_cli::{init_tracing, input_path, sheet_to_json, CliConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = CliConfig::from_env();
    let workbook = input_path(std::env::args(), "sheet-to-json <workbook.xlsx|workbook.json>")?;

    tracing::info!(
        workbook = %workbook.display(),
        results_dir = %config.results_dir.display(),
        "extracting workbook"
    );
    let summary = sheet_to_json(&workbook, &config.results_dir)?;
    println!(
        "Wrote {} sheet file(s) and {} to {}",
        summary.sheets_written,
        summary.setup_path.display(),
        config.results_dir.display()
    );
    Ok(())
}
