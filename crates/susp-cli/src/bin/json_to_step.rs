//! Build the car assembly from extracted JSON documents and save it as STEP.

use susp_cli::{init_tracing, input_path, json_to_step, CliConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = CliConfig::from_env();
    let results_dir = input_path(std::env::args(), "json-to-step <results dir>")?;
    let build = config.load_build_config()?;

    let summary = json_to_step(&results_dir, &config.step_output, &build)?;
    println!(
        "Saved car assembly ({} solids) as {}, colors in {}",
        summary.solids,
        config.step_output.display(),
        summary.colors_path.display()
    );
    Ok(())
}
