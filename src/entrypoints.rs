use crate::chart::BarChart;
use crate::data::read_rehash_sizes;
use crate::routines::output::OutputFile;
use crate::routines::settings::{self, Settings};
use crate::routines::{logger, viewer};

use eyre::{Result, WrapErr};
use std::path::Path;
use std::time::Instant;

/// Primary entrypoint for rehashplot
///
/// Reads the settings (defaults, optional `rehashplot.toml`, `REHASHPLOT_*`
/// variables), sets up logging and runs the pipeline, see [run_with].
pub fn run() -> Result<()> {
    let settings = settings::read_settings()?;
    logger::setup_log(&settings)?;
    run_with(&settings)
}

/// Load the benchmark CSV, render the bar chart, show it and save it
///
/// Any failure aborts the run before the image file is touched.
pub fn run_with(settings: &Settings) -> Result<()> {
    let now = Instant::now();
    tracing::info!("Starting rehashplot");
    tracing::debug!(
        "Settings: {}",
        serde_json::to_string_pretty(settings).wrap_err("Failed to serialize settings")?
    );

    // Read input data
    let data = read_rehash_sizes(Path::new(&settings.paths.input))
        .wrap_err_with(|| format!("Failed to load {}", settings.paths.input))?;
    tracing::info!(
        "Loaded {} rows from {}",
        data.len(),
        settings.paths.input
    );
    tracing::info!("{}", data);

    // Render the chart
    let chart = BarChart::from_data(&data);
    let rendered = chart.render(settings.canvas_size())?;

    // Present it before saving, a failing viewer does not stop the run
    if settings.chart.show {
        if let Err(err) = viewer::show(&rendered) {
            tracing::warn!("Could not display the chart: {:#}", err);
        }
    } else {
        tracing::info!("Chart viewer disabled in settings");
    }

    let output = OutputFile::new(&settings.paths.output);
    output.write_png(&rendered)?;
    tracing::info!("Chart written to {}", output.relative_path().display());

    tracing::info!("Program complete after {:.2?}", now.elapsed());
    Ok(())
}
