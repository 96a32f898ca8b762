use crate::chart::MAX_CANVAS_SIDE;
use config::Config as eConfig;
use eyre::{bail, Result};
use serde_derive::{Deserialize, Serialize};

/// Name of the optional settings file, looked up in the working directory
pub const SETTINGS_FILE: &str = "rehashplot";
/// Prefix for environment overrides, e.g. `REHASHPLOT_CHART__SHOW=false`
pub const ENV_PREFIX: &str = "REHASHPLOT";

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq, Default)]
pub struct Settings {
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub chart: Chart,
    #[serde(default)]
    pub log: Log,
}

/// Location of the benchmark input and the rendered figure
#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
pub struct Paths {
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default = "default_output")]
    pub output: String,
}

/// Canvas size in inches, resolution, and whether to open a viewer
#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
pub struct Chart {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    #[serde(default = "default_true")]
    pub show: bool,
}

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file, empty to only log to stdout
    #[serde(default)]
    pub file: String,
}

impl Settings {
    /// Canvas size in pixels, saturating at `u32::MAX` per side
    pub fn canvas_size(&self) -> (u32, u32) {
        let dpi = self.chart.dpi as f64;
        (
            (self.chart.width * dpi).round() as u32,
            (self.chart.height * dpi).round() as u32,
        )
    }

    fn validate(&self) -> Result<()> {
        if !(self.chart.width > 0.0 && self.chart.height > 0.0) {
            bail!(
                "Chart size must be positive, got {} x {} inches",
                self.chart.width,
                self.chart.height
            );
        }
        if self.chart.dpi == 0 {
            bail!("Chart dpi must be positive");
        }
        let (width, height) = self.canvas_size();
        if width == 0 || height == 0 || width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
            bail!(
                "Chart canvas of {} x {} px is outside 1..={} px per side",
                width,
                height,
                MAX_CANVAS_SIDE
            );
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            input: default_input(),
            output: default_output(),
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Chart {
            width: default_width(),
            height: default_height(),
            dpi: default_dpi(),
            show: default_true(),
        }
    }
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

/// Read settings from the optional `rehashplot.toml` and `REHASHPLOT_*` variables
///
/// Neither source is required, without them the built-in defaults apply.
pub fn read_settings() -> Result<Settings> {
    read_settings_from(SETTINGS_FILE)
}

/// Same as [read_settings], with an explicit settings file (extension optional)
pub fn read_settings_from(path: &str) -> Result<Settings> {
    let parsed = eConfig::builder()
        .add_source(
            config::File::with_name(path)
                .format(config::FileFormat::Toml)
                .required(false),
        )
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings: Settings = parsed.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}

// *********************************
// Default values for deserializing
// *********************************
fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_input() -> String {
    "../csv/rehash_sizes.csv".to_string()
}

fn default_output() -> String {
    "../figures/rehash_rds.png".to_string()
}

fn default_width() -> f64 {
    7.0
}

fn default_height() -> f64 {
    5.5
}

fn default_dpi() -> u32 {
    100
}
