use crate::chart::RenderedChart;
use crate::routines::output::write_png;
use eyre::{bail, Result, WrapErr};
use std::path::Path;
use std::process::Command;

const PREVIEW_FILE: &str = "rehash_rds.png";

/// Open the rendered chart in the platform's default image viewer
///
/// The chart is written to `rehash_rds.png` in the system temporary directory,
/// replaced on every run, since some launchers return before the viewer has
/// read the file. Returns `false` when no display is available.
///
/// Only `open -W` (macOS) and `start /WAIT` (Windows) block until the viewer
/// is closed. `xdg-open` usually returns once the viewer has been launched,
/// so on Linux and the BSDs the run continues while the chart is shown.
pub fn show(chart: &RenderedChart) -> Result<bool> {
    if !display_available() {
        tracing::info!("No display available, skipping the chart viewer");
        return Ok(false);
    }

    let path = std::env::temp_dir().join(PREVIEW_FILE);
    write_png(&path, chart)?;

    let status = viewer_command(&path)
        .status()
        .wrap_err("Failed to launch the image viewer")?;
    if !status.success() {
        bail!("Image viewer exited with {}", status);
    }

    Ok(true)
}

#[cfg(target_os = "macos")]
fn display_available() -> bool {
    true
}

#[cfg(target_os = "windows")]
fn display_available() -> bool {
    true
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn display_available() -> bool {
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg("-W").arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "/WAIT", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
