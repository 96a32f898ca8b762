use crate::chart::RenderedChart;
use crate::error::{ChartError, Result};
use image::{ExtendedColorType, ImageFormat};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Contains all the necessary information of an output image
///
/// Parent directories are never created, a missing directory is reported as
/// [ChartError::Write].
#[derive(Debug)]
pub struct OutputFile {
    relative_path: PathBuf,
}

impl OutputFile {
    pub fn new(path: &str) -> Self {
        OutputFile {
            relative_path: PathBuf::from(path),
        }
    }

    /// Encode `chart` as PNG, replacing any existing file
    pub fn write_png(&self, chart: &RenderedChart) -> Result<()> {
        write_png(&self.relative_path, chart)
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }
}

/// Encode into a sibling temporary file, then move it over `path`
///
/// A failure at any point leaves an existing file at `path` untouched.
pub(crate) fn write_png(path: &Path, chart: &RenderedChart) -> Result<()> {
    let write_err = |source: image::ImageError| ChartError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_err(e.into()))?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        image::write_buffer_with_format(
            &mut writer,
            &chart.pixels,
            chart.width,
            chart.height,
            ExtendedColorType::Rgb8,
            ImageFormat::Png,
        )
        .map_err(write_err)?;
        writer.flush().map_err(|e| write_err(e.into()))?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error.into()))?;
    Ok(())
}
