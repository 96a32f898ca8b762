use crate::data::RehashData;
use crate::error::{ChartError, Result};
use plotters::prelude::*;

pub const TITLE: &str = "Max Rehash Rounds By Size";
pub const X_DESC: &str = "Insertion Size";
pub const Y_DESC: &str = "Number of Rehash Rounds";
pub const SERIES_LABEL: &str = "Number of Rehash Rounds";

/// Fraction of a category slot covered by its bar
pub const BAR_WIDTH: f64 = 0.35;

pub const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Largest canvas side accepted by the renderer, in pixels
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// One bar of the chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    /// Categorical slot, the row index in the input file
    pub position: usize,
    /// Tick label, the literal insertion size
    pub label: String,
    pub height: u64,
}

/// A single-series vertical bar chart of rehash rounds per insertion size
///
/// Bars are placed by row index, not by the numeric insertion size, so the
/// x axis is categorical and keeps the file order even for unsorted or
/// duplicated sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    bars: Vec<Bar>,
}

/// Raw RGB pixels of a rendered chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    /// Pixel corners (upper left, lower right) of each drawn bar, in bar order
    pub bar_areas: Vec<((i32, i32), (i32, i32))>,
}

impl RenderedChart {
    /// RGB value of the pixel at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some((self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]))
    }
}

impl BarChart {
    pub fn from_data(data: &RehashData) -> Self {
        let bars = data
            .samples()
            .iter()
            .enumerate()
            .map(|(position, sample)| Bar {
                position,
                label: sample.insert_size.to_string(),
                height: sample.rehash_rounds,
            })
            .collect();
        BarChart { bars }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Upper bound of the y axis, 5% above the tallest bar
    pub fn y_max(&self) -> u64 {
        let tallest = self.bars.iter().map(|b| b.height).max().unwrap_or(0);
        tallest
            .saturating_add((tallest as f64 * 0.05).ceil() as u64)
            .max(1)
    }

    /// Tick label for an x axis key point, empty between categories
    fn label_at(&self, x: f64) -> String {
        let idx = x.round();
        if idx < 0.0 || (x - idx).abs() > 1e-6 {
            return String::new();
        }
        self.bars
            .get(idx as usize)
            .map(|b| b.label.clone())
            .unwrap_or_default()
    }

    /// Draw the chart into an RGB buffer of `size` pixels
    pub fn render(&self, size: (u32, u32)) -> Result<RenderedChart> {
        let (width, height) = size;
        if width == 0 || height == 0 || width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
            return Err(ChartError::Render(format!(
                "Canvas of {} x {} px is outside 1..={} px per side",
                width, height, MAX_CANVAS_SIDE
            )));
        }
        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        let slots = self.bars.len().max(1);
        let half = BAR_WIDTH / 2.0;
        let bar_areas;

        {
            let root = BitMapBackend::with_buffer(&mut pixels, size).into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(TITLE, ("sans-serif", 20).into_font())
                .margin(15)
                .x_label_area_size(45)
                .y_label_area_size(60)
                .build_cartesian_2d(-0.5..(slots as f64 - 0.5), 0u64..self.y_max())
                .map_err(render_err)?;

            chart
                .configure_mesh()
                .disable_mesh()
                .x_labels(slots)
                .x_label_formatter(&|x| self.label_at(*x))
                .x_desc(X_DESC)
                .y_desc(Y_DESC)
                .draw()
                .map_err(render_err)?;

            chart
                .draw_series(self.bars.iter().map(|bar| {
                    let x = bar.position as f64;
                    Rectangle::new(
                        [(x - half, 0), (x + half, bar.height)],
                        BAR_COLOR.filled(),
                    )
                }))
                .map_err(render_err)?
                .label(SERIES_LABEL)
                .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], BAR_COLOR.filled()));

            bar_areas = self
                .bars
                .iter()
                .map(|bar| {
                    let x = bar.position as f64;
                    (
                        chart.backend_coord(&(x - half, bar.height)),
                        chart.backend_coord(&(x + half, 0)),
                    )
                })
                .collect();

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(render_err)?;

            // To avoid the IO failure being ignored silently, we manually call the present function
            root.present().map_err(render_err)?;
        }

        Ok(RenderedChart {
            width,
            height,
            pixels,
            bar_areas,
        })
    }
}

fn render_err<E: std::error::Error>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}
