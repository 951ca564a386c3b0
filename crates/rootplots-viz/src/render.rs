//! SVG rendering through `plotters`

use crate::config::PlotConfig;
use crate::error::{Result, VizError};
use crate::geometry::{bars, error_points, heat_cells, padded_range, HeatCell};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use rootplots_core::BinnedContent;
use std::path::Path;
use tracing::debug;

type Chart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Render a histogram: bars with error ticks in 1-D, a heat map in 2-D
pub fn plot_hist<B, P>(source: &B, path: P, config: &PlotConfig) -> Result<()>
where
    B: BinnedContent + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!(path = %path.display(), dimension = source.dimension(), "plotting histogram");
    match source.dimension() {
        1 => draw_bars(source, path, config),
        2 => draw_heat_map(source, path, config),
        dimension => Err(VizError::Unsupported { dimension }),
    }
}

/// Render a profile: means with error bars in 1-D, a heat map of means in 2-D
pub fn plot_profile<B, P>(source: &B, path: P, config: &PlotConfig) -> Result<()>
where
    B: BinnedContent + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!(path = %path.display(), dimension = source.dimension(), "plotting profile");
    match source.dimension() {
        1 => draw_error_points(source, path, config),
        2 => draw_heat_map(source, path, config),
        dimension => Err(VizError::Unsupported { dimension }),
    }
}

fn build_chart<'a, 'b, B: BinnedContent + ?Sized>(
    root: &'a DrawingArea<SVGBackend<'b>, plotters::coord::Shift>,
    source: &B,
    config: &PlotConfig,
    y_range: (f64, f64),
    y_desc: &str,
) -> Result<Chart<'a, 'b>> {
    let x_axis = source.axis(0)?;
    let mut builder = ChartBuilder::on(root);
    builder.margin(10).x_label_area_size(40).y_label_area_size(60);
    if config.caption_font_size > 0 {
        builder.caption(source.title(), ("sans-serif", config.caption_font_size));
    }

    let mut chart = builder
        .build_cartesian_2d(x_axis.min_bin()..x_axis.max_bin(), y_range.0..y_range.1)
        .map_err(VizError::drawing)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_axis.label())
        .y_desc(y_desc)
        .draw()
        .map_err(VizError::drawing)?;
    Ok(chart)
}

fn draw_bars<B: BinnedContent + ?Sized>(
    source: &B,
    path: &Path,
    config: &PlotConfig,
) -> Result<()> {
    let bars = bars(source)?;
    let y_range = padded_range(bars.iter().flat_map(|b| [b.height - b.error, b.height + b.error]));

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(VizError::drawing)?;
    let mut chart = build_chart(&root, source, config, y_range, "Entries")?;

    let fill = BLUE.mix(config.fill_opacity);
    chart
        .draw_series(
            bars.iter()
                .map(|b| Rectangle::new([(b.left, 0.0), (b.right, b.height)], fill.filled())),
        )
        .map_err(VizError::drawing)?;
    chart
        .draw_series(bars.iter().filter(|b| b.error > 0.0).map(|b| {
            let x = (b.left + b.right) / 2.0;
            let (low, high) = (b.height - b.error, b.height + b.error);
            ErrorBar::new_vertical(x, low, b.height, high, BLACK.filled(), 4)
        }))
        .map_err(VizError::drawing)?;

    root.present().map_err(VizError::drawing)
}

fn draw_error_points<B: BinnedContent + ?Sized>(
    source: &B,
    path: &Path,
    config: &PlotConfig,
) -> Result<()> {
    let points = error_points(source)?;
    let y_range = padded_range(points.iter().flat_map(|p| [p.y - p.y_error, p.y + p.y_error]));

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(VizError::drawing)?;
    let mut chart = build_chart(&root, source, config, y_range, "Mean")?;

    chart
        .draw_series(points.iter().map(|p| {
            ErrorBar::new_vertical(p.x, p.y - p.y_error, p.y, p.y + p.y_error, BLUE.filled(), 6)
        }))
        .map_err(VizError::drawing)?;
    chart
        .draw_series(points.iter().map(|p| {
            ErrorBar::new_horizontal(p.y, p.x - p.x_error, p.x, p.x + p.x_error, BLUE.filled(), 6)
        }))
        .map_err(VizError::drawing)?;

    root.present().map_err(VizError::drawing)
}

/// Blue for the smallest content through red for the largest
fn heat_color(cell: &HeatCell, lo: f64, hi: f64) -> HSLColor {
    let t = if hi > lo { (cell.content - lo) / (hi - lo) } else { 1.0 };
    HSLColor(2.0 / 3.0 * (1.0 - t), 0.8, 0.5)
}

fn draw_heat_map<B: BinnedContent + ?Sized>(
    source: &B,
    path: &Path,
    config: &PlotConfig,
) -> Result<()> {
    let cells = heat_cells(source)?;
    let y_axis = source.axis(1)?;
    let (lo, hi) = cells
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
            (lo.min(c.content), hi.max(c.content))
        });

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(VizError::drawing)?;
    let mut chart = build_chart(
        &root,
        source,
        config,
        (y_axis.min_bin(), y_axis.max_bin()),
        y_axis.label(),
    )?;

    chart
        .draw_series(cells.iter().map(|c| {
            Rectangle::new([(c.x.0, c.y.0), (c.x.1, c.y.1)], heat_color(c, lo, hi).filled())
        }))
        .map_err(VizError::drawing)?;

    root.present().map_err(VizError::drawing)
}
