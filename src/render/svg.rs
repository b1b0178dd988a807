//! SVG chart rendering with `plotters`

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{HrError, Result};
use crate::render::chart::{Chart, ChartKind, Orientation, Series, format_money, format_thousands};
use crate::render::{ChartRenderer, chart_path};

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;
type DrawResult = std::result::Result<(), Box<dyn Error>>;

const FONT: &str = "sans-serif";
/// Room left above the tallest bar for value labels
const HEADROOM: f64 = 1.15;

const PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

fn color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Renders charts as standalone SVG files
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    size: (u32, u32),
}

impl SvgRenderer {
    #[must_use]
    pub const fn new(size: (u32, u32)) -> Self {
        Self { size }
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new((800, 600))
    }
}

impl ChartRenderer for SvgRenderer {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&mut self, chart: &Chart, dir: &Path) -> Result<PathBuf> {
        let path = chart_path(dir, &chart.slug, self.extension());
        {
            let root = SVGBackend::new(&path, self.size).into_drawing_area();
            draw(&root, chart).map_err(|e| HrError::render(&chart.slug, e))?;
        }
        Ok(path)
    }
}

fn draw(root: &Area<'_>, chart: &Chart) -> DrawResult {
    root.fill(&WHITE)?;

    match &chart.kind {
        ChartKind::Bar {
            labels,
            values,
            orientation: Orientation::Vertical,
            value_labels,
            ..
        } => draw_vertical_bars(root, chart, labels, values, *value_labels)?,
        ChartKind::Bar {
            labels,
            values,
            orientation: Orientation::Horizontal,
            value_labels,
            ..
        } => draw_horizontal_bars(root, chart, labels, values, *value_labels)?,
        ChartKind::GroupedBar { groups, series } => draw_grouped_bars(root, chart, groups, series)?,
        ChartKind::Pie { labels, values } => draw_pie(root, chart, labels, values)?,
        ChartKind::Scatter { points } => draw_scatter(root, chart, points)?,
    }

    if let ChartKind::Bar {
        annotation: Some(note),
        ..
    } = &chart.kind
    {
        let (width, _) = root.dim_in_pixel();
        let style = (FONT, 18)
            .into_font()
            .color(&PALETTE[3])
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw_text(note, &style, (width as i32 / 2, 50))?;
    }

    root.present()?;
    Ok(())
}

fn value_axis_max(chart: &Chart) -> f64 {
    let max = chart.max_value();
    if max > 0.0 { max * HEADROOM } else { 1.0 }
}

fn segment_label(labels: &[String], value: &SegmentValue<usize>) -> String {
    match value {
        SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

fn draw_vertical_bars(
    root: &Area<'_>,
    chart: &Chart,
    labels: &[String],
    values: &[f64],
    value_labels: bool,
) -> DrawResult {
    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(100)
        .build_cartesian_2d((0..labels.len()).into_segmented(), 0.0..value_axis_max(chart))?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|v: &SegmentValue<usize>| segment_label(labels, v))
        .y_label_formatter(&|v: &f64| format_thousands(*v))
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .axis_desc_style((FONT, 16))
        .draw()?;

    ctx.draw_series(
        Histogram::vertical(&ctx)
            .style(color(0).filled())
            .margin(20)
            .data(values.iter().enumerate().map(|(i, v)| (i, *v))),
    )?;

    if value_labels {
        let style = (FONT, 14)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        ctx.draw_series(values.iter().enumerate().map(|(i, v)| {
            Text::new(format_money(*v), (SegmentValue::CenterOf(i), *v), style.clone())
        }))?;
    }
    Ok(())
}

fn draw_horizontal_bars(
    root: &Area<'_>,
    chart: &Chart,
    labels: &[String],
    values: &[f64],
    value_labels: bool,
) -> DrawResult {
    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(140)
        .build_cartesian_2d(0.0..value_axis_max(chart), (0..labels.len()).into_segmented())?;

    ctx.configure_mesh()
        .disable_y_mesh()
        .y_labels(labels.len())
        .y_label_formatter(&|v: &SegmentValue<usize>| segment_label(labels, v))
        .x_label_formatter(&|v: &f64| format_thousands(*v))
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .axis_desc_style((FONT, 16))
        .draw()?;

    ctx.draw_series(
        Histogram::horizontal(&ctx)
            .style(color(0).filled())
            .margin(10)
            .data(values.iter().enumerate().map(|(i, v)| (i, *v))),
    )?;

    if value_labels {
        let style = (FONT, 14)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Center));
        ctx.draw_series(values.iter().enumerate().map(|(i, v)| {
            Text::new(format_money(*v), (*v, SegmentValue::CenterOf(i)), style.clone())
        }))?;
    }
    Ok(())
}

/// Name of the group whose center sits at `x`, empty between centers
fn group_label(groups: &[String], x: f64) -> String {
    let index = (x - 0.5).round();
    if (x - 0.5 - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    groups.get(index as usize).cloned().unwrap_or_default()
}

/// Side-by-side bars per group, one color per series
///
/// Group `i` spans `[i, i + 1)` on the x axis. Non-finite values mark a
/// missing combination and draw no bar.
fn draw_grouped_bars(root: &Area<'_>, chart: &Chart, groups: &[String], series: &[Series]) -> DrawResult {
    let width = groups.len().max(1) as f64;

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(100)
        .build_cartesian_2d(0.0..width, 0.0..value_axis_max(chart))?;

    // Half-unit ticks so every group center gets a key point
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(groups.len() * 2 + 1)
        .x_label_formatter(&|x: &f64| group_label(groups, *x))
        .y_label_formatter(&|v: &f64| format_thousands(*v))
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .axis_desc_style((FONT, 16))
        .draw()?;

    let slot = 0.8 / series.len().max(1) as f64;
    for (index, entry) in series.iter().enumerate() {
        let fill = color(index);
        let bars = entry
            .values
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_finite())
            .map(|(group, value)| {
                let left = group as f64 + 0.1 + index as f64 * slot;
                Rectangle::new([(left, 0.0), (left + slot, *value)], fill.filled())
            });
        ctx.draw_series(bars)?
        .label(entry.name.as_str())
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], fill.filled()));
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((FONT, 12))
        .draw()?;
    Ok(())
}

fn draw_pie(root: &Area<'_>, chart: &Chart, labels: &[String], values: &[f64]) -> DrawResult {
    let area = root.titled(&chart.title, (FONT, 24))?;
    if values.iter().sum::<f64>() <= 0.0 {
        log::warn!("Chart '{}' has no data to plot", chart.slug);
        return Ok(());
    }

    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;
    let colors = (0..values.len()).map(color).collect::<Vec<_>>();

    let mut pie = Pie::new(&center, &radius, values, &colors, labels);
    pie.start_angle(90.0);
    pie.label_style((FONT, 16).into_font().color(&BLACK));
    pie.percentages((FONT, 14).into_font().color(&WHITE));
    area.draw(&pie)?;
    Ok(())
}

fn draw_scatter(root: &Area<'_>, chart: &Chart, points: &[(f64, f64)]) -> DrawResult {
    let (low, high) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), (x, _)| {
            (low.min(*x), high.max(*x))
        });
    let x_range = if low.is_finite() { low - 1.0..high + 1.0 } else { 0.0..1.0 };

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(100)
        .build_cartesian_2d(x_range, 0.0..value_axis_max(chart))?;

    ctx.configure_mesh()
        .x_label_formatter(&|v: &f64| format!("{v:.0}"))
        .y_label_formatter(&|v: &f64| format_thousands(*v))
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .axis_desc_style((FONT, 16))
        .draw()?;

    let fill = color(0).mix(0.7);
    ctx.draw_series(points.iter().map(|(x, y)| Circle::new((*x, *y), 4, fill.filled())))?;
    Ok(())
}
