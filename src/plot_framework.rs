// src/plot_framework.rs

use log::{info, warn};
use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::{DashedLineSeries, LineSeries};
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    DASH_LENGTH_PX, DASH_SPACING_PX, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE,
    FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE, FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PANEL_NAMES,
    PLOT_HEIGHT, PLOT_WIDTH, X_LABEL_COUNT, Y_LABEL_COUNT,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Returns `range` unchanged when it has a positive width, otherwise a padded
/// range around it so a chart can still be built.
pub fn drawable_range(range: &Range<f64>) -> Range<f64> {
    if range.end > range.start {
        range.clone()
    } else {
        let (min, max) = calculate_range(range.start, range.end);
        min..max
    }
}

/// Smallest 1/2/5 x 10^k step that splits `span` into at most `max_ticks` intervals.
/// Returns 0.0 for an empty or non-finite span.
pub fn nice_tick_step(span: f64, max_ticks: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 || max_ticks == 0 {
        return 0.0;
    }
    let raw = span / max_ticks as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    [1.0, 2.0, 5.0]
        .iter()
        .map(|mult| magnitude * mult)
        .find(|&step| step >= raw * (1.0 - 1e-9))
        .unwrap_or(magnitude * 10.0)
}

/// Number of decimals needed to tell ticks `step` apart.
pub fn decimals_for_step(step: f64) -> usize {
    const MAX_DECIMALS: usize = 6;
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let mut decimals = 0;
    while decimals < MAX_DECIMALS {
        let scaled = step * 10f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() < 1e-6 * scaled.max(1.0) {
            break;
        }
        decimals += 1;
    }
    decimals
}

/// Formats a Y-axis tick value given the spacing between ticks.
/// Wide steps get "k"/"M" suffixes; the precision always follows the step so
/// neighbouring ticks never print the same text.
pub fn format_y_axis_label(y: f64, step: f64) -> String {
    let step = step.abs();
    let (scale, suffix) = if step >= 500_000.0 {
        (1_000_000.0, "M")
    } else if step >= 500.0 {
        (1000.0, "k")
    } else {
        (1.0, "")
    };
    let decimals = decimals_for_step(step / scale);
    format!("{:.*}{}", decimals, y / scale, suffix)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Clone, Debug)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub line_style: LineStyle,
}

/// One panel of a stacked figure.
#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    /// Only the bottom panel of a stacked figure carries an X label.
    pub x_label: Option<String>,
    pub y_label: String,
}

impl PlotConfig {
    pub fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.data.is_empty())
    }
}

/// A figure of vertically stacked panels sharing one time axis.
#[derive(Clone, Debug)]
pub struct StackedFigure {
    pub title: String,
    pub panels: Vec<PlotConfig>,
}

/// Image format written by `draw_stacked_plot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message<DB>(
    area: &DrawingArea<DB, Shift>,
    panel_index: usize,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4;

    let panel_name = PANEL_NAMES.get(panel_index).copied().unwrap_or("Unknown");
    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("{panel_name} {plot_type} Data Unavailable:\n{reason}");

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0) as i32;
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width);

    let center_x = width / 2 - estimated_text_width / 2;
    let mut line_y = height / 2 - (lines.len() as i32 * estimated_line_height) / 2;

    for line in lines {
        let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
        area.draw(&Text::new(line.to_string(), (center_x, line_y), text_style))?;
        line_y += estimated_line_height;
    }
    Ok(())
}

/// Draws one panel: mesh with grid, every series, and a legend.
fn draw_single_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let x_range = drawable_range(&plot_config.x_range);
    let y_range = drawable_range(&plot_config.y_range);
    let y_range_span = y_range.end - y_range.start;

    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(if plot_config.x_label.is_some() { 50 } else { 30 })
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    let y_step = nice_tick_step(y_range_span, Y_LABEL_COUNT);
    let y_formatter = |y: &f64| format_y_axis_label(*y, y_step);
    let mut mesh = chart.configure_mesh();
    mesh.y_desc(plot_config.y_label.as_str())
        .x_labels(X_LABEL_COUNT)
        .y_labels(Y_LABEL_COUNT)
        .y_label_formatter(&y_formatter)
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(BLACK.mix(0.05))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL));
    if let Some(x_label) = &plot_config.x_label {
        mesh.x_desc(x_label.as_str());
    }
    mesh.draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        // Infinite coordinates cannot be mapped to pixels.
        let points = s
            .data
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite());
        if points.clone().next().is_none() {
            continue;
        }
        let style = s.color.stroke_width(s.stroke_width);
        let legend_style = s.color.stroke_width(LINE_WIDTH_LEGEND);

        let labeled = match s.line_style {
            LineStyle::Solid => {
                let anno = chart.draw_series(LineSeries::new(points, style))?;
                if !s.label.is_empty() {
                    anno.label(&s.label).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], legend_style)
                    });
                }
                !s.label.is_empty()
            }
            LineStyle::Dashed => {
                let anno = chart.draw_series(DashedLineSeries::new(
                    points,
                    DASH_LENGTH_PX,
                    DASH_SPACING_PX,
                    style,
                ))?;
                if !s.label.is_empty() {
                    anno.label(&s.label).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], legend_style)
                    });
                }
                !s.label.is_empty()
            }
        };
        if labeled {
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Draws every panel of `figure` top-to-bottom on `root_area`.
/// Returns true when at least one panel had data to plot.
pub fn draw_stacked_figure_on<DB>(
    root_area: &DrawingArea<DB, Shift>,
    figure: &StackedFigure,
    plot_type_name: &str,
) -> Result<bool, Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        figure.title.clone(),
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;

    if figure.panels.is_empty() {
        return Ok(false);
    }

    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((figure.panels.len(), 1));
    let mut any_panel_plotted = false;

    for (panel_index, (area, panel)) in sub_plot_areas.iter().zip(&figure.panels).enumerate() {
        if panel.has_data() {
            draw_single_panel(area, panel)?;
            any_panel_plotted = true;
        } else {
            draw_unavailable_message(area, panel_index, plot_type_name, "No data points")?;
        }
    }

    Ok(any_panel_plotted)
}

/// Creates a stacked plot image at `output_filename` in the given format.
pub fn draw_stacked_plot(
    output_filename: &Path,
    format: OutputFormat,
    figure: &StackedFigure,
    plot_type_name: &str,
) -> Result<(), Box<dyn Error>> {
    let any_panel_plotted = match format {
        OutputFormat::Png => {
            let root_area =
                BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
            let plotted = draw_stacked_figure_on(&root_area, figure, plot_type_name)?;
            root_area.present()?;
            plotted
        }
        OutputFormat::Svg => {
            let root_area =
                SVGBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
            let plotted = draw_stacked_figure_on(&root_area, figure, plot_type_name)?;
            root_area.present()?;
            plotted
        }
    };

    if any_panel_plotted {
        info!("Stacked plot saved as '{}'.", output_filename.display());
    } else {
        warn!(
            "'{}' saved with placeholder messages only: no panel had data to plot.",
            output_filename.display()
        );
    }
    Ok(())
}


// src/plot_framework.rs
