// src/plot_functions/plot_adrc_response.rs

use ndarray::Array1;
use std::error::Error;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::constants::{
    COLOR_COMMAND, COLOR_F, COLOR_RESPONSE, COLOR_SETPOINT, LABEL_COMMAND, LABEL_F,
    LABEL_RESPONSE, LABEL_SETPOINT, LINE_WIDTH_PLOT, OUTPUT_FILE_SUFFIX, X_LABEL_TIME,
    Y_LABEL_ANGLE, Y_LABEL_F, Y_LABEL_TORQUE,
};
use crate::data_analysis::unit_conversion::column_rad_to_deg;
use crate::data_input::log_data::TelemetryTable;
use crate::plot_framework::{
    calculate_range, draw_stacked_plot, LineStyle, OutputFormat, PlotConfig, PlotSeries,
    StackedFigure,
};

const PLOT_TYPE_NAME: &str = "ADRC Response";

/// Output path for the stacked ADRC plot of a log named `root_name`.
pub fn output_path_for(root_name: &str, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!(
        "{}_{}.{}",
        root_name,
        OUTPUT_FILE_SUFFIX,
        format.extension()
    ))
}

/// Pairs each time sample with the value at the same row, in file order.
fn zip_series(time: &Array1<f64>, values: &Array1<f64>) -> Vec<(f64, f64)> {
    time.iter().copied().zip(values.iter().copied()).collect()
}

/// Padded Y-range over the finite values of all series, or a unit range when none are finite.
fn y_range_for(series: &[PlotSeries]) -> Range<f64> {
    let (val_min, val_max) = series
        .iter()
        .flat_map(|s| s.data.iter().map(|&(_, v)| v))
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if val_min > val_max {
        return 0.0..1.0;
    }
    let (min, max) = calculate_range(val_min, val_max);
    min..max
}

fn panel(
    title: &str,
    x_range: &Range<f64>,
    series: Vec<PlotSeries>,
    x_label: Option<&str>,
    y_label: &str,
) -> PlotConfig {
    PlotConfig {
        title: title.to_string(),
        x_range: x_range.clone(),
        y_range: y_range_for(&series),
        series,
        x_label: x_label.map(str::to_string),
        y_label: y_label.to_string(),
    }
}

/// Builds the three-panel ADRC figure: angle (deg) vs setpoint, command torque, and f(t).
///
/// Every panel shares the X range `[min(time), max(time)]` and keeps file order.
/// An empty table yields the same labeled panels with no points.
pub fn build_adrc_figure(table: &TelemetryTable, root_name: &str) -> StackedFigure {
    let (t_min, t_max) = table.time_range().unwrap_or((0.0, 0.0));
    let x_range = t_min..t_max;
    let time = table.time();

    let response_deg = column_rad_to_deg(table.response());
    let setpoint_deg = column_rad_to_deg(table.setpoint());

    let angle_series = vec![
        PlotSeries {
            data: zip_series(time, &response_deg),
            label: LABEL_RESPONSE.to_string(),
            color: *COLOR_RESPONSE,
            stroke_width: LINE_WIDTH_PLOT,
            line_style: LineStyle::Solid,
        },
        PlotSeries {
            data: zip_series(time, &setpoint_deg),
            label: LABEL_SETPOINT.to_string(),
            color: *COLOR_SETPOINT,
            stroke_width: LINE_WIDTH_PLOT,
            line_style: LineStyle::Dashed,
        },
    ];
    let command_series = vec![PlotSeries {
        data: zip_series(time, table.command()),
        label: LABEL_COMMAND.to_string(),
        color: *COLOR_COMMAND,
        stroke_width: LINE_WIDTH_PLOT,
        line_style: LineStyle::Solid,
    }];
    let f_series = vec![PlotSeries {
        data: zip_series(time, table.f()),
        label: LABEL_F.to_string(),
        color: *COLOR_F,
        stroke_width: LINE_WIDTH_PLOT,
        line_style: LineStyle::Solid,
    }];

    StackedFigure {
        title: root_name.to_string(),
        panels: vec![
            panel("Pendulum Angle vs Setpoint", &x_range, angle_series, None, Y_LABEL_ANGLE),
            panel("Controller Command", &x_range, command_series, None, Y_LABEL_TORQUE),
            panel(
                "Disturbance Estimate",
                &x_range,
                f_series,
                Some(X_LABEL_TIME),
                Y_LABEL_F,
            ),
        ],
    }
}

/// Generates the stacked ADRC response plot for `table` and writes it to `output_file`.
pub fn plot_adrc_response(
    table: &TelemetryTable,
    root_name: &str,
    output_file: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let figure = build_adrc_figure(table, root_name);
    draw_stacked_plot(output_file, format, &figure, PLOT_TYPE_NAME)
}


// src/plot_functions/plot_adrc_response.rs
