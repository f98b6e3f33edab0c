// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{GREEN, LIGHTBLUE, ORANGE, PURPLE};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Log file written by the pendulum controller when no path is given.
pub const DEFAULT_LOG_FILE: &str = "data.txt";
pub const OUTPUT_FILE_SUFFIX: &str = "ADRC_stacked";

// Column order of every log line.
pub const FIELD_COUNT: usize = 5;
pub const FIELD_NAMES: [&str; FIELD_COUNT] = ["Time", "Command", "Response", "Setpoint", "f"];

// --- Panel labels ---
pub const PANEL_COUNT: usize = 3;
pub const PANEL_NAMES: [&str; PANEL_COUNT] = ["Angle", "Command", "f(t)"];

pub const LABEL_RESPONSE: &str = "Response";
pub const LABEL_SETPOINT: &str = "Setpoint";
pub const LABEL_COMMAND: &str = "Command";
pub const LABEL_F: &str = "f(t)";

pub const Y_LABEL_ANGLE: &str = "θ [deg]";
pub const Y_LABEL_TORQUE: &str = "τ [Nm]";
pub const Y_LABEL_F: &str = "f(t)";
pub const X_LABEL_TIME: &str = "Time [s]";

// --- Plot Color Assignments ---
pub const COLOR_RESPONSE: &RGBColor = &LIGHTBLUE;
pub const COLOR_SETPOINT: &RGBColor = &ORANGE;
pub const COLOR_COMMAND: &RGBColor = &GREEN;
pub const COLOR_F: &RGBColor = &PURPLE;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Dash pattern for dashed series, in pixels.
pub const DASH_LENGTH_PX: u32 = 10;
pub const DASH_SPACING_PX: u32 = 6;

// Maximum tick labels per axis
pub const X_LABEL_COUNT: usize = 20;
pub const Y_LABEL_COUNT: usize = 8;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// src/constants.rs
