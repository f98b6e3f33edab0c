// tests/y_axis_formatting_test.rs

use adrc_pendulum_render::constants::Y_LABEL_COUNT;
use adrc_pendulum_render::plot_framework::{calculate_range, format_y_axis_label, nice_tick_step};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_axis_formatting() {
        // Degree ticks on a 0..180 axis step by 20
        assert_eq!(format_y_axis_label(0.0, 20.0), "0");
        assert_eq!(format_y_axis_label(40.0, 20.0), "40");
        assert_eq!(format_y_axis_label(180.0, 20.0), "180");
        assert_eq!(format_y_axis_label(-20.0, 20.0), "-20");
    }

    #[test]
    fn test_fine_steps_keep_neighbouring_ticks_distinct() {
        let ticks = [1.00, 1.01, 1.02, 1.03, 1.04];
        let labels: Vec<String> = ticks.iter().map(|&y| format_y_axis_label(y, 0.01)).collect();
        assert_eq!(labels, vec!["1.00", "1.01", "1.02", "1.03", "1.04"]);
    }

    #[test]
    fn test_flat_signal_axis_has_distinct_labels() {
        // A constant f(t) of -20 gets the fixed +/-0.5 padding.
        let (min, max) = calculate_range(-20.0, -20.0);
        let step = nice_tick_step(max - min, Y_LABEL_COUNT);
        assert!((step - 0.2).abs() < 1e-9, "step was {}", step);

        let labels: Vec<String> = [-20.4, -20.2, -20.0, -19.8, -19.6]
            .iter()
            .map(|&y| format_y_axis_label(y, step))
            .collect();
        assert_eq!(labels, vec!["-20.4", "-20.2", "-20.0", "-19.8", "-19.6"]);
    }

    #[test]
    fn test_large_steps_use_suffixes() {
        // Disturbance estimates can reach thousands
        assert_eq!(format_y_axis_label(1000.0, 1000.0), "1k");
        assert_eq!(format_y_axis_label(-5000.0, 1000.0), "-5k");
        assert_eq!(format_y_axis_label(1500.0, 500.0), "1.5k");
        assert_eq!(format_y_axis_label(2_500_000.0, 500_000.0), "2.5M");
        assert_eq!(format_y_axis_label(1_000_000.0, 1_000_000.0), "1M");
    }

    #[test]
    fn test_degenerate_step_falls_back_to_integers() {
        assert_eq!(format_y_axis_label(3.0, 0.0), "3");
        assert_eq!(format_y_axis_label(3.0, f64::NAN), "3");
    }
}
