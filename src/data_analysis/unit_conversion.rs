// src/data_analysis/unit_conversion.rs

use ndarray::Array1;
use std::f64::consts::PI;

/// Converts an angle from radians to degrees. Linear, no wraparound.
#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Converts a whole column of angles, keeping element order.
pub fn column_rad_to_deg(radians: &Array1<f64>) -> Array1<f64> {
    radians.mapv(rad_to_deg)
}


// src/data_analysis/unit_conversion.rs
