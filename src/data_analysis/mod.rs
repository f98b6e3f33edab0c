// src/data_analysis/mod.rs

pub mod unit_conversion;

// src/data_analysis/mod.rs
