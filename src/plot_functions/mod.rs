// src/plot_functions/mod.rs

pub mod plot_adrc_response;

// src/plot_functions/mod.rs
