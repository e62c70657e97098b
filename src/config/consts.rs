// src/config/consts.rs

// Net
pub const USER_AGENT: &str = concat!("pracus/", env!("CARGO_PKG_VERSION"));

// Export
pub const CSV_FILENAME: &str = "job_offers.csv";
pub const COLUMN_NAMES: [&str; 5] = ["Title", "Company", "Location", "Link", "Source"];

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_DEFAULT_FILTER: &str = "pracus=info";

// Window
pub const WINDOW_TITLE: &str = "Pracuś | Job Offers";
pub const WINDOW_W: f32 = 960.0;
pub const WINDOW_H: f32 = 600.0;
