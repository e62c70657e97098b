// src/config/options.rs
use std::path::PathBuf;

use super::consts::CSV_FILENAME;
use crate::offer::{Source, Technology};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub tech: Technology,
    /// Sites to query, in output order.
    pub sources: Vec<Source>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            tech: Technology::default(),
            sources: Source::ALL.to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Write the CSV file after every scrape.
    pub enabled: bool,
    pub path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(CSV_FILENAME),
        }
    }
}
