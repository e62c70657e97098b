// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod offer;
pub mod specs;

pub mod csv;
pub mod data;
pub mod file;
pub mod gui;
pub mod progress;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;

pub use offer::{JobOffer, Source, Technology};
pub use scrape::{Adapter, Aggregator, Harvest};
