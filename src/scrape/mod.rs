// src/scrape/mod.rs
mod adapter;
mod aggregate;

pub use adapter::{Adapter, ParsedPage};
pub use aggregate::{Aggregator, Harvest, SourceOutcome};
