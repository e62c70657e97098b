// src/specs/mod.rs
//! # Site specs
//!
//! One module per job board. A spec is pure data: where the listing page
//! lives, which origin relative links hang off, and which CSS selectors find
//! an offer and its fields. The adapter in `scrape` is the only code that
//! interprets it, so supporting a new site means adding a spec, not a type.
//!
//! ## Conventions
//! - The offer selector matches one element per listing; field selectors are
//!   evaluated *inside* that element and the first match wins.
//! - `title` and `link` are required; `company` and `location` fall back to
//!   an empty string when a board omits them.
//! - URLs are the boards' own junior/trainee search filters, one per
//!   `Technology`.
//! - Selectors mirror the live markup as last observed; when a board
//!   redesigns, expect zero matches (an empty result, not an error) until
//!   the selectors are updated.
//!
//! ## Testing notes
//! Every spec is exercised offline against a captured fixture under
//! `tests/fixtures/`.

pub mod justjoinit;
pub mod nofluffjobs;
pub mod pracuj;

use crate::offer::{Source, Technology};

/// Where the absolute link of an offer comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkRule {
    /// The offer element itself is the anchor (`<a class=... href=...>`).
    SelfHref,
    /// First descendant matching this selector that carries `href`.
    Descendant(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteSpec {
    pub source: Source,
    /// Listing page to GET.
    pub url: String,
    /// Origin relative hrefs are resolved against.
    pub base: &'static str,
    pub offer: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub link: LinkRule,
}

impl SiteSpec {
    /// Same rules, different listing page. Tests point specs at fixtures
    /// or unreachable hosts this way.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

pub fn spec_for(source: Source, tech: Technology) -> SiteSpec {
    match source {
        Source::JustJoinIt => justjoinit::spec(tech),
        Source::NoFluffJobs => nofluffjobs::spec(tech),
        Source::PracujPl => pracuj::spec(tech),
    }
}

/// Specs for `sources`, in the order given.
pub fn specs_for(sources: &[Source], tech: Technology) -> Vec<SiteSpec> {
    sources.iter().map(|s| spec_for(*s, tech)).collect()
}
