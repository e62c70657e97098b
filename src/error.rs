// src/error.rs
use std::fmt;
use std::io;

use thiserror::Error;

use crate::offer::Source;

/// Whole-adapter failure: nothing usable came back from the site.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Which record field a selector rule was looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    Company,
    Location,
    Link,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Company => "company",
            Field::Location => "location",
            Field::Link => "link",
        })
    }
}

/// Failure scoped to one offer container. The container is skipped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("offer #{index}: no {field} element")]
    MissingField { index: usize, field: Field },

    #[error("offer #{index}: {field} is empty")]
    EmptyField { index: usize, field: Field },

    #[error("offer #{index}: cannot make {href:?} absolute")]
    BadLink { index: usize, href: String },
}

/// A site spec carries a selector or base origin that does not parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{source_site}: invalid rule {rule:?}: {message}")]
pub struct SpecError {
    pub source_site: Source,
    pub rule: String,
    pub message: String,
}

/// Could not assemble the aggregator.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
