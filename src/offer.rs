// src/offer.rs
//
// The normalized record every site adapter produces.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Which job board a record came from. Closed set: one variant per adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "justjoin.it")]
    JustJoinIt,
    #[serde(rename = "nofluffjobs.com")]
    NoFluffJobs,
    #[serde(rename = "pracuj.pl")]
    PracujPl,
}

impl Source {
    /// Declaration order; the aggregator emits records in this order.
    pub const ALL: [Source; 3] = [Source::JustJoinIt, Source::NoFluffJobs, Source::PracujPl];

    pub fn label(&self) -> &'static str {
        match self {
            Source::JustJoinIt => "justjoin.it",
            Source::NoFluffJobs => "nofluffjobs.com",
            Source::PracujPl => "pracuj.pl",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search filter encoded in each site's fixed URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Technology {
    #[default]
    Java,
    Python,
}

impl Technology {
    pub const ALL: [Technology; 2] = [Technology::Java, Technology::Python];

    pub fn label(&self) -> &'static str {
        match self {
            Technology::Java => "Java",
            Technology::Python => "Python",
        }
    }
}

/// One job posting. Built once by an adapter, never mutated afterwards.
///
/// Field names double as the CSV header (`Title,Company,Location,Link,Source`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOffer {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Link")]
    link: String,
    #[serde(rename = "Source")]
    source: Source,
}

impl JobOffer {
    /// Taking `Url` keeps the absolute-link invariant in the type.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        link: Url,
        source: Source,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: location.into(),
            link: link.into(),
            source,
        }
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn company(&self) -> &str { &self.company }
    pub fn location(&self) -> &str { &self.location }
    pub fn link(&self) -> &str { &self.link }
    pub fn source(&self) -> Source { self.source }

    /// Cells in column order, as the table and filter see them.
    pub fn cells(&self) -> [&str; 5] {
        [&self.title, &self.company, &self.location, &self.link, self.source.label()]
    }

    /// Case-insensitive substring match across all columns.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.cells()
            .iter()
            .any(|cell| cell.to_lowercase().contains(needle))
    }
}

impl fmt::Display for JobOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} ({})", self.title, self.company, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer() -> JobOffer {
        JobOffer::new(
            "Junior Java Developer",
            "Acme",
            "Kraków",
            Url::parse("https://justjoin.it/job-offer/acme-junior-java").unwrap(),
            Source::JustJoinIt,
        )
    }

    #[test]
    fn cells_follow_column_order() {
        let o = offer();
        assert_eq!(
            o.cells(),
            [
                "Junior Java Developer",
                "Acme",
                "Kraków",
                "https://justjoin.it/job-offer/acme-junior-java",
                "justjoin.it"
            ]
        );
    }

    #[test]
    fn matches_any_column_case_insensitively() {
        let o = offer();
        assert!(o.matches("java"));
        assert!(o.matches("kraków"));
        assert!(o.matches("justjoin"));
        assert!(!o.matches("python"));
    }
}
