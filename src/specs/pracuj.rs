// src/specs/pracuj.rs
//
// it.pracuj.pl marks its markup with `data-test` attributes, which survive
// their CSS-module class renames. Offer links are already absolute
// (they point at www.pracuj.pl).

use super::{LinkRule, SiteSpec};
use crate::offer::{Source, Technology};

pub const BASE: &str = "https://it.pracuj.pl";

/// `et=1,3,17` = trainee, junior, assistant. `itth` = technology id.
pub fn url(tech: Technology) -> String {
    let itth = match tech {
        Technology::Java => 38,
        Technology::Python => 37,
    };
    format!("{BASE}/praca?et=1%2C3%2C17&itth={itth}")
}

pub fn spec(tech: Technology) -> SiteSpec {
    SiteSpec {
        source: Source::PracujPl,
        url: url(tech),
        base: BASE,
        offer: r#"div[data-test="default-offer"]"#,
        title: r#"h2[data-test="offer-title"]"#,
        company: r#"h3[data-test="text-company-name"]"#,
        location: r#"h4[data-test="text-region"]"#,
        link: LinkRule::Descendant("a[href]"),
    }
}
