// src/specs/justjoinit.rs
//
// justjoin.it renders each listing as a React card: `<div item="[object Object]">`
// wrapping an anchor with a site-relative href.

use super::{LinkRule, SiteSpec};
use crate::offer::{Source, Technology};

pub const BASE: &str = "https://justjoin.it";

const OFFER: &str = r#"div[item="[object Object]"]"#;
const TITLE: &str = "h3";
const COMPANY: &str = "div.css-1mx97sn span";
const LOCATION: &str = "span.css-1o4wo1x";
const LINK: &str = "a[href]";

pub fn url(tech: Technology) -> String {
    let slug = match tech {
        Technology::Java => "java",
        Technology::Python => "python",
    };
    format!("{BASE}/job-offers/all-locations/{slug}?experience-level=junior")
}

pub fn spec(tech: Technology) -> SiteSpec {
    SiteSpec {
        source: Source::JustJoinIt,
        url: url(tech),
        base: BASE,
        offer: OFFER,
        title: TITLE,
        company: COMPANY,
        location: LOCATION,
        link: LinkRule::Descendant(LINK),
    }
}
