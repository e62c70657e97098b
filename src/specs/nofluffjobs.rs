// src/specs/nofluffjobs.rs
//
// nofluffjobs.com: the listing row *is* the anchor, href relative to the origin.

use super::{LinkRule, SiteSpec};
use crate::offer::{Source, Technology};

pub const BASE: &str = "https://nofluffjobs.com";

pub fn url(tech: Technology) -> String {
    format!("{BASE}/pl/{}?criteria=seniority%3Dtrainee%2Cjunior", tech.label())
}

pub fn spec(tech: Technology) -> SiteSpec {
    SiteSpec {
        source: Source::NoFluffJobs,
        url: url(tech),
        base: BASE,
        offer: "a.posting-list-item",
        title: "h3.posting-title__position",
        company: "h4.company-name",
        location: "span.tw-text-right",
        link: LinkRule::SelfHref,
    }
}
