// src/scrape/adapter.rs
//
// One adapter type for every site: the `SiteSpec` carries everything that
// differs between boards. Network and parsing are split so the parser can
// run offline against fixtures.

use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};
use url::Url;

use crate::{
    core::{net::Fetch, sanitize::{absolutize, normalize_ws}},
    error::{FetchError, Field, ParseError, SpecError},
    offer::{JobOffer, Source},
    specs::{LinkRule, SiteSpec},
};

/// Result of parsing one listing page.
#[derive(Clone, Debug, Default)]
pub struct ParsedPage {
    /// Offer containers the page matched, good or bad.
    pub containers: usize,
    pub offers: Vec<JobOffer>,
    /// Containers dropped, in page order.
    pub skipped: Vec<ParseError>,
}

pub struct Adapter {
    spec: SiteSpec,
    base: Url,
    offer: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    /// `None` when the offer element carries the href itself.
    link: Option<Selector>,
}

impl Adapter {
    /// Compile the site's selectors once, up front.
    pub fn new(spec: SiteSpec) -> Result<Self, SpecError> {
        let source = spec.source;
        let compile = |rule: &str| {
            Selector::parse(rule).map_err(|e| SpecError {
                source_site: source,
                rule: rule.to_string(),
                message: e.to_string(),
            })
        };

        let base = Url::parse(spec.base).map_err(|e| SpecError {
            source_site: source,
            rule: spec.base.to_string(),
            message: e.to_string(),
        })?;

        let link = match spec.link {
            LinkRule::SelfHref => None,
            LinkRule::Descendant(rule) => Some(compile(rule)?),
        };

        Ok(Self {
            offer: compile(spec.offer)?,
            title: compile(spec.title)?,
            company: compile(spec.company)?,
            location: compile(spec.location)?,
            link,
            base,
            spec,
        })
    }

    pub fn source(&self) -> Source { self.spec.source }
    pub fn spec(&self) -> &SiteSpec { &self.spec }

    /// GET the listing page and extract its offers.
    ///
    /// Only the fetch can fail the adapter as a whole. Broken containers are
    /// logged and skipped; a page with no containers yields an empty list.
    pub fn fetch_offers(&self, fetch: &dyn Fetch) -> Result<Vec<JobOffer>, FetchError> {
        let html = fetch.get(&self.spec.url)?;
        let page = self.parse_offers(&html);

        let source = self.source();
        for err in &page.skipped {
            warn!(%source, "skipped offer: {err}");
        }
        if page.containers == 0 {
            info!(%source, url = %self.spec.url, "no offer containers matched");
        }
        Ok(page.offers)
    }

    /// Pure half of `fetch_offers`.
    pub fn parse_offers(&self, html: &str) -> ParsedPage {
        let doc = Html::parse_document(html);
        let mut page = ParsedPage::default();

        for (index, el) in doc.select(&self.offer).enumerate() {
            page.containers += 1;
            match self.parse_one(index, el) {
                Ok(offer) => page.offers.push(offer),
                Err(e) => page.skipped.push(e),
            }
        }
        page
    }

    fn parse_one(&self, index: usize, el: ElementRef<'_>) -> Result<JobOffer, ParseError> {
        let title = first_text(el, &self.title)
            .ok_or(ParseError::MissingField { index, field: Field::Title })?;
        if title.is_empty() {
            return Err(ParseError::EmptyField { index, field: Field::Title });
        }

        let company = first_text(el, &self.company).unwrap_or_default();
        let location = first_text(el, &self.location).unwrap_or_default();

        let href = match &self.link {
            None => el.value().attr("href"),
            Some(sel) => el.select(sel).find_map(|a| a.value().attr("href")),
        }
        .ok_or(ParseError::MissingField { index, field: Field::Link })?;

        let link = absolutize(&self.base, href)
            .ok_or_else(|| ParseError::BadLink { index, href: href.to_string() })?;

        Ok(JobOffer::new(title, company, location, link, self.spec.source))
    }
}

/// Whitespace-normalized text of the first descendant matching `sel`.
fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel)
        .next()
        .map(|e| normalize_ws(&e.text().collect::<String>()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer::Technology;
    use crate::specs;

    fn nofluff() -> Adapter {
        Adapter::new(specs::nofluffjobs::spec(Technology::Java)).unwrap()
    }

    #[test]
    fn all_shipped_specs_compile() {
        for tech in Technology::ALL {
            for source in Source::ALL {
                assert!(Adapter::new(specs::spec_for(source, tech)).is_ok(), "{source}");
            }
        }
    }

    #[test]
    fn bad_selector_is_a_spec_error() {
        let mut spec = specs::pracuj::spec(Technology::Java);
        spec.title = "h2[[";
        let err = Adapter::new(spec).err().unwrap();
        assert_eq!(err.source_site, Source::PracujPl);
        assert_eq!(err.rule, "h2[[");
    }

    #[test]
    fn self_href_is_resolved_against_base() {
        let html = r#"
            <a class="posting-list-item" href="/pl/job/junior-java-acme">
              <h3 class="posting-title__position">  Junior   Java </h3>
              <h4 class="company-name">Acme</h4>
              <span class="tw-text-right">Zdalnie</span>
            </a>"#;
        let page = nofluff().parse_offers(html);
        assert_eq!(page.containers, 1);
        let o = &page.offers[0];
        assert_eq!(o.title(), "Junior Java");
        assert_eq!(o.link(), "https://nofluffjobs.com/pl/job/junior-java-acme");
        assert_eq!(o.source(), Source::NoFluffJobs);
    }

    #[test]
    fn missing_company_and_location_become_empty() {
        let html = r#"
            <a class="posting-list-item" href="/pl/job/x">
              <h3 class="posting-title__position">Trainee Java</h3>
            </a>"#;
        let page = nofluff().parse_offers(html);
        assert_eq!(page.offers.len(), 1);
        assert_eq!(page.offers[0].company(), "");
        assert_eq!(page.offers[0].location(), "");
    }

    #[test]
    fn blank_title_and_missing_href_are_reported_per_container() {
        let html = r#"
            <a class="posting-list-item" href="/pl/job/a">
              <h3 class="posting-title__position">   </h3>
            </a>
            <a class="posting-list-item">
              <h3 class="posting-title__position">No link</h3>
            </a>
            <a class="posting-list-item" href="/pl/job/c">
              <h3 class="posting-title__position">Fine</h3>
            </a>"#;
        let page = nofluff().parse_offers(html);
        assert_eq!(page.containers, 3);
        assert_eq!(page.offers.len(), 1);
        assert_eq!(
            page.skipped,
            vec![
                ParseError::EmptyField { index: 0, field: Field::Title },
                ParseError::MissingField { index: 1, field: Field::Link },
            ]
        );
    }
}
