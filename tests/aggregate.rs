// tests/aggregate.rs
use std::{collections::HashMap, fs};

use pracus::{
    core::Fetch,
    error::FetchError,
    offer::{Source, Technology},
    progress::{NullProgress, Progress},
    scrape::Aggregator,
    specs::{self, SiteSpec},
};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR")))
        .unwrap_or_else(|e| panic!("read fixture {name}: {e}"))
}

/// Serves canned pages by URL; anything else is a 404.
struct Canned(HashMap<String, String>);

impl Fetch for Canned {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        self.0
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
    }
}

fn spec(source: Source) -> SiteSpec {
    specs::spec_for(source, Technology::Java)
}

fn canned(pages: &[(&SiteSpec, &str)]) -> Box<Canned> {
    Box::new(Canned(
        pages.iter().map(|(s, f)| (s.url.clone(), fixture(f))).collect(),
    ))
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<(Source, usize)>,
    failed: Vec<Source>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, source: Source, offers: usize) { self.done.push((source, offers)); }
    fn item_failed(&mut self, source: Source, _reason: &str) { self.failed.push(source); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn merges_all_sites_in_declaration_order() {
    let (jj, nf, pr) = (spec(Source::JustJoinIt), spec(Source::NoFluffJobs), spec(Source::PracujPl));
    let fetch = canned(&[(&jj, "justjoinit.html"), (&nf, "nofluffjobs.html"), (&pr, "pracuj.html")]);
    let agg = Aggregator::new(vec![jj, nf, pr], fetch).unwrap();

    let offers = agg.collect_all();
    assert_eq!(offers.len(), 3 + 2 + 4);

    let sources: Vec<Source> = offers.iter().map(|o| o.source()).collect();
    let mut sorted = sources.clone();
    sorted.sort();
    assert_eq!(sources, sorted, "records must stay grouped in site order");
    assert_eq!(offers[0].title(), "Junior Java Developer");
    assert_eq!(offers[3].source(), Source::NoFluffJobs);
}

#[test]
fn failing_site_contributes_nothing_and_others_survive() {
    let (jj, nf, pr) = (spec(Source::JustJoinIt), spec(Source::NoFluffJobs), spec(Source::PracujPl));
    // nofluffjobs is not served -> 404
    let fetch = canned(&[(&jj, "justjoinit.html"), (&pr, "pracuj.html")]);

    let agg = Aggregator::new(vec![jj, nf, pr], fetch).unwrap();
    let mut rec = Recorder::default();
    let harvest = agg.harvest(Some(&mut rec as &mut dyn Progress));

    assert_eq!(harvest.offers.len(), 3 + 4);
    let failures: Vec<Source> = harvest.failures().map(|(s, _)| s).collect();
    assert_eq!(failures, [Source::NoFluffJobs]);
    assert_eq!(
        harvest.summary(),
        "justjoin.it: 3, nofluffjobs.com: failed, pracuj.pl: 4"
    );

    assert_eq!(rec.total, 3);
    assert_eq!(rec.failed, [Source::NoFluffJobs]);
    assert_eq!(rec.done.len(), 2);
    assert!(rec.finished);
}

#[test]
fn unreachable_host_is_a_fetch_failure() {
    // nothing listens on port 1
    let dead = spec(Source::NoFluffJobs).with_url("http://127.0.0.1:1/");
    let agg = Aggregator::new(vec![dead], Box::new(pracus::core::HttpFetcher::new().unwrap())).unwrap();

    let harvest = agg.harvest(None);
    assert!(harvest.offers.is_empty());
    assert!(matches!(
        harvest.outcomes[0].result,
        Err(FetchError::Transport { .. })
    ));
}

#[test]
fn empty_site_is_success_with_zero_offers() {
    let (jj, nf, pr) = (spec(Source::JustJoinIt), spec(Source::NoFluffJobs), spec(Source::PracujPl));
    let fetch = canned(&[(&jj, "justjoinit.html"), (&nf, "empty.html"), (&pr, "pracuj.html")]);
    let agg = Aggregator::new(vec![jj, nf, pr], fetch).unwrap();

    let harvest = agg.harvest(Some(&mut NullProgress as &mut dyn Progress));
    assert_eq!(harvest.offers.len(), 7);
    assert_eq!(harvest.failures().count(), 0);
    assert!(matches!(harvest.outcomes[1].result, Ok(0)));
}

#[test]
fn every_site_failing_still_returns_an_empty_harvest() {
    let specs = Source::ALL.map(spec).to_vec();
    let agg = Aggregator::new(specs, Box::new(Canned(HashMap::new()))).unwrap();

    let harvest = agg.harvest(None);
    assert!(harvest.offers.is_empty());
    assert_eq!(harvest.failures().count(), 3);
    assert_eq!(agg.sources(), Source::ALL);
}

#[test]
fn malformed_card_is_dropped_from_the_merge() {
    let jj = spec(Source::JustJoinIt);
    let nf = spec(Source::NoFluffJobs);
    let pr = spec(Source::PracujPl);

    let jj_page = r#"
        <div item="[object Object]"><a href="/job-offer/a"><h3>A1</h3></a></div>
        <div item="[object Object]"><a href="/job-offer/b"><h3>A2</h3></a></div>"#;
    let pr_page = r#"
        <div data-test="default-offer">
          <h2 data-test="offer-title"><a href="https://www.pracuj.pl/praca/c1">C1</a></h2>
        </div>
        <div data-test="default-offer">
          <h3 data-test="text-company-name">no title, no link</h3>
        </div>
        <div data-test="default-offer">
          <h2 data-test="offer-title"><a href="https://www.pracuj.pl/praca/c3">C3</a></h2>
        </div>"#;

    let fetch = Box::new(Canned(HashMap::from([
        (jj.url.clone(), jj_page.to_string()),
        (nf.url.clone(), fixture("empty.html")),
        (pr.url.clone(), pr_page.to_string()),
    ])));
    let agg = Aggregator::new(vec![jj, nf, pr], fetch).unwrap();

    let titles: Vec<String> = agg.collect_all().iter().map(|o| o.title().to_string()).collect();
    assert_eq!(titles, ["A1", "A2", "C1", "C3"]);
}
