// src/scrape/aggregate.rs
use std::{sync::mpsc, thread};

use tracing::{info, warn};

use crate::{
    config::options::ScrapeOptions,
    core::net::{Fetch, HttpFetcher},
    error::{FetchError, SetupError},
    offer::{JobOffer, Source},
    progress::Progress,
    specs::{self, SiteSpec},
};

use super::Adapter;

/// What one site contributed to a harvest.
#[derive(Debug)]
pub struct SourceOutcome {
    pub source: Source,
    /// Offer count, or why the site contributed nothing.
    pub result: Result<usize, FetchError>,
}

/// Merged offers plus one outcome per site, both in declaration order.
#[derive(Debug, Default)]
pub struct Harvest {
    pub offers: Vec<JobOffer>,
    pub outcomes: Vec<SourceOutcome>,
}

impl Harvest {
    pub fn failures(&self) -> impl Iterator<Item = (Source, &FetchError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.source, e)))
    }

    /// One line: `justjoin.it: 12, nofluffjobs.com: failed, pracuj.pl: 0`
    pub fn summary(&self) -> String {
        self.outcomes
            .iter()
            .map(|o| match &o.result {
                Ok(n) => format!("{}: {}", o.source, n),
                Err(_) => format!("{}: failed", o.source),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Runs every adapter and concatenates their offers in declaration order.
/// A site that fails contributes nothing; the rest are unaffected.
pub struct Aggregator {
    adapters: Vec<Adapter>,
    fetch: Box<dyn Fetch>,
}

impl Aggregator {
    pub fn new(specs: Vec<SiteSpec>, fetch: Box<dyn Fetch>) -> Result<Self, SetupError> {
        let adapters = specs
            .into_iter()
            .map(Adapter::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { adapters, fetch })
    }

    /// Live sites for the given options, over HTTP.
    pub fn from_options(opts: &ScrapeOptions) -> Result<Self, SetupError> {
        let specs = specs::specs_for(&opts.sources, opts.tech);
        Self::new(specs, Box::new(HttpFetcher::new()?))
    }

    pub fn sources(&self) -> Vec<Source> {
        self.adapters.iter().map(|a| a.source()).collect()
    }

    pub fn collect_all(&self) -> Vec<JobOffer> {
        self.harvest(None).offers
    }

    /// Query all sites concurrently (one scoped thread each).
    /// Results are slotted back by index, so output order never depends on
    /// which site answers first.
    pub fn harvest(&self, mut progress: Option<&mut dyn Progress>) -> Harvest {
        let total = self.adapters.len();
        if let Some(p) = progress.as_deref_mut() {
            p.begin(total);
        }

        let mut slots: Vec<Option<Result<Vec<JobOffer>, FetchError>>> =
            (0..total).map(|_| None).collect();

        thread::scope(|scope| {
            let (tx, rx) = mpsc::channel();
            let fetch: &dyn Fetch = &*self.fetch;

            for (i, adapter) in self.adapters.iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move || {
                    let _ = tx.send((i, adapter.fetch_offers(fetch)));
                });
            }
            drop(tx); // this thread is the sole receiver now

            for (i, result) in rx {
                let source = self.adapters[i].source();
                match &result {
                    Ok(offers) => {
                        info!(%source, offers = offers.len(), "site done");
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_done(source, offers.len());
                        }
                    }
                    Err(e) => {
                        warn!(%source, "site failed: {e}");
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_failed(source, &e.to_string());
                        }
                    }
                }
                slots[i] = Some(result);
            }
        });

        let mut harvest = Harvest::default();
        for (adapter, slot) in self.adapters.iter().zip(slots) {
            let Some(result) = slot else { continue };
            let result = result.map(|mut offers| {
                let n = offers.len();
                harvest.offers.append(&mut offers);
                n
            });
            harvest.outcomes.push(SourceOutcome { source: adapter.source(), result });
        }

        info!(total = harvest.offers.len(), "harvest: {}", harvest.summary());
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        harvest
    }
}
