// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::{consts::CSV_FILENAME, options::AppOptions},
    file,
    offer::{Source, Technology},
    progress::Progress,
    scrape::Aggregator,
};

/// Aggregate junior job offers from justjoin.it, nofluffjobs.com and pracuj.pl.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Technology filter baked into each site's search URL
    #[arg(short, long, value_enum, default_value_t = Technology::Java)]
    pub tech: Technology,

    /// CSV output path (overwritten)
    #[arg(short, long, default_value = CSV_FILENAME)]
    pub out: PathBuf,

    /// Skip writing the CSV file
    #[arg(long)]
    pub no_csv: bool,

    /// Print every offer to stdout
    #[arg(short, long)]
    pub print: bool,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.scrape.tech = self.tech;
        opts.export.enabled = !self.no_csv;
        opts.export.path = self.out.clone();
        opts
    }
}

/// Progress lines on stderr, one per site.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Querying {total} site(s)…");
    }
    fn item_done(&mut self, source: Source, offers: usize) {
        eprintln!("  {source}: {offers} offer(s)");
    }
    fn item_failed(&mut self, source: Source, reason: &str) {
        eprintln!("  {source}: failed ({reason})");
    }
}

/// A site failing is not an error here; only the CSV write can fail the run.
pub fn run(args: Args) -> Result<()> {
    let opts = args.to_options();
    let aggregator = Aggregator::from_options(&opts.scrape)
        .wrap_err("could not set up the scraper")?;

    let mut progress = CliProgress;
    let harvest = aggregator.harvest(Some(&mut progress as &mut dyn Progress));

    if args.print {
        for offer in &harvest.offers {
            println!("{}\t{}\t{}\t{}\t{}", offer.title(), offer.company(), offer.location(), offer.link(), offer.source());
        }
    }

    if opts.export.enabled {
        let path = file::export_offers(&opts.export.path, &harvest.offers)
            .wrap_err_with(|| format!("could not write {}", opts.export.path.display()))?;
        eprintln!("Wrote {} offer(s) to {}", harvest.offers.len(), path.display());
    } else {
        eprintln!("Collected {} offer(s)", harvest.offers.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_output() {
        let args = Args::parse_from(["cli"]);
        let opts = args.to_options();
        assert_eq!(opts.scrape.tech, Technology::Java);
        assert!(opts.export.enabled);
        assert_eq!(opts.export.path, PathBuf::from("job_offers.csv"));
    }

    #[test]
    fn flags_map_onto_options() {
        let args = Args::parse_from(["cli", "--tech", "python", "--no-csv", "-o", "out/jobs.csv"]);
        let opts = args.to_options();
        assert_eq!(opts.scrape.tech, Technology::Python);
        assert!(!opts.export.enabled);
        assert_eq!(opts.export.path, PathBuf::from("out/jobs.csv"));
    }
}
