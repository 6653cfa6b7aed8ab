use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod browser;
mod cards;
mod dedupe;
mod export;
mod extract;
mod fetch;
mod model;
mod scrape;

use scrape::{scrape_naukri, ScrapeOptions};

const OUTPUT_PATH: &str = "naukri_jobs.csv";

fn main() -> anyhow::Result<()> {
    let options = ScrapeOptions {
        pages: 25,
        headless: false,
        debug: true,
    };

    let filter = if options.debug {
        "naukri_scraper=debug"
    } else {
        "naukri_scraper=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let records = scrape_naukri(&options)?;

    if records.is_empty() {
        warn!("no records found; check debug output to diagnose");
        return Ok(());
    }

    export::write_csv(Path::new(OUTPUT_PATH), &records)?;
    info!("saved {} records to {OUTPUT_PATH}", records.len());

    Ok(())
}
