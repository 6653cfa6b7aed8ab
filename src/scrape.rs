use scraper::Html;
use tracing::{debug, info};

use crate::browser::create_browser;
use crate::cards::CardLocator;
use crate::dedupe::dedupe;
use crate::extract::FieldExtractor;
use crate::fetch;
use crate::model::JobRecord;

/// Run tunables. All call-site constants; there is no config file and
/// nothing is read from the environment.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    pub pages: usize,
    pub headless: bool,
    pub debug: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            pages: 10,
            headless: true,
            debug: false,
        }
    }
}

/// Scrapes job records from Naukri search results.
///
/// Visits `options.pages` result pages in sequence and returns the
/// deduplicated records in first-seen order. The browser session lives
/// for exactly this call: dropping it closes Chrome even when an error
/// unwinds early.
pub fn scrape_naukri(options: &ScrapeOptions) -> anyhow::Result<Vec<JobRecord>> {
    let browser = create_browser(options.headless)?;
    let tab = browser.new_tab()?;

    let locator = CardLocator::new();
    let extractor = FieldExtractor::new();
    let mut records = Vec::new();

    for page in 1..=options.pages {
        let markup = fetch::fetch_page(&browser, &tab, page);
        let document = Html::parse_document(&markup);

        let cards = locator.locate(&document);
        debug!(
            "page {page}: {} candidate cards in {} bytes of markup",
            cards.len(),
            markup.len()
        );

        for card in cards {
            let record = extractor.extract(card);
            if record.identity_key().is_some() {
                records.push(record);
            } else {
                debug!("skipping card with neither title nor url");
            }
        }
    }

    let unique = dedupe(records);
    info!("collected {} unique job records", unique.len());
    Ok(unique)
}
