use std::sync::Arc;
use std::thread;
use std::time::Duration;

use headless_chrome::{Browser, Tab};
use rand::Rng;
use tracing::{debug, info};

/// Search base split where the page segment goes: page 3 renders as
/// `.../jobs-in-india-3?clusters=...`, page 1 carries no segment.
const BASE_PATH: &str = "https://www.naukri.com/jobs-in-india";
const BASE_QUERY: &str = "?clusters=functionalAreaGid&functionAreaIdGid=2&functionAreaIdGid=3&functionAreaIdGid=4&functionAreaIdGid=5&functionAreaIdGid=6&functionAreaIdGid=7&functionAreaIdGid=8&functionAreaIdGid=9&functionAreaIdGid=10&functionAreaIdGid=11&functionAreaIdGid=12&functionAreaIdGid=13&functionAreaIdGid=14&functionAreaIdGid=15&functionAreaIdGid=16&functionAreaIdGid=19&functionAreaIdGid=30&functionAreaIdGid=31&functionAreaIdGid=35";

/// Class fragments that mark a rendered listing container. The site has
/// shipped all three at different times.
const CARD_CLASS_FRAGMENTS: [&str; 3] = ["jobTuple", "cust-job-tuple", "sjw__tuple"];

const CARD_WAIT_SELECTOR: &str = ".jobTuple, .cust-job-tuple, .sjw__tuple";
const CARD_WAIT_TIMEOUT: Duration = Duration::from_secs(3);
const SETTLE_DELAY: Duration = Duration::from_secs(2);
const SCROLL_PAUSE: Duration = Duration::from_secs(1);

pub fn page_url(page: usize) -> String {
    if page == 1 {
        format!("{BASE_PATH}{BASE_QUERY}")
    } else {
        format!("{BASE_PATH}-{page}{BASE_QUERY}")
    }
}

/// Navigate to one results page and return its rendered markup.
///
/// Best-effort throughout: navigation, scroll and wait failures degrade
/// to whatever markup the tab currently holds, so the caller always
/// gets a string to parse (possibly one with no listings in it).
pub fn fetch_page(browser: &Browser, tab: &Arc<Tab>, page: usize) -> String {
    let url = page_url(page);
    info!("visiting {url}");

    if let Err(e) = tab.navigate_to(&url) {
        debug!("navigation failed: {e}");
    }
    thread::sleep(SETTLE_DELAY);

    // Nudge lazy-loaded cards into the DOM. Some page variants reject
    // injected script.
    let _ = tab.evaluate("window.scrollTo(0, document.body.scrollHeight);", false);
    thread::sleep(SCROLL_PAUSE);
    let _ = tab.evaluate("window.scrollTo(0, 0);", false);

    let markup =
        markup_with_cards(browser).unwrap_or_else(|| tab.get_content().unwrap_or_default());

    // Politeness jitter between pages.
    let jitter = rand::thread_rng().gen_range(500..=2000);
    thread::sleep(Duration::from_millis(jitter));

    markup
}

/// Markup of the first open tab that shows listing containers. A
/// navigation can spawn extra tabs (ads, redirects), so every handle is
/// a candidate: first a bounded wait for the container element, then a
/// raw substring count over the tab's markup.
fn markup_with_cards(browser: &Browser) -> Option<String> {
    let tabs = browser.get_tabs().lock().ok()?.clone();
    for tab in tabs {
        debug!("checking tab '{}'", tab.get_title().unwrap_or_default());

        if tab
            .wait_for_element_with_custom_timeout(CARD_WAIT_SELECTOR, CARD_WAIT_TIMEOUT)
            .is_ok()
        {
            if let Ok(markup) = tab.get_content() {
                debug!("found listing cards via element wait");
                return Some(markup);
            }
        }

        let markup = tab.get_content().unwrap_or_default();
        let occurrences = fragment_occurrences(&markup);
        debug!("listing fragment occurrences in tab: {occurrences}");
        if occurrences > 0 {
            return Some(markup);
        }
    }
    None
}

fn fragment_occurrences(markup: &str) -> usize {
    CARD_CLASS_FRAGMENTS
        .iter()
        .map(|fragment| markup.matches(fragment).count())
        .sum()
}
