use scraper::{ElementRef, Html, Selector};

/// Finds listing containers in document order.
///
/// Primary match is any `div` whose class attribute carries one of the
/// known card markers. When a page variant renders none of them, fall
/// back to title-looking anchors and climb to the nearest `div`
/// ancestor of each.
pub struct CardLocator {
    card_divs: Selector,
    title_anchors: Selector,
}

impl CardLocator {
    pub fn new() -> Self {
        Self {
            card_divs: Selector::parse(
                "div[class*='jobTuple'], div[class*='cust-job-tuple'], div[class*='sjw__tuple']",
            )
            .unwrap(),
            title_anchors: Selector::parse("a[class*='title']").unwrap(),
        }
    }

    pub fn locate<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        let cards: Vec<_> = document.select(&self.card_divs).collect();
        if !cards.is_empty() {
            return cards;
        }

        document
            .select(&self.title_anchors)
            .filter_map(|anchor| nearest_div(anchor, 4))
            .collect()
    }
}

/// Walks up at most `max_hops` ancestors looking for a `div`.
fn nearest_div(anchor: ElementRef<'_>, max_hops: usize) -> Option<ElementRef<'_>> {
    let mut node = anchor.parent();
    for _ in 0..max_hops {
        let current = node?;
        if let Some(element) = ElementRef::wrap(current) {
            if element.value().name() == "div" {
                return Some(element);
            }
        }
        node = current.parent();
    }
    None
}
