use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::model::{JobRecord, Rating, Reviews};

/// Per-field lookup chains over one listing card.
///
/// Selectors and regexes are compiled once. Each field tries its
/// strategies in order and the first hit wins, so a sparse or oddly
/// nested card degrades to absent fields instead of failing the card.
pub struct FieldExtractor {
    title_chain: Vec<Selector>,
    company_anchor: Selector,
    rating_badge: Selector,
    review_anchor: Selector,
    titled_spans: Selector,
    exp_class: Selector,
    sal_class: Selector,
    loc_class: Selector,
    description: Selector,
    tags_list: Selector,
    tag_items: Selector,
    posted: Selector,
    years_re: Regex,
    salary_re: Regex,
    digits_re: Regex,
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self {
            title_chain: vec![sel("a[class*='title']"), sel("h2 a")],
            company_anchor: sel("a[class*='comp-name']"),
            rating_badge: sel("a[class*='rating'] [class*='main-2']"),
            review_anchor: sel("a[class*='review']"),
            titled_spans: sel("span[title]"),
            exp_class: sel("[class*='exp']"),
            sal_class: sel("[class*='sal']"),
            loc_class: sel("[class*='loc']"),
            description: sel(
                "span[class*='job-desc'], span[class*='jobDesc'], \
                 span[class*='ni-job-tuple-icon-srp-description']",
            ),
            tags_list: sel("ul[class*='tags']"),
            tag_items: sel("li"),
            posted: sel("[class*='post-day']"),
            years_re: Regex::new(r"(?i)yrs").unwrap(),
            salary_re: Regex::new(r"(?i)(lacs|pa)").unwrap(),
            digits_re: Regex::new(r"\d[\d,]*").unwrap(),
        }
    }

    /// Builds a record from one card. Total: any lookup that misses
    /// leaves its field absent and extraction moves on.
    pub fn extract(&self, card: ElementRef<'_>) -> JobRecord {
        let title_anchor = first_match(card, &self.title_chain);
        let company_anchor = card.select(&self.company_anchor).next();

        JobRecord {
            job_title: title_anchor.and_then(visible_text),
            job_url: title_anchor.and_then(href),
            company: company_anchor.and_then(visible_text),
            company_url: company_anchor.and_then(href),
            rating: self.rating(card),
            reviews: self.reviews(card),
            experience: self.experience(card),
            salary: self.salary(card),
            location: self.location(card),
            description: card.select(&self.description).next().and_then(visible_text),
            tags: self.tags(card),
            posted: card.select(&self.posted).next().and_then(visible_text),
        }
    }

    fn rating(&self, card: ElementRef<'_>) -> Option<Rating> {
        let text = card.select(&self.rating_badge).next().and_then(visible_text)?;
        Some(match text.parse::<f64>() {
            Ok(score) => Rating::Score(score),
            Err(_) => Rating::Text(text),
        })
    }

    fn reviews(&self, card: ElementRef<'_>) -> Option<Reviews> {
        let text = card.select(&self.review_anchor).next().and_then(visible_text)?;
        let text = text.replace('\u{a0}', " ");
        let matched = self.digits_re.find(&text)?.as_str();
        Some(match matched.replace(',', "").parse::<u64>() {
            Ok(count) => Reviews::Count(count),
            Err(_) => Reviews::Text(matched.to_string()),
        })
    }

    fn experience(&self, card: ElementRef<'_>) -> Option<String> {
        self.titled_span(card, &self.years_re)
            .or_else(|| card.select(&self.exp_class).next())
            .and_then(visible_text)
    }

    fn salary(&self, card: ElementRef<'_>) -> Option<String> {
        card.select(&self.sal_class)
            .next()
            .or_else(|| self.titled_span(card, &self.salary_re))
            .and_then(visible_text)
    }

    // The bare span[title] fallback is known to be permissive and can
    // capture unrelated text on some page variants.
    fn location(&self, card: ElementRef<'_>) -> Option<String> {
        card.select(&self.loc_class)
            .next()
            .or_else(|| card.select(&self.titled_spans).next())
            .and_then(visible_text)
    }

    fn tags(&self, card: ElementRef<'_>) -> Option<String> {
        let list = card.select(&self.tags_list).next()?;
        let items: Vec<String> = list.select(&self.tag_items).filter_map(visible_text).collect();
        if items.is_empty() {
            return None;
        }
        Some(items.join(";"))
    }

    /// First `span[title]` whose title attribute matches `pattern`.
    fn titled_span<'a>(&self, card: ElementRef<'a>, pattern: &Regex) -> Option<ElementRef<'a>> {
        card.select(&self.titled_spans)
            .find(|span| span.value().attr("title").map_or(false, |t| pattern.is_match(t)))
    }
}

fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

fn first_match<'a>(card: ElementRef<'a>, chain: &[Selector]) -> Option<ElementRef<'a>> {
    chain.iter().find_map(|selector| card.select(selector).next())
}

fn href(anchor: ElementRef<'_>) -> Option<String> {
    anchor.value().attr("href").map(str::to_string)
}

/// Text content with surrounding whitespace trimmed and internal runs
/// collapsed; `None` when nothing visible remains.
fn visible_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<Vec<_>>().join(" ");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
