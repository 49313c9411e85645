//! Scraping the article body for wallpaper download links.

use jiff::Zoned;
use scraper::{Html, Selector};
use url::{ParseError, Url};

use crate::error::Error;

/// Characters that are unsafe in file names on at least one supported
/// filesystem; they are stripped from title-derived names.
const UNSAFE_CHARS: &[char] = &['*', '|', ':', '"', '<', '>', '?', '/', '\\'];

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Scan the article body for download anchors and build the ordered
/// name-to-URL mapping of wallpapers to save.
///
/// An anchor matches when its visible text equals `size` byte-for-byte; the
/// label on the page is the contract, so no case folding or whitespace
/// normalization is applied. Names come from the anchor's `title` attribute
/// when present, otherwise from `now` formatted as `YYYYMMDDHHMMSS` (the clock
/// is passed in so tests can pin it).
///
/// Keys are unique: a second anchor deriving the same name is stored under
/// `<name>-2`, and any further duplicate overwrites that `-2` entry.
pub fn wallpaper_links(
    html: &str,
    page_url: &Url,
    size: &str,
    now: &Zoned,
) -> Result<Vec<(String, Url)>, Error> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("#article__content a[href]").unwrap();

    let mut links: Vec<(String, Url)> = Vec::new();
    for anchor in document.select(&anchor_selector) {
        if anchor.text().collect::<String>() != size {
            continue;
        }

        let Some(href) = full_link(anchor.value().attr("href").unwrap_or(""), page_url) else {
            continue;
        };

        let name = match anchor.value().attr("title") {
            Some(title) => name_from_title(title),
            None => jiff::fmt::strtime::format(TIMESTAMP_FORMAT, now)?,
        };

        let key = if links.iter().any(|(existing, _)| *existing == name) {
            format!("{name}-2")
        } else {
            name
        };
        if let Some(entry) = links.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = href;
        } else {
            links.push((key, href));
        }
    }

    Ok(links)
}

/// Derive a file name from a link title: everything but the title's last two
/// words, with filesystem-unsafe characters removed.
fn name_from_title(title: &str) -> String {
    let words: Vec<&str> = title.split_whitespace().collect();
    words[..words.len().saturating_sub(2)]
        .join(" ")
        .chars()
        .filter(|c| !UNSAFE_CHARS.contains(c))
        .collect()
}

/// Resolve an href to an absolute URL, joining relative links against the
/// page's own URL.
fn full_link(href: &str, page_url: &Url) -> Option<Url> {
    if href.is_empty() {
        return None;
    }
    match Url::parse(href) {
        Ok(url) => Some(url),
        Err(ParseError::RelativeUrlWithoutBase) => page_url.join(href).ok(),
        Err(e) => {
            tracing::warn!("skipping link {href}: {e}");
            None
        }
    }
}
