//! Anchor scan and plausibility filter pipeline.
//!
//! Scans the located region left-to-right for `<a ...>...</a>` pairs
//! (non-greedy inner content, so each match closes at the nearest
//! `</a>`), cleans each candidate's text, and runs it through an
//! ordered chain of predicate filters. The first failing filter rejects
//! the anchor and the scan moves on. Accepted candidates are collected
//! in document order until the requested count is reached.
//!
//! Filters live in a named table so each one is independently testable
//! and a rejection can be logged with the filter that fired.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument, trace};

use crate::extract::entities::{decode_entities, strip_tags};
use crate::extract::region;
use crate::models::StoryRecord;

/// Stories returned per request when the caller does not say otherwise.
pub const DEFAULT_STORY_COUNT: usize = 6;

/// An anchor element: opening-tag attributes in group 1, inner content
/// in group 2. Non-greedy so nested/adjacent anchors don't merge.
static ANCHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)<a\b([^>]*)>(.*?)</a>"#).expect("anchor regex"));

/// First `href="..."` inside the opening tag's attributes.
static HREF: Lazy<Regex> = Lazy::new(|| Regex::new(r#"href="([^"]*)""#).expect("href regex"));

/// Navigation/chrome phrases that never headline an article.
static NAV_CHROME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)read more|subscribe|sign in|newsletter|skip to content|your brief")
        .expect("chrome regex")
});

/// Time.com article URLs embed a 6+ digit numeric story id in the
/// path. This is the strongest positive signal of a real article link,
/// and it is coupled to one publisher's URL scheme: if the site ever
/// changes its URL format this filter silently rejects everything.
static STORY_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d{6,}").expect("story id regex"));

/// One plausibility check over `(title, href)`; true means keep.
type StoryFilter = fn(&str, &str) -> bool;

/// Ordered filter pipeline. Cheapest and most-discriminating checks
/// first; the first failure rejects the candidate.
const FILTERS: &[(&str, StoryFilter)] = &[
    ("empty_title", has_title),
    ("nav_chrome", not_nav_chrome),
    ("unusable_href", has_usable_href),
    ("single_word_title", has_multiword_title),
    ("no_story_id", has_story_id),
];

fn has_title(title: &str, _href: &str) -> bool {
    !title.is_empty()
}

fn not_nav_chrome(title: &str, _href: &str) -> bool {
    !NAV_CHROME.is_match(title)
}

fn has_usable_href(_title: &str, href: &str) -> bool {
    href.starts_with("http") || href.starts_with('/')
}

/// A headline has interior whitespace; a lone word ("Home", "Video")
/// is assumed to be a nav label.
fn has_multiword_title(title: &str, _href: &str) -> bool {
    title.contains(char::is_whitespace)
}

fn has_story_id(_title: &str, href: &str) -> bool {
    STORY_ID.is_match(href)
}

/// Name of the first filter that rejects `(title, href)`, if any.
fn rejected_by(title: &str, href: &str) -> Option<&'static str> {
    FILTERS
        .iter()
        .find(|(_, keep)| !keep(title, href))
        .map(|(name, _)| *name)
}

/// Extract up to `count` latest stories from raw homepage HTML.
///
/// Relative hrefs are rewritten to absolute by prefixing `origin`
/// (e.g. `https://time.com`). Pure function of its inputs: no I/O, no
/// shared state, safe to call concurrently. Never fails — input
/// without a usable story list (including the empty string) yields an
/// empty vector.
#[instrument(level = "debug", skip(html), fields(doc_len = html.len()))]
pub fn latest_stories(html: &str, origin: &str, count: usize) -> Vec<StoryRecord> {
    let (slice, strategy) = region::locate(html);

    let mut stories = Vec::with_capacity(count);
    for caps in ANCHOR.captures_iter(slice) {
        if stories.len() >= count {
            break;
        }

        let Some(href_caps) = HREF.captures(&caps[1]) else {
            continue;
        };
        let href = href_caps[1].to_string();
        // Trim after decoding: `&nbsp;` at the edges decodes to plain
        // whitespace, and the filters must see the final title.
        let title = decode_entities(&strip_tags(&caps[2]));
        let title = title.trim().to_string();

        if let Some(filter) = rejected_by(&title, &href) {
            trace!(filter, title = %title, href = %href, "Rejected anchor");
            continue;
        }

        let link = if href.starts_with('/') {
            format!("{origin}{href}")
        } else {
            href
        };
        stories.push(StoryRecord { title, link });
    }

    stories.truncate(count);
    debug!(count = stories.len(), %strategy, "Extracted stories");
    stories
}
