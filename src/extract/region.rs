//! Region locator: narrow a full homepage document down to the slice
//! most likely to contain the "latest stories" list.
//!
//! The homepage renders a literal `LATEST STORIES` heading above the
//! story list, and the markup around it uses a `latest-stories`
//! class/id naming convention. Either one serves as a landmark. From a
//! landmark we prefer the first `<ul>`...`</ul>` container that
//! follows; when the container is missing we fall back to a bounded
//! window, and when no landmark exists at all we hand the extractor the
//! whole document and let its filters compensate for the noise.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use tracing::debug;

/// Literal heading rendered above the homepage story list.
const HEADING_LANDMARK: &str = "LATEST STORIES";

/// Secondary landmark: the class/id naming convention in the markup.
/// Matched as a regex so the byte offset is valid on the original
/// string even though the match is case-insensitive.
static CLASS_LANDMARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)latest-stories").expect("landmark regex"));

/// Window size, in characters, when a landmark exists but no `<ul>`
/// container follows it. Bounded so a landmark near the top of a huge
/// document does not turn into a whole-document scan.
const LANDMARK_WINDOW_CHARS: usize = 20_000;

/// How the locator arrived at its region. Logged alongside extraction
/// results; does not alter extraction semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionStrategy {
    /// Landmark found, `<ul>`...`</ul>` pair found after it.
    ListContainer,
    /// Landmark found but no container pair; bounded window.
    LandmarkWindow,
    /// No landmark anywhere; the entire document.
    WholeDocument,
}

impl fmt::Display for RegionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RegionStrategy::ListContainer => "list_container",
            RegionStrategy::LandmarkWindow => "landmark_window",
            RegionStrategy::WholeDocument => "whole_document",
        };
        f.write_str(s)
    }
}

/// Locate the extraction region within `html`.
///
/// Returns a sub-slice of the input together with the strategy that
/// produced it. Never fails: the widest fallback is the document
/// itself, and an empty document yields an empty region.
pub fn locate(html: &str) -> (&str, RegionStrategy) {
    let landmark = html
        .find(HEADING_LANDMARK)
        .or_else(|| CLASS_LANDMARK.find(html).map(|m| m.start()));

    let Some(pos) = landmark else {
        debug!(doc_len = html.len(), "No landmark; scanning whole document");
        return (html, RegionStrategy::WholeDocument);
    };

    if let Some(ul_start) = html[pos..].find("<ul").map(|i| pos + i) {
        if let Some(ul_end) = html[ul_start..].find("</ul>").map(|i| ul_start + i) {
            let region = &html[ul_start..ul_end + "</ul>".len()];
            debug!(start = ul_start, region_len = region.len(), "Found list container");
            return (region, RegionStrategy::ListContainer);
        }
    }

    let end = char_window_end(html, pos, LANDMARK_WINDOW_CHARS);
    debug!(start = pos, region_len = end - pos, "No container; using landmark window");
    (&html[pos..end], RegionStrategy::LandmarkWindow)
}

/// Byte offset `chars` characters past `start`, clamped to the end of
/// the string. Keeps the window slice on a char boundary.
fn char_window_end(s: &str, start: usize, chars: usize) -> usize {
    s[start..]
        .char_indices()
        .nth(chars)
        .map(|(i, _)| start + i)
        .unwrap_or(s.len())
}
