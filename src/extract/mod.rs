//! Heuristic story extraction from raw homepage HTML.
//!
//! This is the core of the application and the only part with any real
//! design complexity. It is a pure function over strings: no network,
//! no shared state, no DOM. The homepage markup carries no structural
//! contract we can rely on, so extraction works by linear scanning and
//! regex matching over the raw text.
//!
//! # Pipeline
//!
//! 1. [`region`] narrows the document down to the slice most likely to
//!    contain the "latest stories" list, with progressively wider
//!    fallbacks when the landmark is missing.
//! 2. [`stories`] scans that slice for anchors and pushes each one
//!    through an ordered filter pipeline that rejects navigation
//!    chrome, empty links, and non-article URLs.
//! 3. [`entities`] cleans anchor inner content: nested tags stripped,
//!    a fixed set of HTML entities decoded.
//!
//! Extraction never fails. Malformed or landmark-less HTML degrades to
//! wider scan regions and ultimately to an empty result, which lets the
//! whole pipeline be exercised offline against static fixtures.

pub mod entities;
pub mod region;
pub mod stories;

pub use stories::{latest_stories, DEFAULT_STORY_COUNT};
