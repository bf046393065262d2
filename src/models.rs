//! Data models for extracted stories and the JSON wire format.
//!
//! Everything here is transient: records are built fresh per request,
//! serialized, and discarded. There is no persisted state anywhere in
//! the application.

use serde::{Deserialize, Serialize};

/// A single extracted story: a headline and an absolute article URL.
///
/// Invariants upheld by the extraction pipeline:
/// - `title` is non-empty, whitespace-trimmed, tag-stripped,
///   entity-decoded, and contains interior whitespace (a lone word is
///   assumed to be a nav label, not a headline);
/// - `link` is absolute — either it already started with `http`, or it
///   was rewritten from a site-relative path by prefixing the origin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoryRecord {
    /// The cleaned headline text.
    pub title: String,
    /// The absolute article URL.
    pub link: String,
}

/// JSON body returned with a 500 when the fetch/extract pipeline fails.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBody {
    /// Stable, human-readable failure category.
    pub error: String,
    /// The underlying error message.
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_record_serialization() {
        let story = StoryRecord {
            title: "A Real Headline Here".to_string(),
            link: "https://time.com/news/1234567/some-title".to_string(),
        };

        let json = serde_json::to_string(&story).unwrap();
        assert!(json.contains("\"title\":\"A Real Headline Here\""));
        assert!(json.contains("\"link\":\"https://time.com/news/1234567/some-title\""));
    }

    #[test]
    fn test_story_record_deserialization() {
        let json =
            r#"{"title": "World News Today", "link": "https://time.com/world/7654321/story"}"#;
        let story: StoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(story.title, "World News Today");
        assert_eq!(story.link, "https://time.com/world/7654321/story");
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: "Failed to fetch/parse".to_string(),
            details: "connection refused".to_string(),
        };

        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"error\":\"Failed to fetch/parse\""));
        assert!(json.contains("\"details\":\"connection refused\""));
    }
}
