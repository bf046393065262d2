//! Anchor text cleanup: nested tag stripping and HTML entity decoding.
//!
//! Headlines arrive as anchor inner content that may wrap the text in
//! `<span>`/`<h3>` layers and escape a handful of characters. Decoding
//! covers only the entities Time.com headlines actually use; anything
//! outside the table (including numeric entities in general) passes
//! through untouched rather than pulling in a full HTML decoder.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any tag-shaped span, spanning newlines.
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag regex"));

/// Fixed entity table, applied in order. `&amp;` decodes first, so a
/// double-escaped `&amp;lt;` collapses all the way to `<`.
const ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#039;", "'"),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&nbsp;", " "),
    ("&mdash;", "\u{2014}"),
    ("&ndash;", "\u{2013}"),
];

/// Remove every `<...>` span from `text`, leaving plain text.
pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

/// Decode the fixed set of HTML entities in `text`.
pub fn decode_entities(text: &str) -> String {
    let mut out = text.to_string();
    for (entity, plain) in ENTITIES {
        if out.contains(entity) {
            out = out.replace(entity, plain);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_nested_markup() {
        assert_eq!(strip_tags("<span class=\"hed\">A Headline</span>"), "A Headline");
        assert_eq!(strip_tags("<h3><em>Big</em> News</h3>"), "Big News");
    }

    #[test]
    fn test_strip_tags_across_newlines() {
        assert_eq!(strip_tags("<span\n class=\"x\">text</span>"), "text");
    }

    #[test]
    fn test_strip_tags_plain_text_untouched() {
        assert_eq!(strip_tags("no markup here"), "no markup here");
    }

    #[test]
    fn test_decode_common_entities() {
        assert_eq!(
            decode_entities("Tom &amp; Jerry&#039;s Big Day"),
            "Tom & Jerry's Big Day"
        );
        assert_eq!(decode_entities("a &lt;b&gt; c"), "a <b> c");
        assert_eq!(decode_entities("&quot;quoted&quot;"), "\"quoted\"");
    }

    #[test]
    fn test_decode_apostrophe_variants() {
        assert_eq!(decode_entities("it&#39;s"), "it's");
        assert_eq!(decode_entities("it&apos;s"), "it's");
    }

    #[test]
    fn test_decode_spacing_and_dashes() {
        assert_eq!(decode_entities("one&nbsp;two"), "one two");
        assert_eq!(decode_entities("A&mdash;B"), "A\u{2014}B");
        assert_eq!(decode_entities("2020&ndash;2024"), "2020\u{2013}2024");
    }

    #[test]
    fn test_unknown_entities_pass_through() {
        assert_eq!(decode_entities("&copy; 2025"), "&copy; 2025");
        assert_eq!(decode_entities("&#8217;"), "&#8217;");
    }
}
