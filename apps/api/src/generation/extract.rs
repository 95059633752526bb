//! Response Extractor — parses the raw model reply into title, excerpt and
//! body using a layered fallback ladder.
//!
//! Extraction never fails: a malformed or truncated reply degrades to
//! best-effort recovery, and the body is guaranteed non-empty for any
//! non-empty reply. The ladder is an ordered list of strategies tried until
//! one yields a body of sufficient length.

use std::sync::OnceLock;

use regex::Regex;

use crate::generation::read_time::read_time_label;

/// Persisted field caps, applied before storage.
pub const TITLE_MAX_CHARS: usize = 300;
pub const EXCERPT_MAX_CHARS: usize = 800;

/// Bodies shorter than this signal a malformed or truncated reply.
const MIN_BODY_CHARS: usize = 100;

const FALLBACK_TITLE: &str = "AI Generated Blog Post";
const FALLBACK_EXCERPT: &str = "An informative blog post about software development.";

/// Byline applied to every generated post.
pub const AUTHOR: &str = "BuildWithSharma";

/// Extracted fields ready for ingestion. Ephemeral, never persisted as-is.
#[derive(Debug, Clone)]
pub struct GeneratedPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub read_time: String,
    pub author: String,
}

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)TITLE:\s*([^\n]+)").expect("valid regex"))
}

fn excerpt_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)EXCERPT:\s*(.+?)(?:\n\s*CONTENT:|$)").expect("valid regex"))
}

fn content_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)CONTENT:\s*(.+)$").expect("valid regex"))
}

/// One recognized marker span: the whole matched text plus the captured value.
struct MarkerSpan {
    full: String,
    text: String,
}

fn find_marker(re: &Regex, raw: &str) -> Option<MarkerSpan> {
    re.captures(raw).map(|caps| MarkerSpan {
        full: caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default(),
        text: caps.get(1).map(|m| m.as_str().trim().to_string()).unwrap_or_default(),
    })
}

/// Parses a raw reply into structured post fields.
pub fn parse_reply(raw: &str, category: &str) -> GeneratedPost {
    let title_span = find_marker(title_re(), raw);
    let excerpt_span = find_marker(excerpt_re(), raw);

    let title = title_span
        .as_ref()
        .map(|span| span.text.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    let excerpt = excerpt_span
        .as_ref()
        .map(|span| span.text.clone())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| FALLBACK_EXCERPT.to_string());

    let content = extract_body(raw, title_span.as_ref(), excerpt_span.as_ref());
    let read_time = read_time_label(&content);

    GeneratedPost {
        title: truncate_chars(&title, TITLE_MAX_CHARS),
        excerpt: truncate_chars(&excerpt, EXCERPT_MAX_CHARS),
        content,
        category: category.to_string(),
        read_time,
        author: AUTHOR.to_string(),
    }
}

/// Runs the fallback ladder. Order matters; the final rung always produces
/// a non-empty body for a non-empty reply.
fn extract_body(raw: &str, title: Option<&MarkerSpan>, excerpt: Option<&MarkerSpan>) -> String {
    let primary = || body_from_marker(raw);
    let secondary = || body_after_excerpt(raw, excerpt);
    let tertiary = || body_from_line_scan(raw);
    let strategies: [&dyn Fn() -> Option<String>; 3] = [&primary, &secondary, &tertiary];

    for strategy in strategies {
        if let Some(body) = strategy() {
            if body.chars().count() >= MIN_BODY_CHARS {
                return body;
            }
        }
    }

    body_from_stripped_markers(raw, title, excerpt)
}

/// Primary: everything after the `CONTENT:` marker.
fn body_from_marker(raw: &str) -> Option<String> {
    content_re()
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|body| !body.is_empty())
}

/// Secondary: the text remaining after the recognized `EXCERPT:` span.
/// Only applicable when an excerpt was recognized in the first place.
fn body_after_excerpt(raw: &str, excerpt: Option<&MarkerSpan>) -> Option<String> {
    let excerpt = excerpt?;

    let mut rest = raw.split_once("EXCERPT:").map(|(_, after)| after).unwrap_or(raw);
    if let Some((_, after)) = rest.split_once("CONTENT:") {
        rest = after;
    }
    if !excerpt.text.is_empty() {
        if let Some((_, after)) = rest.split_once(excerpt.text.as_str()) {
            rest = after;
        }
    }

    let body = rest.trim();
    (!body.is_empty()).then(|| body.to_string())
}

/// Tertiary: skip the title/excerpt line prefix and keep the rest.
fn body_from_line_scan(raw: &str) -> Option<String> {
    let lines: Vec<&str> = raw.split('\n').collect();

    let mut start = None;
    for (i, line) in lines.iter().enumerate() {
        if line.to_uppercase().contains("CONTENT:") {
            start = Some(i + 1);
            break;
        }
        let trimmed = line.trim();
        if i > 2
            && !trimmed.is_empty()
            && !trimmed.starts_with("TITLE:")
            && !trimmed.starts_with("EXCERPT:")
        {
            start = Some(i);
            break;
        }
    }

    let start = start?;
    let body = lines.get(start..).unwrap_or(&[]).join("\n");
    let body = body.trim();
    (!body.is_empty()).then(|| body.to_string())
}

/// Last resort: strip the literal matched marker spans out of the full reply;
/// if nothing remains, use the entire reply unmodified.
fn body_from_stripped_markers(
    raw: &str,
    title: Option<&MarkerSpan>,
    excerpt: Option<&MarkerSpan>,
) -> String {
    let mut cleaned = raw.to_string();
    if let Some(span) = title {
        cleaned = cleaned.replacen(&span.full, "", 1);
    }
    if let Some(span) = excerpt {
        cleaned = cleaned.replacen(&span.full, "", 1);
    }

    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        raw.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Truncates on a character boundary so multi-byte titles cannot split.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_html(words: usize) -> String {
        let mut body = String::from("<p>");
        for _ in 0..words {
            body.push_str("word ");
        }
        body.push_str("</p>");
        body
    }

    #[test]
    fn well_formed_reply_extracts_all_fields() {
        let raw = format!("TITLE: Foo\nEXCERPT: Bar baz.\nCONTENT: {}", long_html(120));
        let post = parse_reply(&raw, "React");
        assert_eq!(post.title, "Foo");
        assert_eq!(post.excerpt, "Bar baz.");
        assert!(post.content.starts_with("<p>word"));
        assert_eq!(post.category, "React");
        assert_eq!(post.author, AUTHOR);
        assert_eq!(post.read_time, "1 min read");
    }

    #[test]
    fn markers_are_case_insensitive() {
        let raw = format!("title: Foo\nexcerpt: Bar.\ncontent: {}", long_html(120));
        let post = parse_reply(&raw, "React");
        assert_eq!(post.title, "Foo");
        assert_eq!(post.excerpt, "Bar.");
        assert!(post.content.contains("word"));
    }

    #[test]
    fn excerpt_spans_multiple_lines_up_to_content_marker() {
        let raw = format!(
            "TITLE: Foo\nEXCERPT: One.\nTwo.\nThree.\nCONTENT: {}",
            long_html(120)
        );
        let post = parse_reply(&raw, "Django");
        assert_eq!(post.excerpt, "One.\nTwo.\nThree.");
    }

    #[test]
    fn missing_markers_fall_back_to_placeholders() {
        let raw = long_html(120);
        let post = parse_reply(&raw, "AWS");
        assert_eq!(post.title, "AI Generated Blog Post");
        assert_eq!(
            post.excerpt,
            "An informative blog post about software development."
        );
        // Entirely unmarked reply: the whole text becomes the body
        assert_eq!(post.content, raw);
    }

    #[test]
    fn body_is_never_empty_for_any_non_empty_reply() {
        for raw in [
            "just a sentence",
            "TITLE: only a title",
            "TITLE: T\nEXCERPT: E",
            "EXCERPT: floating excerpt with no content marker at all",
        ] {
            let post = parse_reply(raw, "Cloud");
            assert!(!post.content.is_empty(), "empty body for {raw:?}");
        }
    }

    #[test]
    fn short_content_marker_falls_through_the_ladder() {
        let raw = "TITLE: T\nEXCERPT: E\nCONTENT: short";
        let post = parse_reply(raw, "Python");
        assert_eq!(post.title, "T");
        assert_eq!(post.excerpt, "E");
        assert_eq!(post.content, "short");
    }

    #[test]
    fn truncated_reply_without_content_marker_recovers_a_body() {
        let tail = long_html(120);
        let raw = format!("TITLE: Cut off\nEXCERPT: Partial.\n{tail}");
        let post = parse_reply(&raw, "DevOps");
        assert_eq!(post.title, "Cut off");
        assert!(post.content.contains("word"));
    }

    #[test]
    fn title_is_capped_at_300_chars() {
        let raw = format!("TITLE: {}\nCONTENT: {}", "x".repeat(400), long_html(120));
        let post = parse_reply(&raw, "React");
        assert_eq!(post.title.chars().count(), 300);
    }

    #[test]
    fn excerpt_is_capped_at_800_chars() {
        let raw = format!(
            "TITLE: T\nEXCERPT: {}\nCONTENT: {}",
            "y".repeat(900),
            long_html(120)
        );
        let post = parse_reply(&raw, "React");
        assert_eq!(post.excerpt.chars().count(), 800);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let raw = format!("TITLE: {}\nCONTENT: {}", "é".repeat(400), long_html(120));
        let post = parse_reply(&raw, "React");
        assert_eq!(post.title.chars().count(), 300);
    }
}
