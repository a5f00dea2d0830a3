//! # Text Helpers
//!
//! Markup stripping and word-boundary truncation used to derive descriptions
//! from item bodies. Both operate on `char`s, never raw bytes, so multi-byte
//! text is never split inside a code point.

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style)\b[^>]*>.*?</\s*(?:script|style)\s*>").unwrap()
});

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Removes `<script>` and `<style>` elements (including their content) and
/// every other tag, then trims surrounding whitespace. Entities are left as-is.
pub fn strip_markup(html: &str) -> String {
    let without_code = SCRIPT_OR_STYLE.replace_all(html, "");
    TAG.replace_all(&without_code, "").trim().to_string()
}

/// Truncates `text` to at most `limit` characters, preferring to cut at the
/// last whitespace that keeps the result within the limit.
///
/// Text that already fits is returned unchanged. When the first `limit`
/// characters contain no usable break, the text is hard-cut at `limit`
/// characters. No ellipsis is appended.
pub fn trim_to_word_boundary(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    // The character just past the limit counts too: a space there means the
    // first `limit` characters end exactly on a word.
    let break_at = text
        .char_indices()
        .take(limit + 1)
        .filter(|(_, c)| c.is_whitespace())
        .map(|(idx, _)| idx)
        .last();

    if let Some(idx) = break_at {
        let line = text[..idx].trim_end();
        if !line.is_empty() {
            return line.to_string();
        }
    }

    hard_truncate(text, limit).to_string()
}

fn hard_truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
