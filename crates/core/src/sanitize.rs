//! Free-text sanitization.
//!
//! Text destined for storage goes through four steps, in this order:
//!
//! 1. [`trim`] leading and trailing whitespace,
//! 2. [`strip_tags`]: drop every `<...>` span,
//! 3. [`strip_markup_chars`]: drop any remaining `<`, `>`, `"` and `'`,
//! 4. [`truncate_chars`] to the character limit.
//!
//! The order is observable: tag stripping runs on the trimmed text and the character strip
//! runs on what tag stripping left behind, so fragments such as an unterminated `<script`
//! lose their bracket in step 3. Words outside brackets are never removed.

use crate::error::{ValidationError, ValidationResult};
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"));

const MARKUP_CHARS: [char; 4] = ['<', '>', '"', '\''];

/// Runs the full sanitization pipeline over `input`.
///
/// The result is at most `max_length` characters long and never contains `<`, `>`, `"` or
/// `'`. An empty result is valid.
pub fn sanitize_string(input: &str, max_length: usize) -> String {
    let trimmed = trim(input);
    let untagged = strip_tags(trimmed);
    let stripped = strip_markup_chars(&untagged);
    truncate_chars(&stripped, max_length).to_owned()
}

/// Sanitizes an untyped value, which must be a JSON string.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidType`] for `None`, `null` and every non-string value.
pub fn sanitize_value(input: Option<&Value>, max_length: usize) -> ValidationResult<String> {
    match input {
        Some(Value::String(s)) => Ok(sanitize_string(s, max_length)),
        _ => Err(ValidationError::InvalidType(
            "Girdi string formatında olmalıdır".into(),
        )),
    }
}

pub fn trim(input: &str) -> &str {
    input.trim()
}

pub fn strip_tags(input: &str) -> Cow<'_, str> {
    TAG_PATTERN.replace_all(input, "")
}

pub fn strip_markup_chars(input: &str) -> Cow<'_, str> {
    if input.contains(&MARKUP_CHARS[..]) {
        Cow::Owned(input.chars().filter(|c| !MARKUP_CHARS.contains(c)).collect())
    } else {
        Cow::Borrowed(input)
    }
}

/// Hard cutoff after `max_length` Unicode scalar values.
pub fn truncate_chars(input: &str, max_length: usize) -> &str {
    match input.char_indices().nth(max_length) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MAX_STRING_LENGTH;

    fn sanitize(input: &str) -> String {
        sanitize_string(input, DEFAULT_MAX_STRING_LENGTH)
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(sanitize("  Ahmet  "), "Ahmet");
        assert_eq!(sanitize("\n\tAyşe\r\n"), "Ayşe");
    }

    #[test]
    fn removes_script_tags_but_keeps_their_text() {
        // No `/` survives: `</script>` is a whole tag and is dropped in the tag step.
        assert_eq!(
            sanitize("<script>alert('xss')</script>Ahmet"),
            "alert(xss)Ahmet"
        );
    }

    #[test]
    fn removes_tags_with_attributes() {
        assert_eq!(sanitize("<img src=x onerror=alert(1)>Zeynep"), "Zeynep");
        assert_eq!(sanitize("<b>kalın</b> yazı"), "kalın yazı");
    }

    #[test]
    fn removes_tags_spanning_lines() {
        assert_eq!(sanitize("a<div\nclass=x>b"), "ab");
    }

    #[test]
    fn strips_unterminated_tag_fragments() {
        assert_eq!(sanitize("<script"), "script");
        assert_eq!(sanitize("Ali >"), "Ali ");
    }

    #[test]
    fn strips_quotes() {
        assert_eq!(sanitize(r#"say "hi" it's"#), "say hi its");
    }

    #[test]
    fn word_script_outside_brackets_survives() {
        assert_eq!(sanitize("javascript script"), "javascript script");
    }

    #[test]
    fn truncates_to_max_length() {
        let long = "a".repeat(300);
        assert_eq!(sanitize(&long).chars().count(), 255);
        assert_eq!(sanitize_string("abcdef", 3), "abc");
        assert_eq!(sanitize_string("abc", 0), "");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(sanitize_string("çğışöü", 4), "çğış");
    }

    #[test]
    fn truncation_happens_after_stripping() {
        assert_eq!(sanitize_string("<b>abcdef</b>", 4), "abcd");
    }

    #[test]
    fn empty_result_is_valid() {
        assert_eq!(sanitize("   "), "");
        assert_eq!(sanitize("<br/>"), "");
    }

    #[test]
    fn output_never_contains_markup_chars() {
        let inputs = [
            "<<>>\"''",
            "<a href='x'>link</a>",
            "1 < 2 > 0",
            "<<script>>alert(1)<</script>>",
            "\"quoted\" 'single'",
        ];
        for input in inputs {
            let out = sanitize(input);
            assert!(
                !out.contains(&MARKUP_CHARS[..]),
                "{input:?} sanitized to {out:?}"
            );
        }
    }

    #[test]
    fn output_respects_every_max_length() {
        let input = "  <p>Bugün 120 ml mama içti, \"çok\" iyi uyudu.</p>  ";
        for max in 0..60 {
            assert!(sanitize_string(input, max).chars().count() <= max);
        }
    }

    #[test]
    fn reapplying_is_stable_when_no_edge_whitespace_is_exposed() {
        let inputs = [
            "<script>alert('xss')</script>Ahmet",
            "Good feeding session",
            "a<b>c</b>d",
            "x\"y'z",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn stripping_can_expose_trailing_whitespace() {
        let once = sanitize("a <b>");
        assert_eq!(once, "a ");
        assert_eq!(sanitize(&once), "a");
    }

    #[test]
    fn sanitize_value_requires_a_string() {
        let err = sanitize_value(None, 255).expect_err("missing input should fail");
        assert!(matches!(err, ValidationError::InvalidType(msg) if msg.contains("string")));

        let err = sanitize_value(Some(&Value::Null), 255).expect_err("null should fail");
        assert!(matches!(err, ValidationError::InvalidType(_)));

        let err = sanitize_value(Some(&serde_json::json!(42)), 255).expect_err("number");
        assert!(matches!(err, ValidationError::InvalidType(_)));

        let ok = sanitize_value(Some(&serde_json::json!(" <i>Can</i> ")), 255).unwrap();
        assert_eq!(ok, "Can");
    }
}
