//! Name handling shared by the loader and the series core.
//!
//! Two conventions live here:
//!
//! ## Series identifiers
//!
//! A post's human-readable `series` name is reduced to a URL-safe identifier
//! by [`normalize`]. The identifier is the grouping key, so names that differ
//! only in casing, spacing or punctuation land in the same series:
//!
//! - `"Backend Engineering in Axum "` → `"backend-engineering-in-axum"`
//! - `"backend engineering in axum"` → `"backend-engineering-in-axum"`
//! - `"Rust's Type System: Part I"` → `"rusts-type-system-part-i"`
//!
//! ## Post filenames
//!
//! Post files may carry a `YYYY-MM-DD-` date prefix, which is split off by
//! [`parse_post_stem`]:
//! - `2025-10-26-coding-agent` → date=2025-10-26, slug="coding-agent"
//! - `coding-agent` → date=None, slug="coding-agent"

use chrono::NaiveDate;

/// Reduce a series name to its identifier.
///
/// Lowercases, keeps alphanumeric characters (Unicode-aware), turns runs of
/// whitespace, `-` and `_` into a single `-`, drops everything else, and
/// trims leading/trailing dashes. The result may be empty when the input has
/// no alphanumeric content.
///
/// Idempotent: the output only contains lowercase alphanumerics separated by
/// single dashes, which this function maps to itself.
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }
    out
}

/// Identifier for an optional series name, `None` when the name is absent or
/// normalizes to nothing.
pub fn series_id(name: Option<&str>) -> Option<String> {
    name.map(normalize).filter(|id| !id.is_empty())
}

/// Whether a post id can serve as a single path segment, both as an output
/// file name (`nav/{id}.html`) and inside a post URL.
///
/// Rejects path separators, leading dots (`.`, `..`, hidden names), and
/// control characters.
pub fn is_path_safe_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && !id.contains(['/', '\\'])
        && !id.chars().any(char::is_control)
}

/// Result of parsing a post filename stem like `2025-10-26-coding-agent`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStem {
    /// Date prefix if present.
    pub date: Option<NaiveDate>,
    /// Remainder after the date prefix. For undated stems, the full input.
    pub slug: String,
    /// Slug with dashes converted to spaces.
    pub display_title: String,
}

/// Parse a post filename stem following the optional `YYYY-MM-DD-slug`
/// convention.
///
/// - `"2025-10-26-coding-agent"` → date=Some(2025-10-26), slug="coding-agent"
/// - `"2025-10-26"` → date=Some(2025-10-26), slug=""
/// - `"2025-13-40-bogus"` → date=None, slug="2025-13-40-bogus"
/// - `"hello-world"` → date=None, slug="hello-world"
pub fn parse_post_stem(stem: &str) -> ParsedStem {
    if stem.len() >= 10 && stem.is_char_boundary(10) {
        let (prefix, rest) = stem.split_at(10);
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            if rest.is_empty() {
                return ParsedStem {
                    date: Some(date),
                    slug: String::new(),
                    display_title: String::new(),
                };
            }
            if let Some(slug) = rest.strip_prefix('-') {
                return ParsedStem {
                    date: Some(date),
                    slug: slug.to_string(),
                    display_title: slug.replace('-', " "),
                };
            }
        }
    }
    ParsedStem {
        date: None,
        slug: stem.to_string(),
        display_title: stem.replace('-', " "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_folds_case_and_trailing_space() {
        assert_eq!(
            normalize("Backend Engineering in Axum "),
            "backend-engineering-in-axum"
        );
        assert_eq!(
            normalize("backend engineering in axum"),
            "backend-engineering-in-axum"
        );
    }

    #[test]
    fn normalize_strips_punctuation() {
        assert_eq!(
            normalize("Rust's Type System: Part I"),
            "rusts-type-system-part-i"
        );
    }

    #[test]
    fn path_safe_ids() {
        assert!(is_path_safe_id("agent-loop"));
        assert!(is_path_safe_id("v1.2-release"));
        assert!(is_path_safe_id("café"));
        assert!(!is_path_safe_id(""));
        assert!(!is_path_safe_id("2025/intro"));
        assert!(!is_path_safe_id("..\\escape"));
        assert!(!is_path_safe_id("../../x"));
        assert!(!is_path_safe_id(".hidden"));
        assert!(!is_path_safe_id("tab\tid"));
    }

    #[test]
    fn normalize_collapses_separators() {
        assert_eq!(normalize("  a -- b__c\t d  "), "a-b-c-d");
    }

    #[test]
    fn normalize_keeps_unicode_letters() {
        assert_eq!(normalize("Café Über"), "café-über");
    }

    #[test]
    fn normalize_punctuation_only_is_empty() {
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn series_id_absent_or_empty() {
        assert_eq!(series_id(None), None);
        assert_eq!(series_id(Some("???")), None);
        assert_eq!(series_id(Some("Axum")), Some("axum".to_string()));
    }

    #[test]
    fn stem_with_date_prefix() {
        let p = parse_post_stem("2025-10-26-coding-agent");
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2025, 10, 26));
        assert_eq!(p.slug, "coding-agent");
        assert_eq!(p.display_title, "coding agent");
    }

    #[test]
    fn stem_date_only() {
        let p = parse_post_stem("2025-10-26");
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2025, 10, 26));
        assert_eq!(p.slug, "");
    }

    #[test]
    fn stem_invalid_date_is_kept_as_slug() {
        let p = parse_post_stem("2025-13-40-bogus");
        assert_eq!(p.date, None);
        assert_eq!(p.slug, "2025-13-40-bogus");
    }

    #[test]
    fn stem_without_date() {
        let p = parse_post_stem("hello-world");
        assert_eq!(p.date, None);
        assert_eq!(p.slug, "hello-world");
        assert_eq!(p.display_title, "hello world");
    }

    #[test]
    fn stem_date_glued_to_text_is_not_a_prefix() {
        let p = parse_post_stem("2025-10-26x");
        assert_eq!(p.date, None);
        assert_eq!(p.slug, "2025-10-26x");
    }

    #[test]
    fn stem_multibyte_near_boundary() {
        let p = parse_post_stem("ééééé-post");
        assert_eq!(p.date, None);
        assert_eq!(p.slug, "ééééé-post");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(s in "\\PC*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn prop_normalize_has_no_edge_dashes(s in "\\PC*") {
            let id = normalize(&s);
            prop_assert!(!id.starts_with('-'));
            prop_assert!(!id.ends_with('-'));
            prop_assert!(!id.contains("--"));
        }
    }
}
