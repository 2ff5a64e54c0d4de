//! Heading slug generation.
//!
//! Slugs are the anchor identifiers shared by the table of contents and the heading
//! elements of the rendered HTML. The rule:
//! - Trim surrounding whitespace and lowercase the text
//! - Replace each run of whitespace with a single hyphen
//! - Remove every character that is not an ASCII letter, digit, `_` or `-`
//! - Fall back to `heading` when nothing is left
//! - Append `-N` for repeated slugs within one document

use std::collections::HashMap;

/// Slug used when a heading has no slug-safe characters at all.
const EMPTY_SLUG: &str = "heading";

/// Generates unique slugs for the headings of a single document.
///
/// Tracks previously generated slugs so that repeated headings receive numeric
/// suffixes. Create one per document and feed it headings in document order.
#[derive(Debug, Default)]
pub struct Slugifier {
    /// Every slug handed out, with the last suffix used for it as a base.
    counts: HashMap<String, usize>,
}

impl Slugifier {
    /// Creates a new slugifier with no prior slugs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a slug for heading text, deduplicating against earlier headings.
    ///
    /// The first occurrence of a base slug is returned as-is; later ones get `-1`, `-2`, ...
    pub fn slugify(&mut self, heading: &str) -> String {
        self.deduplicate(slug(heading))
    }

    /// Ensures the slug is unique, appending `-N` suffix if needed.
    ///
    /// Suffixed slugs are reserved too, so a later heading that literally reads `foo-1`
    /// does not collide with the second `foo`.
    fn deduplicate(&mut self, base: String) -> String {
        let Some(mut n) = self.counts.get(&base).copied() else {
            self.counts.insert(base.clone(), 0);
            return base;
        };

        loop {
            n += 1;
            let candidate = format!("{base}-{n}");
            if !self.counts.contains_key(&candidate) {
                self.counts.insert(base, n);
                self.counts.insert(candidate.clone(), 0);
                return candidate;
            }
        }
    }
}

/// Derives the base slug for heading text, without deduplication.
pub fn slug(heading: &str) -> String {
    let mut result = String::with_capacity(heading.len());
    let mut in_whitespace = false;

    for c in heading.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                result.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            result.push(c.to_ascii_lowercase());
        }
    }

    if result.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_heading() {
        let mut slugifier = Slugifier::new();
        assert_eq!(slugifier.slugify("Overview"), "overview");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(slug("Hello, World!"), "hello-world");
        assert_eq!(slug("The Result<T> Type!"), "the-resultt-type");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(slug("  Multi   Space  "), "multi-space");
        assert_eq!(slug("tab\tand\nnewline"), "tab-and-newline");
    }

    #[test]
    fn test_literal_hyphens_kept() {
        assert_eq!(slug("pre-release notes"), "pre-release-notes");
        assert_eq!(slug("a - b"), "a---b");
    }

    #[test]
    fn test_leading_and_trailing_hyphens_kept() {
        assert_eq!(slug("--verbose"), "--verbose");
        assert_eq!(slug("-v flag"), "-v-flag");
        assert_eq!(slug("`--force`"), "--force");
        assert_eq!(slug("range-"), "range-");
    }

    #[test]
    fn test_removed_characters_do_not_merge_runs() {
        // Whitespace on both sides of a dropped character yields two hyphens
        assert_eq!(slug("Rust & Go"), "rust--go");
    }

    #[test]
    fn test_duplicate_headings() {
        let mut slugifier = Slugifier::new();
        assert_eq!(slugifier.slugify("Overview"), "overview");
        assert_eq!(slugifier.slugify("Overview"), "overview-1");
        assert_eq!(slugifier.slugify("Overview"), "overview-2");
    }

    #[test]
    fn test_suffix_collides_with_literal_heading() {
        let mut slugifier = Slugifier::new();
        assert_eq!(slugifier.slugify("Foo"), "foo");
        assert_eq!(slugifier.slugify("Foo"), "foo-1");
        assert_eq!(slugifier.slugify("Foo 1"), "foo-1-1");
        assert_eq!(slugifier.slugify("Foo"), "foo-2");

        let mut slugifier = Slugifier::new();
        assert_eq!(slugifier.slugify("Foo 1"), "foo-1");
        assert_eq!(slugifier.slugify("Foo"), "foo");
        assert_eq!(slugifier.slugify("Foo"), "foo-2");
    }

    #[test]
    fn test_mixed_duplicates() {
        let mut slugifier = Slugifier::new();
        assert_eq!(slugifier.slugify("Intro"), "intro");
        assert_eq!(slugifier.slugify("Setup"), "setup");
        assert_eq!(slugifier.slugify("Intro"), "intro-1");
        assert_eq!(slugifier.slugify("Setup"), "setup-1");
    }

    #[test]
    fn test_all_punctuation() {
        assert_eq!(slug("!@#$%^&*()"), "heading");
    }

    #[test]
    fn test_empty_heading() {
        assert_eq!(slug(""), "heading");
        assert_eq!(slug("   "), "heading");
    }

    #[test]
    fn test_underscores_and_numbers() {
        assert_eq!(slug("my_function_name"), "my_function_name");
        assert_eq!(slug("Chapter 1: Introduction"), "chapter-1-introduction");
    }

    #[test]
    fn test_unicode_removed() {
        assert_eq!(slug("Héllo Wörld"), "hllo-wrld");
    }

    #[test]
    fn test_deterministic_across_instances() {
        let mut a = Slugifier::new();
        let mut b = Slugifier::new();
        for text in ["Setup", "Usage", "Setup"] {
            assert_eq!(a.slugify(text), b.slugify(text));
        }
    }
}
