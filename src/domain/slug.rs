//! Slug derivation from human-readable titles.
//!
//! Uniqueness is resolved by the service layer, which probes the store and
//! suffixes an incrementing counter; the store's unique constraint remains
//! the final arbiter under concurrent creates.

/// Base slug used when a title contains no slug-safe characters at all.
pub const FALLBACK_SLUG: &str = "curso";

/// Derive a URL-safe base slug from a title.
///
/// Lowercases and trims the title, drops characters outside
/// `[a-z0-9_\s-]`, collapses runs of whitespace/underscores/hyphens into a
/// single hyphen and trims leading/trailing hyphens.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for ch in lowered.trim().chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_separator = !slug.is_empty();
        } else if ch.is_ascii_alphanumeric() {
            if pending_separator {
                slug.push('-');
                pending_separator = false;
            }
            slug.push(ch);
        }
        // Everything else is stripped without acting as a separator.
    }

    slug
}

/// Candidate slug for the nth collision-resolution attempt.
///
/// Attempt 0 is the base slug itself; attempt n probes `{base}-{n}`.
pub fn slug_candidate(base: &str, attempt: usize) -> String {
    let base = if base.is_empty() { FALLBACK_SLUG } else { base };
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Intro to Testing"), "intro-to-testing");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(slugify("Rust  __ avanzado -- 2024"), "rust-avanzado-2024");
    }

    #[test]
    fn strips_non_slug_characters() {
        assert_eq!(slugify("¡Aprende C++ ya!"), "aprende-c-ya");
    }

    #[test]
    fn trims_leading_and_trailing_hyphens() {
        assert_eq!(slugify("--hola--"), "hola");
    }

    #[test]
    fn empty_title_yields_empty_base() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slug_candidate("", 0), FALLBACK_SLUG);
    }

    #[test]
    fn candidates_suffix_a_counter() {
        assert_eq!(slug_candidate("intro-to-testing", 0), "intro-to-testing");
        assert_eq!(slug_candidate("intro-to-testing", 1), "intro-to-testing-1");
        assert_eq!(slug_candidate("intro-to-testing", 2), "intro-to-testing-2");
    }
}
