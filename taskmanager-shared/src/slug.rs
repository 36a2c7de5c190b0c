/// Slug derivation
///
/// Slugs are computed once at creation time from a human-readable field
/// (username for users, title for tasks), stored alongside the row, and
/// never recomputed on update.

/// Derives a URL-safe slug from an arbitrary string.
///
/// Keeps ASCII alphanumerics, lowercased; every other character — non-ASCII
/// letters included — acts as a separator, and runs of separators collapse
/// into a single hyphen. Leading and trailing separators are stripped, so
/// the result matches `^[-a-z0-9]*$` with no edge hyphens.
///
/// # Example
///
/// ```
/// use taskmanager_shared::slug::slugify;
///
/// assert_eq!(slugify("john_doe"), "john-doe");
/// assert_eq!(slugify("Write the Report!"), "write-the-report");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscores_become_hyphens() {
        assert_eq!(slugify("john_doe"), "john-doe");
    }

    #[test]
    fn test_whitespace_and_case() {
        assert_eq!(slugify("Write The Report"), "write-the-report");
    }

    #[test]
    fn test_punctuation_runs_collapse() {
        assert_eq!(slugify("hello -- world!!"), "hello-world");
    }

    #[test]
    fn test_edge_separators_stripped() {
        assert_eq!(slugify("  trimmed  "), "trimmed");
        assert_eq!(slugify("--x--"), "x");
    }

    #[test]
    fn test_numeric_input() {
        assert_eq!(slugify("task 42"), "task-42");
    }

    #[test]
    fn test_non_ascii_acts_as_separator() {
        assert_eq!(slugify("Héllo Wörld"), "h-llo-w-rld");
        assert_eq!(slugify("задача"), "");
    }

    #[test]
    fn test_output_stays_url_safe() {
        for input in ["Héllo Wörld", "crème brûlée", "mixed_Ascii-and-ünïcode 7"] {
            let slug = slugify(input);
            assert!(
                slug.chars()
                    .all(|c| c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit()),
                "slug {:?} contains characters outside [-a-z0-9]",
                slug
            );
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        }
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
