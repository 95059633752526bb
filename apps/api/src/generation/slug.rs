//! Title-to-slug derivation. A slug is derived from the title once, at
//! creation time, and never re-derived on update.

/// Lowercase ASCII slug: alphanumeric runs joined by single hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
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
    fn titles_become_lowercase_hyphenated() {
        assert_eq!(slugify("Django REST API"), "django-rest-api");
        assert_eq!(slugify("Mastering React Hooks!"), "mastering-react-hooks");
    }

    #[test]
    fn punctuation_runs_collapse_to_one_hyphen() {
        assert_eq!(slugify("CI/CD: Pipelines -- Explained"), "ci-cd-pipelines-explained");
    }

    #[test]
    fn leading_and_trailing_separators_are_dropped() {
        assert_eq!(slugify("  Hello World  "), "hello-world");
        assert_eq!(slugify("...dots..."), "dots");
    }

    #[test]
    fn non_ascii_characters_are_treated_as_separators() {
        assert_eq!(slugify("Café Culture"), "caf-culture");
    }
}
