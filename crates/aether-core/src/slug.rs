/// Generate a URL-safe, lowercase slug from free text.
///
/// ASCII alphanumerics are kept, whitespace, `-` and `_` act as word
/// separators, everything else is dropped. Separator runs collapse to a single
/// `-` and the result never starts or ends with one.
#[must_use]
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c)
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_joins_words() {
        assert_eq!(slugify("Ergonomic Cotton Sneakers"), "ergonomic-cotton-sneakers");
    }

    #[test]
    fn slugify_drops_punctuation() {
        assert_eq!(slugify("Hand-Crafted Aviators!"), "hand-crafted-aviators");
        assert_eq!(slugify("Rock & Roll (Limited)"), "rock-roll-limited");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("  Sleek   __ Steel -- Boots "), "sleek-steel-boots");
    }

    #[test]
    fn slugify_drops_non_ascii_letters() {
        assert_eq!(slugify("Café Loafers"), "caf-loafers");
    }

    #[test]
    fn slugify_empty_and_symbol_only_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slugify_is_idempotent() {
        let once = slugify("Practical Bamboo Wayfarers");
        assert_eq!(slugify(&once), once);
    }
}
