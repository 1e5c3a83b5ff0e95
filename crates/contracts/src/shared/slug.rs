/// Slug normalization for category names
///
/// Derives a stable, URL-safe identifier from a free-text name:
/// lowercase, runs of whitespace collapsed to a single hyphen.
/// Pure function, no hidden state.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_hyphenate() {
        assert_eq!(slugify("Home Decoration"), "home-decoration");
        assert_eq!(slugify("Womens Dresses"), "womens-dresses");
    }

    #[test]
    fn test_stable_for_slugged_input() {
        assert_eq!(slugify("smartphones"), "smartphones");
        assert_eq!(slugify("mens-shirts"), "mens-shirts");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(slugify("  Sports   Accessories "), "sports-accessories");
        assert_eq!(slugify(""), "");
    }
}
