//! Word counts, reading time and anchor slugs.

/// Reading speed used when an article does not set `readingTime`.
pub const WORDS_PER_MINUTE: usize = 200;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes to read `words` words, rounded up, never below 1.
pub fn reading_time_minutes(words: usize) -> u32 {
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// Lowercase kebab-case slug: ASCII alphanumerics kept, runs of anything else
/// collapse to a single '-'.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// True if `slug` is already in canonical kebab-case form.
pub fn is_canonical_slug(slug: &str) -> bool {
    !slug.is_empty() && slugify(slug) == slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time_minutes(0), 1);
        assert_eq!(reading_time_minutes(200), 1);
        assert_eq!(reading_time_minutes(201), 2);
        assert_eq!(reading_time_minutes(1000), 5);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Cloudways vs DigitalOcean"), "cloudways-vs-digitalocean");
        assert_eq!(slugify("  What's next?  "), "what-s-next");
        assert!(is_canonical_slug("best-vps-hosting"));
        assert!(!is_canonical_slug("Best_VPS"));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one  two\nthree"), 3);
        assert_eq!(word_count(""), 0);
    }
}
