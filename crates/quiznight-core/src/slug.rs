//! URL slugs for events.

use rand::Rng;

pub const MAX_SLUG_LEN: usize = 60;

/// Turns a title into a URL-safe slug: lowercase, separators collapsed to
/// single hyphens, everything outside `[a-z0-9-]` dropped. Truncation
/// prefers a word boundary when one exists past 75% of `max_len`. An empty
/// title yields `untitled-event`; a title that slugifies to nothing (for
/// example only punctuation) yields `event`.
pub fn slugify(title: &str, max_len: usize) -> String {
    if title.trim().is_empty() {
        return "untitled-event".to_string();
    }

    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;
    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            last_was_hyphen = false;
        } else if (ch.is_whitespace() || ch == '-' || ch == '_' || ch == '/' || ch == '.') && !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        return "event".to_string();
    }

    if slug.len() > max_len {
        let boundary = slug[..max_len].rfind('-').filter(|&idx| idx >= max_len * 3 / 4);
        slug.truncate(boundary.unwrap_or(max_len));
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}

/// Resolves `candidate` against already-taken slugs (compared
/// case-insensitively): `-2`, `-3`, … up to `max_attempts`, then a random
/// 8-hex-character suffix.
pub fn make_unique_slug<'a, I>(candidate: &str, existing: I, max_attempts: u32) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: std::collections::HashSet<String> = existing.into_iter().map(str::to_lowercase).collect();

    if !taken.contains(&candidate.to_lowercase()) {
        return candidate.to_string();
    }

    for n in 2..=max_attempts {
        let attempt = format!("{candidate}-{n}");
        if !taken.contains(&attempt.to_lowercase()) {
            return attempt;
        }
    }

    let suffix: u32 = rand::rng().random();
    format!("{candidate}-{suffix:08x}")
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LEN
        && slug.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_titles() {
        assert_eq!(slugify("Wine Night", MAX_SLUG_LEN), "wine-night");
        assert_eq!(slugify("  Trivia -- at / the_Taproom!  ", MAX_SLUG_LEN), "trivia-at-the-taproom");
        assert_eq!(slugify("80s Music & Movies", MAX_SLUG_LEN), "80s-music-movies");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(slugify("", MAX_SLUG_LEN), "untitled-event");
        assert_eq!(slugify("   ", MAX_SLUG_LEN), "untitled-event");
        assert_eq!(slugify("!!!", MAX_SLUG_LEN), "event");
    }

    #[test]
    fn test_truncation_prefers_word_boundary() {
        // The boundary at "quiz|night" sits past 75% of ten characters.
        assert_eq!(slugify("quiznight everyone", 10), "quiznight");
        // No boundary past 75%: hard cut.
        assert_eq!(slugify("abcdefghijkl", 10), "abcdefghij");
    }

    #[test]
    fn test_all_outputs_are_valid() {
        for title in [
            "Wine Night",
            "",
            "!!!",
            "Ünïcøde Night",
            "a_very/long.title with every-separator imaginable and then some more words",
            "--edge--case--",
        ] {
            let slug = slugify(title, MAX_SLUG_LEN);
            assert!(is_valid_slug(&slug), "invalid slug {slug:?} for title {title:?}");
        }
    }

    #[test]
    fn test_make_unique_slug() {
        assert_eq!(make_unique_slug("wine-night", ["other"], 10), "wine-night");
        assert_eq!(make_unique_slug("wine-night", ["wine-night"], 10), "wine-night-2");
        assert_eq!(
            make_unique_slug("wine-night", ["wine-night", "wine-night-2"], 10),
            "wine-night-3"
        );
        // Comparison ignores case.
        assert_eq!(make_unique_slug("wine-night", ["Wine-Night"], 10), "wine-night-2");
    }

    #[test]
    fn test_make_unique_slug_falls_back_to_random_suffix() {
        let existing: Vec<String> = std::iter::once("wine-night".to_string())
            .chain((2..=5).map(|n| format!("wine-night-{n}")))
            .collect();
        let slug = make_unique_slug("wine-night", existing.iter().map(String::as_str), 5);
        let suffix = slug.strip_prefix("wine-night-").unwrap();
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|ch| ch.is_ascii_hexdigit()));
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("wine-night-2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-wine"));
        assert!(!is_valid_slug("wine-"));
        assert!(!is_valid_slug("wine--night"));
        assert!(!is_valid_slug("Wine-Night"));
        assert!(!is_valid_slug(&"a".repeat(61)));
    }
}
