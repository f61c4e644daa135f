use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Canonicalizes free text into the slug used to key the persistent store.
///
/// Lower-cases, trims, and collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen. Accented letters count as outside the
/// range, so `"não"` becomes `"n-o"`. Total and idempotent.
pub fn normalize(input: &str) -> String {
    let lowered = input.trim().to_lowercase();

    NON_SLUG
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
