//! Slug derivation
//!
//! Pipeline: lowercase → collapse runs of non-alphanumeric characters into a
//! single `-` → trim leading/trailing `-`.
//!
//! Only ASCII letters and digits survive, so slugs are always URL-safe.

/// Derive a slug from a title.
///
/// Pure and deterministic. Titles made only of punctuation or whitespace
/// derive to an empty string, which the store rejects.
///
/// # Example
///
/// ```
/// use dashstore_core::slug::derive_slug;
///
/// assert_eq!(derive_slug("test dash 23"), "test-dash-23");
/// assert_eq!(derive_slug("  CPU / Memory (prod)  "), "cpu-memory-prod");
/// assert_eq!(derive_slug("!!!"), "");
/// ```
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_sep = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    slug
}
