// crates/wayfarer-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::text::fold_key;
///
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// assert_eq!(fold_key("ÅLAND Islands"), "aland islands");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and trimming.
///
/// ```rust
/// use wayfarer_core::text::equals_folded;
///
/// assert!(equals_folded("São Tomé and Príncipe", "sao tome and principe"));
/// assert!(!equals_folded("Niger", "Nigeria"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a.trim()) == fold_key(b.trim())
}
