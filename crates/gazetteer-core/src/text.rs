// crates/gazetteer-core/src/text.rs

/// Convert a string into its canonical comparison form: lowercased with
/// leading and trailing whitespace removed.
///
/// Every query operation in this crate compares strings through this
/// function and nothing else, so two inputs that differ only in case or
/// surrounding whitespace are equal for all lookups. Lowercasing is the
/// locale-independent `str::to_lowercase`; no transliteration or accent
/// folding is applied, so `"Łódź"` and `"Lodz"` remain distinct.
///
/// # Examples
///
/// ```rust
/// use gazetteer_core::normalize;
///
/// assert_eq!(normalize("  BERLIN "), "berlin");
/// assert_eq!(normalize(normalize("  BERLIN ").as_str()), "berlin");
/// ```
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// `Option`-aware variant of [`normalize`] for boundaries where a value may
/// be absent (raw datasets, optional CLI arguments). Absence maps to the
/// empty string.
pub fn normalize_opt(s: Option<&str>) -> String {
    normalize(s.unwrap_or(""))
}
