// src/core/text.rs

/// Lower-case once so repeated comparisons don't redo it.
#[inline]
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test. `needle_lower` must already be lower-cased.
/// An empty needle is contained in everything.
#[inline]
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() { return true; }
    haystack.to_lowercase().contains(needle_lower)
}

/// First character upper, rest lower. Underscores are left alone:
/// "clean_sheets" -> "Clean_sheets".
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => s!(),
    }
}

/// Display label for a rule key: "penalty_save" -> "Penalty Save".
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
