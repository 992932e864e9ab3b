//! Canonical lookup-key normalization for filter indexes.

/// Normalizes a free-text label into a canonical lookup key.
///
/// Lower-cases the label, replaces every maximal run of characters outside
/// `[a-z0-9]` with a single underscore, and strips leading and trailing
/// underscores. Labels differing only in case, punctuation, or whitespace
/// style map to the same key. Distinct labels may still collide ("Pool!"
/// and "Pool?" both become `pool`); the filter index accepts that.
pub fn normalize_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    let mut pending_gap = false;
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_gap && !key.is_empty() {
                key.push('_');
            }
            pending_gap = false;
            key.push(c.to_ascii_lowercase());
        } else {
            pending_gap = true;
        }
    }
    key
}
