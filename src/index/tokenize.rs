//! Search-term extraction for record documents.

use ahash::AHashSet;

use crate::config::IndexerConfig;
use crate::record::Record;

/// Extracts the deduplicated search-term list for a record.
///
/// Every text field contributes: name, description, location, theme, each
/// amenity and each promotional tag. Text is lower-cased and split on runs of
/// non-alphanumeric characters (`'`, `-`, `&` and whitespace all separate),
/// tokens shorter than the configured minimum are discarded, duplicates keep
/// their first-seen position, and the result is truncated to the configured
/// cap. Absent optional fields contribute nothing; this never fails.
///
/// Purely numeric tokens are kept when long enough: a three-digit building
/// number is searchable on purpose.
pub fn build_search_terms(record: &Record, config: &IndexerConfig) -> Vec<String> {
    let mut terms = Vec::new();
    let mut seen = AHashSet::new();

    let mut push_text = |text: &str| {
        collect_tokens(text, config.min_token_len, &mut seen, &mut terms);
    };

    push_text(&record.name);
    if let Some(description) = &record.description {
        push_text(description);
    }
    push_text(&record.location);
    if let Some(theme) = &record.theme {
        push_text(theme);
    }
    for amenity in &record.amenities {
        push_text(amenity);
    }
    for tag in &record.promotional_tags {
        push_text(tag);
    }

    terms.truncate(config.max_search_terms);
    terms
}

/// Walks `text` accumulating lower-cased alphanumeric tokens, appending each
/// unseen token of sufficient length to `out`.
fn collect_tokens(text: &str, min_len: usize, seen: &mut AHashSet<String>, out: &mut Vec<String>) {
    let mut token = String::new();
    for c in text.chars() {
        if c.is_alphanumeric() {
            token.extend(c.to_lowercase());
        } else {
            flush_token(&mut token, min_len, seen, out);
        }
    }
    flush_token(&mut token, min_len, seen, out);
}

fn flush_token(token: &mut String, min_len: usize, seen: &mut AHashSet<String>, out: &mut Vec<String>) {
    if token.chars().count() >= min_len && !seen.contains(token.as_str()) {
        seen.insert(token.clone());
        out.push(std::mem::take(token));
    } else {
        token.clear();
    }
}
