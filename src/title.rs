//! Separator heuristics for page titles shaped like `Studio - Performers - Scene`.
//!
//! The three extractors are independent: each one looks at the same title and
//! returns an empty value when its shape is not present. Sites decide which
//! extractor to trust, since studio and performers both compete for the first
//! segment.

use crate::text::normalize;

/// ASCII hyphen with spaces on both sides.
pub const DASH_SEPARATOR: &str = " - ";

/// En-dash variant, only recognized when no ASCII separator exists.
pub const EN_DASH_SEPARATOR: &str = " \u{2013} ";

/// Picks the separator in effect for `title`, preferring the ASCII form.
fn active_separator(title: &str) -> Option<&'static str> {
    if title.contains(DASH_SEPARATOR) {
        Some(DASH_SEPARATOR)
    } else if title.contains(EN_DASH_SEPARATOR) {
        Some(EN_DASH_SEPARATOR)
    } else {
        None
    }
}

/// First ` - ` segment of the title, normalized. Empty when there is no separator.
///
/// The en-dash separator is deliberately not considered here.
pub fn extract_studio(title: &str) -> String {
    if !title.contains(DASH_SEPARATOR) {
        return String::new();
    }
    title
        .split(DASH_SEPARATOR)
        .next()
        .map(normalize)
        .unwrap_or_default()
}

/// Last segment of the title, normalized. Empty when there is no separator.
pub fn extract_scene_name(title: &str) -> String {
    let Some(separator) = active_separator(title) else {
        return String::new();
    };
    title
        .rsplit(separator)
        .next()
        .map(normalize)
        .unwrap_or_default()
}

/// Performer names from the first segment, split on `&` or else on `,`.
///
/// A first segment containing neither is taken to be a studio name and
/// yields nothing.
pub fn extract_performers(title: &str) -> Vec<String> {
    let Some(separator) = active_separator(title) else {
        return Vec::new();
    };
    let first = title.split(separator).next().unwrap_or_default();

    if first.contains('&') {
        split_names(first, '&')
    } else if first.contains(',') {
        split_names(first, ',')
    } else {
        Vec::new()
    }
}

/// Splits `segment` on `delimiter`, normalizing each name and dropping empties.
pub(crate) fn split_names(segment: &str, delimiter: char) -> Vec<String> {
    segment
        .split(delimiter)
        .map(normalize)
        .filter(|name| !name.is_empty())
        .collect()
}
