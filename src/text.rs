//! Text cleanup shared by every extractor.
//!
//! Only a fixed set of HTML entities is decoded. Anything else is left as-is,
//! so `&lt;` survives normalization untouched. Decoding repeats until no known
//! entity is left, which keeps double-encoded input (`&amp;amp;`) idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

/// Entity sequences replaced literally, in order.
const ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&nbsp;", " "),
    ("&#8211;", "-"),
    ("&#8217;", "'"),
    ("&#038;", "&"),
];

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Decodes the known entities, collapses whitespace runs and trims.
///
/// Total and idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut decoded = text.to_string();
    // Every replacement shortens the string, so this terminates.
    while ENTITIES.iter().any(|(entity, _)| decoded.contains(entity)) {
        for (entity, replacement) in ENTITIES {
            decoded = decoded.replace(entity, replacement);
        }
    }

    WHITESPACE_RE.replace_all(&decoded, " ").trim().to_string()
}
