//! Heuristic parsing of bare filenames into a scene record.
//!
//! Filenames carry no guaranteed separators, so several pattern strategies are
//! tried in a fixed order and the first one that yields a non-empty record
//! wins. Each strategy is a pure `&str -> Option<SceneRecord>` function.
//!
//! Order:
//! 1. `loose` - `<studio> - <scene> <performers>` with lazy groups
//! 2. `underscore` - `<studio>_-_<scene>_-_<performer>` as a regex
//! 3. `underscore-split` - split on `_-_`, one performer per trailing part
//! 4. `fallback` - ` - ` for studio/scene plus a separator scan for performers

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::scene::SceneRecord;
use crate::text::normalize;
use crate::title::{split_names, DASH_SEPARATOR};

/// Separator used by release-style filenames.
pub const UNDERSCORE_SEPARATOR: &str = "_-_";

/// Candidate performer separators for the fallback scan, in priority order.
const PERFORMER_SEPARATORS: &[&str] = &[", ", " & ", UNDERSCORE_SEPARATOR];

/// Tokens this short are never performer names.
const MIN_PERFORMER_CHARS: usize = 3;

/// `Studio - Scene Performers`. Both leading groups are lazy, so the scene name
/// stops at the first whitespace after the dash and the remainder is the blob.
static LOOSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)\s*-\s*(.+?)\s+(.+?)$").unwrap());

/// `STUDIO_-_SCENE_-_PERFORMERS`. The last group runs to the end of the input
/// and may itself contain further `_-_` separators.
static UNDERSCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)_-_(.+?)_-_(.+?)$").unwrap());

/// A named fragment strategy.
pub type FragmentStrategy = fn(&str) -> Option<SceneRecord>;

/// Strategies in evaluation order.
pub const STRATEGIES: &[(&str, FragmentStrategy)] = &[
    ("loose", loose_pattern as FragmentStrategy),
    ("underscore", underscore_pattern as FragmentStrategy),
    ("underscore-split", underscore_split as FragmentStrategy),
    ("fallback", generic_fallback as FragmentStrategy),
];

/// Parses a filename-like string. Never fails; unmatched input gives an empty record.
pub fn parse_fragment(filename: &str) -> SceneRecord {
    for (name, strategy) in STRATEGIES {
        if let Some(record) = strategy(filename) {
            debug!("Fragment matched '{}' strategy", name);
            return record;
        }
    }
    debug!("Fragment matched no strategy");
    SceneRecord::empty()
}

fn non_empty(record: SceneRecord) -> Option<SceneRecord> {
    if record.is_empty() {
        None
    } else {
        Some(record)
    }
}

/// Strategy 1: `<studio> - <scene> <performers>`.
///
/// The performer blob is split on `,` when it has one, otherwise it is a
/// single performer name.
pub fn loose_pattern(filename: &str) -> Option<SceneRecord> {
    let caps = LOOSE_RE.captures(filename)?;

    let mut record = SceneRecord::empty();
    record.set_studio(normalize(&caps[1]));
    record.set_title(normalize(&caps[2]));

    let blob = &caps[3];
    if blob.contains(',') {
        record.set_performers(split_names(blob, ','));
    } else {
        record.set_performers([normalize(blob)]);
    }

    non_empty(record)
}

/// Raw groups of the underscore regex: studio, scene, performer blob.
pub fn underscore_groups(filename: &str) -> Option<(String, String, String)> {
    let caps = UNDERSCORE_RE.captures(filename)?;
    Some((
        caps[1].to_string(),
        caps[2].to_string(),
        caps[3].to_string(),
    ))
}

/// Strategy 2: `<studio>_-_<scene>_-_<performer>` with a single performer.
///
/// When the performer group still contains `_-_` the regex has swallowed
/// several names into one, so the input is left for [`underscore_split`].
pub fn underscore_pattern(filename: &str) -> Option<SceneRecord> {
    if !filename.contains(UNDERSCORE_SEPARATOR) {
        return None;
    }
    let (studio, scene, performers) = underscore_groups(filename)?;
    if performers.contains(UNDERSCORE_SEPARATOR) {
        return None;
    }

    let mut record = SceneRecord::empty();
    record.set_studio(normalize(&studio));
    record.set_title(normalize(&scene));
    record.set_performers([normalize(&performers)]);
    non_empty(record)
}

/// Strategy 3: split on `_-_`; part 0 studio, part 1 scene, the rest performers.
pub fn underscore_split(filename: &str) -> Option<SceneRecord> {
    if !filename.contains(UNDERSCORE_SEPARATOR) {
        return None;
    }
    let parts: Vec<&str> = filename.split(UNDERSCORE_SEPARATOR).collect();
    if parts.len() < 3 {
        return None;
    }

    let mut record = SceneRecord::empty();
    record.set_studio(normalize(parts[0]));
    record.set_title(normalize(parts[1]));
    record.set_performers(parts[2..].iter().map(|p| normalize(p)));
    non_empty(record)
}

/// Strategy 4: best-effort split on ` - ` plus a performer separator scan.
///
/// Separators are tried in order; one whose tokens are all filtered out does
/// not stop the scan.
pub fn generic_fallback(filename: &str) -> Option<SceneRecord> {
    let mut record = SceneRecord::empty();

    if filename.contains(DASH_SEPARATOR) {
        let mut parts = filename.split(DASH_SEPARATOR);
        if let Some(studio) = parts.next() {
            record.set_studio(normalize(studio));
        }
        if let Some(scene) = parts.next() {
            record.set_title(normalize(scene));
        }
    }

    for separator in PERFORMER_SEPARATORS {
        if !filename.contains(separator) {
            continue;
        }
        let candidates: Vec<&str> = filename
            .split(separator)
            .filter(|token| looks_like_name(token))
            .collect();
        if !candidates.is_empty() {
            record.set_performers(candidates.into_iter().map(normalize));
            break;
        }
    }

    non_empty(record)
}

/// Longer than two characters and not purely numeric.
fn looks_like_name(token: &str) -> bool {
    token.chars().count() >= MIN_PERFORMER_CHARS && !token.chars().all(char::is_numeric)
}
