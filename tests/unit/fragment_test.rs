//! Unit tests for filename fragment parsing

use scenescrape::fragment::{
    generic_fallback, loose_pattern, underscore_groups, underscore_pattern, underscore_split,
};
use scenescrape::parse_fragment;

use crate::helpers::{performers, studio};

#[test]
fn loose_pattern_scene_name_stops_at_first_space() {
    // The lazy scene group takes the shortest run before whitespace; the
    // remainder, commas and all, is the performer blob.
    let record = parse_fragment("Studio - Scene Name Actor1, Actor2");
    assert_eq!(studio(&record), Some("Studio"));
    assert_eq!(record.title.as_deref(), Some("Scene"));
    assert_eq!(performers(&record), vec!["Name Actor1", "Actor2"]);
    assert_eq!(record.url, None);
}

#[test]
fn loose_pattern_without_comma_is_one_performer() {
    let record = parse_fragment("BigStudio - Hot Scene Jake");
    assert_eq!(studio(&record), Some("BigStudio"));
    assert_eq!(record.title.as_deref(), Some("Hot"));
    assert_eq!(performers(&record), vec!["Scene Jake"]);
}

#[test]
fn loose_pattern_accepts_bare_hyphen() {
    let record = parse_fragment("Foo-Bar Baz");
    assert_eq!(studio(&record), Some("Foo"));
    assert_eq!(record.title.as_deref(), Some("Bar"));
    assert_eq!(performers(&record), vec!["Baz"]);
}

#[test]
fn loose_pattern_needs_trailing_whitespace_token() {
    assert!(loose_pattern("Studio - Scene").is_none());
    assert!(loose_pattern("STUDIO_-_SCENE_-_A").is_none());
    assert!(loose_pattern("no dash here").is_none());
}

#[test]
fn underscore_regex_swallows_trailing_separators() {
    let groups = underscore_groups("STUDIO_-_SCENE_-_A_-_B_-_C").unwrap();
    assert_eq!(
        groups,
        (
            "STUDIO".to_string(),
            "SCENE".to_string(),
            "A_-_B_-_C".to_string()
        )
    );
    // A combined performer group is left to the manual split
    assert!(underscore_pattern("STUDIO_-_SCENE_-_A_-_B_-_C").is_none());
}

#[test]
fn underscore_split_gives_one_performer_per_part() {
    let record = underscore_split("STUDIO_-_SCENE_-_A_-_B_-_C").unwrap();
    assert_eq!(studio(&record), Some("STUDIO"));
    assert_eq!(record.title.as_deref(), Some("SCENE"));
    assert_eq!(performers(&record), vec!["A", "B", "C"]);
}

#[test]
fn release_style_name_uses_manual_split() {
    let record = parse_fragment("STUDIO_-_SCENE_-_A_-_B_-_C");
    assert_eq!(studio(&record), Some("STUDIO"));
    assert_eq!(record.title.as_deref(), Some("SCENE"));
    assert_eq!(performers(&record), vec!["A", "B", "C"]);
}

#[test]
fn single_performer_underscore_name_matches_regex() {
    let via_regex = underscore_pattern("STUDIO_-_SCENE_-_PERFORMER").unwrap();
    let via_split = underscore_split("STUDIO_-_SCENE_-_PERFORMER").unwrap();
    assert_eq!(via_regex, via_split);
    assert_eq!(parse_fragment("STUDIO_-_SCENE_-_PERFORMER"), via_regex);
    assert_eq!(performers(&via_regex), vec!["PERFORMER"]);
}

#[test]
fn underscore_strategies_need_the_separator() {
    assert!(underscore_pattern("A - B - C").is_none());
    assert!(underscore_split("A_-_B").is_none());
}

#[test]
fn loose_pattern_runs_before_underscore_forms() {
    // A space anywhere after a hyphen lets the loose pattern claim the input
    let record = parse_fragment("Studio_-_Scene_-_Bob Smith");
    assert_eq!(studio(&record), Some("Studio_"));
    assert_eq!(record.title.as_deref(), Some("_Scene_-_Bob"));
    assert_eq!(performers(&record), vec!["Smith"]);
}

#[test]
fn fallback_splits_studio_and_scene() {
    let record = parse_fragment("Studio - Scene");
    assert_eq!(studio(&record), Some("Studio"));
    assert_eq!(record.title.as_deref(), Some("Scene"));
    assert_eq!(record.performers, None);
}

#[test]
fn fallback_scans_performer_separators() {
    let record = parse_fragment("Alice & Bob");
    assert_eq!(record.studio, None);
    assert_eq!(record.title, None);
    assert_eq!(performers(&record), vec!["Alice", "Bob"]);
}

#[test]
fn fallback_filters_short_and_numeric_tokens() {
    let record = parse_fragment("ab, 12, Carol");
    assert_eq!(performers(&record), vec!["Carol"]);
}

#[test]
fn fallback_uses_first_present_separator() {
    let record = generic_fallback("Alice, Bob & Carl").unwrap();
    assert_eq!(performers(&record), vec!["Alice", "Bob & Carl"]);
}

#[test]
fn unmatched_input_gives_empty_record() {
    for input in ["", "plainname", "xy & 42"] {
        let record = parse_fragment(input);
        assert!(record.is_empty(), "expected empty record for {:?}", input);
        assert_eq!(record.to_json_line().unwrap(), "{}");
    }
}

#[test]
fn fragment_values_are_normalized() {
    let record = parse_fragment("Big&amp;Co_-_The_Scene_-_Jo&#8217;s");
    assert_eq!(studio(&record), Some("Big&Co"));
    assert_eq!(record.title.as_deref(), Some("The_Scene"));
    assert_eq!(performers(&record), vec!["Jo's"]);
}
