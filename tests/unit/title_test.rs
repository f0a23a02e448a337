//! Unit tests for the page title heuristics

use scenescrape::normalize;
use scenescrape::title::{extract_performers, extract_scene_name, extract_studio};

#[test]
fn studio_performers_scene_titles_split_into_three_parts() {
    let cases = [
        ("S", "P1", "P2", "N"),
        ("Big Studio", "Alex Stone", "Ryan Cole", "Poolside Fun"),
        ("Men.com", "Jake", "Tom", "Locker Room, Part 2"),
    ];
    for (s, p1, p2, n) in cases {
        let title = format!("{} - {} & {} - {}", s, p1, p2, n);
        assert_eq!(extract_studio(&title), normalize(s));
        assert_eq!(extract_scene_name(&title), normalize(n));
        // The first segment is the studio here, so no performers come from it
        assert!(extract_performers(&title).is_empty());
    }
}

#[test]
fn performers_leading_the_title() {
    let title = "P1 & P2 - N";
    assert_eq!(extract_performers(title), vec!["P1", "P2"]);
    assert_eq!(extract_scene_name(title), "N");
    assert_eq!(extract_studio(title), "P1 & P2");
}

#[test]
fn titles_without_separators_yield_nothing() {
    let titles = [
        "Plain Title",
        "dash-without-spaces",
        "en\u{2013}dash\u{2013}without\u{2013}spaces",
        "A & B, C",
    ];
    for title in titles {
        assert_eq!(extract_studio(title), "");
        assert_eq!(extract_scene_name(title), "");
        assert!(extract_performers(title).is_empty());
    }
}

#[test]
fn comma_separated_performers() {
    let title = "Jake, Tom, Leo \u{2013} Hot Afternoon";
    assert_eq!(extract_performers(title), vec!["Jake", "Tom", "Leo"]);
    assert_eq!(extract_scene_name(title), "Hot Afternoon");
}
