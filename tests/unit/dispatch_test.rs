//! Unit tests for URL routing

use scenescrape::dispatch::{host_matches, normalize_url, select_site};
use scenescrape::sites::SiteStrategy;
use scenescrape::Dispatcher;

use crate::helpers::{performers, FailingFetcher, StubFetcher};

#[test]
fn fetches_normalized_url() {
    let fetcher = StubFetcher::new().with_page("https://www.fxggxt.com/scene/", "fxggxt_plain.html");
    let record = Dispatcher::new(&fetcher).dispatch("https://www.fxggxt.com/scene/?utm=1#top");

    assert_eq!(fetcher.requests(), vec!["https://www.fxggxt.com/scene/".to_string()]);
    assert_eq!(record.url.as_deref(), Some("https://www.fxggxt.com/scene/"));
    assert_eq!(record.title.as_deref(), Some("Night Shift"));
    // www. is still the site, so the second-segment performer rule applies
    assert_eq!(performers(&record), vec!["Sam", "Max"]);
}

#[test]
fn subdomains_select_the_site() {
    let cases = [
        ("https://fxggxt.com/a/", "fxggxt.com"),
        ("https://m.likegay.net/a/", "likegay.net"),
        ("https://www.hutgay.com/a/", "hutgay.com"),
    ];
    for (url, domain) in cases {
        let site = select_site(url).unwrap_or_else(|| panic!("no site for {}", url));
        assert_eq!(site.domain(), domain);
    }
}

#[test]
fn domain_in_path_does_not_select_site() {
    assert!(select_site("https://example.com/fxggxt.com/scene").is_none());
    assert!(!host_matches("https://example.com/?ref=hutgay.com", "hutgay.com"));
}

#[test]
fn unsupported_host_makes_no_request() {
    let fetcher = StubFetcher::new();
    let record = Dispatcher::new(&fetcher).dispatch("https://example.com/x?y=1");

    assert!(record.is_empty());
    assert!(fetcher.requests().is_empty());
}

#[test]
fn fetch_failure_gives_empty_record() {
    let record = Dispatcher::new(&FailingFetcher).dispatch("https://hutgay.com/scene/");
    assert!(record.is_empty());
    assert_eq!(record.url, None);
}

#[test]
fn unparseable_url_is_cut_at_query() {
    assert_eq!(normalize_url("fxggxt.com/scene?x=1"), "fxggxt.com/scene");
    assert_eq!(normalize_url("no-query-here"), "no-query-here");
    assert!(host_matches("fxggxt.com/scene", "fxggxt.com"));
}

#[test]
fn record_url_keeps_original_spelling() {
    let url = "https://WWW.Fxggxt.com/sc\u{e8}ne-d\u{e9}j\u{e0}-vu/";
    let fetcher = StubFetcher::new().with_page(url, "fxggxt_plain.html");
    let record = Dispatcher::new(&fetcher).dispatch(&format!("{}?utm_source=x", url));

    assert_eq!(fetcher.requests(), vec![url.to_string()]);
    assert_eq!(record.url.as_deref(), Some(url));
    // Host case does not affect the site rule for performers
    assert_eq!(performers(&record), vec!["Sam", "Max"]);
}
