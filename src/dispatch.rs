//! URL normalization and site selection.

use tracing::warn;
use url::Url;

use crate::fetch::Fetcher;
use crate::scene::SceneRecord;
use crate::sites::{self, Fxggxt, Hutgay, Likegay, SiteStrategy};

/// Supported sites in priority order. The first whose domain appears in the
/// URL host handles the request.
pub static SITES: &[&(dyn SiteStrategy + Sync)] = &[&Fxggxt, &Likegay, &Hutgay];

/// Drops the query string and fragment: `scheme://host/path`.
///
/// The kept part is returned exactly as given. Host case, ports and
/// non-ASCII path segments are not rewritten.
pub fn normalize_url(url: &str) -> String {
    let end = url.find(|c: char| c == '?' || c == '#').unwrap_or(url.len());
    url[..end].to_string()
}

/// True when the host of `url` contains `domain` anywhere, so subdomains
/// match. Unparseable input is searched as a whole.
pub fn host_matches(url: &str, domain: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map(|host| host.contains(domain))
            .unwrap_or(false),
        Err(_) => url.contains(domain),
    }
}

/// Strategy for a normalized URL, first match wins.
pub fn select_site(normalized_url: &str) -> Option<&'static (dyn SiteStrategy + Sync)> {
    SITES
        .iter()
        .copied()
        .find(|site| host_matches(normalized_url, site.domain()))
}

/// Routes URLs to site strategies.
pub struct Dispatcher<'a> {
    fetcher: &'a dyn Fetcher,
}

impl<'a> Dispatcher<'a> {
    pub fn new(fetcher: &'a dyn Fetcher) -> Self {
        Self { fetcher }
    }

    /// Scrapes `url` with the matching strategy. Unsupported hosts give an
    /// empty record, never an error.
    pub fn dispatch(&self, url: &str) -> SceneRecord {
        let normalized = normalize_url(url);
        match select_site(&normalized) {
            Some(site) => sites::scrape(site, self.fetcher, &normalized),
            None => {
                warn!("Unsupported URL: {}", normalized);
                SceneRecord::empty()
            }
        }
    }
}
