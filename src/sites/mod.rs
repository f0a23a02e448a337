//! Per-site extraction strategies.
//!
//! Every strategy turns fetched markup into a [`SceneRecord`]. [`scrape`] is
//! the only way strategies are run: it performs the fetch, parses the page and
//! contains every failure (including panics) so that callers always receive a
//! record, empty when anything went wrong.

pub mod fxggxt;
pub mod hutgay;
pub mod likegay;

pub use fxggxt::Fxggxt;
pub use hutgay::Hutgay;
pub use likegay::Likegay;

use std::panic::{self, AssertUnwindSafe};

use tracing::{info, warn};

use crate::error::ScrapeResult;
use crate::fetch::Fetcher;
use crate::logging::panic_payload_to_string;
use crate::page::Page;
use crate::scene::SceneRecord;

/// Site-specific extraction over an already fetched page.
pub trait SiteStrategy {
    /// Domain string that identifies the site inside a host name.
    fn domain(&self) -> &'static str;

    /// Builds a record from the page. `url` is the normalized page URL.
    fn extract(&self, url: &str, page: &Page) -> SceneRecord;
}

/// Fetches `url` and runs `strategy` over it.
///
/// Never fails: fetch errors, unusable markup and panics are logged and turn
/// into an empty record.
pub fn scrape(strategy: &dyn SiteStrategy, fetcher: &dyn Fetcher, url: &str) -> SceneRecord {
    let domain = strategy.domain();
    info!("Scraping {}: {}", domain, url);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| fetch_and_extract(strategy, fetcher, url)));

    match outcome {
        Ok(Ok(record)) => record,
        Ok(Err(e)) => {
            warn!("Error scraping {}: {}", domain, e);
            SceneRecord::empty()
        }
        Err(payload) => {
            warn!(
                "Error scraping {}: extraction panicked: {}",
                domain,
                panic_payload_to_string(payload.as_ref())
            );
            SceneRecord::empty()
        }
    }
}

fn fetch_and_extract(
    strategy: &dyn SiteStrategy,
    fetcher: &dyn Fetcher,
    url: &str,
) -> ScrapeResult<SceneRecord> {
    let markup = fetcher.fetch(url)?;
    let page = Page::parse(&markup)?;
    Ok(strategy.extract(url, &page))
}
