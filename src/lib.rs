//! scenescrape library
//!
//! Extracts scene metadata (title, studio, performers, tags) from pages of a
//! few supported sites and from bare filenames.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod fetch;
pub mod fragment;
pub mod logging;
pub mod page;
pub mod router;
pub mod scene;
pub mod sites;
pub mod text;
pub mod title;

pub use config::Config;
pub use dispatch::{normalize_url, Dispatcher};
pub use error::{FetchError, RequestError, ScrapeError};
pub use fetch::{Fetcher, HttpFetcher};
pub use fragment::parse_fragment;
pub use router::{Command, RequestRouter};
pub use scene::SceneRecord;
pub use text::normalize;
