//! likegay.net: title heuristics plus the breadcrumb trail for the studio.

use once_cell::sync::Lazy;
use scraper::Selector;

use super::SiteStrategy;
use crate::page::Page;
use crate::scene::SceneRecord;
use crate::text::normalize;
use crate::title::{extract_performers, extract_scene_name};

pub const DOMAIN: &str = "likegay.net";

static BREADCRUMB_LINKS: Lazy<Selector> = Lazy::new(|| Selector::parse(".breadcrumb a").unwrap());

pub struct Likegay;

impl SiteStrategy for Likegay {
    fn domain(&self) -> &'static str {
        DOMAIN
    }

    fn extract(&self, url: &str, page: &Page) -> SceneRecord {
        let mut record = SceneRecord::empty();
        let page_title = page.title();

        record.set_title(extract_scene_name(&page_title));
        record.set_performers(extract_performers(&page_title));

        // Home > Studio > Scene
        let crumbs = page.select_texts(&BREADCRUMB_LINKS);
        if let Some(studio) = crumbs.get(1) {
            record.set_studio(normalize(studio));
        }

        record.set_url(url);
        record
    }
}
