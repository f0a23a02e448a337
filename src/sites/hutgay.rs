//! hutgay.com: title heuristics plus the page heading for the studio.

use super::SiteStrategy;
use crate::page::Page;
use crate::scene::SceneRecord;
use crate::title::{extract_performers, extract_scene_name, DASH_SEPARATOR};

pub const DOMAIN: &str = "hutgay.com";

pub struct Hutgay;

impl SiteStrategy for Hutgay {
    fn domain(&self) -> &'static str {
        DOMAIN
    }

    fn extract(&self, url: &str, page: &Page) -> SceneRecord {
        let mut record = SceneRecord::empty();
        let page_title = page.title();

        record.set_title(extract_scene_name(&page_title));
        record.set_performers(extract_performers(&page_title));

        let studio = heading_studio(&page.first_heading(), &record.performer_names());
        if let Some(studio) = studio {
            record.set_studio(studio);
        }

        record.set_url(url);
        record
    }
}

/// First segment of a `Studio - Scene` heading.
///
/// Rejected when it equals an extracted performer, in which case the heading
/// was really `Performer - Scene`.
pub fn heading_studio(heading: &str, performers: &[&str]) -> Option<String> {
    if !heading.contains(DASH_SEPARATOR) {
        return None;
    }
    let candidate = heading.split(DASH_SEPARATOR).next()?.trim();
    if candidate.is_empty() || performers.contains(&candidate) {
        return None;
    }
    Some(candidate.to_string())
}
