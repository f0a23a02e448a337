//! fxggxt.com: structured data first, page title second.
//!
//! Titles on this site read `Studio - Performer1 & Performer2 - Scene`, so
//! performers come from the second segment rather than the first one the
//! generic title heuristic inspects.

use serde_json::Value;
use tracing::debug;

use super::SiteStrategy;
use crate::dispatch::host_matches;
use crate::page::{Page, StructuredDataGraph, GRAPH_KEY};
use crate::scene::SceneRecord;
use crate::text::normalize;
use crate::title::{extract_performers, extract_scene_name, extract_studio, DASH_SEPARATOR};

pub const DOMAIN: &str = "fxggxt.com";

const ARTICLE_TYPE: &str = "Article";

pub struct Fxggxt;

impl SiteStrategy for Fxggxt {
    fn domain(&self) -> &'static str {
        DOMAIN
    }

    fn extract(&self, url: &str, page: &Page) -> SceneRecord {
        let mut record = SceneRecord::empty();

        if let Some(graph) = page.structured_graph() {
            debug!("Found JSON-LD data");
            apply_structured_data(&graph, &mut record);
        }

        let page_title = page.title();
        if !record.has_title() {
            record.set_title(extract_scene_name(&page_title));
        }

        if host_matches(url, DOMAIN) {
            record.set_performers(site_performers(&page_title));
        } else {
            record.set_performers(extract_performers(&page_title));
        }

        if !record.has_studio() {
            record.set_studio(extract_studio(&page_title));
        }

        record.set_url(url);
        record
    }
}

/// First `Article` node of the graph, if any.
pub fn first_article(graph: &StructuredDataGraph) -> Option<&Value> {
    graph
        .get(GRAPH_KEY)?
        .as_array()?
        .iter()
        .find(|node| node.get("@type").and_then(Value::as_str) == Some(ARTICLE_TYPE))
}

/// Copies headline, first article section and keywords from the article node.
pub fn apply_structured_data(graph: &StructuredDataGraph, record: &mut SceneRecord) {
    let Some(article) = first_article(graph) else {
        return;
    };

    if let Some(headline) = article.get("headline").and_then(Value::as_str) {
        record.set_title(normalize(headline));
    }

    let first_section = article
        .get("articleSection")
        .and_then(Value::as_array)
        .and_then(|sections| sections.first());
    if let Some(section) = first_section {
        record.set_studio(value_text(section));
    }

    if let Some(keywords) = article.get("keywords").and_then(Value::as_array) {
        record.set_tags(keywords.iter().map(value_text));
    }
}

/// Performers from the second ` - ` segment when it holds an `&` list.
pub fn site_performers(title: &str) -> Vec<String> {
    let Some(segment) = title.split(DASH_SEPARATOR).nth(1) else {
        return Vec::new();
    };
    if !segment.contains('&') {
        return Vec::new();
    }
    segment
        .split('&')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strings pass through untouched; other JSON values use their JSON text.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
