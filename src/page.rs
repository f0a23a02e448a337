//! Parsed page markup.
//!
//! Thin wrapper over `scraper::Html` exposing only what the site strategies
//! read: the `<title>`, the first `<h1>`, CSS selections and embedded
//! `application/ld+json` blocks.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use serde_json::{Map, Value};

use crate::error::{ScrapeError, ScrapeResult};

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static H1_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static JSON_LD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"script[type="application/ld+json"]"#).unwrap());

/// Key marking a structured-data document as a node graph.
pub const GRAPH_KEY: &str = "@graph";

/// A structured-data object containing an `@graph` node list.
pub type StructuredDataGraph = Map<String, Value>;

pub struct Page {
    document: Html,
}

impl Page {
    /// Parses markup. Blank input is rejected since nothing can be read from it.
    pub fn parse(markup: &str) -> ScrapeResult<Self> {
        if markup.trim().is_empty() {
            return Err(ScrapeError::EmptyPage);
        }
        Ok(Self {
            document: Html::parse_document(markup),
        })
    }

    /// Text of the `<title>` element, or empty.
    pub fn title(&self) -> String {
        self.first_text(&TITLE_SELECTOR)
    }

    /// Full text of the first `<h1>`, or empty.
    pub fn first_heading(&self) -> String {
        self.first_text(&H1_SELECTOR)
    }

    /// Text of every element matching `selector`, in document order.
    pub fn select_texts(&self, selector: &Selector) -> Vec<String> {
        self.document.select(selector).map(element_text).collect()
    }

    /// First `application/ld+json` block that parses to an object with an
    /// `@graph` key. Blocks that fail to parse are skipped.
    pub fn structured_graph(&self) -> Option<StructuredDataGraph> {
        self.document
            .select(&JSON_LD_SELECTOR)
            .map(element_text)
            .filter_map(|raw| serde_json::from_str::<Value>(&raw).ok())
            .find_map(|value| match value {
                Value::Object(map) if map.contains_key(GRAPH_KEY) => Some(map),
                _ => None,
            })
    }

    fn first_text(&self, selector: &Selector) -> String {
        self.document
            .select(selector)
            .next()
            .map(element_text)
            .unwrap_or_default()
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
