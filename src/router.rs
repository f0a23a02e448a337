//! Request handling: command name + JSON payload in, one JSON line out.

use std::io::Read;
use std::str::FromStr;

use serde_json::Value;
use tracing::info;

use crate::dispatch::Dispatcher;
use crate::error::RequestError;
use crate::fetch::Fetcher;
use crate::fragment::parse_fragment;
use crate::scene::SceneRecord;

/// Supported commands, named as they appear on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `scrapeURL`: payload `{"url": "..."}`
    ScrapeUrl,
    /// `scrapeFragment`: payload `{"title": "..."}`
    ScrapeFragment,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::ScrapeUrl => "scrapeURL",
            Command::ScrapeFragment => "scrapeFragment",
        }
    }
}

impl FromStr for Command {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scrapeURL" => Ok(Command::ScrapeUrl),
            "scrapeFragment" => Ok(Command::ScrapeFragment),
            other => Err(RequestError::UnknownCommand(other.to_string())),
        }
    }
}

/// Resolves the optional command argument.
pub fn parse_command(arg: Option<&str>) -> Result<Command, RequestError> {
    arg.ok_or(RequestError::MissingCommand)?.parse()
}

pub struct RequestRouter<'a> {
    fetcher: &'a dyn Fetcher,
}

impl<'a> RequestRouter<'a> {
    pub fn new(fetcher: &'a dyn Fetcher) -> Self {
        Self { fetcher }
    }

    /// Runs `command` against an already decoded payload.
    ///
    /// Only request-shape problems are errors; extraction failures come back
    /// as an empty or partial record.
    pub fn handle(&self, command: Command, payload: &Value) -> Result<SceneRecord, RequestError> {
        match command {
            Command::ScrapeUrl => {
                let url = payload
                    .get("url")
                    .and_then(Value::as_str)
                    .filter(|url| !url.is_empty())
                    .ok_or(RequestError::MissingUrl)?;
                Ok(Dispatcher::new(self.fetcher).dispatch(url))
            }
            Command::ScrapeFragment => {
                let title = payload
                    .get("title")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                info!("Scraping by fragment: {}", title);
                Ok(parse_fragment(title))
            }
        }
    }

    /// Reads the JSON payload from `input` and returns the serialized result.
    ///
    /// A failed read (including non-UTF-8 input) is an I/O error; readable
    /// text that is not JSON is an invalid-JSON error.
    pub fn handle_reader<R: Read>(
        &self,
        command: Command,
        mut input: R,
    ) -> Result<String, RequestError> {
        let mut raw = String::new();
        input.read_to_string(&mut raw)?;
        let payload: Value = serde_json::from_str(&raw)?;
        let record = self.handle(command, &payload)?;
        Ok(record.to_json_line()?)
    }
}
