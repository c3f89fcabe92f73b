//! Output formatting helpers for human-readable and JSON output.

use serde_json::{Map, Value as Json};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Collects labelled demonstration steps and prints them in the selected format.
pub struct Report {
    format: OutputFormat,
    section: &'static str,
    entries: Map<String, Json>,
}

impl Report {
    pub fn new(format: OutputFormat, section: &'static str) -> Self {
        if format == OutputFormat::Human {
            println!("== {section}");
        }
        Self {
            format,
            section,
            entries: Map::new(),
        }
    }

    /// Record one step: `text` is shown to humans, `json` goes into the JSON document.
    pub fn step(&mut self, label: &str, text: impl std::fmt::Display, json: Json) {
        match self.format {
            OutputFormat::Human => println!("{label:<28} {text}"),
            OutputFormat::Json => {
                self.entries.insert(label.to_string(), json);
            }
        }
    }

    /// Finish the section, returning its JSON form (empty for human output).
    pub fn finish(self) -> (&'static str, Json) {
        if self.format == OutputFormat::Human {
            println!();
        }
        (self.section, Json::Object(self.entries))
    }
}
