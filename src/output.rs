//! Rendering of command results for the terminal or for other tools.

use clap::ValueEnum;
use serde::Serialize;

/// How `conn_guard` prints a command result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned step lines
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact toon encoding of the JSON form
    Toon,
}

/// A command result with its own terminal layout; the other formats come
/// from its serialized form.
pub trait Outputable: Serialize {
    fn to_table(&self) -> String;

    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => match serde_json::to_value(self) {
                Ok(value) => toon::encode(&value, None),
                Err(_) => String::new(),
            },
        }
    }
}
