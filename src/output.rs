//! Output formatting for command results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
        count: u32,
    }

    impl Outputable for Sample {
        fn to_table(&self) -> String {
            format!("{}: {}", self.name, self.count)
        }
    }

    #[test]
    fn test_table_format() {
        let sample = Sample { name: "fields", count: 159 };
        assert_eq!(sample.format(OutputFormat::Table), "fields: 159");
    }

    #[test]
    fn test_json_format() {
        let sample = Sample { name: "fields", count: 159 };
        let parsed: serde_json::Value =
            serde_json::from_str(&sample.format(OutputFormat::Json)).unwrap();
        assert_eq!(parsed["name"], "fields");
        assert_eq!(parsed["count"], 159);
    }

    #[test]
    fn test_toon_format_is_not_empty() {
        let sample = Sample { name: "fields", count: 159 };
        assert!(sample.format(OutputFormat::Toon).contains("fields"));
    }
}
