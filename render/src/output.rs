//! Output format selection.

use completion_bridge_core::CommandTable;

use crate::RenderError;
use crate::zsh::{RenderConfig, ZshGenerator};

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// zsh `#compdef` completion script.
    #[default]
    Zsh,
    /// Ordered command table as pretty JSON.
    Json,
    /// Ordered command table as YAML.
    Yaml,
}

/// Formats a table in the requested output format.
///
/// Only the JSON and YAML dumps can fail.
///
/// # Examples
///
/// ```
/// use completion_bridge_core::CommandTable;
/// use completion_bridge_render::{OutputFormat, RenderConfig, format_table};
///
/// let mut table = CommandTable::new("solana");
/// table.merge_options("solana", ["-h".to_string()]);
///
/// let json = format_table(&table, OutputFormat::Json, &RenderConfig::default()).unwrap();
/// assert!(json.contains("\"root\": \"solana\""));
/// ```
pub fn format_table(
    table: &CommandTable,
    format: OutputFormat,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Zsh => Ok(ZshGenerator::new(config.clone()).generate(table)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&table.sorted())?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&table.sorted())?),
    }
}
