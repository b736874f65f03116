//! Conversion settings.
//!
//! Controls which root command the extractor looks for and the fixed texts
//! the zsh renderer emits. Every field has a default, so a file only needs
//! the keys it overrides.
//!
//! # Example YAML
//!
//! ```yaml
//! root: solana
//! display_name: Solana
//! help_description: Show help information
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::DEFAULT_ROOT;
use crate::error::{ConfigError, Result};

/// Description attached to the `-h`/`--help` entry of every `_arguments` block.
pub const DEFAULT_HELP_DESCRIPTION: &str = "Show help information";

/// Settings shared by the extractor and renderer.
///
/// # Examples
///
/// ```
/// use completion_bridge_core::ConvertConfig;
///
/// let config = ConvertConfig::default();
/// assert_eq!(config.root, "solana");
/// assert_eq!(config.display_name(), "Solana");
///
/// let config = ConvertConfig::for_root("agave-validator");
/// assert_eq!(config.display_name(), "Agave-validator");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Root command name as it appears in the bash case labels.
    pub root: String,
    /// Name used in subcommand descriptions; derived from `root` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Description of the fixed help option entry.
    pub help_description: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            display_name: None,
            help_description: DEFAULT_HELP_DESCRIPTION.to_string(),
        }
    }
}

impl ConvertConfig {
    /// Default configuration for a different root command.
    pub fn for_root(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from a YAML file and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](ConfigError::Io) if the file cannot be read,
    /// [`Yaml`](ConfigError::Yaml) if parsing fails, or
    /// [`InvalidRootName`](ConfigError::InvalidRootName) if the root is
    /// unusable.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Checks that `root` is non-empty and limited to ASCII alphanumerics,
    /// `-`, `_` and `.`.
    pub fn validate(&self) -> Result<()> {
        let valid = !self.root.is_empty()
            && self
                .root
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidRootName(self.root.clone()))
        }
    }

    /// Returns the explicit display name, or `root` with its first letter
    /// upper-cased.
    pub fn display_name(&self) -> String {
        match &self.display_name {
            Some(name) => name.clone(),
            None => default_display_name(&self.root),
        }
    }
}

/// Upper-cases the first letter of `root` (`solana` → `Solana`).
pub fn default_display_name(root: &str) -> String {
    let mut chars = root.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
