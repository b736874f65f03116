//! Core command table model shared by the extraction and rendering stages.
//!
//! This crate defines the structural model a bash completion script is
//! reduced to before it is regenerated for another shell:
//!
//! - [`CommandTable`] — mapping from command name to [`CommandEntry`], with a
//!   single root entry holding the subcommand set.
//! - [`CommandEntry`] — the option tokens (and, for the root, subcommands) of
//!   one command.
//! - [`SortedTable`] — an explicitly ordered snapshot of a table, the only
//!   place output ordering is decided.
//! - [`ConvertConfig`] — root command name, display name and help text,
//!   loadable from YAML.
//!
//! Validation ([`validate_table`]) reports structural oddities such as
//! subcommands without an entry. Findings are advisory; rendering is total
//! over any table.
//!
//! # Example
//!
//! ```
//! use completion_bridge_core::*;
//!
//! let mut table = CommandTable::new("solana");
//! table.ensure_root();
//! table.merge_options("solana", ["--version".to_string()]);
//! table.add_subcommand("balance");
//! table.merge_options("balance", ["--lamports".to_string()]);
//!
//! let sorted = table.sorted();
//! assert_eq!(sorted.options, vec!["--version"]);
//! assert_eq!(sorted.subcommands[0].name, "balance");
//! assert!(validate_table(&table).is_empty());
//! ```

mod config;
mod error;
mod types;
mod validate;

pub use config::{ConvertConfig, DEFAULT_HELP_DESCRIPTION, default_display_name};
pub use error::{ConfigError, Result};
pub use types::*;
pub use validate::{ValidationError, validate_table};
