//! Command table extraction from bash completion scripts.
//!
//! Bash completion functions generated for clap-style CLIs encode their
//! command tree as `case` labels (`solana__balance)`) followed by an option
//! list assignment (`opts="-h --lamports ..."`). This crate recognizes those
//! two line shapes and folds a script into a [`CommandTable`]. Every other
//! line is ignored, so extraction never fails.
//!
//! # Main entry points
//!
//! - [`extract`] — extract with the default root command (`solana`).
//! - [`Extractor`] — configurable root, pluggable matchers, and statistics
//!   through [`Extractor::extract_with_stats`].
//!
//! # Example
//!
//! ```
//! use completion_bridge_extract::extract;
//!
//! let script = "\
//! case \"${cmd}\" in
//!     solana__balance)
//!         opts=\"-h -v --lamports --output=\"
//!         ;;
//! esac
//! ";
//!
//! let table = extract(script);
//! let balance = table.get("balance").unwrap();
//! assert!(balance.options.contains("--lamports"));
//! assert!(balance.options.contains("--output"));
//! ```
//!
//! [`CommandTable`]: completion_bridge_core::CommandTable

pub mod extractor;
pub mod matcher;

pub use extractor::{Extraction, ExtractStats, Extractor, ScanState};
pub use matcher::{
    CaseLabelMatcher, Header, HeaderMatcher, OptionListMatcher, OptsAssignmentMatcher,
    tokenize_options,
};

use completion_bridge_core::{CommandTable, DEFAULT_ROOT};

/// Extracts a command table for the default root command.
pub fn extract(script: &str) -> CommandTable {
    Extractor::new(DEFAULT_ROOT).extract(script)
}
