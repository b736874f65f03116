//! Rendering of command tables.
//!
//! - [`zsh`] regenerates a table as a zsh `#compdef` completion script.
//! - [`output`] selects between the zsh script and JSON/YAML dumps of the
//!   ordered table.
//!
//! Rendering a zsh script cannot fail: every table, including an empty one,
//! produces a complete script skeleton.
//!
//! # Example
//!
//! ```
//! use completion_bridge_core::CommandTable;
//! use completion_bridge_render::generate;
//!
//! let script = generate(&CommandTable::new("solana"));
//! assert!(script.starts_with("#compdef solana\n"));
//! assert!(script.ends_with("_solana \"$@\""));
//! ```

mod error;
pub mod output;
pub mod zsh;

pub use error::RenderError;
pub use output::{OutputFormat, format_table};
pub use zsh::{RenderConfig, ZshGenerator, generate};
