//! Command table validation.
//!
//! Reports structural problems in a [`CommandTable`]. The findings never stop
//! a conversion; rendering is total over any table. They exist so callers can
//! surface input that only partially matched the expected shape.
//!
//! # Examples
//!
//! ```
//! use completion_bridge_core::*;
//!
//! let mut table = CommandTable::new("solana");
//! table.add_subcommand("balance");
//! assert!(validate_table(&table).is_empty());
//!
//! // Options recorded without any header leave the root missing.
//! let mut orphan = CommandTable::new("solana");
//! orphan.merge_options("balance", ["-v".to_string()]);
//! assert_eq!(validate_table(&orphan), vec![ValidationError::MissingRoot]);
//! ```

use thiserror::Error;

use crate::CommandTable;

/// Table validation findings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The table has entries but none for the root command.
    #[error("table has entries but no root command entry")]
    MissingRoot,
    /// A subcommand is registered on the root but has no entry of its own.
    #[error("subcommand has no entry: {0}")]
    MissingSubcommandEntry(String),
    /// A stored option is not a `-`-prefixed token or still ends with `=`.
    #[error("invalid option {option:?} on command {command}")]
    InvalidOption { command: String, option: String },
    /// A subcommand normalized to the root name; its options merge into the root.
    #[error("subcommand shadows root command: {0}")]
    SubcommandShadowsRoot(String),
}

/// Validates a command table.
///
/// Findings are returned in a stable order: root problems first, then
/// subcommands alphabetically, then option problems sorted by command and
/// option.
pub fn validate_table(table: &CommandTable) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if table.is_empty() {
        return errors;
    }

    if table.root().is_none() {
        errors.push(ValidationError::MissingRoot);
    }

    for name in table.subcommand_names() {
        if name == table.root_name() {
            errors.push(ValidationError::SubcommandShadowsRoot(name.to_string()));
        } else if table.get(name).is_none() {
            errors.push(ValidationError::MissingSubcommandEntry(name.to_string()));
        }
    }

    let mut invalid: Vec<(&str, &str)> = table
        .entries()
        .flat_map(|(command, entry)| {
            entry
                .options
                .iter()
                .filter(|option| !option.starts_with('-') || option.ends_with('='))
                .map(move |option| (command, option.as_str()))
        })
        .collect();
    invalid.sort_unstable();
    errors.extend(invalid.into_iter().map(|(command, option)| {
        ValidationError::InvalidOption {
            command: command.to_string(),
            option: option.to_string(),
        }
    }));

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_is_valid() {
        assert!(validate_table(&CommandTable::new("solana")).is_empty());
    }

    #[test]
    fn test_subcommand_shadowing_root() {
        let mut table = CommandTable::new("solana");
        table.add_subcommand("solana");
        assert_eq!(
            validate_table(&table),
            vec![ValidationError::SubcommandShadowsRoot("solana".to_string())]
        );
    }

    #[test]
    fn test_subcommand_without_entry() {
        let mut table = CommandTable::new("solana");
        table.ensure_root().subcommands.insert("airdrop".to_string());
        assert_eq!(
            validate_table(&table),
            vec![ValidationError::MissingSubcommandEntry("airdrop".to_string())]
        );
    }

    #[test]
    fn test_invalid_options_are_reported_sorted() {
        let mut table = CommandTable::new("solana");
        table.ensure_root();
        table.merge_options("solana", ["--url=", "bad", "-h"].map(String::from));

        let errors = validate_table(&table);
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidOption {
                    command: "solana".to_string(),
                    option: "--url=".to_string(),
                },
                ValidationError::InvalidOption {
                    command: "solana".to_string(),
                    option: "bad".to_string(),
                },
            ]
        );
    }
}
