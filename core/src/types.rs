//! Command table type definitions.
//!
//! The table is populated once by the extractor and then only read. Option
//! and subcommand collections are unordered sets; [`CommandTable::sorted`]
//! produces the ordered view every renderer consumes.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Root command name used when none is configured.
pub const DEFAULT_ROOT: &str = "solana";

/// Separator bash completion functions use between command path segments
/// (e.g. `solana__validator__info`).
pub const SEGMENT_SEPARATOR: &str = "__";

/// Options and subcommands recorded for one command.
///
/// `subcommands` is only ever populated on the root entry.
///
/// # Examples
///
/// ```
/// use completion_bridge_core::CommandEntry;
///
/// let mut entry = CommandEntry::default();
/// entry.options.insert("-h".to_string());
/// entry.options.insert("-h".to_string());
/// assert_eq!(entry.options.len(), 1);
/// assert!(entry.subcommands.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandEntry {
    /// Option tokens such as `-h` or `--output`, trailing `=` already stripped.
    pub options: HashSet<String>,
    /// Normalized subcommand names (root entry only).
    pub subcommands: HashSet<String>,
}

/// Structural model of a completion script: command name to [`CommandEntry`].
///
/// The root entry is keyed by [`root_name`](CommandTable::root_name) and is
/// created lazily, so a table built from unrecognized input stays empty.
///
/// # Examples
///
/// ```
/// use completion_bridge_core::CommandTable;
///
/// let mut table = CommandTable::new("solana");
/// assert!(table.root().is_none());
///
/// table.add_subcommand("validator-info");
/// assert!(table.root().is_some());
/// assert!(table.get("validator-info").is_some());
/// assert_eq!(table.subcommand_names(), vec!["validator-info"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    root: String,
    entries: HashMap<String, CommandEntry>,
}

impl CommandTable {
    /// Creates an empty table for the given root command.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            entries: HashMap::new(),
        }
    }

    pub fn root_name(&self) -> &str {
        &self.root
    }

    /// Returns the root entry, if any header has been recorded.
    pub fn root(&self) -> Option<&CommandEntry> {
        self.entries.get(&self.root)
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.get(name)
    }

    /// Returns the root entry, creating an empty one if absent.
    ///
    /// Calling this again never resets an existing entry.
    pub fn ensure_root(&mut self) -> &mut CommandEntry {
        self.entries.entry(self.root.clone()).or_default()
    }

    /// Registers `name` as a root subcommand and ensures it has an entry.
    ///
    /// The root entry is created first when missing. Existing entries are
    /// reused untouched.
    pub fn add_subcommand(&mut self, name: &str) {
        self.ensure_root().subcommands.insert(name.to_string());
        self.entries.entry(name.to_string()).or_default();
    }

    /// Unions `options` into the option set of `name`, creating its entry if
    /// needed.
    pub fn merge_options<I>(&mut self, name: &str, options: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.entries
            .entry(name.to_string())
            .or_default()
            .options
            .extend(options);
    }

    /// Returns the root's subcommand names in lexicographic order.
    pub fn subcommand_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .root()
            .map(|root| root.subcommands.iter().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// Iterates over all entries in arbitrary order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CommandEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of entries, root included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Produces the ordered snapshot used for rendering.
    ///
    /// Root options and subcommand names are sorted lexicographically, and
    /// each subcommand's options are sorted the same way. A subcommand that is
    /// registered on the root but has no entry appears with
    /// `has_entry == false` and no options. A table without a root entry
    /// yields empty lists.
    pub fn sorted(&self) -> SortedTable {
        let options = self
            .root()
            .map(|root| sorted_strings(&root.options))
            .unwrap_or_default();

        let subcommands = self
            .subcommand_names()
            .into_iter()
            .map(|name| match self.get(name) {
                Some(entry) => SortedSubcommand {
                    name: name.to_string(),
                    options: sorted_strings(&entry.options),
                    has_entry: true,
                },
                None => SortedSubcommand {
                    name: name.to_string(),
                    options: Vec::new(),
                    has_entry: false,
                },
            })
            .collect();

        SortedTable {
            root: self.root.clone(),
            options,
            subcommands,
        }
    }
}

fn sorted_strings(set: &HashSet<String>) -> Vec<String> {
    let mut values: Vec<String> = set.iter().cloned().collect();
    values.sort_unstable();
    values
}

/// Lexicographically ordered view of a [`CommandTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedTable {
    /// Root command name.
    pub root: String,
    /// Root-level options, sorted.
    pub options: Vec<String>,
    /// Root subcommands, sorted by name.
    pub subcommands: Vec<SortedSubcommand>,
}

/// One subcommand inside a [`SortedTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedSubcommand {
    pub name: String,
    pub options: Vec<String>,
    /// Whether the table holds an entry for this subcommand.
    pub has_entry: bool,
}

/// Turns a bash case-label token into the subcommand name the CLI accepts.
///
/// The `root__` prefix is stripped and every remaining `__` becomes `-`.
/// Returns `None` when `token` does not start with `root__` or nothing
/// follows the prefix.
///
/// # Examples
///
/// ```
/// use completion_bridge_core::normalize_subcommand;
///
/// assert_eq!(
///     normalize_subcommand("solana", "solana__validator__info").as_deref(),
///     Some("validator-info")
/// );
/// assert_eq!(normalize_subcommand("solana", "solana"), None);
/// ```
pub fn normalize_subcommand(root: &str, token: &str) -> Option<String> {
    let rest = token
        .strip_prefix(root)?
        .strip_prefix(SEGMENT_SEPARATOR)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.replace(SEGMENT_SEPARATOR, "-"))
}
