//! Line-by-line extraction driver.
//!
//! Extraction is a fold over the input lines. The accumulator,
//! [`ScanState`], carries the table being built, the command the most recent
//! header selected, and running statistics. [`Extractor::step`] is the fold
//! function, so a single line can be fed and inspected on its own.

use completion_bridge_core::CommandTable;
use tracing::{debug, trace};

use crate::matcher::{
    CaseLabelMatcher, Header, HeaderMatcher, OptionListMatcher, OptsAssignmentMatcher,
};

/// Per-run line counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Lines read.
    pub lines: usize,
    /// Lines recognized as command headers.
    pub headers: usize,
    /// Option-list lines applied to a command.
    pub option_lines: usize,
    /// Option-list lines seen before any header.
    pub orphan_option_lines: usize,
    /// Lines matching neither shape.
    pub ignored_lines: usize,
}

/// Fold accumulator threaded through [`Extractor::step`].
#[derive(Debug, Clone)]
pub struct ScanState {
    pub table: CommandTable,
    /// Table key of the command selected by the latest header.
    pub current: Option<String>,
    pub stats: ExtractStats,
}

impl ScanState {
    pub fn new(root: &str) -> Self {
        Self {
            table: CommandTable::new(root),
            current: None,
            stats: ExtractStats::default(),
        }
    }
}

/// Result of one extraction run.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub table: CommandTable,
    pub stats: ExtractStats,
}

/// Builds a [`CommandTable`] from a bash completion script.
///
/// The header and option-list matchers are type parameters so they can be
/// replaced for scripts with a different layout.
///
/// # Examples
///
/// ```
/// use completion_bridge_extract::Extractor;
///
/// let script = "    agave)\n        opts=\"-h --version\"\n";
/// let extraction = Extractor::new("agave").extract_with_stats(script);
///
/// assert_eq!(extraction.stats.headers, 1);
/// assert!(extraction.table.root().unwrap().options.contains("--version"));
/// ```
#[derive(Debug, Clone)]
pub struct Extractor<H = CaseLabelMatcher, O = OptsAssignmentMatcher> {
    root: String,
    headers: H,
    options: O,
}

impl Extractor {
    /// Creates an extractor using the default matchers for `root`.
    pub fn new(root: &str) -> Self {
        Self::with_matchers(root, CaseLabelMatcher::new(root), OptsAssignmentMatcher)
    }
}

impl<H: HeaderMatcher, O: OptionListMatcher> Extractor<H, O> {
    pub fn with_matchers(root: &str, headers: H, options: O) -> Self {
        Self {
            root: root.to_string(),
            headers,
            options,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn extract(&self, script: &str) -> CommandTable {
        self.extract_with_stats(script).table
    }

    pub fn extract_with_stats(&self, script: &str) -> Extraction {
        let state = script
            .lines()
            .fold(ScanState::new(&self.root), |state, line| self.step(state, line));

        debug!(
            root = %self.root,
            lines = state.stats.lines,
            headers = state.stats.headers,
            option_lines = state.stats.option_lines,
            orphan_option_lines = state.stats.orphan_option_lines,
            ignored_lines = state.stats.ignored_lines,
            commands = state.table.len(),
            "extracted command table"
        );

        Extraction {
            table: state.table,
            stats: state.stats,
        }
    }

    /// Applies one line to the scan state.
    ///
    /// Header lines select the current command and carry no options. Option
    /// lines are only applied once a header has been seen.
    pub fn step(&self, mut state: ScanState, line: &str) -> ScanState {
        state.stats.lines += 1;

        if let Some(header) = self.headers.match_header(line) {
            state.stats.headers += 1;
            let key = match header {
                Header::Root => {
                    state.table.ensure_root();
                    self.root.clone()
                }
                Header::Subcommand(name) => {
                    state.table.add_subcommand(&name);
                    name
                }
            };
            trace!(command = %key, "command header");
            state.current = Some(key);
            return state;
        }

        match self.options.match_options(line) {
            Some(tokens) => match &state.current {
                Some(current) => {
                    state.stats.option_lines += 1;
                    state.table.merge_options(current, tokens);
                }
                None => state.stats.orphan_option_lines += 1,
            },
            None => state.stats.ignored_lines += 1,
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(script: &str) -> CommandTable {
        Extractor::new("solana").extract(script)
    }

    #[test]
    fn test_root_only() {
        let table = extract("    solana)\n        opts=\"-h --help --version\"\n");

        let root = table.root().unwrap();
        assert_eq!(root.options.len(), 3);
        assert!(root.options.contains("--version"));
        assert!(root.subcommands.is_empty());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_subcommand_before_root() {
        let table = extract(
            "    solana__balance)\n\
             \x20       opts=\"--lamports -v\"\n\
             \x20   solana)\n\
             \x20       opts=\"-h\"\n",
        );

        let root = table.root().unwrap();
        assert_eq!(table.subcommand_names(), vec!["balance"]);
        assert_eq!(root.options.len(), 1);
        assert!(root.options.contains("-h"));

        let balance = table.get("balance").unwrap();
        assert!(balance.options.contains("--lamports"));
        assert!(balance.options.contains("-v"));
        assert_eq!(balance.options.len(), 2);
    }

    #[test]
    fn test_duplicate_tokens_collapse() {
        let table = extract("    solana)\n        opts=\"-h -h --help --help -h\"\n");
        assert_eq!(table.root().unwrap().options.len(), 2);
    }

    #[test]
    fn test_repeated_header_reuses_entry() {
        let table = extract(
            "    solana__balance)\n\
             \x20       opts=\"--lamports\"\n\
             \x20   solana__balance)\n\
             \x20       opts=\"-v\"\n",
        );

        let balance = table.get("balance").unwrap();
        assert!(balance.options.contains("--lamports"));
        assert!(balance.options.contains("-v"));
    }

    #[test]
    fn test_options_before_any_header_are_ignored() {
        let extraction = Extractor::new("solana").extract_with_stats("    opts=\"-h --help\"\n");

        assert!(extraction.table.is_empty());
        assert_eq!(extraction.stats.orphan_option_lines, 1);
        assert_eq!(extraction.stats.option_lines, 0);
    }

    #[test]
    fn test_unrelated_lines_are_ignored() {
        let extraction = Extractor::new("solana").extract_with_stats(
            "# comment\n\n_solana() {\n    local i cur prev opts cmd\n}\n",
        );

        assert!(extraction.table.is_empty());
        assert_eq!(extraction.stats.lines, 5);
        assert_eq!(extraction.stats.ignored_lines, 5);
    }

    #[test]
    fn test_flagless_payload_is_noop() {
        let table = extract("    solana__deploy)\n        opts=\"<PROGRAM_FILEPATH> [ARGS]...\"\n");
        assert!(table.get("deploy").unwrap().options.is_empty());
    }

    #[test]
    fn test_step_tracks_current_command() {
        let extractor = Extractor::new("solana");
        let state = ScanState::new("solana");

        let state = extractor.step(state, "    solana__config__get)");
        assert_eq!(state.current.as_deref(), Some("config-get"));

        let state = extractor.step(state, "        opts=\"--url=\"");
        assert!(state.table.get("config-get").unwrap().options.contains("--url"));

        let state = extractor.step(state, "    solana)");
        assert_eq!(state.current.as_deref(), Some("solana"));
        assert!(state.table.get("config-get").unwrap().options.contains("--url"));
    }

    #[test]
    fn test_crlf_input() {
        let table = extract("    solana)\r\n        opts=\"-h --version\"\r\n");
        assert!(table.root().unwrap().options.contains("--version"));
    }
}
