//! Line matchers for the two bash completion shapes the extractor reads.
//!
//! Each matcher looks at one line in isolation and either recognizes it or
//! returns `None`. They hold no scan state.

use std::sync::LazyLock;

use completion_bridge_core::normalize_subcommand;
use regex::Regex;

/// A recognized `case` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// The label names the root command itself (`solana)`).
    Root,
    /// The label names a subcommand; the name is already normalized
    /// (`solana__validator__info)` → `validator-info`).
    Subcommand(String),
}

/// Recognizes command-block headers.
pub trait HeaderMatcher {
    fn match_header(&self, line: &str) -> Option<Header>;
}

/// Recognizes option-list assignments and returns their option tokens.
///
/// `Some(vec![])` means the line had the assignment shape but carried no
/// `-`-prefixed tokens.
pub trait OptionListMatcher {
    fn match_options(&self, line: &str) -> Option<Vec<String>>;
}

/// Matches indented case labels of the form `ROOT)` or `ROOT__name__more)`.
///
/// At least one leading whitespace character is required, and segments after
/// the root may only contain ASCII letters and underscores. Anything after
/// the closing parenthesis is ignored.
#[derive(Debug, Clone)]
pub struct CaseLabelMatcher {
    root: String,
    pattern: Regex,
}

impl CaseLabelMatcher {
    pub fn new(root: &str) -> Self {
        // The root is escaped, so the pattern is well-formed for any input.
        let pattern = Regex::new(&format!(
            r"^\s+({}(?:__[A-Za-z_]+)?)\)",
            regex::escape(root)
        ))
        .expect("escaped case label pattern must compile");
        Self {
            root: root.to_string(),
            pattern,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }
}

impl HeaderMatcher for CaseLabelMatcher {
    fn match_header(&self, line: &str) -> Option<Header> {
        let token = self.pattern.captures(line)?.get(1)?.as_str();
        if token == self.root {
            return Some(Header::Root);
        }
        normalize_subcommand(&self.root, token).map(Header::Subcommand)
    }
}

// SAFETY: These regexes are compile-time constants and are validated by tests.
static OPTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s+opts="([^"]+)""#).expect("static regex must compile"));
// Alternation order matters: flags first, then bracketed groups, then any run.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--?[A-Za-z-]+=?|\[[^\]]+\]|\S+").expect("static regex must compile")
});

/// Matches indented `opts="..."` assignments.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptsAssignmentMatcher;

impl OptionListMatcher for OptsAssignmentMatcher {
    fn match_options(&self, line: &str) -> Option<Vec<String>> {
        let payload = OPTS_RE.captures(line)?.get(1)?.as_str();
        Some(tokenize_options(payload))
    }
}

/// Splits an option-list payload into option tokens.
///
/// Only tokens starting with `-` are kept, and a trailing `=` is removed
/// (`--output=` → `--output`). Bracketed groups such as `[ARGS]...` and value
/// placeholders such as `<FILE>` are tokenized and then dropped. Duplicates
/// are preserved; callers collect into a set.
///
/// # Examples
///
/// ```
/// use completion_bridge_extract::tokenize_options;
///
/// assert_eq!(
///     tokenize_options("-h --url= <ADDRESS> [ARGS]..."),
///     vec!["-h", "--url"]
/// );
/// ```
pub fn tokenize_options(payload: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(payload)
        .map(|m| m.as_str())
        .filter(|token| token.starts_with('-'))
        .map(|token| token.strip_suffix('=').unwrap_or(token).to_string())
        .collect()
}
