//! zsh `#compdef` script generation.
//!
//! The script has a fixed shape: a preamble with the `main_commands` array,
//! a root `_arguments -C` block, and a `case $state` dispatch with one arm per
//! subcommand. Only the listings vary with the table, and all of them come
//! from [`CommandTable::sorted`], so output is deterministic.

use completion_bridge_core::{
    CommandTable, ConvertConfig, DEFAULT_HELP_DESCRIPTION, SortedTable, default_display_name,
};
use tracing::debug;

const ROOT_INDENT: &str = "        ";
const SUBCOMMAND_INDENT: &str = "                        ";

/// Texts the generator places around the table contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Name used in `main_commands` descriptions; derived from the table's
    /// root when unset.
    pub display_name: Option<String>,
    /// Description of the fixed `-h`/`--help` entry. Empty means the default.
    pub help_description: String,
}

impl From<&ConvertConfig> for RenderConfig {
    fn from(config: &ConvertConfig) -> Self {
        Self {
            display_name: config.display_name.clone(),
            help_description: config.help_description.clone(),
        }
    }
}

/// Renders a [`CommandTable`] as a zsh completion script.
///
/// # Examples
///
/// ```
/// use completion_bridge_core::{CommandTable, ConvertConfig};
/// use completion_bridge_render::{RenderConfig, ZshGenerator};
///
/// let mut table = CommandTable::new("solana");
/// table.add_subcommand("balance");
///
/// let config = ConvertConfig {
///     display_name: Some("Solana CLI".to_string()),
///     ..ConvertConfig::default()
/// };
/// let script = ZshGenerator::new(RenderConfig::from(&config)).generate(&table);
/// assert!(script.contains("'balance:Solana CLI balance command'"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZshGenerator {
    config: RenderConfig,
}

impl ZshGenerator {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Generates the script as newline-joined lines without a trailing newline.
    pub fn generate(&self, table: &CommandTable) -> String {
        let sorted = table.sorted();
        let root = sorted.root.as_str();
        let display = self
            .config
            .display_name
            .clone()
            .unwrap_or_else(|| default_display_name(root));
        let help = self.help_entry();

        let mut lines: Vec<String> = vec![
            format!("#compdef {root}"),
            String::new(),
            format!("_{root}() {{"),
            "    local context state state_descr line ret=1".to_string(),
            "    local curcontext=\"$curcontext\"".to_string(),
            String::new(),
            "    typeset -A opt_args".to_string(),
            "    local -a main_commands".to_string(),
            String::new(),
            "    # Define subcommands".to_string(),
            "    main_commands=(".to_string(),
        ];

        for subcommand in &sorted.subcommands {
            let name = escape_single_quotes(&subcommand.name);
            lines.push(format!("{ROOT_INDENT}'{name}:{display} {name} command'"));
        }

        lines.extend([
            "    )".to_string(),
            String::new(),
            "    # Main argument handling".to_string(),
            "    _arguments -C \\".to_string(),
        ]);
        lines.extend(
            sorted
                .options
                .iter()
                .map(|option| format!("{ROOT_INDENT}{} \\", option_spec(option))),
        );
        lines.extend([
            format!("{ROOT_INDENT}{help} \\"),
            format!("{ROOT_INDENT}'1: :->cmds' \\"),
            format!("{ROOT_INDENT}'*:: :->args' && ret=0"),
            String::new(),
            "    case $state in".to_string(),
            "        cmds)".to_string(),
            format!("            _describe -t commands \"{root} command\" main_commands && ret=0"),
            "            ;;".to_string(),
            "        args)".to_string(),
            format!("            curcontext=\"${{curcontext%:*:*}}:{root}-$words[1]:\""),
            "            case $words[1] in".to_string(),
        ]);

        let arms = self.push_dispatch_arms(&mut lines, &sorted);

        lines.extend([
            "            esac".to_string(),
            "            ;;".to_string(),
            "    esac".to_string(),
            String::new(),
            "    return ret".to_string(),
            "}".to_string(),
            String::new(),
            format!("_{root} \"$@\""),
        ]);

        debug!(
            root,
            subcommands = sorted.subcommands.len(),
            root_options = sorted.options.len(),
            dispatch_arms = arms,
            "generated zsh completion"
        );

        lines.join("\n")
    }

    /// Appends one `case $words[1]` arm per subcommand with options and
    /// returns how many were written.
    fn push_dispatch_arms(&self, lines: &mut Vec<String>, sorted: &SortedTable) -> usize {
        let help = self.help_entry();
        let mut arms = 0;

        for subcommand in &sorted.subcommands {
            if !subcommand.has_entry || subcommand.options.is_empty() {
                continue;
            }
            arms += 1;
            lines.push(format!("                {})", case_label(&subcommand.name)));
            lines.push("                    _arguments \\".to_string());
            lines.extend(
                subcommand
                    .options
                    .iter()
                    .map(|option| format!("{SUBCOMMAND_INDENT}{} \\", option_spec(option))),
            );
            lines.push(format!("{SUBCOMMAND_INDENT}{help} \\"));
            lines.push(format!("{SUBCOMMAND_INDENT}'*::arg:->args'"));
            lines.push("                    ;;".to_string());
        }

        arms
    }

    fn help_entry(&self) -> String {
        let description = if self.config.help_description.is_empty() {
            DEFAULT_HELP_DESCRIPTION
        } else {
            self.config.help_description.as_str()
        };
        format!("'(-h --help)'{{-h,--help}}'[{description}]'")
    }
}

/// Generates a zsh script with the default texts.
pub fn generate(table: &CommandTable) -> String {
    ZshGenerator::default().generate(table)
}

/// Quoted `_arguments` spec for one option.
///
/// Long options get a description made from their name (`--skip-seed` →
/// `'--skip-seed[skip seed]'`); short options are emitted bare.
pub fn option_spec(option: &str) -> String {
    match option.strip_prefix("--") {
        Some(name) => format!("'{option}[{}]'", name.replace('-', " ")),
        None => format!("'{option}'"),
    }
}

/// zsh case label for a subcommand; hyphens become underscores.
pub fn case_label(name: &str) -> String {
    name.replace('-', "_")
}

fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_spec_long() {
        assert_eq!(
            option_spec("--skip-seed-phrase-validation"),
            "'--skip-seed-phrase-validation[skip seed phrase validation]'"
        );
        assert_eq!(option_spec("--output"), "'--output[output]'");
    }

    #[test]
    fn test_option_spec_short() {
        assert_eq!(option_spec("-v"), "'-v'");
        assert_eq!(option_spec("-V"), "'-V'");
    }

    #[test]
    fn test_case_label() {
        assert_eq!(case_label("validator-info"), "validator_info");
        assert_eq!(case_label("balance"), "balance");
    }

    #[test]
    fn test_escape_single_quotes() {
        assert_eq!(escape_single_quotes("it's"), "it''s");
    }

    #[test]
    fn test_help_entry_uses_configured_description() {
        let generator = ZshGenerator::new(RenderConfig {
            display_name: None,
            help_description: "Print help".to_string(),
        });
        assert_eq!(
            generator.help_entry(),
            "'(-h --help)'{-h,--help}'[Print help]'"
        );
        assert_eq!(
            ZshGenerator::default().help_entry(),
            "'(-h --help)'{-h,--help}'[Show help information]'"
        );
    }

    #[test]
    fn test_subcommand_without_entry_is_listed_but_not_dispatched() {
        let mut table = CommandTable::new("solana");
        table.ensure_root().subcommands.insert("ghost".to_string());

        let script = generate(&table);
        assert!(script.contains("'ghost:Solana ghost command'"));
        assert!(!script.contains("ghost)"));
    }

    #[test]
    fn test_display_name_override() {
        let mut table = CommandTable::new("solana");
        table.add_subcommand("balance");
        let generator = ZshGenerator::new(RenderConfig {
            display_name: Some("Sol".to_string()),
            help_description: String::new(),
        });
        assert!(generator.generate(&table).contains("'balance:Sol balance command'"));
    }
}
