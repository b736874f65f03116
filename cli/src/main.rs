use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use completion_bridge_core::{ConvertConfig, validate_table};
use completion_bridge_extract::Extractor;
use completion_bridge_render::{OutputFormat, RenderConfig, format_table};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "bash2zsh")]
#[command(version)]
#[command(about = "Convert a bash completion script into a zsh #compdef script")]
struct Cli {
    /// Read the bash completion script from a file instead of stdin.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Write the result to a file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Root command name used in the bash case labels (default: solana).
    #[arg(long)]
    root: Option<String>,
    /// Name used in subcommand descriptions (default: capitalized root).
    #[arg(long)]
    display_name: Option<String>,
    /// Output format.
    #[arg(long, value_enum, default_value = "zsh")]
    format: OutputFormat,
    /// YAML configuration file; command-line flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let config = resolve_config(&cli)?;
    let script = read_input(cli.input.as_deref())?;

    let extraction = Extractor::new(&config.root).extract_with_stats(&script);
    if extraction.table.is_empty() {
        warn!(root = %config.root, "no command headers recognized in input");
    }
    for finding in validate_table(&extraction.table) {
        warn!(%finding, "command table validation");
    }
    info!(
        commands = extraction.table.len(),
        headers = extraction.stats.headers,
        option_lines = extraction.stats.option_lines,
        "extraction finished"
    );

    let rendered = format_table(&extraction.table, cli.format, &RenderConfig::from(&config))
        .map_err(|err| err.to_string())?;
    write_output(cli.output.as_deref(), &rendered)
}

fn resolve_config(cli: &Cli) -> Result<ConvertConfig, String> {
    let mut config = match &cli.config {
        Some(path) => ConvertConfig::load(path).map_err(|err| {
            format!("Failed to load config '{}': {err}", path.display())
        })?,
        None => ConvertConfig::default(),
    };

    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    if let Some(display_name) = &cli.display_name {
        config.display_name = Some(display_name.clone());
    }

    config.validate().map_err(|err| err.to_string())?;
    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("Failed to read '{}': {err}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("Failed to read stdin: {err}"))?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<(), String> {
    let content = format!("{rendered}\n");
    match path {
        Some(path) => fs::write(path, content)
            .map_err(|err| format!("Failed to write '{}': {err}", path.display())),
        None => io::stdout()
            .lock()
            .write_all(content.as_bytes())
            .map_err(|err| format!("Failed to write stdout: {err}")),
    }
}
