use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use genesis::{
    Config, InteractiveSearch, SearchClient, SearchResponse, config, format_response, json_lines,
    logging,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "genesis",
    version,
    about = "Search NASA space biology studies with an AI-generated overview",
    long_about = None
)]
struct Cli {
    /// Free-text query (opens the interactive UI when omitted)
    query: Option<String>,

    /// Open the interactive UI, submitting QUERY right away if given
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Search service URL
    #[arg(short, long, env = config::ENDPOINT_ENV)]
    endpoint: Option<String>,

    /// Seconds to wait for the search service before giving up
    #[arg(long, env = config::TIMEOUT_ENV, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Log file for the interactive UI
    #[arg(long, env = config::LOG_FILE_ENV)]
    log_file: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    JsonL,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "genesis", &mut io::stdout());
        return Ok(());
    }

    let config = Config::resolve(cli.endpoint.clone(), cli.timeout, cli.log_file.clone())?;

    // Interactive mode
    if cli.interactive || cli.query.is_none() {
        if let Some(path) = config.log_file_or_default() {
            logging::init_file_tracing(&path, cli.verbose)?;
        }
        let mut interactive = InteractiveSearch::new(&config)?;
        let initial_query = cli.query.as_deref().filter(|q| !q.trim().is_empty());
        return interactive.run(initial_query);
    }

    logging::init_tracing(cli.verbose);

    let query = cli.query.as_deref().unwrap_or_default().trim();
    if query.is_empty() {
        Cli::command()
            .error(
                clap::error::ErrorKind::InvalidValue,
                "the search query must not be empty",
            )
            .exit();
    }

    let response = match run_search(&config, query) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("search failed: {e:#}");
            std::process::exit(1);
        }
    };

    let use_color = color_enabled(cli.no_color, io::stdout().is_terminal());
    if !use_color {
        colored::control::set_override(false);
    }

    print_response(&response, cli.format, use_color)
}

/// Color only for a terminal, and never with `--no-color`.
fn color_enabled(no_color: bool, stdout_is_terminal: bool) -> bool {
    !no_color && stdout_is_terminal
}

fn run_search(config: &Config, query: &str) -> Result<SearchResponse> {
    let client = SearchClient::new(config)?;
    debug!(endpoint = %client.endpoint(), timeout = ?client.timeout(), "one-shot search");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg} [{elapsed}]")?,
    );
    spinner.set_message(format!("Searching for \"{query}\"..."));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = runtime.block_on(client.search(query));
    spinner.finish_and_clear();

    Ok(result?)
}

fn print_response(response: &SearchResponse, format: OutputFormat, use_color: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            writeln!(handle, "{}", format_response(response, use_color))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, response)?;
            writeln!(handle)?;
        }
        OutputFormat::JsonL => {
            for line in json_lines(response)? {
                writeln!(handle, "{line}")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_needs_terminal_and_no_opt_out() {
        assert!(color_enabled(false, true));
        assert!(!color_enabled(true, true));
        assert!(!color_enabled(false, false));
        assert!(!color_enabled(true, false));
    }

    #[test]
    fn test_cli_parses_no_color_and_format() {
        let cli = Cli::try_parse_from(["genesis", "--no-color", "-f", "json-l", "mouse"]).unwrap();

        assert!(cli.no_color);
        assert!(matches!(cli.format, OutputFormat::JsonL));
        assert_eq!(cli.query.as_deref(), Some("mouse"));
    }
}
