//! Word Filter - CLI
//!
//! Interactive TUI and one-shot query modes for a word-filtering server.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;
use word_filter::{
    commands::{QueryConfig, build_form, preview_request, run_query},
    config::{ClientConfig, DEFAULT_SERVER, SERVER_ENV},
    logging,
    output::{print_query_summary, print_request, print_results},
    query::{HttpFilterClient, QueryDispatcher},
};

#[derive(Parser)]
#[command(
    name = "word_filter",
    about = "Filter dictionary words by known, misplaced, required and excluded letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Filtering server root URL
    #[arg(short, long, global = true, env = SERVER_ENV, default_value = DEFAULT_SERVER)]
    server: String,

    /// Word length the form starts with
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Quiet period before typing triggers a query, in milliseconds
    #[arg(long, global = true, default_value = "300")]
    debounce_ms: u64,

    /// Log file for the interactive mode
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Send a single query and print the matching words
    Query {
        /// Letters in their correct place, blanks as '_' (e.g. `c__n_`)
        #[arg(short, long)]
        positioned: Option<String>,

        /// Letters known to be in the wrong place, blanks as '_'
        #[arg(short, long)]
        misplaced: Option<String>,

        /// Letters the word must contain ("ae" or "a,e")
        #[arg(short, long)]
        require: Option<String>,

        /// Letters the word must not contain
        #[arg(short = 'x', long)]
        exclude: Option<String>,

        /// A found-letters row, blanks as '_' (repeatable)
        #[arg(short, long)]
        found: Vec<String>,

        /// Print the request body instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ClientConfig::new(
        &cli.server,
        cli.length,
        Duration::from_millis(cli.debounce_ms),
        cli.log_file,
    )?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Query {
            positioned,
            misplaced,
            require,
            exclude,
            found,
            dry_run,
        } => {
            let query = QueryConfig {
                length: config.initial_length.to_string(),
                positioned,
                misplaced,
                required: require,
                excluded: exclude,
                found,
            };
            run_query_command(&config, &query, dry_run)
        }
    }
}

fn run_query_command(config: &ClientConfig, query: &QueryConfig, dry_run: bool) -> Result<()> {
    logging::init_stderr()?;

    let state = build_form(query)?;
    if dry_run {
        return print_request(&preview_request(&state)?);
    }

    let client = HttpFilterClient::new(&config.server)
        .with_context(|| format!("Invalid server URL: {}", config.server))?;
    let dispatcher = QueryDispatcher::new(client);

    print_query_summary(&state, config.server.as_str());
    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let view = runtime.block_on(run_query(&dispatcher, &state));
    print_results(&view);
    Ok(())
}

fn run_play_command(config: &ClientConfig) -> Result<()> {
    use word_filter::interactive::{App, QuerySession, run_tui};
    use word_filter::registration::spawn_registration;

    let _guard = logging::init_file(&config.log_file)?;
    tracing::info!(server = %config.server, "starting interactive session");

    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let http = reqwest::Client::new();
    let client = HttpFilterClient::with_http(&config.server, http.clone())
        .with_context(|| format!("Invalid server URL: {}", config.server))?;

    let _registration = spawn_registration(runtime.handle(), http, config.server.clone());

    let session = QuerySession::new(runtime.handle().clone(), QueryDispatcher::new(client));
    let app = App::new(config);
    run_tui(app, session)
}
