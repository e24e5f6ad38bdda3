use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use usersapp::api::UsersApi;
use usersapp::config::UsersConfig;
use usersapp::error::Result;
use usersapp::prompt::{LinePrompter, Prompter, TerminalPrompter};
use usersapp::repl::Session;
use usersapp::store::memory::InMemoryStore;

mod cli;
use cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    if io::stdin().is_terminal() {
        run_session(TerminalPrompter::new(), &config)
    } else {
        debug!("stdin is not a terminal, reading plain lines");
        let prompter = LinePrompter::new(io::stdin().lock(), io::stderr());
        run_session(prompter, &config)
    }
}

fn run_session<P: Prompter>(prompter: P, config: &UsersConfig) -> Result<()> {
    let api = UsersApi::new(InMemoryStore::new());
    let mut session = Session::new(api, prompter, io::stdout().lock(), config.session_options());
    session.run()
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<UsersConfig> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => match default_config_dir() {
            Some(dir) => dir,
            None => {
                warn!("could not determine config dir, using defaults");
                return Ok(UsersConfig::default());
            }
        },
    };
    debug!(dir = %config_dir.display(), "loading config");
    UsersConfig::load(&config_dir)
}

fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "usersapp", "usersapp").map(|dirs| dirs.config_dir().to_path_buf())
}
