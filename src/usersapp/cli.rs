use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "usersapp", version)]
#[command(about = "Interactive prompt for managing an in-memory list of users", long_about = None)]
pub struct Cli {
    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["usersapp", "--no-color", "-v", "--config-dir", "/tmp/x"]);
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::parse_from(["usersapp"]);
        assert!(!cli.no_color);
        assert!(!cli.verbose);
        assert!(cli.config_dir.is_none());
    }
}
