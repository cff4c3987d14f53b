//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::Parser;

use commands::AssembleCommand;

/// Usage line shown by `-h` and `--help`
pub const ABOUT: &str =
    "Creates NEWS.md file from the entries in the news/ folder. It also deletes the entry files.";

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "newsfile")]
#[command(author, version, about = ABOUT, long_about = None)]
pub struct Cli {
    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format for --dry-run
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub assemble: AssembleCommand,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        self.assemble.execute(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_no_arguments_runs_assembly() {
        let cli = Cli::try_parse_from(["newsfile"]).unwrap();
        assert!(!cli.assemble.dry_run);
        assert!(cli.directory.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_help_flag() {
        for flag in ["-h", "--help"] {
            let err = Cli::try_parse_from(["newsfile", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);

            let help = err.to_string();
            assert!(help.contains(ABOUT), "{flag} printed: {help}");
            assert!(!help.contains("Assemble NEWS.md from news fragments"));
        }
    }

    #[test]
    fn test_unknown_argument_rejected() {
        let err = Cli::try_parse_from(["newsfile", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = Cli::try_parse_from(["newsfile", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_dry_run_json() {
        let cli = Cli::try_parse_from(["newsfile", "--dry-run", "--format", "json"]).unwrap();
        assert!(cli.assemble.dry_run);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
