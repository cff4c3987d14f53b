//! Assemble command

use std::path::Path;

use clap::Args;
use tracing::info;

use newsfile_changelog::NewsAssembler;
use newsfile_core::config::load_config_or_default;
use newsfile_core::error::NewsfileError;
use newsfile_git::GitRepo;

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

const CLEANUP_MESSAGE: &str = "Cleaning up entry files with `git rm`";

/// Announce the written news file by its absolute path
fn created_message(path: &Path) -> String {
    format!(
        "Newsfile created at {}",
        output::path_style().apply_to(path.display())
    )
}

/// Build NEWS.md and retire the consumed fragments
#[derive(Debug, Args)]
pub struct AssembleCommand {
    /// Print the document instead of writing it; fragments are kept
    #[arg(long)]
    pub dry_run: bool,
}

impl AssembleCommand {
    /// Execute the assemble command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(dry_run = self.dry_run, "executing assemble command");
        let cwd = std::env::current_dir()?;

        let repo = GitRepo::discover(&cwd).map_err(NewsfileError::from)?;
        let (config, config_path) = load_config_or_default(&cwd)?;
        if let Some(path) = &config_path {
            info!(path = %path.display(), "using config file");
        }

        let assembler = NewsAssembler::new(&repo, &config);
        let document = assembler.build()?;
        let content = assembler.render(&document);

        if self.dry_run {
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&document)?),
                OutputFormat::Text => print!("{}", content),
            }
            return Ok(());
        }

        let path = assembler.write(&content)?;
        if !cli.quiet {
            println!("{}", created_message(&path));
            println!("{}", CLEANUP_MESSAGE);
        }

        let removed = assembler.cleanup(&document)?;
        if !cli.quiet {
            for path in &removed {
                let shown = path.strip_prefix(repo.workdir()).unwrap_or(path);
                println!("  rm {}", output::path_style().apply_to(shown.display()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_message() {
        console::set_colors_enabled(false);
        let message = created_message(Path::new("/work/syslog-ng/NEWS.md"));
        assert_eq!(message, "Newsfile created at /work/syslog-ng/NEWS.md");
    }
}
