//! Command-line entrypoint: rename one ebook file, or every ebook file
//! under a directory, according to the metadata embedded in each file.

use clap::Parser;
use shelfmark_library::{rename_ebook, rename_ebooks};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "shelfmark",
    version,
    about = "Rename .fb2 and .epub files according to book metadata"
)]
struct Cli {
    /// Path to an ebook file or to a directory with ebook files to rename
    path: PathBuf,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    if !cli.path.exists() {
        eprintln!("shelfmark: the specified path does not exist: {}", cli.path.display());
        return ExitCode::FAILURE;
    }

    let outcome = if cli.path.is_dir() {
        rename_ebooks(&cli.path).map(|renamed| tracing::info!(renamed, "done"))
    } else {
        rename_ebook(&cli.path).map(|_| ())
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shelfmark: {}", *err);
            ExitCode::FAILURE
        },
    }
}

/// Logging goes to stderr so stdout stays silent; `RUST_LOG` overrides the
/// default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_positional_path() {
        let cli = Cli::parse_from(["shelfmark", "/books"]);
        assert_eq!(cli.path, PathBuf::from("/books"));
    }
}
