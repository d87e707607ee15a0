//! wisp CLI entry point.
//!
//! Usage:
//!   wisp <pattern>     # Print entries matching a glob pattern

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wisp_kernel::vfs::LocalFs;
use wisp_kernel::Workspace;

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        None => {
            eprintln!("Usage: wisp <pattern>");
            eprintln!("Run 'wisp --help' for details.");
            Ok(ExitCode::FAILURE)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!("wisp {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        Some(pattern) if !pattern.starts_with('-') => run_pattern(pattern),

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'wisp --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_help() {
    println!(
        r#"wisp v{}

Usage:
  wisp <pattern>               Print entries matching a glob pattern

Patterns:
  *                            Any run of characters (not a separator)
  ?                            Exactly one character (not a separator)
  {{a,b}}                       Either alternative, nestable
  \x                           Literal x

Wildcards skip dotfiles; start the pattern with `.` to match them.
The directory part of the pattern resolves against the current directory.

Options:
  -h, --help                   Show this help
  -V, --version                Show version

Examples:
  wisp '*.txt'                 # Text files in the current directory
  wisp 'src/*.rs'              # Rust sources under src/
  wisp '/var/log/*.{{log,gz}}'  # Alternation, absolute directory
  wisp '.*'                    # Dotfiles
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// Expand a pattern and print each match, one per line.
fn run_pattern(pattern: &str) -> Result<ExitCode> {
    let fs = Arc::new(LocalFs::new("/"));
    let ws = Workspace::from_env(fs).context("Failed to resolve working directory")?;

    let rt = tokio::runtime::Runtime::new()?;
    let matches = rt
        .block_on(wisp_kernel::list(&ws, pattern))
        .with_context(|| format!("Failed to expand pattern: {pattern}"))?;

    for path in matches {
        println!("{}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}
