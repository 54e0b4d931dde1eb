use std::io::{self, Write};

use anyhow::{Context, Result};
use binarytree::tree::Tree;
use clap::{ArgAction, Parser};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Builds a binary search tree from the given values and queries it
#[derive(Parser, Debug)]
#[command(name = "binarytree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Values to insert, in insertion order. Duplicates are skipped
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Report whether the tree contains this value (repeatable)
    #[arg(short, long, allow_negative_numbers = true)]
    contains: Vec<i64>,

    /// List the values smaller than this one
    #[arg(short, long, allow_negative_numbers = true)]
    below: Option<i64>,

    /// Log verbosity: -d info, -dd debug, -ddd trace. RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let tree = Tree::from_values(cli.values.iter().copied());
    info!(len = tree.len(), height = tree.height(), "built tree");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    tree.print_to(&mut out).context("failed to print tree")?;

    for value in &cli.contains {
        writeln!(out, "contains {value}: {}", tree.contains(value))
            .context("failed to write membership")?;
    }

    if let Some(bound) = cli.below {
        let smaller = tree.elements_smaller_than(&bound);
        writeln!(out, "smaller than {bound}: {smaller:?}")
            .context("failed to write range query")?;
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_values_and_queries() {
        let cli = Cli::try_parse_from([
            "binarytree", "6", "9", "-4", "--contains", "10", "-c", "-4", "--below", "9", "-dd",
        ])
        .unwrap();

        assert_eq!(cli.values, vec![6, 9, -4]);
        assert_eq!(cli.contains, vec![10, -4]);
        assert_eq!(cli.below, Some(9));
        assert_eq!(cli.debug, 2);
    }

    #[test]
    fn no_values_is_an_empty_tree() {
        let cli = Cli::try_parse_from(["binarytree"]).unwrap();

        assert!(cli.values.is_empty());
        assert!(cli.contains.is_empty());
        assert_eq!(cli.below, None);
        assert_eq!(cli.debug, 0);
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert!(Cli::try_parse_from(["binarytree", "six"]).is_err());
    }
}
