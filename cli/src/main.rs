use std::{path::PathBuf, process};

use anyhow::Context;
use clap::Parser as ClapParser;
use resilient_json_parser::{config::DEFAULT_MAX_DEPTH, parse_with_config, Config};
use tracing::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to a json file.
    input: PathBuf,
    /// How many arrays and objects may be nested inside each other.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Treat `//` and `/* */` comments as errors.
    #[arg(long)]
    no_comments: bool,
    /// Print the parsed tree as json on stdout, diagnostics or not.
    #[arg(long)]
    print_ast: bool,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    setup_logging();

    let args = Args::parse();

    debug!(input = ?args.input);

    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read `{}`", args.input.display()))?;

    let config = Config::default()
        .max_depth(args.max_depth)
        .allow_comments(!args.no_comments);

    let parsed = parse_with_config(&json, &config).context("the parser hit an internal error")?;

    for diagnostic in &parsed.diagnostics {
        eprintln!("{}", diagnostic);
    }

    if args.print_ast {
        println!("{}", serde_json::to_string_pretty(&parsed.root)?);
    }

    if !parsed.is_valid() {
        info!(diagnostics = parsed.diagnostics.len(), "input is not valid json");
        process::exit(1);
    }

    Ok(())
}
