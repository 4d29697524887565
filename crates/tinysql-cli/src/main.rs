//! tinysql CLI
//!
//! Parses queries and prints the resulting statement tree, canonical text,
//! JSON, or the raw token stream.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use tinysql_core::{Statement, lex, parse};

/// Parse queries in the tinysql dialect.
#[derive(Parser)]
#[command(name = "tinysql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Query to parse. Reads one query per line from stdin if omitted.
    query: Option<String>,

    /// Output format for parsed statements.
    #[arg(short, long, env = "TINYSQL_FORMAT", value_enum, default_value_t = Format::Debug)]
    format: Format,

    /// Print the token stream instead of parsing.
    #[arg(long)]
    tokens: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed statement tree.
    Debug,
    /// Canonical query text.
    Sql,
    /// JSON document.
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let queries = match cli.query {
        Some(query) => vec![query],
        None => read_queries(io::stdin().lock())?,
    };
    debug!(count = queries.len(), "read queries");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for query in &queries {
        if cli.tokens {
            print_tokens(&mut out, query)?;
            continue;
        }

        match parse(query) {
            Ok(statement) => {
                let rendered = render(&statement, cli.format)?;
                writeln!(out, "{rendered}")?;
            }
            Err(err) => {
                failures += 1;
                eprintln!("error: {err}");
                debug!(query = %query, at = err.span().start, "query rejected");
            }
        }
    }

    out.flush()?;

    if failures > 0 {
        info!(failures, total = queries.len(), "some queries failed to parse");
        std::process::exit(1);
    }

    Ok(())
}

/// Collects the non-empty lines of `reader`, trimmed.
fn read_queries(reader: impl BufRead) -> anyhow::Result<Vec<String>> {
    let mut queries = vec![];
    for line in reader.lines() {
        let line = line.context("failed to read query from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            queries.push(trimmed.to_string());
        }
    }
    Ok(queries)
}

fn render(statement: &Statement, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Debug => format!("{statement:#?}"),
        Format::Sql => statement.to_string(),
        Format::Json => {
            serde_json::to_string_pretty(statement).context("failed to serialize statement")?
        }
    })
}

fn print_tokens(out: &mut impl Write, query: &str) -> io::Result<()> {
    for token in lex(query) {
        writeln!(out, "{token}")?;
    }
    Ok(())
}
