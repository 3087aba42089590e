use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{ArgAction, Parser};
use dictamail::{NormalizedResult, Normalizer};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dictamail", about = "Normalize dictated email addresses")]
struct Opts {
    /// Dictated text. Each stdin line is normalized when omitted
    text: Vec<String>,

    /// Insert a missing `@` before a well-known provider domain
    #[arg(long)]
    infer_domain: bool,

    /// Print one JSON object per line
    #[arg(long)]
    compact: bool,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    let normalizer = Normalizer::builder()
        .infer_domain(opts.infer_domain)
        .build();
    let mut out = io::stdout().lock();

    if !opts.text.is_empty() {
        let result = normalizer.normalize(&opts.text.join(" "));
        writeln!(out, "{}", render(&result, opts.compact)?)?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Error reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let result = normalizer.normalize(&line);
        writeln!(out, "{}", render(&result, opts.compact)?)?;
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .init();
}

fn render(result: &NormalizedResult, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(result)
    } else {
        serde_json::to_string_pretty(result)
    }
}
