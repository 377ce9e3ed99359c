use anyhow::Result;
use std::env;
use std::io::{self, Write};
use std::path::Path;

use number_words::{
    convert_file, init_logging, parse_number, render_line, run_session, to_english, Config,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = Config::load()?;
    init_logging(&config.log_filter);

    if args.len() > 1 && args[1] == "batch" {
        // Batch mode
        run_batch(&args[2..])?;
    } else if args.len() > 1 {
        // One-shot mode
        let rejected = run_once(&args[1..], io::stdout().lock(), io::stderr().lock())?;
        if rejected > 0 {
            std::process::exit(1);
        }
    } else {
        // Interactive mode (default)
        let stdin = io::stdin();
        run_session(stdin.lock(), io::stdout(), &config)?;
    }

    Ok(())
}

fn run_batch(args: &[String]) -> Result<()> {
    let json = args.iter().any(|a| a == "--json");
    let Some(path) = args.iter().find(|a| !a.starts_with("--")) else {
        eprintln!("Usage: number-words batch <numbers.csv> [--json]");
        std::process::exit(2);
    };

    let report = convert_file(Path::new(path), io::stdout().lock(), json)?;
    eprintln!(
        "✓ {} records: {} converted, {} rejected",
        report.total, report.converted, report.rejected
    );

    Ok(())
}

/// Print each numeral's words; returns how many arguments were rejected
fn run_once<W: Write, E: Write>(numbers: &[String], mut out: W, mut err: E) -> Result<usize> {
    let mut rejected = 0;
    for text in numbers {
        match parse_number(text) {
            Ok(number) => writeln!(out, "{}", render_line(number, &to_english(number)))?,
            Err(e) => {
                rejected += 1;
                writeln!(err, "{}: {}", text, e)?;
            }
        }
    }
    Ok(rejected)
}
