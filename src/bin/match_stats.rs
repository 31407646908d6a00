use matchstat::{
    err::OrFail,
    io::read_pattern_file,
    search::{Algorithm, AlgorithmParseError},
    stats::SearchStats,
};
use std::{
    env,
    io::{BufWriter, Write},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const PROGRAM: &str = "match-stats";

fn usage() -> ! {
    eprintln!("\nUsage: {PROGRAM} [-v] <PATTERN_FILE> <TEXT_FILE> [ALGORITHM ...]\n");
    eprintln!("Runs each pattern (one per line) against the text and prints per-phase statistics.");
    eprintln!("ALGORITHM is one of: bm, kmp, bf (default: all).\n");
    std::process::exit(2);
}

fn main() {
    let mut verbose = false;
    let mut positional = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => usage(),
            _ => positional.push(arg),
        }
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let [pattern_file, text_file, algorithms @ ..] = positional.as_slice() else {
        usage();
    };

    let algorithms = if algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        algorithms
            .iter()
            .map(|a| a.parse())
            .collect::<Result<Vec<_>, AlgorithmParseError>>()
            .unwrap_or_fail()
    };

    let patterns = read_pattern_file(pattern_file).unwrap_or_die(&format!("Couldn't read patterns from {pattern_file}"));
    let text = std::fs::read(text_file).unwrap_or_die(&format!("Couldn't read text from {text_file}"));
    info!(patterns = patterns.len(), n = text.len(), "loaded inputs");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "algorithm\tpattern\tm\tmatches\t{}", SearchStats::TSV_HEADER).unwrap_or_fail();

    for (index, pattern) in patterns.iter().enumerate() {
        for &algorithm in &algorithms {
            // A failed run is skipped so the rest of the sweep still completes
            let (count, stats) = match algorithm.count(pattern, &text) {
                Ok(result) => result,
                Err(e) => {
                    warn!(%algorithm, pattern = index, "skipping run: {e}");
                    continue;
                }
            };

            for row in stats.to_string().lines() {
                writeln!(out, "{algorithm}\t{index}\t{}\t{count}\t{row}", pattern.len()).unwrap_or_fail();
            }
        }
    }

    out.flush().unwrap_or_fail();
}
