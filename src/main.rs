use std::{
    env, fs,
    io::{self, Write},
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use log::{debug, error, info};
use measure_time::debug_time;

use tokfreq::{
    DEFAULT_CAPACITY, Error, FixedHashTable, FrequencyCounter, LinearMap, Report, Strategy,
    report::log_start, tally,
};

#[derive(Debug)]
struct Args {
    input: String,
    json: bool,
}

impl Args {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut input = None;
        let mut json = false;

        for arg in args {
            if arg == "--json" {
                json = true;
            } else if arg.starts_with("--") {
                return Err(format!("Unknown argument: {}", arg));
            } else if input.is_none() {
                input = Some(arg);
            } else {
                return Err(format!("Unexpected argument: {}", arg));
            }
        }

        let input = input.ok_or_else(|| "No input is provided".to_string())?;
        Ok(Self { input, json })
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let args = match Args::parse(argv) {
        Ok(args) => args,
        Err(msg) => {
            error!("{}", msg);
            info!("Usage: {} [--json] <input.txt>", program);
            return ExitCode::FAILURE;
        }
    };

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> Result<()> {
    let content = fs::read(&args.input).with_context(|| format!("Could not read {}", args.input))?;

    // The baseline runs first, so its results are out even if the table overflows.
    let naive = analyze(Strategy::Linear, &mut LinearMap::new(), &content, &args.input)?;
    emit(&naive, args.json)?;

    let mut table = FixedHashTable::new(DEFAULT_CAPACITY)?;
    let hashed = analyze(Strategy::HashTable, &mut table, &content, &args.input)?;
    debug!("  Load factor {:.6}", table.load_factor());
    emit(&hashed, args.json)?;

    Ok(())
}

/// Counts every token of `content` into `counter`, then logs the ranking.
///
/// Only the counting itself is timed.
fn analyze<'a, C>(strategy: Strategy, counter: &mut C, content: &'a [u8], path: &str) -> Result<Report, Error>
where
    C: FrequencyCounter<'a>,
{
    log_start(strategy, path, content.len());

    let begin = Instant::now();
    let total_tokens = tally(counter, content)?;
    let elapsed = begin.elapsed();

    let report = {
        debug_time!("{:?}", "Ranking");
        Report::new(strategy, path, content.len(), total_tokens, counter.entries(), elapsed)
    };
    report.log();

    Ok(report)
}

/// Prints the report as one JSON line on stdout, when asked to.
fn emit(report: &Report, json: bool) -> Result<()> {
    if !json {
        return Ok(());
    }
    let mut out = io::stdout().lock();
    serde_json::to_writer(&mut out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
