use std::{env, fs, io::{self, Read, Write}, path::PathBuf, process::ExitCode};

use tf_idf_matcher::{recommend, DefaultRanker, MatchRequest, MatcherConfig, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: tf-idf-matcher <request.json|-> [--config <matcher.toml>] [--cbor]";

struct Args {
    input: String,
    config: Option<PathBuf>,
    cbor: bool,
}

fn parse_args() -> Option<Args> {
    let mut input = None;
    let mut config = None;
    let mut cbor = false;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(args.next()?)),
            "--cbor" => cbor = true,
            "-h" | "--help" => return None,
            _ if input.is_none() => input = Some(arg),
            _ => return None,
        }
    }
    Some(Args { input: input?, config, cbor })
}

// Logs go to stderr so stdout carries only the response.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("MATCHER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => MatcherConfig::load(path)?,
        None => MatcherConfig::default(),
    };
    let ranker = DefaultRanker::new(config)?;

    let request: MatchRequest = serde_json::from_str(&read_input(&args.input)?)?;
    let (case, lawyers) = request.into_parts()?;
    info!(case = %case.id, lawyers = lawyers.len(), "request loaded");

    let response = recommend(&ranker, &case, &lawyers)?;

    let mut stdout = io::stdout().lock();
    if args.cbor {
        serde_cbor::to_writer(&mut stdout, &response)?;
    } else {
        serde_json::to_writer_pretty(&mut stdout, &response)?;
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let Some(args) = parse_args() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(contract_violation = e.is_contract_violation(), "{e}");
            // the log filter may be off; the failure still reaches stderr
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
