use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};

use syntax::{
    display_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    source::read_sources,
    with_worker_stack,
};

/// Parses a program and prints its syntax tree as JSON.
#[derive(Parser, Debug)]
#[command(name = "syntax", version, about, arg_required_else_help = true)]
struct Cli {
    /// Source code to parse, instead of reading files
    #[arg(short = 'c', value_name = "CODE")]
    code: Option<String>,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Log lexer and parser activity to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Files to parse, concatenated in the order given
    files: Vec<PathBuf>,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }

    match with_worker_stack(move || run(cli)) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: failed to start worker thread: {}", error);
            ExitCode::FAILURE
        }
    }
}

/// Loads, parses and prints. Runs on the worker, so the tree is dropped there too.
fn run(cli: Cli) -> ExitCode {
    let (source, name) = match cli.code {
        Some(code) => (code, String::from("<inline>")),
        None => match read_sources(&cli.files) {
            Ok(source) => {
                let names = cli
                    .files
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>();
                (source, names.join(" + "))
            }
            Err(error) => {
                eprintln!("Error: {}", error);
                return ExitCode::FAILURE;
            }
        },
    };

    let rendered = if cli.tokens {
        tokenize(&source).map(|tokens| serde_json::to_string_pretty(&tokens).map(|json| json + "\n"))
    } else {
        parse(&source).map(|tree| tree.to_pretty_json())
    };

    match rendered {
        Ok(Ok(output)) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(Err(error)) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
        Err(error) => {
            display_error(&error, &source, &name);
            ExitCode::FAILURE
        }
    }
}
