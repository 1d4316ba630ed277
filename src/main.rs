use std::{
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser as ClapParser;
use jsoncheck::{
    display_error,
    dump::write_tokens_file,
    errors::errors::Error,
    lexer::lexer::{tokenize_all, Lexer},
    parser::parser::Parser,
};
use log::{info, LevelFilter};
use thiserror::Error as ThisError;

const DEFAULT_INPUT: &str = "source.txt";
const DEFAULT_TOKENS: &str = "tokens.txt";

#[derive(ClapParser)]
#[command(
    name = "jsoncheck",
    version = "0.1.0",
    about = "Validate text against a simplified JSON grammar",
    long_about = "Reports every lexical and syntax error in one pass.\nOnly objects and arrays are accepted at the top level."
)]
struct Cli {
    /// Input file
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the token dump
    #[arg(long, default_value = DEFAULT_TOKENS)]
    tokens: PathBuf,

    /// Skip writing the token dump
    #[arg(long)]
    no_dump: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ThisError, Debug)]
enum DriverError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write token dump {}: {source}", path.display())]
    Dump { path: PathBuf, source: io::Error },
}

enum Outcome {
    Valid,
    LexicalErrors,
    SyntaxErrors,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Valid => ExitCode::SUCCESS,
            Outcome::LexicalErrors => ExitCode::from(1),
            Outcome::SyntaxErrors => ExitCode::from(2),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(outcome) => outcome.into(),
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::from(1)
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<Outcome, DriverError> {
    if !cli.input.exists() {
        return Err(DriverError::NotFound(cli.input.clone()));
    }

    let source = read_to_string(&cli.input).map_err(|source| DriverError::Read {
        path: cli.input.clone(),
        source,
    })?;
    info!("read {} bytes from {}", source.len(), cli.input.display());

    let (tokens, fault) = tokenize_all(source.clone());

    if !cli.no_dump {
        write_tokens_file(&cli.tokens, &tokens, fault.as_ref()).map_err(|source| {
            DriverError::Dump {
                path: cli.tokens.clone(),
                source,
            }
        })?;
        println!("Tokens written to {}", cli.tokens.display());
    }

    if let Some(fault) = fault {
        report_lexical_fault(&fault, &source, &cli.input);
        return Ok(Outcome::LexicalErrors);
    }

    let mut parser = match Parser::new(Lexer::new(source.clone())) {
        Ok(parser) => parser,
        Err(fault) => {
            report_lexical_fault(&fault, &source, &cli.input);
            return Ok(Outcome::LexicalErrors);
        }
    };

    let valid = match parser.parse() {
        Ok(valid) => valid,
        Err(fault) => {
            report_lexical_fault(&fault, &source, &cli.input);
            return Ok(Outcome::LexicalErrors);
        }
    };

    if valid {
        println!("Source is syntactically valid");
        return Ok(Outcome::Valid);
    }

    println!("Syntax errors found:");
    for message in parser.messages() {
        println!("  - {}", message);
    }
    println!();
    for error in parser.get_errors() {
        display_error(error, &source, &cli.input);
    }

    Ok(Outcome::SyntaxErrors)
}

fn report_lexical_fault(fault: &Error, source: &str, file: &Path) {
    println!("Lexical errors found:");
    println!("  - {}", fault);
    display_error(fault, source, file);
    println!("Syntax analysis skipped until lexical errors are fixed.");
}
