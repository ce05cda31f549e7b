//! Command-line driver: parse text with one grammar rule and print the result.

use clap::{Args, Parser, ValueEnum};
use jsoncomb::json::{self, JsonValue, Limits};
use jsoncomb::text::end_of_input;
use jsoncomb::{AndExt, MapExt, ParseResult};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Highest `--max-depth` accepted; deeper recursion can exhaust the main thread's stack
const MAX_DEPTH_CEILING: u64 = 512;

#[derive(Debug, Parser)]
#[command(name = "jsoncomb", version, about = "Parse JSON text with combinator parsers.")]
struct Cli {
    #[command(flatten)]
    source: Source,

    /// Grammar rule to run
    #[arg(long, value_enum, default_value_t = Rule::Value)]
    rule: Rule,

    /// Fail when input remains after the parsed value
    #[arg(long)]
    strict: bool,

    /// Deepest allowed nesting of arrays and objects
    #[arg(
        long,
        default_value_t = Limits::DEFAULT_MAX_DEPTH as u64,
        value_parser = clap::value_parser!(u64).range(1..=MAX_DEPTH_CEILING)
    )]
    max_depth: u64,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct Source {
    /// Text to parse
    #[arg(allow_hyphen_values = true)]
    input: Option<String>,

    /// Read the text to parse from a file
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Rule {
    Null,
    Boolean,
    Number,
    String,
    Value,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("no input given; pass the text to parse or --file")]
    NoInput,
}

impl Source {
    fn read(&self) -> Result<String, CliError> {
        match (&self.input, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (_, Some(path)) => fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            }),
            (None, None) => Err(CliError::NoInput),
        }
    }
}

fn run_rule<'code, P>(parser: P, strict: bool, input: &'code str) -> ParseResult<'code, JsonValue>
where
    P: jsoncomb::Parser<'code, Output = JsonValue>,
{
    if strict {
        jsoncomb::parse(&parser.and(end_of_input()).map(|(value, _)| value), input)
    } else {
        jsoncomb::parse(&parser, input)
    }
}

fn run<'code>(cli: &Cli, input: &'code str) -> ParseResult<'code, JsonValue> {
    // Bounded by MAX_DEPTH_CEILING, so the conversion never truncates
    let limits = Limits::with_max_depth(cli.max_depth as usize);
    match cli.rule {
        Rule::Null => run_rule(json::null(), cli.strict, input),
        Rule::Boolean => run_rule(json::boolean(), cli.strict, input),
        Rule::Number => run_rule(json::number().map(JsonValue::Number), cli.strict, input),
        Rule::String => run_rule(
            json::string_literal().map(JsonValue::String),
            cli.strict,
            input,
        ),
        Rule::Value => run_rule(json::ValueParser::new(limits), cli.strict, input),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let input = match cli.source.read() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(2);
        }
    };

    match run(&cli, &input) {
        Ok((value, rest)) => {
            println!("{}", value);
            if !rest.is_empty() {
                println!(
                    "unconsumed input at position {}: {:?}",
                    rest.position(),
                    rest.remaining()
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint!("{}", err.report());
            ExitCode::FAILURE
        }
    }
}
