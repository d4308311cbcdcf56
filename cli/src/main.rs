use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use optbind_config::TableFile;
use optbind_core::{Binding, validate_table};
use optbind_parser::{ErrorKind, ParseOutcome, parse};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Output format for parse reports.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "optbind")]
#[command(about = "Parse argument lists against option tables")]
struct Cli {
    /// Enable debug logging on stderr.
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse arguments and print bindings and errors.
    Parse(ParseArgs),
    /// Parse arguments and only report errors on stderr.
    Check(CheckArgs),
    /// Check an option table file for shadowed or unreachable options.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Option table file (.yaml, .yml, or .json).
    #[arg(long)]
    table: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: CliOutputFormat,
    /// Arguments to parse, without the program name (put them after `--`).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Option table file (.yaml, .yml, or .json).
    #[arg(long)]
    table: PathBuf,
    /// Arguments to parse, without the program name (put them after `--`).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Option table file (.yaml, .yml, or .json).
    #[arg(long)]
    table: PathBuf,
}

#[derive(Debug, Serialize)]
struct NamedBinding<'a> {
    name: String,
    binding: &'a Binding,
}

#[derive(Debug, Serialize)]
struct ErrorReport<'a> {
    kind: ErrorKind,
    subject: Option<&'a str>,
    message: String,
}

#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    program: Option<&'a str>,
    ok: bool,
    bindings: Vec<NamedBinding<'a>>,
    errors: Vec<ErrorReport<'a>>,
}

impl<'a> ParseReport<'a> {
    fn new(table_file: &'a TableFile, outcome: &'a ParseOutcome) -> Self {
        let bindings = outcome
            .named_bindings(table_file.table())
            .into_iter()
            .map(|(name, binding)| NamedBinding { name, binding })
            .collect();
        let errors = outcome
            .errors()
            .iter()
            .map(|error| ErrorReport {
                kind: error.kind(),
                subject: error.subject(),
                message: error.to_string(),
            })
            .collect();

        Self {
            program: table_file.program.as_deref(),
            ok: outcome.is_ok(),
            bindings,
            errors,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Check(args) => run_check(args),
        Command::Validate(args) => run_validate(args),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(debug: bool) {
    let default = if debug {
        "optbind=debug,optbind_parser=debug,optbind_config=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_table(path: &Path) -> Result<TableFile, String> {
    TableFile::load(path)
        .map_err(|err| format!("Failed to load table '{}': {err}", path.display()))
}

fn print_errors(outcome: &ParseOutcome) -> Result<(), String> {
    let mut stderr = io::stderr().lock();
    outcome
        .errors()
        .print(&mut stderr)
        .and_then(|()| stderr.flush())
        .map_err(|err| format!("Failed to write parse errors: {err}"))
}

fn run_parse(args: ParseArgs) -> Result<bool, String> {
    let table_file = load_table(&args.table)?;
    let outcome = parse(&args.args, table_file.table());
    debug!(errors = outcome.errors().len(), "Parse finished");

    let report = ParseReport::new(&table_file, &outcome);
    let raw = match args.format {
        CliOutputFormat::Json => serde_json::to_string_pretty(&report)
            .map_err(|e| format!("JSON serialization failed: {e}"))?,
        CliOutputFormat::Yaml => {
            serde_yaml::to_string(&report).map_err(|e| format!("YAML serialization failed: {e}"))?
        }
    };
    println!("{}", raw.trim_end());

    print_errors(&outcome)?;
    Ok(outcome.is_ok())
}

fn run_check(args: CheckArgs) -> Result<bool, String> {
    let table_file = load_table(&args.table)?;
    let outcome = parse(&args.args, table_file.table());
    print_errors(&outcome)?;
    Ok(outcome.is_ok())
}

fn run_validate(args: ValidateArgs) -> Result<bool, String> {
    let table_file = load_table(&args.table)?;
    let issues = validate_table(table_file.table());

    if issues.is_empty() {
        println!(
            "Option table is valid ({} option(s)).",
            table_file.table().len()
        );
        return Ok(true);
    }

    for issue in &issues {
        println!("{issue}");
    }
    println!("{} issue(s) found.", issues.len());
    Ok(false)
}
