mod debug_report;
mod logger;

use liftscan::{AliasOverride, Options, parse_verbose_with, parse_with, to_normalized_text};
use serde::Deserialize;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

fn main() {
    if let Err(err) = logger::init() {
        eprintln!("warning: logger not installed: {err}");
    }

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("error: {0}")]
    Usage(String),
    #[error("error: failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("error: failed to read stdin: {0}")]
    Stdin(io::Error),
    #[error("error: invalid overrides file {}: {source}", path.display())]
    Overrides { path: PathBuf, source: serde_json::Error },
    #[error("error: override row {index} in {} has neither alias_key nor alias_raw", path.display())]
    OverrideRow { path: PathBuf, index: usize },
    #[error("error: failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Normalized,
    Report,
}

impl OutputFormat {
    fn from_arg(value: &str) -> Result<Self, CliError> {
        match value {
            "json" => Ok(OutputFormat::Json),
            "normalized" => Ok(OutputFormat::Normalized),
            "report" => Ok(OutputFormat::Report),
            other => Err(CliError::Usage(format!("invalid --format '{other}' (expected json, normalized or report)"))),
        }
    }
}

struct CliConfig {
    input: String,
    format: OutputFormat,
    options: Options,
    color: bool,
}

fn run(config: &CliConfig) -> Result<(), CliError> {
    match config.format {
        OutputFormat::Json => {
            let parsed = parse_with(&config.input, &config.options);
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        OutputFormat::Normalized => {
            let parsed = parse_with(&config.input, &config.options);
            println!("{}", to_normalized_text(&parsed, &config.input));
        }
        OutputFormat::Report => {
            let verbose = parse_verbose_with(&config.input, &config.options);
            debug_report::print_run(&config.input, &verbose, config.color);
        }
    }
    Ok(())
}

fn parse_args() -> Result<CliConfig, CliError> {
    let mut input: Option<String> = None;
    let mut format = OutputFormat::Json;
    let mut overrides: Vec<AliasOverride> = Vec::new();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("liftscan {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--format" => format = OutputFormat::from_arg(&expect_value(&mut args, "--format")?)?,
            "--overrides" => overrides = load_overrides(Path::new(&expect_value(&mut args, "--overrides")?))?,
            "--input" | "-i" => set_input(&mut input, expect_value(&mut args, "--input")?)?,
            "--file" | "-f" => set_input(&mut input, read_file(Path::new(&expect_value(&mut args, "--file")?))?)?,
            "--" => {
                let rest = args.by_ref().collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--format=") => format = OutputFormat::from_arg(arg.trim_start_matches("--format="))?,
            _ if arg.starts_with("--overrides=") => {
                overrides = load_overrides(Path::new(arg.trim_start_matches("--overrides=")))?;
            }
            _ if arg.starts_with("--input=") => set_input(&mut input, arg.trim_start_matches("--input=").to_string())?,
            _ if arg.starts_with("--file=") => {
                set_input(&mut input, read_file(Path::new(arg.trim_start_matches("--file=")))?)?;
            }
            _ if arg.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option '{arg}'")));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args.by_ref()).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(CliError::Usage(format!("no input provided\n\n{}", help_text())));
    }

    Ok(CliConfig { input, format, options: Options { alias_overrides: overrides }, color })
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
    args.next().ok_or_else(|| CliError::Usage(format!("{flag} expects a value")))
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), CliError> {
    if slot.is_some() {
        return Err(CliError::Usage("input provided multiple times".to_string()));
    }
    *slot = Some(value);
    Ok(())
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}

fn read_stdin_input() -> Result<String, CliError> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(CliError::Stdin)?;
    Ok(buffer)
}

/// One row of an overrides file. `alias_key` is used as is; `alias_raw` is
/// normalized first.
#[derive(Debug, Deserialize)]
struct OverrideRow {
    alias_key: Option<String>,
    alias_raw: Option<String>,
    canonical_name: String,
}

fn load_overrides(path: &Path) -> Result<Vec<AliasOverride>, CliError> {
    let text = read_file(path)?;
    let rows: Vec<OverrideRow> =
        serde_json::from_str(&text).map_err(|source| CliError::Overrides { path: path.to_path_buf(), source })?;

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| match (row.alias_key, row.alias_raw) {
            (Some(key), _) => Ok(AliasOverride::new(key, row.canonical_name)),
            (None, Some(raw)) => Ok(AliasOverride::from_raw(&raw, &row.canonical_name)),
            (None, None) => Err(CliError::OverrideRow { path: path.to_path_buf(), index }),
        })
        .collect()
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "liftscan {version}

Turn OCR text from a workout-tracker screenshot into a structured record.

Usage:
  liftscan [OPTIONS] [--] <input...>
  liftscan [OPTIONS] --input <text>
  liftscan [OPTIONS] --file <path>

Options:
  -i, --input <text>         Input text to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  -f, --file <path>          Read the input text from a file.
  --format <kind>            Output: json, normalized or report. Default: json
  --overrides <path>         JSON array of alias overrides, each row with
                             canonical_name and alias_key or alias_raw.
  --color                    Force ANSI color output (report only).
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_var}=<level>      Log to stderr (error, warn, info, debug, trace).

Exit codes:
  0  Success.
  1  I/O, overrides or internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_var = logger::ENV_VAR,
    )
}
