//! `semv` — semantic version command-line interface.
//!
//! Provides four subcommands:
//!
//! - **`parse`** — check a version string and print its canonical form.
//! - **`compare`** — print `<`, `=` or `>` for two versions.
//! - **`sort`** — sort versions given as arguments or as lines on stdin.
//! - **`from-json`** — convert structured version objects to text.
//!
//! Errors are printed as `semv: <message>` and exit with code 2.
//! Set `RUST_LOG=semver_core=debug` to see why an input was rejected.

use std::cmp::Ordering;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};
use semver_core::Version;
use serde_json::Value;

/// semv — semantic version CLI
///
/// Parse, compare, sort and convert semantic versions.
#[derive(Parser)]
#[command(name = "semv", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a version and print its canonical text form.
    ///
    /// Exits 2 if the version does not follow
    /// MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD].
    Parse {
        /// The version string, e.g. 1.2.3-alpha.1+build.5
        version: String,

        /// Print the structured JSON object instead of text.
        #[arg(
            long,
            env = "SEMV_JSON",
            action = ArgAction::SetTrue,
            value_parser = FalseyValueParser::new()
        )]
        json: bool,
    },

    /// Compare two versions and print `<`, `=` or `>`.
    ///
    /// Build tags are ignored, so 1.0.0+a and 1.0.0+b compare equal.
    Compare {
        /// Left-hand version.
        lhs: String,
        /// Right-hand version.
        rhs: String,
    },

    /// Sort versions in ascending order, one per line.
    ///
    /// Reads versions from stdin (one per line, blank lines skipped) when none
    /// are given as arguments. Versions that compare equal keep their input
    /// order.
    Sort {
        /// Versions to sort.
        versions: Vec<String>,

        /// Sort in descending order.
        ///
        /// SEMV_REVERSE accepts any value; `0`, `false`, `no`, `off` and the
        /// empty string mean off.
        #[arg(
            short, long,
            env = "SEMV_REVERSE",
            action = ArgAction::SetTrue,
            value_parser = FalseyValueParser::new()
        )]
        reverse: bool,

        /// Print a JSON array of version objects instead of text lines.
        #[arg(
            long,
            env = "SEMV_JSON",
            action = ArgAction::SetTrue,
            value_parser = FalseyValueParser::new()
        )]
        json: bool,
    },

    /// Convert JSON version objects to canonical text.
    ///
    /// Reads a JSON file containing either a single version object or an array
    /// of them, and prints one version per line.
    ///
    /// Pass `-` as FILE to read from stdin.
    FromJson {
        /// Path to a JSON file, or `-` for stdin.
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "semv=warn,semver_core=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse { version, json } => {
            let v = parse_version(&version);
            if json {
                print_json(&v.to_json());
            } else {
                println!("{v}");
            }
        }

        Command::Compare { lhs, rhs } => {
            println!("{}", compare_symbol(&parse_version(&lhs), &parse_version(&rhs)));
        }

        Command::Sort {
            versions,
            reverse,
            json,
        } => {
            let raw = if versions.is_empty() {
                non_blank_lines(&read_input(&PathBuf::from("-")))
            } else {
                versions
            };
            let parsed = sort_versions(raw.iter().map(|s| parse_version(s)).collect(), reverse);

            if json {
                let array = parsed.iter().map(Version::to_json).collect();
                print_json(&Value::Array(array));
            } else {
                for v in &parsed {
                    println!("{v}");
                }
            }
        }

        Command::FromJson { file } => {
            let text = read_input(&file);
            for v in parse_json_versions(&text) {
                println!("{v}");
            }
        }
    }
}

fn compare_symbol(lhs: &Version, rhs: &Version) -> &'static str {
    match lhs.cmp(rhs) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

/// Stable sort, so versions that differ only in build tags keep input order.
fn sort_versions(mut versions: Vec<Version>, reverse: bool) -> Vec<Version> {
    tracing::debug!("sorting {} versions", versions.len());
    if reverse {
        versions.sort_by(|a, b| b.cmp(a));
    } else {
        versions.sort();
    }
    versions
}

fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_version(input: &str) -> Version {
    input
        .parse()
        .unwrap_or_else(|e| fatal(&format!("invalid version {input:?}: {e}")))
}

/// Parse a JSON document as either an array of version objects or a single one.
fn parse_json_versions(text: &str) -> Vec<Version> {
    let value: Value = serde_json::from_str(text)
        .unwrap_or_else(|e| fatal(&format!("failed to parse input as JSON: {e}")));

    match value {
        Value::Array(items) => {
            if items.is_empty() {
                fatal("input contains an empty array — nothing to process");
            }
            items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    Version::from_json(item)
                        .unwrap_or_else(|e| fatal(&format!("element {i}: {e}")))
                })
                .collect()
        }
        other => vec![Version::from_json(&other).unwrap_or_else(|e| fatal(&e.to_string()))],
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => fatal(&format!("failed to serialise JSON: {e}")),
    }
}

/// Read the full contents of a file, or stdin when the path is `"-"`.
fn read_input(path: &PathBuf) -> String {
    if path.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|e| fatal(&format!("failed to read stdin: {}", e)));
        buf
    } else {
        fs::read_to_string(path).unwrap_or_else(|e| {
            fatal(&format!("failed to read {}: {}", path.display(), e))
        })
    }
}

/// Print an error message to stderr and exit with code 2.
fn fatal(msg: &str) -> ! {
    eprintln!("semv: {}", msg);
    process::exit(2);
}
