mod case;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use case::{CaseError, Style};

#[derive(Parser, Debug)]
#[command(name = "caser", about = "Recognize and convert identifier case styles")]
struct Cli {
    /// The string that you want to process (required unless --list)
    input: Option<String>,

    /// The case that you want to convert the string to (e.g. snake_case, PascalCase)
    #[arg(long, visible_alias = "font-case", value_name = "STYLE")]
    to: Option<String>,

    /// Print the outcome as a single JSON object
    #[arg(long)]
    json: bool,

    /// List the supported case styles and exit
    #[arg(long)]
    list: bool,
}

/// Successful result of one invocation.
#[derive(Debug, PartialEq)]
enum Outcome {
    Recognized(Style),
    Converted { target: Style, result: String },
}

impl Outcome {
    fn value(&self) -> String {
        match self {
            Outcome::Recognized(style) => style.to_string(),
            Outcome::Converted { result, .. } => result.clone(),
        }
    }
}

/// Recognize `input`, or convert it when a target label is given. An unknown
/// label fails before the input is looked at.
fn run(input: &str, target: Option<&str>) -> Result<Outcome, CaseError> {
    match target {
        None => case::recognize(input).map(Outcome::Recognized),
        Some(label) => {
            let target: Style = label.parse()?;
            let result = case::convert(input, target)?;
            Ok(Outcome::Converted { target, result })
        }
    }
}

/// The positional input, or a clap usage error when it is missing.
fn require_input(cli: &Cli) -> Result<&str, clap::Error> {
    cli.input.as_deref().ok_or_else(|| {
        Cli::command().error(
            ErrorKind::MissingRequiredArgument,
            "the following required arguments were not provided: <INPUT>",
        )
    })
}

/// Text-mode line for an outcome, and whether it belongs on stderr.
fn render_text(outcome: &Result<Outcome, CaseError>) -> (String, bool) {
    match outcome {
        Ok(o) => (format!("The result: {}", o.value()), false),
        Err(e) => (format!("FAIL: {e}. Try again"), true),
    }
}

fn report_json(input: &str, outcome: &Result<Outcome, CaseError>) -> Value {
    match outcome {
        Ok(Outcome::Recognized(style)) => json!({ "input": input, "style": style }),
        Ok(Outcome::Converted { target, result }) => {
            json!({ "input": input, "target": target, "result": result })
        }
        Err(e) => json!({
            "input": input,
            "error": { "kind": e.kind(), "message": e.to_string() },
        }),
    }
}

fn list_styles(as_json: bool) -> Result<()> {
    const SAMPLE: [&str; 2] = ["user", "name"];

    if as_json {
        let styles: Vec<_> = Style::ALL
            .iter()
            .map(|&style| json!({ "style": style, "example": case::render(&SAMPLE, style) }))
            .collect();
        let out = serde_json::to_string(&styles).context("Failed to serialize style list")?;
        println!("{out}");
    } else {
        for style in Style::ALL {
            println!("{:<22} {}", style.label(), case::render(&SAMPLE, style));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list {
        return list_styles(cli.json);
    }

    let input = require_input(&cli).unwrap_or_else(|e| e.exit());

    tracing::info!("The string that you want to process: {}", input);

    let outcome = run(input, cli.to.as_deref());

    if cli.json {
        let out = serde_json::to_string(&report_json(input, &outcome))
            .context("Failed to serialize result")?;
        println!("{out}");
    } else {
        match render_text(&outcome) {
            (line, true) => eprintln!("{line}"),
            (line, false) => println!("{line}"),
        }
    }

    if let Err(e) = outcome {
        tracing::debug!("Exiting with {} ({})", e.exit_code(), e.kind());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
