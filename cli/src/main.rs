use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use interview_eval_coerce::{CoercionResult, coerce_with_report, format_evaluation_markdown};
use interview_eval_core::{interview_evaluation_schema, validate_evaluation};

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "eval-coerce")]
#[command(about = "Coerce captured model output into structured interview evaluations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Coerce raw evaluation text from a file into a structured record.
    CoerceFile(CoerceFileArgs),
    /// Coerce raw evaluation text from stdin into a structured record.
    CoerceStdin(CoerceStdinArgs),
    /// Render a per-question evaluation file as display Markdown.
    FormatFile(FormatFileArgs),
    /// Render a per-question evaluation from stdin as display Markdown.
    FormatStdin,
    /// Validate an already-structured evaluation JSON file against the schema.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct CoerceFileArgs {
    /// Path to a file containing raw model output.
    #[arg(long)]
    input: PathBuf,
    /// Output the full coercion report (winning stage and warnings).
    #[arg(long)]
    with_report: bool,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct CoerceStdinArgs {
    /// Output the full coercion report (winning stage and warnings).
    #[arg(long)]
    with_report: bool,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct FormatFileArgs {
    /// Path to a file containing one per-question evaluation string.
    #[arg(long)]
    input: PathBuf,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Path to a structured evaluation JSON file.
    #[arg(long)]
    input: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::CoerceFile(args) => {
            read_file(&args.input).and_then(|text| run_coerce(&text, args.with_report, args.format))
        }
        Command::CoerceStdin(args) => {
            read_stdin().and_then(|text| run_coerce(&text, args.with_report, args.format))
        }
        Command::FormatFile(args) => read_file(&args.input).map(run_format),
        Command::FormatStdin => read_stdin().map(run_format),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_coerce(raw_text: &str, with_report: bool, format: CliOutputFormat) -> Result<(), String> {
    let result = coerce_with_report(raw_text, interview_evaluation_schema());

    if with_report {
        println!("{}", render_output(&result, format)?);
        return Ok(());
    }

    match result.evaluation {
        Some(evaluation) => {
            println!("{}", render_output(&evaluation, format)?);
            Ok(())
        }
        None => Err(coercion_failure_message(&result)),
    }
}

fn run_format(evaluation_text: String) {
    println!("{}", format_evaluation_markdown(&evaluation_text));
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let raw = read_file(&args.input)?;
    let candidate: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|err| format!("'{}' is not valid JSON: {err}", args.input.display()))?;

    let errors = validate_evaluation(&candidate, interview_evaluation_schema());
    if errors.is_empty() {
        println!("'{}' is a valid interview evaluation.", args.input.display());
        return Ok(());
    }

    for error in &errors {
        eprintln!("  {error}");
    }
    Err(format!(
        "'{}' failed validation with {} error(s)",
        args.input.display(),
        errors.len()
    ))
}

fn render_output<T: serde::Serialize>(value: &T, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|err| format!("JSON serialization failed: {err}")),
        CliOutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|err| format!("YAML serialization failed: {err}"))
        }
    }
}

fn coercion_failure_message(result: &CoercionResult) -> String {
    if result.warnings.is_empty() {
        "No structured evaluation could be recovered".to_string()
    } else {
        format!(
            "No structured evaluation could be recovered: {}",
            result.warnings.join("; ")
        )
    }
}

fn read_file(path: &PathBuf) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("Failed to read '{}': {err}", path.display()))
}

fn read_stdin() -> Result<String, String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_output_json_and_yaml() {
        let result = coerce_with_report("", interview_evaluation_schema());

        let json = render_output(&result, CliOutputFormat::Json).unwrap();
        assert!(json.contains("\"success\": false"));

        let yaml = render_output(&result, CliOutputFormat::Yaml).unwrap();
        assert!(yaml.contains("success: false"));
    }

    #[test]
    fn test_coercion_failure_message_includes_warnings() {
        let result = coerce_with_report("   ", interview_evaluation_schema());
        let message = coercion_failure_message(&result);
        assert!(message.contains("Empty model output"));
    }

    #[test]
    fn test_run_coerce_succeeds_on_prose() {
        let outcome = run_coerce("总体评分：70", false, CliOutputFormat::Json);
        assert!(outcome.is_ok());
    }

    #[test]
    fn test_run_coerce_fails_on_empty_input_without_report() {
        let outcome = run_coerce("", false, CliOutputFormat::Json);
        assert!(outcome.is_err());
    }
}
