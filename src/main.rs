//! CLI entry point for the import statement toolkit.
//!
//! Two commands: `inspect` validates a statement and reports the facts it
//! declares, `rename` rebinds it to a new local name. Both speak plain text
//! by default and pretty JSON with `--json`, with semantic exit codes for
//! scripting.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use esimport::{ImportError, ImportStatement, SpecifierKind};
use serde::Serialize;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Import statement toolkit for code generators
#[derive(Parser)]
#[command(
    name = "esimport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate and rename ECMAScript import statements",
    styles = clap_cargo_style()
)]
struct Cli {
    /// Show debug-level diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Validate an import statement
    #[command(
        about = "Validate a statement and report its binding, source, and imported name",
        after_help = "Examples:\n  esimport inspect \"import Button from './button';\"\n  esimport inspect \"{ useQuery } from '@apollo/react-hooks'\" --json"
    )]
    Inspect {
        /// Import statement or abbreviated fragment
        statement: String,

        /// Emit the report as pretty-printed JSON
        #[arg(long)]
        json: bool,
    },

    /// Rename the binding of an import statement
    #[command(
        about = "Rebind a statement to a new local name and print the result",
        after_help = "Examples:\n  esimport rename \"import Button from './button';\" Button2\n  esimport rename \"{ useQuery } from 'pkg'\" useQuery2 --json"
    )]
    Rename {
        /// Import statement or abbreviated fragment
        statement: String,

        /// New local binding name
        new_binding: String,

        /// Emit the renamed statement report as pretty-printed JSON
        #[arg(long)]
        json: bool,
    },
}

/// Exit codes following Unix conventions.
///
/// `0` success, `1` unspecified failure, `4` input failed validation.
/// Scripts can branch on the code without parsing stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Input failed validation (code 4)
    ParseError = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Map an error to its exit code.
    ///
    /// Grammar failures are environment problems, not input problems, so
    /// they report as general errors.
    fn from_error(error: &ImportError) -> Self {
        match error {
            ImportError::Grammar { .. } => ExitCode::GeneralError,
            _ => ExitCode::ParseError,
        }
    }
}

/// JSON output for a validated statement
#[derive(Debug, Serialize)]
struct StatementReport<'a> {
    binding: &'a str,
    source: &'a str,
    imported: &'a str,
    kind: SpecifierKind,
    type_only: bool,
    statement: &'a str,
    original: &'a str,
}

impl<'a> StatementReport<'a> {
    fn from_statement(import: &'a ImportStatement) -> Self {
        Self {
            binding: import.binding(),
            source: import.source(),
            imported: import.imported(),
            kind: import.kind(),
            type_only: import.is_type_only(),
            statement: import.statement(),
            original: import.original_statement(),
        }
    }
}

/// JSON output for a rejected statement
#[derive(Debug, Serialize)]
struct ErrorReport {
    status: &'static str,
    code: &'static str,
    message: String,
    suggestions: Vec<&'static str>,
    exit_code: i32,
}

fn print_report(import: &ImportStatement, json: bool) -> ExitCode {
    if json {
        let report = StatementReport::from_statement(import);
        match serde_json::to_string_pretty(&report) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {e}");
                return ExitCode::GeneralError;
            }
        }
    } else {
        println!("Binding:   {}", import.binding());
        println!("Source:    {}", import.source());
        println!("Imported:  {}", import.imported());
        println!("Kind:      {}", import.kind());
        if import.is_type_only() {
            println!("Type-only: yes");
        }
        println!("Statement: {}", import.statement().trim_end());
    }
    ExitCode::Success
}

fn print_error(error: &ImportError, json: bool) -> ExitCode {
    let exit_code = ExitCode::from_error(error);
    if json {
        let report = ErrorReport {
            status: "error",
            code: error.status_code(),
            message: error.to_string(),
            suggestions: error.recovery_suggestions(),
            exit_code: exit_code.into(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(output) => eprintln!("{output}"),
            Err(e) => eprintln!("Error: failed to serialize report: {e}"),
        }
    } else {
        eprintln!("Error: {error}");
        for suggestion in error.recovery_suggestions() {
            eprintln!("  hint: {suggestion}");
        }
    }
    exit_code
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let exit_code = match cli.command {
        Commands::Inspect { statement, json } => match ImportStatement::new(&statement) {
            Ok(import) => print_report(&import, json),
            Err(e) => print_error(&e, json),
        },
        Commands::Rename {
            statement,
            new_binding,
            json,
        } => {
            let renamed = ImportStatement::new(&statement)
                .and_then(|import| import.change_binding(&new_binding));
            match renamed {
                Ok(renamed) if json => print_report(&renamed, true),
                Ok(renamed) => {
                    // The renamed statement alone, ready to splice into
                    // generated source or another pipeline stage
                    println!("{}", renamed.statement().trim_end());
                    ExitCode::Success
                }
                Err(e) => print_error(&e, json),
            }
        }
    };

    std::process::exit(exit_code.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values_are_stable() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::GeneralError), 1);
        assert_eq!(i32::from(ExitCode::ParseError), 4);
    }

    #[test]
    fn test_validation_errors_map_to_parse_error() {
        let err = ImportStatement::new("const x = 1;").unwrap_err();
        assert_eq!(ExitCode::from_error(&err), ExitCode::ParseError);

        let err = ImportStatement::new("").unwrap_err();
        assert_eq!(ExitCode::from_error(&err), ExitCode::ParseError);
    }

    #[test]
    fn test_grammar_errors_map_to_general_error() {
        let err = ImportError::Grammar {
            reason: "version mismatch".to_string(),
        };
        assert_eq!(ExitCode::from_error(&err), ExitCode::GeneralError);
    }

    #[test]
    fn test_report_kind_serializes_lowercase() {
        let import = ImportStatement::new("import * as utils from './utils';").unwrap();
        let report = StatementReport::from_statement(&import);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"kind\":\"namespace\""));
        assert!(json.contains("\"imported\":\"*\""));
    }
}
