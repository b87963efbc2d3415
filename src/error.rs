//! Error types for import statement validation
//!
//! One error kind covers every construction failure. Each variant carries
//! the exact text the caller supplied, so generation-time failures report
//! against the caller's input rather than the normalized form.

use thiserror::Error;

/// Result type alias for import statement operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Validation error raised while constructing or renaming an import statement.
///
/// Construction never recovers internally: any failure aborts with one of
/// these variants and no partially-valid instance exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Constructor input was empty or whitespace-only
    #[error("cannot build an import statement from empty input (received {original:?})")]
    EmptyInput { original: String },

    /// The normalized text does not parse in ECMAScript module grammar.
    ///
    /// `offset` is a byte offset into the normalized statement; `excerpt`
    /// is a caret diagnostic marking that offset above the statement.
    #[error(
        "invalid import statement, parse error at byte {offset}:\n{excerpt}\nOriginal input: {original:?}\nExpected one static import declaration in module grammar."
    )]
    Syntax {
        original: String,
        offset: usize,
        excerpt: String,
    },

    /// The text parsed, but its first statement is not an import declaration
    #[error("expected an import declaration, found {found} (original input: {original:?})")]
    NotAnImport { original: String, found: String },

    /// The declaration does not introduce exactly one local binding.
    ///
    /// Generated code needs one unambiguous name standing in for whatever
    /// was imported; `bindings` lists every local name actually found, in
    /// statement order, and is empty for side-effect-style imports.
    #[error(
        "an import statement must introduce exactly one binding, found {found} (original input: {original:?})",
        found = describe_bindings(.bindings)
    )]
    BindingCount {
        original: String,
        bindings: Vec<String>,
    },

    /// The ECMAScript grammar could not be loaded into the parser
    #[error("failed to load the ECMAScript grammar: {reason}")]
    Grammar { reason: String },
}

impl ImportError {
    /// Build a syntax error with a caret diagnostic pointing into `statement`.
    pub(crate) fn syntax(original: &str, statement: &str, offset: usize) -> Self {
        Self::Syntax {
            original: original.to_string(),
            offset,
            excerpt: caret_excerpt(statement, offset),
        }
    }

    /// Get a stable status code for this error.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    pub fn status_code(&self) -> &'static str {
        match self {
            Self::EmptyInput { .. } => "EMPTY_INPUT",
            Self::Syntax { .. } => "INVALID_SYNTAX",
            Self::NotAnImport { .. } => "NOT_AN_IMPORT",
            Self::BindingCount { .. } => "WRONG_BINDING_COUNT",
            Self::Grammar { .. } => "GRAMMAR_ERROR",
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::EmptyInput { .. } => vec![
                "Pass a full statement or an abbreviated fragment like \"Button from './button'\"",
            ],
            Self::Syntax { .. } => vec![
                "Check the marked position in the diagnostic",
                "Abbreviated inputs must still read `<binding> from '<module>'`",
            ],
            Self::NotAnImport { .. } => vec![
                "Only static import declarations are supported",
                "Dynamic import() expressions cannot name a generated binding",
            ],
            Self::BindingCount { .. } => vec![
                "Split the statement so each import introduces exactly one binding",
                "Side-effect imports bind nothing and cannot take part in conflict renaming",
            ],
            Self::Grammar { .. } => {
                vec!["The bundled tree-sitter grammar is incompatible with this build"]
            }
        }
    }
}

fn describe_bindings(bindings: &[String]) -> String {
    if bindings.is_empty() {
        "none (nothing is bound into the generated scope)".to_string()
    } else {
        format!("{}: {}", bindings.len(), bindings.join(", "))
    }
}

/// Render a marker line for `offset`, then the statement on the next line.
fn caret_excerpt(statement: &str, offset: usize) -> String {
    format!("{}^\n{}", "-".repeat(offset), statement.trim_end())
}
