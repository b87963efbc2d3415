//! Validated import statements for generated source
//!
//! [`ImportStatement`] is the one entry point of the crate: construction
//! normalizes and parses the input, and an instance only ever exists for
//! statements that passed the full pipeline. Instances are immutable, so a
//! value handed to a code generator keeps meaning the same statement for
//! its whole life. Renaming produces a fresh, fully re-validated instance.

use crate::error::{ImportError, ImportResult};
use crate::parsing::{
    ImportDeclaration, ImportParser, Specifier, SpecifierKind, normalize_statement,
};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A single validated ECMAScript import statement.
///
/// Accepts full statements or abbreviated fragments and stores the
/// canonical form alongside the facts extracted from it:
///
/// ```
/// use esimport::ImportStatement;
///
/// let import = ImportStatement::new("{ useQuery } from '@apollo/react-hooks'")?;
/// assert_eq!(import.binding(), "useQuery");
/// assert_eq!(import.source(), "@apollo/react-hooks");
/// assert_eq!(
///     import.statement(),
///     "import { useQuery } from '@apollo/react-hooks';\n"
/// );
/// # Ok::<(), esimport::ImportError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    original: String,
    statement: String,
    declaration: ImportDeclaration,
}

impl ImportStatement {
    /// Normalize, parse, and validate `input` into an import statement.
    ///
    /// Rejects anything that is not exactly one static import declaration
    /// binding exactly one name. See [`ImportError`] for the failure modes.
    pub fn new(input: &str) -> ImportResult<Self> {
        if input.trim().is_empty() {
            return Err(ImportError::EmptyInput {
                original: input.to_string(),
            });
        }

        let statement = normalize_statement(input);
        let declaration = ImportParser::new()?.parse_declaration(&statement, input)?;
        debug!(
            "validated {} import binding {:?} from {:?}",
            declaration.specifier.kind(),
            declaration.specifier.local().text,
            declaration.source
        );

        Ok(Self {
            original: input.to_string(),
            statement,
            declaration,
        })
    }

    /// The local name the statement binds into the surrounding scope
    pub fn binding(&self) -> &str {
        &self.declaration.specifier.local().text
    }

    /// The module path, without its quotes
    pub fn source(&self) -> &str {
        &self.declaration.source
    }

    /// What the binding refers to inside the source module.
    ///
    /// `"default"` for default imports and `"*"` for namespace imports;
    /// for named imports, the exported name (which differs from
    /// [`binding`](Self::binding) only when the specifier is aliased).
    pub fn imported(&self) -> &str {
        match &self.declaration.specifier {
            Specifier::Default { .. } => "default",
            Specifier::Namespace { .. } => "*",
            Specifier::Named { imported, .. } => &imported.text,
        }
    }

    /// Which clause form the statement uses
    pub fn kind(&self) -> SpecifierKind {
        self.declaration.specifier.kind()
    }

    /// True for TypeScript `import type` statements
    pub fn is_type_only(&self) -> bool {
        self.declaration.is_type_only
    }

    /// The canonical statement text, terminated by a newline.
    ///
    /// This is the form to splice into generated source.
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// The input as the caller wrote it, before normalization
    pub fn original_statement(&self) -> &str {
        &self.original
    }

    /// The parsed declaration behind the accessors
    pub fn declaration(&self) -> &ImportDeclaration {
        &self.declaration
    }

    /// Produce a copy of this statement bound to `new_binding`.
    ///
    /// A named specifier without an alias gains one, keeping the imported
    /// name intact; every other form has its bound identifier replaced in
    /// place. The spliced text goes through the full constructor again, so
    /// an invalid `new_binding` is rejected rather than smuggled into the
    /// statement:
    ///
    /// ```
    /// use esimport::ImportStatement;
    ///
    /// let import = ImportStatement::new("import { useQuery } from 'pkg';")?;
    /// let renamed = import.change_binding("useQuery2")?;
    /// assert_eq!(
    ///     renamed.statement(),
    ///     "import { useQuery as useQuery2 } from 'pkg';\n"
    /// );
    /// assert_eq!(renamed.imported(), "useQuery");
    /// # Ok::<(), esimport::ImportError>(())
    /// ```
    pub fn change_binding(&self, new_binding: &str) -> ImportResult<Self> {
        debug!(
            "renaming binding {:?} to {new_binding:?} in {:?}",
            self.binding(),
            self.statement.trim_end()
        );

        let spliced = match &self.declaration.specifier {
            // `{ name }` keeps the exported name and gains an alias
            Specifier::Named {
                imported,
                alias: None,
            } => {
                let at = imported.span.end;
                format!(
                    "{} as {}{}",
                    &self.statement[..at],
                    new_binding,
                    &self.statement[at..]
                )
            }
            // Everything else replaces the bound identifier itself
            specifier => {
                let span = specifier.local().span;
                format!(
                    "{}{}{}",
                    &self.statement[..span.start],
                    new_binding,
                    &self.statement[span.end..]
                )
            }
        };

        Self::new(&spliced)
    }
}

/// Displays as the bound name, so statements drop into identifier position
/// in format strings
impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binding())
    }
}

impl FromStr for ImportStatement {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
