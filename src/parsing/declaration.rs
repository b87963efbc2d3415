//! Validated import declaration facts
//!
//! Value types produced by the parse step. They carry everything the rename
//! splice needs (byte spans into the normalized statement) and everything a
//! code generator reads back (binding, source, imported name). Nothing here
//! touches the underlying syntax tree, which keeps the grammar swappable
//! behind [`ImportParser`](crate::parsing::ImportParser).

use serde::Serialize;
use std::fmt;

/// Byte span into the normalized statement text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The span as a std range, for slicing the statement text
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// An identifier together with its location in the normalized statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ident {
    pub text: String,
    pub span: Span,
}

impl Ident {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// Which form of import clause the statement uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecifierKind {
    /// `import Button from './button'`
    Default,
    /// `import * as utils from './utils'`
    Namespace,
    /// `import { useQuery } from '@apollo/react-hooks'`
    Named,
}

impl fmt::Display for SpecifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Default => "default",
            Self::Namespace => "namespace",
            Self::Named => "named",
        };
        f.write_str(label)
    }
}

/// The sole specifier of a validated import declaration.
///
/// Whether a named specifier already carries an `as` alias is encoded
/// directly in the variant, so the rename step never re-derives it from
/// span positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Specifier {
    /// `import Button from './button'`
    Default { local: Ident },
    /// `import * as utils from './utils'`
    Namespace { local: Ident },
    /// `import { useQuery } from '…'` or `import { useQuery as uq } from '…'`
    Named {
        imported: Ident,
        alias: Option<Ident>,
    },
}

impl Specifier {
    pub fn kind(&self) -> SpecifierKind {
        match self {
            Self::Default { .. } => SpecifierKind::Default,
            Self::Namespace { .. } => SpecifierKind::Namespace,
            Self::Named { .. } => SpecifierKind::Named,
        }
    }

    /// The local binding introduced into the enclosing generated scope.
    ///
    /// For a named specifier without an alias this is the imported
    /// identifier itself: in `{ useQuery }` the local and imported name
    /// are one and the same token.
    pub fn local(&self) -> &Ident {
        match self {
            Self::Default { local } | Self::Namespace { local } => local,
            Self::Named {
                alias: Some(alias), ..
            } => alias,
            Self::Named {
                imported,
                alias: None,
            } => imported,
        }
    }

    /// The imported identifier, present only on named specifiers
    pub fn imported(&self) -> Option<&Ident> {
        match self {
            Self::Named { imported, .. } => Some(imported),
            _ => None,
        }
    }

    /// True for `{ name as alias }` style specifiers
    pub fn is_aliased(&self) -> bool {
        matches!(self, Self::Named { alias: Some(_), .. })
    }
}

/// A validated single-binding import declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportDeclaration {
    /// The statement's only specifier
    pub specifier: Specifier,
    /// Module path with the source quotes stripped
    pub source: String,
    /// TypeScript `import type` statements
    pub is_type_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(text: &str, start: usize) -> Ident {
        Ident::new(text, Span::new(start, start + text.len()))
    }

    #[test]
    fn test_span_slices_statement_text() {
        let statement = "import Button from './button';\n";
        let span = Span::new(7, 13);
        assert_eq!(&statement[span.range()], "Button");
    }

    #[test]
    fn test_local_of_default_and_namespace() {
        let default = Specifier::Default {
            local: ident("Button", 7),
        };
        assert_eq!(default.local().text, "Button");
        assert_eq!(default.kind(), SpecifierKind::Default);
        assert!(default.imported().is_none());

        let namespace = Specifier::Namespace {
            local: ident("utils", 12),
        };
        assert_eq!(namespace.local().text, "utils");
        assert_eq!(namespace.kind(), SpecifierKind::Namespace);
    }

    #[test]
    fn test_local_of_named_without_alias_is_the_imported_token() {
        let named = Specifier::Named {
            imported: ident("useQuery", 9),
            alias: None,
        };
        assert_eq!(named.local().text, "useQuery");
        assert_eq!(named.local().span, Span::new(9, 17));
        assert!(!named.is_aliased());
    }

    #[test]
    fn test_local_of_aliased_named_is_the_alias() {
        let named = Specifier::Named {
            imported: ident("useQuery", 9),
            alias: Some(ident("uq", 21)),
        };
        assert_eq!(named.local().text, "uq");
        assert_eq!(named.imported().map(|i| i.text.as_str()), Some("useQuery"));
        assert!(named.is_aliased());
    }

    #[test]
    fn test_specifier_kind_labels() {
        assert_eq!(SpecifierKind::Default.to_string(), "default");
        assert_eq!(SpecifierKind::Namespace.to_string(), "namespace");
        assert_eq!(SpecifierKind::Named.to_string(), "named");
    }
}
