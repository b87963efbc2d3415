//! Normalization and parsing of import statement text
//!
//! The pipeline is deliberately one-way: [`normalize_statement`] canonicalizes
//! raw input, [`ImportParser`] turns the canonical text into an
//! [`ImportDeclaration`], and the declaration's byte spans point back into the
//! normalized text for splicing.

pub mod declaration;
pub mod normalize;
pub mod parser;

pub use declaration::{Ident, ImportDeclaration, Span, Specifier, SpecifierKind};
pub use normalize::normalize_statement;
pub use parser::ImportParser;
