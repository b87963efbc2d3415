//! Parse, validate, and rename single-binding ECMAScript import statements.
//!
//! Code generators that emit JavaScript or TypeScript need to manage the
//! import statements their output depends on: accept them from callers in
//! loose form, reject anything that is not a real static import, read back
//! which name the statement binds and where it comes from, and rename that
//! binding when two generated imports collide. This crate does exactly that
//! and nothing else.
//!
//! ```
//! use esimport::ImportStatement;
//!
//! let import = ImportStatement::new("Button from './components/button'")?;
//! assert_eq!(import.binding(), "Button");
//! assert_eq!(import.statement(), "import Button from './components/button';\n");
//!
//! let renamed = import.change_binding("Button2")?;
//! assert_eq!(renamed.binding(), "Button2");
//! # Ok::<(), esimport::ImportError>(())
//! ```
//!
//! Statements are parsed with the tree-sitter TSX grammar, so TypeScript
//! forms such as `import type` work out of the box.

pub mod error;
pub mod parsing;
pub mod statement;

pub use error::{ImportError, ImportResult};
pub use parsing::{Ident, ImportDeclaration, ImportParser, Span, Specifier, SpecifierKind};
pub use statement::ImportStatement;
