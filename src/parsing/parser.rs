//! Import statement parser
//!
//! Runs the tree-sitter TSX grammar over one normalized statement and
//! distills the resulting tree into an [`ImportDeclaration`]. The grammar is
//! treated as a black box: everything downstream works from the extracted
//! facts, never from syntax tree nodes.

use crate::error::{ImportError, ImportResult};
use crate::parsing::declaration::{Ident, ImportDeclaration, Span, Specifier};
use tracing::trace;
use tree_sitter::{Language, Node, Parser};

/// Parses normalized statements into validated declarations.
///
/// Construction loads the grammar, which can fail on an ABI mismatch, so
/// callers get a `Result`. The parser itself is cheap enough to build per
/// statement and holding one avoids any shared mutable state.
pub struct ImportParser {
    parser: Parser,
}

impl ImportParser {
    pub fn new() -> ImportResult<Self> {
        let mut parser = Parser::new();
        // The TSX grammar accepts plain TypeScript and JavaScript statements
        // as well, so one grammar covers every input we take.
        let language: Language = tree_sitter_typescript::LANGUAGE_TSX.into();
        parser
            .set_language(&language)
            .map_err(|e| ImportError::Grammar {
                reason: format!("failed to load TypeScript grammar: {e}"),
            })?;
        Ok(Self { parser })
    }

    /// Parse one normalized statement down to a single-binding declaration.
    ///
    /// `original` is the caller's pre-normalization input, carried into
    /// every error so reports show what the caller actually wrote.
    pub fn parse_declaration(
        &mut self,
        statement: &str,
        original: &str,
    ) -> ImportResult<ImportDeclaration> {
        let tree = self
            .parser
            .parse(statement, None)
            .ok_or_else(|| ImportError::Grammar {
                reason: "tree-sitter returned no parse tree".to_string(),
            })?;
        let root = tree.root_node();

        // The grammar never aborts on bad input. It marks ERROR and missing
        // nodes instead, so syntax problems surface here.
        if root.has_error() {
            let offset = first_error_offset(root);
            trace!("syntax error at byte {offset} in {statement:?}");
            return Err(ImportError::syntax(original, statement, offset));
        }

        let Some(node) = first_statement(root) else {
            return Err(ImportError::NotAnImport {
                original: original.to_string(),
                found: "an empty program".to_string(),
            });
        };
        if node.kind() != "import_statement" {
            return Err(ImportError::NotAnImport {
                original: original.to_string(),
                found: node.kind().to_string(),
            });
        }

        // Exactly one binding. Side-effect imports and `import x = require()`
        // bind nothing and fail here too, with an empty binding list.
        let specifiers = collect_specifiers(node, statement);
        let specifier = match <[Specifier; 1]>::try_from(specifiers) {
            Ok([specifier]) => specifier,
            Err(specifiers) => {
                return Err(ImportError::BindingCount {
                    original: original.to_string(),
                    bindings: specifiers
                        .iter()
                        .map(|s| s.local().text.clone())
                        .collect(),
                });
            }
        };

        let source = match node.child_by_field_name("source") {
            Some(source_node) => statement[source_node.byte_range()]
                .trim_matches(|c| matches!(c, '"' | '\'' | '`'))
                .to_string(),
            None => return Err(ImportError::syntax(original, statement, node.end_byte())),
        };

        Ok(ImportDeclaration {
            specifier,
            source,
            is_type_only: is_type_only(node),
        })
    }
}

/// First top-level statement of the parsed program, skipping comments
fn first_statement(root: Node) -> Option<Node> {
    let mut cursor = root.walk();
    root.named_children(&mut cursor)
        .find(|n| n.kind() != "comment")
}

/// Byte offset of the first ERROR or missing node under `node`
fn first_error_offset(node: Node) -> usize {
    if node.is_error() || node.is_missing() {
        return node.start_byte();
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() || child.is_missing() {
            return first_error_offset(child);
        }
    }
    node.start_byte()
}

/// Type-only imports carry a `type` keyword right after `import`
fn is_type_only(node: Node) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .nth(1)
        .is_some_and(|child| child.kind() == "type")
}

/// Collect every specifier the import clause declares, in statement order.
///
/// `import_clause` is not a named field in the grammar, so it is located by
/// kind among the direct children.
fn collect_specifiers(node: Node, statement: &str) -> Vec<Specifier> {
    let mut specifiers = Vec::new();

    let import_clause = {
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .find(|c| c.kind() == "import_clause")
    };
    let Some(import_clause) = import_clause else {
        return specifiers;
    };

    let mut cursor = import_clause.walk();
    for child in import_clause.children(&mut cursor) {
        match child.kind() {
            "identifier" => {
                // Default import: import React from 'react'
                specifiers.push(Specifier::Default {
                    local: ident_at(child, statement),
                });
            }
            "namespace_import" => {
                // * as name, the bound identifier is the last one
                let mut ns_cursor = child.walk();
                if let Some(name) = child
                    .children(&mut ns_cursor)
                    .filter(|n| n.kind() == "identifier")
                    .last()
                {
                    specifiers.push(Specifier::Namespace {
                        local: ident_at(name, statement),
                    });
                }
            }
            "named_imports" => {
                // { Foo as Bar, Baz }
                let mut named_cursor = child.walk();
                for entry in child.children(&mut named_cursor) {
                    if entry.kind() != "import_specifier" {
                        continue;
                    }
                    let Some(name) = entry.child_by_field_name("name") else {
                        continue;
                    };
                    let alias = entry
                        .child_by_field_name("alias")
                        .map(|alias| ident_at(alias, statement));
                    specifiers.push(Specifier::Named {
                        imported: ident_at(name, statement),
                        alias,
                    });
                }
            }
            _ => {}
        }
    }

    specifiers
}

fn ident_at(node: Node, statement: &str) -> Ident {
    Ident::new(
        &statement[node.byte_range()],
        Span::new(node.start_byte(), node.end_byte()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::declaration::SpecifierKind;

    fn parse(statement: &str) -> ImportResult<ImportDeclaration> {
        ImportParser::new()?.parse_declaration(statement, statement)
    }

    #[test]
    fn test_named_specifier_span_slices_back_to_its_text() {
        let statement = "import { useQuery } from '@apollo/react-hooks';\n";
        let declaration = parse(statement).unwrap();

        let local = declaration.specifier.local();
        assert_eq!(local.text, "useQuery");
        assert_eq!(&statement[local.span.range()], "useQuery");
        assert_eq!(declaration.source, "@apollo/react-hooks");
        assert_eq!(declaration.specifier.kind(), SpecifierKind::Named);
    }

    #[test]
    fn test_aliased_specifier_keeps_both_idents() {
        let statement = "import { useQuery as uq } from 'pkg';\n";
        let declaration = parse(statement).unwrap();

        assert!(declaration.specifier.is_aliased());
        assert_eq!(
            declaration.specifier.imported().map(|i| i.text.as_str()),
            Some("useQuery")
        );
        assert_eq!(declaration.specifier.local().text, "uq");
    }

    #[test]
    fn test_namespace_import_binds_the_alias_identifier() {
        let statement = "import * as utils from './utils';\n";
        let declaration = parse(statement).unwrap();

        assert_eq!(declaration.specifier.kind(), SpecifierKind::Namespace);
        assert_eq!(declaration.specifier.local().text, "utils");
        assert_eq!(&statement[declaration.specifier.local().span.range()], "utils");
    }

    #[test]
    fn test_mixed_import_reports_bindings_in_statement_order() {
        let err = parse("import D, { A } from 'm';\n").unwrap_err();
        match err {
            ImportError::BindingCount { bindings, .. } => {
                assert_eq!(bindings, vec!["D".to_string(), "A".to_string()]);
            }
            other => panic!("expected BindingCount, got {other:?}"),
        }
    }

    #[test]
    fn test_type_only_import_is_flagged() {
        let declaration = parse("import type Props from './props';\n").unwrap();
        assert!(declaration.is_type_only);

        let declaration = parse("import Props from './props';\n").unwrap();
        assert!(!declaration.is_type_only);
    }

    #[test]
    fn test_double_quoted_source_is_unquoted() {
        let declaration = parse("import fs from \"node:fs\";\n").unwrap();
        assert_eq!(declaration.source, "node:fs");
    }
}
