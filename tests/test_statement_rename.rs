//! Verification of binding renames across every clause form
//!
//! Renames come from conflict resolution in generated scopes: the statement
//! must end up binding the new name while still importing the same thing
//! from the same module.

use esimport::{ImportError, ImportStatement, SpecifierKind};

#[test]
fn test_rename_default_import() {
    let import =
        ImportStatement::new("import Button from './button';").expect("import should validate");
    let renamed = import.change_binding("Button2").expect("rename should validate");

    assert_eq!(renamed.binding(), "Button2");
    assert_eq!(renamed.imported(), "default");
    assert_eq!(renamed.source(), "./button");
    assert_eq!(renamed.statement(), "import Button2 from './button';\n");
}

#[test]
fn test_rename_named_import_gains_an_alias() {
    let import = ImportStatement::new("import { useQuery } from '@apollo/react-hooks';")
        .expect("import should validate");
    let renamed = import
        .change_binding("useQuery2")
        .expect("rename should validate");

    assert_eq!(renamed.binding(), "useQuery2");
    assert_eq!(renamed.imported(), "useQuery");
    assert_eq!(
        renamed.statement(),
        "import { useQuery as useQuery2 } from '@apollo/react-hooks';\n"
    );
}

#[test]
fn test_rename_aliased_import_replaces_the_alias() {
    let import = ImportStatement::new("import { useQuery as uq } from 'pkg';")
        .expect("import should validate");
    let renamed = import.change_binding("query").expect("rename should validate");

    assert_eq!(renamed.binding(), "query");
    assert_eq!(renamed.imported(), "useQuery");
    assert_eq!(renamed.statement(), "import { useQuery as query } from 'pkg';\n");
}

#[test]
fn test_rename_namespace_import() {
    let import =
        ImportStatement::new("import * as utils from './utils';").expect("import should validate");
    let renamed = import.change_binding("helpers").expect("rename should validate");

    assert_eq!(renamed.binding(), "helpers");
    assert_eq!(renamed.imported(), "*");
    assert_eq!(renamed.kind(), SpecifierKind::Namespace);
    assert_eq!(renamed.statement(), "import * as helpers from './utils';\n");
}

#[test]
fn test_rename_leaves_the_source_instance_untouched() {
    let import =
        ImportStatement::new("import Button from './button';").expect("import should validate");
    let before = import.clone();

    let _renamed = import.change_binding("Button2").expect("rename should validate");

    assert_eq!(import, before);
    assert_eq!(import.binding(), "Button");
    assert_eq!(import.statement(), "import Button from './button';\n");
}

#[test]
fn test_chained_renames() {
    let import =
        ImportStatement::new("{ connect } from 'react-redux'").expect("fragment should validate");
    let renamed = import
        .change_binding("connect2")
        .expect("first rename should validate")
        .change_binding("connect3")
        .expect("second rename should validate");

    assert_eq!(renamed.binding(), "connect3");
    assert_eq!(renamed.imported(), "connect");
    assert_eq!(
        renamed.statement(),
        "import { connect as connect3 } from 'react-redux';\n"
    );
}

#[test]
fn test_rename_preserves_type_only() {
    let import = ImportStatement::new("import type Props from './props';")
        .expect("type-only import should validate");
    let renamed = import.change_binding("OwnProps").expect("rename should validate");

    assert!(renamed.is_type_only());
    assert_eq!(renamed.statement(), "import type OwnProps from './props';\n");
}

#[test]
fn test_rename_to_invalid_identifier_is_rejected() {
    let import =
        ImportStatement::new("import Button from './button';").expect("import should validate");

    for bad in ["1Button", "my binding", "new-name", ""] {
        let result = import.change_binding(bad);
        assert!(
            matches!(result, Err(ImportError::Syntax { .. })),
            "{bad:?} should be rejected as a binding"
        );
    }
}
