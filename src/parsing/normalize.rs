//! Statement normalization
//!
//! Callers are allowed to hand over abbreviated fragments such as
//! `Button from './button'` or `{ useQuery } from '@apollo/react-hooks'`.
//! Normalization rewrites any accepted input into the one canonical shape
//! the parser sees: `import <clause> from '<source>';` plus a trailing
//! newline. Running it twice yields the same text, so already-normalized
//! statements pass through untouched.

/// Rewrite `input` into canonical full-statement form.
///
/// Steps, in order: trim surrounding whitespace, append `;` when missing,
/// prepend `import ` when the text does not already begin with the
/// `import` keyword, then terminate with exactly one newline.
pub fn normalize_statement(input: &str) -> String {
    let mut statement = input.trim().to_string();
    if !statement.ends_with(';') {
        statement.push(';');
    }
    if !begins_with_import_keyword(&statement) {
        statement.insert_str(0, "import ");
    }
    statement.push('\n');
    statement
}

/// Keyword check, not a prefix check: `imported from 'x'` starts with the
/// letters `import` but binds the identifier `imported`, so it still needs
/// the prefix.
fn begins_with_import_keyword(statement: &str) -> bool {
    match statement.strip_prefix("import") {
        Some(rest) => !rest.chars().next().is_some_and(is_identifier_continue),
        None => false,
    }
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
