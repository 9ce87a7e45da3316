// Copyright 2026 Airith contributors
// SPDX-License-Identifier: Apache-2.0

//! Beautiful error diagnostics using miette.
//!
//! Converts airith-core parse errors into miette-formatted errors with
//! source code context, an arrow pointing at the offending span, and a
//! diagnostic code for reference.

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use airith_core::source_analysis::ParseError;
use miette::{Diagnostic, SourceSpan};

/// A parse diagnostic with rich formatting.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(airith::parse))]
pub struct ExpressionDiagnostic {
    /// Human-readable error message
    pub message: String,
    /// Source code for context
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the error
    #[label("error here")]
    pub span: SourceSpan,
}

impl ExpressionDiagnostic {
    /// Create a new diagnostic from an airith-core parse error.
    pub fn from_parse_error(error: &ParseError, source_name: &str, source: &str) -> Self {
        Self {
            message: error.to_string(),
            src: miette::NamedSource::new(source_name, source.to_string()),
            span: (error.span.start() as usize, error.span.len() as usize).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airith_core::source_analysis::parse;

    #[test]
    fn diagnostic_carries_message_and_span() {
        let source = "1 + ";
        let error = parse(source).unwrap_err();
        let diag = ExpressionDiagnostic::from_parse_error(&error, "<input>", source);

        assert_eq!(diag.message, "unexpected end of input");
        assert_eq!(diag.span.offset(), 4);
        assert_eq!(diag.span.len(), 0);
    }

    #[test]
    fn diagnostic_spans_the_offending_token() {
        let source = "foo 2";
        let error = parse(source).unwrap_err();
        let diag = ExpressionDiagnostic::from_parse_error(&error, "<input>", source);

        assert_eq!(diag.message, "unknown function 'foo'");
        assert_eq!(diag.span.offset(), 0);
        assert_eq!(diag.span.len(), 3);
    }
}
