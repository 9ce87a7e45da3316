// Copyright 2026 Airith contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for airith parsing.
//!
//! Errors carry source locations ([`Span`]) for precise diagnostics.
//! They integrate with [`miette`] for terminal error reporting.
//!
//! A parse error aborts the whole parse: the parser never returns a
//! partial tree, so the only caller action is to report the span.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use super::Span;

/// An error encountered while parsing an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct ParseError {
    /// The kind of parse error.
    #[source]
    pub kind: ParseErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub span: Span,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected_token(text: impl Into<EcoString>, span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedToken(text.into()), span)
    }

    /// Creates an "unknown identifier" error.
    #[must_use]
    pub fn unknown_identifier(name: impl Into<EcoString>, span: Span) -> Self {
        Self::new(ParseErrorKind::UnknownIdentifier(name.into()), span)
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_end_of_input(span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedEndOfInput, span)
    }

    /// Creates a "malformed number" error.
    #[must_use]
    pub fn malformed_number(text: impl Into<EcoString>, span: Span) -> Self {
        Self::new(ParseErrorKind::MalformedNumber(text.into()), span)
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A token appeared where the grammar permits none.
    #[error("unexpected token '{0}'")]
    UnexpectedToken(EcoString),

    /// An identifier that is not a recognized prefix-function name.
    #[error("unknown function '{0}'")]
    UnknownIdentifier(EcoString),

    /// The input ended while an operator was still awaiting an operand.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A numeric literal that cannot be interpreted.
    #[error("malformed number literal '{0}'")]
    MalformedNumber(EcoString),

    /// Parenthesized groups nested past the supported depth.
    #[error("expression nesting is too deep")]
    NestingTooDeep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = ParseError::unexpected_token(")", Span::new(0, 1));
        assert_eq!(err.to_string(), "unexpected token ')'");

        let err = ParseError::unknown_identifier("foo", Span::new(0, 3));
        assert_eq!(err.to_string(), "unknown function 'foo'");

        let err = ParseError::unexpected_end_of_input(Span::new(4, 4));
        assert_eq!(err.to_string(), "unexpected end of input");

        let err = ParseError::malformed_number("1.2.3", Span::new(0, 5));
        assert_eq!(err.to_string(), "malformed number literal '1.2.3'");
    }

    #[test]
    fn parse_error_span() {
        let err = ParseError::unexpected_end_of_input(Span::new(5, 5));
        assert_eq!(err.span.start(), 5);
        assert_eq!(err.span.end(), 5);
    }
}
