// Copyright 2026 Airith contributors
// SPDX-License-Identifier: Apache-2.0

//! Token types for airith lexical analysis.
//!
//! Tokens carry more than their text: because whitespace is a grouping
//! signal in airith, every token records the number of whitespace
//! characters immediately before and after it. The parser derives each
//! operator's *gap* from these counts (see
//! [`Precedence`](super::precedence::Precedence)).

use ecow::EcoString;

use crate::ast::BinaryOperator;

use super::Span;

/// The kind of token, not including source location or spacing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A numeric literal: `42`, `3.14`.
    ///
    /// The text is kept verbatim; conversion to `f64` happens in the
    /// parser so that a malformed literal (e.g. `1.2.3`) surfaces as a
    /// typed error with its span.
    Number(EcoString),

    /// An identifier: `sqrt`. Only known prefix-function names are
    /// accepted by the parser.
    Identifier(EcoString),

    /// One of the four binary operator symbols `+ - * /`.
    ///
    /// `-` doubles as prefix negation when it appears in operand position.
    Operator(BinaryOperator),

    /// Left parenthesis: `(`
    LeftParen,

    /// Right parenthesis: `)`
    RightParen,

    /// End of input.
    Eof,

    /// A character the lexer does not recognize.
    Error(EcoString),
}

impl TokenKind {
    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns `true` if this is an error token.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns `true` if this token can begin an operand.
    #[must_use]
    pub const fn starts_operand(&self) -> bool {
        matches!(
            self,
            Self::Number(_) | Self::Identifier(_) | Self::LeftParen
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(s) | Self::Identifier(s) | Self::Error(s) => write!(f, "{s}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Eof => write!(f, "<eof>"),
        }
    }
}

/// A token with its source location and surrounding whitespace widths.
///
/// `leading_spaces` counts the whitespace characters between the previous
/// token and this one; `trailing_spaces` counts those between this token
/// and the next. The two adjacent tokens therefore agree on the width of
/// the run separating them.
///
/// # Examples
///
/// ```
/// use airith_core::source_analysis::{lex_with_eof, TokenKind};
///
/// let tokens = lex_with_eof("1 +  2");
/// assert!(matches!(tokens[1].kind(), TokenKind::Operator(_)));
/// assert_eq!(tokens[1].leading_spaces(), 1);
/// assert_eq!(tokens[1].trailing_spaces(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
    leading_spaces: u32,
    trailing_spaces: u32,
}

impl Token {
    /// Creates a new token with the given leading whitespace width.
    ///
    /// The trailing width is filled in once the next token has been
    /// lexed; see [`Token::set_trailing_spaces`].
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span, leading_spaces: u32) -> Self {
        Self {
            kind,
            span,
            leading_spaces,
            trailing_spaces: 0,
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Consumes the token and returns its kind.
    #[must_use]
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// Returns the source span of this token.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the whitespace width immediately before this token.
    #[must_use]
    pub const fn leading_spaces(&self) -> u32 {
        self.leading_spaces
    }

    /// Returns the whitespace width immediately after this token.
    #[must_use]
    pub const fn trailing_spaces(&self) -> u32 {
        self.trailing_spaces
    }

    /// Sets the trailing whitespace width.
    pub fn set_trailing_spaces(&mut self, spaces: u32) {
        self.trailing_spaces = spaces;
    }
}
