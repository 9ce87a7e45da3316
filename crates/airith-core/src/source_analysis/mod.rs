// Copyright 2026 Airith contributors
// SPDX-License-Identifier: Apache-2.0

//! Source analysis: lexing, whitespace measurement, and parsing.
//!
//! The pipeline has two stages. The [`lexer`] splits source text into
//! tokens and records the width of every whitespace run on the tokens
//! around it. The [`parser`] then builds the expression tree, using
//! those widths to compute a [`Precedence`] key per operator occurrence:
//! operators written with less surrounding whitespace bind tighter, and
//! conventional algebraic ranks only break ties.
//!
//! Most callers only need [`parse`] (or [`parse_with_options`]) from
//! this module and [`unparse`](crate::unparse) to render the result.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod precedence;
pub mod span;
pub mod token;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::{lex, lex_with_eof, Lexer, NewlinePolicy};
pub use parser::{parse, parse_with_options, ParseOptions};
pub use precedence::{Precedence, Rank};
pub use span::Span;
pub use token::{Token, TokenKind};

#[cfg(test)]
mod property_tests;
