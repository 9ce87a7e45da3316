// Copyright 2026 Airith contributors
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for airith expressions.
//!
//! The lexer is hand-written and deliberately small: the interesting part
//! is not token recognition but whitespace measurement. Each whitespace
//! run between two tokens is counted character by character and recorded
//! on both neighbours (as `trailing_spaces` of the left token and
//! `leading_spaces` of the right one), because the parser later reads the
//! run width from whichever side it needs.
//!
//! The lexer never fails: characters it does not recognize become
//! [`TokenKind::Error`] tokens and are rejected by the parser with a
//! proper span.

use std::iter::Peekable;
use std::str::CharIndices;

use ecow::EcoString;

use crate::ast::BinaryOperator;

use super::{Span, Token, TokenKind};

/// Whether newline characters count toward the whitespace gap.
///
/// The gap between a token and an operator decides how tightly the
/// operator binds, and the reference examples only ever use spaces and
/// tabs. How a newline should weigh is a policy question, so it is
/// configurable here rather than hard-wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewlinePolicy {
    /// `\n` and `\r` count like any other whitespace character.
    #[default]
    Counted,
    /// `\n` and `\r` separate tokens but add nothing to the gap width.
    Ignored,
}

/// A lexer that tokenizes airith source text.
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
    /// How newline characters are measured.
    newline_policy: NewlinePolicy,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_newline_policy(source, NewlinePolicy::default())
    }

    /// Creates a new lexer with an explicit newline policy.
    #[must_use]
    pub fn with_newline_policy(source: &'src str, newline_policy: NewlinePolicy) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
            newline_policy,
        }
    }

    /// Lexes the whole input, including the end-of-input token.
    ///
    /// The returned sequence always ends with [`TokenKind::Eof`], and
    /// every token has both its leading and trailing whitespace width
    /// filled in.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.lex_token();
            let is_eof = token.kind().is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        // Each token's trailing run is the next token's leading run.
        for i in 0..tokens.len() - 1 {
            let next_leading = tokens[i + 1].leading_spaces();
            tokens[i].set_trailing_spaces(next_leading);
        }

        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns the current byte position.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "inputs over 4GB are not supported"
    )]
    fn current_position(&self) -> u32 {
        self.position as u32
    }

    /// Creates a span from start to current position.
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.current_position())
    }

    /// Extracts source text for a span.
    fn text_for(&self, span: Span) -> &'src str {
        &self.source[span.as_range()]
    }

    /// Skips a whitespace run and returns its measured width.
    fn skip_whitespace(&mut self) -> u32 {
        let mut width = 0u32;
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
            let counts = match self.newline_policy {
                NewlinePolicy::Counted => true,
                NewlinePolicy::Ignored => !matches!(c, '\n' | '\r'),
            };
            if counts {
                width += 1;
            }
        }
        width
    }

    /// Lexes the next token.
    fn lex_token(&mut self) -> Token {
        let leading_spaces = self.skip_whitespace();
        let start = self.current_position();

        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some(c) => self.lex_token_kind(c, start),
        };

        Token::new(kind, self.span_from(start), leading_spaces)
    }

    /// Lexes a token kind based on the first character.
    fn lex_token_kind(&mut self, c: char, start: u32) -> TokenKind {
        match c {
            'a'..='z' | 'A'..='Z' | '_' => self.lex_identifier(),

            // Digits and dots are consumed as one run; the parser reports
            // MalformedNumber if the text is not a valid literal.
            '0'..='9' | '.' => self.lex_number(),

            '(' => {
                self.advance();
                TokenKind::LeftParen
            }
            ')' => {
                self.advance();
                TokenKind::RightParen
            }

            '+' | '-' | '*' | '/' => {
                self.advance();
                let operator = BinaryOperator::from_symbol(c)
                    .expect("arm only matches the four operator symbols");
                TokenKind::Operator(operator)
            }

            _ => {
                self.advance();
                let text = self.text_for(self.span_from(start));
                TokenKind::Error(EcoString::from(text))
            }
        }
    }

    /// Lexes an identifier.
    fn lex_identifier(&mut self) -> TokenKind {
        let start = self.current_position();
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let text = self.text_for(self.span_from(start));
        TokenKind::Identifier(EcoString::from(text))
    }

    /// Lexes a numeric literal.
    fn lex_number(&mut self) -> TokenKind {
        let start = self.current_position();
        self.advance_while(|c| c.is_ascii_digit() || c == '.');
        let text = self.text_for(self.span_from(start));
        TokenKind::Number(EcoString::from(text))
    }
}

/// Convenience function to lex source into a vector of tokens including EOF.
#[must_use]
pub fn lex_with_eof(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Convenience function to lex source into a vector of tokens (excluding EOF).
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = lex_with_eof(source);
    tokens.pop();
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to lex and extract just the token kinds.
    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(Token::into_kind).collect()
    }

    #[test]
    fn lex_empty() {
        assert!(lex("").is_empty());
        assert!(lex("   ").is_empty());

        let tokens = lex_with_eof("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].kind().is_eof());
    }

    #[test]
    fn lex_numbers() {
        assert_eq!(
            lex_kinds("42 3.14 0.5"),
            vec![
                TokenKind::Number("42".into()),
                TokenKind::Number("3.14".into()),
                TokenKind::Number("0.5".into()),
            ]
        );
    }

    #[test]
    fn lex_malformed_number_is_single_token() {
        // The parser turns this into MalformedNumber with the full span.
        assert_eq!(lex_kinds("1.2.3"), vec![TokenKind::Number("1.2.3".into())]);
    }

    #[test]
    fn lex_identifiers() {
        assert_eq!(
            lex_kinds("sqrt _x abc1"),
            vec![
                TokenKind::Identifier("sqrt".into()),
                TokenKind::Identifier("_x".into()),
                TokenKind::Identifier("abc1".into()),
            ]
        );
    }

    #[test]
    fn lex_operators_and_parens() {
        assert_eq!(
            lex_kinds("+ - * / ( )"),
            vec![
                TokenKind::Operator(BinaryOperator::Add),
                TokenKind::Operator(BinaryOperator::Sub),
                TokenKind::Operator(BinaryOperator::Mul),
                TokenKind::Operator(BinaryOperator::Div),
                TokenKind::LeftParen,
                TokenKind::RightParen,
            ]
        );
    }

    #[test]
    fn lex_unknown_char_becomes_error_token() {
        let kinds = lex_kinds("1 % 2");
        assert_eq!(kinds.len(), 3);
        assert!(kinds[1].is_error());
    }

    #[test]
    fn lex_counts_leading_and_trailing_spaces() {
        let tokens = lex_with_eof("1-  2   *   3/4");
        let kinds: Vec<String> = tokens.iter().map(|t| t.kind().to_string()).collect();
        assert_eq!(kinds, vec!["1", "-", "2", "*", "3", "/", "4", "<eof>"]);

        let minus = &tokens[1];
        assert_eq!(minus.leading_spaces(), 0);
        assert_eq!(minus.trailing_spaces(), 2);

        let star = &tokens[3];
        assert_eq!(star.leading_spaces(), 3);
        assert_eq!(star.trailing_spaces(), 3);

        let slash = &tokens[5];
        assert_eq!(slash.leading_spaces(), 0);
        assert_eq!(slash.trailing_spaces(), 0);
    }

    #[test]
    fn lex_tabs_count_per_character() {
        let tokens = lex_with_eof("1\t\t+ 2");
        let plus = &tokens[1];
        assert_eq!(plus.leading_spaces(), 2);
        assert_eq!(plus.trailing_spaces(), 1);
    }

    #[test]
    fn lex_trailing_whitespace_lands_on_eof_stitch() {
        // "1 + " — the last real token's trailing run is the input's tail.
        let tokens = lex_with_eof("1 +  ");
        let plus = &tokens[1];
        assert_eq!(plus.trailing_spaces(), 2);
    }

    #[test]
    fn lex_newline_policy_counted() {
        let tokens = lex_with_eof("1 +\n\n2");
        let plus = &tokens[1];
        assert_eq!(plus.trailing_spaces(), 2);
    }

    #[test]
    fn lex_newline_policy_ignored() {
        let tokens = Lexer::with_newline_policy("1 +\n\n 2", NewlinePolicy::Ignored).tokenize();
        let plus = &tokens[1];
        // Two newlines ignored; the single space still counts.
        assert_eq!(plus.trailing_spaces(), 1);
    }

    #[test]
    fn lex_spans_are_correct() {
        let tokens = lex("12 + 3");
        assert_eq!(tokens[0].span(), Span::new(0, 2));
        assert_eq!(tokens[1].span(), Span::new(3, 4));
        assert_eq!(tokens[2].span(), Span::new(5, 6));
    }

    #[test]
    fn lex_eof_span_at_end() {
        let tokens = lex_with_eof("1 + ");
        let eof = tokens.last().unwrap();
        assert!(eof.kind().is_eof());
        assert_eq!(eof.span(), Span::new(4, 4));
    }
}
