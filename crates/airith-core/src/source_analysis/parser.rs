// Copyright 2026 Airith contributors
// SPDX-License-Identifier: Apache-2.0

//! Precedence-resolving parser for airith expressions.
//!
//! This is an operator-precedence parser with one twist: the precedence
//! compared at each decision point is not a static per-operator constant
//! but a [`Precedence`] key computed from the whitespace measured around
//! that specific occurrence (see the [`precedence`](super::precedence)
//! module for the key and its ordering).
//!
//! The parser scans the token stream once, left to right, keeping a stack
//! of pending operators — binary operators that have their left operand
//! but not yet their right, and prefix applications that still await
//! their operand. An incoming operator reduces every stack entry that
//! binds at least as tightly as itself (the "at least" giving left
//! associativity), then pushes. At end of input the stack is drained
//! against the loosest possible key. Each token is pushed and popped at
//! most once, so a parse is O(n).
//!
//! Prefix function application is not special-cased: it participates in
//! the same stack as a unary pending entry whose key uses the
//! application rank and the name's trailing whitespace.
//!
//! # Usage
//!
//! ```
//! use airith_core::source_analysis::parse;
//! use airith_core::unparse::unparse;
//!
//! let expr = parse("1-  2   *   3/4").expect("valid expression");
//! assert_eq!(unparse(&expr), "(1 - 2) * (3 / 4)");
//! ```

use ecow::EcoString;

use crate::ast::{BinaryOperator, Expression};

use super::error::{ParseError, ParseErrorKind};
use super::lexer::{Lexer, NewlinePolicy};
use super::precedence::Precedence;
use super::{Span, Token, TokenKind};

/// Maximum depth of parenthesized groups before the parser bails out.
///
/// Grouping is the only source of recursion, so this bounds stack use on
/// adversarial input like `((((((...))))))`.
const MAX_NESTING_DEPTH: usize = 64;

/// Configuration-time policy for a parse.
///
/// The defaults match the reference behaviour: `sqrt` is the only known
/// prefix function and newlines count toward the whitespace gap.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// The recognized prefix-function names.
    pub functions: Vec<EcoString>,
    /// How newline characters weigh in the gap measurement.
    pub newline_policy: NewlinePolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            functions: vec![EcoString::from("sqrt")],
            newline_policy: NewlinePolicy::default(),
        }
    }
}

impl ParseOptions {
    /// Registers an additional prefix-function name.
    #[must_use]
    pub fn with_function(mut self, name: impl Into<EcoString>) -> Self {
        self.functions.push(name.into());
        self
    }

    /// Sets the newline policy.
    #[must_use]
    pub const fn with_newline_policy(mut self, policy: NewlinePolicy) -> Self {
        self.newline_policy = policy;
        self
    }
}

/// Parses an expression with the default [`ParseOptions`].
///
/// Returns the single root of the tree, or the first error encountered —
/// never a partial tree.
///
/// # Errors
///
/// Returns a [`ParseError`] locating the offending token when the input
/// is not a well-formed expression.
pub fn parse(source: &str) -> Result<Expression, ParseError> {
    parse_with_options(source, &ParseOptions::default())
}

/// Parses an expression with explicit options.
///
/// # Errors
///
/// Returns a [`ParseError`] locating the offending token when the input
/// is not a well-formed expression.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<Expression, ParseError> {
    let tokens = Lexer::with_newline_policy(source, options.newline_policy).tokenize();
    let mut parser = Parser::new(tokens, options);
    let expression = parser.parse_expression()?;

    // A leftover token here can only be an unbalanced `)`.
    if !parser.is_at_end() {
        let token = parser.current_token();
        return Err(ParseError::unexpected_token(
            token.kind().to_string(),
            token.span(),
        ));
    }
    Ok(expression)
}

/// A pending operator on the reduction stack: it has claimed everything
/// to its left and is waiting for its right-hand operand.
#[derive(Debug)]
enum Pending {
    /// A binary operator with its left operand already attached.
    Binary {
        operator: BinaryOperator,
        left: Expression,
        precedence: Precedence,
    },
    /// A prefix application (function name or negation sign).
    Prefix {
        function: EcoString,
        precedence: Precedence,
        span: Span,
    },
}

impl Pending {
    const fn precedence(&self) -> Precedence {
        match self {
            Self::Binary { precedence, .. } | Self::Prefix { precedence, .. } => *precedence,
        }
    }

    /// Builds the AST node for this operator once its right-hand operand
    /// is known.
    fn reduce(self, right: Expression) -> Expression {
        match self {
            Self::Binary { operator, left, .. } => {
                let span = left.span().merge(right.span());
                Expression::Binary {
                    operator,
                    left: Box::new(left),
                    right: Box::new(right),
                    span,
                }
            }
            Self::Prefix { function, span, .. } => {
                let span = span.merge(right.span());
                Expression::Apply {
                    function,
                    operand: Box::new(right),
                    span,
                }
            }
        }
    }
}

/// The parser state.
struct Parser<'opts> {
    /// The tokens being parsed; always ends with an EOF token.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// The options for this parse.
    options: &'opts ParseOptions,
    /// Current grouping depth (guards against stack overflow).
    nesting_depth: usize,
}

impl<'opts> Parser<'opts> {
    fn new(tokens: Vec<Token>, options: &'opts ParseOptions) -> Self {
        Self {
            tokens,
            current: 0,
            options,
            nesting_depth: 0,
        }
    }

    /// Returns the current token.
    fn current_token(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("token stream always contains at least an EOF token")
        })
    }

    /// Checks if we're at the end of input.
    fn is_at_end(&self) -> bool {
        self.current_token().kind().is_eof()
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    fn is_known_function(&self, name: &str) -> bool {
        self.options.functions.iter().any(|f| f == name)
    }

    /// Parses one expression, stopping (without consuming) at `)` or EOF.
    ///
    /// This is the reduction loop from the module docs. `operand` holds
    /// the most recently completed subtree; `stack` holds the operators
    /// still waiting for their right-hand side, loosest at the bottom.
    fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let mut stack: Vec<Pending> = Vec::new();
        let mut operand: Option<Expression> = None;

        loop {
            let token = self.current_token();
            let kind = token.kind().clone();
            let span = token.span();
            let trailing = token.trailing_spaces();
            let leading = token.leading_spaces();

            match kind {
                TokenKind::Number(text) => {
                    if operand.is_some() {
                        return Err(ParseError::unexpected_token(text, span));
                    }
                    let value: f64 = text
                        .parse()
                        .map_err(|_| ParseError::malformed_number(text.clone(), span))?;
                    operand = Some(Expression::Number(value, span));
                    self.advance();
                }

                TokenKind::Identifier(name) => {
                    if operand.is_some() {
                        return Err(ParseError::unexpected_token(name, span));
                    }
                    if !self.is_known_function(&name) {
                        return Err(ParseError::unknown_identifier(name, span));
                    }
                    stack.push(Pending::Prefix {
                        function: name,
                        precedence: Precedence::prefix(trailing),
                        span,
                    });
                    self.advance();
                }

                TokenKind::Operator(operator) => {
                    let Some(left) = operand.take() else {
                        // `-` with no operand to its left is prefix negation.
                        if operator == BinaryOperator::Sub {
                            stack.push(Pending::Prefix {
                                function: EcoString::from("-"),
                                precedence: Precedence::prefix(trailing),
                                span,
                            });
                            self.advance();
                            continue;
                        }
                        return Err(ParseError::unexpected_token(operator.to_string(), span));
                    };

                    let incoming = Precedence::binary(operator, leading, trailing);
                    let reduced = Self::reduce_tighter(&mut stack, left, incoming);
                    stack.push(Pending::Binary {
                        operator,
                        left: reduced,
                        precedence: incoming,
                    });
                    self.advance();
                }

                TokenKind::LeftParen => {
                    if operand.is_some() {
                        return Err(ParseError::unexpected_token("(", span));
                    }
                    operand = Some(self.parse_grouped(span)?);
                }

                TokenKind::RightParen | TokenKind::Eof => {
                    let Some(expr) = operand.take() else {
                        return Err(match kind {
                            TokenKind::Eof => ParseError::unexpected_end_of_input(span),
                            _ => ParseError::unexpected_token(")", span),
                        });
                    };
                    // The sentinel key binds loosest of all, so this
                    // drains the whole stack, innermost first.
                    return Ok(Self::reduce_tighter(&mut stack, expr, Precedence::loosest()));
                }

                TokenKind::Error(text) => {
                    return Err(ParseError::unexpected_token(text, span));
                }
            }
        }
    }

    /// Reduces every stack entry that binds at least as tightly as
    /// `incoming` into `operand`, returning the accumulated subtree.
    ///
    /// "At least as tightly" (`>=`) is what makes equal keys resolve to
    /// the leftmost occurrence: the operator already on the stack wins
    /// the tie and becomes the deeper node.
    fn reduce_tighter(
        stack: &mut Vec<Pending>,
        mut operand: Expression,
        incoming: Precedence,
    ) -> Expression {
        while stack
            .last()
            .is_some_and(|top| top.precedence() >= incoming)
        {
            let top = stack.pop().expect("stack checked non-empty above");
            operand = top.reduce(operand);
        }
        operand
    }

    /// Parses a parenthesized group: `( expression )`.
    ///
    /// The group becomes an atomic operand; whitespace inside it never
    /// competes with operators outside.
    fn parse_grouped(&mut self, open_span: Span) -> Result<Expression, ParseError> {
        self.nesting_depth += 1;
        if self.nesting_depth > MAX_NESTING_DEPTH {
            self.nesting_depth -= 1;
            return Err(ParseError::new(ParseErrorKind::NestingTooDeep, open_span));
        }

        self.advance(); // consume `(`
        let inner = self.parse_expression()?;

        let token = self.current_token();
        let result = match token.kind() {
            TokenKind::RightParen => {
                self.advance();
                Ok(inner)
            }
            // parse_expression only stops at `)` or EOF.
            _ => Err(ParseError::unexpected_end_of_input(token.span())),
        };
        self.nesting_depth -= 1;
        result
    }
}
