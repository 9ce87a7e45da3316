// Copyright 2026 Airith contributors
// SPDX-License-Identifier: Apache-2.0

//! Abstract syntax tree definitions for airith expressions.
//!
//! Every node carries a [`Span`] pointing back into the source text.
//! Nodes are built bottom-up by the parser and never mutated afterwards;
//! each interior node exclusively owns its children.
//!
//! # Example
//!
//! ```ignore
//! // Source: 1 * 2+3
//! Expression::Binary {
//!     operator: BinaryOperator::Mul,
//!     left: Box::new(Expression::Number(1.0, ...)),
//!     right: Box::new(Expression::Binary {
//!         operator: BinaryOperator::Add,
//!         left: Box::new(Expression::Number(2.0, ...)),
//!         right: Box::new(Expression::Number(3.0, ...)),
//!         span: ...,
//!     }),
//!     span: ...,
//! }
//! ```

use ecow::EcoString;

use crate::source_analysis::Span;

/// One of the four binary operator symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition: `+`
    Add,
    /// Subtraction: `-`
    Sub,
    /// Multiplication: `*`
    Mul,
    /// Division: `/`
    Div,
}

impl BinaryOperator {
    /// Returns the operator for the given source character, if any.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns the source character for this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An airith expression.
///
/// The tree is acyclic and finite, rooted at exactly one node after a
/// successful parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A numeric literal.
    Number(f64, Span),

    /// A binary operation.
    Binary {
        /// The operator symbol.
        operator: BinaryOperator,
        /// The left operand.
        left: Box<Expression>,
        /// The right operand.
        right: Box<Expression>,
        /// Source location of the entire operation.
        span: Span,
    },

    /// A prefix application: a function name (or negation sign) applied
    /// to a single operand, e.g. `sqrt 2`.
    Apply {
        /// The function name (`-` for negation).
        function: EcoString,
        /// The operand the function is applied to.
        operand: Box<Expression>,
        /// Source location of the entire application.
        span: Span,
    },
}

impl Expression {
    /// Returns the span of this expression.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Number(_, span) | Self::Binary { span, .. } | Self::Apply { span, .. } => *span,
        }
    }

    /// Appends the number literals of this subtree, left to right.
    pub fn collect_literals(&self, out: &mut Vec<f64>) {
        match self {
            Self::Number(value, _) => out.push(*value),
            Self::Binary { left, right, .. } => {
                left.collect_literals(out);
                right.collect_literals(out);
            }
            Self::Apply { operand, .. } => operand.collect_literals(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbol_roundtrip() {
        for op in [
            BinaryOperator::Add,
            BinaryOperator::Sub,
            BinaryOperator::Mul,
            BinaryOperator::Div,
        ] {
            assert_eq!(BinaryOperator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(BinaryOperator::from_symbol('%'), None);
    }

    #[test]
    fn expression_span() {
        let expr = Expression::Binary {
            operator: BinaryOperator::Add,
            left: Box::new(Expression::Number(1.0, Span::new(0, 1))),
            right: Box::new(Expression::Number(2.0, Span::new(4, 5))),
            span: Span::new(0, 5),
        };
        assert_eq!(expr.span(), Span::new(0, 5));
    }

    #[test]
    fn collect_literals_in_order() {
        let expr = Expression::Binary {
            operator: BinaryOperator::Mul,
            left: Box::new(Expression::Number(1.0, Span::default())),
            right: Box::new(Expression::Apply {
                function: "sqrt".into(),
                operand: Box::new(Expression::Number(2.0, Span::default())),
                span: Span::default(),
            }),
            span: Span::default(),
        };
        let mut literals = Vec::new();
        expr.collect_literals(&mut literals);
        assert_eq!(literals, vec![1.0, 2.0]);
    }
}
