// Copyright 2026 Airith contributors
// SPDX-License-Identifier: Apache-2.0

//! Canonical rendering of expression trees.
//!
//! [`unparse`] turns an [`Expression`] back into source text in a
//! normalized form: single spaces around every operator, and
//! parentheses wherever the tree shape differs from what plain
//! left-to-right reading with conventional operator ranks would
//! produce. The output is whitespace-neutral, so re-parsing it yields a
//! structurally identical tree; two inputs parse to the same structure
//! exactly when they unparse to the same string.
//!
//! Parenthesization is selective rather than exhaustive:
//!
//! - a binary right operand that is itself a binary operation is always
//!   wrapped (the grammar is left-associative, so a bare rendering would
//!   rebind it to the left);
//! - a binary left operand that is a binary operation is wrapped unless
//!   it has the same rank as its parent, in which case left
//!   associativity already reproduces it;
//! - an application operand is always wrapped, which keeps the
//!   application token adjacent to a single atom;
//! - literals and applications are never wrapped as operands.

use std::fmt::Write;

use crate::ast::Expression;
use crate::source_analysis::Rank;

/// Renders an expression in canonical form.
#[must_use]
pub fn unparse(expression: &Expression) -> String {
    let mut out = String::new();
    write_expression(&mut out, expression);
    out
}

/// Writes `expression` without outer parentheses.
fn write_expression(out: &mut String, expression: &Expression) {
    match expression {
        Expression::Number(value, _) => {
            // f64 Display renders integral values without a fraction.
            let _ = write!(out, "{value}");
        }

        Expression::Binary {
            operator,
            left,
            right,
            ..
        } => {
            let rank = Rank::of_operator(*operator);
            write_operand(out, left, Some(rank));
            let _ = write!(out, " {operator} ");
            write_operand(out, right, None);
        }

        Expression::Apply {
            function, operand, ..
        } => {
            let _ = write!(out, "{function} (");
            write_expression(out, operand);
            out.push(')');
        }
    }
}

/// Writes a binary operand, parenthesizing nested binary operations.
///
/// `parent_rank` is `Some` for the left operand; an equal-rank binary
/// left operand is the one shape left associativity recovers unaided.
fn write_operand(out: &mut String, operand: &Expression, parent_rank: Option<Rank>) {
    let needs_parens = match operand {
        Expression::Binary { operator, .. } => {
            parent_rank != Some(Rank::of_operator(*operator))
        }
        Expression::Number(..) | Expression::Apply { .. } => false,
    };

    if needs_parens {
        out.push('(');
        write_expression(out, operand);
        out.push(')');
    } else {
        write_expression(out, operand);
    }
}
