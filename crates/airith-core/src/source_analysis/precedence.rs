// Copyright 2026 Airith contributors
// SPDX-License-Identifier: Apache-2.0

//! Whitespace-aware precedence keys.
//!
//! In airith the binding strength of an operator occurrence is not a
//! static table entry: it is computed from the whitespace around that
//! occurrence, with the conventional algebraic ordering only breaking
//! ties. A [`Precedence`] is the comparison key `(gap, rank)`:
//!
//! - **gap** — the whitespace width next to the operator. For a binary
//!   operator it is `max(leading, trailing)`; for prefix application only
//!   the trailing side exists. A *smaller* gap binds *tighter*.
//! - **rank** — the PEMDAS-like [`Rank`], consulted only when two gaps
//!   are equal. A *higher* rank binds *tighter*.
//!
//! When both components are equal, the parser falls back to stream order
//! (left associativity); that last tie-break lives in the reduction loop,
//! not here, because it depends on token positions rather than on the
//! keys themselves.
//!
//! The ordering is expressed as `Ord` with "greater = binds tighter", so
//! the parser's reduce condition reads naturally as
//! `top.precedence() >= incoming`.

use std::cmp::Ordering;

use crate::ast::BinaryOperator;

/// The algebraic rank of an operator kind, lowest to highest.
///
/// Used only to break gap ties: function application beats the
/// multiplicative operators, which beat the additive ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// `+` and `-`
    Additive,
    /// `*` and `/`
    Multiplicative,
    /// Prefix function application (and prefix negation).
    Application,
}

impl Rank {
    /// Returns the rank of a binary operator.
    #[must_use]
    pub const fn of_operator(operator: BinaryOperator) -> Self {
        match operator {
            BinaryOperator::Add | BinaryOperator::Sub => Self::Additive,
            BinaryOperator::Mul | BinaryOperator::Div => Self::Multiplicative,
        }
    }
}

/// The precedence key of one operator occurrence.
///
/// Compared, never stored in the AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precedence {
    gap: u32,
    rank: Rank,
}

impl Precedence {
    /// The key of a binary operator occurrence.
    ///
    /// The gap is the wider of the two whitespace runs around the
    /// operator. `max` (rather than `sum` or an average) is the contract
    /// fixed by the reference behaviour.
    #[must_use]
    pub fn binary(operator: BinaryOperator, leading_spaces: u32, trailing_spaces: u32) -> Self {
        Self {
            gap: leading_spaces.max(trailing_spaces),
            rank: Rank::of_operator(operator),
        }
    }

    /// The key of a prefix application occurrence.
    ///
    /// There is no left operand, so only the trailing whitespace of the
    /// function name is meaningful.
    #[must_use]
    pub const fn prefix(trailing_spaces: u32) -> Self {
        Self {
            gap: trailing_spaces,
            rank: Rank::Application,
        }
    }

    /// The sentinel key that binds loosest of all: an unreachable gap
    /// width with the lowest rank. Used for the end-of-input token so it
    /// never competes to bind, and to drain the pending-operator stack.
    #[must_use]
    pub const fn loosest() -> Self {
        Self {
            gap: u32::MAX,
            rank: Rank::Additive,
        }
    }

    /// Returns the gap component.
    #[must_use]
    pub const fn gap(self) -> u32 {
        self.gap
    }

    /// Returns the rank component.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }
}

impl Ord for Precedence {
    /// Greater means binds tighter: a smaller gap wins outright, and the
    /// higher rank wins among equal gaps.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .gap
            .cmp(&self.gap)
            .then_with(|| self.rank.cmp(&other.rank))
    }
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
