// Copyright 2026 Airith contributors
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the lexing and parsing pipeline.
//!
//! These check the structural guarantees of the parser over generated
//! input rather than hand-picked cases: it must never panic, it must
//! conserve operands, narrower gaps must win, and canonical rendering
//! must be a fixpoint.

use proptest::prelude::*;

use crate::ast::{BinaryOperator, Expression};
use crate::unparse::unparse;

use super::parse;

/// One of the four operator characters.
fn operator_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/'])
}

/// A well-formed operator chain like `12 +  3*4`, with every gap width
/// chosen independently in `0..=3`.
fn operator_chain() -> impl Strategy<Value = (Vec<u8>, String)> {
    (
        any::<u8>(),
        prop::collection::vec((0u32..4, operator_char(), 0u32..4, any::<u8>()), 1..6),
    )
        .prop_map(|(first, rest)| {
            let mut literals = vec![first];
            let mut source = first.to_string();
            for (before, op, after, value) in rest {
                literals.push(value);
                source.push_str(&" ".repeat(before as usize));
                source.push(op);
                source.push_str(&" ".repeat(after as usize));
                source.push_str(&value.to_string());
            }
            (literals, source)
        })
}

proptest! {
    /// Parsing must never panic, whatever the input.
    #[test]
    fn parse_never_panics(input in ".{0,64}") {
        let _ = parse(&input);
    }

    /// Every literal of a well-formed chain appears in the tree, in
    /// stream order, regardless of how the gaps group it.
    #[test]
    fn operands_are_conserved((literals, source) in operator_chain()) {
        let expr = parse(&source).expect("chain is well-formed");
        let mut found = Vec::new();
        expr.collect_literals(&mut found);
        let expected: Vec<f64> = literals.iter().map(|&n| f64::from(n)).collect();
        prop_assert_eq!(found, expected);
    }

    /// Canonical rendering is a fixpoint: re-parsing the rendered form
    /// renders identically.
    #[test]
    fn unparse_is_a_fixpoint((_, source) in operator_chain()) {
        let rendered = unparse(&parse(&source).expect("chain is well-formed"));
        let rerendered = unparse(&parse(&rendered).expect("rendered form reparses"));
        prop_assert_eq!(rendered, rerendered);
    }

    /// With two operators, the one written with the narrower gap becomes
    /// the deeper node, whatever the algebraic ranks say.
    #[test]
    fn narrower_gap_binds_tighter(
        (a, b, c) in (any::<u8>(), any::<u8>(), any::<u8>()),
        op1 in operator_char(),
        op2 in operator_char(),
        gap1 in 0u32..4,
        gap2 in 0u32..4,
    ) {
        prop_assume!(gap1 != gap2);
        let s1 = " ".repeat(gap1 as usize);
        let s2 = " ".repeat(gap2 as usize);
        let source = format!("{a}{s1}{op1}{s1}{b}{s2}{op2}{s2}{c}");
        let expr = parse(&source).expect("chain is well-formed");

        let Expression::Binary { operator, left, right, .. } = &expr else {
            panic!("expected binary root for {source:?}");
        };
        let op1 = BinaryOperator::from_symbol(op1).expect("operator character");
        let op2 = BinaryOperator::from_symbol(op2).expect("operator character");
        if gap1 < gap2 {
            // op1 reduced first, so op2 is the root.
            prop_assert_eq!(*operator, op2);
            let left_is_op1 =
                matches!(**left, Expression::Binary { operator, .. } if operator == op1);
            prop_assert!(left_is_op1);
        } else {
            prop_assert_eq!(*operator, op1);
            let right_is_op2 =
                matches!(**right, Expression::Binary { operator, .. } if operator == op2);
            prop_assert!(right_is_op2);
        }
    }
}
