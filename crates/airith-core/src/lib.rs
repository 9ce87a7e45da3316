// Copyright 2026 Airith contributors
// SPDX-License-Identifier: Apache-2.0

//! Airith expression parsing core.
//!
//! Airith parses arithmetic expressions in which whitespace carries
//! meaning: an operator written with less space around it binds more
//! tightly than one written with more, and the conventional algebraic
//! precedence only breaks ties. `1 * 2+3` therefore means
//! `1 * (2 + 3)`, not `(1 * 2) + 3`.
//!
//! This crate contains the core functionality:
//! - Lexical analysis with whitespace measurement
//! - Parsing (AST construction via whitespace-aware precedence)
//! - Canonical rendering of the resulting tree
//!
//! ```
//! use airith_core::source_analysis::parse;
//! use airith_core::unparse::unparse;
//!
//! let expr = parse("1 * 2+3")?;
//! assert_eq!(unparse(&expr), "1 * (2 + 3)");
//!
//! let expr = parse("sqrt  1 + 2")?;
//! assert_eq!(unparse(&expr), "sqrt (1 + 2)");
//! # Ok::<(), airith_core::source_analysis::ParseError>(())
//! ```

pub mod ast;
pub mod source_analysis;
pub mod unparse;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{BinaryOperator, Expression};
    pub use crate::source_analysis::{parse, parse_with_options, ParseError, ParseOptions, Span};
    pub use crate::unparse::unparse;
}
