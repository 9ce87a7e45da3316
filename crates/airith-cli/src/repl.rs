// Copyright 2026 Airith contributors
// SPDX-License-Identifier: Apache-2.0

//! Interactive read-parse-print loop.
//!
//! Each line is parsed on its own and echoed back in canonical form, so
//! the grouping chosen by the whitespace rules is visible immediately:
//!
//! ```text
//! airith> 1 * 2+3
//! 1 * (2 + 3)
//! airith> 1 +
//! Error: ... unexpected end of input
//! ```
//!
//! `Ctrl-C` clears the current line, `Ctrl-D` (or `:quit`) exits.

use airith_core::source_analysis::{parse_with_options, ParseOptions};
use airith_core::unparse::unparse;
use miette::{IntoDiagnostic, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

const PROMPT: &str = "airith> ";

/// Runs the REPL until end of input.
pub fn run(options: &ParseOptions) -> Result<()> {
    let mut editor = DefaultEditor::new().into_diagnostic()?;
    println!("airith - whitespace-aware arithmetic (:quit to exit)");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == ":quit" || line == ":q" {
                    break;
                }
                editor.add_history_entry(line).into_diagnostic()?;
                evaluate(line, options);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).into_diagnostic(),
        }
    }
    Ok(())
}

/// Parses one line and prints the rendering or the diagnostic.
fn evaluate(line: &str, options: &ParseOptions) {
    debug!(line, "evaluating line");
    match parse_with_options(line, options) {
        Ok(tree) => println!("{}", unparse(&tree)),
        Err(error) => {
            let diagnostic = crate::diagnostic::ExpressionDiagnostic::from_parse_error(
                &error, "<repl>", line,
            );
            eprintln!("{:?}", miette::Report::new(diagnostic));
        }
    }
}
