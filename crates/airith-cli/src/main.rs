// Copyright 2026 Airith contributors
// SPDX-License-Identifier: Apache-2.0

//! Airith command-line interface.
//!
//! This is the main entry point for the `airith` command. Given an
//! expression argument it parses it and prints the canonical rendering,
//! which makes the grouping explicit. With no argument it starts an
//! interactive REPL.

use airith_core::source_analysis::{parse_with_options, NewlinePolicy, ParseOptions};
use airith_core::unparse::unparse;
use clap::Parser;
use miette::Result;
use tracing::debug;

mod diagnostic;
mod repl;

use diagnostic::ExpressionDiagnostic;

/// Airith: whitespace-aware arithmetic expression parser
#[derive(Debug, Parser)]
#[command(name = "airith")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Expression to parse; starts the REPL when omitted
    expression: Option<String>,

    /// Treat newline characters as zero-width whitespace
    #[arg(long)]
    ignore_newlines: bool,

    /// Additional prefix-function names to recognize (repeatable)
    #[arg(long = "function", value_name = "NAME")]
    functions: Vec<String>,
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        let mut options = ParseOptions::default();
        if self.ignore_newlines {
            options = options.with_newline_policy(NewlinePolicy::Ignored);
        }
        for name in &self.functions {
            options = options.with_function(name.as_str());
        }
        options
    }
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.parse_options();

    let result = match cli.expression {
        Some(expression) => parse_once(&expression, &options),
        None => repl::run(&options),
    };

    // Exit with appropriate code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}

/// Parses a single expression and prints its canonical rendering.
fn parse_once(expression: &str, options: &ParseOptions) -> Result<()> {
    debug!(expression, "parsing expression");
    match parse_with_options(expression, options) {
        Ok(tree) => {
            println!("{}", unparse(&tree));
            Ok(())
        }
        Err(error) => Err(ExpressionDiagnostic::from_parse_error(&error, "<input>", expression).into()),
    }
}
