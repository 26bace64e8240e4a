//! Demo command implementation.
//!
//! Scans the built-in sample program and prints its tokens.

use std::io::Write;

use pasc_lex::Lexer;

use crate::commands::common::{write_text, SAMPLE_PROGRAM};
use crate::commands::Command;
use crate::error::Result;

/// Arguments for the demo command.
#[derive(Debug, Clone, Default)]
pub struct DemoArgs {
    /// Prefix each token with its `line:column`.
    pub show_positions: bool,
}

/// Demo command handler.
pub struct DemoCommand {
    args: DemoArgs,
}

impl Command for DemoCommand {
    type Args = DemoArgs;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut lexer = Lexer::new(SAMPLE_PROGRAM);
        write_text(&mut lexer, out, self.args.show_positions)
    }

    fn name() -> &'static str {
        "demo"
    }
}

/// Run the demo command, printing to stdout.
pub fn run_demo(args: DemoArgs) -> Result<()> {
    let stdout = std::io::stdout();
    crate::commands::run::<DemoCommand, _>(args, &mut stdout.lock())
}
