//! Lex command implementation.
//!
//! Scans a source file (or standard input) and prints its tokens.

use std::io::{IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use pasc_lex::Lexer;
use tracing::debug;

use crate::commands::common::{write_json, write_text};
use crate::commands::Command;
use crate::config::OutputFormat;
use crate::error::{PasctError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// File to scan; `-` reads standard input.
    pub input: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Prefix each token with its `line:column`.
    pub show_positions: bool,
    /// Colour the diagnostic printed on a lexical error.
    pub use_color: bool,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    fn reads_stdin(&self) -> bool {
        self.args.input == Path::new("-")
    }

    fn read_source(&self) -> Result<String> {
        if self.reads_stdin() {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            return Ok(source);
        }

        std::fs::read_to_string(&self.args.input).map_err(|e| {
            PasctError::FileOperation(format!("{}: {}", self.args.input.display(), e))
        })
    }
}

impl Command for LexCommand {
    type Args = LexArgs;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        let source = self.read_source()?;
        debug!(
            input = %self.args.input.display(),
            bytes = source.len(),
            "scanning"
        );

        let mut lexer = Lexer::new(&source);
        let result = match self.args.format {
            OutputFormat::Text => write_text(&mut lexer, out, self.args.show_positions),
            OutputFormat::Json => write_json(&mut lexer, out, self.args.show_positions),
        };

        if let Err(PasctError::Lex(err)) = &result {
            debug!(code = %err.code(), "lexical error");
            eprint!("{}", err.to_diagnostic(&source).render(self.args.use_color));
        }
        result
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Run the lex command, printing to stdout.
pub fn run_lex(mut args: LexArgs) -> Result<()> {
    args.use_color &= std::io::stderr().is_terminal();
    let stdout = std::io::stdout();
    crate::commands::run::<LexCommand, _>(args, &mut stdout.lock())
}
