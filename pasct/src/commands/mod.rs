//! Command modules for the pasct CLI.
//!
//! Each subcommand lives in its own file and implements [`Command`].

use std::io::Write;

use tracing::debug;

use crate::error::Result;

pub mod common;

pub mod demo;
pub mod lex;

pub use demo::{run_demo, DemoArgs};
pub use lex::{run_lex, LexArgs};

/// Standard command trait that all pasct commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command, writing token output to `out`.
    fn execute<W: Write>(&self, out: &mut W) -> Result<()>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Builds a command from its arguments and executes it.
pub fn run<C: Command, W: Write>(args: C::Args, out: &mut W) -> Result<()> {
    debug!(command = C::name(), "executing");
    C::new(args).execute(out)
}
