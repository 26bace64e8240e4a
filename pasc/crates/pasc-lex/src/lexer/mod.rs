//! Lexer module.
//!
//! The implementation is split by token family:
//! - `core` - Lexer struct, navigation primitives and dispatch
//! - `comment` - Whitespace and `{ ... }` comment skipping
//! - `identifier` - Identifiers and reserved words
//! - `number` - Integer and real literals
//! - `operator` - Punctuation and `:=`

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::Lexer;
