//! Common types and utilities for pasct commands.
//!
//! Token formatting and the output writers shared by `demo` and `lex`.

use std::io::Write;

use pasc_lex::{Lexer, Token, TokenKind};
use pasc_util::Span;
use serde::Serialize;

use crate::error::Result;

/// Program scanned by `pasct demo`.
pub const SAMPLE_PROGRAM: &str = r#"PROGRAM Part10;
VAR
   number     : INTEGER;
   a, b, c, x : INTEGER;
   y          : REAL;

PROCEDURE P1;
VAR
   a : REAL;
BEGIN {P1}
   a := 10.5
END;  {P1}

BEGIN {Part10}
   BEGIN
      number := 2;
      a := number;
      b := 10 * a + 10 * number DIV 4;
      c := a - - b
   END;
   x := 11;
   y := 20 / 7 + 3.25;
END.  {Part10}
"#;

/// Formats one token as `type=<TYPE>\tvalue=<value>`.
///
/// A missing value prints as `None`. With a position the line is prefixed
/// by `line:column` and a tab.
pub fn format_token(token: &Token, position: Option<Span>) -> String {
    let value = token
        .value()
        .map_or_else(|| "None".to_string(), ToString::to_string);
    let line = format!("type={}\tvalue={}", token.kind(), value);
    match position {
        Some(span) => format!("{}\t{}", span, line),
        None => line,
    }
}

/// Writes one text line per token, EOF included.
///
/// Lines already written stay written if a later token fails to scan.
pub fn write_text<W: Write>(lexer: &mut Lexer<'_>, out: &mut W, show_positions: bool) -> Result<()> {
    loop {
        let token = lexer.next_token()?;
        let position = show_positions.then(|| lexer.token_span());
        writeln!(out, "{}", format_token(&token, position))?;
        if token.is(TokenKind::Eof) {
            return Ok(());
        }
    }
}

#[derive(Serialize)]
struct JsonToken<'a> {
    #[serde(flatten)]
    token: &'a Token,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<u32>,
}

/// Writes every token, EOF included, as one pretty-printed JSON array.
///
/// Nothing is written unless the whole input scans.
pub fn write_json<W: Write>(lexer: &mut Lexer<'_>, out: &mut W, show_positions: bool) -> Result<()> {
    let mut scanned = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let at_end = token.is(TokenKind::Eof);
        scanned.push((token, lexer.token_span()));
        if at_end {
            break;
        }
    }

    let entries: Vec<JsonToken<'_>> = scanned
        .iter()
        .map(|(token, span)| JsonToken {
            token,
            line: show_positions.then_some(span.line),
            column: show_positions.then_some(span.column),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)?;
    Ok(())
}
