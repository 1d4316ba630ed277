//! Token dump: one `KIND text` line per token, for inspecting what the lexer
//! produced. The `EOF` token is omitted; a lexical fault ends the dump with a
//! `LEXICAL_ERROR <message>` line.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

pub const LEXICAL_ERROR_TAG: &str = "LEXICAL_ERROR";

pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: &[Token],
    fault: Option<&Error>,
) -> io::Result<()> {
    for token in tokens.iter().filter(|token| token.kind != TokenKind::EOF) {
        writeln!(out, "{}", token.debug())?;
    }

    if let Some(fault) = fault {
        writeln!(out, "{} {}", LEXICAL_ERROR_TAG, fault)?;
    }

    Ok(())
}

pub fn write_tokens_file(path: &Path, tokens: &[Token], fault: Option<&Error>) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_tokens(&mut out, tokens, fault)?;
    out.flush()?;

    info!("wrote {} tokens to {}", tokens.len(), path.display());
    Ok(())
}
