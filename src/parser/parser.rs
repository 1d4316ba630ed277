//! Parser state and the recovery machinery shared by the grammar rules.
//!
//! The `Parser` wraps a `Lexer` and keeps one token of lookahead in
//! `current`. Grammar procedures live in `rules`; this module provides the
//! primitives they are written in terms of:
//!
//! - `advance` / `match_token` for consuming tokens
//! - `error` for recording a diagnostic against the current token
//! - `synchronize` for panic-mode skipping up to a sync set

use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl, Expected},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{lookups::SyncSet, rules::parse_element};

pub struct Parser {
    lexer: Lexer,
    /// The single token of lookahead
    current: Token,
    /// Syntax diagnostics, in detection order
    errors: Vec<Error>,
    /// A lexical fault hit while synchronizing, re-raised when `parse` ends
    fault: Option<Error>,
}

impl Parser {
    /// Creates a parser and pulls the first token immediately, so `current`
    /// is valid before any rule runs.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let current = lexer.next_token()?;

        Ok(Parser {
            lexer,
            current,
            errors: vec![],
            fault: None,
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Pulls the next token from the lexer and returns the one it replaces.
    /// On a lexical fault `current` is left as it was.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it has the given kind.
    pub fn match_token(&mut self, kind: TokenKind) -> Result<bool, Error> {
        if self.current.kind == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Records a diagnostic at the current token.
    pub fn error(&mut self, expected: Expected) {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                kind: self.current.kind,
                token: self.current.value.clone(),
            },
            self.current.position,
        );

        debug!("diagnostic: {}", error);
        self.errors.push(error);
    }

    /// Skips tokens until the current one is in `sync_set` or is `EOF`, and
    /// returns the token it stopped on.
    ///
    /// Never fails. If the lexer faults while skipping, the fault is kept for
    /// `parse` to return and synchronization stops where it is.
    pub fn synchronize(&mut self, sync_set: SyncSet) -> &Token {
        while self.fault.is_none()
            && self.current.kind != TokenKind::EOF
            && !self.current.is_one_of_many(sync_set)
        {
            if let Err(fault) = self.advance() {
                debug!("lexical fault while synchronizing: {}", fault);
                self.fault = Some(fault);
            }
        }

        debug!("synchronized on {}", self.current);
        &self.current
    }

    /// Validates `json = element EOF`.
    ///
    /// Returns `Ok(true)` when no diagnostic was recorded. A lexical fault
    /// aborts the run and is returned as the error.
    pub fn parse(&mut self) -> Result<bool, Error> {
        let result = self.parse_json();

        if let Some(fault) = self.fault.take() {
            return Err(fault);
        }
        result?;

        Ok(self.errors.is_empty())
    }

    fn parse_json(&mut self) -> Result<(), Error> {
        parse_element(self)?;

        if self.current.kind != TokenKind::EOF {
            self.error(Expected::EndOfInput);
        }

        Ok(())
    }

    /// Diagnostics recorded so far, in detection order.
    pub fn get_errors(&self) -> &[Error] {
        &self.errors
    }

    /// Diagnostics rendered as `[Line L Col C] message (current token: ...)`.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

/// Validates `source` in one pass.
///
/// # Returns
///
/// Every syntax diagnostic in scan order (empty when the input is valid),
/// or the lexical fault that stopped the run.
pub fn parse(source: String) -> Result<Vec<Error>, Error> {
    let mut parser = Parser::new(Lexer::new(source))?;
    parser.parse()?;

    Ok(parser.into_errors())
}
