use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_PATTERN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Maps a matched lexeme to its kind. `None` rejects the match and lets the
/// next pattern in the table try.
pub type RegexHandler = fn(&str) -> Option<TokenKind>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Tried in order; the first pattern that matches at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!("\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket)),
        MK_PATTERN!("\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket)),
        MK_PATTERN!("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        MK_PATTERN!("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
        MK_PATTERN!(",", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        MK_PATTERN!(":", MK_DEFAULT_HANDLER!(TokenKind::Colon)),
        MK_PATTERN!("\"(?:[^\"\\\\]|\\\\.)*\"", MK_DEFAULT_HANDLER!(TokenKind::String)),
        MK_PATTERN!("[0-9]+(?:\\.[0-9]+)?(?:[eE][+-]?[0-9]+)?", MK_DEFAULT_HANDLER!(TokenKind::Number)),
        MK_PATTERN!("true|TRUE|false|FALSE|null|NULL", reserved_handler),
    ];

    static ref WHITESPACE: Regex = Regex::new("^[ \\t\\n\\r]+").unwrap();
}

fn reserved_handler(lexeme: &str) -> Option<TokenKind> {
    RESERVED_LOOKUP.get(lexeme).copied()
}

#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    /// Byte offset of the next unconsumed character
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token, skipping whitespace first.
    ///
    /// At end of input this keeps returning an `EOF` token with empty text.
    /// A character no pattern accepts is a fatal fault: the cursor does not
    /// move past it, so the caller must stop requesting tokens.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();

        if self.at_eof() {
            return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), self.position()));
        }

        for pattern in PATTERNS.iter() {
            let Some(matched) = pattern.regex.find(self.remainder()) else {
                continue;
            };
            let Some(kind) = (pattern.handler)(matched.as_str()) else {
                continue;
            };

            let token = MK_TOKEN!(kind, matched.as_str().to_string(), self.position());
            self.advance_n(token.value.len());

            trace!("lexed {}", token);
            return Ok(token);
        }

        let token = self.at().map(String::from).unwrap_or_default();
        Err(Error::new(
            ErrorImpl::UnrecognisedToken { token },
            self.position(),
        ))
    }

    /// Position of the next unconsumed character.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE.find(self.remainder()) {
            let len = matched.end();
            self.advance_n(len);
        }
    }

    /// Consumes `n` bytes and moves line/column past them.
    fn advance_n(&mut self, n: usize) {
        let consumed = &self.source[self.pos..self.pos + n];
        let newlines = consumed.matches('\n').count();

        if newlines == 0 {
            self.column += consumed.chars().count();
        } else {
            let after_last_newline = consumed.rsplit('\n').next().unwrap_or("");
            self.line += newlines;
            self.column = after_last_newline.chars().count() + 1;
        }

        self.pos += n;
    }
}

/// Tokenizes the whole source, including the trailing `EOF` token.
pub fn tokenize(source: String) -> Result<Vec<Token>, Error> {
    match tokenize_all(source) {
        (tokens, None) => Ok(tokens),
        (_, Some(error)) => Err(error),
    }
}

/// Tokenizes until end of input or the first lexical fault.
///
/// Returns every token read before the fault (with `EOF` only when the input
/// was fully consumed) and the fault itself, if any.
pub fn tokenize_all(source: String) -> (Vec<Token>, Option<Error>) {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        match lex.next_token() {
            Ok(token) => {
                let is_eof = token.kind == TokenKind::EOF;
                tokens.push(token);

                if is_eof {
                    return (tokens, None);
                }
            }
            Err(error) => return (tokens, Some(error)),
        }
    }
}
