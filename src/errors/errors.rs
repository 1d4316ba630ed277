use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnrecognisedToken { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken {
                expected,
                kind,
                token,
            } => {
                if *kind == TokenKind::EOF {
                    ErrorTip::Suggestion(format!("{}, found end of input", expected))
                } else {
                    ErrorTip::Suggestion(format!("{}, found {} `{}`", expected, kind, token))
                }
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Line {} Col {}] {}",
            self.position.line, self.position.column, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected character {token:?}")]
    UnrecognisedToken { token: String },
    #[error("{expected} (current token: {kind} {token:?})")]
    UnexpectedToken {
        expected: Expected,
        kind: TokenKind,
        token: String,
    },
}

/// What a grammar rule wanted to see when it hit the offending token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    Element,
    ElementAfterComma,
    Comma,
    CloseBracket,
    CloseCurly,
    AttributeName,
    AttributeNameAfterComma,
    Colon,
    AttributeValue,
    EndOfInput,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Expected::Element => "expected 'object' or 'array' at the start of 'element'",
            Expected::ElementAfterComma => "expected 'element' after ',' in array",
            Expected::Comma => "missing comma ',' between array elements",
            Expected::CloseBracket => "missing closing ']' of array",
            Expected::CloseCurly => "missing closing '}' of object",
            Expected::AttributeName => "expected attribute name (String)",
            Expected::AttributeNameAfterComma => "expected attribute name (String) after ','",
            Expected::Colon => "expected ':' after attribute name",
            Expected::AttributeValue => {
                "expected attribute value (element, String, Number, true, false or null)"
            }
            Expected::EndOfInput => "expected end of input after the top-level element",
        };

        write!(f, "{}", message)
    }
}
