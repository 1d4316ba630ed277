use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::True);
        map.insert("TRUE", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("FALSE", TokenKind::False);
        map.insert("null", TokenKind::Null);
        map.insert("NULL", TokenKind::Null);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Comma,
    Colon,

    // Reserved
    True,
    False,
    Null,
}

impl TokenKind {
    /// Kinds that can start an `attribute-value`.
    pub fn is_value_start(&self) -> bool {
        matches!(
            self,
            TokenKind::OpenCurly
                | TokenKind::OpenBracket
                | TokenKind::String
                | TokenKind::Number
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// Kinds that can start an `element`.
    pub fn is_element_start(&self) -> bool {
        matches!(self, TokenKind::OpenCurly | TokenKind::OpenBracket)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({:?})@{}:{}",
            self.kind, self.value, self.position.line, self.position.column
        )
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if *kind == self.kind {
                return true;
            }
        }

        false
    }

    /// The `KIND text` line written to the token dump.
    pub fn debug(&self) -> String {
        format!("{} {}", self.kind, self.value)
    }
}
