use crate::lexer::tokens::TokenKind;

/// Token kinds that are safe places to resume after an error.
/// `EOF` always stops synchronization, listed or not.
pub type SyncSet = &'static [TokenKind];

pub const ELEMENT_SYNC: SyncSet = &[
    TokenKind::Comma,
    TokenKind::CloseCurly,
    TokenKind::CloseBracket,
    TokenKind::EOF,
];

// Missing element after ',' and missing closing ']'
pub const ARRAY_SYNC: SyncSet = &[
    TokenKind::Comma,
    TokenKind::CloseBracket,
    TokenKind::CloseCurly,
    TokenKind::EOF,
];

pub const OBJECT_NAME_AFTER_COMMA_SYNC: SyncSet = &[
    TokenKind::String,
    TokenKind::CloseCurly,
    TokenKind::Comma,
    TokenKind::CloseBracket,
    TokenKind::EOF,
];

pub const OBJECT_CLOSE_SYNC: SyncSet = &[
    TokenKind::Comma,
    TokenKind::CloseCurly,
    TokenKind::CloseBracket,
    TokenKind::EOF,
];

pub const ATTRIBUTE_NAME_SYNC: SyncSet = &[
    TokenKind::Colon,
    TokenKind::Comma,
    TokenKind::CloseCurly,
    TokenKind::CloseBracket,
    TokenKind::EOF,
];

// Value starters first; note that ']' is not a resumption point here.
pub const ATTRIBUTE_COLON_SYNC: SyncSet = &[
    TokenKind::OpenCurly,
    TokenKind::OpenBracket,
    TokenKind::String,
    TokenKind::Number,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
    TokenKind::Comma,
    TokenKind::CloseCurly,
    TokenKind::EOF,
];

pub const ATTRIBUTE_VALUE_SYNC: SyncSet = &[
    TokenKind::Comma,
    TokenKind::CloseCurly,
    TokenKind::CloseBracket,
    TokenKind::EOF,
];
