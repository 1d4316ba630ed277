//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a handler that always yields one kind
//! - `MK_PATTERN!` - Compiles an anchored entry of the lexer's pattern table

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The matched lexeme
/// * `$position` - Line/column of the lexeme's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Position::new(1, 1));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a handler for patterns whose lexeme always maps to one kind.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!("\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |_lexeme: &str| Some($kind)
    };
}

/// Compiles a pattern anchored at the start of the remaining input.
///
/// The pattern text is a literal known at build time, so compilation
/// failing is a programming error.
#[macro_export]
macro_rules! MK_PATTERN {
    ($regex:literal, $handler:expr) => {
        RegexPattern {
            regex: Regex::new(concat!("^(?:", $regex, ")")).unwrap(),
            handler: $handler,
        }
    };
}
