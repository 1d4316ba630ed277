//! Lexical analysis for the simplified JSON grammar.
//!
//! The lexer pulls one token at a time from the source text. It handles:
//!
//! - An ordered table of regex patterns, where the first pattern that
//!   matches at the cursor wins (no longest-match)
//! - Line/column tracking across whitespace and lexemes
//! - A fatal fault on any character no pattern accepts

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
