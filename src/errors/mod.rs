//! Error types for lexing and validation.
//!
//! Two disjoint kinds of failure share one `Error` type:
//!
//! - Lexical faults (`ErrorImpl::UnrecognisedToken`), which stop tokenization
//! - Syntax diagnostics (`ErrorImpl::UnexpectedToken`), which the parser
//!   records and recovers from

pub mod errors;
