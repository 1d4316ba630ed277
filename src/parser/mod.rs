//! Recursive-descent validation with panic-mode error recovery.
//!
//! The parser holds exactly one token of lookahead and implements each
//! grammar rule as one procedure:
//!
//! ```text
//! json            = element EOF
//! element         = object | array
//! object          = '{' '}' | '{' attribute (',' attribute)* '}'
//! attribute       = STRING ':' attribute-value
//! attribute-value = element | STRING | NUMBER | true | false | null
//! array           = '[' ']' | '[' element (',' element)* ']'
//! ```
//!
//! No tree is built. On a rule violation the parser records a diagnostic,
//! skips tokens until one in the rule's sync set, and carries on, so one
//! run reports every independent error in scan order.

pub mod lookups;
pub mod parser;
pub mod rules;
