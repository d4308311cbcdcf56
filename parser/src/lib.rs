//! Command-line argument parsing against an option table.
//!
//! Given the argument tokens of a program (without the program name) and an
//! [`OptionTable`], [`parse`] classifies every token as a short option
//! (`-c`), a long option (`--name`), or a bare value, binds what it matched,
//! and collects a [`ParseError`] for every token it cannot resolve. Parsing
//! never aborts on bad input: the whole argument list is always consumed.
//!
//! # Main entry points
//!
//! - [`parse`] — parse a token sequence against a table.
//! - [`parse_env`] — same, for the arguments of the running process.
//! - [`classify`] — the token classifier used by the parser.
//! - [`ErrorList::print`] — render the collected errors, one line each.
//!
//! # Example
//!
//! ```
//! use optbind_core::{OptionDef, OptionTable};
//! use optbind_parser::parse;
//!
//! let mut table = OptionTable::new();
//! let verbose = table.push(OptionDef::flag(Some('v'), Some("verbose")));
//! let output = table.push(OptionDef::with_value(Some('o'), Some("output")));
//! let input = table.push(OptionDef::positional());
//!
//! let outcome = parse(["-vv", "-v", "--output", "out.bin", "in.bin", "--color"], &table);
//! assert_eq!(outcome.count(verbose), 1);
//! assert_eq!(outcome.value(output), Some("out.bin"));
//! assert_eq!(outcome.value(input), Some("in.bin"));
//!
//! let mut stderr = Vec::new();
//! outcome.errors().print(&mut stderr).unwrap();
//! assert_eq!(
//!     String::from_utf8(stderr).unwrap(),
//!     "-vv: more than 1 characters are not allowed with only 1 '-'\n\
//!      --color: unknown option\n"
//! );
//! ```
//!
//! [`OptionTable`]: optbind_core::OptionTable

mod error;
mod outcome;
mod parser;
mod token;

pub use error::{ErrorKind, ErrorList, ParseError};
pub use outcome::ParseOutcome;
pub use parser::{parse, parse_env};
pub use token::{Token, classify};
