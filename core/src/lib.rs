//! Core types for command-line option tables.
//!
//! This crate defines the data model shared by the parser and the table
//! loaders:
//!
//! - [`OptionDef`] — a recognized option with an optional short form
//!   (e.g., `-v`), an optional long form (e.g., `--verbose`), and whether it
//!   consumes the following token as its value.
//! - [`OptionTable`] — an ordered list of definitions. Table order is search
//!   order, so the first matching definition wins.
//! - [`OptionId`] — handle of a definition inside its table.
//! - [`Binding`] — what a parse recorded for one definition: nothing, an
//!   occurrence count, or a bound value.
//!
//! Validation ([`validate_table`]) reports definitions that can never match or
//! that are shadowed by an earlier entry.
//!
//! # Example
//!
//! ```
//! use optbind_core::*;
//!
//! let mut table = OptionTable::new();
//! let verbose = table.push(OptionDef::flag(Some('v'), Some("verbose")));
//! let output = table.push(OptionDef::with_value(Some('o'), Some("output")));
//! let input = table.push(OptionDef::positional());
//!
//! assert_eq!(table.find_short('v'), Some(verbose));
//! assert_eq!(table.find_long("output"), Some(output));
//! assert_eq!(table.catch_alls().collect::<Vec<_>>(), vec![input]);
//! assert!(validate_table(&table).is_empty());
//! ```

mod table;
mod types;
mod validate;

pub use table::OptionTable;
pub use types::*;
pub use validate::{TableIssue, validate_table};
