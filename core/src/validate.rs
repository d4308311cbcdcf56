//! Option table validation.
//!
//! The parser accepts any table and resolves conflicts by table order, so
//! validation is advisory: it points out definitions that are shadowed by an
//! earlier entry or that no token can ever select.
//!
//! # Examples
//!
//! ```
//! use optbind_core::*;
//!
//! let table = OptionTable::new()
//!     .with(OptionDef::flag(Some('v'), Some("verbose")))
//!     .with(OptionDef::positional());
//! assert!(validate_table(&table).is_empty());
//!
//! // Invalid: second `-v` is never reachable
//! let bad = table.with(OptionDef::flag(Some('v'), None));
//! assert_eq!(
//!     validate_table(&bad),
//!     vec![TableIssue::DuplicateShort { index: 2, short: 'v' }]
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::OptionTable;

/// Problems found in an option table.
///
/// Each variant names the table position of the offending definition. The
/// `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableIssue {
    /// A short form already used by an earlier definition.
    #[error("option #{index}: duplicate short option -{short}")]
    DuplicateShort { index: usize, short: char },
    /// A long form already used by an earlier definition.
    #[error("option #{index}: duplicate long option --{long}")]
    DuplicateLong { index: usize, long: String },
    /// A catch-all after the first one.
    #[error("option #{index}: more than one positional catch-all")]
    ExtraCatchAll { index: usize },
    /// No names and no value, so nothing can ever bind to it.
    #[error("option #{index}: definition has no name and takes no value")]
    Unreachable { index: usize },
    /// `-` as short form; `--` is always read as a long option.
    #[error("option #{index}: '-' cannot be used as a short option")]
    HyphenShort { index: usize },
}

impl TableIssue {
    /// Returns the table position of the offending definition.
    pub fn index(&self) -> usize {
        match self {
            TableIssue::DuplicateShort { index, .. }
            | TableIssue::DuplicateLong { index, .. }
            | TableIssue::ExtraCatchAll { index }
            | TableIssue::Unreachable { index }
            | TableIssue::HyphenShort { index } => *index,
        }
    }
}

/// Validates an option table.
///
/// All issues are collected, in table order.
///
/// # Examples
///
/// ```
/// use optbind_core::*;
///
/// let table = OptionTable::new()
///     .with(OptionDef::positional())
///     .with(OptionDef::positional())
///     .with(OptionDef::new(None, None, false));
///
/// let issues = validate_table(&table);
/// assert_eq!(
///     issues,
///     vec![
///         TableIssue::ExtraCatchAll { index: 1 },
///         TableIssue::Unreachable { index: 2 },
///     ]
/// );
/// ```
pub fn validate_table(table: &OptionTable) -> Vec<TableIssue> {
    let mut issues = Vec::new();
    let mut seen_short = HashSet::new();
    let mut seen_long = HashSet::new();
    let mut seen_catch_all = false;

    for (id, def) in table.iter() {
        let index = id.index();

        if def.short.is_none() && def.long.is_none() {
            if !def.takes_value {
                issues.push(TableIssue::Unreachable { index });
            } else if seen_catch_all {
                issues.push(TableIssue::ExtraCatchAll { index });
            } else {
                seen_catch_all = true;
            }
            continue;
        }

        if let Some(short) = def.short {
            if short == '-' {
                issues.push(TableIssue::HyphenShort { index });
            } else if !seen_short.insert(short) {
                issues.push(TableIssue::DuplicateShort { index, short });
            }
        }

        if let Some(long) = def.long.as_deref() {
            if !seen_long.insert(long) {
                issues.push(TableIssue::DuplicateLong {
                    index,
                    long: long.to_string(),
                });
            }
        }
    }

    issues
}
