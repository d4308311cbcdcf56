//! Parse results.

use optbind_core::{Binding, OptionId, OptionTable};
use serde::Serialize;

use crate::error::ErrorList;

/// Bindings and errors produced by one parse.
///
/// There is one [`Binding`] per table definition, addressed by the
/// [`OptionId`] the table issued. Ids from another table are out of range or
/// point at an unrelated slot.
///
/// # Examples
///
/// ```
/// use optbind_core::{OptionDef, OptionTable};
/// use optbind_parser::parse;
///
/// let mut table = OptionTable::new();
/// let verbose = table.push(OptionDef::flag(Some('v'), None));
/// let output = table.push(OptionDef::with_value(Some('o'), None));
///
/// let outcome = parse(["-v", "-o", "out.txt", "-v"], &table);
/// assert!(outcome.is_ok());
/// assert_eq!(outcome.count(verbose), 2);
/// assert_eq!(outcome.value(output), Some("out.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    bindings: Vec<Binding>,
    errors: ErrorList,
}

impl ParseOutcome {
    pub(crate) fn new(bindings: Vec<Binding>, errors: ErrorList) -> Self {
        Self { bindings, errors }
    }

    /// Returns the binding recorded for `id`.
    pub fn binding(&self, id: OptionId) -> Option<&Binding> {
        self.bindings.get(id.index())
    }

    /// Returns how often the flag `id` appeared.
    pub fn count(&self, id: OptionId) -> u32 {
        self.binding(id).map_or(0, Binding::count)
    }

    /// Returns the value bound to `id`.
    pub fn value(&self, id: OptionId) -> Option<&str> {
        self.binding(id).and_then(Binding::value)
    }

    /// Returns `true` if `id` matched at least once.
    pub fn is_present(&self, id: OptionId) -> bool {
        self.binding(id).is_some_and(Binding::is_set)
    }

    /// Returns all bindings in table order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Returns the errors in scan order.
    pub fn errors(&self) -> &ErrorList {
        &self.errors
    }

    /// Returns `true` if the parse recorded no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Pairs each binding with the reporting name of its definition.
    ///
    /// # Examples
    ///
    /// ```
    /// use optbind_core::{Binding, OptionDef, OptionTable};
    /// use optbind_parser::parse;
    ///
    /// let table = OptionTable::new()
    ///     .with(OptionDef::flag(Some('v'), Some("verbose")))
    ///     .with(OptionDef::positional());
    ///
    /// let outcome = parse(["input.txt"], &table);
    /// let named = outcome.named_bindings(&table);
    /// assert_eq!(named[0], ("--verbose".to_string(), &Binding::Unset));
    /// assert_eq!(named[1], ("<positional>".to_string(), &Binding::Value("input.txt".into())));
    /// ```
    pub fn named_bindings<'a>(&'a self, table: &OptionTable) -> Vec<(String, &'a Binding)> {
        table
            .iter()
            .zip(&self.bindings)
            .map(|((_, def), binding)| (def.canonical_name(), binding))
            .collect()
    }

    /// Splits the outcome into bindings and errors.
    pub fn into_parts(self) -> (Vec<Binding>, ErrorList) {
        (self.bindings, self.errors)
    }
}
