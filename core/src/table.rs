use serde::{Deserialize, Serialize};

use crate::{OptionDef, OptionId};

/// Ordered collection of option definitions.
///
/// Lookups scan the table in insertion order and return the first match, so
/// an earlier definition shadows any later duplicate.
///
/// # Examples
///
/// ```
/// use optbind_core::*;
///
/// let table = OptionTable::new()
///     .with(OptionDef::flag(Some('v'), Some("verbose")))
///     .with(OptionDef::flag(Some('v'), Some("version")));
///
/// // First definition wins
/// assert_eq!(table.find_short('v'), Some(OptionId(0)));
/// assert_eq!(table.find_long("version"), Some(OptionId(1)));
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionTable {
    options: Vec<OptionDef>,
}

impl OptionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a definition and returns its handle.
    pub fn push(&mut self, def: OptionDef) -> OptionId {
        self.options.push(def);
        OptionId(self.options.len() - 1)
    }

    /// Appends a definition, builder style.
    pub fn with(mut self, def: OptionDef) -> Self {
        self.options.push(def);
        self
    }

    /// Returns the definition behind `id`.
    pub fn get(&self, id: OptionId) -> Option<&OptionDef> {
        self.options.get(id.0)
    }

    /// Returns the number of definitions.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if the table has no definitions.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates over handles and definitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionId, &OptionDef)> + '_ {
        self.options
            .iter()
            .enumerate()
            .map(|(index, def)| (OptionId(index), def))
    }

    /// Returns the definitions as a slice.
    pub fn as_slice(&self) -> &[OptionDef] {
        &self.options
    }

    /// Finds the first definition whose short form is `c`.
    pub fn find_short(&self, c: char) -> Option<OptionId> {
        self.iter()
            .find(|(_, def)| def.matches_short(c))
            .map(|(id, _)| id)
    }

    /// Finds the first definition whose long form is exactly `name`.
    pub fn find_long(&self, name: &str) -> Option<OptionId> {
        self.iter()
            .find(|(_, def)| def.matches_long(name))
            .map(|(id, _)| id)
    }

    /// Iterates over catch-all definitions in table order.
    ///
    /// # Examples
    ///
    /// ```
    /// use optbind_core::*;
    ///
    /// let table = OptionTable::new()
    ///     .with(OptionDef::positional())
    ///     .with(OptionDef::flag(Some('x'), None))
    ///     .with(OptionDef::positional());
    ///
    /// let ids: Vec<_> = table.catch_alls().collect();
    /// assert_eq!(ids, vec![OptionId(0), OptionId(2)]);
    /// ```
    pub fn catch_alls(&self) -> impl Iterator<Item = OptionId> + '_ {
        self.iter()
            .filter(|(_, def)| def.is_catch_all())
            .map(|(id, _)| id)
    }
}

impl From<Vec<OptionDef>> for OptionTable {
    fn from(options: Vec<OptionDef>) -> Self {
        Self { options }
    }
}

impl FromIterator<OptionDef> for OptionTable {
    fn from_iter<I: IntoIterator<Item = OptionDef>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OptionTable {
    type Item = &'a OptionDef;
    type IntoIter = std::slice::Iter<'a, OptionDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_sequential_ids() {
        let mut table = OptionTable::new();
        assert_eq!(table.push(OptionDef::flag(Some('a'), None)), OptionId(0));
        assert_eq!(table.push(OptionDef::positional()), OptionId(1));
        assert_eq!(table.get(OptionId(1)), Some(&OptionDef::positional()));
        assert_eq!(table.get(OptionId(2)), None);
    }

    #[test]
    fn test_find_ignores_catch_all() {
        let table = OptionTable::new().with(OptionDef::positional());
        assert_eq!(table.find_long(""), None);
        assert_eq!(table.find_short('-'), None);
    }

    #[test]
    fn test_table_serializes_as_list() {
        let table: OptionTable = vec![OptionDef::flag(Some('v'), None)].into();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json, serde_json::json!([{"short": "v", "takes_value": false}]));
    }
}
