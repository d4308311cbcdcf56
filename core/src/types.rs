//! Option definition and binding types.
//!
//! These types are designed for serialization with [`serde`] so option tables
//! can be kept in YAML or JSON files and parse results can be reported in the
//! same formats.

use serde::{Deserialize, Serialize};

/// Name reported for catch-all definitions, which have no short or long form.
pub const POSITIONAL_NAME: &str = "<positional>";

/// Handle of a definition inside an [`OptionTable`](crate::OptionTable).
///
/// The handle is the zero-based position of the definition in its table and
/// is only meaningful for the table that issued it.
///
/// # Examples
///
/// ```
/// use optbind_core::{OptionDef, OptionTable};
///
/// let mut table = OptionTable::new();
/// let first = table.push(OptionDef::flag(Some('a'), None));
/// let second = table.push(OptionDef::flag(Some('b'), None));
/// assert_eq!(first.index(), 0);
/// assert_eq!(second.index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OptionId(pub usize);

impl OptionId {
    /// Returns the table position of this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Definition of a recognized option.
///
/// An option has an optional short form (a single character used as `-c`)
/// and/or long form (a name used as `--name`). Names are stored without their
/// leading hyphens. When `takes_value` is set, the token following the flag is
/// consumed verbatim as the option's value.
///
/// A definition with neither form that takes a value is the *catch-all*: it
/// receives a bare (non-hyphenated) token instead of being matched by name.
///
/// # Examples
///
/// ```
/// use optbind_core::OptionDef;
///
/// // Flag counted by occurrence
/// let verbose = OptionDef::flag(Some('v'), Some("verbose"));
/// assert!(!verbose.takes_value);
/// assert_eq!(verbose.canonical_name(), "--verbose");
///
/// // Flag that consumes the next token
/// let output = OptionDef::with_value(Some('o'), None);
/// assert!(output.takes_value);
/// assert_eq!(output.canonical_name(), "-o");
///
/// // Catch-all for bare values
/// assert!(OptionDef::positional().is_catch_all());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDef {
    /// Short form without the hyphen (e.g., `'o'` for `-o`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
    /// Long form without the hyphens (e.g., `"output"` for `--output`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    /// Whether the following token is consumed as the value
    #[serde(default)]
    pub takes_value: bool,
    /// Free-form note carried through table files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OptionDef {
    /// Creates a definition from its parts.
    ///
    /// At least one of `short` and `long` should be set unless the catch-all
    /// is being built, for which [`positional`](OptionDef::positional) reads
    /// better.
    ///
    /// # Examples
    ///
    /// ```
    /// use optbind_core::OptionDef;
    ///
    /// let def = OptionDef::new(Some('j'), Some("jobs"), true);
    /// assert_eq!(def.short, Some('j'));
    /// assert_eq!(def.long.as_deref(), Some("jobs"));
    /// assert!(def.takes_value);
    /// ```
    pub fn new(short: Option<char>, long: Option<&str>, takes_value: bool) -> Self {
        Self {
            short,
            long: long.map(String::from),
            takes_value,
            description: None,
        }
    }

    /// Creates a flag that is counted each time it appears.
    pub fn flag(short: Option<char>, long: Option<&str>) -> Self {
        Self::new(short, long, false)
    }

    /// Creates a flag that consumes the following token as its value.
    pub fn with_value(short: Option<char>, long: Option<&str>) -> Self {
        Self::new(short, long, true)
    }

    /// Creates the catch-all definition that receives a bare value.
    ///
    /// # Examples
    ///
    /// ```
    /// use optbind_core::OptionDef;
    ///
    /// let def = OptionDef::positional();
    /// assert!(def.short.is_none() && def.long.is_none());
    /// assert!(def.takes_value);
    /// ```
    pub fn positional() -> Self {
        Self::new(None, None, true)
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Returns `true` if this definition receives bare values.
    pub fn is_catch_all(&self) -> bool {
        self.short.is_none() && self.long.is_none() && self.takes_value
    }

    /// Checks whether `-c` selects this definition.
    pub fn matches_short(&self, c: char) -> bool {
        self.short == Some(c)
    }

    /// Checks whether `--name` selects this definition.
    ///
    /// The comparison is exact, so an empty long form is selected by a bare
    /// `--`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optbind_core::OptionDef;
    ///
    /// let def = OptionDef::flag(None, Some("dry-run"));
    /// assert!(def.matches_long("dry-run"));
    /// assert!(!def.matches_long("dry"));
    /// assert!(!def.matches_long("DRY-RUN"));
    /// ```
    pub fn matches_long(&self, name: &str) -> bool {
        self.long.as_deref() == Some(name)
    }

    /// Returns the name used when reporting this definition.
    ///
    /// The long form is preferred, then the short form, and catch-alls are
    /// reported as [`POSITIONAL_NAME`].
    ///
    /// # Examples
    ///
    /// ```
    /// use optbind_core::{OptionDef, POSITIONAL_NAME};
    ///
    /// assert_eq!(OptionDef::flag(Some('q'), Some("quiet")).canonical_name(), "--quiet");
    /// assert_eq!(OptionDef::flag(Some('q'), None).canonical_name(), "-q");
    /// assert_eq!(OptionDef::positional().canonical_name(), POSITIONAL_NAME);
    /// ```
    pub fn canonical_name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => POSITIONAL_NAME.to_string(),
        }
    }
}

/// Result recorded for one definition during a parse.
///
/// Flags without a value count their occurrences; value-taking definitions
/// hold the last value they consumed. A definition that never matched stays
/// [`Unset`](Binding::Unset).
///
/// # Examples
///
/// ```
/// use optbind_core::Binding;
///
/// let mut binding = Binding::default();
/// assert!(!binding.is_set());
///
/// binding.increment();
/// binding.increment();
/// assert_eq!(binding.count(), 2);
///
/// let value = Binding::Value("out.txt".into());
/// assert_eq!(value.value(), Some("out.txt"));
/// assert_eq!(value.count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Binding {
    /// Not matched by any token.
    #[default]
    Unset,
    /// Number of times a flag without value appeared.
    Count(u32),
    /// Token consumed as the value.
    Value(String),
}

impl Binding {
    /// Returns `true` unless the binding is [`Unset`](Binding::Unset).
    pub fn is_set(&self) -> bool {
        !matches!(self, Binding::Unset)
    }

    /// Returns the occurrence count, or `0` for anything but a count.
    pub fn count(&self) -> u32 {
        match self {
            Binding::Count(n) => *n,
            _ => 0,
        }
    }

    /// Returns the bound value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Binding::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Records one more occurrence.
    ///
    /// An unset binding becomes `Count(1)`. The count saturates instead of
    /// wrapping.
    pub fn increment(&mut self) {
        *self = match *self {
            Binding::Count(n) => Binding::Count(n.saturating_add(1)),
            _ => Binding::Count(1),
        };
    }

    /// Stores `value`, replacing whatever was recorded before.
    pub fn bind(&mut self, value: impl Into<String>) {
        *self = Binding::Value(value.into());
    }
}
