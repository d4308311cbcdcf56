//! Parse errors and the list they are collected in.
//!
//! Parse errors never stop the scan. Each one is appended to an [`ErrorList`]
//! in the order the offending tokens were met, and the caller decides what to
//! do with them, typically rendering them with [`ErrorList::print`].

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A value-taking option was the last token.
    NoValue,
    /// A single hyphen followed by more than one character.
    ShortArgTooLong,
    /// A token consisting of a lone `-`.
    OnlyHyphenMinus,
    /// A short or long option not in the table.
    UnknownOption,
    /// A bare value with no free catch-all to receive it.
    ValueWithoutOption,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoValue => write!(f, "NO_VALUE"),
            Self::ShortArgTooLong => write!(f, "SHORT_ARG_TOO_LONG"),
            Self::OnlyHyphenMinus => write!(f, "ONLY_HYPHEN_MINUS"),
            Self::UnknownOption => write!(f, "UNKNOWN_OPTION"),
            Self::ValueWithoutOption => write!(f, "VALUE_WITHOUT_OPTION"),
        }
    }
}

/// One problem found while parsing, with the token that caused it.
///
/// The `Display` impl renders the message printed for the error, without a
/// trailing newline.
///
/// # Examples
///
/// ```
/// use optbind_parser::{ErrorKind, ParseError};
///
/// let err = ParseError::NoValue { flag: "--output".into() };
/// assert_eq!(err.kind(), ErrorKind::NoValue);
/// assert_eq!(err.subject(), Some("--output"));
/// assert_eq!(err.to_string(), "--output: no value found");
///
/// assert_eq!(ParseError::OnlyHyphenMinus.subject(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParseError {
    #[error("{flag}: no value found")]
    NoValue { flag: String },
    #[error("{flag}: more than 1 characters are not allowed with only 1 '-'")]
    ShortArgTooLong { flag: String },
    #[error("error: argument only consists of '-'")]
    OnlyHyphenMinus,
    #[error("{flag}: unknown option")]
    UnknownOption { flag: String },
    #[error("{value}: value without option")]
    ValueWithoutOption { value: String },
}

impl ParseError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoValue { .. } => ErrorKind::NoValue,
            Self::ShortArgTooLong { .. } => ErrorKind::ShortArgTooLong,
            Self::OnlyHyphenMinus => ErrorKind::OnlyHyphenMinus,
            Self::UnknownOption { .. } => ErrorKind::UnknownOption,
            Self::ValueWithoutOption { .. } => ErrorKind::ValueWithoutOption,
        }
    }

    /// Returns the offending token, if the error carries one.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::NoValue { flag }
            | Self::ShortArgTooLong { flag }
            | Self::UnknownOption { flag } => Some(flag),
            Self::ValueWithoutOption { value } => Some(value),
            Self::OnlyHyphenMinus => None,
        }
    }
}

/// Parse errors in scan order.
///
/// # Examples
///
/// ```
/// use optbind_parser::{ErrorKind, ErrorList, ParseError};
///
/// let mut errors = ErrorList::new();
/// errors.push(ParseError::OnlyHyphenMinus);
/// errors.push(ParseError::UnknownOption { flag: "-q".into() });
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(
///     errors.kinds().collect::<Vec<_>>(),
///     vec![ErrorKind::OnlyHyphenMinus, ErrorKind::UnknownOption]
/// );
///
/// let mut out = Vec::new();
/// errors.print(&mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "error: argument only consists of '-'\n-q: unknown option\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorList {
    errors: Vec<ParseError>,
}

impl ErrorList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error.
    pub fn push(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no errors were recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over errors in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.errors.iter()
    }

    /// Iterates over the categories of the errors in scan order.
    pub fn kinds(&self) -> impl Iterator<Item = ErrorKind> + '_ {
        self.errors.iter().map(ParseError::kind)
    }

    /// Returns the errors as a slice.
    pub fn as_slice(&self) -> &[ParseError] {
        &self.errors
    }

    /// Writes one line per error to `out`.
    ///
    /// Writing stops at the first failed write and that failure is returned,
    /// so no error is silently dropped from the output.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by `out`.
    pub fn print<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for error in &self.errors {
            writeln!(out, "{error}")?;
        }
        Ok(())
    }
}

impl From<Vec<ParseError>> for ErrorList {
    fn from(errors: Vec<ParseError>) -> Self {
        Self { errors }
    }
}

impl From<ErrorList> for Vec<ParseError> {
    fn from(list: ErrorList) -> Self {
        list.errors
    }
}

impl IntoIterator for ErrorList {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{error}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that accepts a fixed number of bytes, then fails.
    struct FailingSink {
        remaining: usize,
        written: Vec<u8>,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            let n = buf.len().min(self.remaining);
            self.remaining -= n;
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample() -> ErrorList {
        vec![
            ParseError::NoValue {
                flag: "-o".to_string(),
            },
            ParseError::ShortArgTooLong {
                flag: "-ab".to_string(),
            },
            ParseError::OnlyHyphenMinus,
            ParseError::UnknownOption {
                flag: "--foo".to_string(),
            },
            ParseError::ValueWithoutOption {
                value: "extra".to_string(),
            },
        ]
        .into()
    }

    #[test]
    fn test_messages_per_kind() {
        let rendered: Vec<String> = sample().iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "-o: no value found",
                "-ab: more than 1 characters are not allowed with only 1 '-'",
                "error: argument only consists of '-'",
                "--foo: unknown option",
                "extra: value without option",
            ]
        );
    }

    #[test]
    fn test_print_stops_at_first_failed_write() {
        let errors = sample();
        let mut sink = FailingSink {
            remaining: 0,
            written: Vec::new(),
        };

        let err = errors.print(&mut sink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(sink.written.is_empty());
    }

    #[test]
    fn test_print_failure_mid_record_keeps_earlier_lines() {
        let errors = sample();
        let budget = "-o: no value found\n-ab".len();
        let mut sink = FailingSink {
            remaining: budget,
            written: Vec::new(),
        };

        let err = errors.print(&mut sink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(
            String::from_utf8(sink.written).unwrap(),
            "-o: no value found\n-ab"
        );
    }

    #[test]
    fn test_print_empty_list_writes_nothing() {
        let mut out = Vec::new();
        ErrorList::new().print(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_display_matches_print() {
        let errors = sample();
        let mut out = Vec::new();
        errors.print(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), errors.to_string());
    }

    #[test]
    fn test_error_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json[0], serde_json::json!({"kind": "NO_VALUE", "flag": "-o"}));
        assert_eq!(json[2], serde_json::json!({"kind": "ONLY_HYPHEN_MINUS"}));
        assert_eq!(
            json[4],
            serde_json::json!({"kind": "VALUE_WITHOUT_OPTION", "value": "extra"})
        );
    }

    #[test]
    fn test_kind_display_matches_serde_name() {
        let kinds: Vec<ErrorKind> = sample().kinds().collect();
        let distinct: std::collections::HashSet<_> = kinds.iter().copied().collect();
        assert_eq!(distinct.len(), 5);

        for error in &sample() {
            let kind = error.kind();
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.to_string());
            assert_eq!(serde_json::to_value(error).unwrap()["kind"], kind.to_string());
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::ShortArgTooLong.to_string(), "SHORT_ARG_TOO_LONG");
        assert_eq!(
            serde_json::to_value(ErrorKind::ValueWithoutOption).unwrap(),
            "VALUE_WITHOUT_OPTION"
        );
    }
}
