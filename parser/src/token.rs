//! Token classification.

/// Shape of a single argument token.
///
/// Borrowed payloads point into the classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Token that does not start with `-`.
    Value(&'a str),
    /// `-c`, carrying `c`.
    Short(char),
    /// `--name`, carrying `name` (possibly empty).
    Long(&'a str),
    /// Exactly `-`.
    LoneHyphen,
    /// `-` followed by more than one character, such as `-abc`.
    ShortTooLong,
}

/// Classifies one argument token.
///
/// Characters are Unicode scalar values, so `-é` is a short option. An empty
/// token does not start with `-` and therefore classifies as a value.
///
/// # Examples
///
/// ```
/// use optbind_parser::{Token, classify};
///
/// assert_eq!(classify("file.txt"), Token::Value("file.txt"));
/// assert_eq!(classify("-v"), Token::Short('v'));
/// assert_eq!(classify("--output"), Token::Long("output"));
/// assert_eq!(classify("--"), Token::Long(""));
/// assert_eq!(classify("-"), Token::LoneHyphen);
/// assert_eq!(classify("-abc"), Token::ShortTooLong);
/// ```
pub fn classify(token: &str) -> Token<'_> {
    let Some(rest) = token.strip_prefix('-') else {
        return Token::Value(token);
    };

    if let Some(long) = rest.strip_prefix('-') {
        return Token::Long(long);
    }

    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Token::LoneHyphen,
        (Some(c), None) => Token::Short(c),
        (Some(_), Some(_)) => Token::ShortTooLong,
    }
}
