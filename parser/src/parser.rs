//! Argument parser.
//!
//! Single left-to-right pass over the tokens. Each token is classified, the
//! matching definition is looked up in table order, and the result is bound
//! into a fresh [`ParseOutcome`]. Problems are recorded as [`ParseError`]s and
//! the scan always continues to the last token.

use optbind_core::{Binding, OptionId, OptionTable};
use tracing::{debug, trace};

use crate::error::{ErrorList, ParseError};
use crate::outcome::ParseOutcome;
use crate::token::{Token, classify};

struct Parser<'t> {
    table: &'t OptionTable,
    bindings: Vec<Binding>,
    errors: ErrorList,
}

impl<'t> Parser<'t> {
    fn new(table: &'t OptionTable) -> Self {
        Self {
            table,
            bindings: vec![Binding::Unset; table.len()],
            errors: ErrorList::new(),
        }
    }

    fn report(&mut self, error: ParseError) {
        debug!(kind = %error.kind(), subject = ?error.subject(), "Recorded parse error");
        self.errors.push(error);
    }

    fn parse_value(&mut self, value: &str) {
        // Catch-alls are filled in table order, one value each.
        let free = self
            .table
            .catch_alls()
            .find(|id| !self.bindings[id.index()].is_set());

        match free {
            Some(id) => {
                trace!(slot = id.index(), value, "Bound positional value");
                self.bindings[id.index()].bind(value);
            }
            None => self.report(ParseError::ValueWithoutOption {
                value: value.to_string(),
            }),
        }
    }

    fn parse_flag<I, S>(&mut self, found: Option<OptionId>, flag_arg: &str, tokens: &mut I)
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(id) = found else {
            self.report(ParseError::UnknownOption {
                flag: flag_arg.to_string(),
            });
            return;
        };

        let takes_value = self
            .table
            .get(id)
            .is_some_and(|def| def.takes_value);

        if !takes_value {
            trace!(slot = id.index(), flag = flag_arg, "Counted flag");
            self.bindings[id.index()].increment();
            return;
        }

        // The next token is the value, whatever it looks like.
        match tokens.next() {
            Some(value) => {
                let value = value.as_ref();
                trace!(slot = id.index(), flag = flag_arg, value, "Bound flag value");
                self.bindings[id.index()].bind(value);
            }
            None => self.report(ParseError::NoValue {
                flag: flag_arg.to_string(),
            }),
        }
    }

    fn run<I, S>(mut self, mut tokens: I) -> ParseOutcome
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scanned = 0usize;

        while let Some(arg) = tokens.next() {
            scanned += 1;
            let arg = arg.as_ref();

            match classify(arg) {
                Token::Value(value) => self.parse_value(value),
                Token::LoneHyphen => self.report(ParseError::OnlyHyphenMinus),
                Token::ShortTooLong => self.report(ParseError::ShortArgTooLong {
                    flag: arg.to_string(),
                }),
                Token::Short(c) => {
                    let found = self.table.find_short(c);
                    self.parse_flag(found, arg, &mut tokens);
                }
                Token::Long(name) => {
                    let found = self.table.find_long(name);
                    self.parse_flag(found, arg, &mut tokens);
                }
            }
        }

        debug!(
            arguments = scanned,
            options = self.table.len(),
            errors = self.errors.len(),
            "Parsed arguments"
        );

        ParseOutcome::new(self.bindings, self.errors)
    }
}

/// Parses `tokens` against `table`.
///
/// `tokens` must not include the program name. The table is only read; the
/// returned [`ParseOutcome`] holds one binding per definition plus every
/// error found, in scan order. Parsing never fails and never stops early.
///
/// # Examples
///
/// ```
/// use optbind_core::{OptionDef, OptionTable};
/// use optbind_parser::{ErrorKind, parse};
///
/// let mut table = OptionTable::new();
/// let output = table.push(OptionDef::with_value(None, Some("output")));
/// let input = table.push(OptionDef::positional());
///
/// let outcome = parse(["in.txt", "--output", "out.txt", "extra", "-"], &table);
/// assert_eq!(outcome.value(input), Some("in.txt"));
/// assert_eq!(outcome.value(output), Some("out.txt"));
/// assert_eq!(
///     outcome.errors().kinds().collect::<Vec<_>>(),
///     vec![ErrorKind::ValueWithoutOption, ErrorKind::OnlyHyphenMinus]
/// );
/// ```
pub fn parse<I>(tokens: I, table: &OptionTable) -> ParseOutcome
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Parser::new(table).run(tokens.into_iter())
}

/// Parses the arguments of the current process against `table`.
///
/// The program name is skipped. Arguments that are not valid UTF-8 are
/// converted lossily.
pub fn parse_env(table: &OptionTable) -> ParseOutcome {
    let tokens = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    parse(tokens, table)
}
