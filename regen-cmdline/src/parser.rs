//! A parser for binding tokens to the declared arguments.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::lexer;
use crate::spec::ArgumentSet;

/// Defines the possible errors that may occur during binding of arguments.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The token is only made of the prefix character.
    #[error("invalid parameter: \"{0}\"")]
    InvalidParameterToken(String),

    /// The argument is not defined.
    #[error("unknown argument \"{0}\"")]
    UnknownArgument(String),

    /// The argument is given more than once.
    #[error("duplicate parameter: \"{0}\"")]
    DuplicateArgument(String),

    /// The argument expects a value, but is followed by another argument or by nothing.
    #[error("argument value missing: \"{0}\"")]
    MissingValue(String),

    /// A value is given where an argument name is expected, usually an unquoted value with
    /// spaces.
    #[error("parameter expected, have paths been quote-enclosed? \"{0}\"")]
    ParameterExpectedButValueGiven(String),

    /// The argument is required but has not been given.
    #[error("required parameter missing: \"{0}\"")]
    RequiredArgumentMissing(String),

    /// An error comes from the splitting of the command line.
    #[error(transparent)]
    Lexer(#[from] lexer::Error),
}

/// The value of an argument cannot be converted to the destination type. Only returned by
/// [`ParsedArgs::try_get_one`], never by binding.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("invalid value for argument \"{0}\"")]
pub struct InvalidValue(pub String);

/// Defines the state of one declared argument after binding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundArgument {
    value: Option<String>,
    specified: bool,
}

impl BoundArgument {
    /// The value as given on the command line. Always `None` for flag-only arguments.
    #[inline(always)]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Check if the argument name appeared on the command line.
    #[inline(always)]
    pub fn is_specified(&self) -> bool {
        self.specified
    }
}

/// Defines the result of argument binding. This is a key-value store that offers a look-up
/// over the declared arguments, by primary or alias name.
#[derive(Clone, Debug)]
pub struct ParsedArgs<'s> {
    set: &'s ArgumentSet,
    bound: Vec<BoundArgument>,
}

impl<'s> ParsedArgs<'s> {
    /// Split the raw command line, then bind its tokens. The first token is the program path.
    pub fn from_command_line(input: &str, set: &'s ArgumentSet) -> Result<Self, Error> {
        let tokens = lexer::tokenize(input)?;
        Self::try_parse(tokens, set)
    }

    /// Try to bind the tokens to the declared arguments. The first token is the program path
    /// and is skipped.
    pub fn try_parse<I>(tokens: I, set: &'s ArgumentSet) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut bound = vec![BoundArgument::default(); set.len()];

        // Position of the argument waiting for its value.
        let mut pending = None;

        for token in tokens.into_iter().skip(1) {
            let token = token.as_ref();

            if let Some(name) = token.strip_prefix(set.prefix()) {
                if name.is_empty() {
                    return Err(Error::InvalidParameterToken(token.to_string()));
                }

                if let Some(pos) = pending {
                    return Err(missing_value(set, pos));
                }

                let name = name.to_lowercase();

                let Some(pos) = set.position(&name) else {
                    return Err(Error::UnknownArgument(name));
                };

                let arg = &mut bound[pos];
                if arg.specified {
                    return Err(Error::DuplicateArgument(name));
                }
                arg.specified = true;

                if set.entry(pos).kind().takes_value() {
                    pending = Some(pos);
                }
            } else if let Some(pos) = pending.take() {
                bound[pos].value = Some(token.to_string());
            } else {
                return Err(Error::ParameterExpectedButValueGiven(token.to_string()));
            }
        }

        if let Some(pos) = pending {
            return Err(missing_value(set, pos));
        }

        if let Some((spec, _)) = set
            .iter()
            .zip(&bound)
            .find(|(spec, arg)| spec.is_required() && !arg.specified)
        {
            return Err(Error::RequiredArgumentMissing(
                spec.primary_name().to_string(),
            ));
        }

        Ok(ParsedArgs { set, bound })
    }

    /// Check if the argument with the given name has been specified.
    #[inline(always)]
    pub fn contains(&self, name: &str) -> bool {
        self.bound(name).is_some_and(BoundArgument::is_specified)
    }

    /// Get the raw value of the argument with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bound(name).and_then(BoundArgument::value)
    }

    /// Get the binding state of a declared argument.
    pub fn bound(&self, name: &str) -> Option<&BoundArgument> {
        self.set.position(name).map(|pos| &self.bound[pos])
    }

    /// Iterate over every declared argument by primary name, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoundArgument)> {
        self.set
            .iter()
            .map(|spec| spec.primary_name())
            .zip(self.bound.iter())
    }

    /// Try to get and parse the argument value if any.
    pub fn try_get_one<T>(&self, name: &str) -> Result<Option<T>, InvalidValue>
    where
        T: FromStr,
    {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };

        value
            .parse::<T>()
            .map(Some)
            // The value cannot be parsed to the target type `T`.
            .map_err(|_| InvalidValue(name.to_lowercase()))
    }
}

fn missing_value(set: &ArgumentSet, pos: usize) -> Error {
    Error::MissingValue(set.entry(pos).primary_name().to_string())
}
