//! Errors reported while parsing parameters

use std::collections::TryReserveError;

use paramtab_utils::parse_number::ParseNumberError;
use thiserror::Error;

use crate::ParameterKind;

/// Why a raw value could not be converted to its parameter's kind
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// No value, or an empty one, was given.
    #[error("empty value")]
    EmptyOrNullInput,
    /// The value was not entirely a number.
    #[error("unexpected characters after the number")]
    TrailingGarbage,
    /// The number does not fit the parameter's kind.
    #[error("value out of range for `{0}`")]
    OutOfRange(ParameterKind),
    /// The kind has no conversion routine (the table sentinel).
    #[error("`{0}` parameters can not hold a value")]
    NoConverter(ParameterKind),
}

impl ConversionError {
    /// Attach the kind being converted to a number parsing failure
    #[must_use]
    pub const fn from_parse_number(error: ParseNumberError, kind: ParameterKind) -> Self {
        match error {
            ParseNumberError::Empty => Self::EmptyOrNullInput,
            ParseNumberError::TrailingGarbage => Self::TrailingGarbage,
            ParseNumberError::OutOfRange => Self::OutOfRange(kind),
        }
    }
}

/// Why the argument vector itself was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    /// Not even the program name was passed.
    #[error("the argument vector is empty")]
    EmptyArgv,
    /// An argument is not valid UTF-8.
    #[error("argument {0} is not valid UTF-8")]
    NotUnicode(usize),
}

/// The first failure met by a parse
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The argument vector was unusable.
    #[error("invalid invocation")]
    InvalidInvocation(#[from] InvocationError),
    /// The option specification could not be allocated.
    #[error("unable to build the option specification")]
    SpecBuildFailure(#[from] TryReserveError),
    /// An option matched no descriptor.
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),
    /// A long option abbreviation matched several descriptors.
    #[error("ambiguous flag `{flag}`, could be one of: {}", candidates.join(", "))]
    AmbiguousFlag {
        flag: String,
        candidates: Vec<String>,
    },
    /// A flag needing a value was the last argument.
    #[error("flag `{0}` requires a value")]
    MissingValue(String),
    /// A `--flag=value` was given for a flag without value.
    #[error("flag `{flag}` does not take a value, got `{value}`")]
    UnexpectedValue { flag: String, value: String },
    /// A value was rejected by its kind's conversion.
    #[error("invalid value `{value}` for flag `{flag}`")]
    Conversion {
        flag: String,
        value: String,
        #[source]
        source: ConversionError,
    },
}
