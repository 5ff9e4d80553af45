//! The table driven parameter parser
//!
//! A [`ParameterParser`] owns nothing but a [`DescriptorTable`] and the
//! record's default values. Each parse resets a record to the defaults,
//! then, for every option the [`Scanner`] finds, looks up the descriptor by
//! its short flag, converts the value with the descriptor's kind and stores
//! it. The first failure stops the parse.

use std::ffi::OsString;

use crate::{
    apply, convert, scanner::Scanner, DescriptorTable, HelpText, InvocationError, OptionSpec,
    ParseError,
};

/// The outcome of a successful [`ParameterParser::parse`]
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<R> {
    /// The record, defaults overwritten by the flags given
    pub params: R,
    /// The arguments that were not options, in order
    pub operands: Vec<String>,
}

/// Parses argument vectors into records of type `R`
///
/// ```
/// use paramtab::{DescriptorTable, ParameterDescriptor, ParameterParser};
///
/// #[derive(Clone, Debug, Default)]
/// struct Params {
///     verbose: bool,
///     retries: u8,
/// }
///
/// static DESCRIPTORS: [ParameterDescriptor<Params>; 3] = [
///     ParameterDescriptor::flag('v', "verbose", "Talk more.", |params: &mut Params| {
///         &mut params.verbose
///     }),
///     ParameterDescriptor::uint8('r', "retries", "Retry count.", |params: &mut Params| {
///         &mut params.retries
///     }),
///     ParameterDescriptor::sentinel(),
/// ];
///
/// let table = DescriptorTable::new(&DESCRIPTORS).expect("table is valid");
/// let parser = ParameterParser::new(table, Params { verbose: false, retries: 3 });
///
/// let parsed = parser.parse(&["prog", "-v", "input.txt"]).expect("arguments are valid");
/// assert!(parsed.params.verbose);
/// assert_eq!(parsed.params.retries, 3);
/// assert_eq!(parsed.operands, ["input.txt"]);
///
/// assert!(parser.parse(&["prog", "--retries", "300"]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ParameterParser<'a, R> {
    /// What to recognize
    table: DescriptorTable<'a, R>,
    /// What every parse starts from
    defaults: R,
}

impl<'a, R: Clone> ParameterParser<'a, R> {
    /// Create a parser for `table`, resetting records to `defaults`
    #[must_use]
    pub const fn new(table: DescriptorTable<'a, R>, defaults: R) -> Self {
        Self { table, defaults }
    }

    /// The table this parser recognizes
    #[must_use]
    pub const fn table(&self) -> DescriptorTable<'a, R> {
        self.table
    }

    /// The values a record holds before any flag is applied
    #[must_use]
    pub const fn defaults(&self) -> &R {
        &self.defaults
    }

    /// Parse `args` into a fresh record.
    ///
    /// `args` starts with the program name, like [`std::env::args`]. The
    /// record is only returned when the whole vector was parsed.
    ///
    /// # Errors
    /// The first [`ParseError`] met, see [`Self::parse_into`].
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<Parsed<R>, ParseError> {
        let mut params = self.defaults.clone();
        let operands = self.parse_into(args, &mut params)?;
        Ok(Parsed { params, operands })
    }

    /// Parse `args` into `record`, returning the operands.
    ///
    /// `record` is reset to the defaults first. On failure, the flags applied
    /// before the failing one are left in `record`.
    ///
    /// # Errors
    /// - [`ParseError::InvalidInvocation`] if `args` does not even hold the
    ///   program name. `record` is not touched in this case.
    /// - [`ParseError::SpecBuildFailure`] if the option specification can not
    ///   be allocated
    /// - [`ParseError::UnknownFlag`], [`ParseError::AmbiguousFlag`],
    ///   [`ParseError::MissingValue`] or [`ParseError::UnexpectedValue`] when
    ///   an option can not be scanned
    /// - [`ParseError::Conversion`] when a value is rejected by its kind
    pub fn parse_into<S: AsRef<str>>(
        &self,
        args: &[S],
        record: &mut R,
    ) -> Result<Vec<String>, ParseError> {
        if args.is_empty() {
            return Err(InvocationError::EmptyArgv.into());
        }

        record.clone_from(&self.defaults);
        tracing::trace!("record reset to defaults");

        let spec = OptionSpec::build(self.table)?;
        let mut scanner = Scanner::new(args, &spec);

        for option in scanner.by_ref() {
            let option = option?;
            let Some(descriptor) = self.table.find_by_short(option.code) else {
                return Err(ParseError::UnknownFlag(option.flag));
            };

            let kind = descriptor.kind();
            let raw = if kind.takes_value() { option.value } else { None };
            let value = convert(kind, raw).map_err(|source| ParseError::Conversion {
                flag: option.flag.clone(),
                value: raw.unwrap_or_default().to_owned(),
                source,
            })?;

            tracing::debug!(flag = %option.flag, %kind, %value, "applying option");
            apply(descriptor, value, record);
        }

        Ok(scanner
            .into_operands()
            .into_iter()
            .map(str::to_owned)
            .collect())
    }

    /// The help screen of an application using this parser
    ///
    /// # Errors
    /// [`ParseError::SpecBuildFailure`] if the usage line can not be built.
    pub fn help<'t>(
        &self,
        app_name: &'t str,
        description: &'t str,
    ) -> Result<HelpText<'t, 'a, R>, ParseError> {
        Ok(HelpText::new(app_name, description, self.table)?)
    }
}

/// Turn the process arguments into UTF-8 strings for the parser.
///
/// # Errors
/// [`InvocationError::NotUnicode`], as a [`ParseError`], with the index of the
/// first argument that is not valid UTF-8.
pub fn collect_args<I>(args: I) -> Result<Vec<String>, ParseError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.into_string()
                .map_err(|_| ParseError::from(InvocationError::NotUnicode(index)))
        })
        .collect()
}
