//! Command line scanner
//!
//! Walks an argument vector with an [`OptionSpec`] and yields the options it
//! recognizes, one at a time, with the same rules as GNU `getopt_long`:
//!
//! - `-x value`, `-xvalue` and clusters of switches such as `-hv`. A cluster
//!   may end with a flag taking a value (`-hx value`, `-hxvalue`).
//! - `--name value` and `--name=value`. Any unambiguous abbreviation of a long
//!   name is accepted.
//! - A flag taking a value consumes the next argument verbatim, even when it
//!   starts with `-`.
//! - Operands (arguments not starting with `-`, and a lone `-`) are skipped
//!   and kept aside. `--` ends the scan, everything after it is an operand.
//!
//! The first argument is the program name and is never scanned. After an
//! error the scanner yields nothing more.

use crate::{
    option_spec::{HasArg, OptionSpec},
    ParseError,
};

/// One option recognized by the [`Scanner`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedOption<'s> {
    /// The short flag the option is reported as, also for long options
    pub code: char,
    /// The flag as written by the user, `-x` or `--name` (never abbreviated)
    pub flag: String,
    /// The value token, for options taking one
    pub value: Option<&'s str>,
    /// Index in the argument vector where the option was found
    pub index: usize,
}

/// Iterator over the options of an argument vector
#[derive(Debug)]
pub struct Scanner<'s, 'a, S> {
    /// The argument vector, program name included
    args: &'s [S],
    /// What to recognize
    spec: &'s OptionSpec<'a>,
    /// Index of the next argument to look at
    next: usize,
    /// Argument index and byte offset of the rest of a short option cluster
    cluster: Option<(usize, usize)>,
    /// Operands met so far
    operands: Vec<&'s str>,
    /// Set at the end of the arguments or after an error
    done: bool,
}

impl<'s, 'a, S: AsRef<str>> Scanner<'s, 'a, S> {
    /// Create a scanner over `args`, skipping the program name
    #[must_use]
    pub const fn new(args: &'s [S], spec: &'s OptionSpec<'a>) -> Self {
        Self {
            args,
            spec,
            next: 1,
            cluster: None,
            operands: Vec::new(),
            done: false,
        }
    }

    /// The operands skipped so far, in order
    #[must_use]
    pub fn operands(&self) -> &[&'s str] {
        &self.operands
    }

    /// Consume the scanner, keeping the operands
    #[must_use]
    pub fn into_operands(self) -> Vec<&'s str> {
        self.operands
    }

    /// Find the next option, skipping operands
    fn scan(&mut self) -> Option<Result<ScannedOption<'s>, ParseError>> {
        if let Some((position, offset)) = self.cluster.take() {
            return Some(self.scan_short(position, offset));
        }

        let args = self.args;
        while let Some(arg) = args.get(self.next) {
            let position = self.next;
            self.next += 1;
            let text = arg.as_ref();

            if text == "--" {
                self.operands
                    .extend(args[self.next..].iter().map(|arg| arg.as_ref()));
                self.next = args.len();
                break;
            }
            if let Some(body) = text.strip_prefix("--") {
                return Some(self.scan_long(position, body));
            }
            if text.len() > 1 && text.starts_with('-') {
                return Some(self.scan_short(position, 1));
            }

            tracing::trace!(operand = text, "skipping operand");
            self.operands.push(text);
        }

        None
    }

    /// Take the argument following the current one as a value
    fn take_next_value(&mut self) -> Option<&'s str> {
        let args = self.args;
        let value = args.get(self.next)?.as_ref();
        self.next += 1;
        Some(value)
    }

    /// Scan the short option starting at byte `offset` of argument `position`
    fn scan_short(
        &mut self,
        position: usize,
        offset: usize,
    ) -> Result<ScannedOption<'s>, ParseError> {
        let args = self.args;
        let text = args[position].as_ref();
        let Some(code) = text.get(offset..).and_then(|rest| rest.chars().next()) else {
            return Err(ParseError::UnknownFlag(text.to_owned()));
        };
        let flag = format!("-{code}");
        let rest_offset = offset + code.len_utf8();
        let rest = &text[rest_offset..];

        let value = match self.spec.short_option(code) {
            None => return Err(ParseError::UnknownFlag(flag)),
            Some(HasArg::No) => {
                if !rest.is_empty() {
                    self.cluster = Some((position, rest_offset));
                }
                None
            }
            Some(HasArg::Required) if !rest.is_empty() => Some(rest),
            Some(HasArg::Required) => match self.take_next_value() {
                Some(value) => Some(value),
                None => return Err(ParseError::MissingValue(flag)),
            },
        };

        Ok(ScannedOption {
            code,
            flag,
            value,
            index: position,
        })
    }

    /// Scan the long option `body` (argument `position` without its `--`)
    fn scan_long(&mut self, position: usize, body: &'s str) -> Result<ScannedOption<'s>, ParseError> {
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let option = match self.spec.long_option(name) {
            Ok(Some(option)) => option,
            Ok(None) => return Err(ParseError::UnknownFlag(format!("--{name}"))),
            Err(candidates) => {
                return Err(ParseError::AmbiguousFlag {
                    flag: format!("--{name}"),
                    candidates: candidates.iter().map(|name| format!("--{name}")).collect(),
                })
            }
        };
        let flag = format!("--{}", option.name);

        let value = match (option.has_arg, inline) {
            (HasArg::No, None) => None,
            (HasArg::No, Some(value)) => {
                return Err(ParseError::UnexpectedValue {
                    flag,
                    value: value.to_owned(),
                })
            }
            (HasArg::Required, Some(value)) => Some(value),
            (HasArg::Required, None) => match self.take_next_value() {
                Some(value) => Some(value),
                None => return Err(ParseError::MissingValue(flag)),
            },
        };

        Ok(ScannedOption {
            code: option.val,
            flag,
            value,
            index: position,
        })
    }
}

impl<'s, S: AsRef<str>> Iterator for Scanner<'s, '_, S> {
    type Item = Result<ScannedOption<'s>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.scan();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DescriptorTable, ParameterDescriptor};

    #[derive(Default, Clone)]
    struct Record {
        help: bool,
        version: bool,
        size: u16,
        verbose: i8,
    }

    static ENTRIES: [ParameterDescriptor<Record>; 5] = [
        ParameterDescriptor::flag('h', "help", "Display help.", |record: &mut Record| {
            &mut record.help
        }),
        ParameterDescriptor::flag('v', "version", "Display version.", |record: &mut Record| {
            &mut record.version
        }),
        ParameterDescriptor::uint16('x', "size", "Size.", |record: &mut Record| {
            &mut record.size
        }),
        ParameterDescriptor::int8('V', "verbose", "Verbosity.", |record: &mut Record| {
            &mut record.verbose
        }),
        ParameterDescriptor::sentinel(),
    ];

    fn spec() -> OptionSpec<'static> {
        let table = DescriptorTable::new(&ENTRIES).expect("table should be valid");
        OptionSpec::build(table).expect("spec should build")
    }

    /// Scan `args`, returning the (flag, value) pairs, the first error and the operands
    fn scan(args: &[&str]) -> (Vec<(String, Option<String>)>, Option<ParseError>, Vec<String>) {
        let spec = spec();
        let mut scanner = Scanner::new(args, &spec);
        let mut options = Vec::new();
        let mut error = None;
        for item in scanner.by_ref() {
            match item {
                Ok(option) => options.push((option.flag, option.value.map(str::to_owned))),
                Err(err) => error = Some(err),
            }
        }
        let operands = scanner.operands().iter().map(|&operand| operand.to_owned()).collect();
        (options, error, operands)
    }

    fn pair(flag: &str, value: Option<&str>) -> (String, Option<String>) {
        (flag.to_owned(), value.map(str::to_owned))
    }

    #[test]
    fn program_name_is_not_scanned() {
        let (options, error, operands) = scan(&["-h"]);
        assert!(options.is_empty());
        assert!(error.is_none());
        assert!(operands.is_empty());
    }

    #[test]
    fn short_switches_alone_and_clustered() {
        let (options, error, _) = scan(&["prog", "-h", "-v"]);
        assert_eq!(options, vec![pair("-h", None), pair("-v", None)]);
        assert!(error.is_none());

        let (options, _, _) = scan(&["prog", "-vh"]);
        assert_eq!(options, vec![pair("-v", None), pair("-h", None)]);
    }

    #[test]
    fn short_values_attached_separate_and_after_a_cluster() {
        let (options, _, _) = scan(&["prog", "-x10"]);
        assert_eq!(options, vec![pair("-x", Some("10"))]);

        let (options, _, _) = scan(&["prog", "-x", "10"]);
        assert_eq!(options, vec![pair("-x", Some("10"))]);

        let (options, _, _) = scan(&["prog", "-hx", "10", "-hvx7"]);
        assert_eq!(
            options,
            vec![
                pair("-h", None),
                pair("-x", Some("10")),
                pair("-h", None),
                pair("-v", None),
                pair("-x", Some("7")),
            ]
        );
    }

    #[test]
    fn values_may_look_like_flags() {
        let (options, error, _) = scan(&["prog", "-V", "-5", "--size", "--help"]);
        assert_eq!(options, vec![pair("-V", Some("-5")), pair("--size", Some("--help"))]);
        assert!(error.is_none());
    }

    #[test]
    fn long_values_inline_separate_and_abbreviated() {
        let (options, _, _) = scan(&["prog", "--size=10", "--size", "11", "--si", "12", "--verb=3"]);
        assert_eq!(
            options,
            vec![
                pair("--size", Some("10")),
                pair("--size", Some("11")),
                pair("--size", Some("12")),
                pair("--verbose", Some("3")),
            ]
        );

        let (options, _, _) = scan(&["prog", "--size="]);
        assert_eq!(options, vec![pair("--size", Some(""))]);
    }

    #[test]
    fn long_options_report_their_short_code() {
        let spec = spec();
        let args = ["prog", "--version"];
        let option = Scanner::new(&args, &spec)
            .next()
            .expect("an option should be found")
            .expect("scanning should succeed");
        assert_eq!(option.code, 'v');
        assert_eq!(option.index, 1);
    }

    #[test]
    fn missing_values_are_reported() {
        let (_, error, _) = scan(&["prog", "-x"]);
        assert_eq!(error, Some(ParseError::MissingValue("-x".into())));

        let (_, error, _) = scan(&["prog", "-h", "--size"]);
        assert_eq!(error, Some(ParseError::MissingValue("--size".into())));
    }

    #[test]
    fn switches_reject_inline_values() {
        let (_, error, _) = scan(&["prog", "--help=yes"]);
        assert_eq!(
            error,
            Some(ParseError::UnexpectedValue {
                flag: "--help".into(),
                value: "yes".into()
            })
        );
    }

    #[test]
    fn unknown_flags_stop_the_scan() {
        let (options, error, _) = scan(&["prog", "-z", "-h"]);
        assert!(options.is_empty());
        assert_eq!(error, Some(ParseError::UnknownFlag("-z".into())));

        let (options, error, _) = scan(&["prog", "-hz", "-v"]);
        assert_eq!(options, vec![pair("-h", None)]);
        assert_eq!(error, Some(ParseError::UnknownFlag("-z".into())));

        let (_, error, _) = scan(&["prog", "--nope", "-h"]);
        assert_eq!(error, Some(ParseError::UnknownFlag("--nope".into())));

        let (_, error, _) = scan(&["prog", "-:"]);
        assert_eq!(error, Some(ParseError::UnknownFlag("-:".into())));
    }

    #[test]
    fn ambiguous_abbreviations_are_reported() {
        let (_, error, _) = scan(&["prog", "--ver"]);
        assert_eq!(
            error,
            Some(ParseError::AmbiguousFlag {
                flag: "--ver".into(),
                candidates: vec!["--version".into(), "--verbose".into()],
            })
        );
    }

    #[test]
    fn operands_are_skipped_and_kept() {
        let (options, error, operands) =
            scan(&["prog", "input", "-h", "-", "--", "-v", "output"]);
        assert_eq!(options, vec![pair("-h", None)]);
        assert!(error.is_none());
        assert_eq!(operands, vec!["input", "-", "-v", "output"]);
    }
}
