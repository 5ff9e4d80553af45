//! The option specification derived from a descriptor table
//!
//! This is what the [`crate::scanner::Scanner`] understands: a getopt style
//! short option string (`"hvx:s:"`, where `:` marks a flag taking a value)
//! and a long option table. Both are rebuilt from the table for every parse.

use std::collections::TryReserveError;

use crate::DescriptorTable;

/// Whether an option consumes a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasArg {
    /// The option is a plain switch
    No,
    /// The option needs exactly one value
    Required,
}

/// One entry of the long option table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongOption<'a> {
    /// The name, without the leading `--`
    pub name: &'a str,
    /// Whether a value must follow
    pub has_arg: HasArg,
    /// The short flag this option is reported as
    pub val: char,
}

/// Short option string and long option table for one parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec<'a> {
    /// getopt style short option string
    short: String,
    /// Long options, in table order
    long: Vec<LongOption<'a>>,
}

impl<'a> OptionSpec<'a> {
    /// Derive the option specification from `table`, in declaration order.
    ///
    /// # Errors
    /// Fails only when the storage for the specification can not be
    /// reserved.
    pub fn build<R>(table: DescriptorTable<'a, R>) -> Result<Self, TryReserveError> {
        let mut short = String::new();
        // every short flag is a single ASCII byte, plus one byte for `:`
        short.try_reserve_exact(table.len() * 2)?;
        let mut long = Vec::new();
        long.try_reserve_exact(table.len())?;

        for descriptor in table.iter() {
            let has_arg = if descriptor.kind().takes_value() {
                HasArg::Required
            } else {
                HasArg::No
            };

            short.push(descriptor.short_flag());
            if has_arg == HasArg::Required {
                short.push(':');
            }

            long.push(LongOption {
                name: descriptor.long_flag(),
                has_arg,
                val: descriptor.short_flag(),
            });
        }

        tracing::trace!(short = %short, long = long.len(), "built option specification");
        Ok(Self { short, long })
    }

    /// The short option string
    #[must_use]
    pub fn short_options(&self) -> &str {
        &self.short
    }

    /// The long option table
    #[must_use]
    pub fn long_options(&self) -> &[LongOption<'a>] {
        &self.long
    }

    /// Look up a short option character in the short option string
    #[must_use]
    pub fn short_option(&self, code: char) -> Option<HasArg> {
        let mut chars = self.short.chars().peekable();
        while let Some(option) = chars.next() {
            let has_arg = if chars.next_if_eq(&':').is_some() {
                HasArg::Required
            } else {
                HasArg::No
            };
            if option == code {
                return Some(has_arg);
            }
        }
        None
    }

    /// Resolve a long option name the way `getopt_long` does.
    ///
    /// An exact match always wins. Otherwise `name` may be an abbreviation of
    /// exactly one long option. If it abbreviates several, all of them are
    /// returned as the error.
    ///
    /// # Errors
    /// Returns the candidate names when `name` is an ambiguous abbreviation.
    pub fn long_option(&self, name: &str) -> Result<Option<LongOption<'a>>, Vec<&'a str>> {
        if name.is_empty() {
            return Ok(None);
        }
        if let Some(exact) = self.long.iter().find(|option| option.name == name) {
            return Ok(Some(*exact));
        }

        let candidates: Vec<_> = self
            .long
            .iter()
            .filter(|option| option.name.starts_with(name))
            .collect();
        match candidates.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(**only)),
            [..] => Err(candidates.iter().map(|option| option.name).collect()),
        }
    }
}
