//! The validated, sentinel-terminated descriptor table

use std::{collections::HashSet, fmt};

use thiserror::Error;

use crate::{ParameterDescriptor, ParameterKind};

/// Ways a list of descriptors can fail to be a valid table
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table does not end with a sentinel.
    #[error("descriptor table is not terminated by a sentinel")]
    MissingSentinel,
    /// A sentinel appears before the last entry.
    #[error("sentinel found at entry {0}, before the end of the table")]
    MisplacedSentinel(usize),
    /// Two descriptors share a short flag.
    #[error("short flag `-{0}` is declared more than once")]
    DuplicateShortFlag(char),
    /// Two descriptors share a long flag.
    #[error("long flag `--{0}` is declared more than once")]
    DuplicateLongFlag(&'static str),
    /// The short flag can not be scanned as an option character.
    #[error("`{0:?}` can not be used as a short flag")]
    InvalidShortFlag(char),
    /// The long flag is empty.
    #[error("short flag `-{0}` has an empty long flag")]
    EmptyLongFlag(char),
    /// The descriptor's field does not have the size its kind stores.
    #[error("flag `-{flag}` of kind `{kind}` expects a {expected} byte field, got {got} bytes")]
    SizeMismatch {
        flag: char,
        kind: ParameterKind,
        expected: usize,
        got: usize,
    },
    /// The descriptor's field has the right size but another type.
    #[error("flag `-{flag}` of kind `{kind}` can not be stored in a `{location}` field")]
    LocationMismatch {
        flag: char,
        kind: ParameterKind,
        location: &'static str,
    },
}

/// An ordered list of [`ParameterDescriptor`]s that ends with exactly one
/// sentinel and satisfies every table invariant.
///
/// The table only borrows its descriptors, so it is cheap to copy and can be
/// shared by any number of parses.
pub struct DescriptorTable<'a, R> {
    /// The entries, sentinel included
    entries: &'a [ParameterDescriptor<R>],
}

impl<'a, R> DescriptorTable<'a, R> {
    /// Validate `entries` as a table.
    ///
    /// # Errors
    /// Returns the first [`TableError`] found, scanning in declaration order.
    pub fn new(entries: &'a [ParameterDescriptor<R>]) -> Result<Self, TableError> {
        let Some((last, flags)) = entries.split_last() else {
            return Err(TableError::MissingSentinel);
        };
        if !last.is_sentinel() {
            return Err(TableError::MissingSentinel);
        }

        let mut short_flags = HashSet::new();
        let mut long_flags = HashSet::new();
        for (index, descriptor) in flags.iter().enumerate() {
            if descriptor.is_sentinel() {
                return Err(TableError::MisplacedSentinel(index));
            }

            let short = descriptor.short_flag();
            if !is_valid_short_flag(short) {
                return Err(TableError::InvalidShortFlag(short));
            }
            if descriptor.long_flag().is_empty() {
                return Err(TableError::EmptyLongFlag(short));
            }
            if !short_flags.insert(short) {
                return Err(TableError::DuplicateShortFlag(short));
            }
            if !long_flags.insert(descriptor.long_flag()) {
                return Err(TableError::DuplicateLongFlag(descriptor.long_flag()));
            }

            let expected = descriptor.kind().storage_size().unwrap_or_default();
            if descriptor.size() != expected {
                return Err(TableError::SizeMismatch {
                    flag: short,
                    kind: descriptor.kind(),
                    expected,
                    got: descriptor.size(),
                });
            }
            if !descriptor.location().stores(descriptor.kind()) {
                return Err(TableError::LocationMismatch {
                    flag: short,
                    kind: descriptor.kind(),
                    location: descriptor.location().type_name(),
                });
            }
        }

        tracing::trace!(parameters = flags.len(), "descriptor table validated");
        Ok(Self { entries })
    }

    /// Number of real parameters, the sentinel excluded
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    /// Does this table declare no parameter at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the descriptors in declaration order, stopping at the sentinel
    pub fn iter(&self) -> impl Iterator<Item = &'a ParameterDescriptor<R>> {
        let entries = self.entries;
        entries
            .iter()
            .take_while(|descriptor| !descriptor.is_sentinel())
    }

    /// Find the descriptor declaring `short_flag`.
    ///
    /// The search is linear in declaration order and the first match wins.
    #[must_use]
    pub fn find_by_short(&self, short_flag: char) -> Option<&'a ParameterDescriptor<R>> {
        self.iter()
            .find(|descriptor| descriptor.short_flag() == short_flag)
    }

    /// All entries, sentinel included
    #[must_use]
    pub const fn entries(&self) -> &'a [ParameterDescriptor<R>] {
        self.entries
    }
}

/// Can `flag` be used as a single character option?
///
/// Option characters are printable ASCII. `-` would be read as the start of a
/// long option, `:` is the "takes a value" marker of the short option string
/// and `?` is what getopt reports for unknown options.
const fn is_valid_short_flag(flag: char) -> bool {
    flag.is_ascii_graphic() && !matches!(flag, '-' | ':' | '?')
}

impl<R> Clone for DescriptorTable<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<R> Copy for DescriptorTable<'_, R> {}
impl<R> fmt::Debug for DescriptorTable<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries).finish()
    }
}
