//! Parameter descriptors: the static declaration of one command line flag
//!
//! A descriptor ties a flag's names and help text to a [`ParameterKind`] and a
//! [`Location`], the accessor for the record field its value is written to.
//! All constructors are `const fn`, so a whole table can live in a `static`:
//!
//! ```
//! use paramtab::ParameterDescriptor;
//!
//! #[derive(Clone, Default)]
//! struct Params {
//!     verbose: bool,
//!     retries: u8,
//! }
//!
//! static DESCRIPTORS: [ParameterDescriptor<Params>; 3] = [
//!     ParameterDescriptor::flag('v', "verbose", "Talk more.", |params: &mut Params| {
//!         &mut params.verbose
//!     }),
//!     ParameterDescriptor::uint8('r', "retries", "Retry count.", |params: &mut Params| {
//!         &mut params.retries
//!     }),
//!     ParameterDescriptor::sentinel(),
//! ];
//! # assert_eq!(DESCRIPTORS[1].short_flag(), 'r');
//! ```

use std::{fmt, mem::size_of};

use crate::ParameterKind;

/// Accessor for a field of type `T` inside the record `R`
pub type Field<R, T> = fn(&mut R) -> &mut T;

/// Where a descriptor's value lands in the record, by storage type
///
/// Several kinds share a storage type: `UInt8`, `Hex8` and `Char` are all
/// stored through [`Location::U8`].
#[allow(missing_docs)]
pub enum Location<R> {
    U8(Field<R, u8>),
    I8(Field<R, i8>),
    U16(Field<R, u16>),
    I16(Field<R, i16>),
    U32(Field<R, u32>),
    I32(Field<R, i32>),
    U64(Field<R, u64>),
    I64(Field<R, i64>),
    F64(Field<R, f64>),
    Str(Field<R, Option<String>>),
    Bool(Field<R, bool>),
    /// The sentinel's location. It has no field.
    Nowhere,
}

impl<R> Location<R> {
    /// Size in bytes of the field this location points at
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::U8(_) => size_of::<u8>(),
            Self::I8(_) => size_of::<i8>(),
            Self::U16(_) => size_of::<u16>(),
            Self::I16(_) => size_of::<i16>(),
            Self::U32(_) => size_of::<u32>(),
            Self::I32(_) => size_of::<i32>(),
            Self::U64(_) => size_of::<u64>(),
            Self::I64(_) => size_of::<i64>(),
            Self::F64(_) => size_of::<f64>(),
            Self::Str(_) => size_of::<Option<String>>(),
            Self::Bool(_) => size_of::<bool>(),
            Self::Nowhere => 0,
        }
    }

    /// Can a value of `kind` be stored here?
    #[must_use]
    pub const fn stores(&self, kind: ParameterKind) -> bool {
        use ParameterKind as K;
        matches!(
            (self, kind),
            (Self::U8(_), K::UInt8 | K::Hex8 | K::Char)
                | (Self::I8(_), K::Int8)
                | (Self::U16(_), K::UInt16 | K::Hex16)
                | (Self::I16(_), K::Int16)
                | (Self::U32(_), K::UInt32 | K::Hex32)
                | (Self::I32(_), K::Int32)
                | (Self::U64(_), K::UInt64 | K::Hex64)
                | (Self::I64(_), K::Int64)
                | (Self::F64(_), K::Float64)
                | (Self::Str(_), K::String)
                | (Self::Bool(_), K::Bool)
                | (Self::Nowhere, K::Sentinel)
        )
    }

    /// Name of the storage type, for diagnostics
    pub(crate) const fn type_name(&self) -> &'static str {
        match self {
            Self::U8(_) => "u8",
            Self::I8(_) => "i8",
            Self::U16(_) => "u16",
            Self::I16(_) => "i16",
            Self::U32(_) => "u32",
            Self::I32(_) => "i32",
            Self::U64(_) => "u64",
            Self::I64(_) => "i64",
            Self::F64(_) => "f64",
            Self::Str(_) => "Option<String>",
            Self::Bool(_) => "bool",
            Self::Nowhere => "nowhere",
        }
    }
}

// Manual impls: deriving would require `R: Clone`/`R: Debug`, but only
// function pointers over `R` are stored.
impl<R> Clone for Location<R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<R> Copy for Location<R> {}
impl<R> fmt::Debug for Location<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location<{}>", self.type_name())
    }
}

/// Declaration of one recognized flag
pub struct ParameterDescriptor<R> {
    /// How the flag's value is converted
    kind: ParameterKind,
    /// Where the converted value is stored
    location: Location<R>,
    /// Size of the target field in bytes
    size: usize,
    /// The `-x` form of the flag
    short_flag: char,
    /// The `--name` form of the flag
    long_flag: &'static str,
    /// Human readable description shown in the help
    help: &'static str,
}

impl<R> ParameterDescriptor<R> {
    /// Create a descriptor from all of its parts.
    ///
    /// The kind and the location are not checked against each other here;
    /// [`crate::DescriptorTable::new`] rejects tables where they disagree. The
    /// typed constructors ([`Self::uint8`], [`Self::string`], ...) can not get
    /// this wrong.
    #[must_use]
    pub const fn new(
        kind: ParameterKind,
        location: Location<R>,
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            kind,
            size: location.size(),
            location,
            short_flag,
            long_flag,
            help,
        }
    }

    /// The end-of-table marker
    #[must_use]
    pub const fn sentinel() -> Self {
        Self::new(ParameterKind::Sentinel, Location::Nowhere, '\0', "", "")
    }

    /// A flag taking no value, which sets its field to `true`
    #[must_use]
    pub const fn flag(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, bool>,
    ) -> Self {
        Self::new(ParameterKind::Bool, Location::Bool(field), short_flag, long_flag, help)
    }

    /// A decimal `u8` parameter
    #[must_use]
    pub const fn uint8(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, u8>,
    ) -> Self {
        Self::new(ParameterKind::UInt8, Location::U8(field), short_flag, long_flag, help)
    }

    /// A decimal `i8` parameter
    #[must_use]
    pub const fn int8(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, i8>,
    ) -> Self {
        Self::new(ParameterKind::Int8, Location::I8(field), short_flag, long_flag, help)
    }

    /// A hexadecimal `u8` parameter
    #[must_use]
    pub const fn hex8(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, u8>,
    ) -> Self {
        Self::new(ParameterKind::Hex8, Location::U8(field), short_flag, long_flag, help)
    }

    /// A decimal `u16` parameter
    #[must_use]
    pub const fn uint16(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, u16>,
    ) -> Self {
        Self::new(ParameterKind::UInt16, Location::U16(field), short_flag, long_flag, help)
    }

    /// A decimal `i16` parameter
    #[must_use]
    pub const fn int16(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, i16>,
    ) -> Self {
        Self::new(ParameterKind::Int16, Location::I16(field), short_flag, long_flag, help)
    }

    /// A hexadecimal `u16` parameter
    #[must_use]
    pub const fn hex16(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, u16>,
    ) -> Self {
        Self::new(ParameterKind::Hex16, Location::U16(field), short_flag, long_flag, help)
    }

    /// A decimal `u32` parameter
    #[must_use]
    pub const fn uint32(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, u32>,
    ) -> Self {
        Self::new(ParameterKind::UInt32, Location::U32(field), short_flag, long_flag, help)
    }

    /// A decimal `i32` parameter
    #[must_use]
    pub const fn int32(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, i32>,
    ) -> Self {
        Self::new(ParameterKind::Int32, Location::I32(field), short_flag, long_flag, help)
    }

    /// A hexadecimal `u32` parameter
    #[must_use]
    pub const fn hex32(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, u32>,
    ) -> Self {
        Self::new(ParameterKind::Hex32, Location::U32(field), short_flag, long_flag, help)
    }

    /// A decimal `u64` parameter
    #[must_use]
    pub const fn uint64(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, u64>,
    ) -> Self {
        Self::new(ParameterKind::UInt64, Location::U64(field), short_flag, long_flag, help)
    }

    /// A decimal `i64` parameter
    #[must_use]
    pub const fn int64(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, i64>,
    ) -> Self {
        Self::new(ParameterKind::Int64, Location::I64(field), short_flag, long_flag, help)
    }

    /// A hexadecimal `u64` parameter
    #[must_use]
    pub const fn hex64(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, u64>,
    ) -> Self {
        Self::new(ParameterKind::Hex64, Location::U64(field), short_flag, long_flag, help)
    }

    /// An `f64` parameter
    #[must_use]
    pub const fn float64(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, f64>,
    ) -> Self {
        Self::new(ParameterKind::Float64, Location::F64(field), short_flag, long_flag, help)
    }

    /// A string parameter. The field holds an owned copy of the value.
    #[must_use]
    pub const fn string(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, Option<String>>,
    ) -> Self {
        Self::new(ParameterKind::String, Location::Str(field), short_flag, long_flag, help)
    }

    /// A single byte parameter, taken from the first byte of the value
    #[must_use]
    pub const fn char(
        short_flag: char,
        long_flag: &'static str,
        help: &'static str,
        field: Field<R, u8>,
    ) -> Self {
        Self::new(ParameterKind::Char, Location::U8(field), short_flag, long_flag, help)
    }

    /// How this flag's value is converted
    #[must_use]
    pub const fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Where this flag's value is stored
    #[must_use]
    pub const fn location(&self) -> Location<R> {
        self.location
    }

    /// Size in bytes of the target field
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The single character option, as in `-h`
    #[must_use]
    pub const fn short_flag(&self) -> char {
        self.short_flag
    }

    /// The long option name, as in `--help`
    #[must_use]
    pub const fn long_flag(&self) -> &'static str {
        self.long_flag
    }

    /// The help text
    #[must_use]
    pub const fn help(&self) -> &'static str {
        self.help
    }

    /// Is this the end-of-table marker?
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        self.kind.is_sentinel()
    }
}

impl<R> Clone for ParameterDescriptor<R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<R> Copy for ParameterDescriptor<R> {}
impl<R> fmt::Debug for ParameterDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterDescriptor")
            .field("kind", &self.kind)
            .field("location", &self.location)
            .field("size", &self.size)
            .field("short_flag", &self.short_flag)
            .field("long_flag", &self.long_flag)
            .field("help", &self.help)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Record {
        level: i16,
        code: u8,
        name: Option<String>,
    }

    #[test]
    fn typed_constructors_pick_matching_locations() {
        let level = ParameterDescriptor::int16('l', "level", "Level.", |record: &mut Record| {
            &mut record.level
        });
        assert_eq!(level.kind(), ParameterKind::Int16);
        assert_eq!(level.size(), 2);
        assert!(matches!(level.location(), Location::I16(_)));

        let name = ParameterDescriptor::string('n', "name", "Name.", |record: &mut Record| {
            &mut record.name
        });
        assert_eq!(name.kind(), ParameterKind::String);
        assert_eq!(Some(name.size()), ParameterKind::String.storage_size());
    }

    #[test]
    fn locations_reach_their_field() {
        let mut record = Record::default();
        let Location::I16(field) = Location::I16(|record: &mut Record| &mut record.level) else {
            unreachable!()
        };
        *field(&mut record) = -3;
        assert_eq!(record.level, -3);
    }

    #[test]
    fn locations_store_the_kinds_sharing_their_type() {
        let byte = Location::U8(|record: &mut Record| &mut record.code);
        assert!(byte.stores(ParameterKind::UInt8));
        assert!(byte.stores(ParameterKind::Hex8));
        assert!(byte.stores(ParameterKind::Char));
        assert!(!byte.stores(ParameterKind::Int8));

        let level = Location::I16(|record: &mut Record| &mut record.level);
        assert!(level.stores(ParameterKind::Int16));
        assert!(!level.stores(ParameterKind::Hex16));
        assert!(Location::<Record>::Nowhere.stores(ParameterKind::Sentinel));
    }

    #[test]
    fn sentinel_has_no_flag_and_no_field() {
        let sentinel = ParameterDescriptor::<Record>::sentinel();
        assert!(sentinel.is_sentinel());
        assert_eq!(sentinel.size(), 0);
        assert_eq!(sentinel.long_flag(), "");
    }

    #[test]
    fn debug_output_names_the_storage_type() {
        let level = ParameterDescriptor::int16('l', "level", "Level.", |record: &mut Record| {
            &mut record.level
        });
        assert!(format!("{level:?}").contains("Location<i16>"));
    }
}
