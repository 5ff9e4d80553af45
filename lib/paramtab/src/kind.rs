//! The closed set of parameter kinds

use std::mem::size_of;

use derive_more::Display;

/// The type of value a parameter holds, which also selects how its raw
/// command line text is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ParameterKind {
    /// Decimal `u8`
    #[display("uint8")]
    UInt8,
    /// Decimal `i8`
    #[display("int8")]
    Int8,
    /// Hexadecimal `u8`
    #[display("hex8")]
    Hex8,
    /// Decimal `u16`
    #[display("uint16")]
    UInt16,
    /// Decimal `i16`
    #[display("int16")]
    Int16,
    /// Hexadecimal `u16`
    #[display("hex16")]
    Hex16,
    /// Decimal `u32`
    #[display("uint32")]
    UInt32,
    /// Decimal `i32`
    #[display("int32")]
    Int32,
    /// Hexadecimal `u32`
    #[display("hex32")]
    Hex32,
    /// Decimal `u64`
    #[display("uint64")]
    UInt64,
    /// Decimal `i64`
    #[display("int64")]
    Int64,
    /// Hexadecimal `u64`
    #[display("hex64")]
    Hex64,
    /// Double precision float
    #[display("float64")]
    Float64,
    /// Owned string, copied from the command line
    #[display("string")]
    String,
    /// Flag without value, set to `true` when present
    #[display("bool")]
    Bool,
    /// A single byte, the first of the value
    #[display("char")]
    Char,
    /// Marks the end of a descriptor table. Never a real flag.
    #[display("sentinel")]
    Sentinel,
}

impl ParameterKind {
    /// Whether a flag of this kind consumes a value token
    #[must_use]
    pub const fn takes_value(self) -> bool {
        !matches!(self, Self::Bool | Self::Sentinel)
    }

    /// The radix numeric kinds are read in, [`None`] for the others
    #[must_use]
    pub const fn radix(self) -> Option<u32> {
        match self {
            Self::UInt8
            | Self::Int8
            | Self::UInt16
            | Self::Int16
            | Self::UInt32
            | Self::Int32
            | Self::UInt64
            | Self::Int64
            | Self::Float64 => Some(10),
            Self::Hex8 | Self::Hex16 | Self::Hex32 | Self::Hex64 => Some(16),
            Self::String | Self::Bool | Self::Char | Self::Sentinel => None,
        }
    }

    /// The size in bytes of the record field a value of this kind is stored in
    ///
    /// [`None`] for the sentinel, which has no field.
    #[must_use]
    pub const fn storage_size(self) -> Option<usize> {
        Some(match self {
            Self::UInt8 | Self::Hex8 | Self::Char => size_of::<u8>(),
            Self::Int8 => size_of::<i8>(),
            Self::UInt16 | Self::Hex16 => size_of::<u16>(),
            Self::Int16 => size_of::<i16>(),
            Self::UInt32 | Self::Hex32 => size_of::<u32>(),
            Self::Int32 => size_of::<i32>(),
            Self::UInt64 | Self::Hex64 => size_of::<u64>(),
            Self::Int64 => size_of::<i64>(),
            Self::Float64 => size_of::<f64>(),
            Self::String => size_of::<Option<String>>(),
            Self::Bool => size_of::<bool>(),
            Self::Sentinel => return None,
        })
    }

    /// Is this the end-of-table marker?
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Sentinel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_bool_and_sentinel_take_no_value() {
        assert!(!ParameterKind::Bool.takes_value());
        assert!(!ParameterKind::Sentinel.takes_value());
        assert!(ParameterKind::Char.takes_value());
        assert!(ParameterKind::String.takes_value());
        assert!(ParameterKind::Hex64.takes_value());
    }

    #[test]
    fn hex_kinds_use_radix_16() {
        assert_eq!(ParameterKind::Hex16.radix(), Some(16));
        assert_eq!(ParameterKind::UInt16.radix(), Some(10));
        assert_eq!(ParameterKind::Float64.radix(), Some(10));
        assert_eq!(ParameterKind::Char.radix(), None);
    }

    #[test]
    fn storage_sizes_follow_the_bit_width() {
        assert_eq!(ParameterKind::Hex8.storage_size(), Some(1));
        assert_eq!(ParameterKind::Int16.storage_size(), Some(2));
        assert_eq!(ParameterKind::Hex32.storage_size(), Some(4));
        assert_eq!(ParameterKind::UInt64.storage_size(), Some(8));
        assert_eq!(ParameterKind::Sentinel.storage_size(), None);
    }

    #[test]
    fn kinds_display_lowercase() {
        assert_eq!(ParameterKind::UInt8.to_string(), "uint8");
        assert_eq!(ParameterKind::Float64.to_string(), "float64");
        assert_eq!(ParameterKind::Sentinel.to_string(), "sentinel");
    }
}
