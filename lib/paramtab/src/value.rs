//! Converted parameter values

use derive_more::Display;

use crate::ParameterKind;

/// A successfully converted parameter value, one variant per
/// [`ParameterKind`] (except the sentinel).
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Display)]
pub enum Value {
    #[display("{_0}")]
    UInt8(u8),
    #[display("{_0}")]
    Int8(i8),
    #[display("{_0:#x}")]
    Hex8(u8),
    #[display("{_0}")]
    UInt16(u16),
    #[display("{_0}")]
    Int16(i16),
    #[display("{_0:#x}")]
    Hex16(u16),
    #[display("{_0}")]
    UInt32(u32),
    #[display("{_0}")]
    Int32(i32),
    #[display("{_0:#x}")]
    Hex32(u32),
    #[display("{_0}")]
    UInt64(u64),
    #[display("{_0}")]
    Int64(i64),
    #[display("{_0:#x}")]
    Hex64(u64),
    #[display("{_0}")]
    Float64(f64),
    #[display("{_0:?}")]
    String(String),
    #[display("{_0}")]
    Bool(bool),
    #[display("{:?}", char::from(*_0))]
    Char(u8),
}

impl Value {
    /// The kind this value was converted as
    #[must_use]
    pub const fn kind(&self) -> ParameterKind {
        match self {
            Self::UInt8(_) => ParameterKind::UInt8,
            Self::Int8(_) => ParameterKind::Int8,
            Self::Hex8(_) => ParameterKind::Hex8,
            Self::UInt16(_) => ParameterKind::UInt16,
            Self::Int16(_) => ParameterKind::Int16,
            Self::Hex16(_) => ParameterKind::Hex16,
            Self::UInt32(_) => ParameterKind::UInt32,
            Self::Int32(_) => ParameterKind::Int32,
            Self::Hex32(_) => ParameterKind::Hex32,
            Self::UInt64(_) => ParameterKind::UInt64,
            Self::Int64(_) => ParameterKind::Int64,
            Self::Hex64(_) => ParameterKind::Hex64,
            Self::Float64(_) => ParameterKind::Float64,
            Self::String(_) => ParameterKind::String,
            Self::Bool(_) => ParameterKind::Bool,
            Self::Char(_) => ParameterKind::Char,
        }
    }
}
