//! Conversion of raw command line text to typed values

use paramtab_utils::parse_number::{
    parse_double, parse_hex16, parse_hex32, parse_hex64, parse_hex8, parse_int16, parse_int32,
    parse_int64, parse_int8, parse_uint16, parse_uint32, parse_uint64, parse_uint8,
    ParseNumberError,
};

use crate::{ConversionError, ParameterKind, Value};

/// Convert the raw text of a flag to a value of `kind`.
///
/// `raw` is [`None`] when the flag came without a value, which is only valid
/// for [`ParameterKind::Bool`]. Boolean flags ignore `raw` and are always
/// `true`.
///
/// # Errors
/// - [`ConversionError::EmptyOrNullInput`] when a value is needed and `raw` is
///   absent or empty
/// - [`ConversionError::TrailingGarbage`] when a number is followed by other
///   characters, or there is no number at all
/// - [`ConversionError::OutOfRange`] when a number does not fit `kind`
/// - [`ConversionError::NoConverter`] for [`ParameterKind::Sentinel`]
///
/// # Example
/// ```
/// use paramtab::{convert, ConversionError, ParameterKind, Value};
///
/// assert_eq!(convert(ParameterKind::Hex16, Some("0xBEEF")), Ok(Value::Hex16(0xBEEF)));
/// assert_eq!(
///     convert(ParameterKind::UInt8, Some("256")),
///     Err(ConversionError::OutOfRange(ParameterKind::UInt8))
/// );
/// ```
pub fn convert(kind: ParameterKind, raw: Option<&str>) -> Result<Value, ConversionError> {
    let number = |error: ParseNumberError| ConversionError::from_parse_number(error, kind);

    Ok(match kind {
        ParameterKind::Bool => Value::Bool(true),
        ParameterKind::UInt8 => Value::UInt8(parse_uint8(required(raw)?).map_err(number)?),
        ParameterKind::Int8 => Value::Int8(parse_int8(required(raw)?).map_err(number)?),
        ParameterKind::Hex8 => Value::Hex8(parse_hex8(required(raw)?).map_err(number)?),
        ParameterKind::UInt16 => Value::UInt16(parse_uint16(required(raw)?).map_err(number)?),
        ParameterKind::Int16 => Value::Int16(parse_int16(required(raw)?).map_err(number)?),
        ParameterKind::Hex16 => Value::Hex16(parse_hex16(required(raw)?).map_err(number)?),
        ParameterKind::UInt32 => Value::UInt32(parse_uint32(required(raw)?).map_err(number)?),
        ParameterKind::Int32 => Value::Int32(parse_int32(required(raw)?).map_err(number)?),
        ParameterKind::Hex32 => Value::Hex32(parse_hex32(required(raw)?).map_err(number)?),
        ParameterKind::UInt64 => Value::UInt64(parse_uint64(required(raw)?).map_err(number)?),
        ParameterKind::Int64 => Value::Int64(parse_int64(required(raw)?).map_err(number)?),
        ParameterKind::Hex64 => Value::Hex64(parse_hex64(required(raw)?).map_err(number)?),
        ParameterKind::Float64 => Value::Float64(parse_double(required(raw)?).map_err(number)?),
        ParameterKind::String => Value::String(required(raw)?.to_owned()),
        ParameterKind::Char => Value::Char(required(raw)?.as_bytes()[0]),
        ParameterKind::Sentinel => return Err(ConversionError::NoConverter(kind)),
    })
}

/// The value of a flag that needs one, which must be present and non-empty
fn required(raw: Option<&str>) -> Result<&str, ConversionError> {
    raw.filter(|raw| !raw.is_empty()).ok_or(ConversionError::EmptyOrNullInput)
}
