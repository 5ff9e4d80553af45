//! Storing converted values into the parameter record

use crate::{Location, ParameterDescriptor, Value};

/// Store `value` into the field of `record` that `descriptor` points at.
///
/// The value is stored as is, without any coercion.
///
/// # Panics
/// If `value` can not be stored in the descriptor's field. This never happens
/// for a descriptor of a [`crate::DescriptorTable`] given a value converted
/// with the descriptor's own kind.
pub fn apply<R>(descriptor: &ParameterDescriptor<R>, value: Value, record: &mut R) {
    debug_assert_eq!(
        descriptor.kind(),
        value.kind(),
        "value converted with another kind than `-{}`'s",
        descriptor.short_flag()
    );

    match (descriptor.location(), value) {
        (Location::U8(field), Value::UInt8(value) | Value::Hex8(value) | Value::Char(value)) => {
            *field(record) = value;
        }
        (Location::I8(field), Value::Int8(value)) => *field(record) = value,
        (Location::U16(field), Value::UInt16(value) | Value::Hex16(value)) => {
            *field(record) = value;
        }
        (Location::I16(field), Value::Int16(value)) => *field(record) = value,
        (Location::U32(field), Value::UInt32(value) | Value::Hex32(value)) => {
            *field(record) = value;
        }
        (Location::I32(field), Value::Int32(value)) => *field(record) = value,
        (Location::U64(field), Value::UInt64(value) | Value::Hex64(value)) => {
            *field(record) = value;
        }
        (Location::I64(field), Value::Int64(value)) => *field(record) = value,
        (Location::F64(field), Value::Float64(value)) => *field(record) = value,
        (Location::Str(field), Value::String(value)) => *field(record) = Some(value),
        (Location::Bool(field), Value::Bool(value)) => *field(record) = value,
        (location, value) => unreachable!(
            "`-{}` can not store {} value {value} in {location:?}",
            descriptor.short_flag(),
            value.kind(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Record {
        verbose: bool,
        mask: u8,
        initial: u8,
        offset: i64,
        ratio: f64,
        name: Option<String>,
        tiny: i8,
        port: u16,
        level: i16,
        count: u32,
        delta: i32,
        total: u64,
    }

    #[test]
    fn values_land_in_their_field_only() {
        let mut record = Record::default();
        let mask = ParameterDescriptor::hex8('m', "mask", "Mask.", |record: &mut Record| {
            &mut record.mask
        });
        apply(&mask, Value::Hex8(0xA5), &mut record);
        assert_eq!(
            record,
            Record {
                mask: 0xA5,
                ..Record::default()
            }
        );
    }

    #[test]
    fn kinds_sharing_a_storage_type_use_the_same_location() {
        let mut record = Record::default();
        let initial = ParameterDescriptor::char('i', "initial", "Initial.", |record: &mut Record| {
            &mut record.initial
        });
        apply(&initial, Value::Char(b'Z'), &mut record);
        assert_eq!(record.initial, b'Z');
    }

    #[test]
    fn every_storage_type_is_written() {
        let mut record = Record::default();
        let verbose = ParameterDescriptor::flag('v', "verbose", "Verbose.", |record: &mut Record| {
            &mut record.verbose
        });
        let offset = ParameterDescriptor::int64('o', "offset", "Offset.", |record: &mut Record| {
            &mut record.offset
        });
        let ratio = ParameterDescriptor::float64('r', "ratio", "Ratio.", |record: &mut Record| {
            &mut record.ratio
        });
        let name = ParameterDescriptor::string('n', "name", "Name.", |record: &mut Record| {
            &mut record.name
        });

        apply(&verbose, Value::Bool(true), &mut record);
        apply(&offset, Value::Int64(i64::MIN), &mut record);
        apply(&ratio, Value::Float64(0.25), &mut record);
        apply(&name, Value::String("out.bin".into()), &mut record);

        assert!(record.verbose);
        assert_eq!(record.offset, i64::MIN);
        assert!((record.ratio - 0.25).abs() < f64::EPSILON);
        assert_eq!(record.name.as_deref(), Some("out.bin"));
    }

    #[test]
    fn every_integer_storage_type_is_written() {
        let mut record = Record::default();
        let tiny = ParameterDescriptor::int8('t', "tiny", "Tiny.", |record: &mut Record| {
            &mut record.tiny
        });
        let port = ParameterDescriptor::uint16('p', "port", "Port.", |record: &mut Record| {
            &mut record.port
        });
        let level = ParameterDescriptor::int16('l', "level", "Level.", |record: &mut Record| {
            &mut record.level
        });
        let count = ParameterDescriptor::uint32('c', "count", "Count.", |record: &mut Record| {
            &mut record.count
        });
        let delta = ParameterDescriptor::int32('d', "delta", "Delta.", |record: &mut Record| {
            &mut record.delta
        });
        let total = ParameterDescriptor::uint64('T', "total", "Total.", |record: &mut Record| {
            &mut record.total
        });

        apply(&tiny, Value::Int8(i8::MIN), &mut record);
        apply(&port, Value::UInt16(u16::MAX), &mut record);
        apply(&level, Value::Int16(i16::MIN), &mut record);
        apply(&count, Value::UInt32(u32::MAX), &mut record);
        apply(&delta, Value::Int32(i32::MIN), &mut record);
        apply(&total, Value::UInt64(u64::MAX), &mut record);

        assert_eq!(
            record,
            Record {
                tiny: i8::MIN,
                port: u16::MAX,
                level: i16::MIN,
                count: u32::MAX,
                delta: i32::MIN,
                total: u64::MAX,
                ..Record::default()
            }
        );
    }

    #[test]
    fn hex_values_share_the_unsigned_locations() {
        let mut record = Record::default();
        let count = ParameterDescriptor::hex32('c', "count", "Count.", |record: &mut Record| {
            &mut record.count
        });
        let total = ParameterDescriptor::hex64('T', "total", "Total.", |record: &mut Record| {
            &mut record.total
        });
        let port = ParameterDescriptor::hex16('p', "port", "Port.", |record: &mut Record| {
            &mut record.port
        });

        apply(&count, Value::Hex32(0xDEAD_BEEF), &mut record);
        apply(&total, Value::Hex64(0x0123_4567_89AB_CDEF), &mut record);
        apply(&port, Value::Hex16(0x55AA), &mut record);

        assert_eq!(record.count, 0xDEAD_BEEF);
        assert_eq!(record.total, 0x0123_4567_89AB_CDEF);
        assert_eq!(record.port, 0x55AA);
    }

    #[test]
    #[should_panic(expected = "can not store")]
    fn mismatched_values_panic() {
        let mut record = Record::default();
        let location_only = ParameterDescriptor::new(
            crate::ParameterKind::String,
            Location::I64(|record: &mut Record| &mut record.offset),
            'o',
            "offset",
            "Offset.",
        );
        apply(&location_only, Value::String("x".into()), &mut record);
    }
}
