/// text.rs
///
/// File containing the text form of flags values: declared names joined by `|`,
/// with any bits no name covers written as a hex literal.
///
/// Last Modified: 10/16/26
use core::fmt;

use super::bits::Bits;
use super::errors::FlagsError;
use super::ops;
use super::registry::EnumFlags;

pub const SEPARATOR: &str = " | ";

/// Writes a value as `NAME | NAME | 0x..`. The empty value is written as `0x0`.
/// Names whose bits were all already written (aliases, unions) are skipped.
pub fn write<T: EnumFlags>(f: &mut fmt::Formatter<'_>, value: T) -> fmt::Result {
    if !ops::is_set(value) {
        return f.write_str("0x0");
    }

    let mut remaining = value;
    let mut first = true;
    for &(name, flag) in T::FLAGS {
        if !ops::is_set(flag) || !ops::contains(value, flag) || !ops::intersects(remaining, flag) {
            continue;
        }
        if !first {
            f.write_str(SEPARATOR)?;
        }
        first = false;
        f.write_str(name)?;
        remaining = ops::difference(remaining, flag);
    }

    if ops::is_set(remaining) {
        if !first {
            f.write_str(SEPARATOR)?;
        }
        write!(f, "{:#x}", remaining.bits())?;
    }

    Ok(())
}

/// Parses the form produced by `write`. Segments are separated by `|` and may be
/// declared names or `0x` hex literals; surrounding whitespace is ignored.
/// An empty or blank string parses as the empty value.
pub fn parse<T: EnumFlags>(input: &str) -> Result<T, FlagsError> {
    let mut value = ops::empty::<T>();
    if input.trim().is_empty() {
        return Ok(value);
    }

    for segment in input.split('|') {
        let segment = segment.trim();
        if segment.is_empty() {
            return Err(FlagsError::EmptyFlag);
        }
        ops::or_assign(&mut value, parse_segment(segment)?);
    }

    Ok(value)
}

fn parse_segment<T: EnumFlags>(segment: &str) -> Result<T, FlagsError> {
    if let Some(digits) = segment
        .strip_prefix("0x")
        .or_else(|| segment.strip_prefix("0X"))
    {
        return T::Bits::parse_hex(digits)
            .map(T::from_bits_retain)
            .ok_or_else(|| FlagsError::InvalidBits {
                literal: segment.to_string(),
            });
    }

    T::FLAGS
        .iter()
        .find(|(name, _)| *name == segment)
        .map(|&(_, flag)| flag)
        .ok_or_else(|| FlagsError::UnknownFlag {
            name: segment.to_string(),
        })
}
