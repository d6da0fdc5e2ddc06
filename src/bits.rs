/// bits.rs
///
/// File containing the integer representations a flags enumeration can be backed by.
///
/// Last Modified: 10/16/26
use core::fmt::{Debug, LowerHex};
use core::ops::{BitAnd, BitOr, BitXor, Not};

/// Trait describing the underlying integer of a flags enumeration.
/// Every primitive integer implements it; the bitwise operators of a flags type are
/// computed on this representation and reinterpreted back.
pub trait Bits:
    Copy
    + Eq
    + Debug
    + LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + 'static
{
    /// No bits set.
    const EMPTY: Self;

    /// Zero-extends the raw bit pattern into a u128 (signed values are not sign-extended).
    fn widen(self) -> u128;

    /// Parses a hexadecimal bit pattern without the `0x` prefix.
    /// Only hex digits are accepted (no sign). Accepts the full unsigned range, so `ff` is -1 for an i8.
    fn parse_hex(digits: &str) -> Option<Self>;
}

macro_rules! impl_bits {
    ($(($ty:ty, $unsigned:ty)),* $(,)?) => {
        $(
            impl Bits for $ty {
                const EMPTY: Self = 0;

                #[inline]
                fn widen(self) -> u128 {
                    self as $unsigned as u128
                }

                #[inline]
                fn parse_hex(digits: &str) -> Option<Self> {
                    // from_str_radix would take a leading '+'
                    if !digits.bytes().next().is_some_and(|byte| byte.is_ascii_hexdigit()) {
                        return None;
                    }
                    <$unsigned>::from_str_radix(digits, 16).ok().map(|value| value as $ty)
                }
            }
        )*
    };
}

impl_bits! {
    (u8, u8),
    (u16, u16),
    (u32, u32),
    (u64, u64),
    (u128, u128),
    (usize, usize),
    (i8, u8),
    (i16, u16),
    (i32, u32),
    (i64, u64),
    (i128, u128),
    (isize, usize),
}
