/// ops.rs
///
/// File containing the bitwise operator set shared by every flags enumeration.
/// Each function reinterprets its operands as the underlying integer, combines them and
/// reinterprets the result. All of them refuse to build for a type whose marker is false.
///
/// Last Modified: 10/16/26
use super::bits::Bits;
use super::errors::FlagsError;
use super::registry::{EnumFlags, Gate};

/// Bitwise AND of two values.
#[inline]
pub fn and<T: EnumFlags>(lhs: T, rhs: T) -> T {
    let () = Gate::<T>::OPEN;
    T::from_bits_retain(lhs.bits() & rhs.bits())
}

/// Bitwise OR of two values.
#[inline]
pub fn or<T: EnumFlags>(lhs: T, rhs: T) -> T {
    let () = Gate::<T>::OPEN;
    T::from_bits_retain(lhs.bits() | rhs.bits())
}

/// Bitwise exclusive OR of two values.
#[inline]
pub fn xor<T: EnumFlags>(lhs: T, rhs: T) -> T {
    let () = Gate::<T>::OPEN;
    T::from_bits_retain(lhs.bits() ^ rhs.bits())
}

/// Bitwise complement across the full width of the representation.
#[inline]
pub fn not<T: EnumFlags>(value: T) -> T {
    let () = Gate::<T>::OPEN;
    T::from_bits_retain(!value.bits())
}

/// Stores `lhs & rhs` into `lhs` and returns the new value.
#[inline]
pub fn and_assign<T: EnumFlags>(lhs: &mut T, rhs: T) -> T {
    *lhs = and(*lhs, rhs);
    *lhs
}

/// Stores `lhs | rhs` into `lhs` and returns the new value.
#[inline]
pub fn or_assign<T: EnumFlags>(lhs: &mut T, rhs: T) -> T {
    *lhs = or(*lhs, rhs);
    *lhs
}

/// Stores `lhs ^ rhs` into `lhs` and returns the new value.
#[inline]
pub fn xor_assign<T: EnumFlags>(lhs: &mut T, rhs: T) -> T {
    *lhs = xor(*lhs, rhs);
    *lhs
}

#[inline]
pub fn eq<T: EnumFlags>(lhs: T, rhs: T) -> bool {
    let () = Gate::<T>::OPEN;
    lhs.bits() == rhs.bits()
}

#[inline]
pub fn ne<T: EnumFlags>(lhs: T, rhs: T) -> bool {
    !eq(lhs, rhs)
}

// ----------------- Set helpers -----------------

/// Returns true if any bit is set.
#[inline]
pub fn is_set<T: EnumFlags>(value: T) -> bool {
    let () = Gate::<T>::OPEN;
    value.bits() != T::Bits::EMPTY
}

/// Returns true if every bit of `other` is also set in `value`.
#[inline]
pub fn contains<T: EnumFlags>(value: T, other: T) -> bool {
    eq(and(value, other), other)
}

/// Returns true if `value` and `other` share at least one bit.
#[inline]
pub fn intersects<T: EnumFlags>(value: T, other: T) -> bool {
    is_set(and(value, other))
}

/// Bits of `value` that are not in `other`.
#[inline]
pub fn difference<T: EnumFlags>(value: T, other: T) -> T {
    and(value, not(other))
}

#[inline]
pub fn empty<T: EnumFlags>() -> T {
    let () = Gate::<T>::OPEN;
    T::from_bits_retain(T::Bits::EMPTY)
}

/// Union of every declared value.
pub fn all<T: EnumFlags>() -> T {
    T::FLAGS
        .iter()
        .fold(empty(), |acc, &(_, flag)| or(acc, flag))
}

/// Converts raw bits, rejecting any bit no declared value covers.
/// # Arguments:
/// * bits: The raw representation.
/// Returns a Result with the value, or an UnknownBits error carrying the stray bits.
pub fn from_bits<T: EnumFlags>(bits: T::Bits) -> Result<T, FlagsError> {
    let value = T::from_bits_retain(bits);
    let stray = difference(value, all());
    if is_set(stray) {
        Err(FlagsError::UnknownBits {
            bits: stray.bits().widen(),
        })
    } else {
        Ok(value)
    }
}

/// Converts raw bits, dropping any bit no declared value covers.
#[inline]
pub fn from_bits_truncate<T: EnumFlags>(bits: T::Bits) -> T {
    and(T::from_bits_retain(bits), all())
}
