/// registry.rs
///
/// File containing the flags marker trait and the queries answering whether a type opted in.
///
/// Last Modified: 10/16/26
use core::marker::PhantomData;

use super::bits::Bits;

/// Trait registering a type as a flags enumeration.
/// # Items:
/// * Bits:     Underlying integer representation.
/// * IS_FLAGS: The opt-in marker. Operators are only usable when this is `true`.
/// * FLAGS:    Declared names and their values, in declaration order.
///
/// Implementations are normally generated by `enum_flags!`.
pub trait EnumFlags: Copy + Eq + 'static {
    type Bits: Bits;

    const IS_FLAGS: bool;

    const FLAGS: &'static [(&'static str, Self)];

    /// Reinterprets the value as its underlying integer.
    fn bits(self) -> Self::Bits;

    /// Reinterprets an integer as the flags type, keeping bits that match no declared value.
    fn from_bits_retain(bits: Self::Bits) -> Self;
}

/// Returns the marker of a registered type. Usable in const contexts.
#[inline]
pub const fn is_flags<T: EnumFlags>() -> bool {
    T::IS_FLAGS
}

/// Compile-time gate evaluated by every operator. Referencing `Gate::<T>::OPEN` for a type
/// whose marker is false is a build error.
pub(crate) struct Gate<T>(PhantomData<T>);

impl<T: EnumFlags> Gate<T> {
    pub(crate) const OPEN: () = assert!(
        T::IS_FLAGS,
        "bitwise flag operators require EnumFlags::IS_FLAGS to be true"
    );
}

#[doc(hidden)]
pub struct Probe<T: ?Sized>(PhantomData<T>);

impl<T: ?Sized> Probe<T> {
    #[doc(hidden)]
    pub const fn new() -> Self {
        Probe(PhantomData)
    }
}

/// Resolves first when the probed type implements `EnumFlags`.
#[doc(hidden)]
pub trait ProbeDeclared {
    fn is_flags(&self) -> bool;
}

impl<T: EnumFlags> ProbeDeclared for Probe<T> {
    #[inline]
    fn is_flags(&self) -> bool {
        T::IS_FLAGS
    }
}

/// Reached through one more auto-reference, so only when `ProbeDeclared` does not apply.
#[doc(hidden)]
pub trait ProbeFallback {
    fn is_flags(&self) -> bool;
}

impl<T: ?Sized> ProbeFallback for &Probe<T> {
    #[inline]
    fn is_flags(&self) -> bool {
        false
    }
}

/// Answers whether a concrete type is a flags enumeration.
/// Unlike `is_flags::<T>()` this accepts any type: those without an `EnumFlags`
/// implementation, or with an unrelated `IS_FLAGS` item, resolve to `false`.
#[macro_export]
macro_rules! is_flags {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::registry::{ProbeDeclared as _, ProbeFallback as _};
        (&$crate::registry::Probe::<$ty>::new()).is_flags()
    }};
}
