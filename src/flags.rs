/// flags.rs
///
/// File containing the macros that declare flags enumerations and wire their operators.
///
/// Last Modified: 10/16/26

/// Implements `&`, `|`, `^`, `!`, `&=`, `|=` and `^=` for a type implementing `EnumFlags`.
/// Expanding it for a type whose marker is false is a build error, whether or not the
/// operators are ever used.
#[macro_export]
macro_rules! impl_flag_ops {
    ($name:ty) => {
        const _: () = assert!(
            <$name as $crate::registry::EnumFlags>::IS_FLAGS,
            "bitwise flag operators require EnumFlags::IS_FLAGS to be true"
        );

        impl ::core::ops::BitAnd for $name {
            type Output = Self;
            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                $crate::ops::and(self, rhs)
            }
        }

        impl ::core::ops::BitOr for $name {
            type Output = Self;
            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                $crate::ops::or(self, rhs)
            }
        }

        impl ::core::ops::BitXor for $name {
            type Output = Self;
            #[inline]
            fn bitxor(self, rhs: Self) -> Self {
                $crate::ops::xor(self, rhs)
            }
        }

        impl ::core::ops::Not for $name {
            type Output = Self;
            #[inline]
            fn not(self) -> Self {
                $crate::ops::not(self)
            }
        }

        impl ::core::ops::BitAndAssign for $name {
            #[inline]
            fn bitand_assign(&mut self, rhs: Self) {
                $crate::ops::and_assign(self, rhs);
            }
        }

        impl ::core::ops::BitOrAssign for $name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                $crate::ops::or_assign(self, rhs);
            }
        }

        impl ::core::ops::BitXorAssign for $name {
            #[inline]
            fn bitxor_assign(&mut self, rhs: Self) {
                $crate::ops::xor_assign(self, rhs);
            }
        }
    };
}

/// Implements `Display`, `Debug` and `FromStr` through `text`.
#[macro_export]
macro_rules! impl_flag_text {
    ($name:ty) => {
        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::text::write(f, *self)
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(stringify!($name))?;
                f.write_str("(")?;
                $crate::text::write(f, *self)?;
                f.write_str(")")
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::errors::FlagsError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::text::parse(s)
            }
        }
    };
}

/// Declares a flags enumeration: a transparent newtype over an integer with one associated
/// constant per named value, registered with `IS_FLAGS = true`.
/// Also generates `has_<flag>()` accessors, set helpers and the text form.
///
/// ```
/// enumflags::enum_flags! {
///     /// File permissions.
///     pub struct Perm: u16 {
///         const READ = 0b001;
///         const WRITE = 0b010;
///         const EXEC = 0b100;
///     }
/// }
///
/// let rw = Perm::READ | Perm::WRITE;
/// assert!(rw.has_write());
/// assert!(!rw.has_exec());
/// assert_eq!(rw.to_string(), "READ | WRITE");
/// ```
#[macro_export]
macro_rules! enum_flags {
    (
        $(#[$outer:meta])*
        $vis:vis struct $name:ident: $repr:ty {
            $(
                $(#[$inner:meta])*
                const $flag:ident = $value:expr;
            )*
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        $vis struct $name($repr);

        impl $name {
            $(
                $(#[$inner])*
                pub const $flag: Self = Self($value);
            )*

            #[inline]
            pub const fn bits(self) -> $repr {
                self.0
            }

            #[inline]
            pub const fn from_bits_retain(bits: $repr) -> Self {
                Self(bits)
            }

            #[inline]
            pub fn from_bits(bits: $repr) -> ::core::result::Result<Self, $crate::errors::FlagsError> {
                $crate::ops::from_bits(bits)
            }

            #[inline]
            pub fn from_bits_truncate(bits: $repr) -> Self {
                $crate::ops::from_bits_truncate(bits)
            }

            #[inline]
            pub fn empty() -> Self {
                $crate::ops::empty()
            }

            #[inline]
            pub fn all() -> Self {
                $crate::ops::all()
            }

            #[inline]
            pub fn is_empty(self) -> bool {
                !$crate::ops::is_set(self)
            }

            #[inline]
            pub fn is_set(self) -> bool {
                $crate::ops::is_set(self)
            }

            #[inline]
            pub fn contains(self, other: Self) -> bool {
                $crate::ops::contains(self, other)
            }

            #[inline]
            pub fn intersects(self, other: Self) -> bool {
                $crate::ops::intersects(self, other)
            }

            #[inline]
            pub fn insert(&mut self, other: Self) {
                $crate::ops::or_assign(self, other);
            }

            #[inline]
            pub fn remove(&mut self, other: Self) {
                *self = $crate::ops::difference(*self, other);
            }

            #[inline]
            pub fn toggle(&mut self, other: Self) {
                $crate::ops::xor_assign(self, other);
            }
        }

        impl $crate::registry::EnumFlags for $name {
            type Bits = $repr;
            const IS_FLAGS: bool = true;
            const FLAGS: &'static [(&'static str, Self)] = &[$((stringify!($flag), Self::$flag)),*];

            #[inline]
            fn bits(self) -> $repr {
                self.0
            }

            #[inline]
            fn from_bits_retain(bits: $repr) -> Self {
                Self(bits)
            }
        }

        $crate::paste::paste! {
            impl $name {
                $(
                    #[inline]
                    pub fn [<has_ $flag:lower>](self) -> bool {
                        $crate::ops::contains(self, Self::$flag)
                    }
                )*
            }
        }

        $crate::impl_flag_ops!($name);
        $crate::impl_flag_text!($name);
    };
}

#[cfg(test)]
mod tests {
    use crate::errors::FlagsError;
    use crate::registry::EnumFlags;

    #[test]
    fn test_declare() {
        enum_flags! {
            struct Empty: u8 {}
        }
        assert!(crate::is_flags!(Empty));
        assert_eq!(Empty::all(), Empty::empty());
        assert_eq!(Empty::FLAGS.len(), 0);

        enum_flags! {
            /// Documented.
            pub(crate) struct Wide: u64 {
                /// Lowest bit.
                const LOW = 1;
                const HIGH = 1 << 63;
            }
        }
        assert_eq!(Wide::FLAGS, &[("LOW", Wide::LOW), ("HIGH", Wide::HIGH)]);
        assert_eq!(core::mem::size_of::<Wide>(), 8);
        assert_eq!(Wide::all().bits(), (1 << 63) | 1);
    }

    #[test]
    fn test_operators() {
        enum_flags! {
            struct Abc: u8 {
                const A = 1;
                const B = 2;
                const C = 4;
            }
        }

        assert_eq!((Abc::A | Abc::B).bits(), 3);
        assert_eq!((Abc::A | Abc::B) & Abc::A, Abc::A);
        assert_eq!((!Abc::A).bits(), !1_u8);
        assert_eq!(Abc::A ^ Abc::B, Abc::from_bits_retain(3));
        assert_eq!(Abc::A ^ Abc::A, Abc::empty());
        assert_ne!(Abc::A, Abc::B);
        assert!(Abc::A | Abc::C == Abc::from_bits_retain(5));
    }

    #[test]
    fn test_compound_assignment() {
        enum_flags! {
            struct Abc: u8 {
                const A = 1;
                const B = 2;
                const C = 4;
            }
        }

        let mut x = Abc::A;
        x |= Abc::B;
        assert_eq!(x.bits(), 3);
        x &= Abc::B;
        assert_eq!(x, Abc::B);
        x ^= Abc::B | Abc::C;
        assert_eq!(x, Abc::C);
    }

    #[test]
    fn test_helpers() {
        enum_flags! {
            struct Io: u32 {
                const READ = 0x1;
                const WRITE = 0x2;
                const SYNC_ALL = 0x100;
            }
        }

        let mut io = Io::empty();
        assert!(io.is_empty());
        io.insert(Io::READ | Io::SYNC_ALL);
        assert!(io.is_set());
        assert!(io.has_read());
        assert!(io.has_sync_all());
        assert!(!io.has_write());
        assert!(io.contains(Io::READ));
        assert!(io.intersects(Io::READ | Io::WRITE));
        io.remove(Io::READ);
        assert_eq!(io, Io::SYNC_ALL);
        io.toggle(Io::WRITE | Io::SYNC_ALL);
        assert_eq!(io, Io::WRITE);

        assert_eq!(Io::from_bits(0x101), Ok(Io::READ | Io::SYNC_ALL));
        assert_eq!(
            Io::from_bits(0x8),
            Err(FlagsError::UnknownBits { bits: 0x8 })
        );
        assert_eq!(Io::from_bits_truncate(0xffff), Io::all());
    }

    #[test]
    fn test_text() {
        enum_flags! {
            struct Io: u32 {
                const READ = 0x1;
                const WRITE = 0x2;
            }
        }

        let io = Io::READ | Io::WRITE;
        assert_eq!(io.to_string(), "READ | WRITE");
        assert_eq!(format!("{:?}", io), "Io(READ | WRITE)");
        assert_eq!(format!("{:?}", Io::empty()), "Io(0x0)");
        assert_eq!("WRITE".parse::<Io>(), Ok(Io::WRITE));
        assert_eq!("READ | 0x10".parse::<Io>(), Ok(Io::from_bits_retain(0x11)));
        assert_eq!(
            "EXEC".parse::<Io>(),
            Err(FlagsError::UnknownFlag {
                name: "EXEC".to_string()
            })
        );
    }

    #[test]
    fn test_signed_repr() {
        enum_flags! {
            struct Sign: i8 {
                const LOW = 1;
                const TOP = i8::MIN;
            }
        }

        assert_eq!((Sign::LOW | Sign::TOP).bits(), -127);
        assert_eq!((!Sign::LOW).bits(), -2);
        assert_eq!(Sign::TOP.to_string(), "TOP");
        assert_eq!(Sign::from_bits_retain(0x40).to_string(), "0x40");
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    struct Manual(u16);

    impl EnumFlags for Manual {
        type Bits = u16;
        const IS_FLAGS: bool = true;
        const FLAGS: &'static [(&'static str, Self)] = &[("ONE", Manual(1)), ("TWO", Manual(2))];

        fn bits(self) -> u16 {
            self.0
        }

        fn from_bits_retain(bits: u16) -> Self {
            Manual(bits)
        }
    }

    impl_flag_ops!(Manual);

    #[test]
    fn test_hand_written_type() {
        assert!(crate::is_flags!(Manual));
        assert_eq!(Manual(1) | Manual(2), Manual(3));
        assert_eq!(Manual(1) ^ Manual(1), Manual(0));
        assert_eq!(!Manual(0), Manual(u16::MAX));

        let mut m = Manual(3);
        m &= Manual(2);
        assert_eq!(m, Manual(2));
    }
}
