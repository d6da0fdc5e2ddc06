#![allow(warnings)]
//! Opt-in bitmask semantics for enumeration types.
//!
//! A type declared with [`enum_flags!`] is registered as a flags enumeration and
//! gets `&`, `|`, `^`, `!`, `&=`, `|=`, `^=` and equality over its underlying integer.
//!
//! ```
//! enumflags::enum_flags! {
//!     pub struct Access: u8 {
//!         const READ = 1;
//!         const WRITE = 2;
//!         const EXEC = 4;
//!     }
//! }
//!
//! let mut access = Access::READ;
//! access |= Access::WRITE;
//! assert_eq!(access.bits(), 3);
//! assert!(enumflags::is_flags!(Access));
//! ```
//!
//! Types that never opted in answer `false` and get no operators:
//!
//! ```
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! struct Plain(u8);
//!
//! assert!(!enumflags::is_flags!(Plain));
//! ```
//!
//! ```compile_fail,E0277
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! struct Plain(u8);
//!
//! let _ = enumflags::ops::or(Plain(1), Plain(2));
//! ```
//!
//! ```compile_fail,E0277
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! struct Plain(u8);
//!
//! let _ = enumflags::ops::not(Plain(1));
//! ```
//!
//! ```compile_fail,E0277
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! struct Plain(u8);
//!
//! let mut plain = Plain(1);
//! enumflags::ops::or_assign(&mut plain, Plain(2));
//! ```
//!
//! ```compile_fail,E0369
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! struct Plain(u8);
//!
//! let _ = Plain(1) | Plain(2);
//! ```
//!
//! A type that implements the registry trait with the marker off is rejected where its
//! operators are wired, even if nothing ever calls them:
//!
//! ```compile_fail,E0080
//! #[derive(Clone, Copy, PartialEq, Eq, Debug)]
//! struct Closed(u8);
//!
//! impl enumflags::EnumFlags for Closed {
//!     type Bits = u8;
//!     const IS_FLAGS: bool = false;
//!     const FLAGS: &'static [(&'static str, Self)] = &[("ONE", Closed(1))];
//!     fn bits(self) -> u8 { self.0 }
//!     fn from_bits_retain(bits: u8) -> Self { Closed(bits) }
//! }
//! enumflags::impl_flag_ops!(Closed);
//!
//! #[allow(dead_code)]
//! fn never_called() -> Closed {
//!     Closed(1) | Closed(2)
//! }
//!
//! fn main() {}
//! ```
//!
//! Calling the generic operators directly on such a type fails the same way:
//!
//! ```compile_fail,E0080
//! #[derive(Clone, Copy, PartialEq, Eq, Debug)]
//! struct Closed(u8);
//!
//! impl enumflags::EnumFlags for Closed {
//!     type Bits = u8;
//!     const IS_FLAGS: bool = false;
//!     const FLAGS: &'static [(&'static str, Self)] = &[("ONE", Closed(1))];
//!     fn bits(self) -> u8 { self.0 }
//!     fn from_bits_retain(bits: u8) -> Self { Closed(bits) }
//! }
//!
//! fn main() {
//!     let _ = enumflags::ops::not(Closed(1));
//! }
//! ```
//!
//! ```compile_fail,E0080
//! #[derive(Clone, Copy, PartialEq, Eq, Debug)]
//! struct Closed(u8);
//!
//! impl enumflags::EnumFlags for Closed {
//!     type Bits = u8;
//!     const IS_FLAGS: bool = false;
//!     const FLAGS: &'static [(&'static str, Self)] = &[("ONE", Closed(1))];
//!     fn bits(self) -> u8 { self.0 }
//!     fn from_bits_retain(bits: u8) -> Self { Closed(bits) }
//! }
//!
//! fn main() {
//!     let mut closed = Closed(1);
//!     enumflags::ops::or_assign(&mut closed, Closed(2));
//! }
//! ```
pub extern crate paste;
pub mod bits;
pub mod errors;
pub mod flags;
pub mod ops;
pub mod registry;
pub mod text;

pub use bits::Bits;
pub use errors::FlagsError;
pub use registry::{is_flags, EnumFlags};
