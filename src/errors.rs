/// errors.rs
///
/// File containing the errors returned by the fallible flags conversions.
///
/// Last Modified: 10/16/26
use thiserror_no_std::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FlagsError {
    #[error("Bits {:#x} do not correspond to any declared flag.", bits)]
    UnknownBits { bits: u128 },
    #[error("Unknown flag name {:?}", name)]
    UnknownFlag { name: String },
    #[error("Invalid bits literal {:?}", literal)]
    InvalidBits { literal: String },
    #[error("Empty flag name")]
    EmptyFlag,
}
