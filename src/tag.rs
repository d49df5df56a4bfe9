//! The twelve defined Nibs type codes, modeled as a closed tagged enum
//! rather than virtual dispatch.

use crate::error::NibsError;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NibsType {
    ZigZag = 0,
    Float = 1,
    Simple = 2,
    Ref = 3,
    Bytes = 8,
    Utf8 = 9,
    HexString = 10,
    List = 11,
    Map = 12,
    Array = 13,
    Trie = 14,
    Scope = 15,
}

impl NibsType {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl core::convert::TryFrom<u8> for NibsType {
    type Error = NibsError;

    /// Codes 4–7 are reserved and any other nibble is simply not a type
    /// code; this is used only where the core needs to validate a tag byte
    /// it did not itself just produce (tests, debug assertions) — encoding
    /// never needs to recover a `NibsType` from a byte.
    fn try_from(byte: u8) -> Result<Self, NibsError> {
        match byte {
            0 => Ok(Self::ZigZag),
            1 => Ok(Self::Float),
            2 => Ok(Self::Simple),
            3 => Ok(Self::Ref),
            8 => Ok(Self::Bytes),
            9 => Ok(Self::Utf8),
            10 => Ok(Self::HexString),
            11 => Ok(Self::List),
            12 => Ok(Self::Map),
            13 => Ok(Self::Array),
            14 => Ok(Self::Trie),
            15 => Ok(Self::Scope),
            _ => Err(NibsError::InvalidTibs { offset: 0 }),
        }
    }
}

/// SIMPLE subtypes: false/true/null.
pub mod simple {
    pub const FALSE: u64 = 0;
    pub const TRUE: u64 = 1;
    pub const NULL: u64 = 2;
}
