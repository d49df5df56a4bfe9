// src/error.rs

/// Errors surfaced by encoding and tokenizing. No exceptions or unwinding:
/// every fallible operation returns a `Result<_, NibsError>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NibsError {
    /// An arena allocation would exceed its reserved capacity. The arena
    /// that raised this must be discarded; partially built chains inside
    /// it are no longer valid.
    OutOfArena,

    /// The tokenizer returned `ERROR`, or the driver saw a token it did not
    /// expect (a `LIST_END`/`MAP_END`/`SCOPE_END` with no matching open, an
    /// odd child count in a map, or a scope with other than two children).
    /// `offset` is the byte offset of the offending token.
    InvalidTibs { offset: usize },

    /// A `BYTES` literal or hex-compressed string contained an odd number
    /// of hex digits after stripping non-hex formatting bytes.
    InvalidHex,

    /// An integer literal's value did not fit in `i64`.
    Overflow,

    /// `encode_map`/`encode_trie` were given an odd number of children;
    /// MAP/TRIE children must alternate key, value. Carries the offending
    /// count.
    OddChildCount(usize),
}

// Manual implementation of Display for no_std environments.
impl core::fmt::Display for NibsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfArena => write!(f, "arena allocation exceeded its reserved capacity"),
            Self::InvalidTibs { offset } => {
                write!(f, "invalid Tibs syntax at byte offset {}", offset)
            }
            Self::InvalidHex => write!(f, "odd number of hex digits in hex literal"),
            Self::Overflow => write!(f, "integer literal out of i64 range"),
            Self::OddChildCount(n) => {
                write!(f, "map/trie children must alternate key/value, got {} children", n)
            }
        }
    }
}

// Enable standard Error trait if the "std" feature is on.
#[cfg(feature = "std")]
impl std::error::Error for NibsError {}
