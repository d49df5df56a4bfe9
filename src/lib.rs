#![no_std]
//! Nibs: a compact, self-describing binary serialization format, and Tibs,
//! its JSON-superset textual companion syntax.
//!
//! Every Nibs value is a type nibble plus a variable-width argument (the
//! "pair" header, [`pair`]) followed by whatever payload that type needs.
//! [`value`] encodes the scalar types; [`container`] encodes LIST/MAP/
//! ARRAY/TRIE/SCOPE by concatenating child chains under one such header.
//! Encoded output is built as a chain of [`slice::SliceNode`] fragments
//! backed by an [`arena::Arena`], then flattened once at the end.
//!
//! [`tibs`] parses the textual syntax and drives it straight into the
//! encoders above without building an intermediate value tree.

#[cfg(any(feature = "std", test))]
extern crate std;

// Needed for Vec/Box/String in a `no_std` crate.
extern crate alloc;

pub mod arena;
pub mod container;
pub mod error;
pub mod hex;
pub mod pair;
pub mod slice;
pub mod tag;
pub mod tibs;
pub mod value;
pub mod zigzag;

pub use arena::Arena;
pub use error::NibsError;
pub use slice::SliceNode;
pub use tag::NibsType;
pub use tibs::{encode_tibs, encode_tibs_to_vec};
