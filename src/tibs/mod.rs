//! Tibs: the JSON-superset textual companion syntax. `lexer` tokenizes,
//! `number` parses numeric token text, `driver` walks the token stream
//! straight into the Nibs encoders in `crate::value` and `crate::container`.

pub mod driver;
pub mod lexer;
pub mod number;

use alloc::boxed::Box;

use crate::arena::Arena;
use crate::error::NibsError;

/// Parses `input` as Tibs and encodes it to Nibs, returning the finished
/// `SliceNode` chain alongside the arena that owns its bytes.
pub fn encode_tibs(arena: &mut Arena, input: &str) -> Result<crate::slice::SliceNode, NibsError> {
    driver::parse(arena, input)
}

/// Convenience wrapper around `encode_tibs` for one-shot callers that don't
/// need to reuse the arena: allocates a fresh arena, encodes, and flattens
/// straight to owned bytes.
pub fn encode_tibs_to_vec(input: &str) -> Result<Box<[u8]>, NibsError> {
    let mut arena = Arena::new();
    let node = encode_tibs(&mut arena, input)?;
    Ok(crate::slice::flatten(node).data)
}
