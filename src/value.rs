//! Leaf value encoders: integer, double, boolean, null, bytes, string
//! (UTF8/HEXSTRING dispatch), ref. Each returns a `SliceNode` chain whose
//! flattening yields the encoded value.

use alloc::boxed::Box;

use crate::arena::Arena;
use crate::error::NibsError;
use crate::hex;
use crate::pair;
use crate::slice::SliceNode;
use crate::tag::{simple, NibsType};
use crate::zigzag;

/// Allocates a pair header node, optionally sized to also carry an inline
/// payload region. Returns the node and the header's byte length, so the
/// caller knows where `data[header_len..]` begins.
fn alloc_pair(
    arena: &mut Arena,
    small: NibsType,
    big: u64,
    payload_len: usize,
) -> Result<(SliceNode, usize), NibsError> {
    let header_len = pair::header_len(big);
    let mut data = arena.alloc(header_len + payload_len)?;
    pair::write_header(&mut data, small.as_u8(), big);
    Ok((SliceNode::leaf(data), header_len))
}

/// Encodes a signed integer as `ZIGZAG`.
pub fn encode_integer(arena: &mut Arena, n: i64) -> Result<SliceNode, NibsError> {
    let (node, _) = alloc_pair(arena, NibsType::ZigZag, zigzag::encode(n), 0)?;
    Ok(node)
}

/// Encodes a double as `FLOAT`. Every NaN, regardless of input bit
/// pattern, collapses to the canonical `0x7FF8000000000000`; `0.0`
/// collapses to the 1-byte pair form as a consequence of the generic
/// width rule.
pub fn encode_double(arena: &mut Arena, f: f64) -> Result<SliceNode, NibsError> {
    let bits = if f.is_nan() {
        0x7FF8_0000_0000_0000u64
    } else {
        f.to_bits()
    };
    let (node, _) = alloc_pair(arena, NibsType::Float, bits, 0)?;
    Ok(node)
}

/// Encodes a boolean as `SIMPLE`.
pub fn encode_boolean(arena: &mut Arena, b: bool) -> Result<SliceNode, NibsError> {
    let big = if b { simple::TRUE } else { simple::FALSE };
    let (node, _) = alloc_pair(arena, NibsType::Simple, big, 0)?;
    Ok(node)
}

/// Encodes `null` as `SIMPLE`.
pub fn encode_null(arena: &mut Arena) -> Result<SliceNode, NibsError> {
    let (node, _) = alloc_pair(arena, NibsType::Simple, simple::NULL, 0)?;
    Ok(node)
}

/// Encodes a raw byte string as `BYTES`.
pub fn encode_bytes(arena: &mut Arena, raw: &[u8]) -> Result<SliceNode, NibsError> {
    let (mut node, header_len) = alloc_pair(arena, NibsType::Bytes, raw.len() as u64, raw.len())?;
    node.data[header_len..].copy_from_slice(raw);
    Ok(node)
}

/// Encodes a string, automatically selecting `HEXSTRING` when `s` is
/// entirely lowercase hex of even non-zero length, else `UTF8`. The empty
/// string always encodes as `UTF8` with `big = 0`.
pub fn encode_string(arena: &mut Arena, s: &str) -> Result<SliceNode, NibsError> {
    if s.is_empty() {
        let (node, _) = alloc_pair(arena, NibsType::Utf8, 0, 0)?;
        return Ok(node);
    }
    if hex::is_lowercase_hex(s) {
        let decoded_len = s.len() / 2;
        let (mut node, header_len) =
            alloc_pair(arena, NibsType::HexString, decoded_len as u64, decoded_len)?;
        hex::decode_lowercase_hex(s.as_bytes(), &mut node.data[header_len..]);
        return Ok(node);
    }
    let bytes = s.as_bytes();
    let (mut node, header_len) = alloc_pair(arena, NibsType::Utf8, bytes.len() as u64, bytes.len())?;
    node.data[header_len..].copy_from_slice(bytes);
    Ok(node)
}

/// Encodes a reference-list index as `REF`.
pub fn encode_ref(arena: &mut Arena, index: u64) -> Result<SliceNode, NibsError> {
    let (node, _) = alloc_pair(arena, NibsType::Ref, index, 0)?;
    Ok(node)
}

/// Convenience: flatten a single leaf node straight to bytes, for tests and
/// small one-shot encodes.
pub fn to_bytes(node: SliceNode) -> Box<[u8]> {
    crate::slice::flatten(node).data
}
