//! Container encoders: LIST, MAP, ARRAY, TRIE, SCOPE. All five share one
//! routine — concatenate child chains, prepend a header whose argument is
//! the total payload byte length.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::arena::Arena;
use crate::error::NibsError;
use crate::pair;
use crate::slice::{self, SliceNode};
use crate::tag::NibsType;

/// Builds a container: sums the flattened byte length of `children` (each
/// may itself be a multi-node chain), allocates a header sized for that
/// total, and links header → children in encounter order.
///
/// `index`, if given, is an additional chain linked *ahead* of `children`
/// whose bytes count toward the header's `big` the same as any child — the
/// mechanism ARRAY/TRIE need to reserve space for an index built on top of
/// this core.
fn build_container(
    arena: &mut Arena,
    small: NibsType,
    index: Option<SliceNode>,
    children: Vec<SliceNode>,
) -> Result<SliceNode, NibsError> {
    let mut parts: Vec<Box<SliceNode>> = Vec::with_capacity(children.len() + 1);
    if let Some(idx) = index {
        parts.push(Box::new(idx));
    }
    parts.extend(children.into_iter().map(Box::new));

    let total: usize = parts.iter().map(|n| n.chain_len()).sum();

    let header_len = pair::header_len(total as u64);
    let mut header_data = arena.alloc(header_len)?;
    pair::write_header(&mut header_data, small.as_u8(), total as u64);

    let mut header = SliceNode::leaf(header_data);
    header.next = slice::concat(parts);
    Ok(header)
}

/// LIST: an arbitrary sequence of children.
pub fn encode_list(arena: &mut Arena, children: Vec<SliceNode>) -> Result<SliceNode, NibsError> {
    build_container(arena, NibsType::List, None, children)
}

/// MAP: children alternate key, value, key, value, … — `children.len()`
/// must be even.
pub fn encode_map(arena: &mut Arena, children: Vec<SliceNode>) -> Result<SliceNode, NibsError> {
    if children.len() % 2 != 0 {
        return Err(NibsError::OddChildCount(children.len()));
    }
    build_container(arena, NibsType::Map, None, children)
}

/// ARRAY: the indexed variant of LIST. `index` is the (possibly empty)
/// index chain constructed ahead of the elements; its length still counts
/// toward the header's `big`.
pub fn encode_array(
    arena: &mut Arena,
    index: SliceNode,
    children: Vec<SliceNode>,
) -> Result<SliceNode, NibsError> {
    build_container(arena, NibsType::Array, Some(index), children)
}

/// TRIE: the indexed variant of MAP. Same index-length contract as
/// `encode_array`; `children.len()` must be even.
pub fn encode_trie(
    arena: &mut Arena,
    index: SliceNode,
    children: Vec<SliceNode>,
) -> Result<SliceNode, NibsError> {
    if children.len() % 2 != 0 {
        return Err(NibsError::OddChildCount(children.len()));
    }
    build_container(arena, NibsType::Trie, Some(index), children)
}

/// SCOPE: exactly a value followed by its reference-list encoding.
pub fn encode_scope(
    arena: &mut Arena,
    value: SliceNode,
    refs: SliceNode,
) -> Result<SliceNode, NibsError> {
    build_container(arena, NibsType::Scope, None, alloc::vec![value, refs])
}

/// An empty, zero-length index chain — what the Tibs driver passes for
/// `[#`/`{#` containers, since index construction is out of scope here.
pub fn empty_index(arena: &mut Arena) -> Result<SliceNode, NibsError> {
    Ok(SliceNode::leaf(arena.alloc(0)?))
}
