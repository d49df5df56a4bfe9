//! Recursive-descent Tibs → Nibs driver: walks the token stream produced
//! by `tibs::lexer` and dispatches each value straight to the matching
//! Nibs encoder, building the `SliceNode` chain for nested containers as
//! it unwinds the recursion.

use alloc::string::String;
use alloc::vec::Vec;

use crate::arena::Arena;
use crate::container;
use crate::error::NibsError;
use crate::hex;
use crate::slice::SliceNode;
use crate::value;

use super::lexer::{next_token, Token, TokenKind};
use super::number::{self, Number};

/// Trace macro active only under test, for following token consumption
/// while debugging the driver. No logging crate pulled in for it.
#[cfg(test)]
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        std::eprintln!($($arg)*);
    };
}
#[cfg(not(test))]
macro_rules! debug_trace {
    ($($arg:tt)*) => {};
}

/// Parses `input` as a single Tibs value and encodes it to Nibs, returning
/// the finished `SliceNode` chain. The value may be followed by trailing
/// whitespace/comments, but nothing else — extra tokens are an error.
pub fn parse(arena: &mut Arena, input: &str) -> Result<SliceNode, NibsError> {
    let bytes = input.as_bytes();
    let token = next_token(bytes, 0);
    let (node, next_offset) = parse_value(arena, bytes, token)?;
    let trailing = next_token(bytes, next_offset);
    if trailing.kind != TokenKind::Eos {
        return Err(NibsError::InvalidTibs {
            offset: trailing.offset,
        });
    }
    Ok(node)
}

/// Parses the value starting at `token` (already fetched by the caller),
/// returning the encoded node and the offset just past it.
fn parse_value(
    arena: &mut Arena,
    bytes: &[u8],
    token: Token,
) -> Result<(SliceNode, usize), NibsError> {
    debug_trace!("parse_value: {:?}", token);
    let end = token.offset + token.len;
    match token.kind {
        TokenKind::Null => Ok((value::encode_null(arena)?, end)),
        TokenKind::Boolean => {
            let b = token.text(bytes)[0] == b't';
            Ok((value::encode_boolean(arena, b)?, end))
        }
        TokenKind::Number => {
            let text = core::str::from_utf8(token.text(bytes)).unwrap_or("");
            let node = match number::parse(text)? {
                Number::Int(n) => value::encode_integer(arena, n)?,
                Number::Float(f) => value::encode_double(arena, f)?,
            };
            Ok((node, end))
        }
        TokenKind::String => {
            let raw = &token.text(bytes)[1..token.len - 1]; // strip quotes
            let s = unescape(raw)?;
            Ok((value::encode_string(arena, &s)?, end))
        }
        TokenKind::Bytes => {
            let interior = &token.text(bytes)[1..token.len - 1]; // strip delimiters
            let decoded = hex::decode_formatted_hex(interior)?;
            Ok((value::encode_bytes(arena, &decoded)?, end))
        }
        TokenKind::Ref => {
            let text = core::str::from_utf8(&token.text(bytes)[1..]).unwrap_or("");
            let index: u64 = text
                .parse()
                .map_err(|_| NibsError::InvalidTibs { offset: token.offset })?;
            Ok((value::encode_ref(arena, index)?, end))
        }
        TokenKind::ListBegin => parse_list(arena, bytes, token),
        TokenKind::MapBegin => parse_map(arena, bytes, token),
        TokenKind::ScopeBegin => parse_scope(arena, bytes, token),
        TokenKind::Error => Err(NibsError::InvalidTibs { offset: token.offset }),
        TokenKind::Eos
        | TokenKind::ListEnd
        | TokenKind::MapEnd
        | TokenKind::ScopeEnd => Err(NibsError::InvalidTibs { offset: token.offset }),
    }
}

fn parse_list(arena: &mut Arena, bytes: &[u8], open: Token) -> Result<(SliceNode, usize), NibsError> {
    let indexed = open.is_indexed();
    let mut offset = open.offset + open.len;
    let mut children = Vec::new();
    loop {
        let t = next_token(bytes, offset);
        if t.kind == TokenKind::ListEnd {
            offset = t.offset + t.len;
            break;
        }
        if t.kind == TokenKind::Eos {
            return Err(NibsError::InvalidTibs { offset: t.offset });
        }
        let (node, next_offset) = parse_value(arena, bytes, t)?;
        children.push(node);
        offset = next_offset;
    }
    let node = if indexed {
        let index = container::empty_index(arena)?;
        container::encode_array(arena, index, children)?
    } else {
        container::encode_list(arena, children)?
    };
    Ok((node, offset))
}

fn parse_map(arena: &mut Arena, bytes: &[u8], open: Token) -> Result<(SliceNode, usize), NibsError> {
    let indexed = open.is_indexed();
    let mut offset = open.offset + open.len;
    let mut children = Vec::new();
    loop {
        let t = next_token(bytes, offset);
        if t.kind == TokenKind::MapEnd {
            offset = t.offset + t.len;
            break;
        }
        if t.kind == TokenKind::Eos {
            return Err(NibsError::InvalidTibs { offset: t.offset });
        }
        let (node, next_offset) = parse_value(arena, bytes, t)?;
        children.push(node);
        offset = next_offset;
    }
    if children.len() % 2 != 0 {
        return Err(NibsError::InvalidTibs { offset: open.offset });
    }
    let node = if indexed {
        let index = container::empty_index(arena)?;
        container::encode_trie(arena, index, children)?
    } else {
        container::encode_map(arena, children)?
    };
    Ok((node, offset))
}

fn parse_scope(arena: &mut Arena, bytes: &[u8], open: Token) -> Result<(SliceNode, usize), NibsError> {
    let mut offset = open.offset + open.len;
    let mut children = Vec::new();
    loop {
        let t = next_token(bytes, offset);
        if t.kind == TokenKind::ScopeEnd {
            offset = t.offset + t.len;
            break;
        }
        if t.kind == TokenKind::Eos {
            return Err(NibsError::InvalidTibs { offset: t.offset });
        }
        let (node, next_offset) = parse_value(arena, bytes, t)?;
        children.push(node);
        offset = next_offset;
    }
    if children.len() != 2 {
        return Err(NibsError::InvalidTibs { offset: open.offset });
    }
    let mut iter = children.into_iter();
    let value = iter.next().unwrap();
    let refs = iter.next().unwrap();
    let node = container::encode_scope(arena, value, refs)?;
    Ok((node, offset))
}

/// Resolves `\` escapes in a quoted string's interior bytes (already
/// trusted as UTF-8) into the final string handed to `encode_string`.
/// Supports the standard JSON escapes plus `\uXXXX`; a `\uXXXX` that does
/// not name a valid scalar value falls back to U+FFFD rather than
/// rejecting the input.
fn unescape(raw: &[u8]) -> Result<String, NibsError> {
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] != b'\\' {
            let start = i;
            while i < raw.len() && raw[i] != b'\\' {
                i += 1;
            }
            out.push_str(core::str::from_utf8(&raw[start..i]).unwrap_or(""));
            continue;
        }
        i += 1;
        match raw.get(i) {
            Some(b'"') => out.push('"'),
            Some(b'\\') => out.push('\\'),
            Some(b'/') => out.push('/'),
            Some(b'b') => out.push('\u{0008}'),
            Some(b'f') => out.push('\u{000C}'),
            Some(b'n') => out.push('\n'),
            Some(b'r') => out.push('\r'),
            Some(b't') => out.push('\t'),
            Some(b'u') => {
                let hex = raw.get(i + 1..i + 5).ok_or(NibsError::InvalidTibs { offset: i })?;
                let text = core::str::from_utf8(hex).map_err(|_| NibsError::InvalidTibs { offset: i })?;
                let code = u32::from_str_radix(text, 16)
                    .map_err(|_| NibsError::InvalidTibs { offset: i })?;
                out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
                i += 4;
            }
            Some(&other) => out.push(other as char),
            None => return Err(NibsError::InvalidTibs { offset: i }),
        }
        i += 1;
    }
    Ok(out)
}
