//! The Tibs tokenizer: a stateless, single-pass lexer over a byte buffer.

/// Kinds of token the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Null,
    Boolean,
    Number,
    Bytes,
    String,
    Ref,
    MapBegin,
    MapEnd,
    ListBegin,
    ListEnd,
    ScopeBegin,
    ScopeEnd,
    Eos,
    Error,
}

/// A `(type, offset, length)` descriptor: `offset` is the token's first
/// byte, `length` spans it inclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
    pub len: usize,
}

impl Token {
    fn new(kind: TokenKind, offset: usize, len: usize) -> Self {
        Token { kind, offset, len }
    }

    /// `[#`/`{#` (length 2) denote the indexed ARRAY/TRIE form; `[`/`{`
    /// (length 1) are plain LIST/MAP.
    pub fn is_indexed(&self) -> bool {
        self.len > 1
    }

    /// The token's raw source bytes.
    pub fn text<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.offset..self.offset + self.len]
    }
}

fn starts_with(input: &[u8], offset: usize, prefix: &[u8]) -> bool {
    input.len() >= offset + prefix.len() && &input[offset..offset + prefix.len()] == prefix
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Skips whitespace, `//` line comments, and the ignorable separators `,`
/// and `:`, returning the offset of the next significant byte (or
/// `input.len()` at end of input).
fn skip_ignorable(input: &[u8], mut offset: usize) -> usize {
    loop {
        match input.get(offset) {
            Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') | Some(b',') | Some(b':') => {
                offset += 1;
            }
            Some(b'/') if input.get(offset + 1) == Some(&b'/') => {
                offset += 2;
                while let Some(&b) = input.get(offset) {
                    offset += 1;
                    if b == b'\n' {
                        break;
                    }
                }
            }
            _ => return offset,
        }
    }
}

/// Scans one numeric literal starting at `offset` (already known to begin
/// with `-` or a digit): optional `-`, digits, optional `.` digits,
/// optional `[eE][+-]?` digits.
fn scan_number_len(input: &[u8], offset: usize) -> usize {
    let mut len = 0;
    if input.get(offset) == Some(&b'-') {
        len += 1;
    }
    while input.get(offset + len).copied().is_some_and(is_digit) {
        len += 1;
    }
    if input.get(offset + len) == Some(&b'.') {
        len += 1;
        while input.get(offset + len).copied().is_some_and(is_digit) {
            len += 1;
        }
    }
    if matches!(input.get(offset + len), Some(b'e') | Some(b'E')) {
        len += 1;
        if matches!(input.get(offset + len), Some(b'+') | Some(b'-')) {
            len += 1;
        }
        while input.get(offset + len).copied().is_some_and(is_digit) {
            len += 1;
        }
    }
    len
}

/// Returns the next token at or after `offset`, skipping ignorable bytes
/// first. Call repeatedly with `token.offset + token.len` to walk the
/// whole input; stop once `Eos` is returned.
pub fn next_token(input: &[u8], offset: usize) -> Token {
    let offset = skip_ignorable(input, offset);

    if offset >= input.len() {
        return Token::new(TokenKind::Eos, offset, 0);
    }

    if starts_with(input, offset, b"null") {
        return Token::new(TokenKind::Null, offset, 4);
    }
    if starts_with(input, offset, b"true") {
        return Token::new(TokenKind::Boolean, offset, 4);
    }
    if starts_with(input, offset, b"false") {
        return Token::new(TokenKind::Boolean, offset, 5);
    }
    if starts_with(input, offset, b"-inf") {
        return Token::new(TokenKind::Number, offset, 4);
    }
    if starts_with(input, offset, b"inf") {
        return Token::new(TokenKind::Number, offset, 3);
    }
    if starts_with(input, offset, b"nan") {
        return Token::new(TokenKind::Number, offset, 3);
    }

    let c = input[offset];

    if c == b'-' || is_digit(c) {
        return Token::new(TokenKind::Number, offset, scan_number_len(input, offset));
    }

    if c == b'"' {
        let mut i = offset + 1;
        loop {
            match input.get(i) {
                None => return Token::new(TokenKind::Error, offset, 1),
                Some(b'"') => return Token::new(TokenKind::String, offset, i + 1 - offset),
                Some(b'\\') => i += 2,
                Some(b'\n') | Some(b'\r') => return Token::new(TokenKind::Error, i, 1),
                Some(_) => i += 1,
            }
        }
    }

    if c == b'<' || c == b'|' {
        let close = c == b'|'; // '<' closes on '>', '|' closes on another '|'
        let closing = if close { b'|' } else { b'>' };
        let mut i = offset + 1;
        loop {
            match input.get(i) {
                None => return Token::new(TokenKind::Error, offset, 1),
                Some(&b) if b == closing => {
                    return Token::new(TokenKind::Bytes, offset, i + 1 - offset)
                }
                _ => i += 1,
            }
        }
    }

    if c == b'&' {
        let mut i = offset + 1;
        while input.get(i).copied().is_some_and(is_digit) {
            i += 1;
        }
        if i == offset + 1 {
            return Token::new(TokenKind::Error, offset, 1);
        }
        return Token::new(TokenKind::Ref, offset, i - offset);
    }

    if c == b'[' {
        let len = if input.get(offset + 1) == Some(&b'#') { 2 } else { 1 };
        return Token::new(TokenKind::ListBegin, offset, len);
    }
    if c == b']' {
        return Token::new(TokenKind::ListEnd, offset, 1);
    }
    if c == b'{' {
        let len = if input.get(offset + 1) == Some(&b'#') { 2 } else { 1 };
        return Token::new(TokenKind::MapBegin, offset, len);
    }
    if c == b'}' {
        return Token::new(TokenKind::MapEnd, offset, 1);
    }
    if c == b'(' {
        return Token::new(TokenKind::ScopeBegin, offset, 1);
    }
    if c == b')' {
        return Token::new(TokenKind::ScopeEnd, offset, 1);
    }

    Token::new(TokenKind::Error, offset, 1)
}
