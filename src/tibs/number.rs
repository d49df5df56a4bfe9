//! Numeric text → `i64`/`f64`, used by the driver to dispatch a `NUMBER`
//! token to `encode_integer` or `encode_double`.

use core::str::FromStr;

use crate::error::NibsError;

/// The decoded form of a `NUMBER` token.
pub enum Number {
    Int(i64),
    Float(f64),
}

/// Parses `text` (the exact span of a `NUMBER` token, or the bare literals
/// `inf`/`-inf`/`nan`) into an `Int` if it has no `.`/`e`/`E` and fits in
/// `i64`, else a `Float`. `nan` always maps to `f64::NAN` (which
/// `encode_double` then canonicalizes); `inf`/`-inf` map to the IEEE-754
/// infinities.
pub fn parse(text: &str) -> Result<Number, NibsError> {
    match text {
        "nan" => return Ok(Number::Float(f64::NAN)),
        "inf" => return Ok(Number::Float(f64::INFINITY)),
        "-inf" => return Ok(Number::Float(f64::NEG_INFINITY)),
        _ => {}
    }

    let is_float_shaped = text.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'));
    if !is_float_shaped {
        return match i64::from_str(text) {
            Ok(n) => Ok(Number::Int(n)),
            Err(_) => Err(NibsError::Overflow),
        };
    }

    f64::from_str(text)
        .map(Number::Float)
        .map_err(|_| NibsError::Overflow)
}
