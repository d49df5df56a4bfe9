//! End-to-end Tibs-source-to-Nibs-bytes scenarios (SPEC_FULL.md §6.1, §8.2),
//! exercised through the public `encode_tibs_to_vec` entry point rather
//! than any individual module, the way `tests/smoke_test.rs` drives the
//! whole verify path rather than one internal stage at a time.

use nibs::encode_tibs_to_vec;

fn hex_bytes(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() / 2);
    let digits: Vec<u8> = s
        .bytes()
        .map(|b| match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => panic!("non-hex fixture byte"),
        })
        .collect();
    for pair in digits.chunks_exact(2) {
        out.push((pair[0] << 4) | pair[1]);
    }
    out
}

#[test]
fn null_true_false_zero() {
    assert_eq!(&*encode_tibs_to_vec("null").unwrap(), &hex_bytes("22")[..]);
    assert_eq!(&*encode_tibs_to_vec("true").unwrap(), &hex_bytes("21")[..]);
    assert_eq!(&*encode_tibs_to_vec("false").unwrap(), &hex_bytes("20")[..]);
    assert_eq!(&*encode_tibs_to_vec("0").unwrap(), &hex_bytes("00")[..]);
}

#[test]
fn negative_integers_across_all_widths() {
    assert_eq!(&*encode_tibs_to_vec("-10").unwrap(), &hex_bytes("0c13")[..]);
    assert_eq!(&*encode_tibs_to_vec("-1000").unwrap(), &hex_bytes("0dcf07")[..]);
    assert_eq!(
        &*encode_tibs_to_vec("-100000").unwrap(),
        &hex_bytes("0e3f0d0300")[..]
    );
    assert_eq!(
        &*encode_tibs_to_vec("-10000000000").unwrap(),
        &hex_bytes("0fffc717a804000000")[..]
    );
}

#[test]
fn doubles_including_the_one_byte_zero_form() {
    assert_eq!(&*encode_tibs_to_vec("0.0").unwrap(), &hex_bytes("10")[..]);
    assert_eq!(
        &*encode_tibs_to_vec("1.0").unwrap(),
        &hex_bytes("1f000000000000f03f")[..]
    );
    assert_eq!(
        &*encode_tibs_to_vec("3.14159265358979").unwrap(),
        &hex_bytes("1f182d4454fb210940")[..]
    );
}

#[test]
fn nan_and_infinities() {
    let nan = encode_tibs_to_vec("nan").unwrap();
    assert_eq!(&*nan, &hex_bytes("1f000000000000f87f")[..]);
    let inf = encode_tibs_to_vec("inf").unwrap();
    assert_eq!(inf[0] >> 4, 1); // FLOAT
    let neg_inf = encode_tibs_to_vec("-inf").unwrap();
    assert_eq!(neg_inf[0] >> 4, 1);
}

#[test]
fn strings_plain_empty_and_hex_compressed() {
    assert_eq!(&*encode_tibs_to_vec(r#""""#).unwrap(), &hex_bytes("90")[..]);
    assert_eq!(
        &*encode_tibs_to_vec(r#""Hello""#).unwrap(),
        &hex_bytes("9548656c6c6f")[..]
    );
    assert_eq!(
        &*encode_tibs_to_vec(r#""deadbeef""#).unwrap(),
        &hex_bytes("a4deadbeef")[..]
    );
}

#[test]
fn bytes_literal_both_delimiter_forms() {
    assert_eq!(
        &*encode_tibs_to_vec("<deadbeef>").unwrap(),
        &hex_bytes("84deadbeef")[..]
    );
    assert_eq!(
        &*encode_tibs_to_vec("<de ad be ef>").unwrap(),
        &hex_bytes("84deadbeef")[..]
    );
    assert_eq!(
        &*encode_tibs_to_vec("|deadbeef|").unwrap(),
        &hex_bytes("84deadbeef")[..]
    );
}

#[test]
fn ref_literal() {
    assert_eq!(&*encode_tibs_to_vec("&3").unwrap(), &hex_bytes("33")[..]);
}

#[test]
fn flat_and_nested_lists() {
    assert_eq!(&*encode_tibs_to_vec("[]").unwrap(), &hex_bytes("b0")[..]);
    assert_eq!(
        &*encode_tibs_to_vec("[1,2,3]").unwrap(),
        &hex_bytes("b3020406")[..]
    );
    assert_eq!(
        &*encode_tibs_to_vec("[[1],[2],[3]]").unwrap(),
        &hex_bytes("b6b102b104b106")[..]
    );
}

#[test]
fn indexed_list_is_an_array() {
    let bytes = encode_tibs_to_vec("[# 1, 2]").unwrap();
    assert_eq!(bytes[0] >> 4, 13); // ARRAY
}

#[test]
fn plain_map_and_indexed_trie() {
    let m = encode_tibs_to_vec(r#"{"a": 1}"#).unwrap();
    assert_eq!(m[0] >> 4, 12); // MAP

    let trie = encode_tibs_to_vec(r#"{# "a": 1}"#).unwrap();
    assert_eq!(trie[0] >> 4, 14); // TRIE
}

#[test]
fn scope_wraps_a_value_and_its_reference_list() {
    let scope = encode_tibs_to_vec(r#"("hello", [&0])"#).unwrap();
    assert_eq!(scope[0] >> 4, 15); // SCOPE
}

#[test]
fn comments_and_separators_are_not_significant() {
    let with_noise = encode_tibs_to_vec("[ 1, 2 , 3 ] // trailing comment\n").unwrap();
    let without_noise = encode_tibs_to_vec("[1,2,3]").unwrap();
    assert_eq!(with_noise, without_noise);
}

#[test]
fn malformed_tibs_is_reported_as_invalid_tibs() {
    let err = encode_tibs_to_vec("[1, 2").unwrap_err();
    assert!(matches!(err, nibs::NibsError::InvalidTibs { .. }));
}

#[test]
fn unterminated_string_is_reported_as_invalid_tibs() {
    let err = encode_tibs_to_vec(r#""unterminated"#).unwrap_err();
    assert!(matches!(err, nibs::NibsError::InvalidTibs { .. }));
}
