// src/seed.rs

//! Derives the integer generation seed from a `tokenId` string.
//!
//! The parse never fails: an input without a leading integer becomes seed 0.
//! This is relied on by already-minted tokens, so it is kept lenient rather
//! than turned into an error.

use log::debug;

/// Parses `token_id` the way the minting front-end always has.
///
/// Leading and trailing whitespace is ignored, an optional sign is accepted,
/// then the longest run of ASCII digits is read. Anything after the digits is
/// ignored, so `"12abc"` is seed 12. No digits, or a value that does not fit
/// `i64`, yields seed 0.
///
/// The overflow case departs from a browser `parseInt`, which would return a
/// large inexact double there. The HTML scene carries the seed already parsed
/// here, so both adapters still start from the same seed 0.
pub fn parse_seed(token_id: &str) -> i64 {
    let trimmed = token_id.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digit_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        debug!("tokenId '{}' has no leading integer; using seed 0", token_id);
        return 0;
    }

    let digits = &rest[..digit_len];
    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };
    match signed.parse::<i64>() {
        Ok(seed) => seed,
        Err(e) => {
            debug!("tokenId '{}' does not fit a seed ({}); using seed 0", token_id, e);
            0
        }
    }
}
