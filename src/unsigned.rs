use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Maximum number of bytes that an encoded `u64` can occupy.
pub const MAX_ENCODED_LEN: usize = 10;

/// Encodes `value` as a big-endian base-128 VLQ and appends it to `out`.
///
/// Every byte except the last has its high bit set; the terminator byte
/// carries the least-significant 7 bits. Returns the number of bytes
/// written. `0` encodes to the single byte `0x00`.
pub fn encode_unsigned(mut value: u64, out: &mut Vec<u8>) -> usize {
    // Groups are produced least-significant first, then flipped to the
    // big-endian wire order.
    let mut groups: SmallVec<[u8; MAX_ENCODED_LEN]> = SmallVec::new();
    groups.push((value & 0x7f) as u8);
    value >>= 7;
    while value != 0 {
        groups.push((value & 0x7f) as u8 | 0x80);
        value >>= 7;
    }
    out.extend(groups.iter().rev());
    groups.len()
}

/// Encodes a non-negative `i64` as an unsigned VLQ and appends it to `out`.
///
/// Fails with [`Error::InvalidArgument`] when `value` is negative; use
/// [`crate::encode_signed`] for values that may carry a sign.
pub fn encode_unsigned_from_i64(value: i64, out: &mut Vec<u8>) -> Result<usize> {
    let value = u64::try_from(value).map_err(|_| {
        Error::invalid(format!("cannot encode negative value {value} as unsigned VLQ"))
    })?;
    Ok(encode_unsigned(value, out))
}

/// Decodes a u64 VLQ from the front of the slice, advancing it on success.
///
/// Exactly one value is consumed; the slice is left pointing just past the
/// terminator byte so concatenated values can be decoded back to back.
pub fn decode_unsigned(input: &mut &[u8]) -> Result<u64> {
    let mut value = 0u64;
    for _ in 0..MAX_ENCODED_LEN {
        let Some((&byte, rest)) = input.split_first() else {
            return Err(Error::malformed(
                "unexpected end of input while decoding VLQ",
            ));
        };
        *input = rest;
        if value > u64::MAX >> 7 {
            return Err(Error::malformed("VLQ value exceeds 64-bit range"));
        }
        value = (value << 7) | (byte & 0x7f) as u64;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(Error::malformed("VLQ exceeds maximum encoded length"))
}

/// Decodes a u64 VLQ from the provided byte slice, returning the value and
/// bytes consumed.
pub fn decode_unsigned_with_len(input: &[u8]) -> Result<(u64, usize)> {
    let mut value = 0u64;
    for i in 0..MAX_ENCODED_LEN {
        if i >= input.len() {
            return Err(Error::malformed(
                "unexpected end of input while decoding VLQ",
            ));
        }
        let byte = input[i];
        if value > u64::MAX >> 7 {
            return Err(Error::malformed("VLQ value exceeds 64-bit range"));
        }
        value = (value << 7) | (byte & 0x7f) as u64;
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(Error::malformed("VLQ exceeds maximum encoded length"))
}
