use crate::error::Result;
use crate::unsigned::{decode_unsigned, decode_unsigned_with_len, encode_unsigned};

/// Encodes a signed integer using zigzag + VLQ encoding.
///
/// The zigzag map interleaves magnitudes by sign (`0, -1, 1, -2, 2, …` map
/// to `0, 1, 2, 3, 4, …`), so small-magnitude values of either sign stay
/// short on the wire. Returns the number of bytes written.
pub fn encode_signed(value: i64, out: &mut Vec<u8>) -> usize {
    let zigzag = ((value << 1) ^ (value >> 63)) as u64;
    encode_unsigned(zigzag, out)
}

/// Decodes a zigzag/VLQ signed integer from the front of the slice,
/// advancing it on success.
pub fn decode_signed(input: &mut &[u8]) -> Result<i64> {
    let raw = decode_unsigned(input)?;
    Ok(unzigzag(raw))
}

/// Decodes a zigzag/VLQ signed integer from the provided byte slice,
/// returning the value and bytes consumed.
pub fn decode_signed_with_len(input: &[u8]) -> Result<(i64, usize)> {
    let (raw, len) = decode_unsigned_with_len(input)?;
    Ok((unzigzag(raw), len))
}

fn unzigzag(raw: u64) -> i64 {
    let magnitude = (raw >> 1) as i64;
    let sign = (raw & 1) as i64;
    magnitude ^ -sign
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn encoded(value: i64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_signed(value, &mut out);
        out
    }

    #[test]
    fn zigzag_interleaves_small_magnitudes() {
        assert_eq!(encoded(0), [0x00]);
        assert_eq!(encoded(-1), [0x01]);
        assert_eq!(encoded(1), [0x02]);
        assert_eq!(encoded(-2), [0x03]);
        assert_eq!(encoded(2), [0x04]);
        assert_eq!(encoded(63), [0x7e]);
        assert_eq!(encoded(-64), [0x7f]);
        assert_eq!(encoded(64), [0x81, 0x00]);
    }

    #[test]
    fn decodes_known_values() {
        let mut input: &[u8] = &[0x01];
        assert_eq!(decode_signed(&mut input).unwrap(), -1);

        let mut input: &[u8] = &[0x02];
        assert_eq!(decode_signed(&mut input).unwrap(), 1);

        let (value, len) = decode_signed_with_len(&[0x81, 0x00, 0xaa]).unwrap();
        assert_eq!(value, 64);
        assert_eq!(len, 2);
    }

    #[test]
    fn width_extremes_round_trip() {
        for value in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX] {
            let bytes = encoded(value);
            let mut input = bytes.as_slice();
            assert_eq!(decode_signed(&mut input).unwrap(), value);
            assert!(input.is_empty());
        }
    }

    #[test]
    fn propagates_unsigned_decode_errors() {
        let mut input: &[u8] = &[0x80, 0x80];
        assert!(matches!(
            decode_signed(&mut input),
            Err(Error::MalformedInput(_))
        ));
    }
}
