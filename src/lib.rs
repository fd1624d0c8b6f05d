#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Shared error and result types.
pub mod error;
/// Signed (zigzag-mapped) VLQ codec, layered on the unsigned one.
pub mod signed;
/// Unsigned big-endian base-128 VLQ codec.
pub mod unsigned;

pub use error::{Error, Result};
pub use signed::{decode_signed, decode_signed_with_len, encode_signed};
pub use unsigned::{
    MAX_ENCODED_LEN, decode_unsigned, decode_unsigned_with_len, encode_unsigned,
    encode_unsigned_from_i64,
};
