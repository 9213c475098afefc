//! Hexadecimal conversion at the API boundary.

use crate::SpongeResult;

/// Lowercase hexadecimal encoding of `bytes`.
#[inline]
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode a hexadecimal string, upper- or lowercase.
///
/// ```
/// use spongecraft::util::from_hex;
///
/// assert_eq!(from_hex("00fF").unwrap(), [0x00, 0xff]);
/// assert!(from_hex("0").is_err());
/// ```
#[inline]
pub fn from_hex(data: impl AsRef<[u8]>) -> SpongeResult<Vec<u8>> {
    Ok(hex::decode(data)?)
}
