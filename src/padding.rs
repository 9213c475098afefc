//! Domain-separation suffixes passed to [`crate::Sponge::pad`].
//!
//! The suffix is XORed into the state at the current position,
//! then the last bit of the rate is flipped.
//! Together they produce the Sakura-style padding:
//!
//! ```text
//! Keccak:    1 0*1
//! SHA3:      0 1 1 0*1
//! RawSHAKE:  1 1 1 0*1
//! SHAKE:     1 1 1 1 1 0*1
//! ```

/// Plain `10*1` padding of the original Keccak submission.
pub const PAD_KECCAK: &[u8] = &[0x01];

/// FIPS 202 SHA3 hash functions.
pub const PAD_SHA3: &[u8] = &[0x06];

/// FIPS 202 RawSHAKE extendable-output functions.
pub const PAD_RAWSHAKE: &[u8] = &[0x07];

/// FIPS 202 SHAKE extendable-output functions.
pub const PAD_SHAKE: &[u8] = &[0x1f];

/// SpongeWrap frame bit 0: the next block is not keystream.
pub const PAD_PLAINSTREAM: &[u8] = &[0x02];

/// SpongeWrap frame bit 1: the next block is keystream.
pub const PAD_KEYSTREAM: &[u8] = &[0x03];
