//! SHA3 algorithm selection.
//!
//! Values correspond to final FIPS 202 (Aug 2015).
//! All hash objects follow the common [`SpongeHash`] interface.
//! [`shake128`] and [`shake256`] return a digest of the requested size from
//! [`SpongeHash::digest`]; alternatively, [`SpongeHash::extract`]
//! can be called repeatedly to get an unlimited stream of output.
//!
//! The `keccak_*` functions use the parameters of the original Keccak submission,
//! before NIST changed the padding.
//!
//! ```
//! use spongecraft::sha3::{sha3_256, shake128, SHAKE128_DEFAULT_BITS};
//! use spongecraft::util::to_hex;
//!
//! let h = sha3_256().chain_update(b"").unwrap();
//! assert_eq!(
//!     h.hexdigest().unwrap(),
//!     "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
//! );
//!
//! let mut xof = shake128(SHAKE128_DEFAULT_BITS).unwrap();
//! let stream = xof.extract(64);
//! assert_eq!(to_hex(&stream[..4]), "7f9c2ba4");
//! ```

use crate::hashing::SpongeHash;
use crate::padding::{PAD_KECCAK, PAD_RAWSHAKE, PAD_SHA3, PAD_SHAKE};
use crate::SpongeResult;

/// Default output size of [`shake128`] when used as a plain hash.
pub const SHAKE128_DEFAULT_BITS: usize = 256;
/// Default output size of [`shake256`] when used as a plain hash.
pub const SHAKE256_DEFAULT_BITS: usize = 512;

fn preset(capacity_bits: usize, output_bits: usize, padding: &[u8], name: &str) -> SpongeHash {
    // Guaranteed to succeed as presets are all valid parameters
    SpongeHash::new(capacity_bits, output_bits, padding)
        .expect("Internal error. Invalid preset parameters")
        .with_name(name)
}

/// SHA3-224 (c=448). Security level: 112/224 bits.
pub fn sha3_224() -> SpongeHash {
    preset(448, 224, PAD_SHA3, "SHA3-224")
}

/// SHA3-256 (c=512). Security level: 128/256 bits.
pub fn sha3_256() -> SpongeHash {
    preset(512, 256, PAD_SHA3, "SHA3-256")
}

/// SHA3-384 (c=768). Security level: 192/384 bits.
pub fn sha3_384() -> SpongeHash {
    preset(768, 384, PAD_SHA3, "SHA3-384")
}

/// SHA3-512 (c=1024). Security level: 256/512 bits.
pub fn sha3_512() -> SpongeHash {
    preset(1024, 512, PAD_SHA3, "SHA3-512")
}

/// SHAKE128 (c=256), with `output_bits` of output from [`SpongeHash::digest`].
///
/// Security level: 128 bits.
pub fn shake128(output_bits: usize) -> SpongeResult<SpongeHash> {
    Ok(SpongeHash::new(256, output_bits, PAD_SHAKE)?.with_name("SHAKE128"))
}

/// SHAKE256 (c=512), with `output_bits` of output from [`SpongeHash::digest`].
///
/// Security level: 256 bits.
pub fn shake256(output_bits: usize) -> SpongeResult<SpongeHash> {
    Ok(SpongeHash::new(512, output_bits, PAD_SHAKE)?.with_name("SHAKE256"))
}

/// RawSHAKE128 (c=256): SHAKE128 without the Sakura tree-hashing bits.
pub fn rawshake128(output_bits: usize) -> SpongeResult<SpongeHash> {
    Ok(SpongeHash::new(256, output_bits, PAD_RAWSHAKE)?.with_name("RawSHAKE128"))
}

/// RawSHAKE256 (c=512): SHAKE256 without the Sakura tree-hashing bits.
pub fn rawshake256(output_bits: usize) -> SpongeResult<SpongeHash> {
    Ok(SpongeHash::new(512, output_bits, PAD_RAWSHAKE)?.with_name("RawSHAKE256"))
}

/// Keccak-224 as submitted to the SHA3 competition (c=448).
pub fn keccak_224() -> SpongeHash {
    preset(448, 224, PAD_KECCAK, "Keccak-224")
}

/// Keccak-256 as submitted to the SHA3 competition (c=512).
pub fn keccak_256() -> SpongeHash {
    preset(512, 256, PAD_KECCAK, "Keccak-256")
}

/// Keccak-384 as submitted to the SHA3 competition (c=768).
pub fn keccak_384() -> SpongeHash {
    preset(768, 384, PAD_KECCAK, "Keccak-384")
}

/// Keccak-512 as submitted to the SHA3 competition (c=1024).
pub fn keccak_512() -> SpongeHash {
    preset(1024, 512, PAD_KECCAK, "Keccak-512")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpongeError;
    use digest::{Digest, ExtendableOutput, Update, XofReader};
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn shake_oracle<H: Default + Update + ExtendableOutput>(data: &[u8], len: usize) -> Vec<u8> {
        let mut hasher = H::default();
        Update::update(&mut hasher, data);
        let mut output = vec![0u8; len];
        hasher.finalize_xof().read(&mut output);
        output
    }

    #[test]
    fn test_names_and_sizes() {
        assert_eq!(sha3_224().name(), "SHA3-224");
        assert_eq!(sha3_224().block_size(), 144);
        assert_eq!(sha3_384().digest_size(), 48);
        assert_eq!(sha3_512().block_size(), 72);
        assert_eq!(shake128(SHAKE128_DEFAULT_BITS).unwrap().digest_size(), 32);
        assert_eq!(shake256(SHAKE256_DEFAULT_BITS).unwrap().digest_size(), 64);
        assert_eq!(shake128(1024).unwrap().block_size(), 168);
        assert_eq!(rawshake256(512).unwrap().name(), "RawSHAKE256");
        assert_eq!(keccak_256().name(), "Keccak-256");
    }

    #[test]
    fn test_shake_invalid_output() {
        assert!(matches!(shake128(101), Err(SpongeError::InvalidParameter(_))));
        assert!(matches!(rawshake128(7), Err(SpongeError::InvalidParameter(_))));
    }

    #[test]
    fn test_rawshake_is_separated_from_shake() {
        let shake = shake128(256).unwrap().digest().unwrap();
        let rawshake = rawshake128(256).unwrap().digest().unwrap();
        assert_ne!(shake, rawshake);
        assert_eq!(
            rawshake128(256).unwrap().hexdigest().unwrap(),
            "fa019a3b17630df6014853b5470773f13c3ab704478211d7a65867515dea1cc7"
        );
    }

    #[test]
    fn test_keccak_256_empty() {
        assert_eq!(
            keccak_256().hexdigest().unwrap(),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    proptest! {
        #[test]
        fn prop_sha3_matches_reference(data in vec(any::<u8>(), 0..400)) {
            let ours = |h: SpongeHash| h.chain_update(&data).unwrap().digest().unwrap();
            prop_assert_eq!(ours(sha3_224()), ::sha3::Sha3_224::digest(&data).to_vec());
            prop_assert_eq!(ours(sha3_256()), ::sha3::Sha3_256::digest(&data).to_vec());
            prop_assert_eq!(ours(sha3_384()), ::sha3::Sha3_384::digest(&data).to_vec());
            prop_assert_eq!(ours(sha3_512()), ::sha3::Sha3_512::digest(&data).to_vec());
            prop_assert_eq!(ours(keccak_256()), ::sha3::Keccak256::digest(&data).to_vec());
            prop_assert_eq!(ours(keccak_512()), ::sha3::Keccak512::digest(&data).to_vec());
        }

        #[test]
        fn prop_shake_matches_reference(data in vec(any::<u8>(), 0..400), len in 0usize..600) {
            let mut ours = shake128(SHAKE128_DEFAULT_BITS).unwrap().chain_update(&data).unwrap();
            prop_assert_eq!(ours.extract(len), shake_oracle::<::sha3::Shake128>(&data, len));

            let mut ours = shake256(SHAKE256_DEFAULT_BITS).unwrap().chain_update(&data).unwrap();
            prop_assert_eq!(ours.extract(len), shake_oracle::<::sha3::Shake256>(&data, len));
        }
    }
}
