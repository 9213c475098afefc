//! Keccak as a pseudo-random number generator.
//!
//! Entropy is absorbed into the sponge; the first request for random bytes pads the state
//! and switches to squeezing. Adding entropy after extraction rewinds the cursor and keeps absorbing
//! on top of the current state, so new output depends on everything seen so far.
//!
//! ```
//! use spongecraft::KeccakPrng;
//! use rand::Rng;
//!
//! let mut prng: KeccakPrng = KeccakPrng::new(1024).unwrap();
//! prng.add_entropy(b"some seed material");
//! let key = prng.get_random_bytes(32).unwrap();
//! assert_eq!(key.len(), 32);
//!
//! // it is also a [`rand::RngCore`]
//! let coin: bool = prng.gen();
//! # let _ = coin;
//! ```

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::hash::Sponge;
use crate::padding::PAD_KECCAK;
use crate::{DefaultSponge, SpongeError, SpongeResult};

/// Bytes drawn from the seeding generator in [`KeccakPrng::from_rng`].
const SEED_BYTES: usize = 64;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum PrngPhase {
    Unseeded,
    Absorbing,
    Extracting,
}

/// A sponge-based random number generator.
#[derive(Clone)]
pub struct KeccakPrng<S: Sponge = DefaultSponge> {
    sponge: S,
    phase: PrngPhase,
}

impl<S: Sponge> KeccakPrng<S> {
    /// Create an unseeded generator with the given capacity (in bits).
    pub fn new(capacity_bits: usize) -> SpongeResult<Self> {
        Ok(Self {
            sponge: S::new(capacity_bits)?,
            phase: PrngPhase::Unseeded,
        })
    }

    /// Create a generator seeded with bytes from `rng`.
    pub fn from_rng<R: RngCore + CryptoRng>(capacity_bits: usize, rng: &mut R) -> SpongeResult<Self> {
        let mut prng = Self::new(capacity_bits)?;
        let mut seed = [0u8; SEED_BYTES];
        rng.fill_bytes(&mut seed);
        prng.add_entropy(&seed);
        seed.zeroize();
        Ok(prng)
    }

    /// True once some entropy has been added.
    pub fn is_initialized(&self) -> bool {
        self.phase != PrngPhase::Unseeded
    }

    /// Import new random data into the state.
    ///
    /// Empty `data` is ignored.
    pub fn add_entropy(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        if self.phase == PrngPhase::Extracting {
            log::trace!("prng: reseeding after extraction");
            self.sponge.rewind();
        }
        self.sponge.absorb(data);
        self.phase = PrngPhase::Absorbing;
    }

    /// Return `nbytes` random bytes.
    pub fn get_random_bytes(&mut self, nbytes: usize) -> SpongeResult<Vec<u8>> {
        let mut output = vec![0u8; nbytes];
        self.fill_random_bytes(&mut output)?;
        Ok(output)
    }

    /// Fill `dest` with random bytes.
    pub fn fill_random_bytes(&mut self, dest: &mut [u8]) -> SpongeResult<()> {
        match self.phase {
            PrngPhase::Unseeded => {
                log::warn!("prng: random bytes requested before any entropy");
                return Err(SpongeError::NotInitialized);
            }
            PrngPhase::Absorbing => {
                log::trace!("prng: start extracting");
                self.sponge.pad(PAD_KECCAK);
                self.phase = PrngPhase::Extracting;
            }
            PrngPhase::Extracting => (),
        }
        self.sponge.squeeze_into(dest);
        Ok(())
    }
}

impl<S: Sponge> RngCore for KeccakPrng<S> {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(buf.as_mut());
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(buf.as_mut());
        u64::from_le_bytes(buf)
    }

    /// # Panics
    ///
    /// If no entropy has been added yet.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.fill_random_bytes(dest) {
            panic!("KeccakPrng: {}", e);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_random_bytes(dest).map_err(rand::Error::new)
    }
}

impl<S: Sponge> CryptoRng for KeccakPrng<S> {}

impl<S: Sponge> core::fmt::Debug for KeccakPrng<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeccakPrng")
            .field("capacity", &self.sponge.capacity())
            .field("phase", &self.phase)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(capacity: usize, seed: &[u8]) -> KeccakPrng {
        let mut prng = KeccakPrng::new(capacity).unwrap();
        prng.add_entropy(seed);
        prng
    }

    #[test]
    fn test_unseeded() {
        let mut prng = KeccakPrng::<DefaultSponge>::new(1024).unwrap();
        assert!(!prng.is_initialized());
        assert_eq!(prng.get_random_bytes(1), Err(SpongeError::NotInitialized));

        // empty entropy does not count
        prng.add_entropy(b"");
        assert!(!prng.is_initialized());
        assert_eq!(prng.get_random_bytes(1), Err(SpongeError::NotInitialized));

        prng.add_entropy(b"x");
        assert!(prng.is_initialized());
        assert_eq!(prng.get_random_bytes(3).unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_capacity() {
        assert!(matches!(
            KeccakPrng::<DefaultSponge>::new(1000),
            Err(SpongeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_empty_entropy_keeps_extracting() {
        let mut a = seeded(1024, b"seed");
        let mut b = seeded(1024, b"seed");
        a.get_random_bytes(10).unwrap();
        b.get_random_bytes(10).unwrap();
        a.add_entropy(b"");
        assert_eq!(a.get_random_bytes(32).unwrap(), b.get_random_bytes(32).unwrap());
    }

    #[test]
    fn test_reseed_depends_on_history() {
        let mut a = seeded(1024, b"seed");
        let mut b = seeded(1024, b"seed");
        a.get_random_bytes(32).unwrap();
        b.get_random_bytes(200).unwrap();

        a.add_entropy(b"more");
        b.add_entropy(b"more");
        let fresh = seeded(1024, b"seedmore").get_random_bytes(32).unwrap();
        let a_out = a.get_random_bytes(32).unwrap();
        let b_out = b.get_random_bytes(32).unwrap();
        assert_ne!(a_out, b_out);
        assert_ne!(a_out, fresh);
    }

    #[test]
    fn test_rng_core() {
        let mut prng = seeded(576, b"seed");
        let mut reference = prng.clone();

        let bytes = reference.get_random_bytes(12).unwrap();
        assert_eq!(prng.next_u32().to_le_bytes(), bytes[..4]);
        assert_eq!(prng.next_u64().to_le_bytes(), bytes[4..]);

        let mut buf = [0u8; 5];
        prng.try_fill_bytes(&mut buf).unwrap();
        assert_eq!(buf.to_vec(), reference.get_random_bytes(5).unwrap());
    }

    #[test]
    fn test_try_fill_unseeded() {
        let mut prng = KeccakPrng::<DefaultSponge>::new(512).unwrap();
        let mut buf = [0u8; 4];
        assert!(prng.try_fill_bytes(&mut buf).is_err());
    }

    #[test]
    #[should_panic(expected = "PRNG has no entropy")]
    fn test_fill_bytes_unseeded_panics() {
        let mut prng = KeccakPrng::<DefaultSponge>::new(512).unwrap();
        prng.next_u32();
    }

    #[test]
    fn test_from_rng() {
        let mut a = KeccakPrng::<DefaultSponge>::from_rng(1024, &mut StdRng::seed_from_u64(7)).unwrap();
        let mut b = KeccakPrng::<DefaultSponge>::from_rng(1024, &mut StdRng::seed_from_u64(7)).unwrap();
        let mut c = KeccakPrng::<DefaultSponge>::from_rng(1024, &mut StdRng::seed_from_u64(8)).unwrap();
        assert!(a.is_initialized());
        let out = a.get_random_bytes(32).unwrap();
        assert_eq!(out, b.get_random_bytes(32).unwrap());
        assert_ne!(out, c.get_random_bytes(32).unwrap());
    }

    #[test]
    fn test_debug_hides_state() {
        let prng = seeded(1024, b"secret seed");
        assert_eq!(format!("{:?}", prng), "KeccakPrng { capacity: 1024, phase: Absorbing }");
    }

    proptest! {
        #[test]
        fn prop_extract_chunk_independent(
            seed in vec(any::<u8>(), 1..300),
            sizes in vec(1usize..200, 1..6),
            total in 0usize..800,
        ) {
            let expected = seeded(1024, &seed).get_random_bytes(total).unwrap();

            let mut prng = seeded(1024, &seed);
            let mut output = Vec::new();
            for size in sizes.iter().cycle() {
                if output.len() >= total {
                    break;
                }
                let n = usize::min(*size, total - output.len());
                output.extend(prng.get_random_bytes(n).unwrap());
            }
            prop_assert_eq!(output, expected);
        }

        #[test]
        fn prop_entropy_chunk_independent(
            seed in vec(any::<u8>(), 1..500),
            size in 1usize..50,
        ) {
            let mut prng = KeccakPrng::<DefaultSponge>::new(576).unwrap();
            for chunk in seed.chunks(size) {
                prng.add_entropy(chunk);
            }
            prop_assert_eq!(
                prng.get_random_bytes(100).unwrap(),
                seeded(576, &seed).get_random_bytes(100).unwrap()
            );
        }
    }
}
