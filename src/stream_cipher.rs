//! Stream cipher with a sponge.
//!
//! A stream cipher is a PRNG seeded with the key, whose output is XORed with the data.
//! Each message *must* therefore use a unique stream, either through a unique key or a unique IV:
//! otherwise the data can be trivially recovered.
//!
//! ```
//! use spongecraft::SpongeStreamCipher;
//!
//! let mut sender = SpongeStreamCipher::keccak(576).unwrap();
//! sender.add_initial_data(b"key").unwrap();
//! sender.add_initial_data(b"nonce").unwrap();
//! let ciphertext = sender.encrypt(b"attack at dawn").unwrap();
//!
//! let mut receiver = SpongeStreamCipher::keccak(576).unwrap();
//! receiver.add_initial_data(b"keynonce").unwrap();
//! assert_eq!(receiver.decrypt(&ciphertext).unwrap(), b"attack at dawn");
//! ```

use crate::hash::{KeccakSponge, Sponge};
use crate::padding::PAD_KECCAK;
use crate::{DefaultSponge, SpongeError, SpongeResult};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CipherState {
    NoData,
    Initial,
    Encrypting,
    Decrypting,
}

/// A keystream generator over a sponge `S`.
///
/// An instance either encrypts or decrypts, never both.
#[derive(Clone)]
pub struct SpongeStreamCipher<S: Sponge = DefaultSponge> {
    sponge: S,
    state: CipherState,
    initial_data_pad: Vec<u8>,
}

impl SpongeStreamCipher<KeccakSponge> {
    /// A stream cipher over [`KeccakSponge`] with the given capacity (in bits),
    /// closing the initial data with [`PAD_KECCAK`].
    pub fn keccak(capacity_bits: usize) -> SpongeResult<Self> {
        Ok(Self::new(KeccakSponge::new(capacity_bits)?, PAD_KECCAK))
    }
}

impl<S: Sponge> SpongeStreamCipher<S> {
    /// Wrap a fresh `sponge`; `initial_data_pad` closes the initial data
    /// before the first keystream byte.
    pub fn new(sponge: S, initial_data_pad: &[u8]) -> Self {
        Self {
            sponge,
            state: CipherState::NoData,
            initial_data_pad: initial_data_pad.to_vec(),
        }
    }

    /// Add initial data: key, IV, extra plaintext.
    pub fn add_initial_data(&mut self, data: &[u8]) -> SpongeResult<()> {
        match self.state {
            CipherState::NoData | CipherState::Initial => {
                self.state = CipherState::Initial;
                self.sponge.absorb(data);
                Ok(())
            }
            _ => self.wrong_state("add_initial_data after the keystream started"),
        }
    }

    /// Return `plaintext` XORed with the keystream.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> SpongeResult<Vec<u8>> {
        self.start(CipherState::Encrypting, "encrypt")?;
        Ok(self.sponge.squeeze_xor(plaintext))
    }

    /// Return `ciphertext` XORed with the keystream.
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> SpongeResult<Vec<u8>> {
        self.start(CipherState::Decrypting, "decrypt")?;
        Ok(self.sponge.squeeze_xor(ciphertext))
    }

    /// Move to `target`, closing the initial data on the first call.
    fn start(&mut self, target: CipherState, op: &'static str) -> SpongeResult<()> {
        match self.state {
            CipherState::Initial => {
                log::trace!("stream cipher: starting keystream ({})", op);
                self.sponge.pad(&self.initial_data_pad);
                self.state = target;
                Ok(())
            }
            state if state == target => Ok(()),
            _ => self.wrong_state(op),
        }
    }

    fn wrong_state(&self, op: &'static str) -> SpongeResult<()> {
        log::warn!("stream cipher: rejected {} in state {:?}", op, self.state);
        Err(SpongeError::WrongState(op))
    }
}

impl<S: Sponge> core::fmt::Debug for SpongeStreamCipher<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpongeStreamCipher")
            .field("capacity", &self.sponge.capacity())
            .field("state", &self.state)
            .finish()
    }
}
