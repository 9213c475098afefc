//! A [`hashlib`]-style hash API over any [`Sponge`].
//!
//! [`SpongeHash`] absorbs with [`SpongeHash::update`] and produces
//! a fixed-size digest with [`SpongeHash::digest`] without disturbing the live state,
//! so that more data can be added afterwards.
//! Alternatively, [`SpongeHash::extract`] pads the live state once and
//! streams an unlimited amount of output, after which the object can no longer absorb.
//!
//! [`hashlib`]: https://docs.python.org/3/library/hashlib.html

use crate::hash::Sponge;
use crate::util::to_hex;
use crate::{DefaultSponge, SpongeError, SpongeResult};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum HashPhase {
    Absorbing,
    Extracting,
}

/// Hash function with parameters (capacity, output size, padding suffix) over a sponge `S`.
#[derive(Clone)]
pub struct SpongeHash<S: Sponge = DefaultSponge> {
    name: String,
    block_size: usize,
    digest_size: usize,
    padding: Vec<u8>,
    sponge: S,
    phase: HashPhase,
}

impl<S: Sponge> SpongeHash<S> {
    /// Create a hash with the given capacity and output length (both in bits)
    /// and padding suffix (the final bit is always added).
    pub fn new(capacity_bits: usize, output_bits: usize, padding: &[u8]) -> SpongeResult<Self> {
        if capacity_bits % 8 != 0 || output_bits % 8 != 0 {
            return Err(SpongeError::InvalidParameter(format!(
                "capacity_bits ({}) and output_bits ({}) must be multiple of 8",
                capacity_bits, output_bits
            )));
        }
        let sponge = S::new(capacity_bits)?;
        Ok(Self {
            name: format!("Keccak1600-{}", capacity_bits),
            block_size: sponge.rate(),
            digest_size: output_bits / 8,
            padding: padding.to_vec(),
            sponge,
            phase: HashPhase::Absorbing,
        })
    }

    /// Rename the hash.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Absorb `data` and return the hash, for initializing a hash with data in one expression.
    pub fn chain_update(mut self, data: impl AsRef<[u8]>) -> SpongeResult<Self> {
        self.update(data)?;
        Ok(self)
    }

    /// User-visible name of hash and parameters.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rate of the underlying sponge, in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Length of [`SpongeHash::digest`], in bytes.
    pub fn digest_size(&self) -> usize {
        self.digest_size
    }

    /// Update state with data.
    ///
    /// Cannot be used after [`SpongeHash::extract`] is called.
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> SpongeResult<()> {
        self.check_absorbing("update after extract")?;
        self.sponge.absorb(data.as_ref());
        Ok(())
    }

    /// Return the final hash digest.
    ///
    /// The state is not changed, so [`SpongeHash::update`] can be
    /// called again to add more data.
    pub fn digest(&self) -> SpongeResult<Vec<u8>> {
        self.check_absorbing("digest after extract")?;
        let mut tmp = self.sponge.copy();
        tmp.pad(&self.padding);
        Ok(tmp.squeeze(self.digest_size))
    }

    /// [`SpongeHash::digest`] as a lowercase hexadecimal string.
    pub fn hexdigest(&self) -> SpongeResult<String> {
        self.digest().map(to_hex)
    }

    /// Extract `count` bytes from the hash state.
    ///
    /// Can be called repeatedly to get an unlimited stream of output.
    /// It *does* change the state: [`SpongeHash::update`], [`SpongeHash::digest`]
    /// and [`SpongeHash::hexdigest`] fail once extraction has started.
    pub fn extract(&mut self, count: usize) -> Vec<u8> {
        let mut output = vec![0u8; count];
        self.extract_into(&mut output);
        output
    }

    /// Like [`SpongeHash::extract`], writing into `output`.
    pub fn extract_into(&mut self, output: &mut [u8]) {
        if self.phase == HashPhase::Absorbing {
            log::trace!("{}: start extracting", self.name);
            self.sponge.pad(&self.padding);
            self.phase = HashPhase::Extracting;
        }
        self.sponge.squeeze_into(output);
    }

    /// Go back to the empty, absorbing state.
    pub fn reset(&mut self) {
        self.sponge.forget().rewind();
        self.phase = HashPhase::Absorbing;
    }

    /// Independent copy of the current state.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn check_absorbing(&self, op: &'static str) -> SpongeResult<()> {
        match self.phase {
            HashPhase::Absorbing => Ok(()),
            HashPhase::Extracting => {
                log::warn!("{}: rejected {}", self.name, op);
                Err(SpongeError::InvalidState(op))
            }
        }
    }
}

impl<S: Sponge> core::fmt::Debug for SpongeHash<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpongeHash")
            .field("name", &self.name)
            .field("block_size", &self.block_size)
            .field("digest_size", &self.digest_size)
            .field("phase", &self.phase)
            .finish()
    }
}
