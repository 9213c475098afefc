//! SpongeWrap: authenticated encryption with a duplex sponge.
//!
//! See <http://sponge.noekeon.org/SpongeDuplex.pdf>.
//!
//! Each block is padded with a *frame bit* in front of the standard `10*1` padding,
//! telling what the next block will be:
//!
//! - frame bit 0 ([`PAD_PLAINSTREAM`]): the next block is not keystream (header data, or the tag);
//! - frame bit 1 ([`PAD_KEYSTREAM`]): the next block is keystream.
//!
//! Blocks hold at most `rate - 1` bytes, so that the padding always fits in the block it closes.
//! The data type can change at any time; the frame is closed immediately when it does.
//!
//! ```
//! use spongecraft::SpongeWrap;
//!
//! let mut sender: SpongeWrap = SpongeWrap::new(1536).unwrap();
//! sender.add_header(b"password").unwrap();
//! let ciphertext = sender.encrypt_body(b"Secret message").unwrap();
//! let tag = sender.digest(16).unwrap();
//!
//! let mut receiver: SpongeWrap = SpongeWrap::new(1536).unwrap();
//! receiver.add_header(b"password").unwrap();
//! assert_eq!(receiver.decrypt_body(&ciphertext).unwrap(), b"Secret message");
//! assert_eq!(receiver.digest(16).unwrap(), tag);
//! ```

use core::ops::Range;

use crate::hash::Sponge;
use crate::padding::{PAD_KEYSTREAM, PAD_PLAINSTREAM};
use crate::{DefaultSponge, SpongeError, SpongeResult};

/// What the blocks of the current frame carry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Frame {
    PlainStream,
    KeyStream,
}

impl Frame {
    fn suffix(self) -> &'static [u8] {
        match self {
            Frame::PlainStream => PAD_PLAINSTREAM,
            Frame::KeyStream => PAD_KEYSTREAM,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum WrapPhase {
    Framing(Frame),
    Finalized,
}

/// Authenticated encryption over a sponge `S`.
///
/// Once [`SpongeWrap::digest`] has been called, no more data can be added.
#[derive(Clone)]
pub struct SpongeWrap<S: Sponge = DefaultSponge> {
    sponge: S,
    phase: WrapPhase,
}

impl<S: Sponge> SpongeWrap<S> {
    /// Create a fresh context with the given capacity (in bits).
    pub fn new(capacity_bits: usize) -> SpongeResult<Self> {
        Ok(Self {
            sponge: S::new(capacity_bits)?,
            phase: WrapPhase::Framing(Frame::PlainStream),
        })
    }

    /// Authenticate `data` without encrypting it.
    pub fn add_header(&mut self, data: &[u8]) -> SpongeResult<()> {
        self.frame_blocks(Frame::PlainStream, data.len(), |sponge, range| {
            sponge.absorb(&data[range]);
        })
    }

    /// Encrypt and authenticate `data`, returning the ciphertext.
    pub fn encrypt_body(&mut self, data: &[u8]) -> SpongeResult<Vec<u8>> {
        let mut output = data.to_vec();
        let len = output.len();
        self.frame_blocks(Frame::KeyStream, len, |sponge, range| {
            sponge.encrypt_in_place(&mut output[range]);
        })?;
        Ok(output)
    }

    /// Decrypt and authenticate `data`, returning the cleartext.
    ///
    /// The cleartext must not be trusted before the tag from
    /// [`SpongeWrap::digest`] has been checked.
    pub fn decrypt_body(&mut self, data: &[u8]) -> SpongeResult<Vec<u8>> {
        let mut output = data.to_vec();
        let len = output.len();
        self.frame_blocks(Frame::KeyStream, len, |sponge, range| {
            sponge.decrypt_in_place(&mut output[range]);
        })?;
        Ok(output)
    }

    /// Close the transcript and return an `n`-byte authentication tag.
    pub fn digest(&mut self, n: usize) -> SpongeResult<Vec<u8>> {
        if self.phase == WrapPhase::Finalized {
            log::warn!("spongewrap: digest called twice");
            return Err(SpongeError::Finalized);
        }
        log::trace!("spongewrap: finalizing");
        self.sponge.pad(PAD_PLAINSTREAM);
        self.phase = WrapPhase::Finalized;
        Ok(self.sponge.squeeze(n))
    }

    /// Feed `len` bytes to `f`, at most `rate - 1` bytes per block,
    /// closing blocks and frames with the padding of `frame`.
    fn frame_blocks(
        &mut self,
        frame: Frame,
        len: usize,
        mut f: impl FnMut(&mut S, Range<usize>),
    ) -> SpongeResult<()> {
        let current = match self.phase {
            WrapPhase::Finalized => {
                log::warn!("spongewrap: data added after digest");
                return Err(SpongeError::Finalized);
            }
            WrapPhase::Framing(current) => current,
        };
        if current != frame {
            log::trace!("spongewrap: switching frame to {:?}", frame);
            self.sponge.pad(frame.suffix());
            self.phase = WrapPhase::Framing(frame);
        }

        let block_len = self.sponge.rate() - 1;
        let mut done = 0;
        while done < len {
            let avail = block_len - self.sponge.position();
            if avail == 0 {
                self.sponge.pad(frame.suffix());
                continue;
            }
            let chunk_len = usize::min(avail, len - done);
            f(&mut self.sponge, done..done + chunk_len);
            done += chunk_len;
        }
        Ok(())
    }
}

impl<S: Sponge> core::fmt::Debug for SpongeWrap<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpongeWrap")
            .field("capacity", &self.sponge.capacity())
            .field("phase", &self.phase)
            .finish()
    }
}
