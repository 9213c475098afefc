use core::ops::Range;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{Permutation, Sponge};
use crate::{SpongeError, SpongeResult};

/// The rate must be a whole number of lanes.
const LANE_BITS: usize = 64;

/// A cryptographic sponge over the permutation `P`.
///
/// Input is XORed into the first [`Sponge::rate`] bytes of the state;
/// the remaining capacity bytes are only ever mixed by the permutation.
/// The permutation runs as soon as the cursor reaches the end of the rate window,
/// so the cursor is always in `0..rate`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DuplexSponge<P: Permutation> {
    permutation: P,
    #[zeroize(skip)]
    rate: usize,
    #[zeroize(skip)]
    capacity: usize,
    pos: usize,
}

impl<P: Permutation> DuplexSponge<P> {
    /// Walk `len` bytes of the rate window from the cursor on,
    /// handing each contiguous piece of the window to `f` along with
    /// the matching range of the caller's buffer.
    fn duplex(&mut self, len: usize, mut f: impl FnMut(&mut [u8], Range<usize>)) {
        let mut done = 0;
        while done < len {
            assert!(self.pos < self.rate);
            let chunk_len = usize::min(len - done, self.rate - self.pos);
            let window = &mut self.permutation.as_mut()[self.pos..self.pos + chunk_len];
            f(window, done..done + chunk_len);

            done += chunk_len;
            self.pos += chunk_len;
            if self.pos == self.rate {
                self.permutation.permute();
                self.pos = 0;
            }
        }
    }
}

impl<P: Permutation> Sponge for DuplexSponge<P> {
    fn new(capacity_bits: usize) -> SpongeResult<Self> {
        let width_bits = P::N * 8;
        if capacity_bits % LANE_BITS != 0 || capacity_bits >= width_bits {
            log::warn!("rejecting sponge capacity {}", capacity_bits);
            return Err(SpongeError::InvalidParameter(format!(
                "capacity must be a multiple of {} bits below {}, got {}",
                LANE_BITS, width_bits, capacity_bits
            )));
        }
        let rate = (width_bits - capacity_bits) / 8;
        log::debug!("new sponge: capacity={} rate={}", capacity_bits, rate);
        Ok(Self {
            permutation: P::default(),
            rate,
            capacity: capacity_bits,
            pos: 0,
        })
    }

    fn rate(&self) -> usize {
        self.rate
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn absorb(&mut self, input: &[u8]) -> &mut Self {
        self.duplex(input.len(), |window, range| {
            window
                .iter_mut()
                .zip(&input[range])
                .for_each(|(s, x)| *s ^= x);
        });
        self
    }

    fn squeeze_into(&mut self, output: &mut [u8]) -> &mut Self {
        self.duplex(output.len(), |window, range| {
            output[range].copy_from_slice(window);
        });
        self
    }

    fn squeeze_xor_in_place(&mut self, data: &mut [u8]) -> &mut Self {
        self.duplex(data.len(), |window, range| {
            data[range]
                .iter_mut()
                .zip(window.iter())
                .for_each(|(x, s)| *x ^= s);
        });
        self
    }

    fn encrypt_in_place(&mut self, data: &mut [u8]) -> &mut Self {
        self.duplex(data.len(), |window, range| {
            data[range].iter_mut().zip(window.iter_mut()).for_each(|(x, s)| {
                *s ^= *x;
                *x = *s;
            });
        });
        self
    }

    fn decrypt_in_place(&mut self, data: &mut [u8]) -> &mut Self {
        self.duplex(data.len(), |window, range| {
            data[range].iter_mut().zip(window.iter_mut()).for_each(|(x, s)| {
                // the state ends up holding the ciphertext, as after encryption
                let cleartext = *x ^ *s;
                *s = *x;
                *x = cleartext;
            });
        });
        self
    }

    fn pad(&mut self, suffix: &[u8]) -> &mut Self {
        if let Some((last, head)) = suffix.split_last() {
            self.absorb(head);
            let (pos, rate) = (self.pos, self.rate);
            let state = self.permutation.as_mut();
            state[pos] ^= last;
            state[rate - 1] ^= 0x80;
        }
        log::trace!("pad: {} suffix bytes at position {}", suffix.len(), self.pos);
        self.permutation.permute();
        self.pos = 0;
        self
    }

    fn rewind(&mut self) -> &mut Self {
        self.pos = 0;
        self
    }

    fn forget(&mut self) -> &mut Self {
        log::trace!("forget: clearing sponge state");
        self.permutation.zeroize();
        self
    }
}

impl<P: Permutation> core::fmt::Debug for DuplexSponge<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Ensure that the state isn't accidentally logged
        f.debug_struct("DuplexSponge")
            .field("rate", &self.rate)
            .field("capacity", &self.capacity)
            .field("position", &self.pos)
            .finish()
    }
}
