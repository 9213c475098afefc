/// Keccak-f\[1600\] permutation.
pub mod keccak;
/// The sponge state machine.
pub mod sponge;

pub use keccak::{KeccakF1600, KeccakSponge};
pub use sponge::DuplexSponge;

use zeroize::Zeroize;

use crate::SpongeResult;

/// A fixed-width, keyless permutation over a byte state.
///
/// For implementors:
///
/// - The [`std::default::Default`] implementation *MUST* initialize the state to zero.
/// - [`Permutation::permute`] must be deterministic and must not depend on anything but the state.
/// - The byte view exposed by [`AsRef`]/[`AsMut`] is [`Permutation::N`] bytes long.
pub trait Permutation: Zeroize + Default + Clone + AsRef<[u8]> + AsMut<[u8]> {
    /// The width of the state in bytes.
    const N: usize;

    /// Permute the state in place.
    fn permute(&mut self);
}

/// A sponge is an abstract interface for absorbing data into, and squeezing data out of,
/// a fixed-size state.
///
/// The state is split into a *rate* window, the only part ever touched by input or output,
/// and a *capacity* that is carried from one permutation to the next.
/// A cursor ([`Sponge::position`]) tracks how many bytes of the current rate window were consumed;
/// every time it reaches [`Sponge::rate`], the state is permuted and the cursor goes back to zero.
///
/// Phases are up to the caller: [`Sponge::pad`] closes absorption and makes the sponge squeeze-ready,
/// [`Sponge::rewind`] moves the cursor back to the start of the window, and [`Sponge::forget`] clears the state.
///
/// **HAZARD**: Don't implement this trait unless you know what you are doing.
/// Consider using [`KeccakSponge`].
pub trait Sponge: Clone + Zeroize {
    /// Initializes a zero state with the given capacity (in bits).
    fn new(capacity_bits: usize) -> SpongeResult<Self>;

    /// Size of the rate window, in bytes.
    fn rate(&self) -> usize;

    /// Capacity, in bits.
    fn capacity(&self) -> usize;

    /// Bytes of the current rate window consumed since the last permutation.
    fn position(&self) -> usize;

    /// XOR `input` into the state.
    fn absorb(&mut self, input: &[u8]) -> &mut Self;

    /// Fill `output` with bytes read from the state.
    fn squeeze_into(&mut self, output: &mut [u8]) -> &mut Self;

    /// XOR `data` with the state, leaving the state unchanged.
    fn squeeze_xor_in_place(&mut self, data: &mut [u8]) -> &mut Self;

    /// XOR `data` into the state and replace it with the resulting state bytes.
    ///
    /// The state must have been absorbed and padded before encryption starts.
    fn encrypt_in_place(&mut self, data: &mut [u8]) -> &mut Self;

    /// Reverse of [`Sponge::encrypt_in_place`].
    ///
    /// Recovers the cleartext from `data` and leaves the state
    /// exactly as the matching encryption would have left it.
    fn decrypt_in_place(&mut self, data: &mut [u8]) -> &mut Self;

    /// Add `suffix` and the final bit, then permute.
    ///
    /// With an empty `suffix` the final bit is not flipped: the state is only permuted.
    fn pad(&mut self, suffix: &[u8]) -> &mut Self;

    /// Move the cursor back to the start of the rate window.
    fn rewind(&mut self) -> &mut Self;

    /// Clear the whole state. The capacity is kept.
    fn forget(&mut self) -> &mut Self;

    /// Independent copy of the sponge.
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Squeeze `nbytes` bytes.
    fn squeeze(&mut self, nbytes: usize) -> Vec<u8> {
        let mut output = vec![0u8; nbytes];
        self.squeeze_into(&mut output);
        output
    }

    /// Return `data` XORed with the state.
    fn squeeze_xor(&mut self, data: &[u8]) -> Vec<u8> {
        let mut output = data.to_vec();
        self.squeeze_xor_in_place(&mut output);
        output
    }

    /// Return `data` XORed into the state.
    fn encrypt(&mut self, data: &[u8]) -> Vec<u8> {
        let mut output = data.to_vec();
        self.encrypt_in_place(&mut output);
        output
    }

    /// Return the cleartext of `enc_data`.
    fn decrypt(&mut self, enc_data: &[u8]) -> Vec<u8> {
        let mut output = enc_data.to_vec();
        self.decrypt_in_place(&mut output);
        output
    }
}
