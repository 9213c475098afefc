//! A wrapper around the Keccak-f\[1600\] permutation.
//!
//! The round function itself is [`keccak::f1600`];
//! this module only exposes the 25 lanes as a 200-byte state.
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::sponge::DuplexSponge;
use super::Permutation;

/// A sponge based on the permutation [`keccak::f1600`]
/// using [`DuplexSponge`].
pub type KeccakSponge = DuplexSponge<KeccakF1600>;

/// The Keccak-f\[1600\] state, stored as 25 little-endian lanes.
///
/// Lanes are kept as `u64` so that the state is always 8-byte aligned,
/// and viewed as bytes through [`bytemuck`].
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct KeccakF1600([u64; 25]);

impl Permutation for KeccakF1600 {
    const N: usize = 200;

    fn permute(&mut self) {
        keccak::f1600(&mut self.0);
    }
}

impl AsRef<[u8]> for KeccakF1600 {
    fn as_ref(&self) -> &[u8] {
        bytemuck::cast_slice(&self.0)
    }
}

impl AsMut<[u8]> for KeccakF1600 {
    fn as_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.0)
    }
}
