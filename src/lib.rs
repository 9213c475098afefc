//! Spongecraft implements the Keccak sponge construction and a family of primitives built on top of it:
//! SHA3 hashing, a pseudo-random number generator, SpongeWrap authenticated encryption and a stream cipher.
//!
//! # Overview
//!
//! Everything is built on one state machine, the [`Sponge`] trait, implemented by [`DuplexSponge`]
//! over any fixed-width [`Permutation`] (by default Keccak-f\[1600\], [`KeccakSponge`]).
//! A sponge XORs input into a *rate* window of its state, permutes whenever the window is full,
//! and reads output from the same window.
//! [`Sponge::pad`] closes an absorbing phase with a domain-separation suffix and the final bit,
//! so that each construction below expresses its own framing rules as a different suffix (see [`padding`]):
//!
//! - [`SpongeHash`] is a hash with non-destructive digests and unlimited extraction
//!   (the standard parameters are in [`sha3`]);
//! - [`KeccakPrng`] accumulates entropy and produces random bytes, and is a [`rand::RngCore`];
//! - [`SpongeWrap`] authenticates headers and encrypts bodies, binding them in a single tag;
//! - [`SpongeStreamCipher`] XORs data with a keystream derived from initial key material.
//!
//! ```
//! use spongecraft::sha3::{sha3_256, shake128};
//!
//! let mut h = sha3_256();
//! h.update(b"The quick brown fox jumps over the lazy dog").unwrap();
//! let mut g = h.copy();
//! h.update(b".").unwrap();
//! g.update(b".").unwrap();
//! assert_eq!(h.digest().unwrap(), g.digest().unwrap());
//! assert_eq!(
//!     h.hexdigest().unwrap(),
//!     "a80f839cd4f83f6c3dafc87feae470045e4eb0d366397d5c6ce34ba1739f734d"
//! );
//!
//! // SHAKE can produce an unlimited stream
//! let mut xof = shake128(256).unwrap();
//! let head = xof.extract(1000);
//! assert_eq!(head.len(), 1000);
//! ```
//!
//! # Phases
//!
//! Every construction tracks its phase explicitly, and operations invoked in the wrong phase
//! fail with a [`SpongeError`] without touching the state:
//!
//! ```
//! use spongecraft::{SpongeError, SpongeWrap};
//!
//! let mut ctx: SpongeWrap = SpongeWrap::new(512).unwrap();
//! ctx.add_header(b"header").unwrap();
//! let tag = ctx.digest(16).unwrap();
//! assert_eq!(ctx.encrypt_body(b"too late"), Err(SpongeError::Finalized));
//! # let _ = tag;
//! ```
//!
//! # Sponges
//!
//! The raw sponge is public, for protocols that need their own framing:
//!
//! ```
//! use spongecraft::{KeccakSponge, Sponge};
//! use spongecraft::padding::PAD_KECCAK;
//!
//! let mut sponge = KeccakSponge::new(576).unwrap();
//! sponge.absorb(b"key").absorb(b"nonce").pad(PAD_KECCAK);
//! let keystream = sponge.squeeze(32);
//! assert_eq!(keystream.len(), 32);
//! ```
//!
//! Sponge states are wiped on drop (through [`zeroize`]), and never printed by their [`Debug`](core::fmt::Debug) implementation.

#[cfg(target_endian = "big")]
compile_error!(
    r#"
This crate doesn't support big-endian targets.
"#
);

/// Errors.
mod errors;
/// Sponge and permutation traits and implementations.
pub mod hash;
/// Hash functions over a sponge.
pub mod hashing;
/// Domain-separation suffixes.
pub mod padding;
/// Pseudo-random number generator.
pub mod prng;
/// SHA3 and Keccak parameters.
pub mod sha3;
/// Duplex authenticated encryption.
pub mod spongewrap;
/// Stream cipher.
pub mod stream_cipher;
/// Hexadecimal helpers.
pub mod util;

pub use errors::{SpongeError, SpongeResult};
pub use hash::{DuplexSponge, KeccakF1600, KeccakSponge, Permutation, Sponge};
pub use hashing::SpongeHash;
pub use prng::KeccakPrng;
pub use spongewrap::SpongeWrap;
pub use stream_cipher::SpongeStreamCipher;

/// Default sponge used by every construction ([`hash::KeccakSponge`]).
pub type DefaultSponge = hash::KeccakSponge;
