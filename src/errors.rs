//! The `spongecraft` package exposes a single error type, [`SpongeError`],
//! shared by the sponge core and every construction built on top of it.
//!
//! Three families of errors can happen:
//!
//! - Invalid parameters ([`SpongeError::InvalidParameter`]):
//!   capacity or output sizes that cannot be expressed on the state,
//!   detected at construction time. No object is ever partially built.
//!
//! - Out-of-sequence operations ([`SpongeError::InvalidState`], [`SpongeError::WrongState`],
//!   [`SpongeError::Finalized`], [`SpongeError::NotInitialized`]):
//!   an operation was invoked in a phase where it is not legal.
//!   The check happens before any mutation, so the object is left untouched.
//!
//! - Boundary conversion errors ([`SpongeError::InvalidHex`]).
//!
//! A [`core::result::Result`] wrapper called [`SpongeResult`] (having error fixed to [`SpongeError`]) is also provided.

use std::{error::Error, fmt::Display};

/// An error raised by a sponge or by a construction built on a sponge.
#[derive(Debug, Clone, PartialEq)]
pub enum SpongeError {
    /// Capacity or output width is not representable (e.g. not byte- or lane-aligned).
    InvalidParameter(String),
    /// Hash operation invoked after extraction has started.
    InvalidState(&'static str),
    /// Stream cipher operation invoked in the wrong phase.
    WrongState(&'static str),
    /// Random bytes were requested before any entropy was supplied.
    NotInitialized,
    /// SpongeWrap operation invoked after the tag has been produced.
    Finalized,
    /// Malformed hexadecimal input.
    InvalidHex(hex::FromHexError),
}

/// The result type of fallible sponge operations.
pub type SpongeResult<T> = Result<T, SpongeError>;

impl Display for SpongeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Self::InvalidState(op) => write!(f, "Invalid state: {}", op),
            Self::WrongState(op) => write!(f, "Wrong state: {}", op),
            Self::NotInitialized => write!(f, "PRNG has no entropy"),
            Self::Finalized => write!(f, "Cannot add data after digest is called"),
            Self::InvalidHex(e) => write!(f, "Invalid hex: {}", e),
        }
    }
}

impl Error for SpongeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidHex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<hex::FromHexError> for SpongeError {
    fn from(value: hex::FromHexError) -> Self {
        SpongeError::InvalidHex(value)
    }
}
