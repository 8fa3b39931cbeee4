//! Error type for the fallible edges of the crate.
//!
//! The numerical core never fails; only validation, configuration loading
//! and string parsing return errors.

use thiserror::Error;

/// Root error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OscillationError {
    /// A parameter is outside its physical domain (E ≤ 0, L < 0, NaN, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration could not be parsed or resolved.
    #[error("config error: {0}")]
    Config(String),

    /// A flavor name did not match e, mu or tau.
    #[error("unknown neutrino flavor: {0:?}")]
    UnknownFlavor(String),

    /// A preset name did not match any published parameter set.
    #[error("unknown preset: {0:?}")]
    UnknownPreset(String),
}

pub type Result<T> = core::result::Result<T, OscillationError>;
