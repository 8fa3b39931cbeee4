//! # nuvac
//!
//! Three-flavor neutrino oscillation probabilities in vacuum from the
//! PMNS mixing matrix.
//!
//! ## Features
//!
//! - **PMNS construction**: U = R23 · U13(δ) · R12 with full complex arithmetic
//! - **Vacuum oscillations**: closed-form P(ν_α → ν_β) for neutrinos and antineutrinos
//! - **Typed units**: angles, energies, lengths and Δm² normalised at construction
//! - **Presets**: PDG 2013, 2016 and 2020 reference parameter sets
//! - **Batch evaluation**: cached mixing matrix for energy or baseline scans
//!
//! ## Quick Start
//!
//! ```rust
//! use nuvac::{Flavor, OscillationParameters};
//! use nuvac::units::{Angle, Energy, Length};
//!
//! let mut params = OscillationParameters::default();
//! params.set_theta23(Angle::degrees(90.0));
//! params.set_energy(Energy::gev(1.0));
//! params.set_baseline(Length::km(3000.0));
//!
//! let p = params.p(Flavor::Muon, Flavor::Electron); // P(νμ → νe)
//! assert!(p >= 0.0 && p <= 1.0);
//! ```
//!
//! Matter effects are not modelled.

pub mod complex;
pub mod config;
pub mod error;
pub mod flavor;
pub mod matrix;
pub mod parameters;
pub mod pmns;
pub mod presets;
pub mod probability;
pub mod units;

pub use complex::Complex;
pub use config::OscillationConfig;
pub use error::{OscillationError, Result};
pub use flavor::{
    Flavor, NeutrinoState, Particle, ANTINEUTRINOS, NEUTRINOS, NU_E, NU_E_BAR, NU_MU, NU_MU_BAR,
    NU_TAU, NU_TAU_BAR,
};
pub use matrix::Matrix3;
pub use parameters::{MassOrdering, OscillationParameters};
pub use pmns::pmns_matrix;
pub use presets::Preset;
pub use probability::{
    probability, probability_between, probability_matrix, ProbabilityMatrix, VacuumBatch,
};
