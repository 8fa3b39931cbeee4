//! Neutrino flavors and particle/antiparticle states.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OscillationError;

/// One of the three active neutrino flavors.
///
/// Used as a row index of the PMNS matrix: e = 0, μ = 1, τ = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Electron,
    Muon,
    Tau,
}

impl Flavor {
    pub const ALL: [Flavor; 3] = [Flavor::Electron, Flavor::Muon, Flavor::Tau];

    pub const fn index(self) -> usize {
        match self {
            Flavor::Electron => 0,
            Flavor::Muon => 1,
            Flavor::Tau => 2,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Flavor::Electron => "e",
            Flavor::Muon => "μ",
            Flavor::Tau => "τ",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ν_{}", self.symbol())
    }
}

impl FromStr for Flavor {
    type Err = OscillationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e" | "electron" | "nue" | "nu_e" => Ok(Flavor::Electron),
            "mu" | "muon" | "numu" | "nu_mu" => Ok(Flavor::Muon),
            "tau" | "nutau" | "nu_tau" => Ok(Flavor::Tau),
            _ => Err(OscillationError::UnknownFlavor(s.to_string())),
        }
    }
}

/// Neutrino or antineutrino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Particle {
    #[default]
    Neutrino,
    Antineutrino,
}

impl Particle {
    pub const fn conjugate(self) -> Self {
        match self {
            Particle::Neutrino => Particle::Antineutrino,
            Particle::Antineutrino => Particle::Neutrino,
        }
    }
}

/// A flavor state together with its particle/antiparticle nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeutrinoState {
    pub flavor: Flavor,
    pub particle: Particle,
}

impl NeutrinoState {
    pub const fn neutrino(flavor: Flavor) -> Self {
        Self {
            flavor,
            particle: Particle::Neutrino,
        }
    }

    pub const fn antineutrino(flavor: Flavor) -> Self {
        Self {
            flavor,
            particle: Particle::Antineutrino,
        }
    }

    pub const fn is_neutrino(self) -> bool {
        matches!(self.particle, Particle::Neutrino)
    }

    pub const fn is_antineutrino(self) -> bool {
        matches!(self.particle, Particle::Antineutrino)
    }

    /// The CP conjugate: same flavor, opposite particle.
    pub const fn conjugate(self) -> Self {
        Self {
            flavor: self.flavor,
            particle: self.particle.conjugate(),
        }
    }
}

impl From<Flavor> for NeutrinoState {
    fn from(flavor: Flavor) -> Self {
        Self::neutrino(flavor)
    }
}

impl fmt::Display for NeutrinoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.particle {
            Particle::Neutrino => write!(f, "ν_{}", self.flavor.symbol()),
            Particle::Antineutrino => write!(f, "ν̄_{}", self.flavor.symbol()),
        }
    }
}

pub const NU_E: NeutrinoState = NeutrinoState::neutrino(Flavor::Electron);
pub const NU_MU: NeutrinoState = NeutrinoState::neutrino(Flavor::Muon);
pub const NU_TAU: NeutrinoState = NeutrinoState::neutrino(Flavor::Tau);
pub const NU_E_BAR: NeutrinoState = NeutrinoState::antineutrino(Flavor::Electron);
pub const NU_MU_BAR: NeutrinoState = NeutrinoState::antineutrino(Flavor::Muon);
pub const NU_TAU_BAR: NeutrinoState = NeutrinoState::antineutrino(Flavor::Tau);

pub const NEUTRINOS: [NeutrinoState; 3] = [NU_E, NU_MU, NU_TAU];
pub const ANTINEUTRINOS: [NeutrinoState; 3] = [NU_E_BAR, NU_MU_BAR, NU_TAU_BAR];
