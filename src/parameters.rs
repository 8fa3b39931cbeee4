//! Oscillation parameter store.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{OscillationError, Result};
use crate::flavor::{Flavor, NeutrinoState};
use crate::matrix::Matrix3;
use crate::pmns::pmns_matrix;
use crate::probability;
use crate::units::{Angle, Energy, LOverE, Length, MassSquared};

/// Sign of Δm²₃₁.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassOrdering {
    Normal,
    Inverted,
}

/// Full physical state needed to evaluate a vacuum oscillation probability.
///
/// Values are held in radians, eV², GeV and km. Setters take typed
/// quantities and perform no range checks; call [`validate`] to check the
/// physical domain explicitly.
///
/// [`validate`]: OscillationParameters::validate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillationParameters {
    theta12: Angle,
    theta13: Angle,
    theta23: Angle,
    delta_cp: Angle,
    dm2_21: MassSquared,
    dm2_32: MassSquared,
    energy: Energy,
    baseline: Length,
}

impl Default for OscillationParameters {
    /// PDG (2013) mixing with a T2K-like beam: L = 295 km, E = 0.6 GeV.
    fn default() -> Self {
        Self {
            theta12: Angle::degrees(33.9),
            theta13: Angle::degrees(9.1),
            theta23: Angle::degrees(45.0),
            delta_cp: Angle::ZERO,
            dm2_21: MassSquared::ev2(7.50e-5),
            dm2_32: MassSquared::ev2(2.32e-3),
            energy: Energy::gev(0.6),
            baseline: Length::km(295.0),
        }
    }
}

impl OscillationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theta12(&self) -> Angle {
        self.theta12
    }

    pub fn theta13(&self) -> Angle {
        self.theta13
    }

    pub fn theta23(&self) -> Angle {
        self.theta23
    }

    pub fn delta_cp(&self) -> Angle {
        self.delta_cp
    }

    /// Δm²₂₁ = m₂² − m₁²
    pub fn dm2_21(&self) -> MassSquared {
        self.dm2_21
    }

    /// Δm²₃₂ = m₃² − m₂²
    pub fn dm2_32(&self) -> MassSquared {
        self.dm2_32
    }

    /// Δm²₃₁ = Δm²₃₂ + Δm²₂₁
    pub fn dm2_31(&self) -> MassSquared {
        self.dm2_32 + self.dm2_21
    }

    pub fn energy(&self) -> Energy {
        self.energy
    }

    pub fn baseline(&self) -> Length {
        self.baseline
    }

    /// L/E, or zero when the energy is not positive.
    pub fn l_over_e(&self) -> LOverE {
        LOverE::from_beam(self.baseline, self.energy)
    }

    /// Normal unless Δm²₃₁ < 0; a degenerate Δm²₃₁ = 0 counts as normal.
    pub fn mass_ordering(&self) -> MassOrdering {
        if self.dm2_31().as_ev2() < 0.0 {
            MassOrdering::Inverted
        } else {
            MassOrdering::Normal
        }
    }

    pub fn set_theta12(&mut self, theta: Angle) {
        self.theta12 = theta;
    }

    pub fn set_theta13(&mut self, theta: Angle) {
        self.theta13 = theta;
    }

    pub fn set_theta23(&mut self, theta: Angle) {
        self.theta23 = theta;
    }

    pub fn set_delta_cp(&mut self, delta: Angle) {
        self.delta_cp = delta;
    }

    pub fn set_dm2_21(&mut self, dm2: MassSquared) {
        self.dm2_21 = dm2;
    }

    pub fn set_dm2_32(&mut self, dm2: MassSquared) {
        self.dm2_32 = dm2;
    }

    /// Set Δm²₃₁; stored as Δm²₃₂ = Δm²₃₁ − Δm²₂₁ using the current Δm²₂₁.
    pub fn set_dm2_31(&mut self, dm2: MassSquared) {
        self.dm2_32 = dm2 - self.dm2_21;
    }

    pub fn set_energy(&mut self, energy: Energy) {
        self.energy = energy;
    }

    pub fn set_baseline(&mut self, baseline: Length) {
        self.baseline = baseline;
    }

    /// Keep E and move L so that L/E takes the given value.
    pub fn set_l_over_e(&mut self, l_over_e: LOverE) {
        self.baseline = Length::km(self.energy.as_gev() * l_over_e.as_km_per_gev());
    }

    /// The PMNS matrix for the current angles and phase.
    pub fn pmns(&self) -> Matrix3 {
        pmns_matrix(self.theta12, self.theta13, self.theta23, self.delta_cp)
    }

    /// P(ν_α → ν_β) for the current parameters.
    pub fn p(&self, alpha: Flavor, beta: Flavor) -> f64 {
        probability::probability(self, alpha, beta)
    }

    /// Transition probability between arbitrary (anti)neutrino states.
    pub fn p_between(&self, initial: NeutrinoState, target: NeutrinoState) -> f64 {
        probability::probability_between(self, initial, target)
    }

    /// Check every value is finite, E > 0 and L ≥ 0.
    ///
    /// Probability queries never call this; unphysical inputs otherwise
    /// flow through the formula unchanged.
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("theta12", self.theta12.as_radians()),
            ("theta13", self.theta13.as_radians()),
            ("theta23", self.theta23.as_radians()),
            ("delta_cp", self.delta_cp.as_radians()),
            ("dm2_21", self.dm2_21.as_ev2()),
            ("dm2_32", self.dm2_32.as_ev2()),
            ("energy", self.energy.as_gev()),
            ("baseline", self.baseline.as_km()),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(reject(format!("{name} must be finite, got {value}")));
            }
        }
        if self.energy.as_gev() <= 0.0 {
            return Err(reject(format!(
                "neutrino energy must be positive, got {}",
                self.energy
            )));
        }
        if self.baseline.as_km() < 0.0 {
            return Err(reject(format!(
                "baseline must be non-negative, got {}",
                self.baseline
            )));
        }
        Ok(())
    }
}

fn reject(message: String) -> OscillationError {
    tracing::warn!(%message, "rejected oscillation parameters");
    OscillationError::Validation(message)
}

impl fmt::Display for OscillationParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "theta_12 = {}", self.theta12)?;
        writeln!(f, "theta_23 = {}", self.theta23)?;
        writeln!(f, "theta_13 = {}", self.theta13)?;
        writeln!(f, "delta_cp = {}", self.delta_cp)?;
        writeln!(f, "(Delta m^2)_21 = {}", self.dm2_21)?;
        writeln!(f, "(Delta m^2)_32 = {}", self.dm2_32)?;
        writeln!(f, "(Delta m^2)_31 = {}", self.dm2_31())?;
        writeln!(f, "L   = {}", self.baseline)?;
        writeln!(f, "E   = {}", self.energy)?;
        write!(f, "L/E = {}", self.l_over_e())
    }
}
