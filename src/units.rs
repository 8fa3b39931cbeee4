//! Typed physical quantities.
//!
//! Each quantity is normalised to a fixed internal unit when it is built:
//!
//! | Quantity      | Internal unit |
//! |---------------|---------------|
//! | [`Angle`]       | radian        |
//! | [`Energy`]      | GeV           |
//! | [`Length`]      | km            |
//! | [`MassSquared`] | eV²           |
//! | [`LOverE`]      | km / GeV      |
//!
//! ```rust
//! use nuvac::units::{Angle, Energy, Length};
//!
//! let theta = Angle::degrees(90.0);
//! assert!((theta.as_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//!
//! let l_over_e = Length::km(3000.0) / Energy::mev(500.0);
//! assert!((l_over_e.as_km_per_gev() - 6000.0).abs() < 1e-9);
//! ```

use core::f64::consts::PI;
use core::fmt;
use core::ops::Div;

use serde::{Deserialize, Serialize};

/// Radians per degree.
const DEGREE: f64 = PI / 180.0;

// Energy scale factors, in GeV.
const EV: f64 = 1.0e-9;
const KEV: f64 = 1.0e-6;
const MEV: f64 = 1.0e-3;
const TEV: f64 = 1.0e3;

// Length scale factors, in km.
const METRE: f64 = 1.0e-3;
const CENTIMETRE: f64 = 1.0e-5;
const MILLIMETRE: f64 = 1.0e-6;

/// (meV)² in eV².
const MEV_SQ: f64 = 1.0e-6;

/// A plane angle, stored in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    pub const fn radians(value: f64) -> Self {
        Self(value)
    }

    pub fn degrees(value: f64) -> Self {
        Self(value * DEGREE)
    }

    /// Angle θ ∈ [0, π/2] with sin²θ = `s2`.
    ///
    /// Global fits quote mixing angles as sin²θ; this maps them back.
    pub fn from_sin_squared(s2: f64) -> Self {
        Self(s2.sqrt().asin())
    }

    pub const fn as_radians(self) -> f64 {
        self.0
    }

    pub fn as_degrees(self) -> f64 {
        self.0 / DEGREE
    }

    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn sin_squared(self) -> f64 {
        let s = self.0.sin();
        s * s
    }
}

/// A neutrino energy, stored in GeV.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Energy(f64);

impl Energy {
    pub const fn gev(value: f64) -> Self {
        Self(value)
    }

    pub fn tev(value: f64) -> Self {
        Self(value * TEV)
    }

    /// Mega-electronvolts.
    pub fn mev(value: f64) -> Self {
        Self(value * MEV)
    }

    pub fn kev(value: f64) -> Self {
        Self(value * KEV)
    }

    pub fn ev(value: f64) -> Self {
        Self(value * EV)
    }

    pub const fn as_gev(self) -> f64 {
        self.0
    }

    pub fn as_mev(self) -> f64 {
        self.0 / MEV
    }
}

/// A baseline length, stored in km.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    pub const fn km(value: f64) -> Self {
        Self(value)
    }

    pub fn m(value: f64) -> Self {
        Self(value * METRE)
    }

    pub fn cm(value: f64) -> Self {
        Self(value * CENTIMETRE)
    }

    pub fn mm(value: f64) -> Self {
        Self(value * MILLIMETRE)
    }

    pub const fn as_km(self) -> f64 {
        self.0
    }

    pub fn as_m(self) -> f64 {
        self.0 / METRE
    }
}

/// A mass-squared difference, stored in eV².
///
/// May be negative: the sign of Δm²₃₂ encodes the mass ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MassSquared(f64);

impl MassSquared {
    pub const ZERO: MassSquared = MassSquared(0.0);

    pub const fn ev2(value: f64) -> Self {
        Self(value)
    }

    /// (meV)², i.e. 10⁻⁶ eV².
    pub fn mev2(value: f64) -> Self {
        Self(value * MEV_SQ)
    }

    pub const fn as_ev2(self) -> f64 {
        self.0
    }

    /// Value in (meV)².
    pub fn as_mev2(self) -> f64 {
        self.0 / MEV_SQ
    }
}

impl core::ops::Add for MassSquared {
    type Output = MassSquared;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl core::ops::Sub for MassSquared {
    type Output = MassSquared;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl core::ops::Neg for MassSquared {
    type Output = MassSquared;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Ratio of baseline to energy, stored in km/GeV.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LOverE(f64);

impl LOverE {
    pub const ZERO: LOverE = LOverE(0.0);

    pub const fn km_per_gev(value: f64) -> Self {
        Self(value)
    }

    /// L/E for a beam, or zero when the energy is not positive.
    pub fn from_beam(baseline: Length, energy: Energy) -> Self {
        if energy.0 > 0.0 {
            baseline / energy
        } else {
            Self::ZERO
        }
    }

    pub const fn as_km_per_gev(self) -> f64 {
        self.0
    }
}

impl Div<Energy> for Length {
    type Output = LOverE;

    fn div(self, rhs: Energy) -> LOverE {
        LOverE(self.0 / rhs.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} degrees", self.as_degrees())
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} GeV", self.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

impl fmt::Display for MassSquared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} meV^2", self.as_mev2())
    }
}

impl fmt::Display for LOverE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km/GeV", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_energy_scales() {
        assert_relative_eq!(Energy::gev(1.0).as_gev(), Energy::ev(1e9).as_gev(), max_relative = 1e-12);
        assert_relative_eq!(Energy::mev(1.0).as_gev(), Energy::ev(1e6).as_gev(), max_relative = 1e-12);
        assert_relative_eq!(Energy::kev(1.0).as_gev(), Energy::ev(1e3).as_gev(), max_relative = 1e-12);
        assert_relative_eq!(Energy::tev(1.0).as_gev(), Energy::gev(1e3).as_gev(), max_relative = 1e-12);
        assert_relative_eq!(Energy::gev(2.5).as_mev(), 2500.0, max_relative = 1e-12);
    }

    #[test]
    fn test_length_scales() {
        assert_relative_eq!(Length::km(1.0).as_km(), Length::m(1e3).as_km(), max_relative = 1e-12);
        assert_relative_eq!(Length::cm(1.0).as_km(), Length::m(1e-2).as_km(), max_relative = 1e-12);
        assert_relative_eq!(Length::mm(1.0).as_km(), Length::m(1e-3).as_km(), max_relative = 1e-12);
        assert_relative_eq!(Length::cm(1.0).as_km(), Length::mm(10.0).as_km(), max_relative = 1e-12);
        assert_relative_eq!(Length::km(0.295).as_m(), 295.0, max_relative = 1e-12);
    }

    #[test]
    fn test_angle_degrees_radians() {
        assert_relative_eq!(Angle::degrees(180.0).as_radians(), PI, max_relative = 1e-12);
        assert_relative_eq!(Angle::radians(PI / 4.0).as_degrees(), 45.0, max_relative = 1e-12);
    }

    #[test]
    fn test_from_sin_squared() {
        let theta = Angle::from_sin_squared(0.5);
        assert_relative_eq!(theta.as_degrees(), 45.0, epsilon = 1e-12);
        assert_relative_eq!(Angle::from_sin_squared(0.307).sin_squared(), 0.307, epsilon = 1e-15);
    }

    #[test]
    fn test_mass_squared_scales() {
        assert_relative_eq!(MassSquared::mev2(1.0).as_ev2(), 1e-6, max_relative = 1e-12);
        assert_relative_eq!(MassSquared::ev2(7.5e-5).as_mev2(), 75.0, epsilon = 1e-9);
        let dm31 = MassSquared::ev2(2.32e-3) + MassSquared::ev2(7.5e-5);
        assert_relative_eq!(dm31.as_ev2(), 2.395e-3, epsilon = 1e-15);
    }

    #[test]
    fn test_length_over_energy() {
        let le = Length::km(295.0) / Energy::gev(0.6);
        assert_relative_eq!(le.as_km_per_gev(), 295.0 / 0.6, max_relative = 1e-12);
        assert_eq!(LOverE::from_beam(Length::km(295.0), Energy::gev(0.6)), le);
        assert_eq!(LOverE::from_beam(Length::km(295.0), Energy::gev(0.0)), LOverE::ZERO);
        assert_eq!(LOverE::from_beam(Length::km(295.0), Energy::gev(-1.0)), LOverE::ZERO);
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&Length::km(810.0)).unwrap();
        assert_eq!(json, "810.0");
        let back: Length = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Length::km(810.0));
    }
}
