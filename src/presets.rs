//! Published reference parameter sets.
//!
//! Mixing angles and splittings only; L and E stay at the
//! [`OscillationParameters::default`] beam (295 km, 0.6 GeV).
//! Mass splittings are the normal-ordering values.

use core::f64::consts::PI;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OscillationError;
use crate::parameters::OscillationParameters;
use crate::units::{Angle, MassSquared};

/// A year-labelled reference parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Pdg2013,
    Pdg2016,
    Pdg2020,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Pdg2013, Preset::Pdg2016, Preset::Pdg2020];

    pub const fn year(self) -> u16 {
        match self {
            Preset::Pdg2013 => 2013,
            Preset::Pdg2016 => 2016,
            Preset::Pdg2020 => 2020,
        }
    }

    pub fn parameters(self) -> OscillationParameters {
        match self {
            Preset::Pdg2013 => pdg2013(),
            Preset::Pdg2016 => pdg2016(),
            Preset::Pdg2020 => pdg2020(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PDG {}", self.year())
    }
}

impl FromStr for Preset {
    type Err = OscillationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let year = key.strip_prefix("pdg").unwrap_or(key.as_str()).trim_start_matches([' ', '-', '_']);
        match year {
            "2013" => Ok(Preset::Pdg2013),
            "2016" => Ok(Preset::Pdg2016),
            "2020" => Ok(Preset::Pdg2020),
            _ => Err(OscillationError::UnknownPreset(s.to_string())),
        }
    }
}

fn build(
    preset: Preset,
    theta12: Angle,
    theta13: Angle,
    theta23: Angle,
    delta_cp: Angle,
    dm2_21: MassSquared,
    dm2_32: MassSquared,
) -> OscillationParameters {
    let mut p = OscillationParameters::default();
    p.set_theta12(theta12);
    p.set_theta13(theta13);
    p.set_theta23(theta23);
    p.set_delta_cp(delta_cp);
    p.set_dm2_21(dm2_21);
    p.set_dm2_32(dm2_32);
    tracing::debug!(%preset, "built preset oscillation parameters");
    p
}

/// PDG 2013 review (maximal θ23, δ unmeasured).
pub fn pdg2013() -> OscillationParameters {
    build(
        Preset::Pdg2013,
        Angle::degrees(33.9),
        Angle::degrees(9.1),
        Angle::degrees(45.0),
        Angle::ZERO,
        MassSquared::ev2(7.50e-5),
        MassSquared::ev2(2.32e-3),
    )
}

/// PDG 2016 review (δ unmeasured).
pub fn pdg2016() -> OscillationParameters {
    build(
        Preset::Pdg2016,
        Angle::from_sin_squared(0.304),
        Angle::from_sin_squared(0.0219),
        Angle::from_sin_squared(0.51),
        Angle::ZERO,
        MassSquared::ev2(7.53e-5),
        MassSquared::ev2(2.44e-3),
    )
}

/// PDG 2020 review.
pub fn pdg2020() -> OscillationParameters {
    build(
        Preset::Pdg2020,
        Angle::from_sin_squared(0.307),
        Angle::from_sin_squared(0.0218),
        Angle::from_sin_squared(0.545),
        Angle::radians(1.36 * PI),
        MassSquared::ev2(7.53e-5),
        MassSquared::ev2(2.453e-3),
    )
}
