//! JSON configuration in caller-friendly units.
//!
//! ```json
//! { "preset": "pdg2020", "theta23_deg": 90.0, "energy_gev": 1.0, "baseline_km": 3000.0 }
//! ```
//!
//! Every field is optional. Unset fields fall back to the preset, or to
//! [`OscillationParameters::default`] when no preset is named.

use serde::{Deserialize, Serialize};

use crate::error::{OscillationError, Result};
use crate::parameters::OscillationParameters;
use crate::presets::Preset;
use crate::units::{Angle, Energy, Length, MassSquared};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OscillationConfig {
    pub preset: Option<Preset>,
    pub theta12_deg: Option<f64>,
    pub theta13_deg: Option<f64>,
    pub theta23_deg: Option<f64>,
    pub delta_cp_deg: Option<f64>,
    pub dm2_21_ev2: Option<f64>,
    pub dm2_32_ev2: Option<f64>,
    pub energy_gev: Option<f64>,
    pub baseline_km: Option<f64>,
}

impl OscillationConfig {
    /// Load from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| OscillationError::Config(format!("JSON parse error: {e}")))
    }

    /// Resolve into a validated parameter store.
    pub fn to_parameters(&self) -> Result<OscillationParameters> {
        let mut p = self.preset.map(Preset::parameters).unwrap_or_default();

        if let Some(v) = self.theta12_deg {
            p.set_theta12(Angle::degrees(v));
        }
        if let Some(v) = self.theta13_deg {
            p.set_theta13(Angle::degrees(v));
        }
        if let Some(v) = self.theta23_deg {
            p.set_theta23(Angle::degrees(v));
        }
        if let Some(v) = self.delta_cp_deg {
            p.set_delta_cp(Angle::degrees(v));
        }
        if let Some(v) = self.dm2_21_ev2 {
            p.set_dm2_21(MassSquared::ev2(v));
        }
        if let Some(v) = self.dm2_32_ev2 {
            p.set_dm2_32(MassSquared::ev2(v));
        }
        if let Some(v) = self.energy_gev {
            p.set_energy(Energy::gev(v));
        }
        if let Some(v) = self.baseline_km {
            p.set_baseline(Length::km(v));
        }

        p.validate()
            .map_err(|e| OscillationError::Config(e.to_string()))?;
        tracing::debug!(preset = ?self.preset, l_over_e = %p.l_over_e(), "resolved oscillation config");
        Ok(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_config_is_default() {
        let cfg = OscillationConfig::from_json("{}").unwrap();
        assert_eq!(cfg.to_parameters().unwrap(), OscillationParameters::default());
    }

    #[test]
    fn test_overrides_apply_on_top_of_preset() {
        let cfg = OscillationConfig::from_json(
            r#"{"preset": "pdg2020", "theta23_deg": 90.0, "energy_gev": 1.0, "baseline_km": 3000.0}"#,
        )
        .unwrap();
        let p = cfg.to_parameters().unwrap();
        let reference = crate::presets::pdg2020();

        assert_relative_eq!(p.theta23().as_degrees(), 90.0, epsilon = 1e-12);
        assert_eq!(p.energy(), Energy::gev(1.0));
        assert_eq!(p.baseline(), Length::km(3000.0));
        assert_eq!(p.theta12(), reference.theta12());
        assert_eq!(p.delta_cp(), reference.delta_cp());
        assert_eq!(p.dm2_32(), reference.dm2_32());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = OscillationConfig::from_json(r#"{"rho": 2.6}"#).unwrap_err();
        assert!(matches!(err, OscillationError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_preset() {
        assert!(OscillationConfig::from_json(r#"{"preset": "nufit52"}"#).is_err());
    }

    #[test]
    fn test_rejects_negative_energy() {
        let cfg = OscillationConfig {
            energy_gev: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(cfg.to_parameters(), Err(OscillationError::Config(_))));
    }
}
