//! Vacuum oscillation probabilities.
//!
//! For flavors α, β and mass-eigenstate pairs i > j:
//!
//! ```text
//! P(α→β) = δ_αβ − 4 Σ Re(W_ij) sin²(Δ_ij) + 2 Σ Im(W_ij) sin(2Δ_ij)
//!
//! W_ij = U*_αi U_βi U_αj U*_βj
//! Δ_ij = Δm²_ij L / 4E
//! ```
//!
//! Antineutrinos use U* in place of U, which flips the sign of every Im(W_ij).

use crate::flavor::{Flavor, NeutrinoState, Particle};
use crate::matrix::Matrix3;
use crate::parameters::OscillationParameters;
use crate::units::{Energy, LOverE, Length};

/// Conversion factor: eV² × km / GeV → dimensionless phase (divided by 4)
///
/// Natural units with 1 m = 5.07 × 10¹⁵ GeV⁻¹ and 1 eV² = 10⁻¹⁸ GeV², so
/// Δ = Δm² × L / (4E) ≈ 1.2675 × Δm²[eV²] × L[km] / E[GeV].
const EV_SQ_KM_TO_GEV_OVER4: f64 = 1e-18 * 5.07e18 / 4.0;

/// Mass-eigenstate pairs (i, j), zero-based, matching the order of [`splittings`].
const PAIRS: [(usize, usize); 3] = [(1, 0), (2, 0), (2, 1)];

/// 3×3 probability matrix type.
///
/// Indexed as `probs[α][β]` = P(ν_α → ν_β) where:
/// - 0 = electron (e)
/// - 1 = muon (μ)
/// - 2 = tau (τ)
pub type ProbabilityMatrix = [[f64; 3]; 3];

/// Δm²₂₁, Δm²₃₁, Δm²₃₂ in eV².
fn splittings(parameters: &OscillationParameters) -> [f64; 3] {
    [
        parameters.dm2_21().as_ev2(),
        parameters.dm2_31().as_ev2(),
        parameters.dm2_32().as_ev2(),
    ]
}

fn transition(
    u: &Matrix3,
    splittings: &[f64; 3],
    l_over_e: LOverE,
    alpha: Flavor,
    beta: Flavor,
    particle: Particle,
) -> f64 {
    let (a, b) = (alpha.index(), beta.index());
    let kinematic = EV_SQ_KM_TO_GEV_OVER4 * l_over_e.as_km_per_gev();

    let mut p = if a == b { 1.0 } else { 0.0 };
    for (&(i, j), &dm2) in PAIRS.iter().zip(splittings) {
        let w = u[(a, i)].conj() * u[(b, i)] * u[(a, j)] * u[(b, j)].conj();
        let cpv = match particle {
            Particle::Neutrino => w.im,
            Particle::Antineutrino => -w.im,
        };

        let delta = dm2 * kinematic;
        let sin_delta = delta.sin();
        p += -4.0 * w.re * sin_delta * sin_delta + 2.0 * cpv * (2.0 * delta).sin();
    }
    p
}

/// P(ν_α → ν_β) for neutrinos.
///
/// # Example
///
/// ```rust
/// use nuvac::{Flavor, OscillationParameters, probability};
///
/// let params = OscillationParameters::default();
/// let total: f64 = Flavor::ALL
///     .iter()
///     .map(|&beta| probability(&params, Flavor::Muon, beta))
///     .sum();
/// assert!((total - 1.0).abs() < 1e-12);
/// ```
pub fn probability(parameters: &OscillationParameters, alpha: Flavor, beta: Flavor) -> f64 {
    probability_between(
        parameters,
        NeutrinoState::neutrino(alpha),
        NeutrinoState::neutrino(beta),
    )
}

/// Transition probability between two (anti)neutrino states.
///
/// Oscillation conserves lepton number, so ν ↔ ν̄ transitions are zero.
pub fn probability_between(
    parameters: &OscillationParameters,
    initial: NeutrinoState,
    target: NeutrinoState,
) -> f64 {
    if initial.particle != target.particle {
        return 0.0;
    }
    transition(
        &parameters.pmns(),
        &splittings(parameters),
        parameters.l_over_e(),
        initial.flavor,
        target.flavor,
        initial.particle,
    )
}

/// All nine probabilities for one particle type.
///
/// Returns a 3×3 matrix where `probs[α][β]` = P(α → β).
pub fn probability_matrix(parameters: &OscillationParameters, particle: Particle) -> ProbabilityMatrix {
    VacuumBatch::from_parts(parameters.pmns(), splittings(parameters))
        .matrix_for(particle, parameters.l_over_e())
}

/// Mixing matrix and splittings cached for evaluation at many (L, E) points.
///
/// Mixing angles and mass splittings are frozen at construction; later
/// edits to the source parameters are not seen.
///
/// # Example
///
/// ```rust
/// use nuvac::{presets, VacuumBatch, NU_MU, NU_E};
/// use nuvac::units::{Energy, Length};
///
/// let batch = VacuumBatch::new(&presets::pdg2020());
/// let spectrum: Vec<f64> = (1..=100)
///     .map(|i| batch.probability_at(NU_MU, NU_E, Length::km(1300.0), Energy::gev(0.05 * i as f64)))
///     .collect();
/// assert!(spectrum.iter().all(|p| (-1e-9..=1.0 + 1e-9).contains(p)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VacuumBatch {
    pmns: Matrix3,
    splittings: [f64; 3],
}

impl VacuumBatch {
    pub fn new(parameters: &OscillationParameters) -> Self {
        let batch = Self::from_parts(parameters.pmns(), splittings(parameters));
        tracing::trace!(
            unitarity_defect = batch.pmns.unitarity_defect(),
            dm2_21 = batch.splittings[0],
            dm2_31 = batch.splittings[1],
            "cached PMNS matrix"
        );
        batch
    }

    fn from_parts(pmns: Matrix3, splittings: [f64; 3]) -> Self {
        Self { pmns, splittings }
    }

    pub fn pmns(&self) -> &Matrix3 {
        &self.pmns
    }

    pub fn probability_at(
        &self,
        initial: NeutrinoState,
        target: NeutrinoState,
        baseline: Length,
        energy: Energy,
    ) -> f64 {
        if initial.particle != target.particle {
            return 0.0;
        }
        transition(
            &self.pmns,
            &self.splittings,
            LOverE::from_beam(baseline, energy),
            initial.flavor,
            target.flavor,
            initial.particle,
        )
    }

    pub fn matrix_at(&self, particle: Particle, baseline: Length, energy: Energy) -> ProbabilityMatrix {
        self.matrix_for(particle, LOverE::from_beam(baseline, energy))
    }

    fn matrix_for(&self, particle: Particle, l_over_e: LOverE) -> ProbabilityMatrix {
        let mut probs = [[0.0; 3]; 3];
        for alpha in Flavor::ALL {
            for beta in Flavor::ALL {
                probs[alpha.index()][beta.index()] =
                    transition(&self.pmns, &self.splittings, l_over_e, alpha, beta, particle);
            }
        }
        probs
    }
}
