//! PMNS mixing matrix.
//!
//! Standard factorisation into three single-plane rotations,
//!
//! ```text
//! U = R23(θ23) · U13(θ13, δ) · R12(θ12)
//! ```
//!
//! with the CP phase on the (1,3) block so that `U[e][3] = s13·e^{-iδ}`.
//! At δ = 0 the matrix is real.

use crate::complex::Complex;
use crate::matrix::Matrix3;
use crate::units::Angle;

/// Rotation in the (1,2) plane (solar sector).
pub fn rotation_12(theta12: Angle) -> Matrix3 {
    let (s, c) = (theta12.sin(), theta12.cos());
    Matrix3::from_real([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
}

/// Rotation in the (1,3) plane carrying the Dirac CP phase.
pub fn rotation_13(theta13: Angle, delta_cp: Angle) -> Matrix3 {
    let (s, c) = (theta13.sin(), theta13.cos());
    let phase = Complex::cis(delta_cp.as_radians());
    Matrix3::from_rows([
        [Complex::real(c), Complex::ZERO, phase.conj() * s],
        [Complex::ZERO, Complex::ONE, Complex::ZERO],
        [-(phase * s), Complex::ZERO, Complex::real(c)],
    ])
}

/// Rotation in the (2,3) plane (atmospheric sector).
pub fn rotation_23(theta23: Angle) -> Matrix3 {
    let (s, c) = (theta23.sin(), theta23.cos());
    Matrix3::from_real([[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]])
}

/// Build U from the three mixing angles and the CP phase.
///
/// Rows are flavors (e, μ, τ), columns are mass eigenstates (1, 2, 3).
pub fn pmns_matrix(theta12: Angle, theta13: Angle, theta23: Angle, delta_cp: Angle) -> Matrix3 {
    rotation_23(theta23) * rotation_13(theta13, delta_cp) * rotation_12(theta12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::PI;

    const EPSILON: f64 = 1e-14;

    fn assert_close(a: Complex, b: Complex) {
        assert_abs_diff_eq!(a.re, b.re, epsilon = EPSILON);
        assert_abs_diff_eq!(a.im, b.im, epsilon = EPSILON);
    }

    #[test]
    fn test_matches_closed_form() {
        let (t12, t13, t23, d) = (
            Angle::degrees(33.9),
            Angle::degrees(9.1),
            Angle::degrees(47.0),
            Angle::degrees(250.0),
        );
        let u = pmns_matrix(t12, t13, t23, d);

        let (s12, c12) = (t12.sin(), t12.cos());
        let (s13, c13) = (t13.sin(), t13.cos());
        let (s23, c23) = (t23.sin(), t23.cos());
        let eid = Complex::cis(d.as_radians());

        assert_close(u[(0, 0)], Complex::real(c12 * c13));
        assert_close(u[(0, 1)], Complex::real(s12 * c13));
        assert_close(u[(0, 2)], eid.conj() * s13);
        assert_close(u[(1, 0)], Complex::real(-s12 * c23) - eid * (c12 * s23 * s13));
        assert_close(u[(1, 1)], Complex::real(c12 * c23) - eid * (s12 * s23 * s13));
        assert_close(u[(1, 2)], Complex::real(s23 * c13));
        assert_close(u[(2, 0)], Complex::real(s12 * s23) - eid * (c12 * c23 * s13));
        assert_close(u[(2, 1)], Complex::real(-c12 * s23) - eid * (s12 * c23 * s13));
        assert_close(u[(2, 2)], Complex::real(c23 * c13));
    }

    #[test]
    fn test_real_when_delta_is_zero() {
        let u = pmns_matrix(
            Angle::degrees(33.9),
            Angle::degrees(9.1),
            Angle::degrees(45.0),
            Angle::ZERO,
        );
        for row in u.rows() {
            for z in row {
                assert_eq!(z.im, 0.0);
            }
        }
    }

    #[test]
    fn test_no_mixing_is_identity() {
        let u = pmns_matrix(Angle::ZERO, Angle::ZERO, Angle::ZERO, Angle::radians(1.0));
        assert_eq!(u, Matrix3::IDENTITY);
    }

    #[test]
    fn test_factors_are_unitary() {
        let t = Angle::radians(0.7);
        assert!(rotation_12(t).is_unitary(EPSILON));
        assert!(rotation_13(t, Angle::radians(PI / 3.0)).is_unitary(EPSILON));
        assert!(rotation_23(t).is_unitary(EPSILON));
    }

    #[test]
    fn test_factor_order_matters() {
        let (t12, t13, t23, d) = (
            Angle::degrees(30.0),
            Angle::degrees(10.0),
            Angle::degrees(50.0),
            Angle::degrees(90.0),
        );
        let swapped = rotation_12(t12) * rotation_13(t13, d) * rotation_23(t23);
        assert_ne!(pmns_matrix(t12, t13, t23, d), swapped);
    }
}
