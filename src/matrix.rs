//! Fixed-size 3×3 complex matrix.

use core::ops::{Index, Mul};

use crate::complex::Complex;

/// A 3×3 complex matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    rows: [[Complex; 3]; 3],
}

impl Matrix3 {
    pub const IDENTITY: Matrix3 = Matrix3 {
        rows: [
            [Complex::ONE, Complex::ZERO, Complex::ZERO],
            [Complex::ZERO, Complex::ONE, Complex::ZERO],
            [Complex::ZERO, Complex::ZERO, Complex::ONE],
        ],
    };

    pub const fn from_rows(rows: [[Complex; 3]; 3]) -> Self {
        Self { rows }
    }

    pub fn from_real(rows: [[f64; 3]; 3]) -> Self {
        Self {
            rows: rows.map(|row| row.map(Complex::real)),
        }
    }

    pub fn rows(&self) -> &[[Complex; 3]; 3] {
        &self.rows
    }

    /// Element-wise complex conjugate U*.
    pub fn conj(&self) -> Self {
        Self {
            rows: self.rows.map(|row| row.map(Complex::conj)),
        }
    }

    pub fn transpose(&self) -> Self {
        let mut out = [[Complex::ZERO; 3]; 3];
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &z) in row.iter().enumerate() {
                out[j][i] = z;
            }
        }
        Self { rows: out }
    }

    /// Conjugate transpose U†.
    pub fn adjoint(&self) -> Self {
        self.conj().transpose()
    }

    /// Largest |(U·U†)_{ij} − δ_{ij}| over all entries.
    pub fn unitarity_defect(&self) -> f64 {
        let product = *self * self.adjoint();
        let mut worst: f64 = 0.0;
        for (i, row) in product.rows.iter().enumerate() {
            for (j, &z) in row.iter().enumerate() {
                let expected = if i == j { Complex::ONE } else { Complex::ZERO };
                worst = worst.max((z - expected).abs());
            }
        }
        worst
    }

    pub fn is_unitary(&self, tolerance: f64) -> bool {
        self.unitarity_defect() <= tolerance
    }
}

impl Index<(usize, usize)> for Matrix3 {
    type Output = Complex;

    fn index(&self, (row, col): (usize, usize)) -> &Complex {
        &self.rows[row][col]
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        let mut out = [[Complex::ZERO; 3]; 3];
        for (i, out_row) in out.iter_mut().enumerate() {
            for (j, cell) in out_row.iter_mut().enumerate() {
                let mut acc = Complex::ZERO;
                for k in 0..3 {
                    acc += self.rows[i][k] * rhs.rows[k][j];
                }
                *cell = acc;
            }
        }
        Matrix3 { rows: out }
    }
}
