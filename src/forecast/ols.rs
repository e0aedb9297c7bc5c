//! Ordinary least squares with an intercept.
//!
//! The regression is fit on mean-centred data. Slopes are the minimum-norm
//! least-squares solution, obtained from the eigen-decomposition of the
//! centred Gram matrix `XᵀX` (cyclic Jacobi). Directions whose eigenvalue is
//! negligible relative to the largest one are dropped, so collinear or
//! constant regressors still produce a well-defined fit.

use super::error::{ForecastError, Result};

/// Eigenvalues at or below this fraction of the largest one are treated as zero.
pub const RANK_TOLERANCE: f64 = 1e-10;

/// Upper bound on Jacobi sweeps before giving up.
const MAX_SWEEPS: usize = 100;

/// Fitted linear model `y = intercept + coefficients · x`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearFit {
    /// Fits the model to `rows` (one regressor vector per observation) and `targets`.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::Computation` if the inputs are empty, ragged,
    /// or non-finite, if intermediate sums overflow, or if the
    /// eigen-decomposition fails to converge.
    pub fn fit(rows: &[&[f64]], targets: &[f64]) -> Result<Self> {
        if rows.is_empty() || rows.len() != targets.len() {
            return Err(ForecastError::Computation(format!(
                "expected matching non-empty inputs, got {} rows and {} targets",
                rows.len(),
                targets.len()
            )));
        }

        let k = rows[0].len();
        if rows.iter().any(|row| row.len() != k) {
            return Err(ForecastError::Computation(
                "regressor rows have differing lengths".into(),
            ));
        }
        if rows
            .iter()
            .flat_map(|row| row.iter())
            .chain(targets)
            .any(|v| !v.is_finite())
        {
            return Err(ForecastError::Computation(
                "training data contains non-finite values".into(),
            ));
        }

        let n = rows.len() as f64;
        let x_mean: Vec<f64> = (0..k)
            .map(|j| rows.iter().map(|row| row[j]).sum::<f64>() / n)
            .collect();
        let y_mean = targets.iter().sum::<f64>() / n;

        let mut gram = vec![vec![0.0; k]; k];
        let mut moment = vec![0.0; k];
        for (row, &y) in rows.iter().zip(targets) {
            let dy = y - y_mean;
            for i in 0..k {
                let di = row[i] - x_mean[i];
                moment[i] += di * dy;
                for j in 0..k {
                    gram[i][j] += di * (row[j] - x_mean[j]);
                }
            }
        }

        if !y_mean.is_finite()
            || x_mean
                .iter()
                .chain(&moment)
                .chain(gram.iter().flatten())
                .any(|v| !v.is_finite())
        {
            return Err(ForecastError::Computation(
                "normal equations overflowed".into(),
            ));
        }

        let (eigenvalues, eigenvectors) = symmetric_eigen(gram)?;
        let lambda_max = eigenvalues.iter().fold(0.0_f64, |m, &l| m.max(l));
        let cutoff = lambda_max * RANK_TOLERANCE;

        let mut coefficients = vec![0.0; k];
        for (idx, &lambda) in eigenvalues.iter().enumerate() {
            if lambda <= cutoff || lambda <= 0.0 {
                continue;
            }
            let projection = (0..k)
                .map(|i| eigenvectors[i][idx] * moment[i])
                .sum::<f64>()
                / lambda;
            for (i, c) in coefficients.iter_mut().enumerate() {
                *c += projection * eigenvectors[i][idx];
            }
        }

        let intercept = y_mean
            - coefficients
                .iter()
                .zip(&x_mean)
                .map(|(c, m)| c * m)
                .sum::<f64>();

        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ForecastError::Computation(
                "regression produced non-finite coefficients".into(),
            ));
        }

        Ok(Self {
            intercept,
            coefficients,
        })
    }

    /// Predicts the target for a single regressor vector.
    ///
    /// `x` must have the same length as the rows used for fitting.
    pub fn predict(&self, x: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(x)
                .map(|(c, v)| c * v)
                .sum::<f64>()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

/// Eigen-decomposition of a symmetric matrix by cyclic Jacobi rotations.
///
/// Returns `(eigenvalues, eigenvectors)` where eigenvector `i` is column `i`
/// of the returned matrix.
fn symmetric_eigen(mut a: Vec<Vec<f64>>) -> Result<(Vec<f64>, Vec<Vec<f64>>)> {
    let k = a.len();
    let mut v: Vec<Vec<f64>> = (0..k)
        .map(|i| (0..k).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();

    let scale = a.iter().flatten().map(|x| x * x).sum::<f64>().sqrt();
    if !scale.is_finite() {
        return Err(ForecastError::Computation(
            "normal equations overflowed".into(),
        ));
    }
    if scale == 0.0 {
        return Ok((vec![0.0; k], v));
    }

    for _ in 0..MAX_SWEEPS {
        let off_diagonal = (0..k)
            .flat_map(|p| (p + 1..k).map(move |q| (p, q)))
            .map(|(p, q)| a[p][q] * a[p][q])
            .sum::<f64>()
            .sqrt();
        if off_diagonal <= f64::EPSILON * scale {
            let eigenvalues = (0..k).map(|i| a[i][i]).collect();
            return Ok((eigenvalues, v));
        }

        for p in 0..k {
            for q in p + 1..k {
                let apq = a[p][q];
                if apq == 0.0 {
                    continue;
                }
                let theta = (a[q][q] - a[p][p]) / (2.0 * apq);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for row in a.iter_mut() {
                    let (arp, arq) = (row[p], row[q]);
                    row[p] = c * arp - s * arq;
                    row[q] = s * arp + c * arq;
                }
                for r in 0..k {
                    let (apr, aqr) = (a[p][r], a[q][r]);
                    a[p][r] = c * apr - s * aqr;
                    a[q][r] = s * apr + c * aqr;
                }
                for row in v.iter_mut() {
                    let (vrp, vrq) = (row[p], row[q]);
                    row[p] = c * vrp - s * vrq;
                    row[q] = s * vrp + c * vrq;
                }
            }
        }
    }

    Err(ForecastError::Computation(
        "eigen-decomposition did not converge".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn recovers_exact_linear_relationship() {
        // y = 1 + 2a - b
        let rows: Vec<&[f64]> = vec![&[1.0, 0.0], &[0.0, 1.0], &[1.0, 1.0], &[2.0, 1.0]];
        let targets = [3.0, 0.0, 2.0, 4.0];
        let fit = LinearFit::fit(&rows, &targets).unwrap();

        assert!((fit.intercept() - 1.0).abs() < TOL);
        assert!((fit.coefficients()[0] - 2.0).abs() < TOL);
        assert!((fit.coefficients()[1] + 1.0).abs() < TOL);
        assert!((fit.predict(&[3.0, 2.0]) - 5.0).abs() < TOL);
    }

    #[test]
    fn collinear_regressors_use_minimum_norm_solution() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let rows: Vec<&[f64]> = series.windows(3).take(5).collect();
        let fit = LinearFit::fit(&rows, &series[3..]).unwrap();

        for c in fit.coefficients() {
            assert!((c - 1.0 / 3.0).abs() < TOL, "coefficient {c}");
        }
        assert!((fit.intercept() - 2.0).abs() < TOL);
        assert!((fit.predict(&[6.0, 7.0, 8.0]) - 9.0).abs() < TOL);
    }

    #[test]
    fn constant_regressors_predict_target_mean() {
        let rows: Vec<&[f64]> = vec![&[4.0, 4.0], &[4.0, 4.0], &[4.0, 4.0]];
        let fit = LinearFit::fit(&rows, &[1.0, 2.0, 6.0]).unwrap();

        assert_eq!(fit.coefficients(), &[0.0, 0.0]);
        assert!((fit.predict(&[4.0, 4.0]) - 3.0).abs() < TOL);
    }

    #[test]
    fn non_finite_input_is_a_computation_error() {
        let rows: Vec<&[f64]> = vec![&[1.0], &[f64::NAN]];
        let err = LinearFit::fit(&rows, &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ForecastError::Computation(_)));
    }

    #[test]
    fn overflowing_gram_matrix_is_a_computation_error() {
        let rows: Vec<&[f64]> = vec![&[1e200], &[-1e200], &[1e200]];
        let err = LinearFit::fit(&rows, &[0.0, 1.0, 0.0]).unwrap_err();
        assert!(matches!(err, ForecastError::Computation(_)));
    }

    #[test]
    fn mismatched_inputs_are_rejected() {
        let rows: Vec<&[f64]> = vec![&[1.0], &[2.0]];
        assert!(LinearFit::fit(&rows, &[1.0]).is_err());
        assert!(LinearFit::fit(&[], &[]).is_err());
    }

    #[test]
    fn jacobi_diagonalises_symmetric_matrix() {
        let (values, vectors) =
            symmetric_eigen(vec![vec![2.0, 1.0], vec![1.0, 2.0]]).unwrap();
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        assert!((sorted[0] - 1.0).abs() < TOL);
        assert!((sorted[1] - 3.0).abs() < TOL);

        // A v = λ v for each column
        for (idx, lambda) in values.iter().enumerate() {
            let v0 = vectors[0][idx];
            let v1 = vectors[1][idx];
            assert!((2.0 * v0 + v1 - lambda * v0).abs() < TOL);
            assert!((v0 + 2.0 * v1 - lambda * v1).abs() < TOL);
        }
    }
}
