// ABOUTME: Statistical helpers for strength analytics: least squares, means, deviations, rounding
// ABOUTME: Multi-feature regression solved by SVD so rank-deficient designs still fit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are far below 2^52

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use strength_core::errors::{AppError, AppResult};

/// Fitted linear model with goodness-of-fit measures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Constant term
    pub intercept: f64,
    /// One coefficient per feature column
    pub coefficients: Vec<f64>,
    /// Coefficient of determination on the training rows
    pub r_squared: f64,
    /// Mean absolute residual on the training rows
    pub mean_absolute_error: f64,
    /// Rows used in the fit
    pub sample_count: usize,
}

impl RegressionResult {
    /// Evaluate the model for one feature row
    #[must_use]
    pub fn predict(&self, features: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (coef, x)| coef.mul_add(*x, acc))
    }
}

/// Statistical routines used by the analyzers
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Ordinary least squares with intercept over row-major features
    ///
    /// Columns are centered and the system is solved through an SVD with
    /// singular values below `max_sv * eps * max(rows, cols)` discarded, which
    /// yields the minimum-norm solution when the design is rank deficient.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are empty or ragged, the target length
    /// differs, or the solution is not finite
    pub fn least_squares(rows: &[Vec<f64>], targets: &[f64]) -> AppResult<RegressionResult> {
        let n = rows.len();
        if n == 0 || targets.len() != n {
            return Err(AppError::invalid_input(format!(
                "Regression needs matching non-empty rows and targets, got {n} rows and {} targets",
                targets.len()
            )));
        }
        let p = rows[0].len();
        if p == 0 || rows.iter().any(|row| row.len() != p) {
            return Err(AppError::invalid_input(
                "Regression rows must share the same non-zero width",
            ));
        }
        if rows.iter().flatten().chain(targets).any(|v| !v.is_finite()) {
            return Err(AppError::invalid_input("Regression inputs must be finite"));
        }

        let count = n as f64;
        let col_means: Vec<f64> = (0..p)
            .map(|j| rows.iter().map(|row| row[j]).sum::<f64>() / count)
            .collect();
        let y_mean = targets.iter().sum::<f64>() / count;

        let design = DMatrix::from_fn(n, p, |i, j| rows[i][j] - col_means[j]);
        let response = DVector::from_iterator(n, targets.iter().map(|y| y - y_mean));

        let svd = design.svd(true, true);
        let max_sv = svd.singular_values.max();
        let eps = max_sv * f64::EPSILON * n.max(p) as f64;
        let solution = svd
            .solve(&response, eps)
            .map_err(|e| AppError::internal(format!("SVD solve failed: {e}")))?;

        let coefficients: Vec<f64> = solution.iter().copied().collect();
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(AppError::internal("Regression produced non-finite coefficients"));
        }
        let intercept = col_means
            .iter()
            .zip(&coefficients)
            .fold(y_mean, |acc, (mean, coef)| (-mean).mul_add(*coef, acc));

        let mut result = RegressionResult {
            intercept,
            coefficients,
            r_squared: 0.0,
            mean_absolute_error: 0.0,
            sample_count: n,
        };

        let residuals: Vec<f64> = rows
            .iter()
            .zip(targets)
            .map(|(row, y)| y - result.predict(row))
            .collect();
        let ss_res: f64 = residuals.iter().map(|r| r * r).sum();
        let ss_tot: f64 = targets.iter().map(|y| (y - y_mean).powi(2)).sum();

        result.r_squared = Self::r_squared(ss_res, ss_tot);
        result.mean_absolute_error = residuals.iter().map(|r| r.abs()).sum::<f64>() / count;
        Ok(result)
    }

    /// R² from residual and total sums of squares
    ///
    /// A constant target scores 1.0 when fitted exactly and 0.0 otherwise.
    #[must_use]
    pub fn r_squared(ss_res: f64, ss_tot: f64) -> f64 {
        if ss_tot <= f64::EPSILON {
            if ss_res <= f64::EPSILON {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - ss_res / ss_tot
        }
    }

    /// Arithmetic mean, `None` when empty
    #[must_use]
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }

    /// Sample standard deviation (n - 1 denominator), `None` below two values
    #[must_use]
    pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
        if values.len() < 2 {
            return None;
        }
        let mean = Self::mean(values)?;
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
        Some(variance.sqrt())
    }

    /// `count` evenly spaced values from `start` to `end` inclusive
    #[must_use]
    pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f64;
                (0..count)
                    .map(|i| step.mul_add(i as f64, start))
                    .collect()
            }
        }
    }

    /// Weighted mean, `None` when empty or the weights sum to zero
    #[must_use]
    pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Option<f64> {
        let total_weight: f64 = weights.iter().sum();
        if values.is_empty() || values.len() != weights.len() || total_weight <= 0.0 {
            return None;
        }
        let weighted: f64 = values.iter().zip(weights).map(|(v, w)| v * w).sum();
        Some(weighted / total_weight)
    }
}

/// Round to `decimals` places, ties to even
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Round to the nearest multiple of `increment`, ties to even
#[must_use]
pub fn round_to_increment(value: f64, increment: f64) -> f64 {
    (value / increment).round_ties_even() * increment
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_single_feature_exact_fit() {
        let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let targets = [10.0, 12.0, 14.0, 16.0];

        let fit = StatisticalAnalyzer::least_squares(&rows, &targets).unwrap();

        assert!((fit.coefficients[0] - 2.0).abs() < TOLERANCE);
        assert!((fit.intercept - 10.0).abs() < TOLERANCE);
        assert!((fit.r_squared - 1.0).abs() < TOLERANCE);
        assert!(fit.mean_absolute_error < TOLERANCE);
        assert_eq!(fit.sample_count, 4);
    }

    #[test]
    fn test_constant_column_gets_zero_coefficient() {
        // Second column is constant, so it carries no information after centering
        let rows = vec![vec![0.0, 7.0], vec![7.0, 7.0], vec![14.0, 7.0]];
        let targets = [100.0, 102.5, 105.0];

        let fit = StatisticalAnalyzer::least_squares(&rows, &targets).unwrap();

        assert!(fit.coefficients[1].abs() < TOLERANCE);
        assert!((fit.predict(&[21.0, 7.0]) - 107.5).abs() < 1e-6);
    }

    #[test]
    fn test_underdetermined_design_fits() {
        let rows = vec![
            vec![0.0, 7.0, 0.0],
            vec![7.0, 7.0, 49.0],
            vec![14.0, 8.0, 112.0],
        ];
        let targets = [100.0, 102.5, 105.0];

        let fit = StatisticalAnalyzer::least_squares(&rows, &targets).unwrap();

        for (row, y) in rows.iter().zip(targets) {
            assert!((fit.predict(row) - y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(StatisticalAnalyzer::least_squares(&[], &[]).is_err());
        assert!(StatisticalAnalyzer::least_squares(&[vec![1.0]], &[1.0, 2.0]).is_err());
        assert!(
            StatisticalAnalyzer::least_squares(&[vec![1.0], vec![1.0, 2.0]], &[1.0, 2.0]).is_err()
        );
        assert!(StatisticalAnalyzer::least_squares(&[vec![f64::NAN]], &[1.0]).is_err());
    }

    #[test]
    fn test_r_squared_constant_target() {
        assert!((StatisticalAnalyzer::r_squared(0.0, 0.0) - 1.0).abs() < TOLERANCE);
        assert!(StatisticalAnalyzer::r_squared(1.0, 0.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_sample_std_dev() {
        assert!(StatisticalAnalyzer::sample_std_dev(&[7.0]).is_none());
        let std = StatisticalAnalyzer::sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
            .unwrap();
        assert!((std - 2.138_089_935).abs() < 1e-6);
    }

    #[test]
    fn test_linspace() {
        assert_eq!(StatisticalAnalyzer::linspace(0.5, 1.0, 1), vec![0.5]);
        let values = StatisticalAnalyzer::linspace(0.5, 1.0, 3);
        assert!((values[1] - 0.75).abs() < TOLERANCE);
        assert!((values[2] - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_rounding_ties_to_even() {
        assert!((round_to(2.25, 1) - 2.2).abs() < TOLERANCE);
        assert!((round_to_increment(106.25, 0.5) - 106.0).abs() < TOLERANCE);
        assert!((round_to_increment(106.75, 0.5) - 107.0).abs() < TOLERANCE);
        assert!((round_to_increment(106.3, 0.5) - 106.5).abs() < TOLERANCE);
    }
}
