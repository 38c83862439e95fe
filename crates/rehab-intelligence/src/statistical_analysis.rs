// ABOUTME: Closed-form least-squares and dispersion helpers for trend classification
// ABOUTME: Fits a line against the session index without a general statistics dependency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: session counts are far below 2^52

/// Stateless regression helpers
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Arithmetic mean, `None` for an empty series
    #[must_use]
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Population standard deviation, `None` for an empty series
    #[must_use]
    pub fn std_dev(values: &[f64]) -> Option<f64> {
        let mean = Self::mean(values)?;
        let variance = values
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / values.len() as f64;
        Some(variance.sqrt())
    }

    /// Ordinary least-squares slope of `values` against `x = 0..n-1`
    ///
    /// Computed as `cov(x, y) / var(x)`. Returns `None` when fewer than two
    /// points are supplied or any value is non-finite.
    #[must_use]
    pub fn index_slope(values: &[f64]) -> Option<f64> {
        if values.len() < 2 || values.iter().any(|v| !v.is_finite()) {
            return None;
        }

        let mean_x = (values.len() - 1) as f64 / 2.0;
        let mean_y = Self::mean(values)?;

        let (covariance, variance) = values.iter().enumerate().fold(
            (0.0_f64, 0.0_f64),
            |(cov, var), (index, value)| {
                let dx = index as f64 - mean_x;
                (dx.mul_add(value - mean_y, cov), dx.mul_add(dx, var))
            },
        );

        // var(x) >= 0.5 for n >= 2
        Some(covariance / variance)
    }
}
