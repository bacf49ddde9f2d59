//! Eccentric anomaly resolution.
use log::debug;

use crate::prelude::KeplerSolver;

/// Solves `E = M + e sin(E)` by fixed-point iteration seeded at `E = M`,
/// applied exactly `iterations` times.
pub(crate) fn fixed_point(mk: f64, e: f64, iterations: usize) -> f64 {
    let mut ek = mk;
    for _ in 0..iterations {
        ek = mk + e * ek.sin();
    }
    ek
}

/// Same iteration, interrupted once the update is below `tolerance`.
pub(crate) fn converged(mk: f64, e: f64, tolerance: f64, max_iterations: usize) -> f64 {
    let mut ek = mk;
    for _ in 0..max_iterations {
        let next = mk + e * ek.sin();
        if (next - ek).abs() < tolerance {
            return next;
        }
        ek = next;
    }
    debug!(
        "kepler solver did not converge after {} iterations (M={}, e={})",
        max_iterations, mk, e
    );
    ek
}

impl KeplerSolver {
    /// Resolves the eccentric anomaly (in radians) from mean anomaly `mk` (in radians)
    /// and eccentricity `e`.
    pub fn eccentric_anomaly(&self, mk: f64, e: f64) -> f64 {
        match *self {
            Self::FixedPoint { iterations } => fixed_point(mk, e, iterations),
            Self::Converged {
                tolerance,
                max_iterations,
            } => converged(mk, e, tolerance, max_iterations),
        }
    }
}
