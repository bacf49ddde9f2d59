//! Kepler solver preset

use crate::{constants::KEPLER_ITERATIONS, prelude::Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const fn default_tolerance() -> f64 {
    1.0E-12
}

const fn default_max_iterations() -> usize {
    30
}

/// Strategy used to solve Kepler's equation `E = M + e sin(E)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeplerSolver {
    /// Fixed-point iteration seeded at `E = M`, applied exactly `iterations` times,
    /// without convergence check. The default (10 iterations) is the reference
    /// behavior: outputs are bit-identical whatever the eccentricity.
    FixedPoint { iterations: usize },

    /// Same fixed-point iteration, interrupted as soon as the update
    /// is smaller than `tolerance` (radians), or after `max_iterations`.
    Converged { tolerance: f64, max_iterations: usize },
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self::FixedPoint {
            iterations: KEPLER_ITERATIONS,
        }
    }
}

impl KeplerSolver {
    /// Tolerance based [KeplerSolver] with default settings.
    pub fn converged() -> Self {
        Self::Converged {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl std::fmt::Display for KeplerSolver {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::FixedPoint { iterations } => write!(fmt, "fixed-point({})", iterations),
            Self::Converged {
                tolerance,
                max_iterations,
            } => write!(fmt, "converged(tol={:e}, max={})", tolerance, max_iterations),
        }
    }
}

impl std::str::FromStr for KeplerSolver {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" | "fixed-point" => Ok(Self::default()),
            "converged" | "tolerance" => Ok(Self::converged()),
            _ => Err(Error::UnknownKeplerSolver),
        }
    }
}

#[cfg(test)]
mod test {
    use super::KeplerSolver;
    use std::str::FromStr;

    #[test]
    fn solver_parsing() {
        assert_eq!(
            KeplerSolver::from_str("fixed").unwrap(),
            KeplerSolver::FixedPoint { iterations: 10 }
        );
        assert_eq!(
            KeplerSolver::from_str(" Converged ").unwrap(),
            KeplerSolver::converged()
        );
        assert!(KeplerSolver::from_str("newton").is_err());
    }
}
