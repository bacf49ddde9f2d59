#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{Constants, DEFAULT_TX_OFFSET_S};

mod solver;
pub use solver::KeplerSolver;

fn default_tx_offset() -> f64 {
    DEFAULT_TX_OFFSET_S
}

/// [Propagator] configuration.
///
/// [Propagator]: crate::prelude::Propagator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Physical [Constants] table.
    #[cfg_attr(feature = "serde", serde(default))]
    pub constants: Constants,
    /// Transmission instant used by [Propagator::propagate],
    /// expressed in seconds past Time of Clock.
    ///
    /// [Propagator::propagate]: crate::prelude::Propagator::propagate
    #[cfg_attr(feature = "serde", serde(default = "default_tx_offset"))]
    pub tx_offset_s: f64,
    /// [KeplerSolver] used to resolve the eccentric anomaly.
    #[cfg_attr(feature = "serde", serde(default))]
    pub solver: KeplerSolver,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            constants: Constants::default(),
            tx_offset_s: default_tx_offset(),
            solver: KeplerSolver::default(),
        }
    }
}

impl Config {
    /// Returns [Config] for GPS broadcast ephemeris, with reference
    /// transmission instant 60s after Time of Clock.
    /// You can then customize [Self] as you will.
    pub fn gps_preset() -> Self {
        Self::default()
    }

    /// Copies and returns [Config] with updated [Constants]
    pub fn with_constants(&self, constants: Constants) -> Self {
        let mut s = *self;
        s.constants = constants;
        s
    }

    /// Copies and returns [Config] with updated transmission offset (in seconds)
    pub fn with_tx_offset(&self, offset_s: f64) -> Self {
        let mut s = *self;
        s.tx_offset_s = offset_s;
        s
    }

    /// Copies and returns [Config] with updated [KeplerSolver]
    pub fn with_solver(&self, solver: KeplerSolver) -> Self {
        let mut s = *self;
        s.solver = solver;
        s
    }
}
