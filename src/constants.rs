#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Earth gravitational constant (m^3 s-2), as broadcast in the GPS ICD
pub const GPS_GRAVITATION_MU_M3_S2: f64 = 3.986005E14;

/// Earth angular velocity, in WGS84 frame rad/s
pub const EARTH_ANGULAR_VEL_RAD: f64 = 7.2921151467E-5;

/// Number of fixed-point iterations applied to Kepler's equation
pub const KEPLER_ITERATIONS: usize = 10;

/// Default transmission instant, in seconds past Time of Clock
pub const DEFAULT_TX_OFFSET_S: f64 = 60.0;

/// Physical [Constants] used by the orbit propagation.
/// This is a frozen table: select one of the presets (like [Constants::GPS])
/// when building your [crate::prelude::Config].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constants {
    /// Earth gravitational constant (m^3 s-2)
    pub gm_m3_s2: f64,
    /// Earth angular velocity (rad/s)
    pub earth_rotation_rad_s: f64,
}

impl Constants {
    /// GPS (WGS84) constants
    pub const GPS: Self = Self {
        gm_m3_s2: GPS_GRAVITATION_MU_M3_S2,
        earth_rotation_rad_s: EARTH_ANGULAR_VEL_RAD,
    };
}

impl Default for Constants {
    fn default() -> Self {
        Self::GPS
    }
}
