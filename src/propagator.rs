use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::prelude::{Config, Ephemeris, Epoch, TimeScale, Vector3};

/// [Propagation] of one [Ephemeris] frame: all the intermediate quantities
/// of the Keplerian resolution, and the resulting ECEF coordinates.
/// Angles are expressed in radians, distances in meters, times in seconds.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Propagation {
    /// Time since Time of Ephemeris
    pub tk: f64,
    /// Mean anomaly
    pub mk: f64,
    /// Eccentric anomaly
    pub ek: f64,
    /// Sine of true anomaly
    pub sin_vk: f64,
    /// Cosine of true anomaly
    pub cos_vk: f64,
    /// True anomaly
    pub vk: f64,
    /// Argument of latitude
    pub fk: f64,
    /// Corrected argument of latitude
    pub uk: f64,
    /// Corrected radius
    pub rk: f64,
    /// Corrected inclination
    pub ik: f64,
    /// X coordinate in orbital plane
    pub xpk: f64,
    /// Y coordinate in orbital plane
    pub ypk: f64,
    /// Corrected longitude of ascending node
    pub omk: f64,
    /// ECEF X coordinate
    pub x: f64,
    /// ECEF Y coordinate
    pub y: f64,
    /// ECEF Z coordinate
    pub z: f64,
}

impl Propagation {
    /// ECEF position (in meters)
    pub fn position_ecef_m(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// ECEF position (in kilometers)
    pub fn position_ecef_km(&self) -> Vector3<f64> {
        self.position_ecef_m() / 1000.0
    }

    /// Position in the orbital plane (in meters)
    pub fn orbital_plane_m(&self) -> Vector3<f64> {
        Vector3::new(self.xpk, self.ypk, 0.0)
    }
}

impl Display for Propagation {
    /// One `name: value` line per quantity
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (name, value) in [
            ("tk", self.tk),
            ("mk", self.mk),
            ("ek", self.ek),
            ("sin_vk", self.sin_vk),
            ("cos_vk", self.cos_vk),
            ("vk", self.vk),
            ("fk", self.fk),
            ("uk", self.uk),
            ("rk", self.rk),
            ("ik", self.ik),
            ("xpk", self.xpk),
            ("ypk", self.ypk),
            ("omk", self.omk),
            ("x", self.x),
            ("y", self.y),
            ("z", self.z),
        ] {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

/// [Propagator] resolves the Keplerian orbit described by an [Ephemeris] frame.
/// It is stateless: one [Propagator] may be shared across threads and used
/// for any number of frames.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Propagator {
    cfg: Config,
}

impl Propagator {
    /// Builds a new [Propagator] from desired [Config]
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// [Config] currently in use
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Corrected mean motion (in radians/s)
    pub fn mean_motion(&self, eph: &Ephemeris) -> f64 {
        let a_3 = eph.semi_major_axis_m.powf(3.0);
        let n0 = (self.cfg.constants.gm_m3_s2 / a_3).sqrt();
        n0 + eph.dn_rad
    }

    /// Propagates [Ephemeris] to the reference transmission instant:
    /// Time of Clock + [Config::tx_offset_s] (60s by default).
    pub fn propagate(&self, eph: &Ephemeris) -> Propagation {
        self.propagate_at(eph, eph.toc + self.cfg.tx_offset_s)
    }

    /// Propagates [Ephemeris] to given [Epoch], expressed
    /// in seconds since the beginning of the ephemeris GPS week.
    /// The clock correction is measured from [Ephemeris::clock_epoch]
    /// when the frame describes a valid calendar date, from [Ephemeris::toc] otherwise.
    pub fn propagate_at_epoch(&self, eph: &Ephemeris, epoch: Epoch) -> Propagation {
        let epoch = epoch.to_time_scale(TimeScale::GPST);
        let week_start = Epoch::from_time_of_week(eph.week, 0, TimeScale::GPST);
        let tsv = (epoch - week_start).to_seconds();

        let dt_clock = match eph.clock_epoch() {
            Some(toc) => (epoch - toc).to_seconds(),
            None => tsv - eph.toc,
        };

        self.resolve(eph, tsv, dt_clock)
    }

    /// Propagates [Ephemeris] to transmission instant `tsv` (in seconds).
    /// Non finite inputs do not cause any error: they propagate
    /// to non finite coordinates. Use [Ephemeris::validate] beforehand.
    pub fn propagate_at(&self, eph: &Ephemeris, tsv: f64) -> Propagation {
        self.resolve(eph, tsv, tsv - eph.toc)
    }

    /// Resolves the orbit at `tsv`, `dt_clock` seconds after Time of Clock
    fn resolve(&self, eph: &Ephemeris, tsv: f64, dt_clock: f64) -> Propagation {
        let omega_e = self.cfg.constants.earth_rotation_rad_s;

        let e = eph.eccentricity;
        let a = eph.semi_major_axis_m;

        let (cus, cuc) = eph.cus_cuc_rad;
        let (cis, cic) = eph.cis_cic_rad;
        let (crs, crc) = eph.crs_crc_m;

        // transmission time, corrected for onboard clock offset
        let t = tsv - eph.clock_polynomial(dt_clock);
        let tk = t - eph.toe;

        let n = self.mean_motion(eph);
        let mk = eph.m0_rad + n * tk;

        let ek = self.cfg.solver.eccentric_anomaly(mk, e);
        let (sin_ek, cos_ek) = ek.sin_cos();

        let den = 1.0 - e * cos_ek;
        let cos_vk = (cos_ek - e) / den;
        let sin_vk = (1.0 - e.powi(2)).sqrt() * sin_ek / den;
        let vk = sin_vk.atan2(cos_vk);

        let fk = vk + eph.omega_rad;
        let (sin_2fk, cos_2fk) = (2.0 * fk).sin_cos();

        let duk = cus * sin_2fk + cuc * cos_2fk;
        let drk = crs * sin_2fk + crc * cos_2fk;
        let dik = cis * sin_2fk + cic * cos_2fk;

        let uk = fk + duk;
        let rk = a * den + drk;
        let ik = eph.i0_rad + dik + eph.idot_rad_s * tk;

        let (xpk, ypk) = (rk * uk.cos(), rk * uk.sin());

        let omk = eph.omega0_rad + (eph.omega_dot_rad_s - omega_e) * tk - omega_e * eph.toe;

        let (sin_omk, cos_omk) = omk.sin_cos();
        let (sin_ik, cos_ik) = ik.sin_cos();

        let x = xpk * cos_omk - ypk * cos_ik * sin_omk;
        let y = xpk * sin_omk + ypk * cos_ik * cos_omk;
        let z = ypk * sin_ik;

        debug!(
            "({}) - kepler solving x={} y={} z={} t_k={}",
            eph.sv(),
            x,
            y,
            z,
            tk
        );

        Propagation {
            tk,
            mk,
            ek,
            sin_vk,
            cos_vk,
            vk,
            fk,
            uk,
            rk,
            ik,
            xpk,
            ypk,
            omk,
            x,
            y,
            z,
        }
    }
}
