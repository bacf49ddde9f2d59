#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{Constellation, Epoch, Error, TimeScale, SV};

/// GPS broadcast [Ephemeris] frame, as described by one navigation record.
/// Each frame is parsed once and is never modified.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ephemeris {
    /// Satellite (PRN) number
    pub sv_nr: u8,

    /// Year of clock epoch, as written (two digits in RINEX 2)
    pub year: u16,

    /// Month of clock epoch
    pub month: u8,

    /// Day of clock epoch
    pub day: u8,

    /// Hour of clock epoch
    pub hour: u8,

    /// Minute of clock epoch
    pub minute: u8,

    /// Time of Clock (in seconds)
    pub toc: f64,

    /// Clock bias (in seconds)
    pub clock_bias_s: f64,

    /// Clock drift (in s.s⁻¹)
    pub clock_drift_s_s: f64,

    /// Clock drift rate (in s.s⁻²)
    pub clock_drift_rate_s_s2: f64,

    /// Semi-major axis (in meters): square of the broadcast sqrt(a)
    pub semi_major_axis_m: f64,

    /// Eccentricity
    pub eccentricity: f64,

    /// m0 (in radians)
    pub m0_rad: f64,

    /// (in radians)
    pub i0_rad: f64,

    /// (in radians/s)
    pub idot_rad_s: f64,

    /// Mean motion difference (in radians/s)
    pub dn_rad: f64,

    /// Longitude of ascending node at weekly epoch (in radians)
    pub omega0_rad: f64,

    /// Argument of perigee (in radians)
    pub omega_rad: f64,

    /// (in radians/s)
    pub omega_dot_rad_s: f64,

    /// Sine / Cosine (in radians)
    pub cus_cuc_rad: (f64, f64),

    /// Sine / Cosine (in radians)
    pub cis_cic_rad: (f64, f64),

    /// Sine / Cosine (in meters)
    pub crs_crc_m: (f64, f64),

    /// Time of Ephemeris (in seconds of week)
    pub toe: f64,

    /// GPS week number
    pub week: u32,
}

impl Ephemeris {
    /// Returns the [SV] this frame describes
    pub fn sv(&self) -> SV {
        SV::new(Constellation::GPS, self.sv_nr)
    }

    /// Returns the clock [Epoch] (Time of Clock) in [TimeScale::GPST].
    /// Two digit years are interpreted like RINEX does: 80-99 is 19xx, 00-79 is 20xx.
    /// Returns None if the calendar fields do not describe a valid date.
    pub fn clock_epoch(&self) -> Option<Epoch> {
        let year = match self.year {
            0..=79 => 2000 + self.year as i32,
            80..=99 => 1900 + self.year as i32,
            _ => self.year as i32,
        };

        if !(0.0..60.0).contains(&self.toc) {
            return None;
        }

        let seconds = self.toc.trunc();
        let nanos = ((self.toc - seconds) * 1.0E9).trunc() as u32;

        Epoch::maybe_from_gregorian(
            year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            seconds as u8,
            nanos,
            TimeScale::GPST,
        )
        .ok()
    }

    /// Returns Time of Ephemeris as an [Epoch] in [TimeScale::GPST]
    pub fn toe_epoch(&self) -> Epoch {
        let nanos = (self.toe * 1.0E9).round() as u64;
        Epoch::from_time_of_week(self.week, nanos, TimeScale::GPST)
    }

    /// Onboard clock correction (in seconds) at transmission instant `tsv` (in seconds)
    pub fn clock_correction(&self, tsv: f64) -> f64 {
        self.clock_polynomial(tsv - self.toc)
    }

    /// Onboard clock correction (in seconds), `dt` seconds after Time of Clock
    pub fn clock_polynomial(&self, dt: f64) -> f64 {
        self.clock_bias_s + self.clock_drift_s_s * dt + self.clock_drift_rate_s_s2 * dt.powi(2)
    }

    /// Verifies this [Ephemeris] describes a physical elliptical orbit:
    /// every field is finite and 0 <= e < 1.
    /// The propagation itself never fails: non finite inputs
    /// simply produce non finite coordinates.
    pub fn validate(&self) -> Result<(), Error> {
        let fields = [
            ("toc", self.toc),
            ("a0", self.clock_bias_s),
            ("a1", self.clock_drift_s_s),
            ("a2", self.clock_drift_rate_s_s2),
            ("a", self.semi_major_axis_m),
            ("e", self.eccentricity),
            ("M0", self.m0_rad),
            ("i0", self.i0_rad),
            ("Idot", self.idot_rad_s),
            ("deln", self.dn_rad),
            ("om0", self.omega0_rad),
            ("om", self.omega_rad),
            ("omdot", self.omega_dot_rad_s),
            ("Cus", self.cus_cuc_rad.0),
            ("Cuc", self.cus_cuc_rad.1),
            ("Cis", self.cis_cic_rad.0),
            ("Cic", self.cis_cic_rad.1),
            ("Crs", self.crs_crc_m.0),
            ("Crc", self.crs_crc_m.1),
            ("toe", self.toe),
        ];

        if let Some((name, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(Error::NonFiniteField(*name));
        }

        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(Error::Eccentricity(self.eccentricity));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::{
        prelude::{Constellation, Epoch, Error, TimeScale},
        tests::reference_ephemeris,
    };
    use std::str::FromStr;

    #[test]
    fn sv_identity() {
        let eph = reference_ephemeris();
        let sv = eph.sv();
        assert_eq!(sv.constellation, Constellation::GPS);
        assert_eq!(sv.prn, 1);
    }

    #[test]
    fn clock_correction() {
        let eph = reference_ephemeris();
        // a1 = 1 s/s in the reference frame
        assert_eq!(eph.clock_correction(eph.toc + 60.0), 60.0);
        assert_eq!(eph.clock_correction(eph.toc), 0.0);
    }

    #[test]
    fn clock_epoch() {
        let mut eph = reference_ephemeris();
        eph.year = 21;
        eph.month = 1;
        eph.day = 24;
        eph.hour = 2;
        eph.minute = 0;
        eph.toc = 0.0;

        assert_eq!(
            eph.clock_epoch(),
            Some(Epoch::from_str("2021-01-24T02:00:00 GPST").unwrap())
        );

        eph.year = 98;
        assert_eq!(
            eph.clock_epoch(),
            Some(Epoch::from_str("1998-01-24T02:00:00 GPST").unwrap())
        );

        eph.month = 13;
        assert!(eph.clock_epoch().is_none());
    }

    #[test]
    fn clock_epoch_end_of_minute() {
        let mut eph = reference_ephemeris();
        eph.year = 21;
        eph.month = 1;
        eph.day = 24;
        eph.hour = 2;
        eph.minute = 0;
        eph.toc = 59.9999999996;

        assert_eq!(
            eph.clock_epoch(),
            Some(Epoch::from_gregorian(
                2021,
                1,
                24,
                2,
                0,
                59,
                999_999_999,
                TimeScale::GPST
            ))
        );
    }

    #[test]
    fn clock_polynomial() {
        let mut eph = reference_ephemeris();
        eph.clock_bias_s = 1.0E-4;
        eph.clock_drift_s_s = 1.0E-9;
        eph.clock_drift_rate_s_s2 = 1.0E-12;

        assert_eq!(eph.clock_polynomial(0.0), 1.0E-4);
        assert_eq!(eph.clock_correction(eph.toc + 10.0), eph.clock_polynomial(10.0));
    }

    #[test]
    fn toe_epoch() {
        let eph = reference_ephemeris();
        let toe = eph.toe_epoch();
        assert_eq!(toe.time_scale, TimeScale::GPST);

        let (week, nanos) = toe.to_time_of_week();
        assert_eq!(week, 2256);
        assert_eq!(nanos, 172_800_000_000_000);
    }

    #[test]
    fn validation() {
        let eph = reference_ephemeris();
        assert!(eph.validate().is_ok());

        let mut eph = reference_ephemeris();
        eph.eccentricity = 1.0;
        assert_eq!(eph.validate(), Err(Error::Eccentricity(1.0)));

        let mut eph = reference_ephemeris();
        eph.eccentricity = -0.1;
        assert_eq!(eph.validate(), Err(Error::Eccentricity(-0.1)));

        let mut eph = reference_ephemeris();
        eph.crs_crc_m.1 = f64::NAN;
        assert_eq!(eph.validate(), Err(Error::NonFiniteField("Crc")));
    }
}
