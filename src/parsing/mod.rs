use log::trace;

use crate::prelude::{Ephemeris, Error};

pub mod layout;

use layout::{LineLayout, EPOCH_LINE, ORBIT_LINE};

/// Number of lines spanned by one GPS navigation record:
/// the epoch line followed by 7 broadcast orbit lines.
pub const RECORD_LINES: usize = 8;

fn parse_float(
    line: &str,
    line_index: usize,
    layout: &LineLayout,
    slot: usize,
    field: &'static str,
) -> Result<f64, Error> {
    let content = layout.extract(line, slot).unwrap_or_default();
    content
        .parse::<f64>()
        .map_err(|e| Error::MalformedRecord {
            line_index,
            field,
            reason: format!("\"{}\": {}", content, e),
        })
}

fn parse_integer<T>(line: &str, slot: usize) -> Result<T, Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let field = EPOCH_LINE.slot(slot).map(|col| col.name).unwrap_or("?");
    let content = EPOCH_LINE.extract(line, slot).unwrap_or_default();
    content.parse::<T>().map_err(|e| Error::MalformedRecord {
        line_index: 0,
        field,
        reason: format!("\"{}\": {}", content, e),
    })
}

/// Parses one field of the broadcast orbit lines
fn parse_orbit(
    lines: &[&str],
    line_index: usize,
    slot: usize,
    field: &'static str,
) -> Result<f64, Error> {
    parse_float(lines[line_index], line_index, &ORBIT_LINE, slot, field)
}

impl Ephemeris {
    /// Parses one [Ephemeris] from the navigation record starting at `lines[0]`.
    /// A record always spans 8 lines, only the first 8 lines are considered.
    /// The caller is in charge of moving forward in the file.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, Error> {
        if lines.len() < RECORD_LINES {
            return Err(Error::TruncatedRecord {
                available: lines.len(),
            });
        }

        let lines = lines[..RECORD_LINES]
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<_>>();

        let epoch = lines[0];

        let sv_nr = parse_integer::<u8>(epoch, 0)?;
        if sv_nr == 0 {
            return Err(Error::MalformedRecord {
                line_index: 0,
                field: "sv",
                reason: "null satellite number".to_string(),
            });
        }

        let year = parse_integer::<u16>(epoch, 1)?;
        let month = parse_integer::<u8>(epoch, 2)?;
        let day = parse_integer::<u8>(epoch, 3)?;
        let hour = parse_integer::<u8>(epoch, 4)?;
        let minute = parse_integer::<u8>(epoch, 5)?;

        let toc = parse_float(epoch, 0, &EPOCH_LINE, 6, "toc")?;
        let clock_bias_s = parse_float(epoch, 0, &EPOCH_LINE, 7, "a0")?;
        let clock_drift_s_s = parse_float(epoch, 0, &EPOCH_LINE, 8, "a1")?;
        let clock_drift_rate_s_s2 = parse_float(epoch, 0, &EPOCH_LINE, 9, "a2")?;

        // broadcast orbit #1 (slot 0: IODE, not used)
        let crs = parse_orbit(&lines, 1, 1, "Crs")?;
        let dn_rad = parse_orbit(&lines, 1, 2, "deln")?;
        let m0_rad = parse_orbit(&lines, 1, 3, "M0")?;

        // broadcast orbit #2
        let cuc = parse_orbit(&lines, 2, 0, "Cuc")?;
        let eccentricity = parse_orbit(&lines, 2, 1, "e")?;
        let cus = parse_orbit(&lines, 2, 2, "Cus")?;
        let sqrt_a = parse_orbit(&lines, 2, 3, "sqrtA")?;

        // broadcast orbit #3
        let toe = parse_orbit(&lines, 3, 0, "toe")?;
        let cic = parse_orbit(&lines, 3, 1, "Cic")?;
        let omega0_rad = parse_orbit(&lines, 3, 2, "om0")?;
        let cis = parse_orbit(&lines, 3, 3, "Cis")?;

        // broadcast orbit #4
        let i0_rad = parse_orbit(&lines, 4, 0, "i0")?;
        let crc = parse_orbit(&lines, 4, 1, "Crc")?;
        let omega_rad = parse_orbit(&lines, 4, 2, "om")?;
        let omega_dot_rad_s = parse_orbit(&lines, 4, 3, "omdot")?;

        // broadcast orbit #5
        let idot_rad_s = parse_orbit(&lines, 5, 0, "Idot")?;
        let week = parse_orbit(&lines, 5, 2, "week")?;

        if !week.is_finite() || week < 0.0 || week > u32::MAX as f64 {
            return Err(Error::MalformedRecord {
                line_index: 5,
                field: "week",
                reason: format!("invalid week number {}", week),
            });
        }

        let week = week.trunc() as u32;

        let ephemeris = Self {
            sv_nr,
            year,
            month,
            day,
            hour,
            minute,
            toc,
            clock_bias_s,
            clock_drift_s_s,
            clock_drift_rate_s_s2,
            semi_major_axis_m: sqrt_a.powi(2),
            eccentricity,
            m0_rad,
            i0_rad,
            idot_rad_s,
            dn_rad,
            omega0_rad,
            omega_rad,
            omega_dot_rad_s,
            cus_cuc_rad: (cus, cuc),
            cis_cic_rad: (cis, cic),
            crs_crc_m: (crs, crc),
            toe,
            week,
        };

        trace!(
            "({}) - parsed ephemeris week={} toe={} toc={}",
            ephemeris.sv(),
            week,
            toe,
            toc
        );

        Ok(ephemeris)
    }
}
