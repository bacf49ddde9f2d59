use crate::prelude::Ephemeris;

/*
 * G01 frame, as written in a RINEX 2 navigation file
 */
pub const REFERENCE_RECORD: &str = " 1 23  4  4  1 15  0.0-1.500000000000D-05-2.500000000000D-12 0.000000000000D+00
    9.000000000000D+01 6.465625000000D+01 3.684082028230D-09-3.125259566760D+00
    3.149732947350D-06 1.262341823890D-02 1.155957579610D-05 5.153652772900D+03
    1.728000000000D+05 6.146728992460D-08-3.012498239120D+00-1.993030309680D-07
    9.900463689140D-01 1.695625000000D+02 9.442859373680D-01-7.419951927920D-09
    2.671539851790D-10 1.000000000000D+00 2.256000000000D+03 0.000000000000D+00
    2.000000000000D+00 0.000000000000D+00-1.024454832080D-08 9.000000000000D+01
    1.728000000000D+05 4.000000000000D+00";

/*
 * G12 frame
 */
pub const SECOND_RECORD: &str = "12 21  1 24  2  0  0.0 3.085378557440D-04-1.705302565098D-12 0.000000000000D+00
    4.200000000000D+01-1.140625000000D+01 4.795199734037D-09 2.043427463780D+00
   -5.271285772324D-07 8.760346192867D-03 8.771196007729D-06 5.153696987152D+03
    1.800000000000D+05 7.636845111847D-08-2.073395213392D+00-1.508742570877D-07
    9.633612367000D-01 2.056562500000D+02 1.105148101016D+00-8.004262581500D-09
    2.500104140220D-10 1.000000000000D+00 2.142000000000D+03 0.000000000000D+00
    2.000000000000D+00 0.000000000000D+00-1.257285475731D-08 4.200000000000D+01
    1.728180000000D+05 4.000000000000D+00";

pub const HEADER: &str = "     2.10           N: GPS NAV DATA                         RINEX VERSION / TYPE
CCRINEXN V1.6.0 UX  CDDIS               25-JAN-21 00:22     PGM / RUN BY / DATE
IGS BROADCAST EPHEMERIS FILE                                COMMENT
    0.1118D-07  0.7451D-08 -0.5960D-07 -0.5960D-07          ION ALPHA
    0.1044D+06  0.3277D+05 -0.1966D+06 -0.1966D+06          ION BETA
   -0.186264514923D-08-0.799360577730D-14   405504     2142 DELTA-UTC: A0,A1,T,W
    18                                                      LEAP SECONDS
                                                            END OF HEADER";

/// Splits a record (or a file) into lines
pub fn record_lines(content: &str) -> Vec<String> {
    content.lines().map(|line| line.to_string()).collect()
}

/// Complete navigation file content, made of [HEADER] and given records
pub fn nav_file(records: &[&str]) -> String {
    let mut content = HEADER.to_string();
    for record in records {
        content.push('\n');
        content.push_str(record);
    }
    content.push('\n');
    content
}

/// Reference G01 frame, with its reference Time of Clock (in seconds of week)
/// and a 1 s/s clock drift: the clock correction exactly compensates the 60s offset.
pub fn reference_ephemeris() -> Ephemeris {
    Ephemeris {
        sv_nr: 1,
        year: 2023,
        month: 4,
        day: 4,
        hour: 1,
        minute: 15,
        toc: 177299.999803551,
        clock_bias_s: 0.0,
        clock_drift_s_s: 1.0,
        clock_drift_rate_s_s2: 0.0,
        semi_major_axis_m: 26560136.90362,
        eccentricity: 0.0126234182389,
        m0_rad: -3.12525956676,
        i0_rad: 0.990046368914,
        idot_rad_s: 2.67153985179E-10,
        dn_rad: 3.68408202823E-09,
        omega0_rad: -3.01249823912,
        omega_rad: 0.944285937368,
        omega_dot_rad_s: -7.41995192792E-09,
        cus_cuc_rad: (1.15595757961E-05, 3.14973294735E-06),
        cis_cic_rad: (-1.99303030968E-07, 6.14672899246E-08),
        crs_crc_m: (64.65625, 169.5625),
        toe: 172800.0,
        week: 2256,
    }
}
