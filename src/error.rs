use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// One field of the record could not be converted to a number.
    /// `line_index` is relative to the first line of the record.
    #[error("malformed record: line #{line_index} \"{field}\": {reason}")]
    MalformedRecord {
        line_index: usize,
        field: &'static str,
        reason: String,
    },

    /// A record always spans 8 lines, we wind up here when the input
    /// ends before that.
    #[error("truncated record: only {available} line(s) remaining")]
    TruncatedRecord { available: usize },

    /// Navigation content does not contain the "END OF HEADER" marker,
    /// we cannot locate the first record.
    #[error("missing END OF HEADER marker")]
    MissingHeader,

    /// [Ephemeris] validation: physical non sense, this field is not a finite number.
    ///
    /// [Ephemeris]: crate::prelude::Ephemeris
    #[error("non finite field \"{0}\"")]
    NonFiniteField(&'static str),

    /// [Ephemeris] validation: only elliptical orbits (0 <= e < 1) are supported.
    ///
    /// [Ephemeris]: crate::prelude::Ephemeris
    #[error("unsupported eccentricity {0}")]
    Eccentricity(f64),

    #[error("unknown kepler solver")]
    UnknownKeplerSolver,
}
