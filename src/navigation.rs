//! Navigation file browsing.
use log::{debug, warn};

use crate::{
    parsing::RECORD_LINES,
    prelude::{Ephemeris, Error},
};

/// Marks the end of the file header, records start on the following line.
pub const END_OF_HEADER: &str = "END OF HEADER";

/// [NavRecords] iterates over the [Ephemeris] frames of a navigation file.
///
/// Every line up to (and including) the `END OF HEADER` marker is skipped,
/// then the cursor moves forward by 8 lines per record, whether the record
/// is valid or not: a malformed record is reported and the iteration carries on.
/// A trailing record shorter than 8 lines (trailing blank lines excluded)
/// is reported as [Error::TruncatedRecord] and terminates the iteration.
#[derive(Debug, Clone)]
pub struct NavRecords<'a> {
    lines: Vec<&'a str>,
    cursor: Option<usize>,
    done: bool,
}

impl<'a> NavRecords<'a> {
    /// Builds [NavRecords] from the lines of a navigation file.
    pub fn new(lines: Vec<&'a str>) -> Self {
        let cursor = lines
            .iter()
            .position(|line| line.contains(END_OF_HEADER))
            .map(|pos| pos + 1);

        if let Some(cursor) = cursor {
            debug!("header: {} line(s)", cursor);
        }

        Self {
            lines,
            cursor,
            done: false,
        }
    }

    /// Builds [NavRecords] from the content of a navigation file.
    pub fn from_content(content: &'a str) -> Self {
        Self::new(content.lines().collect())
    }
}

impl<'a> Iterator for NavRecords<'a> {
    type Item = Result<Ephemeris, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let cursor = match self.cursor {
            Some(cursor) => cursor,
            None => {
                self.done = true;
                return Some(Err(Error::MissingHeader));
            },
        };

        let remaining = self.lines.get(cursor..).unwrap_or_default();

        // trailing blank lines are not part of any record
        let remaining = match remaining.iter().rposition(|line| !line.trim().is_empty()) {
            Some(last) => &remaining[..=last],
            None => {
                self.done = true;
                return None;
            },
        };

        if remaining.len() < RECORD_LINES {
            self.done = true;
            return Some(Err(Error::TruncatedRecord {
                available: remaining.len(),
            }));
        }

        let record = Ephemeris::parse(&remaining[..RECORD_LINES]);
        self.cursor = Some(cursor + RECORD_LINES);

        if let Err(e) = &record {
            warn!("record starting line #{}: {}", cursor + 1, e);
        }

        Some(record)
    }
}
