//! Fixed-width column layouts of the broadcast navigation record.
use itertools::Itertools;

/// Width of the legacy short (integer) fields
pub const SHORT: usize = 2;

/// Width of the floating point (`D19.12`) fields
pub const LONG: usize = 19;

/// Left padding of the broadcast orbit lines
pub const PAD: usize = 3;

/// Total width of one record line
pub const LINE_WIDTH: usize = PAD + 4 * LONG;

/// One named [Column] of a fixed-width line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Column {
    /// Field name
    pub name: &'static str,
    /// First character (inclusive)
    pub start: usize,
    /// Number of characters
    pub width: usize,
}

impl Column {
    pub const fn new(name: &'static str, start: usize, width: usize) -> Self {
        Self { name, start, width }
    }

    /// Last character (exclusive)
    pub const fn end(&self) -> usize {
        self.start + self.width
    }

    /// Extracts this [Column] from given line: trimmed, with legacy `D`
    /// exponent marker replaced by `e`. The parts of the column that do not
    /// exist in a short line are simply missing, a column entirely
    /// past the end of the line is empty.
    pub fn extract(&self, line: &str) -> String {
        let start = self.start.min(line.len());
        let end = self.end().min(line.len());
        line.get(start..end)
            .unwrap_or_default()
            .trim()
            .replace(['D', 'd'], "e")
    }
}

/// [LineLayout] is an ordered list of [Column]s describing one line role.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LineLayout {
    pub columns: &'static [Column],
}

impl LineLayout {
    /// Returns the [Column] in given slot
    pub fn slot(&self, slot: usize) -> Option<&Column> {
        self.columns.get(slot)
    }

    /// Returns the column boundaries, from the first column start
    /// to the last column end.
    pub fn boundaries(&self) -> Vec<usize> {
        self.columns
            .iter()
            .map(|col| col.start)
            .chain(self.columns.last().map(|col| col.end()))
            .collect()
    }

    /// True when each [Column] starts where the previous one ends
    pub fn is_contiguous(&self) -> bool {
        self.columns
            .iter()
            .tuple_windows()
            .all(|(lhs, rhs)| lhs.end() == rhs.start)
    }

    /// Extracts the content of given slot
    pub fn extract(&self, line: &str, slot: usize) -> Option<String> {
        self.slot(slot).map(|col| col.extract(line))
    }
}

/// Epoch line (first line of each record): SV number, clock epoch
/// and clock correction coefficients.
pub const EPOCH_LINE: LineLayout = LineLayout {
    columns: &[
        Column::new("sv", 0, SHORT),
        Column::new("year", SHORT, 2 * SHORT),
        Column::new("month", 3 * SHORT, SHORT + 1),
        Column::new("day", 4 * SHORT + 1, SHORT + 1),
        Column::new("hour", 5 * SHORT + 2, SHORT + 1),
        Column::new("minute", 6 * SHORT + 3, SHORT + 1),
        Column::new("toc", 7 * SHORT + 4, 2 * SHORT),
        Column::new("a0", PAD + LONG, LONG),
        Column::new("a1", PAD + 2 * LONG, LONG),
        Column::new("a2", PAD + 3 * LONG, LONG),
    ],
};

/// Broadcast orbit lines (lines 1 to 7 of each record):
/// four `D19.12` fields following the left padding.
pub const ORBIT_LINE: LineLayout = LineLayout {
    columns: &[
        Column::new("orbit0", PAD, LONG),
        Column::new("orbit1", PAD + LONG, LONG),
        Column::new("orbit2", PAD + 2 * LONG, LONG),
        Column::new("orbit3", PAD + 3 * LONG, LONG),
    ],
};
