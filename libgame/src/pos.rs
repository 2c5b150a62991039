/// A zero-based cell coordinate, addressed row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Applies a signed offset, returning `None` if either axis would go negative.
    pub fn offset(self, row_offset: isize, col_offset: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(row_offset)?,
            col: self.col.checked_add_signed(col_offset)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            row: value[0],
            col: value[1],
        }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.row, value.col]
    }
}
