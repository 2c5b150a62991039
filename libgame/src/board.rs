use itertools::Itertools;

use crate::error::GridError;

use super::pos::Position;

/// Host-declared limits on grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min_width: usize,
    pub min_height: usize,
    pub max_width: usize,
    pub max_height: usize,
}

impl GridBounds {
    pub fn new(min_width: usize, min_height: usize, max_width: usize, max_height: usize) -> Self {
        Self {
            min_width,
            min_height,
            max_width,
            max_height,
        }
    }

    pub fn contains(&self, width: usize, height: usize) -> bool {
        width > 0
            && height > 0
            && (self.min_width..=self.max_width).contains(&width)
            && (self.min_height..=self.max_height).contains(&height)
    }

    pub fn check(&self, width: usize, height: usize) -> Result<(), GridError> {
        if self.contains(width, height) {
            Ok(())
        } else {
            Err(GridError::InvalidDimension { width, height })
        }
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::new(10, 10, 90, 40)
    }
}

/// The live/dead matrix, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl GameBoard {
    /// Creates an all-dead board. Both dimensions must be non-zero.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    pub(crate) fn with_cells(&self, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell<P>(&self, pos: P) -> Option<bool>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index).copied()
    }

    pub fn cell_mut<P>(&mut self, pos: P) -> Option<&mut bool>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get_mut(index)
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &alive)| (self.index_to_pos(index), alive))
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (0..self.height)
            .cartesian_product(0..self.width)
            .map(|(row, col)| Position { row, col })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn out_of_range(&self, pos: Position) -> GridError {
        GridError::OutOfRange {
            row: pos.row,
            col: pos.col,
            width: self.width,
            height: self.height,
        }
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if col >= self.width {
            return None;
        }

        if row >= self.height {
            return None;
        }

        Some(col + (row * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.width;
        let col = index % self.width;
        Position { row, col }
    }
}
