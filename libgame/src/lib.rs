use board::{GameBoard, GridBounds};
use error::GridError;
use itertools::Itertools;
use pos::Position;
use rule::Rule;

pub mod board;
pub mod catalog;
pub mod error;
pub mod pos;
pub mod rule;

/// A bounded Life-like automaton: the cell matrix, the rule driving it and a generation counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: GameBoard,
    bounds: GridBounds,
    rule: Rule,
    step_count: u64,
}

impl Game {
    /// Creates an all-dead grid. Fails if the dimensions fall outside `bounds`.
    pub fn new(
        width: usize,
        height: usize,
        bounds: GridBounds,
        rule: Rule,
    ) -> Result<Self, GridError> {
        bounds.check(width, height)?;

        Ok(Self {
            board: GameBoard::new(width, height)?,
            bounds,
            rule,
            step_count: 0,
        })
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn set_rule(&mut self, rule: Rule) {
        self.rule = rule;
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn alive_count(&self) -> usize {
        self.board.alive_count()
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, bool)> + '_ {
        self.board.enumerate_cells()
    }

    pub fn cell_state<P>(&self, pos: P) -> Result<bool, GridError>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        self.board
            .cell(pos)
            .ok_or_else(|| self.board.out_of_range(pos))
    }

    /// Flips one cell. The step counter is left alone.
    pub fn toggle_cell<P>(&mut self, pos: P) -> Result<bool, GridError>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        let out_of_range = self.board.out_of_range(pos);
        let cell = self.board.cell_mut(pos).ok_or(out_of_range)?;

        *cell = !*cell;
        Ok(*cell)
    }

    /// Replaces the grid with an all-dead one of the new size. Prior cells are discarded.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        self.bounds.check(width, height)?;

        self.board = GameBoard::new(width, height)?;
        self.step_count = 0;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.board.clear();
        self.step_count = 0;
    }

    /// Clears the grid and brings exactly `alive_cells` random cells to life.
    pub fn randomize(&mut self, alive_cells: usize) -> Result<(), GridError> {
        let mut available_positions = self.board.positions().collect_vec();

        if alive_cells > available_positions.len() {
            return Err(GridError::TooManyAliveCells {
                requested: alive_cells,
                available: available_positions.len(),
            });
        }

        self.clear();

        for _ in 0..alive_cells {
            let chosen_index = rand::random_range(0..available_positions.len());
            let chosen_position = available_positions.swap_remove(chosen_index);

            if let Some(cell) = self.board.cell_mut(chosen_position) {
                *cell = true;
            }
        }

        Ok(())
    }

    /// Advances every cell by one generation.
    ///
    /// Next states are computed from the current board into a fresh buffer which
    /// then replaces the board, so no cell ever sees a neighbor's next state.
    pub fn step(&mut self) {
        let next_cells = self
            .board
            .enumerate_cells()
            .map(|(pos, alive)| self.step_cell(pos, alive))
            .collect();

        self.board = self.board.with_cells(next_cells);
        self.step_count += 1;
    }

    fn step_cell(&self, pos: Position, alive: bool) -> bool {
        let alive_neighbor_count = self.neighbor_count(pos);

        if alive {
            self.rule.survive().contains(alive_neighbor_count)
        } else {
            self.rule.birth().contains(alive_neighbor_count)
        }
    }

    /// Counts live cells in the Moore neighborhood of `pos`. Cells past the edge count as dead.
    pub fn neighbor_count<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        const NEIGHBOR_RELATIVE_POSITIONS: [[isize; 2]; 8] = [
            [-1, -1],
            [-1, 0],
            [-1, 1],
            [0, -1],
            [0, 1],
            [1, -1],
            [1, 0],
            [1, 1],
        ];

        let pos = pos.into();

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(|[row_offset, col_offset]| {
                let neighbor = pos.offset(*row_offset, *col_offset)?;
                self.board.cell(neighbor)
            })
            .filter(|&alive| alive)
            .count()
    }
}
