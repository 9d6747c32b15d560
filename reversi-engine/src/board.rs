//! The board engine: the cell grid, whose turn it is, and the capture scan.
//!
//! Placement walks outward from the target cell along each of the eight
//! compass directions. A direction captures when the walk crosses a run of
//! opponent pieces and stops on one of the mover's own pieces; the run is then
//! flipped to the mover. Walks stopping on an empty cell or the board edge
//! capture nothing.

use crate::config::EngineConfig;
use crate::game::{Cell, Player};
use crate::location::Location;
use crate::utils;
use crate::DEFAULT_EDGE_LENGTH;
use derive_more::{Display, Error};
use log::{debug, trace};
use std::convert::TryFrom;
use std::fmt;

/// Step offsets `(column, row)` for the eight compass directions.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Invalid caller input. Every variant is an invalid argument;
/// illegal placements are not errors.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum EngineError {
    #[display(fmt = "invalid player number {}, expected 1 or 2", number)]
    InvalidPlayer { number: u8 },

    #[display(
        fmt = "coordinates ({}, {}) are outside the {}x{} board",
        col,
        row,
        width,
        height
    )]
    OutOfBounds {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    #[display(
        fmt = "invalid board size {}x{}, both edges must be even and at least 2",
        width,
        height
    )]
    InvalidDimensions { width: usize, height: usize },
}

impl EngineError {
    /// Whether this is an invalid-argument failure. Every variant is one; callers
    /// that only distinguish "bad input" from other failures can match on this.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidPlayer { .. }
                | EngineError::OutOfBounds { .. }
                | EngineError::InvalidDimensions { .. }
        )
    }
}

/// The state of a game in progress: the grid and the next player to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    // Row-major.
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    next_mover: Player,
}

impl Default for Engine {
    /// A standard 8x8 board with Player 1 to move.
    fn default() -> Self {
        Self::new(Player::default())
    }
}

impl Engine {
    /// Create a standard 8x8 board with `starting_player` to move.
    pub fn new(starting_player: Player) -> Self {
        Self::build(starting_player, DEFAULT_EDGE_LENGTH, DEFAULT_EDGE_LENGTH)
    }

    /// Create a `width` x `height` board with `starting_player` to move.
    /// Both edges must be even and at least 2.
    pub fn with_size(
        starting_player: Player,
        width: usize,
        height: usize,
    ) -> Result<Self, EngineError> {
        validate_dimensions(width, height)?;
        Ok(Self::build(starting_player, width, height))
    }

    /// Create a board from a numeric player identifier (1 or 2).
    pub fn from_player_number(
        starting_player: u8,
        width: usize,
        height: usize,
    ) -> Result<Self, EngineError> {
        Self::with_size(Player::try_from(starting_player)?, width, height)
    }

    /// Create a board as described by `config`.
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        Self::with_size(config.starting_player, config.width, config.height)
    }

    fn build(starting_player: Player, width: usize, height: usize) -> Self {
        let mut engine = Self {
            cells: vec![Cell::Empty; width * height],
            width,
            height,
            next_mover: starting_player,
        };

        // The starting cross is fixed; it does not depend on who moves first.
        let (cw, ch) = (width / 2, height / 2);
        engine.set(cw - 1, ch - 1, Player::Player1);
        engine.set(cw, ch, Player::Player1);
        engine.set(cw - 1, ch, Player::Player2);
        engine.set(cw, ch - 1, Player::Player2);

        debug!(
            "new {}x{} board, {} to move",
            width, height, starting_player
        );
        engine
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The player whose placement is next.
    #[inline]
    pub fn next_mover(&self) -> Player {
        self.next_mover
    }

    /// Get the contents of the cell at `(col, row)`.
    pub fn cell_state(&self, col: usize, row: usize) -> Result<Cell, EngineError> {
        self.check_bounds(col, row)?;
        Ok(self.cells[self.index(col, row)])
    }

    /// Get the contents of the cell at `loc`.
    pub fn cell_at(&self, loc: Location) -> Result<Cell, EngineError> {
        self.cell_state(loc.col(), loc.row())
    }

    /// Place a piece for the next mover at `(col, row)`.
    ///
    /// Returns `Ok(true)` if at least one opposing piece was captured, in which
    /// case the captures are applied and the turn passes to the opponent.
    /// Returns `Ok(false)` and leaves the game untouched if the cell is occupied
    /// or the placement captures nothing.
    pub fn place_piece(&mut self, col: usize, row: usize) -> Result<bool, EngineError> {
        Ok(self.place_piece_counted(col, row)? > 0)
    }

    /// Place a piece for the next mover at `loc`. See [`Engine::place_piece`].
    pub fn place_at(&mut self, loc: Location) -> Result<bool, EngineError> {
        self.place_piece(loc.col(), loc.row())
    }

    /// Like [`Engine::place_piece`], but returns the number of opposing pieces
    /// flipped (0 when the placement was rejected).
    pub fn place_piece_counted(&mut self, col: usize, row: usize) -> Result<usize, EngineError> {
        self.check_bounds(col, row)?;
        if !self.cells[self.index(col, row)].is_empty() {
            trace!("rejected {}: cell occupied", self.location(col, row));
            return Ok(0);
        }

        let mover = self.next_mover;
        let mut flipped = 0;

        // Each capturing direction is flipped as soon as it is found. Rays from
        // one origin are disjoint, so earlier writes never affect later scans.
        for &direction in DIRECTIONS.iter() {
            if let Some(run) = self.capture_run(col, row, direction) {
                trace!(
                    "{} captures {} along {:?}",
                    self.location(col, row),
                    run - 1,
                    direction
                );
                for step in 0..run {
                    let (c, r) = offset(col, row, direction, step);
                    self.set(c, r, mover);
                }
                flipped += run - 1;
            }
        }

        if flipped > 0 {
            self.next_mover = !mover;
            debug!(
                "{} placed at {}, flipping {}",
                mover,
                self.location(col, row),
                flipped
            );
        } else {
            trace!("rejected {}: no captures", self.location(col, row));
        }

        Ok(flipped)
    }

    /// Count the opposing pieces a placement at `(col, row)` would flip for
    /// the next mover, without changing anything. Occupied cells yield 0.
    pub fn flips_at(&self, col: usize, row: usize) -> Result<usize, EngineError> {
        self.check_bounds(col, row)?;
        if !self.cells[self.index(col, row)].is_empty() {
            return Ok(0);
        }

        Ok(DIRECTIONS
            .iter()
            .filter_map(|&direction| self.capture_run(col, row, direction))
            .map(|run| run - 1)
            .sum())
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(index, &cell)| {
            (
                Location::new(index % width, index / width),
                cell,
            )
        })
    }

    /// Count the cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Walk from `(col, row)` along `direction`. If the walk crosses at least one
    /// opponent piece and stops on one of the mover's pieces, return the number
    /// of steps taken to reach that piece.
    fn capture_run(&self, col: usize, row: usize, direction: (isize, isize)) -> Option<usize> {
        let own = Cell::from(self.next_mover);
        let mut found_opponent = false;
        let mut step = 1;

        loop {
            let cell = self.step_cell(col, row, direction, step)?;
            if cell.is_empty() {
                return None;
            }
            if cell == own {
                return if found_opponent { Some(step) } else { None };
            }
            found_opponent = true;
            step += 1;
        }
    }

    /// The cell `step` steps from `(col, row)` along `direction`, or None past the edge.
    #[inline]
    fn step_cell(
        &self,
        col: usize,
        row: usize,
        (dc, dr): (isize, isize),
        step: usize,
    ) -> Option<Cell> {
        let c = col as isize + dc * step as isize;
        let r = row as isize + dr * step as isize;
        if c < 0 || r < 0 || c as usize >= self.width || r as usize >= self.height {
            return None;
        }
        Some(self.cells[self.index(c as usize, r as usize)])
    }

    fn check_bounds(&self, col: usize, row: usize) -> Result<(), EngineError> {
        if col < self.width && row < self.height {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                col,
                row,
                width: self.width,
                height: self.height,
            })
        }
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    fn set(&mut self, col: usize, row: usize, player: Player) {
        let index = self.index(col, row);
        self.cells[index] = Cell::from(player);
    }

    #[inline]
    fn location(&self, col: usize, row: usize) -> Location {
        Location::new(col, row)
    }
}

/// The coordinates `step` steps from `(col, row)` along `direction`.
/// Only called for steps already known to be on the board.
#[inline]
fn offset(col: usize, row: usize, (dc, dr): (isize, isize), step: usize) -> (usize, usize) {
    (
        (col as isize + dc * step as isize) as usize,
        (row as isize + dr * step as isize) as usize,
    )
}

fn validate_dimensions(width: usize, height: usize) -> Result<(), EngineError> {
    let valid_edge = |edge: usize| edge >= 2 && edge % 2 == 0;
    if valid_edge(width) && valid_edge(height) {
        Ok(())
    } else {
        Err(EngineError::InvalidDimensions { width, height })
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.cells.iter().map(|cell| cell.symbol()),
            self.width,
            self.height,
            f,
        )?;
        write!(f, "\n{} to move", self.next_mover)
    }
}
