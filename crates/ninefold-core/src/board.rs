//! The board: given, working, solution, and notes matrices plus their
//! regions.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, PlaceError, Position, Region, search};

/// A 9×9 number-place board with a solution derived at construction.
///
/// A board owns four cell matrices with distinct lifecycles:
///
/// - the *given* matrix, an immutable snapshot of the input;
/// - the *working* matrix, which every fill/clear acts on — it starts as
///   a copy of the givens, is destructively searched while the solution
///   is derived, and is reset to the givens before construction returns;
/// - the *solution* matrix, written exactly once from the working state
///   at the moment the search completes and read-only afterwards;
/// - the *notes* matrix, the player's scratch digits, never
///   constraint-checked.
///
/// It also owns nine [`Region`]s that mirror the working matrix for
/// block-constraint checks. Every working-cell mutation goes through one
/// internal apply step that updates both views together, so they cannot
/// diverge; row and column constraints are recomputed from the working
/// matrix on demand.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Board, Digit, PlaceError, Position};
///
/// let mut board = Board::new([
///     [5, 3, 0, 0, 7, 0, 0, 0, 0],
///     [6, 0, 0, 1, 9, 5, 0, 0, 0],
///     [0, 9, 8, 0, 0, 0, 0, 6, 0],
///     [8, 0, 0, 0, 6, 0, 0, 0, 3],
///     [4, 0, 0, 8, 0, 3, 0, 0, 1],
///     [7, 0, 0, 0, 2, 0, 0, 0, 6],
///     [0, 6, 0, 0, 0, 0, 2, 8, 0],
///     [0, 0, 0, 4, 1, 9, 0, 0, 5],
///     [0, 0, 0, 0, 8, 0, 0, 7, 9],
/// ])?;
///
/// // row 0 already holds a 5, so placing another is rejected
/// let pos = Position::new(0, 2);
/// assert_eq!(board.fill(pos, Digit::D5), Err(PlaceError::DuplicateInRow));
/// assert_eq!(board.fill(pos, Digit::D4), Ok(()));
/// assert_eq!(board.get(pos), Some(Digit::D4));
/// # Ok::<_, ninefold_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    given: [Option<Digit>; 81],
    working: [Option<Digit>; 81],
    solution: [Digit; 81],
    notes: [Option<Digit>; 81],
    regions: [Region; 9],
}

/// The judgment of a player move that was evaluated against the solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The digit matches the solution and was written to the board.
    Correct,
    /// The digit contradicts the solution; nothing changed.
    Incorrect,
}

/// Why a player move could not be evaluated at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The target cell already holds a digit.
    #[display("cell already filled")]
    Occupied,
    /// No digit was passed and the cell has no note to commit.
    #[display("no digit given and no note to commit")]
    NoNote,
}

/// Why a board could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// An input cell held a value outside 0-9.
    #[display("cell r{row}c{col} holds {value}, expected 0-9")]
    InvalidValue {
        /// Row index of the offending cell.
        row: u8,
        /// Column index of the offending cell.
        col: u8,
        /// The rejected raw value.
        value: u8,
    },
    /// Grid text contained something other than a digit, a blank marker
    /// (`.`, `_`, `0`), or whitespace.
    #[display("unexpected character {ch:?} in grid text")]
    UnexpectedChar {
        /// The rejected character.
        ch: char,
    },
    /// Grid text did not contain exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// How many cells the text contained.
        found: usize,
    },
    /// The givens admit no legal completion.
    #[display("puzzle has no valid completion")]
    Unsolvable,
}

impl Board {
    /// Creates a board from raw cell values (`0` = empty) and derives its
    /// solution.
    ///
    /// The backtracking search runs against the working matrix, the
    /// solved state is snapshotted, and the working matrix (with all
    /// regions) is reset to the givens, so the returned board shows the
    /// puzzle, not the answer.
    ///
    /// # Errors
    ///
    /// [`InvalidValue`](BoardError::InvalidValue) if any cell is above 9;
    /// [`Unsolvable`](BoardError::Unsolvable) if the givens conflict with
    /// each other or the search exhausts every candidate without
    /// completing the grid.
    pub fn new(rows: [[u8; 9]; 9]) -> Result<Self, BoardError> {
        let mut board = Self::from_rows(rows)?;
        board.derive()?;
        Ok(board)
    }

    // All views assembled, no solution derived yet: the solution matrix
    // holds a placeholder until `derive` overwrites it. Kept separate so
    // the search (and its tests) can run on boards `new` would reject.
    pub(crate) fn from_rows(rows: [[u8; 9]; 9]) -> Result<Self, BoardError> {
        let mut given = [None; 81];
        for pos in Position::ALL {
            let value = rows[usize::from(pos.row())][usize::from(pos.col())];
            if value == 0 {
                continue;
            }
            match Digit::try_from_value(value) {
                Some(digit) => given[pos.index()] = Some(digit),
                None => {
                    return Err(BoardError::InvalidValue {
                        row: pos.row(),
                        col: pos.col(),
                        value,
                    });
                }
            }
        }
        Ok(Self::from_cells(given))
    }

    fn from_cells(given: [Option<Digit>; 81]) -> Self {
        let regions = std::array::from_fn(|region| {
            let mut cells = [None; 9];
            for (i, cell) in cells.iter_mut().enumerate() {
                let row = (region / 3) * 3 + i / 3;
                let col = (region % 3) * 3 + i % 3;
                *cell = given[row * 9 + col];
            }
            Region::new(cells)
        });
        Self {
            given,
            working: given,
            solution: [Digit::D1; 81],
            notes: [None; 81],
            regions,
        }
    }

    fn derive(&mut self) -> Result<(), BoardError> {
        if !self.is_consistent() || !search::solve(self) {
            return Err(BoardError::Unsolvable);
        }
        for (slot, cell) in self.solution.iter_mut().zip(&self.working) {
            match cell {
                Some(digit) => *slot = *digit,
                // a successful search leaves no empties; bail rather
                // than expose a half-written solution
                None => return Err(BoardError::Unsolvable),
            }
        }
        self.reset();
        Ok(())
    }

    /// Reads a working cell.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.working[pos.index()]
    }

    /// Reads a given cell — the immutable input, useful for renderers
    /// that style givens differently from player digits.
    #[must_use]
    pub const fn given(&self, pos: Position) -> Option<Digit> {
        self.given[pos.index()]
    }

    /// Returns the solved digit for a cell.
    #[must_use]
    pub const fn solution_at(&self, pos: Position) -> Digit {
        self.solution[pos.index()]
    }

    /// Reads a notes cell.
    #[must_use]
    pub const fn note(&self, pos: Position) -> Option<Digit> {
        self.notes[pos.index()]
    }

    /// Places a digit on the working matrix, the search-time mutator.
    ///
    /// This is the only mutation the backtracking search performs; it
    /// encodes the full placement constraint, so the search never checks
    /// anything separately. On success the digit is committed to the
    /// working matrix and the owning region together.
    ///
    /// # Errors
    ///
    /// In check order: [`Occupied`](PlaceError::Occupied) if the cell
    /// holds a digit, [`DuplicateInRow`](PlaceError::DuplicateInRow) /
    /// [`DuplicateInColumn`](PlaceError::DuplicateInColumn) if the digit
    /// already appears in the cell's row or column, and
    /// [`DuplicateInRegion`](PlaceError::DuplicateInRegion) if the owning
    /// region rejects it. Nothing is mutated on failure.
    pub fn fill(&mut self, pos: Position, digit: Digit) -> Result<(), PlaceError> {
        if self.working[pos.index()].is_some() {
            return Err(PlaceError::Occupied);
        }
        if self.row_cells(pos.row()).any(|cell| cell == Some(digit)) {
            return Err(PlaceError::DuplicateInRow);
        }
        if self.col_cells(pos.col()).any(|cell| cell == Some(digit)) {
            return Err(PlaceError::DuplicateInColumn);
        }
        let (row, col) = pos.region_cell();
        self.regions[pos.region_index()].fill(row, col, digit)?;
        self.working[pos.index()] = Some(digit);
        Ok(())
    }

    /// Empties a working cell, mirroring the clear into the owning
    /// region. Unconditional and idempotent.
    pub fn clear(&mut self, pos: Position) {
        self.apply(pos, None);
    }

    /// Writes a note. Notes are scratch space and never constraint
    /// checked, but a cell that already holds a working digit takes no
    /// note.
    ///
    /// # Errors
    ///
    /// [`Occupied`](PlaceError::Occupied) if the working cell is filled.
    pub fn set_note(&mut self, pos: Position, digit: Digit) -> Result<(), PlaceError> {
        if self.working[pos.index()].is_some() {
            return Err(PlaceError::Occupied);
        }
        self.notes[pos.index()] = Some(digit);
        Ok(())
    }

    /// Empties a notes cell. Unconditional.
    pub const fn clear_note(&mut self, pos: Position) {
        self.notes[pos.index()] = None;
    }

    /// Evaluates a player move against the derived solution.
    ///
    /// The check is a lookup, not a live constraint re-derivation: the
    /// move is [`Correct`](MoveOutcome::Correct) exactly when the digit
    /// equals the solution at that cell, in which case it is written to
    /// the working matrix and the cell's note is consumed. An
    /// [`Incorrect`](MoveOutcome::Incorrect) move changes nothing.
    /// Passing `None` evaluates the digit noted at the cell.
    ///
    /// # Errors
    ///
    /// [`Occupied`](MoveError::Occupied) if the cell already holds a
    /// digit, [`NoNote`](MoveError::NoNote) if `digit` is `None` and the
    /// cell has no note.
    pub fn commit(
        &mut self,
        pos: Position,
        digit: Option<Digit>,
    ) -> Result<MoveOutcome, MoveError> {
        if self.working[pos.index()].is_some() {
            return Err(MoveError::Occupied);
        }
        let digit = match digit {
            Some(digit) => digit,
            None => self.notes[pos.index()].ok_or(MoveError::NoNote)?,
        };
        if self.solution[pos.index()] != digit {
            return Ok(MoveOutcome::Incorrect);
        }
        self.apply(pos, Some(digit));
        self.notes[pos.index()] = None;
        Ok(MoveOutcome::Correct)
    }

    /// Returns the first empty working cell in row-major order (lowest
    /// row, then lowest column), or `None` when the board is full.
    ///
    /// This scan order is the search's cell order; together with the
    /// ascending candidate order it makes solving deterministic.
    #[must_use]
    pub fn find_empty(&self) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| self.working[pos.index()].is_none())
    }

    /// The win check: no empty cells, every region valid, and no
    /// duplicate digit in any row or column of the working matrix.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.find_empty().is_none() && self.is_consistent()
    }

    /// Returns whether the working matrix holds no duplicate digit in
    /// any row, column, or region, ignoring empty cells. A board can be
    /// consistent and far from solved; [`is_solved`](Self::is_solved) is
    /// this plus completeness.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.regions.iter().all(Region::is_valid)
            && (0..9).all(|line| {
                Self::no_duplicates(self.row_cells(line))
                    && Self::no_duplicates(self.col_cells(line))
            })
    }

    /// Restores the working matrix (and every region) to the givens.
    /// Notes are left alone.
    pub fn reset(&mut self) {
        self.working = self.given;
        for region in &mut self.regions {
            region.reset();
        }
    }

    /// Returns the working matrix as raw rows, `0` for empty — the shape
    /// renderers consume.
    #[must_use]
    pub fn working_rows(&self) -> [[u8; 9]; 9] {
        Self::to_rows(&self.working)
    }

    /// Returns the notes matrix as raw rows, `0` for empty.
    #[must_use]
    pub fn note_rows(&self) -> [[u8; 9]; 9] {
        Self::to_rows(&self.notes)
    }

    /// Returns the solution matrix as raw rows. Never contains `0`.
    #[must_use]
    pub fn solution_rows(&self) -> [[u8; 9]; 9] {
        let mut rows = [[0; 9]; 9];
        for pos in Position::ALL {
            rows[usize::from(pos.row())][usize::from(pos.col())] =
                self.solution[pos.index()].value();
        }
        rows
    }

    // The one unconditional mutation path: the working matrix and the
    // owning region always change together.
    fn apply(&mut self, pos: Position, value: Option<Digit>) {
        self.working[pos.index()] = value;
        let (row, col) = pos.region_cell();
        self.regions[pos.region_index()].set(row, col, value);
    }

    fn row_cells(&self, row: u8) -> impl Iterator<Item = Option<Digit>> {
        let start = usize::from(row) * 9;
        self.working[start..start + 9].iter().copied()
    }

    fn col_cells(&self, col: u8) -> impl Iterator<Item = Option<Digit>> {
        self.working
            .iter()
            .skip(usize::from(col))
            .step_by(9)
            .copied()
    }

    fn no_duplicates(cells: impl Iterator<Item = Option<Digit>>) -> bool {
        let mut seen = [false; 9];
        for digit in cells.flatten() {
            let slot = &mut seen[usize::from(digit.value() - 1)];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }

    fn to_rows(cells: &[Option<Digit>; 81]) -> [[u8; 9]; 9] {
        let mut rows = [[0; 9]; 9];
        for pos in Position::ALL {
            rows[usize::from(pos.row())][usize::from(pos.col())] =
                cells[pos.index()].map_or(0, Digit::value);
        }
        rows
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses 81 cells in reading order: digits `1`-`9`, blanks as `.`,
    /// `_`, or `0`, all whitespace ignored. The parsed board goes through
    /// [`Board::new`], so its solution is already derived.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let cell = match ch {
                '.' | '_' | '0' => None,
                _ => match Digit::try_from_char(ch) {
                    Some(digit) => Some(digit),
                    None => return Err(BoardError::UnexpectedChar { ch }),
                },
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(BoardError::WrongCellCount { found: count });
        }
        let mut board = Self::from_cells(cells);
        board.derive()?;
        Ok(board)
    }
}

impl Display for Board {
    /// The compact 81-character form of the working matrix, `.` for
    /// empty cells, in reading order. Round-trips through [`FromStr`]
    /// for any board whose working state equals its givens.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.working {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
