//! Ninefold core engine: a 9×9 number-place board and its backtracking
//! solver.
//!
//! The engine is built around [`Board`], which owns four matrices with
//! distinct lifecycles — the immutable givens, the live working state,
//! the solution derived once at construction, and the player's notes —
//! plus the nine 3×3 [`Region`]s that mirror the working matrix for
//! block-constraint checks. The search lives in [`search`] as an
//! iterator of [`Step`]s, so solving can be watched one trial placement
//! at a time.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Board, Digit, MoveOutcome, Position};
//!
//! let mut board: Board = "
//!     53. .7. ...
//!     6.. 195 ...
//!     .98 ... .6.
//!     8.. .6. ..3
//!     4.. 8.3 ..1
//!     7.. .2. ..6
//!     .6. ... 28.
//!     ... 419 ..5
//!     ... .8. .79
//! "
//! .parse()?;
//!
//! // the solution was derived at construction; the player plays against it
//! let pos = Position::new(0, 2);
//! assert_eq!(board.solution_at(pos), Digit::D4);
//! assert_eq!(board.commit(pos, Some(Digit::D4)), Ok(MoveOutcome::Correct));
//! assert_eq!(board.get(pos), Some(Digit::D4));
//! # Ok::<_, ninefold_core::BoardError>(())
//! ```

pub mod board;
pub mod digit;
pub mod position;
pub mod region;
pub mod search;

pub use self::{
    board::{Board, BoardError, MoveError, MoveOutcome},
    digit::Digit,
    position::Position,
    region::Region,
    search::{Search, Step, solve},
};

/// Why a placement was rejected.
///
/// Returned by [`Board::fill`], [`Board::set_note`], and
/// [`Region::fill`]; nothing has been mutated when one of these comes
/// back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// A block-local coordinate was 3 or more.
    #[display("block-local coordinate out of range")]
    OutOfBounds,
    /// The target cell already holds a digit.
    #[display("cell already filled")]
    Occupied,
    /// The digit already appears in the target row.
    #[display("digit already present in this row")]
    DuplicateInRow,
    /// The digit already appears in the target column.
    #[display("digit already present in this column")]
    DuplicateInColumn,
    /// The digit already appears in the target region.
    #[display("digit already present in this region")]
    DuplicateInRegion,
}
