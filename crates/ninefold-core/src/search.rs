//! Backtracking search, one trial placement at a time.

use std::iter::FusedIterator;

use crate::{Board, Digit, Position};

/// One trial placement made by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The cell the trial targeted.
    pub position: Position,
    /// The candidate digit tried there.
    pub candidate: Digit,
    /// Whether the board accepted the placement. A rejected candidate
    /// leaves the board untouched; an accepted one stays placed until
    /// the search backtracks over it.
    pub accepted: bool,
}

/// Depth-first backtracking search over a board's empty cells.
///
/// `Search` is an iterator: every `next()` performs exactly one trial
/// placement through [`Board::fill`] and yields it as a [`Step`], so a
/// renderer, logger, or test drives the pace and the algorithm knows
/// nothing about presentation. Candidates are tried in ascending order
/// at the first empty cell in row-major order, making the step stream
/// and the completion it reaches deterministic for a given board.
///
/// An exhausted subtree is undone cell by cell as the search backtracks,
/// and a full board is accepted only if [`Board::is_solved`] agrees —
/// the authoritative base case, kept even though the constraint-checked
/// `fill` should never let it fail.
///
/// Dropping the iterator stops the search where it stands. Driving it to
/// exhaustion leaves the board solved on success and restored to its
/// pre-search state on failure; [`outcome`](Self::outcome) reports
/// which.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Board, Position, Search};
///
/// let mut board = Board::new([[0; 9]; 9])?;
/// let mut search = Search::new(&mut board);
///
/// // the first trial places a 1 in the top-left corner
/// let first = search.next().unwrap();
/// assert_eq!(first.position, Position::new(0, 0));
/// assert!(first.accepted);
///
/// for _step in search.by_ref() {}
/// assert_eq!(search.outcome(), Some(true));
/// assert!(board.is_solved());
/// # Ok::<_, ninefold_core::BoardError>(())
/// ```
#[derive(Debug)]
pub struct Search<'a> {
    board: &'a mut Board,
    frames: Vec<Frame>,
    started: bool,
    outcome: Option<bool>,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: Position,
    // value of the next candidate to try here; 10 means exhausted
    next: u8,
}

impl<'a> Search<'a> {
    /// Starts a search over the board's current working state.
    #[must_use]
    pub fn new(board: &'a mut Board) -> Self {
        Self {
            board,
            frames: Vec::with_capacity(81),
            started: false,
            outcome: None,
        }
    }

    /// `None` while the search is still running, then `Some(true)` if it
    /// reached a solved board and `Some(false)` if every candidate was
    /// exhausted.
    #[must_use]
    pub const fn outcome(&self) -> Option<bool> {
        self.outcome
    }
}

impl Iterator for Search<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.outcome.is_some() {
            return None;
        }
        loop {
            let Some(frame) = self.frames.last_mut() else {
                if self.started {
                    // every candidate at the root is exhausted
                    self.outcome = Some(false);
                    return None;
                }
                self.started = true;
                match self.board.find_empty() {
                    Some(pos) => {
                        self.frames.push(Frame { pos, next: 1 });
                        continue;
                    }
                    None => {
                        // nothing to search; the full board decides
                        self.outcome = Some(self.board.is_solved());
                        return None;
                    }
                }
            };
            let pos = frame.pos;
            // Coming back from a failed subtree leaves this frame's own
            // digit placed; undo it before trying the next candidate.
            if self.board.get(pos).is_some() {
                self.board.clear(pos);
            }
            let Some(candidate) = Digit::try_from_value(frame.next) else {
                self.frames.pop();
                if self.frames.is_empty() {
                    self.outcome = Some(false);
                    return None;
                }
                continue;
            };
            frame.next += 1;
            let accepted = self.board.fill(pos, candidate).is_ok();
            if accepted {
                match self.board.find_empty() {
                    Some(next_pos) => self.frames.push(Frame {
                        pos: next_pos,
                        next: 1,
                    }),
                    // Full board: the win check is the authoritative
                    // base case.
                    None => self.outcome = Some(self.board.is_solved()),
                }
            }
            return Some(Step {
                position: pos,
                candidate,
                accepted,
            });
        }
    }
}

impl FusedIterator for Search<'_> {}

/// Runs a search over the board to completion.
///
/// Returns whether a solved state was reached. On success the solved
/// digits are left on the board — construction snapshots and then resets
/// them, while a standalone caller sees the finished grid, the way a
/// watched solve ends on the completed board. On failure every trial has
/// been backtracked and the board is as it was.
pub fn solve(board: &mut Board) -> bool {
    let mut search = Search::new(board);
    for _ in search.by_ref() {}
    search.outcome().unwrap_or(false)
}
