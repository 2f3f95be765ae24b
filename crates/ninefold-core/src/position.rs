//! Typed cell coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// Both components are guaranteed to be in the range 0-8, so a `Position`
/// held by a caller is always addressable; range errors exist only at the
/// [`try_new`](Self::try_new) boundary.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!((pos.row(), pos.col()), (4, 7));
/// assert_eq!(Position::try_new(9, 0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order (row 0 columns 0-8, then row
    /// 1, and so on).
    ///
    /// This is the scan order of [`Board::find_empty`], and therefore the
    /// cell order of the backtracking search.
    ///
    /// [`Board::find_empty`]: crate::Board::find_empty
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::ALL[0], Position::new(0, 0));
    /// assert_eq!(Position::ALL[1], Position::new(0, 1));
    /// assert_eq!(Position::ALL[80], Position::new(8, 8));
    /// ```
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8. Use
    /// [`try_new`](Self::try_new) for coordinates from untrusted input.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position, returning `None` if either index is out of
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::try_new(8, 8), Some(Position::new(8, 8)));
    /// assert_eq!(Position::try_new(0, 9), None);
    /// ```
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 9 && col < 9 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major flat index (0-80) used by the board's cell
    /// arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index (0-8) of the 3×3 region owning this cell,
    /// numbered left to right, top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).region_index(), 0);
    /// assert_eq!(Position::new(4, 4).region_index(), 4);
    /// assert_eq!(Position::new(8, 2).region_index(), 6);
    /// ```
    #[must_use]
    pub const fn region_index(self) -> usize {
        (self.row as usize / 3) * 3 + self.col as usize / 3
    }

    /// Returns this cell's `(row, col)` within its owning region, both in
    /// the range 0-2.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::new(4, 7).region_cell(), (1, 1));
    /// assert_eq!(Position::new(8, 8).region_cell(), (2, 2));
    /// ```
    #[must_use]
    pub const fn region_cell(self) -> (u8, u8) {
        (self.row % 3, self.col % 3)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_all_is_row_major_and_complete() {
        assert_eq!(Position::ALL.len(), 81);
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
        // strictly increasing row-major order implies no duplicates
        assert!(Position::ALL.is_sorted());
    }

    #[test]
    fn test_region_index_corners() {
        assert_eq!(Position::new(0, 0).region_index(), 0);
        assert_eq!(Position::new(0, 8).region_index(), 2);
        assert_eq!(Position::new(8, 0).region_index(), 6);
        assert_eq!(Position::new(8, 8).region_index(), 8);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(0, 2).to_string(), "r0c2");
    }

    #[test]
    #[should_panic(expected = "row < 9 && col < 9")]
    fn test_new_rejects_out_of_range_row() {
        let _ = Position::new(9, 0);
    }

    proptest! {
        #[test]
        fn test_try_new_matches_range(row in 0u8..=20, col in 0u8..=20) {
            let pos = Position::try_new(row, col);
            prop_assert_eq!(pos.is_some(), row < 9 && col < 9);
            if let Some(pos) = pos {
                prop_assert_eq!((pos.row(), pos.col()), (row, col));
            }
        }

        #[test]
        fn test_region_addressing_round_trip(row in 0u8..9, col in 0u8..9) {
            let pos = Position::new(row, col);
            let (local_row, local_col) = pos.region_cell();
            prop_assert!(local_row < 3 && local_col < 3);

            // region origin plus local offset reproduces the position
            let region = pos.region_index();
            let origin_row = u8::try_from(region / 3).unwrap() * 3;
            let origin_col = u8::try_from(region % 3).unwrap() * 3;
            prop_assert_eq!(
                Position::new(origin_row + local_row, origin_col + local_col),
                pos
            );
        }
    }
}
