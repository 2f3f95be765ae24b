//! The 3×3 regions partitioning the board.

use crate::{Digit, PlaceError};

/// One of the nine 3×3 blocks of the board.
///
/// A region owns its 9 cells and enforces only the block constraint: no
/// digit may appear twice inside it. It is addressed block-locally with
/// `(row, col)` in 0-2 and knows nothing about absolute grid coordinates;
/// [`Position::region_index`] and [`Position::region_cell`] do the
/// translation. The cells given at construction are kept as a snapshot so
/// the region can be restored independently of the board that owns it.
///
/// [`Position::region_index`]: crate::Position::region_index
/// [`Position::region_cell`]: crate::Position::region_cell
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, PlaceError, Region};
///
/// let mut region = Region::new([None; 9]);
/// region.fill(0, 0, Digit::D5)?;
/// assert_eq!(region.fill(2, 2, Digit::D5), Err(PlaceError::DuplicateInRegion));
/// # Ok::<_, PlaceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    cells: [Option<Digit>; 9],
    given: [Option<Digit>; 9],
}

impl Region {
    /// Creates a region from its 9 cells in row-major order, capturing
    /// them as the snapshot [`reset`](Self::reset) restores.
    #[must_use]
    pub const fn new(cells: [Option<Digit>; 9]) -> Self {
        Self {
            cells,
            given: cells,
        }
    }

    /// Reads a cell. Out-of-range coordinates read as empty.
    #[must_use]
    pub const fn get(&self, row: u8, col: u8) -> Option<Digit> {
        if row < 3 && col < 3 {
            self.cells[Self::cell_index(row, col)]
        } else {
            None
        }
    }

    /// Places a digit at a block-local cell.
    ///
    /// # Errors
    ///
    /// [`OutOfBounds`](PlaceError::OutOfBounds) if `row` or `col` is 3 or
    /// more, [`Occupied`](PlaceError::Occupied) if the cell already holds
    /// a digit, [`DuplicateInRegion`](PlaceError::DuplicateInRegion) if
    /// `digit` is already present anywhere in the block. Nothing is
    /// written on failure.
    pub fn fill(&mut self, row: u8, col: u8, digit: Digit) -> Result<(), PlaceError> {
        if row >= 3 || col >= 3 {
            return Err(PlaceError::OutOfBounds);
        }
        let index = Self::cell_index(row, col);
        if self.cells[index].is_some() {
            return Err(PlaceError::Occupied);
        }
        if self.contains(digit) {
            return Err(PlaceError::DuplicateInRegion);
        }
        self.cells[index] = Some(digit);
        Ok(())
    }

    /// Empties a block-local cell. Clearing an already empty cell is
    /// fine, and out-of-range coordinates are a no-op.
    pub const fn clear(&mut self, row: u8, col: u8) {
        if row < 3 && col < 3 {
            self.cells[Self::cell_index(row, col)] = None;
        }
    }

    /// Returns whether `digit` occurs anywhere in the block.
    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.cells.contains(&Some(digit))
    }

    /// Returns whether the block currently holds no duplicate digit.
    /// Empty cells are ignored; a region of blanks is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let mut seen = [false; 9];
        for digit in self.cells.iter().flatten() {
            let slot = &mut seen[usize::from(digit.value() - 1)];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }

    /// Restores the cells captured at construction, undoing every fill
    /// and clear since.
    pub const fn reset(&mut self) {
        self.cells = self.given;
    }

    // Unconditional write used by the board to mirror its own mutations.
    pub(crate) const fn set(&mut self, row: u8, col: u8, value: Option<Digit>) {
        debug_assert!(row < 3 && col < 3);
        self.cells[Self::cell_index(row, col)] = value;
    }

    const fn cell_index(row: u8, col: u8) -> usize {
        row as usize * 3 + col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_with(cells: &[(u8, u8, Digit)]) -> Region {
        let mut region = Region::new([None; 9]);
        for &(row, col, digit) in cells {
            region.fill(row, col, digit).unwrap();
        }
        region
    }

    #[test]
    fn test_fill_writes_and_reads_back() {
        let mut region = Region::new([None; 9]);
        assert_eq!(region.fill(1, 2, Digit::D7), Ok(()));
        assert_eq!(region.get(1, 2), Some(Digit::D7));
        assert!(region.contains(Digit::D7));
    }

    #[test]
    fn test_fill_rejects_occupied_cell() {
        let mut region = region_with(&[(0, 0, Digit::D1)]);
        assert_eq!(region.fill(0, 0, Digit::D2), Err(PlaceError::Occupied));
        assert_eq!(region.get(0, 0), Some(Digit::D1));
    }

    #[test]
    fn test_fill_rejects_duplicate_digit() {
        let mut region = region_with(&[(0, 0, Digit::D4)]);
        assert_eq!(
            region.fill(2, 1, Digit::D4),
            Err(PlaceError::DuplicateInRegion)
        );
        assert_eq!(region.get(2, 1), None);
    }

    #[test]
    fn test_fill_rejects_out_of_range_coordinates() {
        let mut region = Region::new([None; 9]);
        assert_eq!(region.fill(3, 0, Digit::D1), Err(PlaceError::OutOfBounds));
        assert_eq!(region.fill(0, 3, Digit::D1), Err(PlaceError::OutOfBounds));
        assert_eq!(region, Region::new([None; 9]));
    }

    #[test]
    fn test_clear_is_unconditional() {
        let mut region = region_with(&[(2, 2, Digit::D9)]);
        region.clear(2, 2);
        assert_eq!(region.get(2, 2), None);
        // clearing again and clearing out of range are no-ops
        region.clear(2, 2);
        region.clear(3, 3);
        assert_eq!(region.get(2, 2), None);
    }

    #[test]
    fn test_is_valid_detects_duplicates() {
        assert!(Region::new([None; 9]).is_valid());
        assert!(region_with(&[(0, 0, Digit::D1), (1, 1, Digit::D2)]).is_valid());

        let duplicated = Region::new([Some(Digit::D3), None, None, None, Some(Digit::D3), None, None, None, None]);
        assert!(!duplicated.is_valid());
    }

    #[test]
    fn test_reset_restores_construction_snapshot() {
        let mut cells = [None; 9];
        cells[4] = Some(Digit::D6);
        let mut region = Region::new(cells);

        region.fill(0, 0, Digit::D1).unwrap();
        region.clear(1, 1);
        region.reset();

        assert_eq!(region.get(0, 0), None);
        assert_eq!(region.get(1, 1), Some(Digit::D6));
    }
}
