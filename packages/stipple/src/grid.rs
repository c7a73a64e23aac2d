//! The fixed 7x52 heatmap bitmap

/// Rows in the grid, one per weekday (row 0 is Sunday)
pub const GRID_ROWS: usize = 7;

/// Columns in the grid, one per week
pub const GRID_COLS: usize = 52;

/// A 7x52 binary matrix laid out like one year of an activity heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[bool; GRID_COLS]; GRID_ROWS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An all-zero grid
    pub const fn new() -> Self {
        Self {
            cells: [[false; GRID_COLS]; GRID_ROWS],
        }
    }

    /// Whether the cell is lit. Cells outside the grid are unlit.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < GRID_ROWS && col < GRID_COLS && self.cells[row][col]
    }

    /// Set one cell. Returns `false` and leaves the grid untouched when the
    /// cell lies outside it.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, lit: bool) -> bool {
        if row < GRID_ROWS && col < GRID_COLS {
            self.cells[row][col] = lit;
            true
        } else {
            false
        }
    }

    /// Cell value as `0` or `1`
    #[inline]
    pub fn value(&self, row: usize, col: usize) -> u8 {
        u8::from(self.get(row, col))
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&lit| lit).count())
            .sum()
    }

    pub fn is_blank(&self) -> bool {
        self.lit_count() == 0
    }

    /// Lit cells as `(row, col)`, column by column with rows ascending inside
    /// each column. This is also chronological order on the heatmap.
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GRID_COLS).flat_map(move |col| {
            (0..GRID_ROWS).filter_map(move |row| self.cells[row][col].then_some((row, col)))
        })
    }

    /// Rows rendered as `0`/`1` strings, top first
    pub fn to_row_strings(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&lit| if lit { '1' } else { '0' }).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_blank() {
        let grid = Grid::new();
        assert!(grid.is_blank());
        assert_eq!(grid.lit_cells().count(), 0);
        assert_eq!(grid.to_row_strings().len(), GRID_ROWS);
        assert!(grid.to_row_strings().iter().all(|row| row.len() == GRID_COLS));
    }

    #[test]
    fn set_ignores_out_of_bounds() {
        let mut grid = Grid::new();
        assert!(!grid.set(GRID_ROWS, 0, true));
        assert!(!grid.set(0, GRID_COLS, true));
        assert!(grid.is_blank());
        assert!(!grid.get(99, 99));
    }

    #[test]
    fn lit_cells_are_column_major() {
        let mut grid = Grid::new();
        grid.set(6, 0, true);
        grid.set(0, 1, true);
        grid.set(3, 0, true);
        grid.set(2, 51, true);

        let cells: Vec<_> = grid.lit_cells().collect();
        assert_eq!(cells, vec![(3, 0), (6, 0), (0, 1), (2, 51)]);
        assert_eq!(grid.lit_count(), 4);
        assert_eq!(grid.value(2, 51), 1);
        assert_eq!(grid.value(2, 50), 0);
    }
}
