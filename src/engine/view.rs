use std::fmt;

/// Read-only view of the current generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridView<'a> {
    cells: &'a [bool],
    rows: usize,
    columns: usize,
}

impl<'a> GridView<'a> {
    pub(super) fn new(cells: &'a [bool], rows: usize, columns: usize) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Self {
            cells,
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// State of the cell at `(row, column)`.
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn get(&self, row: usize, column: usize) -> bool {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({row}, {column}) is outside the {}x{} grid",
            self.rows,
            self.columns
        );
        self.cells[column + row * self.columns]
    }

    /// Cells of one row, left to right.
    ///
    /// Panics if `row` is outside the grid.
    pub fn row(&self, row: usize) -> &'a [bool] {
        assert!(
            row < self.rows,
            "row {row} is outside the {}x{} grid",
            self.rows,
            self.columns
        );
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &'a [bool]> {
        self.cells.chunks_exact(self.columns)
    }

    /// Coordinates of alive cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + 'a {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(i, _)| (i / columns, i % columns))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line = row
                .iter()
                .map(|&alive| if alive { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
