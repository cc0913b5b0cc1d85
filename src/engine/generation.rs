use super::{EngineError, GridView};
use log::{debug, trace};

/// Relative `(row, column)` positions of the eight surrounding cells.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// B3/S23: survival with two or three neighbors, birth with exactly three.
pub(super) fn next_state(alive: bool, neibs: usize) -> bool {
    match (alive, neibs) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

/// Conway's Game of Life on a `rows x columns` field whose edges do not wrap:
/// everything beyond the border counts as dead.
///
/// Two buffers are kept; [`advance`](Self::advance) reads only `cells_curr`,
/// writes only `cells_next` and swaps them at the end of the step.
#[derive(Clone, Debug)]
pub struct GenerationEngine {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    rows: usize,
    columns: usize,
}

impl GenerationEngine {
    /// Create a field with all cells dead.
    pub fn blank(rows: usize, columns: usize) -> Result<Self, EngineError> {
        let size = rows
            .checked_mul(columns)
            .filter(|&size| size != 0)
            .ok_or(EngineError::InvalidDimension { rows, columns })?;
        Ok(Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            rows,
            columns,
        })
    }

    /// Create a field where exactly the listed `(row, column)` cells are alive.
    ///
    /// Repeated coordinates are allowed.
    pub fn new<I>(rows: usize, columns: usize, alive_cells: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut result = Self::blank(rows, columns)?;
        for (row, column) in alive_cells {
            if row >= rows || column >= columns {
                return Err(EngineError::InvalidCoordinate {
                    row: i64::try_from(row).unwrap_or(i64::MAX),
                    column: i64::try_from(column).unwrap_or(i64::MAX),
                    rows,
                    columns,
                });
            }
            result.cells_curr[column + row * columns] = true;
        }
        debug!(
            "created {}x{} field with {} alive cells",
            rows,
            columns,
            result.population()
        );
        Ok(result)
    }

    /// Create a field from flat `row column row column ...` input.
    ///
    /// The whole input is rejected on the first value that does not fit.
    pub fn from_flat(rows: usize, columns: usize, values: &[i64]) -> Result<Self, EngineError> {
        if rows == 0 || columns == 0 {
            return Err(EngineError::InvalidDimension { rows, columns });
        }
        if values.len() % 2 != 0 {
            return Err(EngineError::UnpairedCoordinate(values.len()));
        }
        let fits = |value: i64, limit: usize| usize::try_from(value).ok().filter(|&v| v < limit);
        let cells = values
            .chunks_exact(2)
            .map(|pair| {
                let (row, column) = (pair[0], pair[1]);
                match (fits(row, rows), fits(column, columns)) {
                    (Some(r), Some(c)) => Ok((r, c)),
                    _ => Err(EngineError::InvalidCoordinate {
                        row,
                        column,
                        rows,
                        columns,
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rows, columns, cells)
    }

    /// Create a field with random cells, each alive with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(
        rows: usize,
        columns: usize,
        seed: Option<u64>,
        fill_rate: f64,
    ) -> Result<Self, EngineError> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(EngineError::InvalidFillRate(fill_rate));
        }
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut result = Self::blank(rows, columns)?;
        for cell in result.cells_curr.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
        debug!(
            "created random {}x{} field (seed {:?}, fill rate {}) with {} alive cells",
            rows,
            columns,
            seed,
            fill_rate,
            result.population()
        );
        Ok(result)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn population(&self) -> usize {
        self.current_grid().population()
    }

    pub fn current_grid(&self) -> GridView<'_> {
        GridView::new(&self.cells_curr, self.rows, self.columns)
    }

    /// Number of alive cells among the up to eight in-bounds neighbors.
    pub fn live_neighbors(&self, row: usize, column: usize) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| {
                match (row.checked_add_signed(dr), column.checked_add_signed(dc)) {
                    (Some(r), Some(c)) if r < self.rows && c < self.columns => {
                        self.cells_curr[c + r * self.columns]
                    }
                    _ => false,
                }
            })
            .count()
    }

    /// Compute the next generation.
    pub fn advance(&mut self) {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let neibs = self.live_neighbors(row, column);
                let idx = column + row * self.columns;
                let next = next_state(self.cells_curr[idx], neibs);
                self.cells_next[idx] = next;
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        trace!("advanced, population {}", self.population());
    }

    /// Compute `n` generations ahead.
    pub fn advance_by(&mut self, n: u64) {
        for _ in 0..n {
            self.advance();
        }
    }
}
