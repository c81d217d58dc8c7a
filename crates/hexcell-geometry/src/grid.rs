use crate::Point2;
use crate::profiles::HexagonProfile;

/// Staggered grid of pointy-top hexagons. Odd rows shift right by half a
/// hexagon width so neighbouring cells share an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexGrid {
    pub columns: usize,
    pub rows: usize,
    pub side: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexCell {
    pub row: usize,
    pub col: usize,
    pub center: Point2,
    pub border: bool,
}

impl HexGrid {
    pub fn new(columns: usize, rows: usize, side: f64) -> Self {
        Self {
            columns,
            rows,
            side,
        }
    }

    pub fn col_step(&self) -> f64 {
        HexagonProfile::new(Point2::new(0.0, 0.0), self.side).width()
    }

    pub fn row_step(&self) -> f64 {
        0.75 * HexagonProfile::new(Point2::new(0.0, 0.0), self.side).height()
    }

    /// Cell count, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cell_center(&self, row: usize, col: usize) -> Point2 {
        let x_offset = if row % 2 == 1 {
            self.col_step() * 0.5
        } else {
            0.0
        };
        Point2::new(
            col as f64 * self.col_step() + x_offset,
            row as f64 * self.row_step(),
        )
    }

    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.rows || col + 1 == self.columns
    }

    /// Cells in row-major order, rows outermost.
    pub fn cells(&self) -> impl Iterator<Item = HexCell> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |col| HexCell {
                row,
                col,
                center: self.cell_center(row, col),
                border: self.is_border(row, col),
            })
        })
    }

    pub fn border_cells(&self) -> impl Iterator<Item = HexCell> + '_ {
        self.cells().filter(|cell| cell.border)
    }

    pub fn border_count(&self) -> usize {
        if self.rows <= 2 || self.columns <= 2 {
            return self.len();
        }
        let interior = (self.rows - 2).saturating_mul(self.columns - 2);
        self.len().saturating_sub(interior)
    }
}
