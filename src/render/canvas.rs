use super::RenderSink;
use crate::game::{Grid, Position, Rgb};

/// What a single board cell currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPaint {
    pub fill: Rgb,
    pub border: Rgb,
}

/// Retained cell buffer. Keeps whatever was last painted until it is
/// painted over or cleared, like a window surface.
#[derive(Debug, Clone)]
pub struct BoardCanvas {
    grid: Grid,
    background: Rgb,
    cells: Vec<CellPaint>,
}

impl BoardCanvas {
    pub fn new(grid: Grid, background: Rgb) -> Self {
        let blank = CellPaint {
            fill: background,
            border: background,
        };
        Self {
            grid,
            background,
            cells: vec![blank; grid.columns() as usize * grid.rows() as usize],
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.grid.contains(position) {
            return None;
        }
        let column = position.x / self.grid.cell_size();
        let row = position.y / self.grid.cell_size();
        Some((row * self.grid.columns() + column) as usize)
    }

    pub fn paint_at(&self, position: Position) -> Option<CellPaint> {
        self.index(position).map(|i| self.cells[i])
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellPaint]> {
        self.cells.chunks(self.grid.columns() as usize)
    }

    /// Number of cells showing `fill`
    pub fn count_fill(&self, fill: Rgb) -> usize {
        self.cells.iter().filter(|paint| paint.fill == fill).count()
    }
}

impl RenderSink for BoardCanvas {
    fn draw_cell(&mut self, position: Position, fill: Rgb, border: Rgb) {
        if let Some(i) = self.index(position) {
            self.cells[i] = CellPaint { fill, border };
        }
    }

    fn clear(&mut self) {
        let blank = CellPaint {
            fill: self.background,
            border: self.background,
        };
        self.cells.fill(blank);
    }
}
