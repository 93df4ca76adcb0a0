use super::action::Direction;
use super::config::{ConfigError, GameConfig};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Rejection-sampling attempts before falling back to enumerating free cells
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// A pixel-aligned cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Board geometry and toroidal arithmetic. Holds no mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Grid {
    /// Dimensions are in pixels and must be positive multiples of
    /// `cell_size`. [`Grid::from_config`] checks this for untrusted input.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (width, height, cell_size) = config.dimensions()?;
        Ok(Self::new(width, height, cell_size))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Position of the cell at (column, row)
    pub fn cell_at(&self, column: i32, row: i32) -> Position {
        Position::new(column * self.cell_size, row * self.cell_size)
    }

    pub fn center(&self) -> Position {
        self.cell_at(self.columns() / 2, self.rows() / 2)
    }

    /// True for aligned positions inside the board
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x)
            && (0..self.height).contains(&pos.y)
            && pos.x % self.cell_size == 0
            && pos.y % self.cell_size == 0
    }

    /// Bring a position that overflowed by one step back onto the board.
    ///
    /// Exactly one board dimension is added or subtracted on each axis that
    /// left `[0, width) x [0, height)`.
    pub fn wrap(&self, pos: Position) -> Position {
        let x = if pos.x >= self.width {
            pos.x - self.width
        } else if pos.x < 0 {
            pos.x + self.width
        } else {
            pos.x
        };
        let y = if pos.y >= self.height {
            pos.y - self.height
        } else if pos.y < 0 {
            pos.y + self.height
        } else {
            pos.y
        };
        Position::new(x, y)
    }

    /// Neighbouring cell in `direction`, wrapped
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        self.wrap(pos.moved_by(dx * self.cell_size, dy * self.cell_size))
    }

    /// Iterate all cells row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.columns()).map(move |col| self.cell_at(col, row)))
    }

    /// Uniformly random cell that is not in `excluded`.
    ///
    /// Returns `None` only when every cell is excluded.
    pub fn random_free_cell<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        excluded: &HashSet<Position>,
    ) -> Option<Position> {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let pos = self.cell_at(
                rng.gen_range(0..self.columns()),
                rng.gen_range(0..self.rows()),
            );
            if !excluded.contains(&pos) {
                return Some(pos);
            }
        }

        // Crowded board: pick among what is left
        let free: Vec<Position> = self.cells().filter(|pos| !excluded.contains(pos)).collect();
        free.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn reference_grid() -> Grid {
        Grid::from_config(&GameConfig::default()).unwrap()
    }

    #[test]
    fn test_from_config_rejects_oversized_board() {
        let config = GameConfig {
            board_width: 4_294_967_280,
            ..GameConfig::default()
        };
        assert!(matches!(
            Grid::from_config(&config),
            Err(ConfigError::BoardTooLarge { .. })
        ));
    }

    #[test]
    fn test_dimensions() {
        let grid = reference_grid();
        assert_eq!(grid.columns(), 32);
        assert_eq!(grid.rows(), 24);
        assert_eq!(grid.center(), Position::new(320, 240));
        assert_eq!(grid.cells().count(), 32 * 24);
    }

    #[test]
    fn test_wrap_each_edge() {
        let grid = reference_grid();

        // right from the last column
        assert_eq!(grid.step(Position::new(620, 100), Direction::Right), Position::new(0, 100));
        // left from column 0
        assert_eq!(grid.step(Position::new(0, 100), Direction::Left), Position::new(620, 100));
        // up from row 0
        assert_eq!(grid.step(Position::new(40, 0), Direction::Up), Position::new(40, 460));
        // down from the last row
        assert_eq!(grid.step(Position::new(40, 460), Direction::Down), Position::new(40, 0));
    }

    #[test]
    fn test_wrap_leaves_inner_cells_alone() {
        let grid = reference_grid();
        assert_eq!(grid.wrap(Position::new(300, 200)), Position::new(300, 200));
        assert_eq!(grid.step(Position::new(300, 200), Direction::Down), Position::new(300, 220));
    }

    #[test]
    fn test_every_step_stays_on_board() {
        let grid = reference_grid();
        for cell in grid.cells() {
            for direction in Direction::ALL {
                let next = grid.step(cell, direction);
                assert!(grid.contains(next), "{cell:?} -> {direction:?} gave {next:?}");
            }
        }
    }

    #[test]
    fn test_random_free_cell_avoids_excluded() {
        let grid = Grid::new(100, 100, 20);
        let mut rng = StdRng::seed_from_u64(1);
        let excluded: HashSet<Position> = grid.cells().take(20).collect();

        for _ in 0..500 {
            let cell = grid.random_free_cell(&mut rng, &excluded).unwrap();
            assert!(grid.contains(cell));
            assert!(!excluded.contains(&cell));
        }
    }

    #[test]
    fn test_random_free_cell_finds_last_free_cell() {
        let grid = Grid::new(100, 100, 20);
        let mut rng = StdRng::seed_from_u64(9);
        let last = grid.cell_at(3, 4);
        let excluded: HashSet<Position> = grid.cells().filter(|&p| p != last).collect();

        assert_eq!(grid.random_free_cell(&mut rng, &excluded), Some(last));
    }

    #[test]
    fn test_random_free_cell_full_board() {
        let grid = Grid::new(40, 40, 20);
        let mut rng = StdRng::seed_from_u64(0);
        let excluded: HashSet<Position> = grid.cells().collect();

        assert_eq!(grid.random_free_cell(&mut rng, &excluded), None);
    }
}
