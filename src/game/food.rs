use super::grid::{Grid, Position};
use rand::Rng;
use std::collections::HashSet;
use tracing::warn;

/// The single food item on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Place a new food item on a cell outside `occupied`
    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, rng: &mut R, occupied: &HashSet<Position>) -> Self {
        let mut food = Self {
            position: grid.center(),
        };
        food.relocate(grid, rng, occupied);
        food
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Put the food on a specific cell
    pub fn place_at(&mut self, position: Position) {
        self.position = position;
    }

    /// Move to a random cell outside `occupied`
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        rng: &mut R,
        occupied: &HashSet<Position>,
    ) {
        match grid.random_free_cell(rng, occupied) {
            Some(position) => self.position = position,
            None => warn!(
                occupied = occupied.len(),
                "no free cell left for food, keeping it in place"
            ),
        }
    }
}
