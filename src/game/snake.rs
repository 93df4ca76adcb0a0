use super::action::Direction;
use super::grid::{Grid, Position};
use rand::Rng;
use std::collections::{HashSet, VecDeque};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    grid: Grid,
    /// Body segments, with head at the front
    body: VecDeque<Position>,
    /// Target size. The body catches up one cell per tick.
    length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    /// Cell vacated by the last move, for incremental redraw
    last_tail: Option<Position>,
}

impl Snake {
    /// One-cell snake at the board center heading right
    pub fn new(grid: Grid) -> Self {
        Self::with_direction(grid, Direction::Right)
    }

    pub fn with_direction(grid: Grid, direction: Direction) -> Self {
        Self {
            grid,
            body: VecDeque::from([grid.center()]),
            length: 1,
            direction,
            pending_direction: None,
            last_tail: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        // body is never empty: every mutation pushes before it pops
        self.body[0]
    }

    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Current number of body cells
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Target length, counts eaten food plus one
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn last_tail(&self) -> Option<Position> {
        self.last_tail
    }

    pub fn occupied_cells(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Buffer a turn for the next commit. Reversals are dropped.
    pub fn queue_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Apply the buffered turn, if any. Once per tick, before `move_forward`.
    pub fn commit_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Advance one cell in the committed direction.
    ///
    /// The tail is dropped only while the body is longer than `length`, so
    /// a `grow` shows up as one extra cell on the following move.
    pub fn move_forward(&mut self) {
        let new_head = self.grid.step(self.head(), self.direction);
        self.body.push_front(new_head);

        self.last_tail = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };
    }

    /// Head overlaps any other segment
    pub fn has_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Back to a one-cell snake at the center, facing a random direction
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::with_direction(self.grid, Direction::random(rng));
    }
}
