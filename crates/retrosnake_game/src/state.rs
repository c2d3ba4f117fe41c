use std::collections::VecDeque;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use retrosnake_common::key::Key;

use crate::config::{FoodPlacement, GameConfig};
use crate::direction::Direction;

/// A grid-aligned position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionCause {
    Obstacle,
    SelfCollision,
}

/// Outcome of one `GameState::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Continued { ate_food: bool },
    /// The move was refused; the state is exactly as before the call.
    Collided(CollisionCause),
}

/// The whole game: snake, food, obstacles and score.
pub struct GameState {
    pub(crate) config: GameConfig,
    /// Head at the front.
    pub(crate) snake: VecDeque<Cell>,
    /// Direction used by the last successful move.
    pub(crate) direction: Direction,
    /// Direction the next move will use.
    pub(crate) pending: Direction,
    pub(crate) food: Cell,
    pub(crate) score: u32,
    rng: StdRng,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_rng(GameConfig::default(), StdRng::from_entropy())
    }
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_rng(config, StdRng::from_entropy()))
    }

    /// Like `new`, with deterministic food placement.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_rng(config, StdRng::seed_from_u64(seed)))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut state = Self {
            snake: VecDeque::from([config.start]),
            direction: Direction::Right,
            pending: Direction::Right,
            food: config.start,
            score: 0,
            config,
            rng,
        };
        state.place_food();
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Always false; a snake has at least its head.
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn obstacles(&self) -> &[Cell] {
        &self.config.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Moves the snake one cell in the pending direction.
    ///
    /// Obstacles are checked before the body, and the body check includes the
    /// tail cell even though a non-eating move would vacate it.
    pub fn advance(&mut self) -> Advance {
        let head = self.next_head(self.pending);

        if self.config.obstacles.contains(&head) {
            return Advance::Collided(CollisionCause::Obstacle);
        }
        if self.snake.contains(&head) {
            return Advance::Collided(CollisionCause::SelfCollision);
        }

        self.direction = self.pending;
        self.snake.push_front(head);

        if head == self.food {
            self.score += 1;
            log::debug!("Food eaten at {:?}, score {}", head, self.score);
            self.place_food();
            Advance::Continued { ate_food: true }
        } else {
            self.snake.pop_back();
            Advance::Continued { ate_food: false }
        }
    }

    /// One driver tick: advance, and start over on a collision.
    pub fn tick(&mut self) -> Advance {
        let outcome = self.advance();
        if let Advance::Collided(cause) = outcome {
            log::info!(
                "Collision ({:?}) at length {}, final score {}",
                cause,
                self.len(),
                self.score
            );
            self.reset();
        }
        outcome
    }

    /// Maps an arrow key to a direction change; other keys are ignored.
    pub fn handle_input(&mut self, key: Key) {
        if let Some(direction) = Direction::from_key(key) {
            self.steer(direction);
        }
    }

    /// Sets the direction for the next move unless it would reverse the
    /// snake. Returns whether the change was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        // Compare against the last move, not the pending one, so two quick
        // turns within a tick cannot add up to a reversal.
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.pending = direction;
        true
    }

    pub fn reset(&mut self) {
        self.snake.clear();
        self.snake.push_back(self.config.start);
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.score = 0;
        self.place_food();
    }

    /// Picks a new food cell according to the configured `FoodPlacement`.
    pub fn place_food(&mut self) {
        let free: Vec<Cell> = match self.config.food_placement {
            FoodPlacement::Uniform => Vec::new(),
            FoodPlacement::AvoidObstacles => self
                .config
                .cells()
                .filter(|cell| !self.config.obstacles.contains(cell))
                .collect(),
            FoodPlacement::AvoidOccupied => self
                .config
                .cells()
                .filter(|cell| !self.config.obstacles.contains(cell) && !self.snake.contains(cell))
                .collect(),
        };

        let picked = free.choose(&mut self.rng).copied();
        self.food = match picked {
            Some(cell) => cell,
            None => self.random_cell(),
        };
    }

    fn random_cell(&mut self) -> Cell {
        let grid = self.config.grid;
        let x = self.rng.gen_range(0..self.config.columns()) * grid;
        let y = self.rng.gen_range(0..self.config.rows()) * grid;
        Cell::new(x, y)
    }

    fn next_head(&self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        let grid = self.config.grid;
        let head = self.head();
        Cell::new(
            wrap(head.x + dx * grid, self.config.width, grid),
            wrap(head.y + dy * grid, self.config.height, grid),
        )
    }
}

fn wrap(value: i32, extent: i32, grid: i32) -> i32 {
    if value < 0 {
        extent - grid
    } else if value >= extent {
        0
    } else {
        value
    }
}
