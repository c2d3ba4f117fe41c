use std::str::FromStr;

use anyhow::{anyhow, ensure, Result};
use typed_builder::TypedBuilder;

use crate::state::Cell;
use crate::{GRID, SCREEN_HEIGHT, SCREEN_WIDTH, START_CELL};

/// How a new food cell is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoodPlacement {
    /// Any grid cell, including obstacles and the snake.
    Uniform,
    /// Any cell that is not an obstacle.
    #[default]
    AvoidObstacles,
    /// Any cell that is neither an obstacle nor part of the snake.
    AvoidOccupied,
}

impl FromStr for FoodPlacement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "uniform" => Ok(FoodPlacement::Uniform),
            "avoid-obstacles" => Ok(FoodPlacement::AvoidObstacles),
            "avoid-occupied" => Ok(FoodPlacement::AvoidOccupied),
            other => Err(anyhow!(
                "unknown food placement '{}', expected uniform, avoid-obstacles or avoid-occupied",
                other
            )),
        }
    }
}

pub fn default_obstacles() -> Vec<Cell> {
    vec![Cell::new(100, 100), Cell::new(200, 100), Cell::new(300, 200)]
}

/// Playfield geometry and rules for one session.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct GameConfig {
    #[builder(default = SCREEN_WIDTH as i32)]
    pub width: i32,
    #[builder(default = SCREEN_HEIGHT as i32)]
    pub height: i32,
    #[builder(default = GRID)]
    pub grid: i32,
    #[builder(default = START_CELL)]
    pub start: Cell,
    #[builder(default = default_obstacles())]
    pub obstacles: Vec<Cell>,
    #[builder(default)]
    pub food_placement: FoodPlacement,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid > 0, "grid unit must be positive, got {}", self.grid);
        ensure!(
            self.width > 0 && self.width % self.grid == 0,
            "width {} is not a positive multiple of the grid unit {}",
            self.width,
            self.grid
        );
        ensure!(
            self.height > 0 && self.height % self.grid == 0,
            "height {} is not a positive multiple of the grid unit {}",
            self.height,
            self.grid
        );
        ensure!(
            self.is_valid_cell(self.start),
            "start cell {:?} is off the grid",
            self.start
        );
        for obstacle in &self.obstacles {
            ensure!(
                self.is_valid_cell(*obstacle),
                "obstacle {:?} is off the grid",
                obstacle
            );
        }
        ensure!(
            !self.obstacles.contains(&self.start),
            "start cell {:?} is an obstacle",
            self.start
        );
        Ok(())
    }

    pub fn columns(&self) -> i32 {
        self.width / self.grid
    }

    pub fn rows(&self) -> i32 {
        self.height / self.grid
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    pub fn is_aligned(&self, cell: Cell) -> bool {
        cell.x % self.grid == 0 && cell.y % self.grid == 0
    }

    pub fn is_valid_cell(&self, cell: Cell) -> bool {
        self.contains(cell) && self.is_aligned(cell)
    }

    /// Every cell of the playfield, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| {
            (0..self.columns()).map(move |col| Cell::new(col * self.grid, row * self.grid))
        })
    }
}
