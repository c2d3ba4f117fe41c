pub mod app;
pub mod config;
pub mod direction;
pub mod renderer;
pub mod state;
#[cfg(feature = "wasm")]
pub mod wasm;

use std::time::Duration;

pub use app::SnakeApp;
pub use config::{FoodPlacement, GameConfig};
pub use direction::Direction;
pub use state::{Advance, Cell, CollisionCause, GameState};

/// Pixel size of one grid cell.
pub const GRID: i32 = 20;
/// Logical playfield width in pixels.
pub const SCREEN_WIDTH: usize = 400;
/// Logical playfield height in pixels.
pub const SCREEN_HEIGHT: usize = 400;
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 2;
/// Time between two game ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);
/// Where a fresh snake starts.
pub const START_CELL: Cell = Cell::new(160, 200);
