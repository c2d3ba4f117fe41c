use retrosnake_common::color::Color;
use retrosnake_common::surface::Surface;

use crate::state::GameState;

pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const OBSTACLE_COLOR: Color = Color::GRAY;
pub const FOOD_COLOR: Color = Color::RED;
pub const SNAKE_COLOR: Color = Color::LIME;
pub const SCORE_COLOR: Color = Color::WHITE;

/// Left edge of the score text.
pub const SCORE_X: i32 = 10;
/// Distance from the bottom edge to the score text baseline.
pub const SCORE_BASELINE_INSET: i32 = 10;

/// Paints a full frame of `state`. Later layers cover earlier ones:
/// obstacles, then food, then the snake, then the score.
pub fn draw(state: &GameState, surface: &mut impl Surface) {
    let grid = state.config().grid;

    surface.clear(BACKGROUND_COLOR);

    for cell in state.obstacles() {
        surface.fill_rect(cell.x, cell.y, grid, grid, OBSTACLE_COLOR);
    }

    let food = state.food();
    surface.fill_rect(food.x, food.y, grid, grid, FOOD_COLOR);

    for cell in state.snake() {
        surface.fill_rect(cell.x, cell.y, grid, grid, SNAKE_COLOR);
    }

    surface.fill_text(
        &score_text(state.score()),
        SCORE_X,
        state.config().height - SCORE_BASELINE_INSET,
        SCORE_COLOR,
    );
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::Cell;
    use retrosnake_common::surface::FrameBuffer;
    use std::collections::VecDeque;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(Color),
        Rect(i32, i32, i32, i32, Color),
        Text(String, i32, i32, Color),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, color: Color) {
            self.ops.push(Op::Clear(color));
        }

        fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
            self.ops.push(Op::Rect(x, y, width, height, color));
        }

        fn fill_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
            self.ops.push(Op::Text(text.to_string(), x, y, color));
        }
    }

    fn sample_state() -> GameState {
        let mut state = GameState::with_seed(GameConfig::default(), 1).unwrap();
        state.snake = VecDeque::from([Cell::new(160, 200), Cell::new(140, 200)]);
        state.food = Cell::new(40, 60);
        state.score = 3;
        state
    }

    #[test]
    fn draws_layers_in_order() {
        let state = sample_state();
        let mut recorder = Recorder::default();
        draw(&state, &mut recorder);

        assert_eq!(
            recorder.ops,
            vec![
                Op::Clear(BACKGROUND_COLOR),
                Op::Rect(100, 100, 20, 20, OBSTACLE_COLOR),
                Op::Rect(200, 100, 20, 20, OBSTACLE_COLOR),
                Op::Rect(300, 200, 20, 20, OBSTACLE_COLOR),
                Op::Rect(40, 60, 20, 20, FOOD_COLOR),
                Op::Rect(160, 200, 20, 20, SNAKE_COLOR),
                Op::Rect(140, 200, 20, 20, SNAKE_COLOR),
                Op::Text("Score: 3".to_string(), 10, 390, SCORE_COLOR),
            ]
        );
    }

    #[test]
    fn snake_covers_food_on_overlap() {
        let mut state = sample_state();
        state.food = Cell::new(160, 200);

        let mut pixels = vec![0u8; 400 * 400 * 3];
        let mut fb = FrameBuffer::new(&mut pixels, 400, 400);
        draw(&state, &mut fb);

        assert_eq!(fb.pixel(165, 205), SNAKE_COLOR);
    }

    #[test]
    fn framebuffer_frame() {
        let state = sample_state();
        let mut pixels = vec![0u8; 400 * 400 * 3];
        let mut fb = FrameBuffer::new(&mut pixels, 400, 400);
        draw(&state, &mut fb);

        assert_eq!(fb.pixel(0, 0), BACKGROUND_COLOR);
        assert_eq!(fb.pixel(110, 110), OBSTACLE_COLOR);
        assert_eq!(fb.pixel(50, 70), FOOD_COLOR);
        assert_eq!(fb.pixel(159, 210), SNAKE_COLOR);
        assert_eq!(fb.pixel(180, 210), BACKGROUND_COLOR);
        // Some of the score text lands in the bottom-left corner.
        let lit = (10..120)
            .flat_map(|x| (370..390).map(move |y| (x, y)))
            .filter(|&(x, y)| fb.pixel(x, y) == SCORE_COLOR)
            .count();
        assert!(lit > 0);
    }

    #[test]
    fn score_text_format() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(42), "Score: 42");
    }
}
