use crate::renderer;
use crate::state::GameState;
use crate::SCREEN_SCALE;
use retrosnake_common::app::App;
use retrosnake_common::key::Key;
use retrosnake_common::surface::FrameBuffer;

/// Frontend-facing wrapper around `GameState`.
///
/// The frontend calls `update` once per tick period; each call advances the
/// game by one tick and repaints the whole frame.
#[derive(Default)]
pub struct SnakeApp {
    should_exit: bool,
    pub state: GameState,
}

impl SnakeApp {
    pub fn new(state: GameState) -> Self {
        Self {
            should_exit: false,
            state,
        }
    }
}

impl App for SnakeApp {
    fn init(&mut self) {
        log::info!(
            "Snake init: {}x{} grid, start {:?}, {} obstacles, food {:?}",
            self.state.config().columns(),
            self.state.config().rows(),
            self.state.config().start,
            self.state.obstacles().len(),
            self.state.config().food_placement,
        );
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        self.state.tick();

        let mut frame = FrameBuffer::new(
            screen_state,
            self.width() as usize,
            self.height() as usize,
        );
        renderer::draw(&self.state, &mut frame);
    }

    fn handle_key_event(&mut self, key: Key, is_pressed: bool) {
        if !is_pressed {
            return;
        }
        log::debug!("Snake key event: {:?}", key);
        match key {
            Key::Escape => self.should_exit = true,
            _ => self.state.handle_input(key),
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Snake exit with score {}", self.state.score());
    }

    fn width(&self) -> u32 {
        self.state.config().width as u32
    }

    fn height(&self) -> u32 {
        self.state.config().height as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "RetroSnake".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::direction::Direction;
    use crate::renderer::{BACKGROUND_COLOR, SNAKE_COLOR};
    use crate::state::Cell;
    use retrosnake_common::color::Color;

    fn app() -> SnakeApp {
        SnakeApp::new(GameState::with_seed(GameConfig::default(), 3).unwrap())
    }

    fn pixel(screen: &[u8], width: usize, x: usize, y: usize) -> Color {
        let i = (y * width + x) * 3;
        Color::new_rgb(screen[i], screen[i + 1], screen[i + 2])
    }

    #[test]
    fn update_ticks_and_paints() {
        let mut app = app();
        app.state.food = Cell::new(0, 0);
        let width = app.width() as usize;
        let mut screen = vec![0u8; width * app.height() as usize * 3];

        app.update(&mut screen);

        assert_eq!(app.state.head(), Cell::new(180, 200));
        assert_eq!(pixel(&screen, width, 185, 205), SNAKE_COLOR);
        assert_eq!(pixel(&screen, width, 165, 205), BACKGROUND_COLOR);
    }

    #[test]
    fn arrow_press_steers_and_release_is_ignored() {
        let mut app = app();
        app.handle_key_event(Key::Up, false);
        assert_eq!(app.state.pending_direction(), Direction::Right);

        app.handle_key_event(Key::Up, true);
        assert_eq!(app.state.pending_direction(), Direction::Up);
    }

    #[test]
    fn escape_requests_exit() {
        let mut app = app();
        assert!(!app.should_exit());
        app.handle_key_event(Key::Escape, true);
        assert!(app.should_exit());
    }

    #[test]
    fn dimensions_follow_config() {
        let app = app();
        assert_eq!(app.width(), 400);
        assert_eq!(app.height(), 400);
        assert_eq!(app.scale(), SCREEN_SCALE);
    }
}
