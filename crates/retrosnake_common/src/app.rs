use crate::key::Key;

/// A game that a frontend can drive.
///
/// The frontend owns the window, the event loop and the frame timer. Each
/// frame it forwards pending key events and then calls `update` with an RGB24
/// buffer of `width * height * 3` bytes that the app fully repaints.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
