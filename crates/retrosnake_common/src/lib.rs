pub mod app;
pub mod color;
pub mod font;
pub mod key;
pub mod surface;

pub use app::App;
pub use color::Color;
pub use key::Key;
pub use surface::{FrameBuffer, Surface};
