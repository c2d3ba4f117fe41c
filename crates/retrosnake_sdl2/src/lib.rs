use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use std::time::{Duration, Instant};
use typed_builder::TypedBuilder;

pub use retrosnake_common;
pub use retrosnake_common::app::App;
pub use sdl2;

use retrosnake_common::key::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
    /// Time between two `App::update` calls.
    #[builder(default = Duration::from_micros(16_667))]
    pub frame_period: Duration,
}

pub struct SdlContext;

impl SdlContext {
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
            frame_period,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;

        let texture_creator = canvas.texture_creator();
        let mut texture = texture_creator.create_texture_streaming(
            map_pixel_format(pixel_format),
            width,
            height,
        )?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        app.init();
        log::debug!(
            "SDL2 window {}x{} (scale {}), frame period {:?}",
            width,
            height,
            scale,
            frame_period
        );

        let mut last_frame = Instant::now();
        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => app.handle_key_event(map_keycode(keycode), true),
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => app.handle_key_event(map_keycode(keycode), false),
                    _ => {}
                }
            }

            // Input keeps being polled between ticks; only update on the period.
            if last_frame.elapsed() >= frame_period {
                last_frame = Instant::now();
                app.update(&mut screen_state);
                texture.update(None, &screen_state, (width * color_size) as usize)?;
                canvas.clear();
                canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
                canvas.present();
            }

            std::thread::sleep(Duration::from_millis(1));
        }

        Ok(())
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Escape => Key::Escape,
        Keycode::Space => Key::Space,
        _ => Key::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keycodes_map_to_arrow_keys() {
        assert_eq!(map_keycode(Keycode::Up), Key::Up);
        assert_eq!(map_keycode(Keycode::Down), Key::Down);
        assert_eq!(map_keycode(Keycode::Left), Key::Left);
        assert_eq!(map_keycode(Keycode::Right), Key::Right);
    }

    #[test]
    fn unmapped_keycodes_are_none() {
        assert_eq!(map_keycode(Keycode::Q), Key::None);
        assert_eq!(map_keycode(Keycode::Return), Key::None);
    }

    #[test]
    fn init_info_defaults() {
        let info = SdlInitInfo::builder()
            .width(400)
            .height(400)
            .scale(2)
            .title("test".to_string())
            .build();
        assert_eq!(info.pixel_format, PixelFormat::RGB24);
        assert_eq!(info.frame_period, Duration::from_micros(16_667));
        assert_eq!(map_pixel_format_size(info.pixel_format), 3);
    }
}
