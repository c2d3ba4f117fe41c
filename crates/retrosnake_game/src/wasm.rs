use std::cell::RefCell;
use std::rc::Rc;

use crate::renderer;
use crate::state::GameState;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_PERIOD};
use retrosnake_common::color::Color;
use retrosnake_common::key::Key;
use retrosnake_common::surface::Surface;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

const FONT: &str = "20px Arial";

/// `Surface` over a canvas 2D context.
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    fn set_fill(&self, color: Color) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: Color) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.set_fill(color);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.set_fill(color);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        self.set_fill(color);
        self.ctx.set_font(FONT);
        if let Err(err) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", err);
        }
    }
}

#[wasm_bindgen]
pub struct SnakeWasm {
    state: GameState,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl SnakeWasm {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<SnakeWasm, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("'{}' is not a canvas", canvas_id)))?;
        canvas.set_width(SCREEN_WIDTH as u32);
        canvas.set_height(SCREEN_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("unexpected 2d context type"))?;

        let state = GameState::default();
        let surface = CanvasSurface {
            ctx,
            width: SCREEN_WIDTH as f64,
            height: SCREEN_HEIGHT as f64,
        };
        Ok(SnakeWasm { state, surface })
    }

    /// Advances one tick and repaints.
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.state.tick();
        self.draw();
    }

    #[wasm_bindgen]
    pub fn draw(&mut self) {
        renderer::draw(&self.state, &mut self.surface);
    }

    #[wasm_bindgen]
    pub fn handle_key(&mut self, evt: KeyboardEvent) {
        self.state.handle_input(Key::from_dom_key(&evt.key()));
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.state.reset();
    }

    #[wasm_bindgen]
    pub fn score(&self) -> u32 {
        self.state.score()
    }
}

/// Runs the game on the canvas with id `canvas_id`: a `keydown` listener on
/// the window steers, and an interval ticks every `TICK_PERIOD`.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    let game = Rc::new(RefCell::new(SnakeWasm::new(canvas_id)?));
    game.borrow_mut().draw();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;

    let on_key = {
        let game = Rc::clone(&game);
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |evt: KeyboardEvent| {
            game.borrow_mut().handle_key(evt);
        })
    };
    window.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    // The listener lives as long as the page.
    on_key.forget();

    let on_tick = Closure::<dyn FnMut()>::new(move || game.borrow_mut().tick());
    let callback: &js_sys::Function = on_tick.as_ref().unchecked_ref();
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        callback,
        TICK_PERIOD.as_millis() as i32,
    )?;
    on_tick.forget();

    log::info!("Snake started on #{}", canvas_id);
    Ok(())
}
