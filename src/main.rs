//! Paddle Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use paddle_pong::input::map_client_y;
    use paddle_pong::renderer::Canvas2d;
    use paddle_pong::sim::Arena;
    use paddle_pong::{Game, PointerTarget, Settings};

    /// Game plus the surface it draws on
    struct App {
        game: Game,
        surface: Canvas2d,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Paddle Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .ok_or("no canvas with id 'pong'")?
            .dyn_into()?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;

        // The canvas' pixel size is the arena
        let mut settings = Settings::load();
        settings.arena_width = canvas.width() as f32;
        settings.arena_height = canvas.height() as f32;

        let game = Game::from_settings(&settings, js_sys::Date::now() as u64);
        let arena = game.state().arena;
        setup_pointer_handler(&canvas, game.pointer(), arena)?;

        let app = Rc::new(RefCell::new(App {
            game,
            surface: Canvas2d::new(ctx),
        }));
        request_animation_frame(app);

        log::info!("Paddle Pong running!");
        Ok(())
    }

    fn setup_pointer_handler(
        canvas: &HtmlCanvasElement,
        pointer: PointerTarget,
        arena: Arena,
    ) -> Result<(), JsValue> {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let y = map_client_y(
                event.client_y() as f32,
                rect.top() as f32,
                rect.height() as f32,
                arena.height,
            );
            pointer.set_pointer_y(y);
        });
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut guard = app.borrow_mut();
            let App { game, surface } = &mut *guard;
            game.frame(surface);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Frames to simulate in a native run
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use paddle_pong::renderer::DrawList;
    use paddle_pong::sim::GameEvent;
    use paddle_pong::{Game, Settings};

    env_logger::init();
    log::info!("Paddle Pong (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in a browser");

    let settings = Settings::load();
    let fallback_seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let frames = std::env::var("PADDLE_PONG_FRAMES")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let mut game = Game::from_settings(&settings, fallback_seed);
    let pointer = game.pointer();
    let height = game.state().arena.height;

    let mut surface = DrawList::new();
    let mut hits = 0u32;
    let mut outs = 0u32;
    for frame in 0..frames {
        // Sweep the pointer up and down the arena
        let phase = (frame as f32 * 0.02).sin() * 0.5 + 0.5;
        pointer.set_pointer_y(phase * height);

        surface.clear();
        game.frame(&mut surface);
        for event in &game.state().events {
            match event {
                GameEvent::PaddleHit(_) => hits += 1,
                GameEvent::BallOut(_) => outs += 1,
                GameEvent::WallBounce => {}
            }
        }
    }

    log::info!(
        "Ran {} frames (seed {}): {} paddle hits, {} balls out, {} draw commands per frame",
        frames,
        game.seed(),
        hits,
        outs,
        surface.len()
    );

    match serde_json::to_string_pretty(game.state()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize final state: {}", e),
    }
}
