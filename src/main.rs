//! Slope Skier entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use slope_skier::clock::BrowserClock;
    use slope_skier::platform::{InputState, LocalStorageStore, TouchButton};
    use slope_skier::renderer::CanvasRenderer;
    use slope_skier::sim::{GameEvent, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        renderer: CanvasRenderer,
        canvas: HtmlCanvasElement,
        store: LocalStorageStore,
        clock: BrowserClock,
    }

    impl Game {
        /// Match the canvas to its container
        fn fit_canvas(&mut self) {
            if let Some(parent) = self.canvas.parent_element() {
                let rect = parent.get_bounding_client_rect();
                self.canvas.set_width(rect.width() as u32);
                self.canvas.set_height(rect.height() as u32);
            }
            self.state
                .resize(self.canvas.width() as f32, self.canvas.height() as f32);
        }

        fn frame(&mut self) {
            let input = self.input.take_tick_input();
            let events = tick(&mut self.state, &input, &self.clock, &mut self.store);
            for event in events {
                if let GameEvent::NewRecord { best } = event {
                    log::info!("Record: {best} m");
                }
            }
            if let Err(e) = self.renderer.render(&self.state) {
                log::warn!("Render error: {:?}", e);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Slope Skier starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no #gameCanvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(seed, slope_skier::sim::Viewport::new(
            canvas.width() as f32,
            canvas.height() as f32,
        ));
        let store = LocalStorageStore;
        state.load_record(&store);

        let game = Rc::new(RefCell::new(Game {
            state,
            input: InputState::new(),
            renderer: CanvasRenderer::new(ctx),
            canvas,
            store,
            clock: BrowserClock,
        }));
        game.borrow_mut().fit_canvas();

        setup_input_handlers(&window, &document, game.clone())?;
        setup_resize(&window, game.clone())?;
        request_animation_frame(game);
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        {
            let game = game.clone();
            let on_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                game.borrow_mut().input.key_down(&e.code());
            });
            document.add_event_listener_with_callback("keydown", on_down.as_ref().unchecked_ref())?;
            on_down.forget();
        }
        {
            let game = game.clone();
            let on_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                game.borrow_mut().input.key_up(&e.code());
            });
            document.add_event_listener_with_callback("keyup", on_up.as_ref().unchecked_ref())?;
            on_up.forget();
        }
        {
            let game = game.clone();
            let on_blur = Closure::<dyn FnMut()>::new(move || {
                game.borrow_mut().input.clear();
            });
            window.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
            on_blur.forget();
        }

        // On-screen buttons: touch and mouse both steer
        for (id, button) in [("leftBtn", TouchButton::Left), ("rightBtn", TouchButton::Right)] {
            let Some(el) = document.get_element_by_id(id) else {
                continue;
            };
            for (event, pressed) in [
                ("touchstart", true),
                ("touchend", false),
                ("mousedown", true),
                ("mouseup", false),
            ] {
                let game = game.clone();
                let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
                    if event.starts_with("touch") {
                        e.prevent_default();
                    }
                    game.borrow_mut().input.touch(button, pressed);
                });
                el.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
                handler.forget();
            }
        }
        Ok(())
    }

    fn setup_resize(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        for event in ["resize", "orientationchange"] {
            let game = game.clone();
            let handler = Closure::<dyn FnMut()>::new(move || {
                game.borrow_mut().fit_canvas();
            });
            window.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
            handler.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Slope Skier (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play");

    headless::run(load_tuning());
}

/// Tuning from the file named by `SKI_TUNING`, defaults otherwise
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning() -> slope_skier::Tuning {
    use slope_skier::Tuning;
    use slope_skier::consts::TUNING_ENV_VAR;

    let Ok(path) = std::env::var(TUNING_ENV_VAR) else {
        return Tuning::default();
    };
    match std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
    {
        Ok(tuning) => {
            log::info!("Loaded tuning from {path}");
            tuning
        }
        Err(e) => {
            log::warn!("Ignoring tuning file {path}: {e}");
            Tuning::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use slope_skier::consts::*;
    use slope_skier::sim::{GameEvent, GameState, TickInput, Viewport, tick};
    use slope_skier::{ManualClock, MemoryStore, Tuning};

    /// One simulated minute at 60 Hz
    const DEMO_FRAMES: u32 = 60 * 60;

    /// Steer away from the closest obstacle bearing down on the skier
    fn autopilot(state: &GameState) -> TickInput {
        let p = &state.player;
        let (left, right) = (p.pos.x, p.pos.x + p.size.x);
        let threat = state
            .rocks
            .iter()
            .chain(state.trees.iter())
            .filter(|o| {
                let below = o.pos.y + o.size.y;
                below > p.pos.y - 150.0 && o.pos.y < p.pos.y + p.size.y
            })
            .filter(|o| o.pos.x < right + 20.0 && o.pos.x + o.size.x > left - 20.0)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

        match threat {
            Some(o) => {
                let obstacle_center = o.pos.x + o.size.x / 2.0;
                let player_center = p.pos.x + p.size.x / 2.0;
                let go_left = if p.pos.x < p.size.x {
                    false
                } else if right > state.viewport.width - p.size.x {
                    true
                } else {
                    player_center < obstacle_center
                };
                TickInput {
                    left: go_left,
                    right: !go_left,
                    ..Default::default()
                }
            }
            None => TickInput {
                speed_up: p.speed < 6.0,
                ..Default::default()
            },
        }
    }

    pub fn run(tuning: Tuning) {
        let viewport = Viewport::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT);
        let seed = rand::random::<u64>();
        let mut state = GameState::with_tuning(seed, viewport, tuning);
        let clock = ManualClock::new(0.0);
        let mut store = MemoryStore::new();
        state.load_record(&store);

        let mut runs = 1;
        for _ in 0..DEMO_FRAMES {
            let input = autopilot(&state);
            for event in tick(&mut state, &input, &clock, &mut store) {
                if event == GameEvent::Restarted {
                    runs += 1;
                }
            }
            clock.advance(FRAME_MS);
        }

        log::info!(
            "Demo finished (seed {seed}): {runs} runs, best {} m, current {:.1} m",
            state.best_distance(),
            state.distance
        );
        println!(
            "runs: {runs}  best: {} m  record writes: {}",
            state.best_distance(),
            store.writes
        );
    }
}
