//! Coin Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use coin_dash::FrameClock;
    use coin_dash::renderer::{RenderState, build_scene};
    use coin_dash::sim::{GameState, InputState, PlayArea, autopilot, tick};
    use coin_dash::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        clock: FrameClock,
        input: InputState,
        /// Demo mode: the autopilot drives instead of the keyboard
        idle_mode: bool,
        /// Score last written to the HUD
        shown_score: Option<u64>,
    }

    impl Game {
        fn new(seed: u64, area: PlayArea, tuning: Tuning) -> Self {
            Self {
                state: GameState::new(seed, area, tuning),
                render_state: None,
                clock: FrameClock::new(),
                input: InputState::new(),
                idle_mode: false,
                shown_score: None,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, time: f64) {
            for _ in 0..self.clock.advance(time) {
                let input = if self.idle_mode {
                    autopilot::steer(&self.state)
                } else {
                    self.input
                };
                if let Some(collection) = tick(&mut self.state, &input).collected {
                    log::debug!(
                        "Coin collected at ({:.0}, {:.0}) by player at ({:.0}, {:.0}), score {}",
                        collection.coin_pos.x,
                        collection.coin_pos.y,
                        collection.player_pos.x,
                        collection.player_pos.y,
                        collection.score
                    );
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let vertices = build_scene(&self.state);
            match render_state.render(&vertices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    render_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Update the score text in the DOM when it changes
        fn update_hud(&mut self) {
            if self.shown_score == Some(self.state.score) {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&format!("Score: {}", self.state.score)));
                self.shown_score = Some(self.state.score);
            }
        }
    }

    /// Tuning overrides from `<script id="tuning" type="application/json">`
    fn load_tuning(document: &web_sys::Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning overrides: {}", e);
                Tuning::default()
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Coin Dash starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas id=\"canvas\"> found");
            return;
        };

        // Play area in CSS pixels, surface in physical pixels. A canvas that
        // is hidden or not laid out yet reports 0x0.
        let dpr = window.device_pixel_ratio();
        let area = PlayArea::from_client_size(
            canvas.client_width() as f32,
            canvas.client_height() as f32,
        );
        let width = (area.width as f64 * dpr) as u32;
        let height = (area.height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        log::info!("Play area {}x{} (dpr {})", area.width, area.height, dpr);

        let game = Rc::new(RefCell::new(Game::new(
            js_sys::Date::now() as u64,
            area,
            load_tuning(&document),
        )));
        log::info!("Game initialized with seed: {}", game.borrow().state.seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, area).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create renderer: {}", e);
                return;
            }
        }

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Coin Dash running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if g.input.key_event(&key, true) {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                } else if key == "i" || key == "I" {
                    g.idle_mode = !g.idle_mode;
                    log::info!("Idle mode: {}", g.idle_mode);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.key_event(&event.key(), false) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyups are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input.release_all();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    log::info!("Coin Dash (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");
    log::info!("Running a headless autopilot demo instead");

    run_headless_demo(0xC0FFEE, 60 * 60);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the autopilot play for `ticks` ticks and report how it did
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo(seed: u64, ticks: u64) {
    use coin_dash::consts::SIM_HZ;
    use coin_dash::sim::{GameState, PlayArea, autopilot, tick};
    use coin_dash::tuning::Tuning;

    let mut state = GameState::new(seed, PlayArea::default(), Tuning::default());
    let mut peak_particles = 0;

    for _ in 0..ticks {
        let input = autopilot::steer(&state);
        if let Some(collection) = tick(&mut state, &input).collected {
            log::debug!(
                "tick {}: player at ({:.0}, {:.0}) took coin at ({:.0}, {:.0}), respawned at ({:.0}, {:.0})",
                state.time_ticks,
                collection.player_pos.x,
                collection.player_pos.y,
                collection.coin_pos.x,
                collection.coin_pos.y,
                collection.respawned_at.x,
                collection.respawned_at.y
            );
        }
        peak_particles = peak_particles.max(state.particle_count());
    }

    log::info!(
        "Demo finished: {} coins in {:.0}s of play (seed {:#x}, peak {} particles)",
        state.score,
        ticks as f32 / SIM_HZ,
        state.seed,
        peak_particles
    );
}
