//! Pixel Patrol entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use pixel_patrol::consts::*;
    use pixel_patrol::input::InputState;
    use pixel_patrol::level::level_one_scaled;
    use pixel_patrol::renderer::{BlitRenderState, Frame, paint};
    use pixel_patrol::sim::{World, tick};

    /// Game instance holding all state
    struct Game {
        world: World,
        input: InputState,
        frame: Frame,
        render_state: Option<BlitRenderState>,
    }

    impl Game {
        fn new() -> Self {
            Self {
                world: World::new(level_one_scaled()),
                input: InputState::new(),
                frame: Frame::new(FRAME_W, FRAME_H),
                render_state: None,
            }
        }

        /// Run one simulation tick from the sampled intent
        fn update(&mut self) {
            let intent = self.input.sample();
            tick(&mut self.world, &intent);
        }

        /// Paint the world and blit the frame
        fn render(&mut self) {
            paint(&self.world, &mut self.frame);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.frame) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pixel Patrol starting...");
        debug_assert_eq!(DISPLAY_W % PIXEL_SCALE, 0);
        debug_assert_eq!(DISPLAY_H % PIXEL_SCALE, 0);

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed-size display surface; the low-res frame is an exact divisor
        canvas.set_width(DISPLAY_W);
        canvas.set_height(DISPLAY_H);

        let game = Rc::new(RefCell::new(Game::new()));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = BlitRenderState::new(surface, &adapter, DISPLAY_W, DISPLAY_H).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Pixel Patrol running!");
    }

    /// Keys whose default browser behavior (scrolling) must be suppressed
    fn swallows_default(key: &str) -> bool {
        matches!(
            key,
            " " | "arrowup" | "arrowdown" | "arrowleft" | "arrowright"
        )
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key().to_lowercase();
                if swallows_default(&key) {
                    event.prevent_default();
                }
                game.borrow_mut().input.set_key(&key, true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key().to_lowercase();
                game.borrow_mut().input.set_key(&key, false);
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
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
    log::info!("Pixel Patrol (native) starting...");
    log::info!("The game targets the browser - run with `trunk serve` for the web version");

    // Headless smoke run: hold right and hop for a few seconds of ticks
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use pixel_patrol::input::Intent;
    use pixel_patrol::level::level_one_scaled;
    use pixel_patrol::sim::{GamePhase, World, tick};

    let mut world = World::new(level_one_scaled());
    let intent = Intent {
        move_right: true,
        jump: true,
        ..Default::default()
    };

    for _ in 0..600 {
        tick(&mut world, &intent);
        if world.phase != GamePhase::Playing {
            break;
        }
    }

    log::info!(
        "Smoke run done: phase {:?}, score {}, lives {}, player at {:.1},{:.1}",
        world.phase,
        world.score,
        world.lives(),
        world.player.pos.x,
        world.player.pos.y
    );
    println!("✓ Simulation smoke run complete");
}
