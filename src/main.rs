//! Hue Siege entry point
//!
//! Handles platform-specific initialization and runs the game loop: the
//! browser host on wasm32, a headless autoplay demo on native.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use hue_siege::consts::*;
    use hue_siege::render::CanvasPainter;
    use hue_siege::sim::SessionEvent;
    use hue_siege::{SessionController, Settings};

    /// Delay between scoreboard teardown and the fresh session (milliseconds).
    /// Host convenience only - the restart itself needs no delay.
    const RESTART_SETTLE_MS: i32 = 100;

    fn window() -> web_sys::Window {
        web_sys::window().expect("no global `window` exists")
    }

    fn document() -> web_sys::Document {
        window().document().expect("no document on window")
    }

    /// Host-side state shared by every callback
    struct Host {
        controller: SessionController,
        painter: CanvasPainter,
        last_time: f64,
        /// Interval handle for the spawn timer; cleared on session end so no
        /// scheduled callback dangles past Ended
        spawn_handle: Option<i32>,
    }

    impl Host {
        fn stop_spawn_timer(&mut self) {
            if let Some(handle) = self.spawn_handle.take() {
                window().clear_interval_with_handle(handle);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hue Siege starting...");

        let canvas: HtmlCanvasElement = document()
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fill the window
        let width = window().inner_width().unwrap().as_f64().unwrap();
        let height = window().inner_height().unwrap().as_f64().unwrap();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("no 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let view = Vec2::new(width as f32, height as f32);

        let host = Rc::new(RefCell::new(Host {
            controller: SessionController::new(seed, view),
            painter: CanvasPainter::new(ctx, &settings),
            last_time: 0.0,
            spawn_handle: None,
        }));

        // Fire on click, aimed at the pointer
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let target = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                host.borrow_mut().controller.fire(target);
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        start_spawn_timer(&host);
        request_animation_frame(host);

        log::info!("Hue Siege running!");
    }

    /// Register the 1000ms spawn interval for the current session
    fn start_spawn_timer(host: &Rc<RefCell<Host>>) {
        let callback = {
            let host = host.clone();
            Closure::<dyn FnMut()>::new(move || {
                host.borrow_mut().controller.spawn_enemy();
            })
        };
        let handle = window()
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                SPAWN_INTERVAL_MS,
            )
            .expect("should register spawn interval");
        host.borrow_mut().spawn_handle = Some(handle);
        callback.forget();
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window().request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        let final_score = {
            let mut h = host.borrow_mut();

            let elapsed_ticks = if h.last_time > 0.0 {
                ((time - h.last_time) / TICK_MS as f64) as f32
            } else {
                1.0
            };
            h.last_time = time;

            let events = h.controller.frame(elapsed_ticks);
            h.painter.paint(h.controller.session());
            update_score_hud(h.controller.score());

            let ended = events
                .iter()
                .find_map(|event| match event {
                    SessionEvent::SessionEnded { score } => Some(*score),
                    _ => None,
                });
            if ended.is_some() {
                h.stop_spawn_timer();
            }
            ended
        };

        match final_score {
            // Frozen: hand over to the scoreboard, do not reschedule
            Some(score) => show_scoreboard(&host, score),
            None => request_animation_frame(host),
        }
    }

    /// Update the live score element, if the page has one
    fn update_score_hud(score: u64) {
        if let Some(el) = document().get_element_by_id("scoreboard-value") {
            el.set_text_content(Some(&score.to_string()));
        }
    }

    /// Present the final score with a restart control
    fn show_scoreboard(host: &Rc<RefCell<Host>>, score: u64) {
        let doc = document();
        let panel = doc.create_element("div").expect("create score panel");
        panel.set_id("score");
        panel.set_inner_html(&format!(
            "<h4>Points</h4><h1 id=\"score-value\">{score}</h1>"
        ));

        let button = doc.create_element("button").expect("create restart button");
        button.set_id("restart");
        button.set_text_content(Some("Restart"));
        panel.append_child(&button).expect("attach restart button");

        doc.body()
            .expect("no body")
            .append_child(&panel)
            .expect("attach score panel");

        let host = host.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            // Tear the panel down, give the DOM a beat to settle, then start
            // the fresh session and re-register both schedulers.
            if let Some(panel) = document().get_element_by_id("score") {
                panel.remove();
            }
            let host = host.clone();
            let timeout = Closure::once(move || {
                let seed = js_sys::Date::now() as u64;
                {
                    let mut h = host.borrow_mut();
                    h.controller.restart(seed);
                    h.last_time = 0.0;
                }
                start_spawn_timer(&host);
                request_animation_frame(host);
            });
            let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
                timeout.as_ref().unchecked_ref(),
                RESTART_SETTLE_MS,
            );
            timeout.forget();
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use hue_siege::SessionController;
    use hue_siege::consts::*;
    use hue_siege::sim::SessionEvent;

    env_logger::init();

    // Headless autoplay demo: drive the session at the reference tick rate
    // with a simple policy (spawn each second, fire at the nearest enemy on
    // a fixed cadence) so the whole loop runs without a browser host.
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    let view = Vec2::new(VIEW_WIDTH, VIEW_HEIGHT);
    let mut controller = SessionController::new(seed, view);

    let mut hits = 0u32;
    let mut kills = 0u32;
    let max_ticks = 10 * 60 * TICK_HZ as u64;
    for step in 0..max_ticks {
        if step % 60 == 0 {
            controller.spawn_enemy();
        }
        if step % 15 == 0 {
            let player_pos = controller.session().player.pos;
            let target = controller
                .session()
                .enemies
                .iter()
                .min_by(|a, b| {
                    a.pos
                        .distance_squared(player_pos)
                        .partial_cmp(&b.pos.distance_squared(player_pos))
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|enemy| enemy.pos);
            if let Some(target) = target {
                controller.fire(target);
            }
        }

        for event in controller.frame(1.0) {
            match event {
                SessionEvent::EnemyHit => hits += 1,
                SessionEvent::EnemyDestroyed => kills += 1,
                SessionEvent::SessionEnded { score } => {
                    println!("Game over: {score} points");
                }
            }
        }
        if !controller.is_running() {
            break;
        }
    }

    println!(
        "{hits} hits, {kills} kills, final score {}",
        controller.score()
    );
}
