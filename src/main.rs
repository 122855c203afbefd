//! Wheel Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement, HtmlImageElement, KeyboardEvent, PointerEvent};

    use wheel_dash::Game;
    use wheel_dash::platform::web::{LocalStorage, PerformanceClock};
    use wheel_dash::presenter::{Announcement, Presenter, TapFeedback};
    use wheel_dash::sim::Snapshot;
    use wheel_dash::tuning::Tuning;
    use wheel_dash::tuning::consts::TAP_PULSE_MS;
    use wheel_dash::view::{HamsterMood, HudFrame, WHEEL_ASSET, WheelSpin};

    type WebGame = Game<PerformanceClock, LocalStorage, DomPresenter>;

    /// Half the tap pulse size (px)
    const PULSE_OFFSET: f64 = 70.0;

    fn element(document: &Document, id: &str) -> Option<HtmlElement> {
        document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn set_text(el: &Option<HtmlElement>, text: &str) {
        if let Some(el) = el {
            el.set_text_content(Some(text));
        }
    }

    fn toggle_class(el: &Option<HtmlElement>, class: &str, on: bool) {
        if let Some(el) = el {
            let _ = el.class_list().toggle_with_force(class, on);
        }
    }

    fn set_style(el: &Option<HtmlElement>, property: &str, value: &str) {
        if let Some(el) = el {
            let _ = el.style().set_property(property, value);
        }
    }

    fn set_hidden(el: &Option<HtmlElement>, hidden: bool) {
        if let Some(el) = el {
            el.set_hidden(hidden);
        }
    }

    /// Image whose container is marked `has-image` only once the image loads
    struct ImageSlot {
        container: HtmlElement,
        img: HtmlImageElement,
    }

    impl ImageSlot {
        fn new(container: HtmlElement, img: HtmlImageElement) -> Self {
            let on_load = {
                let container = container.clone();
                Closure::<dyn FnMut()>::new(move || {
                    let _ = container.class_list().add_1("has-image");
                })
            };
            let on_error = {
                let container = container.clone();
                Closure::<dyn FnMut()>::new(move || {
                    let _ = container.class_list().remove_1("has-image");
                })
            };
            img.set_onload(Some(on_load.as_ref().unchecked_ref()));
            img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            // One pair per image for the page lifetime
            on_load.forget();
            on_error.forget();

            Self { container, img }
        }

        fn show(&self, src: &str) {
            let _ = self.container.class_list().remove_1("has-image");
            self.img.set_src(src);
        }
    }

    /// DOM-backed presenter
    struct DomPresenter {
        score: Option<HtmlElement>,
        best: Option<HtmlElement>,
        best_badge: Option<HtmlElement>,
        wheel: Option<HtmlElement>,
        wheel_image: Option<ImageSlot>,
        hamster: Option<HtmlElement>,
        hamster_image: Option<ImageSlot>,
        heat_fill: Option<HtmlElement>,
        timing_chip: Option<HtmlElement>,
        tap_zone: Option<HtmlElement>,
        tap_pulse: Option<HtmlElement>,
        overlay: Option<HtmlElement>,
        overlay_title: Option<HtmlElement>,
        overlay_message: Option<HtmlElement>,
        result_line: Option<HtmlElement>,
        record_badge: Option<HtmlElement>,
        last_score: Option<HtmlElement>,
        start_btn: Option<HtmlElement>,
        tuning: Tuning,
        wheel_spin: WheelSpin,
        mood: HamsterMood,
        shown_score: Option<u64>,
        shown_best: Option<u64>,
    }

    impl DomPresenter {
        fn new(document: &Document, tuning: Tuning) -> Self {
            let image = |container: &Option<HtmlElement>, id: &str| {
                let img = document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
                container.clone().zip(img).map(|(c, i)| ImageSlot::new(c, i))
            };
            let wheel = element(document, "wheelDisplay");
            let hamster = element(document, "hamsterDisplay");
            Self {
                score: element(document, "scoreValue"),
                best: element(document, "bestValue"),
                best_badge: element(document, "bestBadge"),
                wheel_image: image(&wheel, "wheelImage"),
                hamster_image: image(&hamster, "hamsterImage"),
                wheel,
                hamster,
                heat_fill: element(document, "heatFill"),
                timing_chip: element(document, "timingChip"),
                tap_zone: element(document, "tapZone"),
                tap_pulse: element(document, "tapPulse"),
                overlay: element(document, "overlay"),
                overlay_title: element(document, "overlayTitle"),
                overlay_message: element(document, "overlayMessage"),
                result_line: element(document, "resultLine"),
                record_badge: element(document, "recordBadge"),
                last_score: element(document, "lastScore"),
                start_btn: element(document, "startBtn"),
                tuning,
                wheel_spin: WheelSpin::default(),
                mood: HamsterMood::Normal,
                shown_score: None,
                shown_best: None,
            }
        }

        fn load_images(&self) {
            if let Some(slot) = &self.wheel_image {
                slot.show(WHEEL_ASSET);
            }
            self.show_mood(self.mood);
        }

        fn show_mood(&self, mood: HamsterMood) {
            if let Some(slot) = &self.hamster_image {
                slot.show(mood.asset());
            }
        }

        fn hide_overlay(&self) {
            toggle_class(&self.overlay, "is-visible", false);
            set_hidden(&self.result_line, true);
            set_hidden(&self.record_badge, true);
        }
    }

    impl Presenter for DomPresenter {
        fn ready(&mut self, best_score: u64) {
            set_text(&self.best, &best_score.to_string());
            self.shown_best = Some(best_score);

            set_text(&self.overlay_title, "ほこたん回し車ダッシュ");
            set_text(
                &self.overlay_message,
                "タイミングよくタップして回転スピードアップ。スピードが高すぎるとオーバーヒートでゲームオーバー！",
            );
            set_text(&self.start_btn, "ゲームスタート");
            toggle_class(&self.overlay, "is-visible", true);
            set_hidden(&self.result_line, true);
            set_hidden(&self.record_badge, true);
        }

        fn run_started(&mut self) {
            set_text(&self.score, "0");
            self.shown_score = Some(0);
            set_style(&self.heat_fill, "width", "0%");
            toggle_class(&self.timing_chip, "is-hot", false);
            toggle_class(&self.timing_chip, "is-good", false);
            toggle_class(&self.best_badge, "is-active", false);
            self.hide_overlay();
        }

        fn render(&mut self, snapshot: &Snapshot, dt_secs: f64) {
            let hud = HudFrame::from_snapshot(snapshot, &self.tuning);

            if let Some(score) = hud.score {
                if self.shown_score != Some(score) {
                    set_text(&self.score, &score.to_string());
                    self.shown_score = Some(score);
                }
            }
            if let Some(heat) = hud.heat {
                set_style(&self.heat_fill, "width", &format!("{}%", heat));
            }
            if let Some(chip) = hud.chip {
                toggle_class(&self.timing_chip, "is-good", chip.is_good);
                toggle_class(&self.timing_chip, "is-hot", chip.is_hot);
                toggle_class(&self.tap_zone, "is-good", chip.is_good);
            }
            if let Some(mood) = hud.mood.filter(|m| *m != self.mood) {
                self.mood = mood;
                self.show_mood(mood);
            }
            if let Some(bounce) = hud.bounce {
                let height = format!("{}px", bounce.height_px);
                set_style(&self.hamster, "--bounce-height", &height);
                set_style(&self.hamster, "--bounce-speed", &format!("{}s", bounce.period_secs));
            }

            if self.shown_best != Some(snapshot.best_score) {
                set_text(&self.best, &snapshot.best_score.to_string());
                self.shown_best = Some(snapshot.best_score);
            }
            if snapshot.new_record {
                toggle_class(&self.best_badge, "is-active", true);
            }

            let angle = self.wheel_spin.advance(snapshot, dt_secs);
            set_style(&self.wheel, "transform", &format!("rotate({}deg)", angle));
        }

        fn tap_feedback(&mut self, feedback: TapFeedback) {
            let Some(zone) = &self.tap_zone else {
                return;
            };
            let _ = zone.class_list().add_1("is-pressed");

            match feedback.pointer {
                Some(p) => {
                    let rect = zone.get_bounding_client_rect();
                    let x = p.x as f64 - rect.left();
                    let y = p.y as f64 - rect.top();
                    set_style(&self.tap_pulse, "left", &format!("{}px", x - PULSE_OFFSET));
                    set_style(&self.tap_pulse, "top", &format!("{}px", y - PULSE_OFFSET));
                }
                None => {
                    set_style(&self.tap_pulse, "left", "50%");
                    set_style(&self.tap_pulse, "top", "50%");
                }
            }

            let zone = zone.clone();
            // Freed by the JS side once it has run
            let release = Closure::once_into_js(move || {
                let _ = zone.class_list().remove_1("is-pressed");
            });
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    release.unchecked_ref(),
                    TAP_PULSE_MS,
                );
            }
        }

        fn game_over(&mut self, announcement: Announcement) {
            set_text(&self.overlay_title, "GAME OVER");
            set_text(&self.overlay_message, "回しすぎ注意！ほこたんが目を回したよ。");
            set_text(&self.last_score, &announcement.final_score.to_string());
            set_hidden(&self.result_line, false);
            set_hidden(&self.record_badge, !announcement.is_new_record);
            set_text(&self.start_btn, "もう一度あそぶ");
            toggle_class(&self.overlay, "is-visible", true);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Wheel Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let presenter = DomPresenter::new(&document, Tuning::default());
        presenter.load_images();

        let game: Rc<RefCell<WebGame>> = Rc::new(RefCell::new(Game::new(
            PerformanceClock::new(),
            LocalStorage::new(),
            presenter,
        )));

        setup_start_button(&document, game.clone());
        setup_tap_input(&document, game.clone());

        request_animation_frame(game);

        log::info!("Wheel Dash running!");
    }

    fn setup_start_button(document: &Document, game: Rc<RefCell<WebGame>>) {
        if let Some(btn) = document.get_element_by_id("startBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().start();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_tap_input(document: &Document, game: Rc<RefCell<WebGame>>) {
        // Pointer down on the tap zone
        if let Some(zone) = document.get_element_by_id("tapZone") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let pointer = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                game.borrow_mut().tap(Some(pointer));
            });
            let _ = zone
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Space bar anywhere
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    game.borrow_mut().tap(None);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<WebGame>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use wheel_dash::presenter::{Announcement, Presenter, TapFeedback};
    use wheel_dash::sim::autoplay::wants_tap;
    use wheel_dash::sim::{LifecyclePhase, Snapshot};
    use wheel_dash::tuning::consts::GAME_OVER_ANNOUNCE_DELAY_MS;
    use wheel_dash::{Game, ManualClock, MemoryStore, Tuning};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Frames between pilot taps (~150ms)
    const TAP_COOLDOWN_FRAMES: u64 = 9;
    /// Print a snapshot line every second of play
    const REPORT_EVERY_FRAMES: u64 = 60;

    /// Writes JSON lines to stdout
    #[derive(Default)]
    pub struct JsonLinesPresenter {
        frames: u64,
        taps: u64,
        pub announced: Option<Announcement>,
    }

    impl Presenter for JsonLinesPresenter {
        fn ready(&mut self, best_score: u64) {
            println!("{}", serde_json::json!({ "event": "ready", "best": best_score }));
        }

        fn run_started(&mut self) {
            println!("{}", serde_json::json!({ "event": "start" }));
        }

        fn render(&mut self, snapshot: &Snapshot, _dt_secs: f64) {
            self.frames += 1;
            if self.frames % REPORT_EVERY_FRAMES == 0 {
                println!(
                    "{}",
                    serde_json::json!({ "event": "frame", "frame": self.frames, "state": snapshot })
                );
            }
        }

        fn tap_feedback(&mut self, _feedback: TapFeedback) {
            self.taps += 1;
        }

        fn game_over(&mut self, announcement: Announcement) {
            let line = serde_json::json!({
                "event": "game_over",
                "result": announcement,
                "taps": self.taps,
            });
            println!("{}", line);
            self.announced = Some(announcement);
        }
    }

    /// Play one autopiloted run of `session_secs` and report it
    pub fn run(session_secs: f64) {
        let clock = ManualClock::new(0.0);
        let mut game = Game::new(clock.clone(), MemoryStore::new(), JsonLinesPresenter::default());
        let tuning = *game.tuning();
        log::info!("Tuning: {:?}", tuning);

        game.start();

        let session_frames = (session_secs * 1000.0 / FRAME_MS).ceil() as u64;
        let mut last_tap: Option<u64> = None;
        for frame in 0..session_frames {
            clock.advance(FRAME_MS);
            game.frame();

            let cooled = last_tap.is_none_or(|t| frame - t >= TAP_COOLDOWN_FRAMES);
            if cooled && wants_tap(&game.snapshot(), &tuning) && game.tap(None).is_some() {
                last_tap = Some(frame);
            }
            if game.phase() != LifecyclePhase::Running {
                break;
            }
        }

        game.end();

        // Let the result announcement land
        let drain_frames = (GAME_OVER_ANNOUNCE_DELAY_MS / FRAME_MS).ceil() as u64 + 1;
        for _ in 0..drain_frames {
            if game.presenter().announced.is_some() {
                break;
            }
            clock.advance(FRAME_MS);
            game.frame();
        }

        print_summary(&game, &tuning);
    }

    fn print_summary(game: &Game<ManualClock, MemoryStore, JsonLinesPresenter>, tuning: &Tuning) {
        println!(
            "{}",
            serde_json::json!({
                "event": "summary",
                "best": game.best_score(),
                "result": game.presenter().announced,
                "tuning": tuning,
            })
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Wheel Dash (native) starting...");
    log::info!(
        "Native mode runs a headless autopilot session - use `trunk serve` for the web version"
    );

    let session_secs = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .filter(|secs| *secs > 0.0)
        .unwrap_or(60.0);

    headless::run(session_secs);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
