pub mod runner;

pub use runner::ShowRunner;

/// Generate all `#[wasm_bindgen]` exports for a show.
///
/// Generates the per-show boilerplate:
/// - `thread_local!` storage for the ShowRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (show_init, show_tick, input handlers,
///   text delivery, string queries, data accessors)
///
/// `show_init` also installs the crash guard: `console_error_panic_hook`
/// reports any Rust panic to the console instead of leaving a dead, silent
/// page behind.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use starlit_core::*;
///
/// mod show;
/// use show::MyShow;
///
/// starlit_web::export_show!(MyShow, "my-show");
/// ```
///
/// # Arguments
///
/// - `$show_type`: The show struct type that implements `starlit_core::Show`
/// - `$show_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_show {
    ($show_type:ty, $show_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::ShowRunner<$show_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::ShowRunner<$show_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Show not initialized. Call show_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn show_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let show = <$show_type>::new();
            let runner = $crate::ShowRunner::new(show);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $show_name);
        }

        #[wasm_bindgen]
        pub fn show_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn show_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn show_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn show_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn show_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn show_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn show_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn show_text_event(kind: u32, body: &str) {
            with_runner(|r| r.push_text(kind, body.to_owned()));
        }

        #[wasm_bindgen]
        pub fn show_query(key: u32) -> String {
            with_runner(|r| r.query(key))
        }

        #[wasm_bindgen]
        pub fn show_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_blend_split() -> u32 {
            with_runner(|r| r.blend_split())
        }

        #[wasm_bindgen]
        pub fn get_cues_ptr() -> *const u8 {
            with_runner(|r| r.cues_ptr())
        }

        #[wasm_bindgen]
        pub fn get_cues_len() -> u32 {
            with_runner(|r| r.cues_len())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_events_len() -> u32 {
            with_runner(|r| r.events_len())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_cues() -> u32 {
            with_runner(|r| r.max_cues())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
