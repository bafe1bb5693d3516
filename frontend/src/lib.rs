//! WebAssembly entry point for the ONE PARK PEAK site.
//!
//! Hydrates the server-rendered page so the header's scroll and menu state
//! come alive, and routes `log`/`tracing` output to the browser console.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the Leptos application on the client-side.
///
/// Installs `console_log` and `console_error_panic_hook`, then mounts
/// `app::component` over the existing DOM.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}
