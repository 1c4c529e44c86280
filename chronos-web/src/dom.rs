use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

/// Sidebar collapses to an overlay below this viewport width.
pub const NARROW_VIEWPORT_PX: f64 = 900.0;

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Current address fragment, leading `#` included; empty when absent.
#[must_use]
pub fn current_fragment() -> String {
    window().location().hash().unwrap_or_default()
}

/// Whether the viewport is narrow enough for the sidebar to behave as an
/// overlay that should close after navigation.
#[must_use]
pub fn is_narrow_viewport() -> bool {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .is_some_and(|w| w < NARROW_VIEWPORT_PX)
}

/// Copy text to the system clipboard.
///
/// # Errors
/// Returns an error when the platform has no clipboard access or the write
/// is rejected; callers are expected to degrade rather than fail.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn clipboard_write(text: &str) -> Result<(), JsValue> {
    let clipboard = window().navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

/// Open a URL in a new tab, used for the external API docs.
pub fn open_in_new_tab(url: &str) {
    if let Err(err) = window().open_with_url_and_target(url, "_blank") {
        log::warn!("failed to open {url}: {}", js_error_message(&err));
    }
}
