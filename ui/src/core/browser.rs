//! Fire-and-forget browser effects: outbound navigation and smooth scrolling.
//! Neither reports completion or failure back to the caller. All functions
//! are no-ops off wasm.

#[cfg(target_arch = "wasm32")]
pub fn navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate(_url: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn scroll_to_element(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_element(_id: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_top() {}
