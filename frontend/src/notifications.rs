//! Transient toast notifications.
//!
//! A toast is a fixed-position `div` appended to `<body>` and removed again
//! after a few seconds. Components depend on the `Notifier` trait so the
//! action flows can be exercised without a DOM.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// How long a toast stays on screen, in milliseconds.
const TOAST_TIMEOUT_MS: u32 = 3000;

pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// `Notifier` backed by DOM toasts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Toasts;

impl Notifier for Toasts {
    fn success(&self, message: &str) {
        show_toast(message, "rgba(46, 125, 50, 0.92)");
    }

    fn error(&self, message: &str) {
        gloo_console::error!(message.to_string());
        show_toast(message, "rgba(198, 40, 40, 0.92)");
    }
}

/// Appends a toast with the given background to the page and schedules its removal.
fn show_toast(message: &str, background: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("top", "20px").ok();
    style.set_property("right", "20px").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "12px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("box-shadow", "0 2px 8px rgba(0, 0, 0, 0.2)").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
