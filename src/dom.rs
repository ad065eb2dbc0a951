use crate::constants::CARD_CLASS;
use crate::css;
use parallax_core::{Card, CardVisual, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current `innerWidth` x `innerHeight`; zero when the host refuses to answer.
pub fn viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

#[inline]
pub fn scroll_offset(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Build `div.floating-card > img` for a card and apply its initial transform.
pub fn create_card_element(
    document: &web::Document,
    card: &Card,
    index: usize,
) -> anyhow::Result<web::HtmlElement> {
    let div: web::HtmlElement = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    div.set_class_name(CARD_CLASS);

    let img: web::HtmlImageElement = document
        .create_element("img")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(&card.image);
    img.set_alt(&css::card_alt(index));
    div.append_child(&img)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    _ = div
        .style()
        .set_property("transform", &css::initial_transform(&card.initial_visual()));
    Ok(div)
}

#[inline]
pub fn apply_visual(el: &web::HtmlElement, visual: &CardVisual) {
    let style = el.style();
    _ = style.set_property("transform", &css::frame_transform(visual));
    _ = style.set_property("opacity", &css::opacity_value(visual.opacity));
}

/// Window listener that stays attached until [`WindowListener::remove`].
pub struct WindowListener {
    window: web::Window,
    event: String,
    closure: Closure<dyn FnMut()>,
}

impl WindowListener {
    /// Detach from the window and free the closure.
    pub fn remove(self) {
        _ = self
            .window
            .remove_event_listener_with_callback(&self.event, self.closure.as_ref().unchecked_ref());
    }

    /// Leave attached for the page lifetime.
    pub fn forget(self) {
        self.closure.forget();
    }
}

pub fn add_window_listener(
    window: &web::Window,
    event: &str,
    passive: bool,
    mut handler: impl FnMut() + 'static,
) -> WindowListener {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let result = if passive {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        )
    } else {
        window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    };
    if let Err(e) = result {
        log::warn!("[dom] failed to listen for '{event}': {:?}", e);
    }
    WindowListener {
        window: window.clone(),
        event: event.to_string(),
        closure,
    }
}
