#![cfg(target_arch = "wasm32")]
use parallax_core::{ParallaxConfig, Simulation};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod css;
mod dom;
mod events;
mod frame;
mod teardown;

use crate::constants::{CONFIG_ATTRIBUTE, CONTAINER_ID};
use crate::teardown::Teardown;

/// Live background: everything needed to detach it again.
struct Mounted {
    teardown: Teardown,
    cards: usize,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    // Module scripts can finish loading after the window `load` event.
    let loaded = window
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if loaded {
        mount_or_log();
    } else {
        dom::add_window_listener(&window, "load", false, mount_or_log).forget();
    }
    Ok(())
}

fn mount_or_log() {
    if let Err(e) = mount() {
        log::error!("mount error: {:?}", e);
    }
}

/// Stop the frame loop and remove the cards. No-op when nothing is mounted.
#[wasm_bindgen]
pub fn destroy() {
    let Some(mut mounted) = MOUNTED.with(|m| m.borrow_mut().take()) else {
        return;
    };
    mounted.teardown.run();
    log::info!("parallax-web destroyed ({} cards)", mounted.cards);
}

fn load_config(container: &web::Element) -> ParallaxConfig {
    let Some(json) = container.get_attribute(CONFIG_ATTRIBUTE) else {
        return ParallaxConfig::default();
    };
    match ParallaxConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] {e}; using defaults");
            ParallaxConfig::default()
        }
    }
}

fn mount() -> anyhow::Result<()> {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        log::warn!("already mounted; ignoring");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CONTAINER_ID}"))?;

    let config = load_config(&container);
    let viewport = dom::viewport(&window);
    let mut rng = StdRng::from_entropy();
    let sim = Simulation::new(config, viewport, &mut rng);

    // Dropped on any early return below, detaching whatever was attached so far.
    let mut teardown = Teardown::new();
    let mut elements = Vec::with_capacity(sim.cards.len());
    for (i, card) in sim.cards.iter().enumerate() {
        let el = dom::create_card_element(&document, card, i)?;
        container
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let attached = el.clone();
        teardown.push(move || attached.remove());
        elements.push(el);
    }
    let cards = elements.len();
    log::info!(
        "[mount] cards={} viewport={:.0}x{:.0}",
        cards,
        viewport.width,
        viewport.height
    );

    let sim = Rc::new(RefCell::new(sim));
    let scroll = events::wire_scroll(&window, sim.clone());
    teardown.push(move || scroll.remove());
    let resize = events::wire_resize(&window, sim.clone());
    teardown.push(move || resize.remove());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(sim, elements)));
    let frame_loop = frame::start_loop(frame_ctx);
    teardown.push(move || frame_loop.stop());

    MOUNTED.with(|m| *m.borrow_mut() = Some(Mounted { teardown, cards }));
    Ok(())
}
