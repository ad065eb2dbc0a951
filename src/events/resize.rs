use crate::dom;
use parallax_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_resize(window: &web::Window, sim: Rc<RefCell<Simulation>>) -> dom::WindowListener {
    let win = window.clone();
    dom::add_window_listener(window, "resize", false, move || {
        let viewport = dom::viewport(&win);
        log::debug!(
            "[resize] viewport={:.0}x{:.0}",
            viewport.width,
            viewport.height
        );
        sim.borrow_mut().resize(viewport);
    })
}
