use crate::dom;
use parallax_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Record the raw page offset as the new scroll target; the frame loop damps it.
pub fn wire_scroll(window: &web::Window, sim: Rc<RefCell<Simulation>>) -> dom::WindowListener {
    let win = window.clone();
    dom::add_window_listener(window, "scroll", true, move || {
        sim.borrow_mut().set_scroll_target(dom::scroll_offset(&win));
    })
}
