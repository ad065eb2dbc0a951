use crate::constants::STATS_EVERY_FRAMES;
use crate::dom;
use instant::Instant;
use parallax_core::{CardVisual, Simulation};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub elements: Vec<web::HtmlElement>,
    pub last_instant: Instant,
    visuals: Vec<CardVisual>,
}

impl FrameContext {
    pub fn new(sim: Rc<RefCell<Simulation>>, elements: Vec<web::HtmlElement>) -> Self {
        let visuals = Vec::with_capacity(elements.len());
        Self {
            sim,
            elements,
            last_instant: Instant::now(),
            visuals,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        {
            let mut sim = self.sim.borrow_mut();
            sim.step(dt, &mut self.visuals);
            if sim.frames() % STATS_EVERY_FRAMES == 0 {
                log::debug!(
                    "[frame] frames={} elapsed={:.1}s scroll={:.1}->{:.1}",
                    sim.frames(),
                    sim.elapsed().as_secs_f64(),
                    sim.scroll.current,
                    sim.scroll.target
                );
            }
        } // release the simulation before touching the DOM

        for (el, visual) in self.elements.iter().zip(&self.visuals) {
            dom::apply_visual(el, visual);
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running requestAnimationFrame loop.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl FrameLoop {
    /// Cancel the pending frame and free the tick closure, breaking its self-reference.
    pub fn stop(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until [`FrameLoop::stop`].
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Tick = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        pending_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));

    FrameLoop {
        running,
        pending,
        tick,
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
