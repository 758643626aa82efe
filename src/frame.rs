use crate::render::{HeroView, MarqueeView, NavView, OrbitView, SequencerView};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// A backgrounded tab resumes with one huge dt; cap it so tweens and timers
// advance at most a few frames' worth.
const MAX_FRAME_DT_SEC: f32 = 0.25;

pub struct FrameContext {
    pub hero: Option<Rc<RefCell<HeroView>>>,
    pub sequencer: Option<Rc<RefCell<SequencerView>>>,
    pub nav: Option<Rc<RefCell<NavView>>>,
    pub orbit: Option<Rc<RefCell<OrbitView>>>,
    pub marquee: Option<MarqueeView>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        if let Some(hero) = &self.hero {
            hero.borrow_mut().frame();
        }
        if let Some(seq) = &self.sequencer {
            seq.borrow_mut().frame(dt_sec);
        }
        if let Some(nav) = &self.nav {
            nav.borrow_mut().frame(dt_sec);
        }
        if let Some(orbit) = &self.orbit {
            orbit.borrow_mut().frame(dt_sec);
        }
        if let Some(marquee) = &self.marquee {
            marquee.frame();
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running requestAnimationFrame loop.
#[derive(Clone, Default)]
pub struct TickHandle {
    tick: TickClosure,
    raf_id: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
}

impl TickHandle {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Stop rescheduling and drop the frame callback. Safe to call twice.
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure -> handle -> closure cycle.
        self.tick.borrow_mut().take();
        log::info!("[frame] loop cancelled");
    }
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> TickHandle {
    let handle = TickHandle::default();
    let handle_tick = handle.clone();
    *handle.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if handle_tick.is_cancelled() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        handle_tick.raf_id.set(request_frame(&handle_tick.tick));
    }) as Box<dyn FnMut()>));
    handle.raf_id.set(request_frame(&handle.tick));
    log::info!("[frame] loop started");
    handle
}
