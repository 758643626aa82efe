use crate::core::step_for_key;
use crate::dom::{self, EventListener};
use crate::render::OrbitView;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, orbit: &Rc<RefCell<OrbitView>>) {
    let key = ev.key();
    if let Some(step) = step_for_key(&key) {
        let mut o = orbit.borrow_mut();
        o.carousel.step(step);
        o.apply();
        log::debug!("[keys] {:?} -> member {}", step, o.carousel.active());
    }
}

pub fn wire_global_keydown(
    window: &web::Window,
    orbit: Rc<RefCell<OrbitView>>,
) -> EventListener {
    dom::add_listener(window, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &orbit);
    })
}
