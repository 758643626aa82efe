use crate::constants::{ORBIT_NEXT_ID, ORBIT_PREV_ID};
use crate::dom::{self, EventListener};
use crate::render::{HeroView, NavView, OrbitView};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Window-wide pointer moves feed the hero accumulator; each image reports
/// its own hover so the others can go translucent.
pub fn wire_hero(
    window: &web::Window,
    hero: Rc<RefCell<HeroView>>,
    listeners: &mut Vec<EventListener>,
) {
    let hero_move = hero.clone();
    listeners.push(dom::add_passive_listener(
        window,
        "pointermove",
        move |ev: web::PointerEvent| {
            let (w, h) = dom::viewport_size();
            let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            hero_move
                .borrow_mut()
                .field
                .pointer
                .pointer_move(client, Vec2::new(w, h));
        },
    ));

    let count = hero.borrow().len();
    for i in 0..count {
        let (el, id) = {
            let h = hero.borrow();
            match (h.image(i), h.field.elements.get(i)) {
                (Some(el), Some(fe)) => (el.clone(), fe.id),
                _ => continue,
            }
        };
        let hero_enter = hero.clone();
        listeners.push(dom::add_passive_listener(
            &el,
            "pointerenter",
            move |_: web::PointerEvent| hero_enter.borrow_mut().field.hover(id),
        ));
        let hero_leave = hero.clone();
        listeners.push(dom::add_passive_listener(
            &el,
            "pointerleave",
            move |_: web::PointerEvent| hero_leave.borrow_mut().field.leave(),
        ));
    }
}

pub fn wire_nav(nav: Rc<RefCell<NavView>>, listeners: &mut Vec<EventListener>) {
    let el = nav.borrow().nav.clone();
    let nav_enter = nav.clone();
    listeners.push(dom::add_passive_listener(
        &el,
        "pointerenter",
        move |_: web::PointerEvent| {
            let mut n = nav_enter.borrow_mut();
            n.menu.enter();
            n.apply();
        },
    ));
    listeners.push(dom::add_passive_listener(
        &el,
        "pointerleave",
        move |_: web::PointerEvent| {
            // Closing is finished by the frame loop once the grace period ends.
            nav.borrow_mut().menu.leave();
        },
    ));
}

pub fn wire_orbit(
    document: &web::Document,
    orbit: Rc<RefCell<OrbitView>>,
    listeners: &mut Vec<EventListener>,
) {
    let root = orbit.borrow().root.clone();
    let orbit_enter = orbit.clone();
    listeners.push(dom::add_passive_listener(
        &root,
        "pointerenter",
        move |_: web::PointerEvent| orbit_enter.borrow_mut().carousel.set_hovering(true),
    ));
    let orbit_leave = orbit.clone();
    listeners.push(dom::add_passive_listener(
        &root,
        "pointerleave",
        move |_: web::PointerEvent| orbit_leave.borrow_mut().carousel.set_hovering(false),
    ));

    let targets: Vec<(usize, web::HtmlElement)> = {
        let o = orbit.borrow();
        let avatars = o.avatars.iter().cloned().enumerate();
        let all = avatars.chain(o.dots.iter().cloned().enumerate()).collect();
        all
    };
    for (index, el) in targets {
        let orbit_click = orbit.clone();
        listeners.push(dom::add_listener(&el, "click", move |_: web::Event| {
            let mut o = orbit_click.borrow_mut();
            if o.carousel.select(index) {
                log::info!("[orbit] selected {}", index);
                o.apply();
            }
        }));
    }

    let orbit_prev = orbit.clone();
    listeners.extend(dom::add_click_listener(document, ORBIT_PREV_ID, move || {
        let mut o = orbit_prev.borrow_mut();
        o.carousel.prev();
        o.apply();
    }));
    listeners.extend(dom::add_click_listener(document, ORBIT_NEXT_ID, move || {
        let mut o = orbit.borrow_mut();
        o.carousel.next();
        o.apply();
    }));
}
