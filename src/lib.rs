#![cfg(target_arch = "wasm32")]
use crate::core::{PageAction, PageLifecycle};
use crate::render::{HeroView, MarqueeView, NavView, OrbitView, ProgressView, SequencerView};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

/// Every page section is optional; a missing one is logged and skipped.
fn section<T>(name: &str, view: Option<T>) -> Option<T> {
    if view.is_none() {
        log::warn!("[init] no {} section on this page", name);
    }
    view
}

#[inline]
fn shared<T>(view: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(view))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-motion starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let hero = section("hero", HeroView::from_document(&document)).map(shared);
    let sequencer = section("sequencer", SequencerView::from_document(&document)).map(shared);
    let nav = section("navbar", NavView::from_document(&document)).map(shared);
    let orbit = section("orbit", OrbitView::from_document(&document)).map(shared);
    let progress = section("progress", ProgressView::from_document(&document)).map(Rc::new);
    let marquee = section("marquee", MarqueeView::from_document(&document));

    let mut listeners = Vec::new();
    if let Some(h) = &hero {
        events::wire_hero(&window, h.clone(), &mut listeners);
    }
    if let Some(n) = &nav {
        events::wire_nav(n.clone(), &mut listeners);
    }
    if let Some(o) = &orbit {
        events::wire_orbit(&document, o.clone(), &mut listeners);
        listeners.push(events::wire_global_keydown(&window, o.clone()));
    }
    let relayout = events::wire_scroll_and_resize(
        &window,
        &document,
        events::ScrollWiring {
            sequencer: sequencer.clone(),
            progress,
            orbit: orbit.clone(),
        },
        &mut listeners,
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        hero,
        sequencer: sequencer.clone(),
        nav,
        orbit,
        marquee,
        last_instant: Instant::now(),
    }));
    let tick = frame::start_loop(frame_ctx);
    log::info!("[init] {} listeners wired", listeners.len());

    let lifecycle = Rc::new(Cell::new(PageLifecycle::default()));

    // A page frozen into the back/forward cache keeps running state; only a
    // real unload stops the loop and gives back the pinned scroll distance.
    let hide_state = lifecycle.clone();
    let mut listeners = Some(listeners);
    dom::add_listener(&window, "pagehide", move |ev: web::PageTransitionEvent| {
        let mut page = hide_state.get();
        let action = page.page_hide(ev.persisted());
        hide_state.set(page);
        log::info!("[page] hidden, now {:?}", page.state());
        if action == Some(PageAction::Teardown) {
            tick.cancel();
            drop(listeners.take());
            if let Some(seq) = &sequencer {
                seq.borrow().release();
            }
        }
    })
    .forget();

    dom::add_listener(&window, "pageshow", move |ev: web::PageTransitionEvent| {
        let mut page = lifecycle.get();
        let action = page.page_show(ev.persisted());
        lifecycle.set(page);
        if action == Some(PageAction::Resume) {
            log::info!("[page] restored from cache");
            relayout();
        }
    })
    .forget();

    Ok(())
}
