use crate::constants::LAYOUT_EVENTS;
use crate::dom::{self, EventListener};
use crate::render::{OrbitView, ProgressView, SequencerView};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct ScrollWiring {
    pub sequencer: Option<Rc<RefCell<SequencerView>>>,
    pub progress: Option<Rc<ProgressView>>,
    pub orbit: Option<Rc<RefCell<OrbitView>>>,
}

/// Scroll only records the new position; the frame loop does the work.
/// Returns the relayout action so a restored page can measure again.
pub fn wire_scroll_and_resize(
    window: &web::Window,
    document: &web::Document,
    w: ScrollWiring,
    listeners: &mut Vec<EventListener>,
) -> Rc<dyn Fn()> {
    let on_scroll = {
        let sequencer = w.sequencer.clone();
        let progress = w.progress.clone();
        let document = document.clone();
        move || {
            let y = dom::scroll_y();
            if let Some(seq) = &sequencer {
                seq.borrow_mut().on_scroll(y);
            }
            if let Some(p) = &progress {
                p.on_scroll(&document, y);
            }
        }
    };
    on_scroll();
    let scroll_cb = on_scroll.clone();
    listeners.push(dom::add_passive_listener(
        window,
        "scroll",
        move |_: web::Event| scroll_cb(),
    ));

    let sequencer = w.sequencer;
    let orbit = w.orbit;
    let relayout: Rc<dyn Fn()> = Rc::new(move || {
        if let Some(seq) = &sequencer {
            seq.borrow_mut().remeasure();
        }
        if let Some(o) = &orbit {
            let (width, _) = dom::viewport_size();
            o.borrow_mut().resize(width);
        }
        on_scroll();
    });
    // Content above the pinned section can still reflow after `load`.
    for event in LAYOUT_EVENTS {
        let relayout = relayout.clone();
        listeners.push(dom::add_passive_listener(
            window,
            event,
            move |_: web::Event| relayout(),
        ));
    }
    relayout
}
