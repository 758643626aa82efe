// Host-side tests for the page visibility lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod motion {
    pub mod lifecycle {
        include!("../src/core/lifecycle.rs");
    }
}

use motion::lifecycle::*;

#[test]
fn cached_page_keeps_running_state() {
    let mut page = PageLifecycle::default();
    assert_eq!(page.page_hide(true), None);
    assert_eq!(page.state(), PageState::Cached);

    // Back navigation restores it and asks for a fresh measurement.
    assert_eq!(page.page_show(true), Some(PageAction::Resume));
    assert_eq!(page.state(), PageState::Live);
}

#[test]
fn cache_round_trips_can_repeat() {
    let mut page = PageLifecycle::default();
    for _ in 0..3 {
        assert_eq!(page.page_hide(true), None);
        assert_eq!(page.page_show(true), Some(PageAction::Resume));
    }
    assert_eq!(page.state(), PageState::Live);
}

#[test]
fn real_unload_tears_down_exactly_once() {
    let mut page = PageLifecycle::default();
    assert_eq!(page.page_hide(false), Some(PageAction::Teardown));
    assert_eq!(page.state(), PageState::Closed);
    assert_eq!(page.page_hide(false), None);
    assert_eq!(page.page_hide(true), None);
    assert_eq!(page.page_show(true), None);
    assert_eq!(page.state(), PageState::Closed);
}

#[test]
fn cached_page_can_still_be_discarded() {
    let mut page = PageLifecycle::default();
    page.page_hide(true);
    assert_eq!(page.page_hide(false), Some(PageAction::Teardown));
}

#[test]
fn first_pageshow_is_not_a_resume() {
    let mut page = PageLifecycle::default();
    assert_eq!(page.page_show(false), None);
    // A live page never resumes, even if the event claims persistence.
    assert_eq!(page.page_show(true), None);
    assert_eq!(page.state(), PageState::Live);
}
