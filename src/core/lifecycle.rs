// Page visibility lifecycle.
//
// `pagehide` fires both when the page is discarded and when it is frozen
// into the back/forward cache. Only the first one ends the views; a cached
// page comes back through `pageshow` with its state intact and just needs
// its layout measured again.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageState {
    #[default]
    Live,
    Cached,
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    /// Stop the frame loop, drop listeners, give back reserved layout.
    Teardown,
    /// Restored from the back/forward cache; re-read layout.
    Resume,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageLifecycle {
    state: PageState,
}

impl PageLifecycle {
    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn page_hide(&mut self, persisted: bool) -> Option<PageAction> {
        match (self.state, persisted) {
            (PageState::Closed, _) => None,
            (_, true) => {
                self.state = PageState::Cached;
                None
            }
            (_, false) => {
                self.state = PageState::Closed;
                Some(PageAction::Teardown)
            }
        }
    }

    pub fn page_show(&mut self, persisted: bool) -> Option<PageAction> {
        if self.state == PageState::Cached && persisted {
            self.state = PageState::Live;
            return Some(PageAction::Resume);
        }
        None
    }
}
