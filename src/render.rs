//! DOM adapters: each view owns one piece of core state plus the elements it
//! drives, and writes the core's numeric outputs onto those elements.

use crate::constants::*;
use crate::core::{
    item_delay, marquee_offset, page_scroll_percent, FloatingElement, HeroField, HoverMenu,
    OrbitCarousel, OrbitLayout, PinnedRegion, ScrollSequencer, Scrub,
};
use crate::dom;
use instant::Instant;
use smallvec::SmallVec;
use wasm_bindgen::JsCast;
use web_sys as web;

fn parse_attr<T: std::str::FromStr>(el: &web::Element, name: &str) -> Option<T> {
    el.get_attribute(name).and_then(|v| v.trim().parse().ok())
}

// ---------------- Hero ----------------
pub struct HeroView {
    pub field: HeroField,
    images: Vec<web::HtmlElement>,
    mounted: Vec<Instant>,
}

impl HeroView {
    pub fn from_document(document: &web::Document) -> Option<Self> {
        let hero = document.get_element_by_id(HERO_ID)?;
        let images = dom::query_html_all(&hero, FLOATING_IMAGE_SELECTOR);
        if images.is_empty() {
            return None;
        }
        let elements = images
            .iter()
            .enumerate()
            .map(|(i, el)| {
                let (default_id, default_depth) = DEFAULT_FLOATING_DEPTHS
                    .get(i)
                    .copied()
                    .unwrap_or((i as u32 + 1, DEFAULT_FLOATING_DEPTH));
                let id = parse_attr(el, DATA_ID).unwrap_or(default_id);
                let depth = parse_attr(el, DATA_DEPTH).unwrap_or(default_depth);
                FloatingElement::new(id, depth)
            })
            .collect::<Vec<_>>();
        let now = Instant::now();
        let mounted = vec![now; images.len()];
        log::info!("[hero] {} floating images", images.len());
        Some(Self {
            field: HeroField::new(elements),
            images,
            mounted,
        })
    }

    pub fn image(&self, index: usize) -> Option<&web::HtmlElement> {
        self.images.get(index)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn frame(&mut self) {
        let elapsed: SmallVec<[f32; 8]> = self
            .mounted
            .iter()
            .map(|t| t.elapsed().as_secs_f32())
            .collect();
        self.field.step(&elapsed);
        for (el, fe) in self.images.iter().zip(self.field.elements.iter()) {
            dom::set_translate(el, fe.position.x, fe.position.y);
            dom::set_class(el, GLASS_CLASS, self.field.is_deemphasized(fe.id));
        }
    }
}

// ---------------- Sentence sequencer ----------------
pub struct SequencerView {
    pub sequencer: ScrollSequencer,
    scrub: Scrub,
    region: PinnedRegion,
    section: web::HtmlElement,
    container: web::HtmlElement,
    spans: Vec<web::HtmlElement>,
    // Spans already show the settled state; skip style writes until it moves.
    painted_settled: bool,
}

/// Sentences come from a JSON array in the section's `data-sentences`
/// attribute; anything unusable falls back to the built-in copy.
fn read_sentences(section: &web::Element) -> Vec<String> {
    let parsed = section
        .get_attribute(DATA_SENTENCES)
        .and_then(|raw| js_sys::JSON::parse(&raw).ok())
        .and_then(|v| v.dyn_into::<js_sys::Array>().ok())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_string())
                .collect::<Vec<_>>()
        });
    match parsed {
        Some(list) if !list.is_empty() => list,
        _ => DEFAULT_SENTENCES.iter().map(|s| s.to_string()).collect(),
    }
}

impl SequencerView {
    pub fn from_document(document: &web::Document) -> Option<Self> {
        let section = dom::html_by_id(document, SEQUENCER_SECTION_ID)?;
        let container = dom::html_by_id(document, SEQUENCER_WORDS_ID)?;
        let sequencer = ScrollSequencer::new(read_sentences(&section));
        let mut view = Self {
            sequencer,
            scrub: Scrub::default(),
            region: PinnedRegion {
                start: 0.0,
                distance: 0.0,
            },
            section,
            container,
            spans: Vec::new(),
            painted_settled: false,
        };
        view.reserve_scroll_distance();
        view.remeasure();
        view.rebuild_spans(document);
        log::info!("[sequencer] {} sentences", view.sequencer.len());
        Some(view)
    }

    // The section is pinned with `position: sticky` inside itself; give it one
    // viewport of height per sentence plus the viewport it occupies.
    fn reserve_scroll_distance(&self) {
        let vh = (self.sequencer.len() + 1) * 100;
        _ = self.section.style().set_property("min-height", &format!("{vh}vh"));
    }

    /// Undo the reserved scroll distance when the page is torn down.
    pub fn release(&self) {
        _ = self.section.style().remove_property("min-height");
        dom::set_class(&self.section, PINNED_CLASS, false);
    }

    pub fn remeasure(&mut self) {
        let (_, viewport_h) = dom::viewport_size();
        self.region = PinnedRegion::for_sentences(
            dom::document_top(&self.section),
            self.sequencer.len(),
            viewport_h,
        );
        self.on_scroll(dom::scroll_y());
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.scrub.set_target(self.region.progress(scroll_y));
        dom::set_class(&self.section, PINNED_CLASS, self.region.is_pinned(scroll_y));
    }

    pub fn frame(&mut self, dt_sec: f32) {
        if self.sequencer.is_empty() {
            return;
        }
        self.scrub.step(dt_sec);
        if self.sequencer.set_progress(self.scrub.value()) {
            if let Some(document) = dom::window_document() {
                self.rebuild_spans(&document);
            }
        }
        self.sequencer.tick(dt_sec);

        let settled = self.sequencer.is_settled();
        if settled && self.painted_settled {
            return;
        }
        self.painted_settled = settled;
        for (span, word) in self.spans.iter().zip(self.sequencer.words()) {
            dom::set_translate(span, 0.0, word.offset_y());
            dom::set_opacity(span, word.opacity());
        }
    }

    fn rebuild_spans(&mut self, document: &web::Document) {
        self.container.set_inner_html("");
        self.spans.clear();
        self.painted_settled = false;
        // Words are split into spans; keep the full sentence readable.
        if let Some(sentence) = self.sequencer.active_sentence() {
            _ = self.container.set_attribute("aria-label", sentence);
        }
        if let Some(index) = self.sequencer.active_index() {
            _ = self
                .section
                .set_attribute(DATA_SENTENCE_INDEX, &index.to_string());
        }
        for word in self.sequencer.words() {
            let Ok(el) = document.create_element("span") else {
                continue;
            };
            el.set_class_name(WORD_CLASS);
            el.set_text_content(Some(&word.text));
            if let Ok(span) = el.dyn_into::<web::HtmlElement>() {
                _ = self.container.append_child(&span);
                dom::set_translate(&span, 0.0, word.offset_y());
                dom::set_opacity(&span, word.opacity());
                self.spans.push(span);
            }
        }
    }
}

// ---------------- Navbar dropdown ----------------
pub struct NavView {
    pub menu: HoverMenu,
    pub nav: web::HtmlElement,
    panel: web::HtmlElement,
}

impl NavView {
    pub fn from_document(document: &web::Document) -> Option<Self> {
        let nav = dom::html_by_id(document, NAV_ID)?;
        let panel = dom::html_by_id(document, NAV_PANEL_ID)?;
        for (i, item) in dom::query_html_all(&panel, NAV_ITEM_SELECTOR)
            .iter()
            .enumerate()
        {
            _ = item
                .style()
                .set_property("transition-delay", &format!("{:.2}s", item_delay(i)));
        }
        Some(Self {
            menu: HoverMenu::default(),
            nav,
            panel,
        })
    }

    pub fn apply(&self) {
        dom::set_class(&self.panel, OPEN_CLASS, self.menu.is_open());
    }

    pub fn frame(&mut self, dt_sec: f32) {
        if self.menu.tick(dt_sec) {
            self.apply();
        }
    }
}

// ---------------- Orbit carousel ----------------
pub struct OrbitView {
    pub carousel: OrbitCarousel,
    pub root: web::HtmlElement,
    pub avatars: Vec<web::HtmlElement>,
    cards: Vec<web::HtmlElement>,
    pub dots: Vec<web::HtmlElement>,
    layout: OrbitLayout,
}

impl OrbitView {
    pub fn from_document(document: &web::Document) -> Option<Self> {
        let root = dom::html_by_id(document, ORBIT_ID)?;
        let avatars = dom::query_html_all(&root, ORBIT_AVATAR_SELECTOR);
        let carousel = OrbitCarousel::new(avatars.len());
        if carousel.is_empty() {
            return None;
        }
        let cards = dom::query_html_all(&root, ORBIT_CARD_SELECTOR);
        let dots = dom::query_html_all(&root, ORBIT_DOT_SELECTOR);
        let (viewport_w, _) = dom::viewport_size();
        let view = Self {
            carousel,
            root,
            avatars,
            cards,
            dots,
            layout: OrbitLayout::for_viewport_width(viewport_w),
        };
        view.apply();
        log::info!("[orbit] {} members", view.carousel.len());
        Some(view)
    }

    pub fn resize(&mut self, viewport_width: f32) {
        let layout = OrbitLayout::for_viewport_width(viewport_width);
        if layout != self.layout {
            self.layout = layout;
            self.apply();
        }
    }

    pub fn apply(&self) {
        let size = self.layout.container_size();
        let style = self.root.style();
        _ = style.set_property("width", &format!("{size}px"));
        _ = style.set_property("height", &format!("{size}px"));

        let active = self.carousel.active();
        for (i, el) in self.avatars.iter().enumerate() {
            let deg = self.carousel.rotation_deg(i);
            // Counter-rotate so the avatar stays upright on the orbit.
            let transform = format!(
                "rotate({deg:.2}deg) translateY(-{r}px) rotate({neg:.2}deg)",
                r = self.layout.radius,
                neg = -deg
            );
            let st = el.style();
            _ = st.set_property("transform", &transform);
            _ = st.set_property("width", &format!("{}px", self.layout.avatar));
            _ = st.set_property("height", &format!("{}px", self.layout.avatar));
            dom::set_class(el, ACTIVE_CLASS, i == active);
        }
        for (i, el) in self.cards.iter().enumerate() {
            dom::set_class(el, ACTIVE_CLASS, i == active);
        }
        for (i, el) in self.dots.iter().enumerate() {
            dom::set_class(el, ACTIVE_CLASS, i == active);
        }
    }

    pub fn frame(&mut self, dt_sec: f32) {
        if self.carousel.tick(dt_sec) {
            self.apply();
        }
    }
}

// ---------------- Technology marquee ----------------
pub struct MarqueeView {
    track: web::HtmlElement,
    started: Instant,
}

impl MarqueeView {
    pub fn from_document(document: &web::Document) -> Option<Self> {
        Some(Self {
            track: dom::html_by_id(document, MARQUEE_TRACK_ID)?,
            started: Instant::now(),
        })
    }

    pub fn frame(&self) {
        let offset = marquee_offset(self.started.elapsed().as_secs_f32());
        _ = self
            .track
            .style()
            .set_property("transform", &format!("translateX({:.3}%)", offset * 100.0));
    }
}

// ---------------- Page scroll progress ----------------
pub struct ProgressView {
    bar: web::HtmlElement,
    label: Option<web::HtmlElement>,
}

impl ProgressView {
    pub fn from_document(document: &web::Document) -> Option<Self> {
        Some(Self {
            bar: dom::html_by_id(document, PAGE_PROGRESS_BAR_ID)?,
            label: dom::html_by_id(document, PAGE_PROGRESS_LABEL_ID),
        })
    }

    pub fn on_scroll(&self, document: &web::Document, scroll_y: f32) {
        let scroll_height = document
            .document_element()
            .map(|el| el.scroll_height() as f32)
            .unwrap_or(0.0);
        let (_, viewport_h) = dom::viewport_size();
        let percent = page_scroll_percent(scroll_y, scroll_height, viewport_h);
        _ = self
            .bar
            .style()
            .set_property("width", &format!("{percent:.2}%"));
        if let Some(label) = &self.label {
            label.set_text_content(Some(&format!("{}% scrolled", percent.round() as u32)));
        }
    }
}
