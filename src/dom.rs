use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All matching descendants of `root`, in document order.
pub fn query_html_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Absolute document offset of the element's top edge.
pub fn document_top(el: &web::Element) -> f32 {
    el.get_bounding_client_rect().top() as f32 + scroll_y()
}

#[inline]
pub fn set_translate(el: &web::HtmlElement, x: f32, y: f32) {
    _ = el
        .style()
        .set_property("transform", &format!("translate3d({x:.2}px, {y:.2}px, 0)"));
}

#[inline]
pub fn set_opacity(el: &web::HtmlElement, opacity: f32) {
    _ = el
        .style()
        .set_property("opacity", &format!("{:.3}", opacity.clamp(0.0, 1.0)));
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// A registered DOM listener. Dropping it unsubscribes.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    callback: Option<Closure<dyn FnMut(web::Event)>>,
}

impl EventListener {
    pub fn new<E>(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        mut handler: impl FnMut(E) + 'static,
    ) -> Self
    where
        E: JsCast + 'static,
    {
        let callback = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let f = callback.as_ref().unchecked_ref();
        if passive {
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(true);
            _ = target.add_event_listener_with_callback_and_add_event_listener_options(
                event, f, &opts,
            );
        } else {
            _ = target.add_event_listener_with_callback(event, f);
        }
        Self {
            target: target.clone(),
            event,
            callback: Some(callback),
        }
    }

    /// Keep the listener for the rest of the page's life.
    pub fn forget(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Some(callback) = &self.callback {
            _ = self
                .target
                .remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref());
        }
    }
}

/// Register a listener that never blocks the host's own scrolling.
#[inline]
pub fn add_passive_listener<E>(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(E) + 'static,
) -> EventListener
where
    E: JsCast + 'static,
{
    EventListener::new(target, event, true, handler)
}

#[inline]
pub fn add_listener<E>(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(E) + 'static,
) -> EventListener
where
    E: JsCast + 'static,
{
    EventListener::new(target, event, false, handler)
}

pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<EventListener> {
    let el = document.get_element_by_id(element_id)?;
    Some(add_listener(&el, "click", move |_: web::Event| handler()))
}
