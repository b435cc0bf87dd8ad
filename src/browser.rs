//! Thin wrappers over the browser calls the page makes.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::error::SiteError;

pub fn get_window() -> Result<Window, SiteError> {
    window().ok_or(SiteError::NoWindow)
}

/// Event listener that unregisters itself when dropped, so effect cleanups
/// only need to drop it.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, SiteError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Smoothly scrolls `element`'s top edge into view.
pub fn scroll_into_view(element: &HtmlElement) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn open_in_new_tab(url: &str) -> Result<(), SiteError> {
    match get_window()?.open_with_url_and_target(url, "_blank")? {
        Some(_) => Ok(()),
        None => Err(SiteError::PopupBlocked {
            url: url.to_string(),
        }),
    }
}

/// Opens `url` in a new tab, or in the current one when the browser refuses a
/// new browsing context.
pub fn open_external(url: &str) {
    if let Err(e) = open_in_new_tab(url) {
        warn!("{}; navigating current tab instead", e);
        let result = get_window().and_then(|w| w.location().set_href(url).map_err(SiteError::from));
        if let Err(e) = result {
            warn!("Could not open external link: {}", e);
        }
    }
}
