use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, MouseEvent};
use yew::prelude::*;

use crate::browser::EventListener;
use crate::error::SiteError;

/// Elements that make the cursor grow.
pub const INTERACTIVE_SELECTOR: &str = "a, button, [data-cursor-hover]";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorShape {
    pub diameter: f64,
    /// Distance from the pointer to the dot's top-left corner, so the dot
    /// stays centred on the pointer.
    pub offset: f64,
}

impl CursorShape {
    pub fn for_hover(hovering: bool) -> Self {
        if hovering {
            CursorShape { diameter: 40.0, offset: 20.0 }
        } else {
            CursorShape { diameter: 10.0, offset: 5.0 }
        }
    }

    pub fn style(self, x: f64, y: f64) -> String {
        format!(
            "width: {d}px; height: {d}px; transform: translate({}px, {}px);",
            x - self.offset,
            y - self.offset,
            d = self.diameter,
        )
    }
}

fn targets_interactive(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

fn attach(
    position: UseStateHandle<(f64, f64)>,
    hovering: UseStateHandle<bool>,
) -> Result<Vec<EventListener>, SiteError> {
    let window = window().ok_or(SiteError::NoWindow)?;
    let document = window.document().ok_or(SiteError::NoDocument)?;

    let on_move = EventListener::new(&window, "mousemove", move |e: Event| {
        if let Some(e) = e.dyn_ref::<MouseEvent>() {
            position.set((e.client_x() as f64, e.client_y() as f64));
        }
    })?;
    let on_over = {
        let hovering = hovering.clone();
        EventListener::new(&document, "mouseover", move |e: Event| {
            if targets_interactive(&e) {
                hovering.set(true);
            }
        })?
    };
    let on_out = EventListener::new(&document, "mouseout", move |e: Event| {
        if targets_interactive(&e) {
            hovering.set(false);
        }
    })?;

    Ok(vec![on_move, on_over, on_out])
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let position = use_state(|| (0.0, 0.0));
    let hovering = use_state(|| false);

    {
        let position = position.clone();
        let hovering = hovering.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = attach(position, hovering)
                    .map_err(|e| warn!("Custom cursor disabled: {}", e))
                    .ok();
                move || drop(listeners)
            },
            (),
        );
    }

    let (x, y) = *position;
    let shape = CursorShape::for_hover(*hovering);

    html! {
        <div class="custom-cursor" style={shape.style(x, y)}></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_grows_cursor() {
        assert_eq!(CursorShape::for_hover(false).diameter, 10.0);
        assert_eq!(CursorShape::for_hover(true).diameter, 40.0);
    }

    #[test]
    fn test_dot_is_centred_on_pointer() {
        for hovering in [false, true] {
            let shape = CursorShape::for_hover(hovering);
            assert_eq!(shape.offset * 2.0, shape.diameter);
        }
        assert_eq!(
            CursorShape::for_hover(true).style(100.0, 50.0),
            "width: 40px; height: 40px; transform: translate(80px, 30px);"
        );
    }
}
