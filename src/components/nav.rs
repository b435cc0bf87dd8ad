use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{DOCTOR_NAME, TAGLINE};
use crate::models::section::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Section,
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<Section>,
}

fn go_to(on_navigate: &Callback<Section>, section: Section) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(section);
    })
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        active,
        scrolled,
        menu_open,
        on_toggle_menu,
        on_navigate,
    } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    html! {
        <header class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <nav class="nav-content">
                <button class="nav-logo" onclick={go_to(on_navigate, Section::Inicio)}>
                    <span class="nav-logo-name">{DOCTOR_NAME}</span>
                    <span class="nav-logo-tagline">{TAGLINE}</span>
                </button>

                <div class="nav-links">
                    { for Section::ALL.iter().map(|section| html! {
                        <button
                            class={classes!("nav-link", (*section == *active).then(|| "active"))}
                            onclick={go_to(on_navigate, *section)}
                        >
                            {section.label()}
                        </button>
                    }) }
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
            </nav>

            <div class={classes!("mobile-menu", menu_open.then(|| "mobile-menu-open"))}>
                <ul>
                    { for Section::ALL.iter().enumerate().map(|(i, section)| html! {
                        <li style={format!("transition-delay: {:.1}s;", i as f64 * 0.1)}>
                            <button onclick={go_to(on_navigate, *section)}>
                                {section.label()}
                            </button>
                        </li>
                    }) }
                </ul>
            </div>
        </header>
    }
}
