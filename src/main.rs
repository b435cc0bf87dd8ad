use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod browser;
mod config;
mod content;
mod error;
mod models {
    pub mod contact_form;
    pub mod phone_mask;
    pub mod section;
    pub mod timeline;
    pub mod whatsapp;
}
mod components {
    pub mod animated_text;
    pub mod custom_cursor;
    pub mod date_picker;
    pub mod floating_label_input;
    pub mod nav;
    pub mod preloader;
    pub mod reveal;
}
mod pages {
    pub mod contact;
    pub mod landing;
    pub mod sections;
}

use config::SiteConfig;
use pages::landing::LandingPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <LandingPage /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let config = SiteConfig::load();
    if cfg!(debug_assertions) {
        gloo_console::log!("Site configuration:", format!("{:?}", config));
    }

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
