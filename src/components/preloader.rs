use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::{DOCTOR_NAME, TAGLINE};
use crate::models::timeline::{use_timed_stage, PreloaderStage};

/// Full-screen splash. Moves from the monogram to the full name on its own;
/// the host page decides when to unmount it.
#[function_component(Preloader)]
pub fn preloader() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let stage = use_timed_stage(PreloaderStage::Monogram, config.timings.clone());

    html! {
        <div class="preloader">
            {
                match stage {
                    PreloaderStage::Monogram => html! {
                        <div key="monogram" class="preloader-monogram">
                            <span class="monogram-primary">{"A"}</span>
                            <span class="monogram-gold">{"F"}</span>
                        </div>
                    },
                    PreloaderStage::FullName => html! {
                        <div key="fullname" class="preloader-fullname">
                            <h1>{DOCTOR_NAME}</h1>
                            <p>{TAGLINE}</p>
                        </div>
                    },
                }
            }
        </div>
    }
}
