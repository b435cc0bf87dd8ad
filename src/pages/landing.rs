use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::browser::{self, EventListener};
use crate::components::custom_cursor::CustomCursor;
use crate::components::nav::Nav;
use crate::components::preloader::Preloader;
use crate::config::SiteConfig;
use crate::models::contact_form::{ContactForm, FormAction};
use crate::models::section::{is_header_scrolled, ActiveSection, Section, SectionSpan};
use crate::models::timeline::{use_stage_timer, use_timed_stage, BannerStage, PageGate};
use crate::pages::contact::Contact;
use crate::pages::sections::{About, FaqSection, Footer, Hero, Specialties, Testimonials};

/// One `NodeRef` per section, in declared order.
#[derive(Clone, PartialEq, Default)]
struct SectionRefs {
    refs: [NodeRef; 6],
}

impl SectionRefs {
    fn get(&self, section: Section) -> NodeRef {
        self.refs[section.index()].clone()
    }

    /// Live geometry table. Sections not mounted yet are left out.
    fn measure(&self) -> Vec<SectionSpan> {
        Section::ALL
            .iter()
            .filter_map(|section| {
                self.get(*section).cast::<HtmlElement>().map(|element| {
                    SectionSpan::new(
                        *section,
                        element.offset_top() as f64,
                        element.offset_height() as f64,
                    )
                })
            })
            .collect()
    }
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let gate = use_timed_stage(PageGate::Loading, config.timings.clone());
    let menu_open = use_state(|| false);
    let header_scrolled = use_state_eq(|| false);
    let active = use_state_eq(ActiveSection::default);
    let refs = use_memo(|_| SectionRefs::default(), ());
    let form = use_reducer(ContactForm::default);

    {
        let form = form.clone();
        use_stage_timer(
            form.banner,
            config.timings.clone(),
            Callback::from(move |_: BannerStage| form.dispatch(FormAction::BannerElapsed)),
        );
    }

    {
        let header_scrolled = header_scrolled.clone();
        let active = active.clone();
        let refs = Rc::clone(&refs);
        let threshold = config.header_scroll_threshold;
        use_effect_with_deps(
            move |_| {
                let mut current = ActiveSection::default();
                let listener = browser::get_window().and_then(|window| {
                    EventListener::new(&window, "scroll", move |_| {
                        let scroll_y = browser::scroll_y();
                        header_scrolled.set(is_header_scrolled(scroll_y, threshold));

                        let next = current.recompute(scroll_y, browser::viewport_height(), &refs.measure());
                        if next != current {
                            debug!("Active section: {:?}", next.section());
                            current = next;
                            active.set(next);
                        }
                    })
                });
                let listener = listener
                    .map_err(|e| warn!("Scroll tracking disabled: {}", e))
                    .ok();
                move || drop(listener)
            },
            (),
        );
    }

    {
        use_effect_with_deps(
            |gate| {
                if *gate == PageGate::Ready {
                    info!("Preloader dismissed");
                }
                || ()
            },
            gate,
        );
    }

    let on_navigate = {
        let refs = Rc::clone(&refs);
        let menu_open = menu_open.clone();
        Callback::from(move |section: Section| {
            if let Some(element) = refs.get(section).cast::<HtmlElement>() {
                browser::scroll_into_view(&element);
                menu_open.set(false);
            }
        })
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(!*menu_open))
    };

    html! {
        <div class="landing-page">
            {
                if gate == PageGate::Loading {
                    html! { <Preloader /> }
                } else {
                    html! {}
                }
            }
            <CustomCursor />
            <Nav
                active={active.section()}
                scrolled={*header_scrolled}
                menu_open={*menu_open}
                {on_toggle_menu}
                on_navigate={on_navigate.clone()}
            />
            <main>
                <Hero node={refs.get(Section::Inicio)} on_navigate={on_navigate.clone()} />
                <About node={refs.get(Section::Sobre)} />
                <Specialties node={refs.get(Section::Especialidades)} on_navigate={on_navigate.clone()} />
                <Testimonials node={refs.get(Section::Depoimentos)} />
                <FaqSection node={refs.get(Section::Faq)} />
                <Contact node={refs.get(Section::Contato)} form={form.clone()} />
            </main>
            <Footer {on_navigate} />

            <style>
                {r#"
                :root {
                    --ivory: #fbf8f3;
                    --charcoal: #2b2b2b;
                    --primary: #5b7f95;
                    --gold: #c6a15b;
                    --secondary: #e9e1d4;
                }
                html { scroll-behavior: smooth; }
                .landing-page {
                    background: var(--ivory);
                    color: var(--charcoal);
                    font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    overflow-x: hidden;
                }
                h1, h2, h3 { font-family: "Playfair Display", Georgia, serif; font-weight: 500; }
                section { padding: 6rem 1.5rem; max-width: 80rem; margin: 0 auto; }
                .text-primary { color: var(--primary); }

                .preloader {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--ivory);
                }
                .preloader-monogram span { font-family: "Playfair Display", serif; font-size: 4.5rem; }
                .monogram-primary { color: var(--primary); }
                .monogram-gold { color: var(--gold); }
                .preloader-monogram, .preloader-fullname { animation: fadeUp 1s cubic-bezier(0.22, 1, 0.36, 1); text-align: center; }
                .preloader-fullname p { letter-spacing: 4px; font-size: 0.8rem; opacity: 0.7; }

                .custom-cursor {
                    position: fixed;
                    top: 0;
                    left: 0;
                    border-radius: 50%;
                    pointer-events: none;
                    z-index: 9999;
                    mix-blend-mode: difference;
                    background: var(--ivory);
                    transition: width 0.2s, height 0.2s;
                }
                @media (max-width: 1024px) { .custom-cursor { display: none; } }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: all 0.5s;
                }
                .top-nav.scrolled { background: rgba(251, 248, 243, 0.8); backdrop-filter: blur(16px); box-shadow: 0 8px 24px rgba(0,0,0,0.08); }
                .nav-content { display: flex; align-items: center; justify-content: space-between; max-width: 80rem; margin: 0 auto; padding: 1.25rem 1.5rem; }
                .nav-logo { display: flex; flex-direction: column; background: none; border: none; cursor: pointer; text-align: left; }
                .nav-logo-name { font-family: "Playfair Display", serif; font-size: 1.5rem; color: var(--primary); }
                .nav-logo-tagline { font-size: 0.7rem; letter-spacing: 3px; opacity: 0.7; }
                .nav-links { display: flex; gap: 2.5rem; }
                .nav-link { background: none; border: none; cursor: pointer; font-weight: 500; color: var(--charcoal); border-bottom: 1.5px solid transparent; }
                .nav-link.active, .nav-link:hover { color: var(--gold); border-bottom-color: var(--gold); }
                .burger-menu { display: none; background: none; border: none; font-size: 1.5rem; z-index: 60; }
                .mobile-menu { display: none; }
                @media (max-width: 1024px) {
                    .nav-links { display: none; }
                    .burger-menu { display: block; }
                    .mobile-menu.mobile-menu-open {
                        display: block;
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 100vh;
                        padding-top: 6rem;
                        background: rgba(251, 248, 243, 0.95);
                    }
                    .mobile-menu ul { list-style: none; display: flex; flex-direction: column; gap: 1.5rem; text-align: center; }
                    .mobile-menu button { background: none; border: none; font-size: 1.5rem; font-family: "Playfair Display", serif; }
                }

                .reveal { position: relative; overflow: hidden; }
                .reveal-inner { opacity: 0; transform: translateY(75px); transition: opacity 0.7s cubic-bezier(0.22, 1, 0.36, 1), transform 0.7s cubic-bezier(0.22, 1, 0.36, 1); }
                .reveal-inner.revealed { opacity: 1; transform: none; }

                .animated-text { display: inline-block; overflow: hidden; }
                .animated-word { display: inline-block; margin-right: 0.25em; opacity: 0; animation: fadeUp 0.6s forwards; }
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .hero { min-height: 100vh; display: flex; align-items: center; gap: 4rem; padding-top: 10rem; flex-wrap: wrap; justify-content: center; }
                .hero-title { font-size: clamp(2.25rem, 6vw, 4.5rem); line-height: 1.15; }
                .hero-subtitle { font-size: 1.2rem; opacity: 0.8; max-width: 36rem; }
                .hero-actions { display: flex; gap: 1.5rem; flex-wrap: wrap; margin-top: 2rem; }
                .cta-primary, .cta-secondary, .submit-button { border-radius: 9999px; padding: 1rem 2rem; font-weight: 600; cursor: pointer; border: none; }
                .cta-primary, .submit-button { background: var(--primary); color: #fff; }
                .cta-primary:hover, .submit-button:hover { background: var(--gold); }
                .cta-secondary { background: var(--ivory); border: 1px solid rgba(43,43,43,0.2); }
                .profile-card { background: rgba(251,248,243,0.5); border-radius: 1.5rem; padding: 2.5rem; text-align: center; box-shadow: 0 24px 48px rgba(0,0,0,0.12); max-width: 28rem; }
                .profile-card img { border-radius: 50%; border: 4px solid #fff; }
                .profile-role { color: var(--gold); letter-spacing: 0.2em; }
                .profile-stats { display: flex; gap: 1.5rem; border-top: 1px solid rgba(43,43,43,0.1); padding-top: 1rem; }
                .stat-value { font-size: 1.75rem; font-weight: 700; color: var(--primary); }
                .stat-label { font-size: 0.75rem; opacity: 0.6; }

                .section-header { text-align: center; max-width: 56rem; margin: 0 auto 4rem; }
                .section-header h2 { font-size: clamp(2rem, 4vw, 3.75rem); }
                .about-grid, .specialties-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 3rem; }
                .about-photo { width: 100%; height: auto; border-radius: 1.5rem; }
                .about-highlights { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1.5rem; }
                .about-highlight, .testimonial-card, .faq-item { background: rgba(251,248,243,0.5); border: 1px solid rgba(43,43,43,0.1); border-radius: 1rem; padding: 1.5rem; }
                .about-quote { margin-top: 2rem; padding: 2rem; border-radius: 1rem; border: 1px solid rgba(91,127,149,0.2); font-style: italic; }
                .about-quote cite { color: var(--primary); font-weight: 600; font-style: normal; }
                .specialty-card { background: #fff; border-radius: 1.5rem; padding: 2.5rem; box-shadow: 0 16px 32px rgba(0,0,0,0.08); height: 100%; }
                .specialty-heading { display: flex; align-items: center; gap: 1rem; }
                .specialty-icon { background: linear-gradient(90deg, var(--primary), var(--gold)); color: #fff; border-radius: 1rem; padding: 0.75rem; }
                .specialty-card ul { list-style: none; padding: 0; }
                .testimonials-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 2rem; }
                .testimonial-text { font-style: italic; }
                .testimonial-footer { display: flex; justify-content: space-between; border-top: 1px solid rgba(43,43,43,0.1); padding-top: 1rem; }
                .testimonial-treatment { color: var(--primary); font-size: 0.85rem; }
                .testimonial-rating { color: var(--gold); }

                .faq-list { max-width: 56rem; margin: 0 auto; display: flex; flex-direction: column; gap: 1.5rem; }
                .faq-question { width: 100%; display: flex; justify-content: space-between; background: none; border: none; cursor: pointer; font-family: "Playfair Display", serif; font-size: 1.25rem; text-align: left; }
                .faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.3s ease-out; }
                .faq-item.open .faq-answer { max-height: 40rem; }

                .contact-card { max-width: 56rem; margin: 0 auto; background: #fff; border-radius: 1.5rem; padding: 4rem; box-shadow: 0 24px 48px rgba(0,0,0,0.12); }
                .success-banner { text-align: center; margin-bottom: 2rem; }
                .success-icon { font-size: 3rem; color: #22c55e; }
                .contact-form { display: flex; flex-direction: column; gap: 2rem; }
                .form-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 2rem; }
                .form-group label { display: block; margin-bottom: 0.5rem; font-size: 0.9rem; opacity: 0.8; }
                .form-group select, .form-group textarea, .date-picker { width: 100%; min-height: 3.5rem; border: 1px solid rgba(43,43,43,0.2); border-radius: 0.5rem; padding: 0 1rem; background: rgba(251,248,243,0.5); }
                .floating-field { position: relative; }
                .floating-field-icon { position: absolute; left: 0.75rem; top: 50%; transform: translateY(-50%); opacity: 0.5; }
                .floating-input { width: 100%; height: 3.5rem; padding: 1rem 1rem 0; border: 1px solid rgba(43,43,43,0.2); border-radius: 0.5rem; font-size: 1rem; }
                .floating-input.with-icon { padding-left: 3rem; }
                .floating-label { position: absolute; pointer-events: none; transform-origin: top left; transition: all 0.2s ease-out; font-weight: 500; }
                .floating-label.label-inline { top: 50%; transform: translateY(-50%); opacity: 0.7; }
                .floating-label.label-raised { top: 0; transform: translateY(-50%) scale(0.85); background: #fff; padding: 0 0.25rem; }
                .submit-button { width: 100%; font-size: 1.1rem; display: flex; justify-content: center; gap: 0.75rem; }
                .submit-button:disabled { opacity: 0.5; cursor: not-allowed; }
                .spinner { width: 1rem; height: 1rem; border: 2px solid #fff; border-top-color: transparent; border-radius: 50%; animation: spin 1s linear infinite; }
                @keyframes spin { to { transform: rotate(360deg); } }

                .site-footer { background: var(--charcoal); color: var(--ivory); padding: 6rem 1.5rem 2.5rem; }
                .footer-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 3rem; max-width: 72rem; margin: 0 auto; }
                .footer-grid ul { list-style: none; padding: 0; }
                .footer-grid button, .footer-social { background: none; border: none; color: rgba(251,248,243,0.6); cursor: pointer; margin-right: 1rem; }
                .footer-copyright { text-align: center; opacity: 0.4; font-size: 0.85rem; border-top: 1px solid rgba(251,248,243,0.1); margin-top: 4rem; padding-top: 2rem; }
                "#}
            </style>
        </div>
    }
}
