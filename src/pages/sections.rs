use chrono::{Datelike, Utc};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::animated_text::AnimatedText;
use crate::components::reveal::Reveal;
use crate::content::{
    ABOUT_HIGHLIGHTS, DOCTOR_NAME, FAQS, HERO_STATS, PROFILE_PHOTO, SPECIALTIES, TESTIMONIALS,
};
use crate::models::section::Section;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub node: NodeRef,
}

/// Sections with call-to-action buttons that jump elsewhere on the page.
#[derive(Properties, PartialEq)]
pub struct LinkedSectionProps {
    pub node: NodeRef,
    pub on_navigate: Callback<Section>,
}

fn go_to(on_navigate: &Callback<Section>, section: Section) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |_: MouseEvent| on_navigate.emit(section))
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    title: AttrValue,
    subtitle: AttrValue,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <Reveal>
            <div class="section-header">
                <h2>{props.title.clone()}</h2>
                <p>{props.subtitle.clone()}</p>
            </div>
        </Reveal>
    }
}

#[function_component(Hero)]
pub fn hero(props: &LinkedSectionProps) -> Html {
    html! {
        <section ref={props.node.clone()} id={Section::Inicio.id()} class="hero">
            <div class="hero-copy">
                <AnimatedText
                    tag="h1"
                    text="Encontrando propósito em cada sorriso."
                    class="hero-title"
                    highlight_words={vec!["propósito".to_string(), "sorriso".to_string()]}
                    highlight_class="text-primary"
                />
                <Reveal delay={0.2}>
                    <p class="hero-subtitle">
                        {"Uma jornada de transformação que une ciência, arte e um cuidado excepcional para revelar a sua melhor versão."}
                    </p>
                    <div class="hero-actions">
                        <button class="cta-primary" onclick={go_to(&props.on_navigate, Section::Contato)}>
                            {"Reservar sua Consulta →"}
                        </button>
                        <button class="cta-secondary" onclick={go_to(&props.on_navigate, Section::Sobre)}>
                            {"Conhecer Minha História"}
                        </button>
                    </div>
                </Reveal>
            </div>
            <div class="profile-card">
                <img src={PROFILE_PHOTO} alt={DOCTOR_NAME} width="120" height="120" />
                <h3>{DOCTOR_NAME}</h3>
                <p class="profile-role">{"ESPECIALISTA"}</p>
                <div class="profile-stats">
                    { for HERO_STATS.iter().map(|(value, label)| html! {
                        <div class="profile-stat">
                            <p class="stat-value">{*value}</p>
                            <p class="stat-label">{*label}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about(props: &SectionProps) -> Html {
    html! {
        <section ref={props.node.clone()} id={Section::Sobre.id()} class="about">
            <SectionHeader
                title="Sobre a Dra. Aline"
                subtitle="Uma jornada dedicada à excelência, movida pela paixão de transformar vidas através do sorriso."
            />
            <div class="about-grid">
                <Reveal delay={0.2}>
                    <img class="about-photo" src={PROFILE_PHOTO} alt={DOCTOR_NAME} width="500" height="600" />
                </Reveal>
                <Reveal delay={0.4}>
                    <h3>{"Transformando Sorrisos, Realizando Sonhos"}</h3>
                    <p>
                        {"Minha jornada na odontologia começou com um sonho: criar sorrisos únicos que refletissem a personalidade e os sonhos de cada paciente. Ao longo de mais de 8 anos de experiência, desenvolvi uma abordagem que combina técnica avançada com cuidado humanizado."}
                    </p>
                    <p>
                        {"Acredito que cada sorriso conta uma história, e meu papel é ajudar você a escrever a sua da forma mais bela e natural possível. Cada tratamento é pensado de forma personalizada, respeitando suas características únicas e seus objetivos."}
                    </p>
                    <div class="about-highlights">
                        { for ABOUT_HIGHLIGHTS.iter().map(|h| html! {
                            <div class="about-highlight">
                                <span class="highlight-icon">{h.icon}</span>
                                <h4>{h.title}</h4>
                                <p>{h.text}</p>
                            </div>
                        }) }
                    </div>
                    <blockquote class="about-quote">
                        <p>
                            {"\"Minha missão é muito mais do que criar sorrisos bonitos. É devolver a autoestima, a confiança e a alegria de sorrir sem reservas. Cada paciente é único, e merece um cuidado especial.\""}
                        </p>
                        <cite>{format!("- {}", DOCTOR_NAME)}</cite>
                    </blockquote>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Specialties)]
pub fn specialties(props: &LinkedSectionProps) -> Html {
    html! {
        <section ref={props.node.clone()} id={Section::Especialidades.id()} class="specialties">
            <SectionHeader
                title="Especialidades"
                subtitle="Tratamentos de excelência com tecnologia avançada e cuidado personalizado para cada necessidade."
            />
            <div class="specialties-grid">
                { for SPECIALTIES.iter().enumerate().map(|(index, specialty)| html! {
                    <Reveal delay={index as f64 * 0.1}>
                        <div class="specialty-card">
                            <div class="specialty-heading">
                                <span class="specialty-icon">{specialty.icon}</span>
                                <h3>{specialty.title}</h3>
                            </div>
                            <p>{specialty.description}</p>
                            <h4>{"Principais benefícios:"}</h4>
                            <ul>
                                { for specialty.benefits.iter().map(|benefit| html! {
                                    <li>{"✓ "}{*benefit}</li>
                                }) }
                            </ul>
                            <button class="cta-primary" onclick={go_to(&props.on_navigate, Section::Contato)}>
                                {"Saiba Mais →"}
                            </button>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

pub fn rating_stars(rating: u8) -> String {
    "★".repeat(rating as usize)
}

#[function_component(Testimonials)]
pub fn testimonials(props: &SectionProps) -> Html {
    html! {
        <section ref={props.node.clone()} id={Section::Depoimentos.id()} class="testimonials">
            <SectionHeader
                title="Jornadas de Transformação"
                subtitle="Histórias reais de pacientes que redescobriram a alegria de sorrir."
            />
            <div class="testimonials-grid">
                { for TESTIMONIALS.iter().enumerate().map(|(index, t)| {
                    let stars = rating_stars(t.rating);
                    html! {
                        <Reveal delay={index as f64 * 0.1}>
                            <div class="testimonial-card">
                                <p class="testimonial-text">{format!("\"{}\"", t.text)}</p>
                                <div class="testimonial-footer">
                                    <div>
                                        <h4>{t.name}</h4>
                                        <p class="testimonial-treatment">{t.treatment}</p>
                                    </div>
                                    <div class="testimonial-rating">{stars}</div>
                                </div>
                            </div>
                        </Reveal>
                    }
                }) }
            </div>
        </section>
    }
}

/// Single-open accordion: opening an item closes the other, clicking the open
/// item collapses it.
pub fn toggle_faq(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(FaqSection)]
pub fn faq_section(props: &SectionProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section ref={props.node.clone()} id={Section::Faq.id()} class="faq">
            <SectionHeader
                title="Perguntas Frequentes"
                subtitle="Informações essenciais para iniciar sua jornada conosco."
            />
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(index, faq)| {
                    let is_open = *open == Some(index);
                    let toggle = {
                        let open = open.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open.set(toggle_faq(*open, index));
                        })
                    };
                    html! {
                        <Reveal delay={index as f64 * 0.05}>
                            <div class={classes!("faq-item", is_open.then(|| "open"))}>
                                <button class="faq-question" onclick={toggle}>
                                    <span class="question-text">{faq.question}</span>
                                    <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                                </button>
                                <div class="faq-answer">
                                    <p>{faq.answer}</p>
                                </div>
                            </div>
                        </Reveal>
                    }
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{DOCTOR_NAME}</h3>
                    <p>{"A vanguarda da odontologia, onde cada detalhe é pensado para sua máxima satisfação e bem-estar."}</p>
                </div>
                <div>
                    <h4>{"Links Rápidos"}</h4>
                    <ul>
                        { for [Section::Sobre, Section::Especialidades, Section::Contato].into_iter().map(|section| html! {
                            <li>
                                <button onclick={go_to(&props.on_navigate, section)}>{section.label()}</button>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Social"}</h4>
                    <a href="#" class="footer-social">{"Instagram"}</a>
                    <a href="#" class="footer-social">{"WhatsApp"}</a>
                </div>
            </div>
            <p class="footer-copyright">
                {format!("© {} {}. Todos os direitos reservados. Uma experiência digital de excelência.", year, DOCTOR_NAME)}
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_stars_one_per_point() {
        assert_eq!(rating_stars(5), "★★★★★");
        assert_eq!(rating_stars(0), "");
    }

    #[test]
    fn test_faq_opens_clicked_item() {
        assert_eq!(toggle_faq(None, 2), Some(2));
    }

    #[test]
    fn test_faq_opening_another_closes_current() {
        assert_eq!(toggle_faq(Some(0), 3), Some(3));
    }

    #[test]
    fn test_faq_clicking_open_item_collapses() {
        assert_eq!(toggle_faq(Some(1), 1), None);
    }
}
