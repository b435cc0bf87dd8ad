use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::browser;
use crate::components::date_picker::DatePicker;
use crate::components::floating_label_input::FloatingLabelInput;
use crate::components::reveal::Reveal;
use crate::config::SiteConfig;
use crate::content::TREATMENTS;
use crate::models::contact_form::{ContactForm, FormAction, FormField};
use crate::models::section::Section;
use crate::models::timeline::BannerStage;
use crate::models::whatsapp::{compose_message, deep_link};

/// Runs one submission: waits the artificial latency, hands the composed
/// message to WhatsApp and resets the form. A second submit while one is in
/// flight is ignored.
fn submit_inquiry(form: UseReducerHandle<ContactForm>, config: SiteConfig) {
    let Some(inquiry) = form.begin_submit() else {
        warn!("Submission already in progress, ignoring");
        return;
    };
    form.dispatch(FormAction::SubmitStarted);

    spawn_local(async move {
        TimeoutFuture::new(config.timings.submit_delay_ms).await;

        let message = compose_message(&config.doctor_greeting, &inquiry);
        let url = deep_link(&config.whatsapp_number, &message);
        info!("Redirecting contact request to WhatsApp ({} chars)", message.len());
        browser::open_external(&url);

        form.dispatch(FormAction::SubmitCompleted);
    });
}

fn edit(form: &UseReducerHandle<ContactForm>, field: FormField) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| form.dispatch(FormAction::Edit(field, value)))
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub node: NodeRef,
    pub form: UseReducerHandle<ContactForm>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let form = &props.form;
    let busy = form.submitting;

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit_inquiry(form.clone(), config.clone());
        })
    };

    let on_treatment = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(FormField::Treatment, select.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(FormField::Message, area.value()));
        })
    };

    let on_date = {
        let form = form.clone();
        Callback::from(move |date| form.dispatch(FormAction::PickDate(date)))
    };

    html! {
        <section ref={props.node.clone()} id={Section::Contato.id()} class="contact">
            <Reveal>
                <div class="section-header">
                    <h2>{"Inicie Sua Jornada"}</h2>
                    <p>{"Dê o primeiro passo para o sorriso que você merece. Nossa equipe de concierge está pronta para atendê-lo."}</p>
                </div>
            </Reveal>
            <div class="contact-card">
                {
                    if form.banner == BannerStage::Shown {
                        html! {
                            <div class="success-banner">
                                <span class="success-icon">{"✓"}</span>
                                <h3>{"Obrigado!"}</h3>
                                <p>{"Sua mensagem foi enviada. Estamos redirecionando para o WhatsApp."}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <form class="contact-form" {onsubmit}>
                    <div class="form-row">
                        <FloatingLabelInput
                            id="nome"
                            name={FormField::Name.name()}
                            label="Nome *"
                            value={form.name.clone()}
                            required={true}
                            disabled={busy}
                            icon={Some("👤")}
                            oninput={edit(form, FormField::Name)}
                        />
                        <FloatingLabelInput
                            id="telefone"
                            name={FormField::Phone.name()}
                            label="Telefone *"
                            input_type="tel"
                            value={form.phone.clone()}
                            required={true}
                            disabled={busy}
                            icon={Some("☎")}
                            oninput={edit(form, FormField::Phone)}
                        />
                    </div>
                    <FloatingLabelInput
                        id="email"
                        name={FormField::Email.name()}
                        label="E-mail *"
                        input_type="email"
                        value={form.email.clone()}
                        required={true}
                        disabled={busy}
                        icon={Some("✉")}
                        oninput={edit(form, FormField::Email)}
                    />
                    <div class="form-group">
                        <label for="tratamento">{"Tratamento de Interesse"}</label>
                        <select id="tratamento" name={FormField::Treatment.name()} disabled={busy} onchange={on_treatment}>
                            <option value="" selected={form.treatment.is_empty()} disabled={true}>
                                {"Selecione um tratamento"}
                            </option>
                            { for TREATMENTS.iter().map(|treatment| html! {
                                <option value={*treatment} selected={form.treatment == *treatment}>
                                    {*treatment}
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="form-group">
                        <label>{"Data Preferida para Consulta"}</label>
                        <DatePicker date={form.preferred_date} on_change={on_date} disabled={busy} />
                    </div>
                    <div class="form-group">
                        <label for="mensagem">{"Mensagem"}</label>
                        <textarea
                            id="mensagem"
                            name={FormField::Message.name()}
                            rows="4"
                            value={form.message.clone()}
                            disabled={busy}
                            oninput={on_message}
                        />
                    </div>
                    <button type="submit" class="submit-button" disabled={busy}>
                        {
                            if busy {
                                html! { <><span class="spinner"></span>{"Enviando..."}</> }
                            } else {
                                html! { <>{"Reservar minha Consulta"}</> }
                            }
                        }
                    </button>
                </form>
            </div>
        </section>
    }
}
