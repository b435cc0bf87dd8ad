use std::rc::Rc;

use chrono::NaiveDate;
use yew::Reducible;

use crate::models::phone_mask::apply_phone_mask;
use crate::models::timeline::BannerStage;
use crate::models::whatsapp::Inquiry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Email,
    Treatment,
    Message,
}

impl FormField {
    /// `name` attribute of the matching input.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "nome",
            FormField::Phone => "telefone",
            FormField::Email => "email",
            FormField::Treatment => "tratamento",
            FormField::Message => "mensagem",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Edit(FormField, String),
    PickDate(Option<NaiveDate>),
    SubmitStarted,
    SubmitCompleted,
    BannerElapsed,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub treatment: String,
    pub message: String,
    pub preferred_date: Option<NaiveDate>,
    pub submitting: bool,
    pub banner: BannerStage,
}

impl ContactForm {
    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::Email => &mut self.email,
            FormField::Treatment => &mut self.treatment,
            FormField::Message => &mut self.message,
        }
    }

    /// Payload for a new submission, or `None` while one is already in
    /// flight. Field contents are not checked here: the browser's `required`
    /// attributes are the only gate.
    pub fn begin_submit(&self) -> Option<Inquiry> {
        if self.submitting {
            return None;
        }
        Some(self.snapshot())
    }

    fn snapshot(&self) -> Inquiry {
        Inquiry {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            treatment: self.treatment.clone(),
            preferred_date: self.preferred_date,
            message: self.message.clone(),
        }
    }

    /// Pure transition; [`Reducible::reduce`] only wraps it in an `Rc`.
    pub fn apply(&self, action: FormAction) -> ContactForm {
        let mut next = self.clone();
        match action {
            FormAction::Edit(_, _) | FormAction::PickDate(_) if self.submitting => {}
            FormAction::Edit(FormField::Phone, value) => next.phone = apply_phone_mask(&value),
            FormAction::Edit(field, value) => *next.value_mut(field) = value,
            FormAction::PickDate(date) => next.preferred_date = date,
            FormAction::SubmitStarted => next.submitting = true,
            FormAction::SubmitCompleted => {
                next = ContactForm {
                    banner: BannerStage::Shown,
                    ..ContactForm::default()
                };
            }
            FormAction::BannerElapsed => next.banner = BannerStage::Hidden,
        }
        next
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Timings;
    use crate::models::timeline::state_after;
    use crate::models::whatsapp::{compose_message, deep_link};

    fn filled() -> ContactForm {
        let actions = [
            FormAction::Edit(FormField::Name, "João Pereira".to_string()),
            FormAction::Edit(FormField::Phone, "11987654321".to_string()),
            FormAction::Edit(FormField::Email, "joao@example.com".to_string()),
            FormAction::Edit(FormField::Treatment, "Tratamento de DTM".to_string()),
            FormAction::Edit(FormField::Message, "Dor ao mastigar".to_string()),
            FormAction::PickDate(NaiveDate::from_ymd_opt(2026, 11, 2)),
        ];
        actions
            .into_iter()
            .fold(ContactForm::default(), |form, action| form.apply(action))
    }

    #[test]
    fn test_starts_empty() {
        let form = ContactForm::default();
        assert_eq!(form.name, "");
        assert_eq!(form.preferred_date, None);
        assert!(!form.submitting);
        assert_eq!(form.banner, BannerStage::Hidden);
    }

    #[test]
    fn test_phone_edits_are_masked() {
        let form = ContactForm::default().apply(FormAction::Edit(FormField::Phone, "11987654321".into()));
        assert_eq!(form.phone, "(11) 98765-4321");
    }

    #[test]
    fn test_whitespace_values_are_still_submitted() {
        let form = filled().apply(FormAction::Edit(FormField::Name, " ".into()));
        let inquiry = form.begin_submit().expect("submission should start");
        assert_eq!(inquiry.name, " ");
        assert_eq!(inquiry.email, "joao@example.com");
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let form = filled()
            .apply(FormAction::Edit(FormField::Treatment, String::new()))
            .apply(FormAction::Edit(FormField::Message, String::new()))
            .apply(FormAction::PickDate(None));
        let inquiry = form.begin_submit().expect("submission should start");
        assert_eq!(inquiry.treatment, "");
        assert_eq!(inquiry.preferred_date, None);
    }

    #[test]
    fn test_single_submit_yields_one_payload() {
        let form = filled();
        let first = form.begin_submit();
        assert!(first.is_some());
        let form = form.apply(FormAction::SubmitStarted);
        assert_eq!(form.begin_submit(), None);
        let form = form.apply(FormAction::SubmitCompleted);
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_inputs_frozen_while_submitting() {
        let form = filled().apply(FormAction::SubmitStarted);
        assert!(form.submitting);
        let edited = form
            .apply(FormAction::Edit(FormField::Name, "Outro".into()))
            .apply(FormAction::PickDate(None));
        assert_eq!(edited.name, "João Pereira");
        assert!(edited.preferred_date.is_some());
    }

    #[test]
    fn test_completion_resets_fields_and_shows_banner() {
        let form = filled().apply(FormAction::SubmitStarted).apply(FormAction::SubmitCompleted);
        for value in [&form.name, &form.phone, &form.email, &form.treatment, &form.message] {
            assert_eq!(value, "");
        }
        assert_eq!(form.preferred_date, None);
        assert!(!form.submitting);
        assert_eq!(form.banner, BannerStage::Shown);
    }

    #[test]
    fn test_banner_cleared_by_elapsed_event() {
        let form = filled().apply(FormAction::SubmitCompleted);
        assert_eq!(state_after(form.banner, 5000, &Timings::default()), BannerStage::Hidden);
        assert_eq!(form.apply(FormAction::BannerElapsed).banner, BannerStage::Hidden);
    }

    #[test]
    fn test_snapshot_feeds_deep_link() {
        let inquiry = filled().begin_submit().expect("submission should start");
        let link = deep_link("5511973658355", &compose_message("Dra. Aline", &inquiry));
        let text = urlencoding::decode(link.split_once("?text=").unwrap().1)
            .unwrap()
            .into_owned();
        for value in ["João Pereira", "(11) 98765-4321", "joao@example.com", "Tratamento de DTM", "Dor ao mastigar", "02/11/2026"] {
            assert!(text.contains(value), "missing {}", value);
        }
    }

    #[test]
    fn test_reduce_wraps_apply() {
        let form = Rc::new(ContactForm::default());
        let next = form.reduce(FormAction::Edit(FormField::Name, "Ana".into()));
        assert_eq!(next.name, "Ana");
    }
}
