use chrono::NaiveDate;

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

pub const NO_DATE_SELECTED: &str = "Nenhuma data selecionada";

/// Values captured from the contact form at submit time.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Inquiry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub treatment: String,
    pub preferred_date: Option<NaiveDate>,
    pub message: String,
}

pub fn format_preferred_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => NO_DATE_SELECTED.to_string(),
    }
}

pub fn compose_message(greeting: &str, inquiry: &Inquiry) -> String {
    format!(
        "Ola, {greeting}!\n\
         \n\
         Vim atraves do seu site e gostaria de agendar uma consulta.\n\
         \n\
         Nome: {name}\n\
         Telefone: {phone}\n\
         E-mail: {email}\n\
         Interesse: {treatment}\n\
         Data preferida: {date}\n\
         \n\
         Mensagem:\n\
         {message}\n\
         \n\
         Aguardo seu retorno para agendarmos! 😊",
        greeting = greeting,
        name = inquiry.name,
        phone = inquiry.phone,
        email = inquiry.email,
        treatment = inquiry.treatment,
        date = format_preferred_date(inquiry.preferred_date),
        message = inquiry.message,
    )
}

pub fn deep_link(number: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        number,
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> Inquiry {
        Inquiry {
            name: "Maria Souza".to_string(),
            phone: "(11) 97365-8355".to_string(),
            email: "maria@example.com".to_string(),
            treatment: "Reabilitação Oral".to_string(),
            preferred_date: NaiveDate::from_ymd_opt(2026, 3, 7),
            message: "Gostaria de saber valores & horários?".to_string(),
        }
    }

    fn decoded_text(link: &str) -> String {
        let (_, query) = link.split_once("?text=").unwrap();
        urlencoding::decode(query).unwrap().into_owned()
    }

    #[test]
    fn test_date_is_day_month_year() {
        assert_eq!(format_preferred_date(NaiveDate::from_ymd_opt(2026, 3, 7)), "07/03/2026");
    }

    #[test]
    fn test_missing_date_uses_fallback_text() {
        let mut inquiry = inquiry();
        inquiry.preferred_date = None;
        let message = compose_message("Dra. Aline", &inquiry);
        assert!(message.contains("Data preferida: Nenhuma data selecionada"));
    }

    #[test]
    fn test_message_lists_every_field() {
        let message = compose_message("Dra. Aline", &inquiry());
        assert!(message.starts_with("Ola, Dra. Aline!\n\nVim atraves"));
        assert!(message.contains("Nome: Maria Souza\n"));
        assert!(message.contains("Telefone: (11) 97365-8355\n"));
        assert!(message.contains("E-mail: maria@example.com\n"));
        assert!(message.contains("Interesse: Reabilitação Oral\n"));
        assert!(message.contains("Data preferida: 07/03/2026\n"));
        assert!(message.contains("Mensagem:\nGostaria de saber valores & horários?\n"));
    }

    #[test]
    fn test_deep_link_targets_number_and_encodes_text() {
        let link = deep_link("5511973658355", &compose_message("Dra. Aline", &inquiry()));
        assert!(link.starts_with("https://wa.me/5511973658355?text="));
        let query = link.split_once("?text=").unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('&'));
        assert!(!query.contains('\n'));
    }

    #[test]
    fn test_decoded_link_contains_submitted_values() {
        let inquiry = inquiry();
        let link = deep_link("5511973658355", &compose_message("Dra. Aline", &inquiry));
        let text = decoded_text(&link);
        for value in [
            &inquiry.name,
            &inquiry.phone,
            &inquiry.email,
            &inquiry.treatment,
            &inquiry.message,
        ] {
            assert!(text.contains(value.as_str()), "missing {:?}", value);
        }
        assert!(text.contains("07/03/2026"));
    }
}
