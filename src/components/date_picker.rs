use chrono::NaiveDate;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Wire format of `<input type="date">`.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

pub fn to_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    pub date: Option<NaiveDate>,
    pub on_change: Callback<Option<NaiveDate>>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(parse_date_input(&input.value()));
        })
    };

    html! {
        <input
            type="date"
            class="date-picker"
            value={to_date_input(props.date)}
            disabled={props.disabled}
            {onchange}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_native_date_value() {
        assert_eq!(parse_date_input("2026-10-18"), NaiveDate::from_ymd_opt(2026, 10, 18));
    }

    #[test]
    fn test_cleared_or_garbage_input_is_none() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("18/10/2026"), None);
        assert_eq!(parse_date_input("2026-02-30"), None);
    }

    #[test]
    fn test_controlled_value_roundtrips_format() {
        assert_eq!(to_date_input(NaiveDate::from_ymd_opt(2026, 1, 5)), "2026-01-05");
        assert_eq!(to_date_input(None), "");
    }
}
