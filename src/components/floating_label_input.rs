use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPosition {
    /// Sits inside the input like a placeholder.
    Inline,
    /// Shrunk above the input border.
    Raised,
}

impl LabelPosition {
    pub fn resolve(focused: bool, has_value: bool) -> Self {
        if focused || has_value {
            LabelPosition::Raised
        } else {
            LabelPosition::Inline
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            LabelPosition::Inline => "label-inline",
            LabelPosition::Raised => "label-raised",
        }
    }
}

/// Horizontal label offset. Inline labels clear the icon when there is one.
pub fn label_offset(position: LabelPosition, has_icon: bool) -> &'static str {
    match (position, has_icon) {
        (LabelPosition::Raised, _) => "0.75rem",
        (LabelPosition::Inline, true) => "2.5rem",
        (LabelPosition::Inline, false) => "1rem",
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingLabelInputProps {
    pub id: AttrValue,
    pub name: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub icon: Option<&'static str>,
    pub oninput: Callback<String>,
}

#[function_component(FloatingLabelInput)]
pub fn floating_label_input(props: &FloatingLabelInputProps) -> Html {
    let focused = use_state(|| false);

    let position = LabelPosition::resolve(*focused, !props.value.is_empty());
    let offset = label_offset(position, props.icon.is_some());

    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };

    html! {
        <div class="floating-field">
            {
                if let Some(icon) = props.icon {
                    html! { <span class="floating-field-icon">{icon}</span> }
                } else {
                    html! {}
                }
            }
            <input
                id={props.id.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                class={classes!("floating-input", props.icon.is_some().then(|| "with-icon"))}
                value={props.value.clone()}
                required={props.required}
                disabled={props.disabled}
                {onfocus}
                {onblur}
                {oninput}
            />
            <label
                for={props.id.clone()}
                class={classes!("floating-label", position.class())}
                style={format!("left: {};", offset)}
            >
                {props.label.clone()}
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_inline_only_when_idle_and_empty() {
        assert_eq!(LabelPosition::resolve(false, false), LabelPosition::Inline);
        assert_eq!(LabelPosition::resolve(true, false), LabelPosition::Raised);
        assert_eq!(LabelPosition::resolve(false, true), LabelPosition::Raised);
        assert_eq!(LabelPosition::resolve(true, true), LabelPosition::Raised);
    }

    #[test]
    fn test_inline_offset_clears_icon() {
        assert_eq!(label_offset(LabelPosition::Inline, true), "2.5rem");
        assert_eq!(label_offset(LabelPosition::Inline, false), "1rem");
        assert_eq!(label_offset(LabelPosition::Raised, true), "0.75rem");
    }
}
