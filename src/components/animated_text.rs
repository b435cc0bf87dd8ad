use yew::prelude::*;

/// Lead time before the first word starts moving.
pub const LEAD_MS: u32 = 200;
/// Gap between consecutive words.
pub const STAGGER_MS: u32 = 40;

#[derive(Clone, Debug, PartialEq)]
pub struct Word {
    pub text: String,
    pub highlighted: bool,
    pub delay_ms: u32,
}

/// Splits on single spaces and marks words that match `highlight_words` once
/// trailing punctuation (`.` and `,`) is ignored.
pub fn split_words(text: &str, highlight_words: &[String]) -> Vec<Word> {
    text.split(' ')
        .enumerate()
        .map(|(index, word)| {
            let bare: String = word.chars().filter(|c| *c != '.' && *c != ',').collect();
            Word {
                text: word.to_string(),
                highlighted: highlight_words.iter().any(|h| *h == bare),
                delay_ms: LEAD_MS + STAGGER_MS * index as u32,
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("p"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub highlight_words: Vec<String>,
    #[prop_or_default]
    pub highlight_class: Classes,
}

#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let words = split_words(&props.text, &props.highlight_words);

    html! {
        <@{props.tag.to_string()} class={props.class.clone()}>
            <span class="animated-text">
                { for words.into_iter().map(|word| html! {
                    <span
                        class={classes!(
                            "animated-word",
                            word.highlighted.then(|| props.highlight_class.clone())
                        )}
                        style={format!("animation-delay: {}ms;", word.delay_ms)}
                    >
                        { word.text }
                    </span>
                }) }
            </span>
        </@>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlights() -> Vec<String> {
        vec!["propósito".to_string(), "sorriso".to_string()]
    }

    #[test]
    fn test_splits_on_spaces() {
        let words = split_words("Encontrando propósito em cada sorriso.", &highlights());
        let texts: Vec<_> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, ["Encontrando", "propósito", "em", "cada", "sorriso."]);
    }

    #[test]
    fn test_highlight_ignores_trailing_punctuation() {
        let words = split_words("Encontrando propósito em cada sorriso.", &highlights());
        let marked: Vec<_> = words.iter().filter(|w| w.highlighted).map(|w| w.text.as_str()).collect();
        assert_eq!(marked, ["propósito", "sorriso."]);
    }

    #[test]
    fn test_highlight_is_case_sensitive() {
        let words = split_words("Sorriso", &highlights());
        assert!(!words[0].highlighted);
    }

    #[test]
    fn test_delays_stagger_from_lead() {
        let words = split_words("a b c", &[]);
        let delays: Vec<_> = words.iter().map(|w| w.delay_ms).collect();
        assert_eq!(delays, [200, 240, 280]);
    }
}
