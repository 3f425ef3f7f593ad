//! Character-class checkbox card.

use yew::prelude::*;

/// Properties for OptionCard.
#[derive(Properties, PartialEq)]
pub struct OptionCardProps {
    /// Checkbox id: `uppercase`, `lowercase`, `numbers` or `special`
    pub id: AttrValue,
    pub label: AttrValue,
    pub example: AttrValue,
    pub checked: bool,
    pub on_toggle: Callback<bool>,
}

/// Keyboard-accessible checkbox card; Enter and Space toggle it.
#[function_component(OptionCard)]
pub fn option_card(props: &OptionCardProps) -> Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_toggle.emit(input.checked());
        })
    };

    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        let checked = props.checked;
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                on_toggle.emit(!checked);
            }
        })
    };

    html! {
        <label class="option-card" tabindex="0" {onkeydown}>
            <input
                type="checkbox"
                id={props.id.clone()}
                checked={props.checked}
                {onchange}
            />
            <span class="option-label">{ props.label.clone() }</span>
            <span class="option-example">{ props.example.clone() }</span>
        </label>
    }
}
