//! Saved password row component.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use ui_core::view::{COPIED_MESSAGE, animation_delay, format_created_at};
use ui_core::{CopyOutcome, Operation, Toast, Visibility};
use web_types::SavedPasswordEntry;
use yew::prelude::*;

use crate::browser::{self, BrowserClipboard};
use crate::components::TouchButton;

/// Properties for PasswordItem component.
#[derive(Properties, PartialEq)]
pub struct PasswordItemProps {
    pub entry: SavedPasswordEntry,
    pub index: usize,
    pub on_delete: Callback<i64>,
    pub notify: Callback<Toast>,
    /// How long the copy icon shows a check mark
    pub copy_feedback_ms: u32,
}

/// One saved entry: site, date, masked password and its actions.
#[function_component(PasswordItem)]
pub fn password_item(props: &PasswordItemProps) -> Html {
    let entry = &props.entry;
    let visibility = use_state(Visibility::default);
    let copied = use_state(|| false);
    let copy_reset: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let on_toggle = {
        let visibility = visibility.clone();
        Callback::from(move |_: MouseEvent| visibility.set(visibility.toggled()))
    };

    let on_copy = {
        let password = entry.password.clone();
        let copied = copied.clone();
        let notify = props.notify.clone();
        let feedback_ms = props.copy_feedback_ms;
        Callback::from(move |_: MouseEvent| {
            let password = password.clone();
            let copied = copied.clone();
            let notify = notify.clone();
            let copy_reset = copy_reset.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ui_core::copy(&BrowserClipboard, &password).await {
                    Ok(CopyOutcome::Copied) => {
                        copied.set(true);
                        let copied = copied.clone();
                        *copy_reset.borrow_mut() = Some(Timeout::new(feedback_ms, move || {
                            copied.set(false);
                        }));
                        notify.emit(Toast::success(COPIED_MESSAGE));
                    }
                    Ok(CopyOutcome::NothingToCopy) => {}
                    Err(e) => {
                        browser::log_error("Failed to copy password", &e);
                        notify.emit(Toast::failure(Operation::Copy, &e));
                    }
                }
            });
        })
    };

    let on_delete = {
        let id = entry.id;
        props.on_delete.reform(move |_: MouseEvent| id)
    };

    let copy_icon = if *copied { "fas fa-check" } else { "fas fa-copy" };

    html! {
        <div class="password-item" style={animation_delay(props.index)}>
            <div class="password-item-header">
                <div class="password-item-info">
                    <h3>{ entry.site_name.clone() }</h3>
                    <div class="password-item-date">
                        { format!("Created: {}", format_created_at(&entry.created_at)) }
                    </div>
                </div>
                <div class="password-item-actions">
                    <TouchButton
                        class="icon-button delete-btn"
                        aria_label="Delete password"
                        onclick={on_delete}
                    >
                        <i class="fas fa-trash"></i>
                    </TouchButton>
                </div>
            </div>
            <div class="password-item-display">
                <code class="password-text" id={format!("password-{}", entry.id)}>
                    { visibility.render(&entry.password) }
                </code>
                <TouchButton class="icon-button" aria_label="Toggle visibility" onclick={on_toggle}>
                    <i class={visibility.icon_class()} id={format!("eye-{}", entry.id)}></i>
                </TouchButton>
                <TouchButton class="icon-button copy-btn" aria_label="Copy password" onclick={on_copy}>
                    <i class={copy_icon} id={format!("copy-icon-{}", entry.id)}></i>
                </TouchButton>
            </div>
        </div>
    }
}
