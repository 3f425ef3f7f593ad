//! Password generation page.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use ui_core::view::{COPIED_MESSAGE, saved_message, slider_background};
use ui_core::{
    CopyOutcome, DeviceClass, GeneratorForm, GeneratorSession, Operation, SessionEvent, Toast,
};
use web_types::GenerationOptions;
use yew::prelude::*;

use crate::app::Services;
use crate::browser::{self, BrowserClipboard};
use crate::components::{OptionCard, TouchButton};

/// Properties for GeneratorPage.
#[derive(Properties, PartialEq)]
pub struct GeneratorPageProps {
    pub services: Services,
}

/// Generator panel state; every event produces a new session.
#[derive(Debug, Default, PartialEq)]
struct Session(GeneratorSession);

impl Reducible for Session {
    type Action = SessionEvent;

    fn reduce(self: Rc<Self>, event: Self::Action) -> Rc<Self> {
        Rc::new(Session(self.0.apply(event)))
    }
}

/// Focus/blur handlers that lock viewport zoom while an input is focused on
/// mobile.
fn zoom_guard(device: DeviceClass) -> (Callback<FocusEvent>, Callback<FocusEvent>) {
    let onfocus = Callback::from(move |_: FocusEvent| {
        if let Some(content) = device.viewport_on_focus() {
            browser::set_viewport(content);
        }
    });
    let onblur = Callback::from(move |_: FocusEvent| {
        if let Some(content) = device.viewport_on_blur() {
            browser::set_viewport(content);
        }
    });
    (onfocus, onblur)
}

/// Generator form, result panel and save action.
#[function_component(GeneratorPage)]
pub fn generator_page(props: &GeneratorPageProps) -> Html {
    let services = &props.services;
    let config = services.config.clone();
    let device = use_context::<DeviceClass>().unwrap_or_default();

    let length = use_state(|| config.default_length);
    let options = use_state(GenerationOptions::default);
    let session = use_reducer(Session::default);
    let copied = use_state(|| false);
    let copy_reset: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let on_length = {
        let length = length.clone();
        let config = config.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u32>() {
                length.set(config.clamp_length(value));
            }
        })
    };

    let toggle = |apply: fn(&mut GenerationOptions, bool)| {
        let options = options.clone();
        Callback::from(move |checked: bool| {
            let mut next = *options;
            apply(&mut next, checked);
            options.set(next);
        })
    };

    let on_site_name = {
        let dispatcher = session.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(SessionEvent::SiteNameTyped(input.value()));
        })
    };

    let onsubmit = {
        let controller = services.controller.clone();
        let notify = services.notify.clone();
        let dispatcher = session.dispatcher();
        let form = GeneratorForm {
            length: *length,
            options: *options,
            site_name: session.0.site_name.clone(),
        };
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let controller = controller.clone();
            let notify = notify.clone();
            let dispatcher = dispatcher.clone();
            let form = form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match controller.generate(&form).await {
                    Ok(generated) => dispatcher.dispatch(SessionEvent::Generated(generated)),
                    Err(e) => {
                        if e.is_unexpected() {
                            browser::log_error("Error generating password", &e);
                        }
                        notify.emit(Toast::failure(Operation::Generate, &e));
                    }
                }
            });
        })
    };

    let on_copy = {
        let password = session.0.password().to_string();
        let notify = services.notify.clone();
        let copied = copied.clone();
        let feedback_ms = config.copy_feedback_ms;
        Callback::from(move |_: MouseEvent| {
            let password = password.clone();
            let notify = notify.clone();
            let copied = copied.clone();
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

    let on_save = {
        let controller = services.controller.clone();
        let notify = services.notify.clone();
        let refresh = services.refresh.clone();
        let dispatcher = session.dispatcher();
        let pending = session.0.pending.clone();
        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            let notify = notify.clone();
            let refresh = refresh.clone();
            let dispatcher = dispatcher.clone();
            let pending = pending.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match controller.save(pending.as_ref()).await {
                    Ok(site) => {
                        notify.emit(Toast::success(saved_message(&site)));
                        dispatcher.dispatch(SessionEvent::Saved);
                        refresh.emit(());
                    }
                    Err(e) => {
                        if e.is_unexpected() {
                            browser::log_error("Error saving password", &e);
                        }
                        notify.emit(Toast::failure(Operation::Save, &e));
                    }
                }
            });
        })
    };

    let (onfocus, onblur) = zoom_guard(device);
    let copy_icon = if *copied { "fas fa-check" } else { "fas fa-copy" };

    html! {
        <form id="password-form" class="glass-card generator-form" {onsubmit}>
            <div class="form-group">
                <label for="password-length">
                    { "Password Length: " }
                    <span id="length-value">{ length.to_string() }</span>
                </label>
                <input
                    type="range"
                    id="password-length"
                    class="length-slider"
                    min={config.min_length.to_string()}
                    max={config.max_length.to_string()}
                    value={length.to_string()}
                    aria-valuemin={config.min_length.to_string()}
                    aria-valuemax={config.max_length.to_string()}
                    aria-valuenow={length.to_string()}
                    style={slider_background(*length, config.min_length, config.max_length)}
                    oninput={on_length}
                    onfocus={onfocus.clone()}
                    onblur={onblur.clone()}
                />
            </div>

            <div class="options-grid">
                <OptionCard
                    id="uppercase"
                    label="Uppercase"
                    example="A-Z"
                    checked={options.uppercase}
                    on_toggle={toggle(|o, v| o.uppercase = v)}
                />
                <OptionCard
                    id="lowercase"
                    label="Lowercase"
                    example="a-z"
                    checked={options.lowercase}
                    on_toggle={toggle(|o, v| o.lowercase = v)}
                />
                <OptionCard
                    id="numbers"
                    label="Numbers"
                    example="0-9"
                    checked={options.numbers}
                    on_toggle={toggle(|o, v| o.numbers = v)}
                />
                <OptionCard
                    id="special"
                    label="Special"
                    example="!@#$"
                    checked={options.special}
                    on_toggle={toggle(|o, v| o.special = v)}
                />
            </div>

            <div class="form-group">
                <label for="site-name">{ "Site Name (optional)" }</label>
                <input
                    type="text"
                    id="site-name"
                    class="cyber-input"
                    placeholder="e.g. github.com"
                    value={session.0.site_name.clone()}
                    oninput={on_site_name}
                    {onfocus}
                    {onblur}
                />
            </div>

            <TouchButton class="cyber-button generate-btn" kind="submit">
                <i class="fas fa-bolt"></i>{ " Generate Password" }
            </TouchButton>

            <div
                id="password-result"
                class={classes!("password-result", (!session.0.result_visible()).then_some("hidden"))}
            >
                <div class="password-display">
                    <code id="generated-password">{ session.0.password().to_string() }</code>
                    <TouchButton
                        class="icon-button"
                        id="copy-btn"
                        aria_label="Copy password"
                        onclick={on_copy}
                    >
                        <i class={copy_icon}></i>
                    </TouchButton>
                </div>
                {
                    match session.0.save_label() {
                        Some(label) => html! {
                            <TouchButton class="cyber-button save-btn" id="save-btn" onclick={on_save}>
                                <i class="fas fa-save"></i>{ format!(" {label}") }
                            </TouchButton>
                        },
                        None => html! {
                            <TouchButton class="cyber-button save-btn hidden" id="save-btn" />
                        },
                    }
                }
            </div>
        </form>
    }
}
