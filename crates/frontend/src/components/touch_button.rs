//! Button with haptic touch feedback on mobile.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use ui_core::DeviceClass;
use ui_core::device::{TOUCH_RELEASE_MS, TOUCH_VIBRATION_MS};
use yew::prelude::*;

use crate::browser;

/// Properties for TouchButton.
#[derive(Properties, PartialEq)]
pub struct TouchButtonProps {
    pub class: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub data_tab: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Html,
}

/// Button that vibrates and shows `touch-active` while touched on mobile.
#[function_component(TouchButton)]
pub fn touch_button(props: &TouchButtonProps) -> Html {
    let device = use_context::<DeviceClass>().unwrap_or_default();
    let active = use_state(|| false);
    let release: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let ontouchstart = {
        let active = active.clone();
        Callback::from(move |_: TouchEvent| {
            if !device.is_mobile() {
                return;
            }
            browser::vibrate(&[TOUCH_VIBRATION_MS]);
            active.set(true);
        })
    };

    let ontouchend = {
        let active = active.clone();
        let release = release.clone();
        Callback::from(move |_: TouchEvent| {
            if !device.is_mobile() {
                return;
            }
            let active = active.clone();
            *release.borrow_mut() = Some(Timeout::new(TOUCH_RELEASE_MS, move || {
                active.set(false);
            }));
        })
    };

    let class = classes!(props.class.to_string(), active.then_some("touch-active"));

    html! {
        <button
            type={props.kind.clone()}
            id={props.id.clone()}
            class={class}
            data-tab={props.data_tab.clone()}
            aria-label={props.aria_label.clone()}
            onclick={props.onclick.clone()}
            {ontouchstart}
            {ontouchend}
        >
            { props.children.clone() }
        </button>
    }
}
