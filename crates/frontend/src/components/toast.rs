//! Toast notification.

use ui_core::Toast;
use yew::prelude::*;

/// Properties for ToastView.
#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Option<Toast>,
    pub visible: bool,
}

/// Always-mounted toast region; hidden when there is nothing to show.
#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    let (class, message) = match &props.toast {
        Some(toast) => (toast.class(), toast.message.clone()),
        None => ("toast", String::new()),
    };
    let hidden = (!props.visible || props.toast.is_none()).then_some("hidden");

    html! {
        <div id="toast" class={classes!(class, hidden)} role="status" aria-live="polite">
            <span id="toast-message">{ message }</span>
        </div>
    }
}
