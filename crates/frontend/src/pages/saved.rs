//! Saved passwords page.

use ui_core::view::DELETED_MESSAGE;
use ui_core::{DeleteOutcome, Operation, SavedListView, Toast};
use yew::prelude::*;

use crate::app::Services;
use crate::browser;
use crate::components::PasswordItem;

/// Properties for SavedPage.
#[derive(Properties, PartialEq)]
pub struct SavedPageProps {
    pub services: Services,
    pub list: SavedListView,
}

/// Count, empty state and one row per saved entry.
#[function_component(SavedPage)]
pub fn saved_page(props: &SavedPageProps) -> Html {
    let services = &props.services;
    let view = &props.list;

    let on_delete = {
        let controller = services.controller.clone();
        let notify = services.notify.clone();
        let refresh = services.refresh.clone();
        Callback::from(move |id: i64| {
            let controller = controller.clone();
            let notify = notify.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match controller.delete(id, browser::confirm).await {
                    Ok(DeleteOutcome::Deleted) => {
                        notify.emit(Toast::success(DELETED_MESSAGE));
                        refresh.emit(());
                    }
                    Ok(DeleteOutcome::Cancelled) => {}
                    Err(e) => {
                        if e.is_unexpected() {
                            browser::log_error("Error deleting password", &e);
                        }
                        notify.emit(Toast::failure(Operation::Delete, &e));
                    }
                }
            });
        })
    };

    let empty_style = if view.show_empty_state() {
        "display: block"
    } else {
        "display: none"
    };

    html! {
        <div class="glass-card saved-passwords">
            <div class="saved-header">
                <h2>{ "Saved Passwords" }</h2>
                <span id="password-count" class="password-count">{ view.count_text() }</span>
            </div>
            <div id="empty-state" class="empty-state" style={empty_style}>
                <i class="fas fa-lock"></i>
                <p>{ "No saved passwords yet. Generate one and save it!" }</p>
            </div>
            <div id="saved-passwords-list" class="saved-passwords-list">
                {
                    for view.entries.iter().enumerate().map(|(index, entry)| html! {
                        <PasswordItem
                            key={view.row_key(entry.id)}
                            entry={entry.clone()}
                            {index}
                            on_delete={on_delete.clone()}
                            notify={services.notify.clone()}
                            copy_feedback_ms={services.config.copy_feedback_ms}
                        />
                    })
                }
            </div>
        </div>
    }
}
