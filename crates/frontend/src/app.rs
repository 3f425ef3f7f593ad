//! Main application component: tabs, toasts, device adaptation and the
//! shared saved-list snapshot.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use ui_core::device::{LANDSCAPE_BODY_CLASS, MOBILE_BODY_CLASS, Orientation, reclassify};
use ui_core::{ClientConfig, DeviceClass, PasswordController, SavedListView, Toast};
use web_types::SavedPasswordEntry;
use yew::prelude::*;

use crate::api::HttpApi;
use crate::browser;
use crate::components::{BackgroundEffects, ToastView, TouchButton};
use crate::pages::{GeneratorPage, SavedPage};

/// Handles the pages share: the controller, configuration, the toast sink
/// and a trigger for reloading the saved list.
#[derive(Clone)]
pub struct Services {
    pub controller: Rc<PasswordController<HttpApi>>,
    pub config: Rc<ClientConfig>,
    pub notify: Callback<Toast>,
    pub refresh: Callback<()>,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
            && Rc::ptr_eq(&self.config, &other.config)
            && self.notify == other.notify
            && self.refresh == other.refresh
    }
}

/// Saved list as rendered; every snapshot replaces the previous one.
#[derive(Debug, Default, PartialEq)]
struct SavedList(SavedListView);

impl Reducible for SavedList {
    type Action = Vec<SavedPasswordEntry>;

    fn reduce(self: Rc<Self>, entries: Self::Action) -> Rc<Self> {
        Rc::new(SavedList(self.0.replaced(entries)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Generator,
    Saved,
}

impl Tab {
    fn name(self) -> &'static str {
        match self {
            Tab::Generator => "generator",
            Tab::Saved => "saved",
        }
    }
}

/// Client configuration, honouring `<meta name="api-base">` when present.
fn load_config() -> ClientConfig {
    match browser::meta_content("api-base") {
        Some(base) => ClientConfig::with_base_url(base),
        None => ClientConfig::default(),
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let controller = {
        let config = config.clone();
        use_memo((), move |_| PasswordController::new(HttpApi::new((*config).clone())))
    };
    let device = use_state(|| DeviceClass::classify(&browser::device_signals()));
    let current_device = use_mut_ref(|| *device);
    let tab = use_state(|| Tab::Generator);
    let saved = use_reducer(SavedList::default);
    let toast = use_state(|| None::<Toast>);
    let toast_visible = use_state(|| false);
    let toast_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let notify = {
        let toast = toast.clone();
        let toast_visible = toast_visible.clone();
        let device = *device;
        Callback::from(move |next: Toast| {
            let vibration = next.vibration(device);
            toast.set(Some(next));
            toast_visible.set(true);
            if let Some(pattern) = vibration {
                browser::vibrate(pattern);
            }
            let toast_visible = toast_visible.clone();
            *toast_timer.borrow_mut() = Some(Timeout::new(device.toast_duration_ms(), move || {
                toast_visible.set(false);
            }));
        })
    };

    let refresh = {
        let controller = controller.clone();
        let dispatcher = saved.dispatcher();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match controller.list().await {
                    Ok(Some(entries)) => dispatcher.dispatch(entries),
                    Ok(None) => {}
                    Err(e) => browser::log_error("Error loading saved passwords", &e),
                }
            });
        })
    };

    let services = Services {
        controller: controller.clone(),
        config: config.clone(),
        notify,
        refresh: refresh.clone(),
    };

    // Initial load
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            browser::log_info("Password Forge client started");
            refresh.emit(());
        });
    }

    // Body classes follow the device class.
    use_effect_with(*device, |device| {
        browser::set_body_class(MOBILE_BODY_CLASS, device.is_mobile());
    });

    // Debounced resize and delayed orientation handling.
    {
        let device = device.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            let resize_pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let orientation_pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let listeners = web_sys::window().map(|window| {
                let resize = {
                    let pending = resize_pending.clone();
                    let delay = config.resize_debounce_ms;
                    EventListener::new(&window, "resize", move |_| {
                        let device = device.clone();
                        let current_device = current_device.clone();
                        *pending.borrow_mut() = Some(Timeout::new(delay, move || {
                            let previous = *current_device.borrow();
                            if let Some(next) = reclassify(previous, &browser::device_signals()) {
                                *current_device.borrow_mut() = next;
                                device.set(next);
                            }
                        }));
                    })
                };
                let orientation = {
                    let pending = orientation_pending.clone();
                    let delay = config.orientation_delay_ms;
                    EventListener::new(&window, "orientationchange", move |_| {
                        *pending.borrow_mut() = Some(Timeout::new(delay, || {
                            let signals = browser::device_signals();
                            browser::set_body_class(
                                LANDSCAPE_BODY_CLASS,
                                signals.orientation() == Orientation::Landscape,
                            );
                            browser::scroll_to_top();
                        }));
                    })
                };
                (resize, orientation)
            });
            move || {
                drop(listeners);
                resize_pending.borrow_mut().take();
                orientation_pending.borrow_mut().take();
            }
        });
    }

    let on_tab = |target: Tab| {
        let tab = tab.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            tab.set(target);
            if target == Tab::Saved {
                refresh.emit(());
            }
        })
    };

    let tab_button = |target: Tab, icon: &'static str, label: &'static str| {
        let class = if *tab == target {
            "tab-button active"
        } else {
            "tab-button"
        };
        html! {
            <TouchButton class={class} data_tab={target.name()} onclick={on_tab(target)}>
                <i class={icon}></i>{ format!(" {label}") }
            </TouchButton>
        }
    };

    let tab_content = |target: Tab, body: Html| {
        let class = classes!("tab-content", (*tab == target).then_some("active"));
        html! {
            <div id={format!("{}-tab", target.name())} class={class}>{ body }</div>
        }
    };

    html! {
        <ContextProvider<DeviceClass> context={*device}>
            <BackgroundEffects />
            <div class="container">
                <header class="app-header">
                    <h1 class="app-title">{ "Password Forge" }</h1>
                    <p class="app-subtitle">{ "Generate and keep strong passwords" }</p>
                </header>
                <nav class="tabs" role="tablist">
                    { tab_button(Tab::Generator, "fas fa-key", "Generate") }
                    { tab_button(Tab::Saved, "fas fa-lock", "Saved Passwords") }
                </nav>
                { tab_content(Tab::Generator, html! { <GeneratorPage services={services.clone()} /> }) }
                {
                    tab_content(
                        Tab::Saved,
                        html! { <SavedPage services={services.clone()} list={saved.0.clone()} /> },
                    )
                }
            </div>
            <ToastView toast={(*toast).clone()} visible={*toast_visible} />
        </ContextProvider<DeviceClass>>
    }
}
