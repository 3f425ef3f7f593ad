//! Reusable UI components.

mod background;
mod option_card;
mod password_item;
mod toast;
mod touch_button;

pub use background::BackgroundEffects;
pub use option_card::OptionCard;
pub use password_item::{PasswordItem, PasswordItemProps};
pub use toast::{ToastView, ToastViewProps};
pub use touch_button::TouchButton;
