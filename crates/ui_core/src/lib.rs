//! Target-independent core of the password-forge client.
//!
//! This crate holds everything the browser app decides without touching the
//! DOM: the controller and its backend seam, the view model, the device
//! policies and the background effects model.

pub mod api;
pub mod config;
pub mod controller;
pub mod device;
pub mod effects;
pub mod error;
pub mod view;

pub use api::{Clipboard, PasswordApi};
pub use config::ClientConfig;
pub use controller::{CopyOutcome, DeleteOutcome, PasswordController, RefreshTickets, copy};
pub use device::{DeviceClass, DeviceSignals};
pub use error::{ClientError, Operation, Result};
pub use view::{
    GeneratorForm, GeneratorSession, PendingPassword, SavedListView, SessionEvent, Toast,
    ToastKind, Visibility,
};
