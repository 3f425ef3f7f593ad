//! Password Forge - Yew WASM Frontend
//!
//! Browser client for the password-forge backend: the generator form, the
//! saved-password list and the animated background.

pub mod api;
pub mod app;
pub mod browser;
pub mod components;
pub mod pages;

pub use app::App;
