//! Page components.

mod generator;
mod saved;

pub use generator::GeneratorPage;
pub use saved::{SavedPage, SavedPageProps};
