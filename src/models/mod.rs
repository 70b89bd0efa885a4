// Data Models
pub mod document;
pub mod preference;

pub use document::{Document, Element, Emphasis, Overlay};
pub use preference::{Category, Language, Preference, Theme};
