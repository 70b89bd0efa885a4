// UI Layer
pub mod buttons;
pub mod i18n;
pub mod landing;
pub mod theme;
pub mod view;

pub use view::LandingView;
