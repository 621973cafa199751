pub mod app;
pub mod components;
pub mod delivery;
pub mod events;
pub mod keybindings;
pub mod markdown_renderer;
pub mod theme;
pub mod ui;

pub use app::{App, StatusMessage, UrlOpener};
pub use delivery::Delivery;
