pub mod panel;

pub use panel::{render_panel, PanelConfig};
