use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Indexed(40);
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_CARD: Color = Color::Indexed(207);

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const PENDING_MARKER: Color = Color::Yellow;
pub const FAILED_MARKER: Color = Color::Red;
pub const ERROR_COLOR: Color = Color::Red;
