use super::colors::*;
use ghkanban_domain::MoveMarker;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

/// The cursor row of the focused column. Unfocused columns show no cursor.
pub fn selected_card(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(SELECTED_CARD)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn marker_style(marker: MoveMarker) -> Style {
    match marker {
        MoveMarker::Pending => Style::default()
            .fg(PENDING_MARKER)
            .add_modifier(Modifier::ITALIC),
        MoveMarker::Failed => Style::default()
            .fg(FAILED_MARKER)
            .add_modifier(Modifier::BOLD),
    }
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR)
}
