use crate::theme::{focused_border, unfocused_border};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered box shared by the columns, the detail pane and the info panel.
pub struct PanelConfig {
    pub title: String,
    pub is_focused: bool,
}

impl PanelConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn border_style(&self) -> Style {
        if self.is_focused {
            focused_border()
        } else {
            unfocused_border()
        }
    }

    pub fn block(&self) -> Block<'_> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style());
        if self.title.is_empty() {
            block
        } else {
            block
                .title(format!(" {} ", self.title))
                .title_style(self.border_style())
        }
    }
}

pub fn render_panel(frame: &mut Frame, area: Rect, config: &PanelConfig, content: Paragraph<'_>) {
    let widget = content.block(config.block());
    frame.render_widget(widget, area);
}
