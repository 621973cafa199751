//! Markdown to styled terminal lines for the card detail pane.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const CODE_COLOR: Color = Color::LightBlue;
const LINK_COLOR: Color = Color::Cyan;
const QUOTE_PREFIX: &str = "│ ";

pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut renderer = MarkdownRenderer::default();
    for event in Parser::new_ext(text, options) {
        renderer.process_event(event);
    }
    renderer.finish()
}

#[derive(Default)]
struct MarkdownRenderer {
    lines: Vec<Line<'static>>,
    current_line: Vec<Span<'static>>,
    /// Ordered lists hold their next number, bullet lists hold `None`.
    lists: Vec<Option<u64>>,
    code_block: Option<String>,
    link_target: Option<String>,
    quote_depth: usize,
    heading: Option<HeadingLevel>,
    emphasis: bool,
    strong: bool,
    strikethrough: bool,
}

impl MarkdownRenderer {
    fn process_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.handle_tag_start(tag),
            Event::End(tag_end) => self.handle_tag_end(tag_end),
            Event::Text(text) => self.handle_text(text),
            Event::Code(code) => self.push_span(
                code.to_string(),
                Style::default().fg(CODE_COLOR),
            ),
            Event::SoftBreak | Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from("─".repeat(20)));
            }
            Event::TaskListMarker(done) => {
                self.push_span(if done { "[x] " } else { "[ ] " }.to_string(), Style::default())
            }
            _ => {}
        }
    }

    fn handle_tag_start(&mut self, tag: Tag) {
        match tag {
            Tag::CodeBlock(kind) => {
                self.flush_line();
                if let CodeBlockKind::Fenced(lang) = kind {
                    if !lang.is_empty() {
                        self.lines.push(Line::styled(
                            format!("[{lang}]"),
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                }
                self.code_block = Some(String::new());
            }
            Tag::Heading { level, .. } => {
                self.flush_line();
                self.heading = Some(level);
            }
            // Loose list items wrap their text in a paragraph; keep the bullet.
            Tag::Paragraph if !self.lists.is_empty() => {}
            Tag::Paragraph => self.flush_line(),
            Tag::BlockQuote { .. } => {
                self.flush_line();
                self.quote_depth += 1;
            }
            Tag::List(start) => {
                self.flush_line();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let bullet = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let bullet = format!("{indent}{n}. ");
                        *n += 1;
                        bullet
                    }
                    _ => format!("{indent}• "),
                };
                self.current_line.push(Span::raw(bullet));
            }
            Tag::Emphasis => self.emphasis = true,
            Tag::Strong => self.strong = true,
            Tag::Strikethrough => self.strikethrough = true,
            Tag::Link { dest_url, .. } => self.link_target = Some(dest_url.to_string()),
            _ => {}
        }
    }

    fn handle_tag_end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::CodeBlock => self.render_code_block(),
            TagEnd::Heading { .. } => {
                self.flush_line();
                self.heading = None;
                self.blank_line();
            }
            TagEnd::Paragraph => {
                self.flush_line();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::BlockQuote { .. } => {
                self.flush_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            TagEnd::List { .. } => {
                self.flush_line();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::Emphasis => self.emphasis = false,
            TagEnd::Strong => self.strong = false,
            TagEnd::Strikethrough => self.strikethrough = false,
            TagEnd::Link => {
                if let Some(url) = self.link_target.take() {
                    self.push_span(format!(" <{url}>"), Style::default().fg(Color::DarkGray));
                }
            }
            _ => {}
        }
    }

    fn handle_text(&mut self, text: CowStr) {
        if let Some(code) = self.code_block.as_mut() {
            code.push_str(&text);
            return;
        }
        let style = self.inline_style();
        self.push_span(text.to_string(), style);
    }

    fn inline_style(&self) -> Style {
        let mut style = Style::default();
        if self.heading.is_some() {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        if self.strong {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.emphasis {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.strikethrough {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        if self.link_target.is_some() {
            style = style.fg(LINK_COLOR).add_modifier(Modifier::UNDERLINED);
        }
        style
    }

    fn push_span(&mut self, text: String, style: Style) {
        if self.current_line.is_empty() && self.quote_depth > 0 {
            self.current_line
                .push(Span::raw(QUOTE_PREFIX.repeat(self.quote_depth)));
        }
        self.current_line.push(Span::styled(text, style));
    }

    fn render_code_block(&mut self) {
        let Some(code) = self.code_block.take() else {
            return;
        };
        let style = Style::default().fg(CODE_COLOR);
        for line in code.lines() {
            self.lines
                .push(Line::from(Span::styled(format!("  {line}"), style)));
        }
        self.blank_line();
    }

    fn blank_line(&mut self) {
        if self.lines.last().is_some_and(|line| !line.spans.is_empty()) {
            self.lines.push(Line::default());
        }
    }

    fn flush_line(&mut self) {
        if !self.current_line.is_empty() {
            self.lines
                .push(Line::from(std::mem::take(&mut self.current_line)));
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        while self.lines.last().is_some_and(|line| line.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }
}
