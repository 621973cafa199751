use chrono::{DateTime, Local};
use ghkanban_domain::{Board, BoardView, MoveMarker};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::components::{render_panel, PanelConfig};
use crate::keybindings::board_bindings;
use crate::theme::*;

pub const LOADING_TEXT: &str = "loading...";
pub const ERROR_PLACEHOLDER: &str = "API Request Error";
const TIMESTAMP_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_board(app, frame, chunks[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(chunks[1]);
    render_detail(app, frame, bottom[0]);
    render_info(app, frame, bottom[1]);

    render_status(app, frame, chunks[2]);
}

fn render_board(app: &App, frame: &mut Frame, area: Rect) {
    match app.state().view() {
        BoardView::Loading => {
            let panel = PanelConfig::new("");
            render_panel(frame, area, &panel, Paragraph::new(LOADING_TEXT));
        }
        BoardView::Failed(message) => {
            let panel = PanelConfig::new("");
            let lines = vec![
                Line::styled(ERROR_PLACEHOLDER, error_text()),
                Line::from(""),
                Line::styled(message.clone(), label_text()),
            ];
            render_panel(
                frame,
                area,
                &panel,
                Paragraph::new(lines).wrap(Wrap { trim: false }),
            );
        }
        BoardView::Ready(board) if board.column_count() == 0 => {
            let panel = PanelConfig::new(board.name.clone());
            render_panel(frame, area, &panel, Paragraph::new("no columns"));
        }
        BoardView::Ready(board) => render_columns(app, board, frame, area),
    }
}

fn render_columns(app: &App, board: &Board, frame: &mut Frame, area: Rect) {
    let count = board.column_count() as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let state = app.state();
    for (index, (column, column_area)) in board.columns.iter().zip(areas.iter()).enumerate() {
        let is_focused = state.focused_column() == Some(index);
        let panel = PanelConfig::new(column.name.clone()).focused(is_focused);

        let items: Vec<ListItem> = column
            .cards
            .iter()
            .map(|card| {
                let mut spans = vec![Span::styled(card.display_text(), normal_text())];
                match state.card_marker(card) {
                    Some(MoveMarker::Pending) => spans.push(Span::styled(
                        " (moving)",
                        marker_style(MoveMarker::Pending),
                    )),
                    Some(MoveMarker::Failed) => spans.push(Span::styled(
                        " (move failed)",
                        marker_style(MoveMarker::Failed),
                    )),
                    None => {}
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(panel.block())
            .highlight_style(selected_card(is_focused));
        let mut list_state = ListState::default().with_selected(state.row_in(index));
        frame.render_stateful_widget(list, *column_area, &mut list_state);
    }
}

fn render_detail(app: &App, frame: &mut Frame, area: Rect) {
    let panel = PanelConfig::new("");
    app.set_detail_width(panel.block().inner(area).width);
    let content = Paragraph::new(app.detail_lines())
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll(), 0));
    render_panel(frame, area, &panel, content);
}

pub fn last_updated_text(last_updated: Option<DateTime<Local>>) -> String {
    match last_updated {
        Some(at) => format!("last updated {}", at.format(TIMESTAMP_FORMAT)),
        None => format!("last updated {LOADING_TEXT}"),
    }
}

fn render_info(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.state();
    let mut lines = vec![Line::from(last_updated_text(state.last_updated()))];

    let project = match state.board() {
        Some(board) => format!("{} ({})", board.name, app.query().slug()),
        None => app.query().slug(),
    };
    lines.push(Line::styled(project, highlight_text()));

    let pending = state.pending_moves();
    if pending > 0 {
        lines.push(Line::styled(
            format!("{pending} move(s) in flight"),
            marker_style(MoveMarker::Pending),
        ));
    }
    lines.push(Line::from(""));

    for binding in board_bindings() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8} ", binding.key), highlight_text()),
            Span::styled(binding.description, normal_text()),
        ]));
    }

    let panel = PanelConfig::new("Information");
    render_panel(frame, area, &panel, Paragraph::new(lines));
}

fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let line = match app.status() {
        Some(status) if status.is_error => Line::styled(status.text.clone(), error_text()),
        Some(status) => Line::styled(status.text.clone(), label_text()),
        None if app.state().is_loading() => Line::styled("refreshing...", label_text()),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}
