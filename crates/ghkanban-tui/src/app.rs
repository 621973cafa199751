use std::cell::Cell;
use std::io;
use std::sync::Arc;

use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ghkanban_api::{CardMover, ProjectQuery, ProjectSource};
use ghkanban_core::{BoardResult, RefreshPolicy};
use ghkanban_domain::{
    BoardState, DeliveryOutcome, MoveDirection, MoveOutcome, MoveResult, Position, RemoteId,
};
use ratatui::{
    backend::CrosstermBackend,
    text::Line,
    widgets::{Paragraph, Wrap},
    Terminal,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::delivery::{spawn_fetch, spawn_move, Delivery};
use crate::events::{Event, EventHandler};
use crate::keybindings::{action_for, KeybindingAction};
use crate::markdown_renderer::render_markdown;
use crate::ui;

const DEFAULT_SCROLL_STEP: u16 = 2;

pub type UrlOpener = Box<dyn Fn(&str) -> io::Result<()> + Send>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Identifies what the detail pane is showing, so scroll resets when it
/// changes.
type DetailKey = Option<(Position, RemoteId, String)>;

pub struct App {
    pub should_quit: bool,
    state: BoardState,
    query: ProjectQuery,
    source: Arc<dyn ProjectSource>,
    mover: Arc<dyn CardMover>,
    delivery_tx: UnboundedSender<Delivery>,
    delivery_rx: UnboundedReceiver<Delivery>,
    detail_scroll: u16,
    /// Inner width of the detail pane at the last draw; 0 before the first.
    detail_width: Cell<u16>,
    scroll_step: u16,
    status: Option<StatusMessage>,
    open_url: UrlOpener,
}

impl App {
    pub fn new(
        source: Arc<dyn ProjectSource>,
        mover: Arc<dyn CardMover>,
        query: ProjectQuery,
        policy: RefreshPolicy,
    ) -> Self {
        let (delivery_tx, delivery_rx) = mpsc::unbounded_channel();
        Self {
            should_quit: false,
            state: BoardState::new(policy),
            query,
            source,
            mover,
            delivery_tx,
            delivery_rx,
            detail_scroll: 0,
            detail_width: Cell::new(0),
            scroll_step: DEFAULT_SCROLL_STEP,
            status: None,
            open_url: Box::new(|url: &str| open::that(url)),
        }
    }

    pub fn with_scroll_step(mut self, step: u16) -> Self {
        self.scroll_step = step.max(1);
        self
    }

    pub fn with_url_opener(mut self, opener: UrlOpener) -> Self {
        self.open_url = opener;
        self
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn query(&self) -> &ProjectQuery {
        &self.query
    }

    pub fn detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Detail pane content for the selected card; empty when nothing is
    /// selected.
    pub fn detail_lines(&self) -> Vec<Line<'static>> {
        self.state
            .selected_card()
            .map(|card| render_markdown(&card.detail_markdown()))
            .unwrap_or_default()
    }

    pub(crate) fn set_detail_width(&self, width: u16) {
        self.detail_width.set(width);
    }

    /// Rows the detail content occupies once wrapped to the pane. Before the
    /// pane has been drawn this is the logical line count.
    pub fn detail_rows(&self) -> usize {
        let lines = self.detail_lines();
        match self.detail_width.get() {
            0 => lines.len(),
            width => Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .line_count(width),
        }
    }

    fn detail_key(&self) -> DetailKey {
        let position = self.state.focus_state().position()?;
        let card = self.state.selected_card();
        Some((
            position,
            card.map_or(RemoteId::Unresolved, |c| c.id),
            card.map(|c| c.display_text()).unwrap_or_default(),
        ))
    }

    fn sync_detail(&mut self, before: DetailKey) {
        if self.detail_key() != before {
            self.detail_scroll = 0;
        }
    }

    /// Start a background fetch of the project.
    pub fn request_refresh(&mut self) {
        let seq = self.state.request_refresh();
        tracing::info!("Refreshing {} (#{})", self.query.slug(), seq);
        spawn_fetch(
            Arc::clone(&self.source),
            self.query.clone(),
            seq,
            self.delivery_tx.clone(),
        );
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(action) = action_for(&key) {
            self.handle_action(action);
        }
    }

    pub fn handle_action(&mut self, action: KeybindingAction) {
        let before = self.detail_key();
        match action {
            KeybindingAction::NavigateLeft => {
                self.state.move_focus_left();
            }
            KeybindingAction::NavigateRight => {
                self.state.move_focus_right();
            }
            KeybindingAction::NavigateDown => {
                self.state.select_next_card();
            }
            KeybindingAction::NavigateUp => {
                self.state.select_prev_card();
            }
            KeybindingAction::ScrollDetailDown => self.scroll_detail_down(),
            KeybindingAction::ScrollDetailUp => {
                self.detail_scroll = self.detail_scroll.saturating_sub(self.scroll_step);
            }
            KeybindingAction::Refresh => {
                self.state.clear_failed_markers();
                self.status = None;
                self.request_refresh();
            }
            KeybindingAction::OpenProject => self.open_project(),
            KeybindingAction::OpenCard => self.open_card(),
            KeybindingAction::MoveCardForward => self.move_card(MoveDirection::Forward),
            KeybindingAction::MoveCardBackward => self.move_card(MoveDirection::Backward),
            KeybindingAction::Quit => self.quit(),
        }
        self.sync_detail(before);
    }

    fn scroll_detail_down(&mut self) {
        let max = self.detail_rows().saturating_sub(1);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        self.detail_scroll = self.detail_scroll.saturating_add(self.scroll_step).min(max);
    }

    fn open_project(&mut self) {
        let Some(url) = self.state.board().map(|b| b.project_url.clone()) else {
            self.status = Some(StatusMessage::error("No project loaded"));
            return;
        };
        self.open(&url);
    }

    fn open_card(&mut self) {
        let Some(url) = self.state.selected_card().map(|c| c.url.clone()) else {
            self.status = Some(StatusMessage::error("No card selected"));
            return;
        };
        if url.is_empty() {
            self.status = Some(StatusMessage::error("Card has no URL"));
            return;
        }
        self.open(&url);
    }

    fn open(&mut self, url: &str) {
        tracing::debug!("Opening {}", url);
        if let Err(e) = (self.open_url)(url) {
            tracing::error!("Failed to open {}: {}", url, e);
            self.status = Some(StatusMessage::error(format!("Failed to open {url}: {e}")));
        }
    }

    fn move_card(&mut self, direction: MoveDirection) {
        match self.state.start_move(direction) {
            Ok(request) => {
                let destination = self
                    .state
                    .board()
                    .and_then(|b| b.column(request.destination_column))
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                self.status = Some(StatusMessage::info(format!("Moving card to {destination}")));
                spawn_move(Arc::clone(&self.mover), request, self.delivery_tx.clone());
            }
            Err(rejected) => {
                tracing::warn!("Move rejected: {}", rejected);
                self.status = Some(StatusMessage::error(format!("Cannot move card: {rejected}")));
            }
        }
    }

    /// Wait for the next background delivery.
    pub async fn next_delivery(&mut self) -> Option<Delivery> {
        self.delivery_rx.recv().await
    }

    pub fn apply_delivery(&mut self, delivery: Delivery) {
        let before = self.detail_key();
        match delivery {
            Delivery::Fetched { seq, result } => {
                if self.state.apply_fetch(seq, result) == DeliveryOutcome::Dropped {
                    tracing::warn!("Ignored out-of-date refresh #{}", seq);
                } else if self.status.as_ref().is_some_and(|s| !s.is_error) {
                    self.status = None;
                }
            }
            Delivery::Moved(result) => self.apply_move_result(result),
        }
        self.sync_detail(before);
    }

    fn apply_move_result(&mut self, result: MoveResult) {
        self.state.apply_move_result(&result);
        match &result.outcome {
            MoveOutcome::Succeeded => {
                tracing::info!("Moved card {}", result.card_id);
                self.status = Some(StatusMessage::info("Card moved"));
            }
            MoveOutcome::Failed(message) => {
                tracing::error!("Moving card {} failed: {}", result.card_id, message);
                self.status = Some(StatusMessage::error(format!("Move failed: {message}")));
            }
        }
        self.request_refresh();
    }

    pub async fn run(&mut self) -> BoardResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();
        self.request_refresh();

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> BoardResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            tokio::select! {
                event = events.next() => match event {
                    Some(Event::Key(key)) => self.handle_key_event(key),
                    Some(Event::Resize) | Some(Event::Tick) => {}
                    None => break,
                },
                delivery = self.delivery_rx.recv() => {
                    if let Some(delivery) = delivery {
                        self.apply_delivery(delivery);
                    }
                }
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
