//! TUI Application state and main event loop.

use std::io;
use std::panic;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use tui_input::{Input, InputRequest};

use camq_core::{Answerer, Error, QueryPanel, Submission};

use crate::config::Config;

use super::events::{key_to_action, InputAction, PanelEvent};
use super::ui;
use super::widgets::response_area::content_rows;

/// TUI Application state
pub struct TuiApp {
    // Display state
    pub title: String,
    pub endpoint: String,

    // Query, response and loading flag
    pub panel: QueryPanel,

    // Editable line; its value is mirrored into `panel` after every edit
    pub input: Input,

    // Scroll state, in wrapped screen rows
    pub scroll_offset: u16,
    pub content_height: u16,
    pub viewport_width: u16,
    pub viewport_height: u16,

    pub should_quit: bool,
}

impl TuiApp {
    pub fn new(title: &str, endpoint: &str) -> Self {
        Self {
            title: title.to_string(),
            endpoint: endpoint.to_string(),
            panel: QueryPanel::new(),
            input: Input::default(),
            scroll_offset: 0,
            content_height: 0,
            viewport_width: 0,
            viewport_height: 0,
            should_quit: false,
        }
    }

    /// Handle a settlement from the request task
    pub fn handle_panel_event(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::Settled(outcome) => {
                self.panel.settle(outcome);
                self.content_height = content_rows(self.panel.response(), self.viewport_width);
                self.scroll_offset = 0;
            }
        }
    }

    /// Try to submit the current input. `None` while loading or when blank.
    pub fn submit(&mut self) -> Option<Submission> {
        let submission = self.panel.on_submit()?;
        self.content_height = 0;
        self.scroll_offset = 0;
        Some(submission)
    }

    /// Handle input action
    pub fn handle_input_action(&mut self, action: InputAction) {
        let request = match action {
            InputAction::Char(c) => Some(InputRequest::InsertChar(c)),
            InputAction::Backspace => Some(InputRequest::DeletePrevChar),
            InputAction::Delete => Some(InputRequest::DeleteNextChar),
            InputAction::Left => Some(InputRequest::GoToPrevChar),
            InputAction::Right => Some(InputRequest::GoToNextChar),
            InputAction::Home => Some(InputRequest::GoToStart),
            InputAction::End => Some(InputRequest::GoToEnd),
            InputAction::DeleteWord => Some(InputRequest::DeletePrevWord),
            InputAction::ClearInput => {
                self.input.reset();
                self.panel.on_input_change(String::new());
                None
            }
            InputAction::ScrollUp => {
                self.scroll_up(1);
                None
            }
            InputAction::ScrollDown => {
                self.scroll_down(1);
                None
            }
            InputAction::PageUp => {
                self.page_up();
                None
            }
            InputAction::PageDown => {
                self.page_down();
                None
            }
            InputAction::ScrollToTop => {
                self.scroll_offset = 0;
                None
            }
            InputAction::ScrollToBottom => {
                self.scroll_offset = self.max_scroll();
                None
            }
            InputAction::Quit => {
                self.should_quit = true;
                None
            }
            // Handled by the event loop, which owns the request channel
            InputAction::Submit => None,
        };

        if let Some(request) = request {
            if self.input.handle(request).is_some() {
                self.panel.on_input_change(self.input.value());
            }
        }
    }

    /// Size the response viewport for a frame of `area` and re-measure the
    /// wrapped response, which changes with the width.
    pub fn update_viewport(&mut self, area: Rect) {
        let response = ui::create_layout(area, self).response;
        // Response block has a border on each side
        self.viewport_width = response.width.saturating_sub(2);
        self.viewport_height = response.height.saturating_sub(2);
        self.content_height = content_rows(self.panel.response(), self.viewport_width);
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Scroll up by amount
    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Scroll down by amount
    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll_offset = (self.scroll_offset + amount).min(self.max_scroll());
    }

    /// Page up
    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.saturating_sub(2).max(1));
    }

    /// Page down
    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.saturating_sub(2).max(1));
    }
}

/// Ask on a background task and post exactly one settlement to `tx`,
/// even if the request task itself dies.
pub fn spawn_request(
    answerer: Arc<dyn Answerer>,
    submission: Submission,
    tx: mpsc::Sender<PanelEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let query = submission.into_query();
        let request = tokio::spawn(async move { answerer.ask(&query).await });

        let outcome = match request.await {
            Ok(outcome) => outcome,
            Err(e) => Err(Error::Unknown(format!("Request task failed: {}", e))),
        };

        let _ = tx.send(PanelEvent::Settled(outcome)).await;
    })
}

/// Set up panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
        original_hook(panic_info);
    }));
}

/// Run the TUI until the user quits
pub async fn run_tui(config: &Config, answerer: Arc<dyn Answerer>) -> Result<()> {
    setup_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = TuiApp::new(&config.title, answerer.endpoint());
    info!(endpoint = %app.endpoint, "TUI started");

    let result = event_loop(&mut terminal, &mut app, answerer).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
    answerer: Arc<dyn Answerer>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::channel::<PanelEvent>(8);

    let tick_rate = Duration::from_millis(33);

    loop {
        terminal.draw(|f| {
            app.update_viewport(f.area());
            ui::render(app, f);
        })?;

        while let Ok(event) = event_rx.try_recv() {
            app.handle_panel_event(event);
        }

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key_to_action(key) {
                    Some(InputAction::Submit) => {
                        if let Some(submission) = app.submit() {
                            debug!(query_len = submission.query().len(), "Submitting question");
                            spawn_request(Arc::clone(&answerer), submission, event_tx.clone());
                        }
                    }
                    Some(action) => app.handle_input_action(action),
                    None => {}
                }
            }
        }

        if app.should_quit {
            if app.panel.is_loading() {
                debug!("Quitting with a request still in flight");
            }
            break;
        }
    }

    Ok(())
}
