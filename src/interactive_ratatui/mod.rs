use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::browser;
use crate::config::Config;
use crate::search::SearchClient;

mod application;
pub mod constants;
mod domain;
pub mod ui;


use self::application::search_service::SearchService;
use self::constants::{
    DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, EXIT_PROMPT, MESSAGE_CLEAR_DELAY_MS,
};
use self::domain::models::{Mode, SearchOutcome};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    search_service: SearchService,
    runtime: tokio::runtime::Runtime,
    outcome_sender: Sender<SearchOutcome>,
    outcome_receiver: Receiver<SearchOutcome>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
    should_quit: bool,
}

impl InteractiveSearch {
    pub fn new(config: &Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("genesis-search")
            .build()
            .context("Failed to start async runtime")?;
        let client = SearchClient::new(config).context("Failed to create search client")?;
        let search_service = SearchService::new(client);
        let (outcome_sender, outcome_receiver) = mpsc::channel();

        Ok(Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            search_service,
            runtime,
            outcome_sender,
            outcome_receiver,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
            should_quit: false,
        })
    }

    /// Run the TUI until the user quits. A non-blank `initial_query` is
    /// submitted right away.
    pub fn run(&mut self, initial_query: Option<&str>) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        if let Some(query) = initial_query {
            self.submit_initial_query(query);
        }

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    /// Pre-fill the draft and submit it through the input control, as if
    /// typed and entered.
    fn submit_initial_query(&mut self, query: &str) {
        let search_bar = self.renderer.get_search_bar_mut();
        search_bar.set_draft(query.to_string());
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        if let Some(msg) = search_bar.handle_key(enter) {
            self.handle_message(msg);
        }
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            self.drain_outcomes();

            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Check for scheduled message clear
            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                    self.execute_command(Command::ClearMessage);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_input(key);
                    }
                }
            }

            self.handle_message(Message::Tick);

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            self.handle_message(Message::SearchCompleted(outcome));
        }
    }

    fn handle_input(&mut self, key: KeyEvent) {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.should_quit = true;
                    return;
                }
            }
            // First press or timeout expired
            self.last_ctrl_c_press = Some(Instant::now());
            self.execute_command(Command::ShowMessage(EXIT_PROMPT.to_string()));
            self.execute_command(Command::ScheduleClearMessage(
                DOUBLE_CTRL_C_TIMEOUT_SECS * 1000,
            ));
            return;
        }

        let message = match self.state.mode {
            Mode::Search => self.handle_search_mode_input(key),
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        // Result keys only reach the list while a response is on screen
        let has_results = self.state.status.response().is_some();
        let draft_is_empty = self.renderer.get_search_bar_mut().draft().is_empty();
        match key.code {
            // Esc clears a typed draft first, then quits
            KeyCode::Esc if !draft_is_empty => {
                self.renderer.get_search_bar_mut().set_draft(String::new());
                None
            }
            KeyCode::Esc => Some(Message::Quit),
            // `?` is a normal query character once the draft has text
            KeyCode::Char('?') if draft_is_empty => Some(Message::ShowHelp),
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown if has_results => {
                self.renderer.get_result_list_mut().handle_key(key)
            }
            // Home/End edit a non-empty draft; Ctrl+Home/End always jump
            KeyCode::Home | KeyCode::End if has_results && (draft_is_empty || ctrl) => {
                self.renderer.get_result_list_mut().handle_key(key)
            }
            KeyCode::Char('o' | 'p' | 'n') if ctrl && has_results => {
                self.renderer.get_result_list_mut().handle_key(key)
            }
            _ => {
                let search_bar = self.renderer.get_search_bar_mut();
                search_bar.set_disabled(self.state.is_loading());
                search_bar.handle_key(key)
            }
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.renderer.sync(&self.state);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ExecuteSearch(ticket) => {
                info!(id = ticket.id, query = %ticket.query, "submitting search");
                self.search_service.dispatch(
                    self.runtime.handle(),
                    ticket,
                    self.outcome_sender.clone(),
                );
            }
            Command::OpenUrl(link) => {
                let status = match browser::open_detached(&link) {
                    Ok(()) => format!("Opened in browser: {}", link.url),
                    Err(e) => {
                        warn!(url = %link.url, "failed to open link: {e:#}");
                        format!("Failed to open link: {e}")
                    }
                };
                self.execute_command(Command::ShowMessage(status));
                self.execute_command(Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS));
            }
            Command::ShowMessage(msg) => {
                self.state.ui.message = Some(msg);
            }
            Command::ClearMessage => {
                self.state.ui.message = None;
                self.message_timer = None;
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }
}
