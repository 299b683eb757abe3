use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;

use crate::config::Config;
use crate::core::{parse_command, Action, Command, Module, NotifyLevel, View, ViewSelector};
use crate::export;
use crate::modules::beds::BedsPanel;
use crate::modules::inventory::InventoryPanel;
use crate::modules::queue::QueuePanel;

const STATUS_TTL: Duration = Duration::from_secs(3);

/// What the bottom line is currently editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Command,
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: NotifyLevel,
    pub since: Instant,
}

#[derive(Debug)]
pub struct App {
    /// Active view and the (inert) search text
    pub selector: ViewSelector,
    pub queue: QueuePanel,
    pub beds: BedsPanel,
    pub inventory: InventoryPanel,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    /// Header title
    pub title: String,
    pub export_dir: PathBuf,
    pub help_open: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(title: impl Into<String>, export_dir: PathBuf) -> Self {
        Self {
            selector: ViewSelector::new(),
            queue: QueuePanel::new(),
            beds: BedsPanel::new(),
            inventory: InventoryPanel::new(),
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            title: title.into(),
            export_dir,
            help_open: false,
            should_quit: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.title(), config.export_dir())
    }

    pub fn active_view(&self) -> View {
        self.selector.active()
    }

    pub fn select_view(&mut self, view: View) {
        if view != self.selector.active() {
            tracing::debug!(from = ?self.selector.active(), to = ?view, "view changed");
        }
        self.selector.select_view(view);
    }

    pub fn next_view(&mut self) {
        self.select_view(self.active_view().next());
    }

    pub fn prev_view(&mut self) {
        self.select_view(self.active_view().prev());
    }

    pub fn search_text(&self) -> &str {
        self.selector.search_text()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.selector.set_search_text(text);
    }

    pub fn push_search_char(&mut self, ch: char) {
        let mut text = self.search_text().to_string();
        text.push(ch);
        self.set_search_text(text);
    }

    pub fn pop_search_char(&mut self) {
        let mut text = self.search_text().to_string();
        text.pop();
        self.set_search_text(text);
    }

    /// The panel drawing the active view
    pub fn active_panel_mut(&mut self) -> &mut dyn Module {
        match self.selector.active() {
            View::Queue => &mut self.queue,
            View::Beds => &mut self.beds,
            View::Inventory => &mut self.inventory,
        }
    }

    pub fn handle_panel_key(&mut self, key: KeyEvent) {
        let action = self.active_panel_mut().handle_key(key);
        self.apply_action(action);
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: NotifyLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, NotifyLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    /// Leave search mode; the text stays in the box
    pub fn exit_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }

        let cmd = parse_command(&input);
        let action = self.execute_command(&cmd);
        self.exit_command();
        self.apply_action(action);
    }

    /// Execute a parsed command
    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Show(view) => Action::Select(*view),
            Command::Export(format) => Action::Export(*format),
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(s) => {
                Action::Notify(format!("Unknown command: {}", s), NotifyLevel::Warn)
            }
        }
    }

    /// Apply an action returned by a command or panel
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Select(view) => self.select_view(view),
            Action::Export(format) => {
                let outcome = export::export_action(self.active_view(), format, &self.export_dir);
                self.apply_action(outcome);
            }
            Action::Notify(msg, level) => self.set_status(msg, level),
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::Quit => self.should_quit = true,
        }
    }
}
