use std::io::{self, Stdout};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::{Terminal, TerminalOptions, Viewport};

use kubepick_config::AppConfig;
use kubepick_core::{describe_contexts, ContextDetails, ContextPicker, KubeConfig, SwitchError};
use kubepick_tui::{ContextSelectorWidget, PickerState, Theme};

use crate::command::Command;
use crate::keybindings::KeybindingDispatcher;

/// Inline list picker drawn below the cursor, the way a shell prompt would be.
pub struct TerminalPicker {
    prompt: String,
    page_size: usize,
    search: bool,
    show_details: bool,
    theme: Theme,
    dispatcher: KeybindingDispatcher,
    details: Vec<ContextDetails>,
}

impl TerminalPicker {
    pub fn new(config: &AppConfig) -> Self {
        let theme = if config.features.color { Theme::from_config(&config.theme) } else { Theme::plain() };
        Self {
            prompt: config.general.prompt.clone(),
            page_size: usize::from(config.general.page_size()),
            search: config.features.search,
            show_details: config.features.details,
            theme,
            dispatcher: KeybindingDispatcher::from_config(&config.keybindings, config.features.search),
            details: Vec::new(),
        }
    }

    fn run(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut PickerState,
        active: Option<usize>,
    ) -> Result<usize, SwitchError> {
        let hints = self.dispatcher.hints();
        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                let view = &*state;
                let widget = ContextSelectorWidget {
                    state: view,
                    prompt: &self.prompt,
                    active,
                    details: view.selected().and_then(|i| self.details.get(i)),
                    show_details: self.show_details,
                    hints: &hints,
                    theme: &self.theme,
                };
                widget.render(frame, area);
            })?;

            let Event::Key(key) = event::read()? else { continue };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let Some(cmd) = self.dispatcher.dispatch(key) else { continue };
            if let Some(outcome) = apply_command(state, cmd) {
                return outcome;
            }
        }
    }
}

impl ContextPicker for TerminalPicker {
    fn prepare(&mut self, config: &KubeConfig) {
        if self.show_details {
            self.details = describe_contexts(config);
        }
    }

    fn select(&mut self, labels: &[String], initial: Option<usize>) -> Result<usize, SwitchError> {
        let mut state = PickerState::new(labels.to_vec(), initial, self.search, self.page_size);
        let height = ContextSelectorWidget::height(self.page_size, self.show_details);

        terminal::enable_raw_mode()?;
        let _guard = RawModeGuard;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::with_options(backend, TerminalOptions { viewport: Viewport::Inline(height) })?;

        let outcome = self.run(&mut terminal, &mut state, initial);
        terminal.clear()?;
        outcome
    }
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Applies one command to the picker. Returns `Some` once the user has
/// chosen or cancelled. Confirm with no row under the cursor is ignored; the
/// hint line shows "nothing selected" in that state.
pub fn apply_command(state: &mut PickerState, cmd: Command) -> Option<Result<usize, SwitchError>> {
    match cmd {
        Command::SelectPrev => state.previous(),
        Command::SelectNext => state.next(),
        Command::Confirm => return state.selected().map(Ok),
        Command::Cancel => return Some(Err(SwitchError::SelectionCancelled)),
        Command::ClearFilter => state.clear_filter(),
        Command::FilterInput(c) => state.push_char(c),
        Command::FilterBackspace => state.backspace(),
    }
    None
}
