use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use kubepick_config::{KeyChord, KeybindingsConfig};

use crate::command::Command;

mod commands;
mod parsing;

use commands::{command_description, command_from_name};
use parsing::{chord_event, normalize_key_event};

pub struct KeybindingDispatcher {
    bindings: HashMap<KeyEvent, Command>,
    reverse: Vec<(String, String, String)>,
    search: bool,
}

impl KeybindingDispatcher {
    pub fn from_config(config: &KeybindingsConfig, search: bool) -> Self {
        let mut bindings = HashMap::new();
        let mut reverse = Vec::new();
        for (name, key_str) in &config.bindings {
            let Some(cmd) = command_from_name(name) else {
                tracing::warn!("unknown picker command in keybindings: {name}");
                continue;
            };
            let Ok(chord) = KeyChord::parse(key_str) else { continue };
            let key = chord_event(chord);
            // First binding for a key wins, matching the collision warning.
            if bindings.contains_key(&key) {
                continue;
            }
            bindings.insert(key, cmd);
            reverse.push((name.clone(), chord.to_string(), command_description(name)));
        }

        Self { bindings, reverse, search }
    }

    pub fn dispatch(&self, key: KeyEvent) -> Option<Command> {
        let key = normalize_key_event(key);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Cancel);
        }

        if let Some(cmd) = self.bindings.get(&key) {
            return Some(*cmd);
        }

        if !self.search {
            return None;
        }
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Some(Command::FilterInput(c))
            }
            KeyCode::Backspace => Some(Command::FilterBackspace),
            _ => None,
        }
    }

    /// `(key, description)` pairs for the hint line, in config order.
    pub fn hints(&self) -> Vec<(String, String)> {
        self.reverse
            .iter()
            .filter(|(name, _, _)| self.search || name != "clear_filter")
            .map(|(_, shown, desc)| (shown.clone(), desc.clone()))
            .collect()
    }
}
