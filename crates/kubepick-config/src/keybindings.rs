use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Picker command name to key string, e.g. `select = "enter"`.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct KeybindingsConfig {
    pub bindings: IndexMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Esc,
    Tab,
    Backspace,
    Delete,
    F(u8),
}

/// A parsed key string. Shift is folded into the character (`shift+k` is
/// `K`), and letters under Ctrl or Alt are always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: Key,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyChord {
    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("empty key string".to_string());
        }
        // A lone "+" is the plus key, not a separator.
        let (modifiers, last) = match trimmed.rsplit_once('+') {
            Some((modifiers, last)) if !last.is_empty() => (Some(modifiers), last),
            _ => (None, trimmed),
        };

        let (mut ctrl, mut alt, mut shift) = (false, false, false);
        for modifier in modifiers.into_iter().flat_map(|m| m.split('+')) {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" => ctrl = true,
                "alt" => alt = true,
                "shift" => shift = true,
                other => return Err(format!("unknown modifier: {other}")),
            }
        }

        let key = match last.to_ascii_lowercase().as_str() {
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" => Key::PageUp,
            "pagedown" => Key::PageDown,
            "enter" => Key::Enter,
            "esc" => Key::Esc,
            "tab" => Key::Tab,
            "backspace" => Key::Backspace,
            "delete" => Key::Delete,
            "space" => Key::Char(' '),
            _ if last.chars().count() == 1 => Key::Char(last.chars().next().unwrap_or(' ')),
            f if f.starts_with('f') => f[1..]
                .parse::<u8>()
                .ok()
                .filter(|n| (1..=24).contains(n))
                .map(Key::F)
                .ok_or_else(|| format!("invalid function key: {last}"))?,
            _ => return Err(format!("unrecognized key: {last}")),
        };

        let key = match key {
            Key::Char(c) if ctrl || alt => Key::Char(c.to_ascii_lowercase()),
            Key::Char(c) if shift => Key::Char(c.to_ascii_uppercase()),
            Key::Char(_) => key,
            _ if shift => return Err(format!("shift only combines with character keys: {trimmed}")),
            _ => key,
        };
        Ok(Self { key, ctrl, alt })
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        match self.key {
            Key::Char(' ') => f.write_str("Space"),
            Key::Char(c) if self.ctrl || self.alt => write!(f, "{}", c.to_ascii_uppercase()),
            Key::Char(c) => write!(f, "{c}"),
            Key::F(n) => write!(f, "F{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

pub fn validate_keybindings(config: &KeybindingsConfig) -> Vec<(String, String)> {
    config
        .bindings
        .iter()
        .filter_map(|(name, key_str)| KeyChord::parse(key_str).err().map(|e| (name.clone(), e)))
        .collect()
}

/// Returns `(key, first command, second command)` for every key bound twice.
/// Strings that do not parse are left to `validate_keybindings`.
pub fn check_collisions(config: &KeybindingsConfig) -> Vec<(String, String, String)> {
    let mut seen: HashMap<KeyChord, &str> = HashMap::new();
    let mut collisions = Vec::new();
    for (name, key_str) in &config.bindings {
        let Ok(chord) = KeyChord::parse(key_str) else { continue };
        match seen.get(&chord) {
            Some(prev) => collisions.push((key_str.clone(), prev.to_string(), name.clone())),
            None => {
                seen.insert(chord, name);
            }
        }
    }
    collisions
}
