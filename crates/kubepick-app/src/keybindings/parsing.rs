use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use kubepick_config::{Key, KeyChord};

/// The terminal event a configured chord matches once normalized.
pub(super) fn chord_event(chord: KeyChord) -> KeyEvent {
    let code = match chord.key {
        Key::Char(c) => KeyCode::Char(c),
        Key::Up => KeyCode::Up,
        Key::Down => KeyCode::Down,
        Key::Left => KeyCode::Left,
        Key::Right => KeyCode::Right,
        Key::Home => KeyCode::Home,
        Key::End => KeyCode::End,
        Key::PageUp => KeyCode::PageUp,
        Key::PageDown => KeyCode::PageDown,
        Key::Enter => KeyCode::Enter,
        Key::Esc => KeyCode::Esc,
        Key::Tab => KeyCode::Tab,
        Key::Backspace => KeyCode::Backspace,
        Key::Delete => KeyCode::Delete,
        Key::F(n) => KeyCode::F(n),
    };
    let mut modifiers = KeyModifiers::NONE;
    if chord.ctrl {
        modifiers |= KeyModifiers::CONTROL;
    }
    if chord.alt {
        modifiers |= KeyModifiers::ALT;
    }
    KeyEvent::new(code, modifiers)
}

/// Puts a terminal event in the same shape as `chord_event`: kind and state
/// dropped, Shift already carried by the character, letters lowercase under
/// Ctrl or Alt.
pub(super) fn normalize_key_event(key: KeyEvent) -> KeyEvent {
    match key.code {
        KeyCode::Char(c) => {
            let modifiers = key.modifiers.difference(KeyModifiers::SHIFT);
            let c = if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                c.to_ascii_lowercase()
            } else {
                c
            };
            KeyEvent::new(KeyCode::Char(c), modifiers)
        }
        code => KeyEvent::new(code, key.modifiers),
    }
}
