use kubepick_config::ThemeConfig;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub fg: Color,
    pub selection: Style,
    pub active: Style,
    pub border: Style,
    pub text_dim: Style,
    pub label: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let accent = parse_color_or_default(&config.accent);
        let fg = parse_color_or_default(&config.fg);
        let selection_bg = parse_color_or_default(&config.selection_bg);
        let selection_fg = parse_color_or_default(&config.selection_fg);
        let active = parse_color_or_default(&config.active);
        let border = parse_color_or_default(&config.border);
        let text_dim = parse_color_or_default(&config.text_dim);
        let label = parse_color_or_default(&config.label);

        Self {
            accent,
            fg,
            selection: Style::default().fg(selection_fg).bg(selection_bg),
            active: Style::default().fg(active).add_modifier(Modifier::BOLD),
            border: Style::default().fg(border),
            text_dim: Style::default().fg(text_dim),
            label: Style::default().fg(label).add_modifier(Modifier::BOLD),
        }
    }

    /// Uncolored theme for `color = false`; the cursor row stays bold so the
    /// selection is still visible.
    pub fn plain() -> Self {
        Self {
            accent: Color::Reset,
            fg: Color::Reset,
            selection: Style::default().add_modifier(Modifier::BOLD),
            active: Style::default(),
            border: Style::default(),
            text_dim: Style::default(),
            label: Style::default(),
        }
    }
}

fn parse_color_or_default(s: &str) -> Color {
    parse_color(s).unwrap_or(Color::Reset)
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("default", Color::Reset),
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("gray", Color::Gray),
    ("grey", Color::Gray),
    ("darkgray", Color::DarkGray),
    ("darkgrey", Color::DarkGray),
    ("lightred", Color::LightRed),
    ("lightgreen", Color::LightGreen),
    ("lightyellow", Color::LightYellow),
    ("lightblue", Color::LightBlue),
    ("lightmagenta", Color::LightMagenta),
    ("lightcyan", Color::LightCyan),
    ("white", Color::White),
];

/// Accepts `#rrggbb`, `rgb(r,g,b)`, a color name (case, `_` and `-` are
/// ignored, so `light_cyan` works) or `default` for the terminal's own color.
pub fn parse_color(s: &str) -> anyhow::Result<Color> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("invalid hex color \"{s}\": expected #rrggbb");
        }
        let value = u32::from_str_radix(hex, 16)?;
        let [_, r, g, b] = value.to_be_bytes();
        return Ok(Color::Rgb(r, g, b));
    }

    if let Some(inner) = s.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
        let channels: Vec<u8> = inner
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .map_err(|e| anyhow::anyhow!("invalid rgb color \"{s}\": {e}"))?;
        return match channels[..] {
            [r, g, b] => Ok(Color::Rgb(r, g, b)),
            _ => anyhow::bail!("invalid rgb color \"{s}\": expected three channels"),
        };
    }

    let name: String = s.chars().filter(|c| !matches!(c, '_' | '-')).collect::<String>().to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, color)| *color)
        .ok_or_else(|| anyhow::anyhow!("unknown color \"{s}\""))
}
