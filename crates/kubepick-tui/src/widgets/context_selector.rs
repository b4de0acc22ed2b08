use kubepick_core::ContextDetails;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};

use crate::picker::PickerState;
use crate::theme::Theme;

const DETAILS_ROWS: u16 = 6;

pub struct ContextSelectorWidget<'a> {
    pub state: &'a PickerState,
    pub prompt: &'a str,
    pub active: Option<usize>,
    pub details: Option<&'a ContextDetails>,
    pub show_details: bool,
    pub hints: &'a [(String, String)],
    pub theme: &'a Theme,
}

impl<'a> ContextSelectorWidget<'a> {
    /// Rows needed for prompt, list, optional details and the hint line.
    pub fn height(page_size: usize, show_details: bool) -> u16 {
        let list = u16::try_from(page_size).unwrap_or(u16::MAX).max(1);
        let details = if show_details { DETAILS_ROWS } else { 0 };
        list.saturating_add(2).saturating_add(details)
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = self.theme;
        let list_rows = u16::try_from(self.state.page_size()).unwrap_or(u16::MAX);
        let details_rows = if self.show_details { DETAILS_ROWS } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(list_rows),
                Constraint::Length(details_rows),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(Paragraph::new(self.prompt_line()), chunks[0]);

        if self.state.is_empty() {
            let empty = Paragraph::new("  No contexts found in kubeconfig").style(t.text_dim);
            frame.render_widget(empty, chunks[1]);
        } else if self.state.match_count() == 0 {
            let empty = Paragraph::new("  No matching contexts").style(t.text_dim);
            frame.render_widget(empty, chunks[1]);
        } else {
            let items: Vec<ListItem> = self
                .state
                .visible()
                .into_iter()
                .map(|(index, label, cursor)| {
                    let base = if self.active == Some(index) { t.active } else { Style::default().fg(t.fg) };
                    if cursor {
                        ListItem::new(format!("> {label}")).style(t.selection.add_modifier(Modifier::BOLD))
                    } else {
                        ListItem::new(format!("  {label}")).style(base)
                    }
                })
                .collect();
            frame.render_widget(List::new(items), chunks[1]);
        }

        if self.show_details {
            self.render_details(frame, chunks[2]);
        }

        // Enter does nothing until a row is under the cursor.
        let mut hints = String::new();
        if self.state.selected().is_none() && self.state.match_count() > 0 {
            hints.push_str(" nothing selected |");
        }
        hints.extend(self.hints.iter().map(|(key, desc)| format!(" {key}:{desc} ")));
        if self.state.search_enabled() {
            hints.push_str("  type to filter");
        }
        if self.state.has_more_above() || self.state.has_more_below() {
            hints.push_str(&format!("  ({} contexts)", self.state.match_count()));
        }
        frame.render_widget(Paragraph::new(hints).style(t.text_dim), chunks[3]);
    }

    fn prompt_line(&self) -> Line<'a> {
        let t = self.theme;
        let mut spans = vec![Span::styled(format!("{}?", self.prompt), t.label)];
        if self.state.search_enabled() {
            let filter = self.state.filter();
            if filter.is_empty() {
                spans.push(Span::styled(" Type to filter...", t.text_dim));
            } else {
                spans.push(Span::styled(format!(" > {filter}"), Style::default().fg(t.accent)));
            }
        }
        Line::from(spans)
    }

    fn render_details(&self, frame: &mut Frame, area: Rect) {
        let t = self.theme;
        let mut lines = vec![Line::styled("--------- Context ----------", t.border)];
        match self.details {
            Some(details) => {
                for (key, value) in details.rows().into_iter().skip(1) {
                    lines.push(Line::from(vec![
                        Span::styled(format!("{key:>10}: "), t.text_dim),
                        Span::styled(value.to_string(), Style::default().fg(t.fg)),
                    ]));
                }
            }
            None => lines.push(Line::styled("  nothing highlighted", t.text_dim)),
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}
