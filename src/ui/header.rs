use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Focus;
use crate::ui::theme::Theme;

/// Title, search box and selection summary.
pub struct Header<'a> {
    pub env_label: &'a str,
    pub search: &'a str,
    pub focus: Focus,
    pub selected: usize,
}

impl Header<'_> {
    pub fn widget(&self, theme: &Theme) -> Paragraph<'static> {
        let text_style = Style::default().fg(theme.text);
        let muted = Style::default().fg(theme.muted);
        let title = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                format!("Find a pet ({})", self.env_label),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
        ]);

        let search_style = if self.focus == Focus::Search {
            Style::default().fg(theme.text).bg(theme.highlight_bg)
        } else {
            text_style
        };
        let cursor = if self.focus == Focus::Search { "▏" } else { "" };
        let search = if self.search.is_empty() && self.focus != Focus::Search {
            Span::styled("type / to search name, breed, age or zip", muted)
        } else {
            Span::styled(format!("{}{}", self.search, cursor), search_style)
        };

        let controls = Line::from(vec![
            Span::styled("  Search: ", muted),
            search,
            Span::styled("  │  ", muted),
            Span::styled(format!("{} selected", self.selected), text_style),
            Span::styled("  │  ", muted),
            Span::styled("c: Clear  m: Match", muted),
        ]);

        Paragraph::new(vec![title, controls]).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        )
    }
}
