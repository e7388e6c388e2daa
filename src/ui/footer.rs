use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::Theme;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ←↑↓→: Move │ Space: Favourite │ /: Search │ r: Retry │ Ctrl+R: Reload │ q: Quit";

pub struct Footer {
    pub back_to_top: bool,
}

impl Footer {
    pub fn widget(&self, area: Rect, theme: &Theme) -> Paragraph<'static> {
        let back = if self.back_to_top { "↑ Top: Home " } else { "" };
        let version = format!("{}v{} ", back, VERSION);

        // Pad by char count, not byte count
        let hints_width = HINTS.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(theme.text).add_modifier(Modifier::DIM);
        let version_style = if self.back_to_top {
            Style::default().fg(theme.accent)
        } else {
            text_style
        };

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, version_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border)),
            )
    }
}
