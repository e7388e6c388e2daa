use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::api::Dog;
use crate::dashboard::notify::ToastLevel;
use crate::dashboard::{CardView, DashboardView, MatchView};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions, CARD_HEIGHT, CARD_WIDTH};
use crate::ui::theme::Theme;

const EMPTY_RESULT: &str = "Sorry! No dogs were found that match your search criteria.";
const MODAL_WIDTH: u16 = 44;
const MODAL_HEIGHT: u16 = 10;

/// One cell of the card grid.
enum Slot<'v, 'a> {
    Card { index: usize, card: &'v CardView<'a> },
    Skeleton,
}

pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();
    let (header_area, body, footer_area) = layout_regions(area);
    let view = app.dashboard().view();

    let header = Header {
        env_label: view.options.env_label,
        search: view.search,
        focus: app.focus(),
        selected: view.selected,
    };
    frame.render_widget(header.widget(theme), header_area);

    draw_grid(frame, body, app, &view, theme);

    let footer = Footer {
        back_to_top: app.show_back_to_top(),
    };
    frame.render_widget(footer.widget(footer_area, theme), footer_area);

    draw_match_modal(frame, area, &view.match_view, theme);
    draw_toast(frame, body, &view, theme);
}

fn draw_grid(frame: &mut Frame, body: Rect, app: &App, view: &DashboardView<'_>, theme: &Theme) {
    if view.empty_result {
        let message = Paragraph::new(EMPTY_RESULT)
            .style(Style::default().fg(theme.text))
            .alignment(Alignment::Center);
        frame.render_widget(message, first_line(body));
        return;
    }

    let grid = app.grid();
    let mut slots: Vec<Slot<'_, '_>> = view
        .visible_cards()
        .enumerate()
        .map(|(index, card)| Slot::Card { index, card })
        .collect();
    slots.extend((0..view.loading_placeholders).map(|_| Slot::Skeleton));
    if view.sentinel_row {
        let padded = grid.rows_for(slots.len()) * grid.columns;
        slots.extend((slots.len()..padded + grid.columns).map(|_| Slot::Skeleton));
    }

    for row in app.scroll()..app.scroll() + grid.visible_rows {
        for col in 0..grid.columns {
            let Some(slot) = slots.get(row * grid.columns + col) else {
                break;
            };
            let rect = Rect {
                x: body.x + col as u16 * CARD_WIDTH,
                y: body.y + (row - app.scroll()) as u16 * CARD_HEIGHT,
                width: CARD_WIDTH.min(body.width),
                height: CARD_HEIGHT.min(body.height),
            };
            match slot {
                Slot::Card { index, card } => {
                    render_card(frame, rect, card, *index == app.cursor(), theme)
                }
                Slot::Skeleton => render_skeleton(frame, rect, theme),
            }
        }
    }

    if let Some(error) = view.error {
        let line = Paragraph::new(format!("Could not load dogs: {} (r to retry)", error))
            .style(Style::default().fg(theme.error));
        let bottom = Rect {
            y: body.y + body.height.saturating_sub(1),
            ..first_line(body)
        };
        frame.render_widget(Clear, bottom);
        frame.render_widget(line, bottom);
    }
}

fn first_line(area: Rect) -> Rect {
    Rect {
        height: area.height.min(1),
        ..area
    }
}

fn dog_lines(dog: &Dog, theme: &Theme) -> Vec<Line<'static>> {
    let text = Style::default().fg(theme.text);
    let muted = Style::default().fg(theme.muted);
    vec![
        Line::from(Span::styled(
            dog.breed.clone(),
            text.add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Age: ", muted),
            Span::styled(dog.age.to_string(), text),
        ]),
        Line::from(vec![
            Span::styled("Zip: ", muted),
            Span::styled(dog.zip_code.clone(), text),
        ]),
        Line::from(Span::styled(dog.img.clone(), muted.add_modifier(Modifier::DIM))),
    ]
}

fn render_card(frame: &mut Frame, area: Rect, card: &CardView<'_>, focused: bool, theme: &Theme) {
    let (mark, mark_style) = if card.checked {
        ("[x]", Style::default().fg(theme.checked))
    } else {
        ("[ ]", Style::default().fg(theme.muted))
    };
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };
    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::styled(
            card.dog.name.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let mut paragraph = Paragraph::new(dog_lines(card.dog, theme)).block(block);
    if focused {
        paragraph = paragraph.style(Style::default().bg(theme.highlight_bg));
    }
    frame.render_widget(paragraph, area);
}

fn render_skeleton(frame: &mut Frame, area: Rect, theme: &Theme) {
    let bar = Style::default().fg(theme.skeleton);
    let lines = vec![
        Line::from(Span::styled("█".repeat(20), bar)),
        Line::from(Span::styled("█".repeat(12), bar)),
        Line::from(Span::styled("█".repeat(12), bar)),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.skeleton));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_match_modal(frame: &mut Frame, area: Rect, match_view: &MatchView<'_>, theme: &Theme) {
    let body = match match_view {
        MatchView::Hidden => return,
        MatchView::Loading => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Finding your match...",
                Style::default().fg(theme.accent),
            )),
        ],
        MatchView::Found(dog) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "Match found !",
                    Style::default().fg(theme.checked).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    dog.name.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )),
            ];
            lines.extend(dog_lines(dog, theme));
            lines
        }
        MatchView::NotFound => vec![
            Line::from(""),
            Line::from(Span::styled(
                "No Match found !",
                Style::default().fg(theme.text),
            )),
        ],
    };

    let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
    frame.render_widget(Clear, modal);
    let block = Block::default()
        .title(" Your match ")
        .title_alignment(Alignment::Center)
        .title_bottom(Line::from(" Esc: Close ").alignment(Alignment::Center))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text));
    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, modal);
}

fn draw_toast(frame: &mut Frame, body: Rect, view: &DashboardView<'_>, theme: &Theme) {
    let Some(toast) = view.toast else {
        return;
    };
    let color = match toast.level {
        ToastLevel::Error => theme.error,
        ToastLevel::Info => theme.accent,
    };
    let width = (toast.message.chars().count() as u16 + 4).min(body.width);
    let height = 3.min(body.height);
    let area = Rect {
        x: body.x + body.width.saturating_sub(width),
        y: body.y + body.height.saturating_sub(height),
        width,
        height,
    };
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(toast.message.clone())
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, area);
}
