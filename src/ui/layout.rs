use ratatui::layout::{Constraint, Layout, Rect};

/// Width of one card cell, borders included.
pub const CARD_WIDTH: u16 = 36;
/// Height of one card cell, borders included.
pub const CARD_HEIGHT: u16 = 6;

/// Title plus search line, between top and bottom borders.
const HEADER_HEIGHT: u16 = 4;
/// One line of key hints inside a border.
const FOOTER_HEIGHT: u16 = 3;

/// Split the screen into header, card grid and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Card grid geometry for a body area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub columns: usize,
    /// Card rows that fit in the viewport.
    pub visible_rows: usize,
}

impl GridGeometry {
    pub fn for_body(width: u16, height: u16) -> Self {
        Self {
            columns: (width / CARD_WIDTH).max(1) as usize,
            visible_rows: (height / CARD_HEIGHT).max(1) as usize,
        }
    }

    /// Rows needed for `slots` cells.
    pub fn rows_for(&self, slots: usize) -> usize {
        slots.div_ceil(self.columns)
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }
}

/// A `width` x `height` rect centred in `area`, clipped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_sits_between_header_and_footer() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 30));
        assert_eq!(header.height, HEADER_HEIGHT);
        assert_eq!(footer.height, FOOTER_HEIGHT);
        assert_eq!(body.y, HEADER_HEIGHT);
        assert_eq!(body.height, 30 - HEADER_HEIGHT - FOOTER_HEIGHT);
        assert_eq!(body_rect(Rect::new(0, 0, 80, 30)), body);
    }

    #[test]
    fn centered_rect_clips_to_area() {
        let area = Rect::new(10, 5, 40, 8);
        assert_eq!(centered_rect(20, 4, area), Rect::new(20, 7, 20, 4));
        assert_eq!(centered_rect(100, 100, area), area);
    }

    #[test]
    fn narrow_terminal_still_has_one_column() {
        let grid = GridGeometry::for_body(20, 3);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.visible_rows, 1);
    }

    #[test]
    fn rows_round_up() {
        let grid = GridGeometry::for_body(CARD_WIDTH * 3, CARD_HEIGHT * 4);
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.visible_rows, 4);
        assert_eq!(grid.rows_for(7), 3);
        assert_eq!(grid.rows_for(0), 0);
        assert_eq!(grid.row_of(5), 1);
    }
}
