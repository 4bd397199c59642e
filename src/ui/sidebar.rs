//! Static navigation sidebar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::routes::{Screen, NAV_ROUTES};
use crate::theme::Palette;

/// Width of the sidebar column in characters.
pub const WIDTH: u16 = 22;

/// Fixed navigation list with the active route highlighted. Holds no
/// state of its own.
pub struct Sidebar<'a> {
    palette: &'a Palette,
    active: Screen,
}

impl<'a> Sidebar<'a> {
    pub fn new(palette: &'a Palette, active: Screen) -> Self {
        Self { palette, active }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let background = Block::new().style(
            Style::default()
                .bg(self.palette.sidebar_background)
                .fg(self.palette.sidebar_text),
        );
        background.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                " Admin Panel",
                Style::default()
                    .fg(self.palette.sidebar_title)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        for (index, route) in NAV_ROUTES.iter().enumerate() {
            let is_active = self.active.nav_index() == Some(index);
            let style = if is_active {
                Style::default()
                    .fg(self.palette.sidebar_active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.palette.sidebar_text)
            };
            let marker = if is_active { "▸" } else { " " };
            lines.push(Line::from(vec![
                Span::styled(format!(" {marker} "), style),
                Span::styled(format!("[{}] {}", index + 1, route.label), style),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
