//! Title strip with the theme toggle hint.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::routes::Screen;
use crate::theme::Palette;

/// Height of the topbar including its bottom border.
pub const HEIGHT: u16 = 2;

pub struct Topbar<'a> {
    palette: &'a Palette,
    dark: bool,
    screen: Screen,
}

impl<'a> Topbar<'a> {
    pub fn new(palette: &'a Palette, dark: bool, screen: Screen) -> Self {
        Self {
            palette,
            dark,
            screen,
        }
    }
}

impl Widget for Topbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(self.palette.topbar_border))
            .style(
                Style::default()
                    .bg(self.palette.topbar_background)
                    .fg(self.palette.topbar_foreground),
            );

        let mode = if self.dark { "Dark" } else { "Light" };
        let title = Line::from(vec![
            Span::styled(
                " Admin Dashboard",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" · {}", self.screen.title())),
        ]);
        let hints = Line::from(vec![
            Span::raw(format!("{mode} mode ")),
            Span::styled("· [t] Toggle Theme · [q] Quit ", Style::default()),
        ])
        .right_aligned();

        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(title).render(inner, buf);
        Paragraph::new(hints).render(inner, buf);
    }
}
