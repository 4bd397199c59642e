//! Bordered card showing a labeled value.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::data::SummaryCard;
use crate::theme::Palette;

/// Pure, stateless card widget: a rounded border around a title line and
/// a value line.
pub struct Card<'a> {
    title: &'a str,
    value: &'a str,
    palette: &'a Palette,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str, value: &'a str, palette: &'a Palette) -> Self {
        Self {
            title,
            value,
            palette,
        }
    }

    pub fn from_summary(summary: &SummaryCard, palette: &'a Palette) -> Self {
        Self::new(summary.title, summary.value, palette)
    }

    /// Height needed to show both lines inside the border.
    pub const HEIGHT: u16 = 4;
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.palette.card_border))
            .style(Style::default().bg(self.palette.card_background));

        let text = Text::from(vec![
            Line::from(Span::styled(
                self.title,
                Style::default().fg(self.palette.card_title),
            )),
            Line::from(Span::styled(
                self.value,
                Style::default()
                    .fg(self.palette.card_value)
                    .add_modifier(Modifier::BOLD),
            )),
        ]);

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
