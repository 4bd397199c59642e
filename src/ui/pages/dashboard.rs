//! Dashboard page: a row of summary cards.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use crate::data::SummaryCard;
use crate::theme::Palette;
use crate::ui::Card;

const CARD_WIDTH: u16 = 18;

pub fn render(area: Rect, buf: &mut Buffer, palette: &Palette, cards: &[SummaryCard]) {
    let body = super::heading("Dashboard", area, buf, palette);
    if body.height < Card::HEIGHT {
        return;
    }

    let row = Rect {
        height: Card::HEIGHT,
        ..body
    };
    let mut constraints = vec![Constraint::Length(CARD_WIDTH); cards.len()];
    constraints.push(Constraint::Min(0));
    let slots = Layout::horizontal(constraints).spacing(2).split(row);

    for (card, slot) in cards.iter().zip(slots.iter()) {
        Card::from_summary(card, palette).render(*slot, buf);
    }
}
