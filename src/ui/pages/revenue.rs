//! Revenue page: two summary blocks above a payments table.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Cell, Row, Widget},
};

use crate::data::{RevenueRow, SummaryCard, REVENUE_COLUMNS};
use crate::theme::Palette;
use crate::ui::table::data_table;
use crate::ui::Card;

const SUMMARY_WIDTH: u16 = 24;

pub fn render(
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
    summaries: &[SummaryCard],
    rows: &[RevenueRow],
) {
    let body = super::heading("Revenue", area, buf, palette);
    if body.height == 0 {
        return;
    }

    let [summary_area, _, table_area] = Layout::vertical([
        Constraint::Length(Card::HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(body);

    let mut constraints = vec![Constraint::Length(SUMMARY_WIDTH); summaries.len()];
    constraints.push(Constraint::Min(0));
    let slots = Layout::horizontal(constraints).spacing(2).split(summary_area);
    for (summary, slot) in summaries.iter().zip(slots.iter()) {
        Card::from_summary(summary, palette).render(*slot, buf);
    }

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.date),
                Cell::from(row.item),
                Cell::from(row.amount),
                status_cell(row.status, palette),
            ])
        })
        .collect();

    let table = data_table(&REVENUE_COLUMNS, table_rows, palette);
    Widget::render(table, table_area, buf);
}

fn status_cell<'a>(status: &'a str, palette: &Palette) -> Cell<'a> {
    let color = if status == "Paid" {
        palette.status_ok
    } else {
        palette.status_error
    };
    Cell::from(status).style(Style::default().fg(color))
}
