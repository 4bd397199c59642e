//! Shared table styling for the Users and Revenue views.

use ratatui::{
    layout::Constraint,
    style::{Modifier, Style},
    widgets::{Block, Cell, Row, Table},
};

use crate::theme::Palette;

/// Build a bordered table with a bold header row and evenly split columns.
pub fn data_table<'a>(
    columns: &'a [&'static str],
    rows: Vec<Row<'a>>,
    palette: &Palette,
) -> Table<'a> {
    let header = Row::new(columns.iter().map(|c| Cell::from(*c))).style(
        Style::default()
            .fg(palette.table_header)
            .add_modifier(Modifier::BOLD),
    );

    let widths = vec![Constraint::Ratio(1, columns.len() as u32); columns.len()];

    Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .style(Style::default().fg(palette.table_row))
        .block(Block::bordered().border_style(Style::default().fg(palette.table_border)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    #[test]
    fn test_table_renders_header_and_rows() {
        let palette = Palette::light();
        let rows = vec![Row::new(["a1", "b1"]), Row::new(["a2", "b2"])];
        let table = data_table(&["Alpha", "Beta"], rows, &palette);

        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 6));
        Widget::render(table, buf.area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Alpha"));
        assert!(text.contains("Beta"));
        assert!(text.contains("a1"));
        assert!(text.contains("b2"));
    }
}
