//! Users page: a single table of user rows.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Cell, Row, Widget},
};

use crate::data::{UserRow, USER_COLUMNS};
use crate::theme::Palette;
use crate::ui::table::data_table;

pub fn render(area: Rect, buf: &mut Buffer, palette: &Palette, users: &[UserRow]) {
    let body = super::heading("Users", area, buf, palette);
    if body.height == 0 {
        return;
    }

    let rows: Vec<Row> = users
        .iter()
        .map(|user| {
            Row::new(vec![
                Cell::from(user.name),
                Cell::from(user.email),
                Cell::from(user.role),
                status_cell(user.status, palette),
            ])
        })
        .collect();

    let table = data_table(&USER_COLUMNS, rows, palette);
    Widget::render(table, body, buf);
}

fn status_cell<'a>(status: &'a str, palette: &Palette) -> Cell<'a> {
    let color = if status == "Active" {
        palette.status_ok
    } else {
        palette.table_row
    };
    Cell::from(status).style(Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::USER_ROWS;
    use crate::ui::buffer_text;

    #[test]
    fn test_users_table_shows_the_single_row() {
        let palette = Palette::light();
        let mut buf = Buffer::empty(Rect::new(0, 0, 90, 12));
        render(buf.area, &mut buf, &palette, &USER_ROWS);

        let text = buffer_text(&buf);
        assert!(text.contains("Users"));
        assert!(text.contains("Name"));
        assert!(text.contains("Email"));
        assert!(text.contains("Rahul"));
        assert!(text.contains("rahul@gmail.com"));
        assert!(text.contains("Active"));
    }

    #[test]
    fn test_users_page_shows_no_dashboard_or_revenue_content() {
        let palette = Palette::light();
        let mut buf = Buffer::empty(Rect::new(0, 0, 90, 12));
        render(buf.area, &mut buf, &palette, &USER_ROWS);

        let text = buffer_text(&buf);
        assert!(!text.contains("1200"));
        assert!(!text.contains("Salaar"));
        assert!(!text.contains("Total Revenue"));
    }
}
