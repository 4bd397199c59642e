//! Not-found page for unmatched routes.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::routes::NAV_ROUTES;
use crate::theme::Palette;

pub fn render(area: Rect, buf: &mut Buffer, palette: &Palette, path: &str) {
    let body = super::heading("Page Not Found", area, buf, palette);
    if body.height == 0 {
        return;
    }

    let known: Vec<&str> = NAV_ROUTES.iter().map(|r| r.path).collect();
    let lines = vec![
        Line::from(Span::styled(
            format!("No view is registered for \"{path}\"."),
            Style::default().fg(palette.status_error),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("Known routes: {}", known.join("  ")),
            Style::default().fg(palette.app_foreground),
        )),
    ];

    Paragraph::new(lines).render(body, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;

    #[test]
    fn test_not_found_names_the_path() {
        let palette = Palette::light();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 8));
        render(buf.area, &mut buf, &palette, "/foo");

        let text = buffer_text(&buf);
        assert!(text.contains("Page Not Found"));
        assert!(text.contains("/foo"));
        assert!(text.contains("/users"));
        assert!(text.contains("/revenue"));
    }
}
