//! Page views, one per route.
//!
//! Each page is a pure render function taking the palette and its fixture
//! data as parameters. No page holds state, touches a clock, or renders
//! anything but its own content.

pub mod dashboard;
pub mod not_found;
pub mod revenue;
pub mod users;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Palette;

/// Render a page heading on the first row of `area` and return the rest.
fn heading(title: &str, area: Rect, buf: &mut Buffer, palette: &Palette) -> Rect {
    if area.height == 0 {
        return area;
    }

    let line = Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(palette.app_foreground)
            .add_modifier(Modifier::BOLD),
    ));
    let row = Rect { height: 1, ..area };
    Paragraph::new(line).render(row, buf);

    Rect {
        y: area.y + 2,
        height: area.height.saturating_sub(2),
        ..area
    }
}
