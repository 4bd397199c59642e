//! TUI widgets and page rendering (ratatui).

pub mod card;
pub mod layout;
pub mod pages;
pub mod sidebar;
pub mod table;
pub mod topbar;

pub use card::Card;
pub use sidebar::Sidebar;
pub use topbar::Topbar;

/// Collect a buffer's visible text, row by row. Test helper for asserting
/// on rendered content.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
