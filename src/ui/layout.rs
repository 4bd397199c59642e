//! Top-level layout: sidebar, topbar, and the routed content region.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, Widget},
};

use crate::app::App;
use crate::data;
use crate::routes::Screen;
use crate::ui::{pages, sidebar, topbar, Sidebar, Topbar};

/// Render the whole frame. Sidebar and topbar are always present; the
/// content region shows whichever page the current route selected.
pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    let palette = app.theme.palette();

    Block::new()
        .style(
            Style::default()
                .bg(palette.app_background)
                .fg(palette.app_foreground),
        )
        .render(area, buf);

    let [sidebar_area, main_area] =
        Layout::horizontal([Constraint::Length(sidebar::WIDTH), Constraint::Min(0)]).areas(area);
    let [topbar_area, content_area] =
        Layout::vertical([Constraint::Length(topbar::HEIGHT), Constraint::Min(0)]).areas(main_area);

    Sidebar::new(&palette, app.screen).render(sidebar_area, buf);
    Topbar::new(&palette, app.theme.dark(), app.screen).render(topbar_area, buf);

    let content = content_area.inner(Margin::new(2, 1));
    match app.screen {
        Screen::Dashboard => {
            pages::dashboard::render(content, buf, &palette, &data::DASHBOARD_CARDS)
        }
        Screen::Users => pages::users::render(content, buf, &palette, &data::USER_ROWS),
        Screen::Revenue => pages::revenue::render(
            content,
            buf,
            &palette,
            &data::REVENUE_SUMMARY,
            &data::REVENUE_ROWS,
        ),
        Screen::NotFound => pages::not_found::render(content, buf, &palette, &app.path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::buffer_text;

    fn render_at(route: &str) -> String {
        let config = Config {
            start_route: route.to_string(),
            ..Config::default()
        };
        let app = App::new(config);
        let mut buf = Buffer::empty(Rect::new(0, 0, 110, 24));
        render(buf.area, &mut buf, &app);
        buffer_text(&buf)
    }

    #[test]
    fn test_root_route_shows_only_the_dashboard() {
        let text = render_at("/");
        assert!(text.contains("Admin Panel"));
        assert!(text.contains("Admin Dashboard"));
        assert!(text.contains("1200"));
        assert!(text.contains("$75,000"));
        assert!(text.contains("320"));
        assert!(!text.contains("rahul@gmail.com"));
        assert!(!text.contains("Salaar"));
    }

    #[test]
    fn test_users_route_shows_only_the_users_table() {
        let text = render_at("/users");
        assert!(text.contains("Rahul"));
        assert!(text.contains("rahul@gmail.com"));
        assert!(!text.contains("1200"));
        assert!(!text.contains("Pushpa 2"));
    }

    #[test]
    fn test_revenue_route_shows_only_the_revenue_view() {
        let text = render_at("/revenue");
        assert!(text.contains("Total Revenue"));
        assert!(text.contains("Today's Revenue"));
        assert!(text.contains("Pushpa 2"));
        assert!(text.contains("Salaar"));
        assert!(!text.contains("rahul@gmail.com"));
    }

    #[test]
    fn test_unknown_route_renders_not_found_without_panicking() {
        let text = render_at("/foo");
        assert!(text.contains("Page Not Found"));
        assert!(text.contains("/foo"));
        // chrome stays up regardless of route
        assert!(text.contains("Admin Panel"));
        assert!(text.contains("Admin Dashboard"));
    }

    #[test]
    fn test_theme_toggle_recolors_the_container() {
        let mut app = App::new(Config::default());
        let area = Rect::new(0, 0, 110, 24);

        let mut light = Buffer::empty(area);
        render(area, &mut light, &app);

        app.toggle_theme();
        let mut dark = Buffer::empty(area);
        render(area, &mut dark, &app);

        let corner = (area.right() - 1, area.bottom() - 1);
        assert_ne!(light[corner].bg, dark[corner].bg);
        assert_eq!(
            light[corner].bg,
            crate::theme::Palette::light().app_background
        );
        assert_eq!(dark[corner].bg, crate::theme::Palette::dark().app_background);
    }
}
