//! Root application state and key dispatch.
//!
//! `App` owns the only two runtime-mutable values in the system: the theme
//! state and the current screen. All mutation happens synchronously in
//! `handle_key` before the next draw.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::config::Config;
use crate::routes::{Screen, NAV_ROUTES};
use crate::theme::ThemeState;

pub struct App {
    pub config: Config,
    pub theme: ThemeState,
    pub screen: Screen,
    /// Current path, kept for the not-found diagnostic.
    pub path: String,
    pub running: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let theme = ThemeState::new(config.theme);
        let path = config.start_route.clone();
        let screen = Screen::resolve(&path);
        Self {
            config,
            theme,
            screen,
            path,
            running: true,
        }
    }

    /// Navigate to a path. Unknown paths select the not-found screen.
    pub fn navigate(&mut self, path: &str) {
        self.screen = Screen::resolve(path);
        self.path = path.to_string();
        tracing::debug!(path, screen = ?self.screen, "navigate");
    }

    fn select(&mut self, screen: Screen) {
        if let Some(path) = screen.path() {
            self.navigate(path);
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        tracing::debug!(dark = self.theme.dark(), "theme toggled");
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.navigate(NAV_ROUTES[index].path);
            }
            KeyCode::Tab | KeyCode::Down => self.select(self.screen.next_nav()),
            KeyCode::BackTab | KeyCode::Up => self.select(self.screen.prev_nav()),
            _ => {}
        }
    }
}
