//! admin-tui - terminal admin dashboard
//!
//! Three routed static views (Dashboard, Users, Revenue) plus a light/dark
//! theme toggle, rendered with ratatui.

mod app;
mod config;
mod data;
mod routes;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use app::App;
use config::Config;
use theme::ThemeMode;

#[derive(Parser)]
#[command(name = "admin-tui")]
#[command(about = "Terminal admin dashboard", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Theme to start in (overrides config)
    #[arg(short, long, value_enum)]
    theme: Option<ThemeArg>,

    /// Route to open at startup, e.g. /users
    #[arg(short, long, value_name = "PATH")]
    route: Option<String>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl ThemeArg {
    fn mode(self) -> ThemeMode {
        match self {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

fn main() -> Result<()> {
    // TUI apps can't log to stdout, so we write to a file
    // (use RUST_LOG to control the level)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("admin-tui.log")
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(theme) = cli.theme {
        config.theme = theme.mode();
    }
    if let Some(route) = cli.route {
        config.start_route = route;
    }

    tracing::info!(
        theme = ?config.theme,
        route = %config.start_route,
        "starting admin-tui"
    );

    let mut app = App::new(config);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut app);

    // Restore the terminal even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("admin-tui exited");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick = Duration::from_millis(app.config.tick_rate_ms);

    while app.running {
        terminal
            .draw(|frame| ui::layout::render(frame.area(), frame.buffer_mut(), app))
            .context("Failed to draw frame")?;

        if event::poll(tick).context("Failed to poll events")? {
            match event::read().context("Failed to read event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key.code, key.modifiers);
                }
                // Resizes are picked up by the next draw
                _ => {}
            }
        }
    }

    Ok(())
}
