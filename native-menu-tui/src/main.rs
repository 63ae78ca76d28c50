//! Terminal host for the native menu overlay.
//!
//! Stands in for the game: a status screen shows the state the trainer menu
//! edits, and the menu opens on top of it with F4 or `m`. Arrow keys (or
//! `hjkl`) move, Enter selects, Backspace/Esc goes back, `q` quits.

mod demo;
mod host;
mod widget;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use native_menu::{MenuConfig, MenuController};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use demo::DemoState;
use host::TerminalHost;
use widget::{prompt_hints, MenuWidget};

/// Host frame length.
const FRAME: Duration = Duration::from_millis(33);

#[derive(Parser)]
#[command(name = "native-menu-tui", about = "In-game menu overlay running in a terminal")]
struct Cli {
    /// JSON file with menu settings. Falls back to NATIVE_MENU_* env variables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rows shown per page, overriding the config.
    #[arg(long)]
    visible_options: Option<usize>,

    /// Directory for the daily rolling log file.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "native-menu-tui");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = match &cli.config {
        Some(path) => MenuConfig::from_json_file(path)?,
        None => MenuConfig::from_env(),
    };
    if let Some(visible) = cli.visible_options {
        config.default_visible_options = visible;
    }
    tracing::info!(?config, "Menu host starting up");

    let state = DemoState::default();
    state.health.set(35);
    let mut menu = MenuController::new(config);
    demo::build_menu(&mut menu, &state);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut menu, &state);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("Menu host shutting down");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    menu: &mut MenuController,
    state: &DemoState,
) -> anyhow::Result<()> {
    let mut host = TerminalHost::new();
    menu.register_prompts(&mut host);
    let mut whistles = 0u32;

    loop {
        host.begin_frame();
        let deadline = Instant::now() + FRAME;
        while let Some(timeout) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && key.code == KeyCode::Char('q') {
                    return Ok(());
                }
                host.handle_key(key);
            }
        }

        if let Some(event) = menu.update(&mut host) {
            tracing::debug!(?event, "Menu event");
            demo::handle_event(menu, state, event);
        }

        if host.game_keys().contains(&KeyCode::Char('w')) {
            whistles += 1;
            tracing::info!(whistles, "Whistled for horse");
        }

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(f.area());

            let status = vec![
                Line::from(format!("Health: {}", state.health.get())),
                Line::from(format!(
                    "God mode: {}   Infinite ammo: {}",
                    on_off(state.god_mode.get()),
                    on_off(state.infinite_ammo.get())
                )),
                Line::from(format!(
                    "Weather: {}   Time: {:02}:00",
                    state.weather_name(),
                    state.hour.get()
                )),
                Line::from(format!("Horses: {}", state.horses.borrow().join(", "))),
                Line::from(format!("Whistles: {}", whistles)),
                Line::from(""),
                Line::from(format!("Last sound: {:?}", host.last_sound())),
            ];
            f.render_widget(
                Paragraph::new(status).block(Block::default().title(" World ").borders(Borders::ALL)),
                chunks[0],
            );

            if let Some(frame) = host.frame() {
                f.render_widget(MenuWidget { frame }, chunks[0]);
            }

            let hints = if menu.is_open() {
                prompt_hints(&host.visible_prompts())
            } else {
                "F4/m Open menu  w Whistle  q Quit".to_string()
            };
            f.render_widget(
                Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
                chunks[1],
            );
        })?;
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "On"
    } else {
        "Off"
    }
}
