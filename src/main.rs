//! sairyware - terminal portfolio
//!
//! A TUI for browsing the SairyWare portfolio.
//!
//! Features:
//! - Four tabs: Home, Projects, Scripts, Snippet
//! - Light/dark theme, persisted across runs
//! - Copy the featured snippet to the clipboard
//!
//! Usage: sairyware

mod app;
mod config;
mod content;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("sairyware {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Logging is opt-in; the TUI stays silent unless RUST_LOG is set
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_app() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"sairyware - terminal portfolio

USAGE:
    sairyware [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -v, --version    Print version information

KEYBINDINGS:
    1-4              Switch tabs
    Tab              Next tab
    j/k              Navigate / scroll
    t                Toggle light/dark theme
    c                Copy snippet (Snippet tab)
    q                Quit

TABS:
    [1] Home         About SairyWare
    [2] Projects     Project showcase
    [3] Scripts      Downloadable scripts
    [4] Snippet      Featured Lua snippet

CONFIG:
    ~/.config/sairyware/config.toml
"#
    );
}

fn run_app() -> Result<()> {
    // Restore the persisted theme; storage problems fall back to dark
    let config = config::Config::load();
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Expire the copy acknowledgment and flash messages
        app.tick();

        // Poll for events with timeout (for timer updates)
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }
}
