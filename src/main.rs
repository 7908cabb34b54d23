//! marketfeed: a live-refreshing marketplace feed for the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  PollMsg   ┌──────────┐ recompose() ┌──────────┐
//! │  poll.rs │ ─────────► │  app.rs  │ ──────────► │  feed/   │
//! │ (thread) │  (channel) │ (state)  │ ◄────────── │ (compose)│
//! └──────────┘            └──────────┘             └──────────┘
//!      ▲                       │ ▲ draw()
//!      │ load()                ▼ │ handle_key_event()
//! ┌──────────┐            ┌──────────┐  ┌──────────┐
//! │ source/  │            │  ui.rs   │  │ input.rs │
//! └──────────┘            └──────────┘  └──────────┘
//! ```
//!
//! * **`feed`**: the composer (flattening, shuffling, sorting and
//!   promotional interleaving).  Pure functions, no I/O.
//! * **`source`**: the `DataSource` trait, file and HTTP sources, and the
//!   `Catalog` that loads the five collections.
//! * **`poll`**: background thread that reloads the catalog on a timer.
//! * **`app`**: owns all application state and decides when to recompose.
//! * **`ui`** / **`input`**: rendering and key bindings.
//! * **`config`**, **`logging`**, **`theme`**, **`error`**: command line,
//!   log file, persisted theme, error types.
//! * **`main`**: wires everything together: parse args, set up logging and
//!   the terminal, and run the event loop.

mod app;
mod config;
mod error;
mod feed;
mod input;
mod logging;
mod poll;
mod source;
mod theme;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use config::Config;
use feed::Interleaver;
use poll::PollMsg;
use source::Catalog;
use theme::ThemeStore;

// ---------------------------------------------------------------------------
// RAII terminal guard: cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Restore the terminal before the panic message is printed.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let config = Config::parse();
    let _log_guard = logging::init_file_logger(&config.log_file, config.verbose)?;
    install_panic_hook();

    tracing::info!(data = %config.data, refresh_secs = config.refresh_secs, "starting marketfeed");

    // -- data sources & background refresh -----------------------------------
    let catalog = Catalog::from_base(&config.data)
        .with_context(|| format!("cannot use data source {}", config.data))?;
    let rx = poll::spawn(catalog, config.refresh_interval());

    // -- state ---------------------------------------------------------------
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut app = App::new(config.sort_mode(), Interleaver::new(config.leftover_policy()), rng)
        .with_theme_store(ThemeStore::new(&config.theme_file));

    // -- terminal setup (RAII: Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;

    // -- main event loop -----------------------------------------------------
    // ~10 fps: drain poller messages, render, then wait up to one tick for
    // a key.
    let tick_rate = Duration::from_millis(100);

    loop {
        while let Ok(msg) = rx.try_recv() {
            match msg {
                PollMsg::Snapshot(report) => app.apply_snapshot(report),
            }
        }

        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
            }
        }

        if app.quit {
            break;
        }
    }

    tracing::info!("exiting");
    Ok(())
}
