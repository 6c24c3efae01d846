use skillswap::app::App;
use skillswap::store::DomainStore;
use skillswap::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("skillswap {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;
    init_tracing();

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(DomainStore::with_seed_offers());
    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;
    result
}

/// Initialize tracing when `SKILLSWAP_LOG` is set.
///
/// Logs go to a file because the TUI owns stdout.
fn init_tracing() {
    if std::env::var_os("SKILLSWAP_LOG").is_none() {
        return;
    }
    if let Ok(file) = std::fs::File::create("skillswap.log") {
        let filter =
            EnvFilter::try_from_env("SKILLSWAP_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .try_init();
    }
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Async event stream for keyboard input
    let mut event_stream = EventStream::new();

    loop {
        // Draw the UI only when needed (dirty flag)
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        // 16ms tick drives status-message expiry
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(width, height) => {
                            app.update_terminal_dimensions(width, height);
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if app.handle_key(key) {
                                app.mark_dirty();
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
