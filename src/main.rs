// Storefront: in-memory inventory and shopping cart with a terminal UI

mod cli;

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use storefront::inventory::Catalog;
use storefront::recommend::RecommendationGraph;
use storefront::shop::Shop;
use storefront::timing::{FileSink, NoopSink, TimingSink};
use storefront::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered trace lines are flushed on exit
    let _trace_guard = match &cli.trace_file {
        Some(path) => Some(init_tracing(path)?),
        None => None,
    };

    let timing: Box<dyn TimingSink> = if cli.no_timing_log {
        Box::new(NoopSink)
    } else {
        let sink = FileSink::new(&cli.timing_log);
        info!(path = %sink.path().display(), "timing log");
        Box::new(sink)
    };

    let shop = if cli.empty {
        Shop::new(Catalog::with_sink(timing), RecommendationGraph::new())
    } else {
        Shop::seeded(timing)
    };
    info!(products = shop.catalog().len(), "starting storefront");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(shop);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    println!("Thank you for using the E-Commerce System!");
    Ok(())
}

/// Install a file-backed tracing subscriber; the TUI owns stdout and stderr
fn init_tracing(path: &Path) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| format!("trace file '{}' has no file name", path.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok(guard)
}
