use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;
use tracing::info;

use folio_core::gallery::load_items;
use folio_core::perf::{EnvironmentReport, SystemProbe};
use folio_core::AppConfig;
use folio_tui::{
    app::App,
    assets::{spawn_asset_probe, AssetUpdate},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    ui,
};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub async fn run(config: &AppConfig, content: &Path) -> Result<()> {
    let items = load_items(content)
        .await
        .with_context(|| format!("failed to load {}", content.display()))?;
    info!(count = items.len(), path = %content.display(), "Starting gallery");

    let probe = SystemProbe::from_config(&config.performance);
    let report = EnvironmentReport::collect(&probe);
    report.log();

    // Image references resolve against the content file's directory
    let asset_base = content
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut app = App::new(items, config, &probe, report.mode);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("folio"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, config, asset_base);

    app.teardown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Term,
    app: &mut App,
    config: &AppConfig,
    asset_base: PathBuf,
) -> Result<()> {
    let event_handler = EventHandler::new(config.ui.tick_rate_ms);

    // Channel for background asset probes
    let (asset_tx, mut asset_rx) = mpsc::unbounded_channel::<AssetUpdate>();

    let size = terminal.size()?;
    app.set_viewport(Rect::new(0, 0, size.width, size.height));

    loop {
        // Process any completed probes (non-blocking)
        while let Ok(update) = asset_rx.try_recv() {
            app.apply_asset_update(update);
        }

        // Probe assets of slides that just became visible
        for (index, image) in app.take_revealed() {
            spawn_asset_probe(index, image, asset_base.clone(), asset_tx.clone());
        }

        app.on_frame();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Sleep at frame rate while animating, otherwise until the next deadline
        if let Some(event) = event_handler.next_within(app.poll_timeout())? {
            match event {
                AppEvent::Key(key) => app.apply(handle_key_event(key)),
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse),
                AppEvent::Resize(width, height) => app.on_resize(width, height),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
