use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use ratatui::layout::Rect;

use crate::api::ApiClient;
use crate::config::ConfigStore;
use crate::dashboard::Dashboard;
use crate::ui::app::App;
use crate::ui::effects::EffectRunner;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::Theme;

/// Idle wake-up for toast expiry. Scroll trigger deadlines wake the loop sooner.
const TICK_RATE: Duration = Duration::from_millis(250);

pub fn run(store: ConfigStore) -> anyhow::Result<()> {
    let config = store.get();
    let key = config.query_key()?;
    let client = Arc::new(ApiClient::new(&config.api).context("Failed to build HTTP client")?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let theme = Theme::for_name(config.display.theme);
    let dashboard = Dashboard::new(key, config.query.page_size, &config.display);
    let mut app = App::new(store, dashboard);

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);
    let runner = EffectRunner::new(
        runtime.handle().clone(),
        client.clone(),
        client,
        events.sender(),
    );

    tracing::info!(base_url = %config.api.base_url, "Dashboard started");
    runner.run_all(app.start());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        resize(&mut app, cols, rows, Instant::now());
    }

    loop {
        terminal.draw(|frame| draw(frame, &app, &theme))?;
        if app.should_quit() {
            break;
        }

        let wait = wait_timeout(app.dashboard().next_deadline(), Instant::now());
        let event = events.next(wait);
        let now = Instant::now();
        let effects = match event {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, now),
            Ok(AppEvent::Mouse(mouse)) => {
                handle_mouse(&mut app, mouse, now);
                Vec::new()
            }
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => app.on_tick(now),
            Ok(AppEvent::Resize(cols, rows)) => {
                resize(&mut app, cols, rows, now);
                Vec::new()
            }
            Ok(AppEvent::PageLoaded { ticket, result }) => {
                app.page_loaded(ticket, result, now);
                Vec::new()
            }
            Ok(AppEvent::MatchFinished { submission, result }) => {
                app.dashboard_mut().match_finished(submission, result, now);
                Vec::new()
            }
            Err(RecvTimeoutError::Disconnected) => break,
        };
        runner.run_all(effects);
    }

    drop(guard);
    runtime.shutdown_background();
    tracing::info!("Dashboard stopped");
    Ok(())
}

fn resize(app: &mut App, cols: u16, rows: u16, now: Instant) {
    let body = body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    app.on_resize(body.width.max(1), body.height.max(1), now);
}

/// How long the loop may block before the next timer needs servicing.
fn wait_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    deadline.map_or(TICK_RATE, |at| at.saturating_duration_since(now).min(TICK_RATE))
}
