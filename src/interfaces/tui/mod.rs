//! TUI 界面模块
//!
//! 终端初始化、主事件循环与状态推进

pub mod app;
pub mod constants;
pub mod event_handler;
pub mod input_handler;
pub mod ui;

use std::io;
use std::time::{Duration, Instant};

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::info;

use crate::content::Profile;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::TICK_RATE_MS;
use crate::interfaces::tui::ui::ui;
use crate::mailer::RelayConfig;
use crate::system::app_config::EffectsConfig;

/// 启动 TUI
pub async fn run_tui(
    profile: Profile,
    relay: RelayConfig,
    effects: EffectsConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting terminal portfolio for \"{}\"", profile.name);

    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(profile, relay, effects);
    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }
    info!("Terminal portfolio closed");
    Ok(())
}

/// 主事件循环
///
/// Renders, then waits for input up to the remainder of the frame budget,
/// then advances all time-driven state. Ticks use measured elapsed time so
/// animations stay on schedule when a frame runs long.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    let tick_rate = Duration::from_millis(TICK_RATE_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui(frame, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if event_handler::handle_key_event(app, key)? {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    event_handler::handle_mouse_event(app, mouse);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            let elapsed_ms = last_tick.elapsed().as_millis() as u64;
            app.on_tick(elapsed_ms);
            last_tick = Instant::now();
        }
    }
}
