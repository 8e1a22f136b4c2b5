//! Terminal setup and the main event loop

use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::board::{BoardSettings, TaskBoard};
use crate::clock::SystemClock;
use crate::config::Config;
use crate::logger::Logger;
use crate::profile::{FileCache, InMemoryIdentity, ProfileService};
use crate::ui::app::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};

/// Run the board until the user quits
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    let greeting = load_greeting(&config, &logger).await;
    let board = TaskBoard::new(BoardSettings::from_config(&config), Arc::new(SystemClock));
    let mut app = AppComponent::new(board, &config, logger, greeting);
    let mut event_handler = EventHandler::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

/// Name shown in the header, taken from the offline profile
async fn load_greeting(config: &Config, logger: &Logger) -> String {
    let identity = Arc::new(InMemoryIdentity::signed_in(
        &config.profile.email,
        Some(config.profile.display_name.as_str()),
    ));

    let cache_path = match Config::get_data_dir() {
        Ok(dir) => dir.join("profile_cache.json"),
        Err(e) => {
            logger.log(format!("Profile cache unavailable: {}", e));
            return config.profile.display_name.clone();
        }
    };
    let profile = ProfileService::new(identity, Arc::new(FileCache::new(cache_path)));

    match profile.load_profile_image().await {
        Ok(image) => logger.log(format!("Profile image loaded from {:?}", image.source)),
        Err(e) => logger.log(format!("No profile image: {}", e)),
    }

    match profile.identity().current_user().await {
        Some(user) => user.display_name.unwrap_or(user.email),
        None => config.profile.display_name.clone(),
    }
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render || (app.is_animating() && event_handler.should_render()) {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        let now = Instant::now();

        match event {
            EventType::Key(_) | EventType::Mouse(_) => {
                let action = app.handle_event(event);
                app.update(action, now);
                needs_render = true;
            }
            EventType::Resize(_, _) => {
                needs_render = true;
            }
            EventType::Tick => {
                if app.on_tick(now) {
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
