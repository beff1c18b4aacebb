pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::catalog::PaginatedListController;

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut tui_app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));

    let controller = ctx.controller();
    let dirty = Arc::new(AtomicBool::new(true));
    let dirty_flag = dirty.clone();
    let _changes = controller.on_change(move || dirty_flag.store(true, Ordering::SeqCst));

    // First page.
    controller.spawn_load_next();

    loop {
        if dirty.swap(false, Ordering::SeqCst) {
            tui_app.sync(&controller);
        }

        terminal.draw(|frame| layout::render(frame, &mut tui_app))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                tui_app.clear_status();
                match ctx.config.keybindings.get_action(&key) {
                    Action::Quit => {
                        tui_app.should_quit = true;
                    }
                    Action::MoveUp => {
                        tui_app.move_up();
                    }
                    Action::MoveDown => {
                        tui_app.move_down();
                        request_more_if_near_end(&tui_app, &controller);
                    }
                    Action::Select => {
                        tui_app.open_detail(&controller);
                    }
                    Action::Back => {
                        tui_app.close_detail();
                    }
                    Action::ToggleFavorite => {
                        tui_app.toggle_favorite(&controller);
                    }
                    Action::OpenImage => {
                        if let Some(url) = tui_app.image_url().map(String::from) {
                            if let Err(e) = open::that(&url) {
                                tui_app.set_status(format!("Failed to open image: {}", e));
                            }
                        }
                    }
                    Action::None => {}
                }
            }
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Ask for the next page when the selection approaches the end of the list.
/// A page that failed earlier is retried by the next scroll.
fn request_more_if_near_end(tui_app: &TuiApp, controller: &PaginatedListController) {
    if tui_app.near_end() && controller.spawn_load_next().is_some() {
        tracing::debug!("Prefetching page {}", controller.current_page());
    }
}
