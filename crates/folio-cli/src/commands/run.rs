use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use folio_core::{AppConfig, Page};
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    keymap::Keymap,
    load_theme,
    widgets::{HeaderWidget, HelpWidget, PageWidget, StatusBarWidget, HEADER_HEIGHT},
};

pub fn run(config: Arc<AppConfig>, page_path: Option<PathBuf>) -> Result<()> {
    // Resolve the page: explicit argument, configured default, or the
    // built-in sample
    let page = match page_path.or_else(|| config.default_page()) {
        Some(path) => {
            info!("Loading page from {}", path.display());
            Page::from_path(&path)?
        }
        None => Page::sample(),
    };

    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    let title = if page.page.title.is_empty() {
        "folio".to_string()
    } else {
        page.page.title.clone()
    };
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(title.as_str())
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config.clone(), theme, page);

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.scroll.animation_fps);

    // Track if we need high frame rate for smooth animations.
    // Checked at the END of each iteration for the NEXT iteration's tick.
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Advance scroll animation, reveals, counters, and autoplay
        app.tick();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            let show_status_bar = app.config.ui.show_status_bar;
            let constraints = if show_status_bar {
                vec![
                    Constraint::Length(HEADER_HEIGHT),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ]
            } else {
                vec![Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)]
            };
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(size);

            HeaderWidget::render(frame, chunks[0], &app);
            PageWidget::render(frame, chunks[1], &mut app);
            if show_status_bar {
                StatusBarWidget::render(frame, chunks[2], &app);
            }

            // Help overlay on top
            if app.mode == Mode::Help {
                HelpWidget::render(frame, &app);
            }
        })?;

        // The first complete frame marks the page as loaded
        app.loaded = true;

        // Handle events (use faster tick rate during animations)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, &keymap);
                    handle_action(&mut app, action);
                }
                AppEvent::Mouse(mouse) => {
                    handle_mouse_event(mouse, &mut app);
                }
                AppEvent::Resize(_, _) => {
                    // Geometry is rebuilt every frame; nothing to do here
                }
                AppEvent::Tick => {}
            }
        }

        // Update fast update flag for next iteration
        needs_fast_update = app.needs_fast_tick();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    // Clear pending key on any action except the 'g' prefix itself
    if action != Action::PendingG && action != Action::JumpToTop {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown => {
            let max_scroll = app.max_scroll();
            app.scroll.scroll_down(max_scroll);
        }
        Action::ScrollUp => {
            let max_scroll = app.max_scroll();
            app.scroll.scroll_up(max_scroll);
        }
        Action::ScrollHalfPageDown => {
            let (viewport, max_scroll) = (app.page_area.height, app.max_scroll());
            app.scroll.scroll_half_page_down(viewport, max_scroll);
        }
        Action::ScrollHalfPageUp => {
            let (viewport, max_scroll) = (app.page_area.height, app.max_scroll());
            app.scroll.scroll_half_page_up(viewport, max_scroll);
        }
        Action::ScrollPageDown => {
            let (viewport, max_scroll) = (app.page_area.height, app.max_scroll());
            app.scroll.scroll_full_page_down(viewport, max_scroll);
        }
        Action::ScrollPageUp => {
            let (viewport, max_scroll) = (app.page_area.height, app.max_scroll());
            app.scroll.scroll_full_page_up(viewport, max_scroll);
        }
        Action::JumpToTop => {
            app.clear_pending_key();
            app.jump_to_top();
        }
        Action::JumpToBottom => {
            app.jump_to_bottom();
        }
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::NextSection => {
            app.next_section();
        }
        Action::PrevSection => {
            app.prev_section();
        }
        Action::GoToNav(index) => {
            app.go_to_nav(index);
        }
        Action::PrevSlide => {
            app.change_visible_slides(-1);
        }
        Action::NextSlide => {
            app.change_visible_slides(1);
        }
        Action::ToggleAutoplay => {
            app.toggle_visible_autoplay();
        }
        Action::Help => {
            app.mode = Mode::Help;
        }
        Action::ExitMode => {
            app.mode = Mode::Normal;
        }
        Action::None => {}
    }
}
