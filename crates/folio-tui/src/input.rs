use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};
use crate::layout::GalleryHit;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    // Scrolling
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    // Section anchors
    NextSection,
    PrevSection,
    GoToNav(usize), // Number keys follow the header navigation entries
    // Slideshows (fan out to every visible gallery)
    PrevSlide,
    NextSlide,
    ToggleAutoplay,
    // Overlays
    Help,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Any key leaves the help overlay
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);

    // Number keys jump to header navigation anchors
    if let KeyCode::Char(c) = key.code {
        if key.modifiers == KeyModifiers::NONE {
            if let Some(digit) = c.to_digit(10) {
                if digit >= 1 {
                    return Action::GoToNav(digit as usize - 1);
                }
            }
        }
    }

    // 'gg' double-press sequence
    if keymap.is_g_prefix(&binding) {
        if app.pending_key == Some('g') {
            return keymap
                .get_pending_g_action()
                .cloned()
                .unwrap_or(Action::None);
        }
        return Action::PendingG;
    }

    if let Some(action) = keymap.get(&binding) {
        return action.clone();
    }

    // Shifted punctuation (e.g. '?') arrives with the SHIFT modifier set;
    // retry without it so single-char bindings still match
    if matches!(key.code, KeyCode::Char(_)) && key.modifiers == KeyModifiers::SHIFT {
        if let Some(action) = keymap.get(&KeyBinding::simple(key.code)) {
            return action.clone();
        }
    }

    // Terminals report Shift+Tab as BackTab
    if key.code == KeyCode::BackTab {
        if let Some(action) = keymap.get(&KeyBinding::shift(KeyCode::Tab)) {
            return action.clone();
        }
    }

    Action::None
}

/// Handle a mouse event directly against app state.
///
/// Button presses inside a gallery start a swipe; releases either finish
/// the swipe or, when the pointer barely moved, count as a click on the
/// gallery's arrows and dots. The wheel scrolls the page.
pub fn handle_mouse_event(mouse: MouseEvent, app: &mut App) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_lines(3),
        MouseEventKind::ScrollUp => app.scroll_lines(-3),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some((name, _)) = app.gallery_at_screen(mouse.column, mouse.row) {
                app.swipe.begin(&name, mouse.column);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let hit = app.gallery_at_screen(mouse.column, mouse.row);
            let (name, page_row) = match hit {
                Some(hit) => hit,
                None => return,
            };
            if let Some(direction) = app.swipe.end(&name, mouse.column) {
                app.slideshows.change_slide(&name, direction);
                return;
            }
            // Not a swipe: resolve as a click on the controls row
            let gallery_hit = app
                .layout
                .gallery_at(page_row)
                .and_then(|g| g.hit_test(mouse.column.saturating_sub(app.page_area.x), page_row));
            match gallery_hit {
                Some(GalleryHit::PrevArrow) => app.slideshows.change_slide(&name, -1),
                Some(GalleryHit::NextArrow) => app.slideshows.change_slide(&name, 1),
                Some(GalleryHit::Dot(index)) => app.slideshows.go_to_slide(&name, index),
                None => {}
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_nav_entries() {
        let app = App::sample();
        let keymap = Keymap::default();
        let key = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key, &app, &keymap), Action::GoToNav(1));
    }

    #[test]
    fn test_arrow_keys_are_slide_actions() {
        let app = App::sample();
        let keymap = Keymap::default();
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(handle_key_event(left, &app, &keymap), Action::PrevSlide);
        assert_eq!(handle_key_event(right, &app, &keymap), Action::NextSlide);
    }

    #[test]
    fn test_backtab_is_prev_section() {
        let app = App::sample();
        let keymap = Keymap::default();
        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(handle_key_event(key, &app, &keymap), Action::PrevSection);
    }

    #[test]
    fn test_any_key_leaves_help() {
        let mut app = App::sample();
        app.mode = Mode::Help;
        let keymap = Keymap::default();
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key, &app, &keymap), Action::ExitMode);
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = App::sample();
        let keymap = Keymap::default();
        let g = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::JumpToTop);
    }
}
