use crate::application::{App, AppMode, Focus};
use crossterm::event::{KeyCode, KeyModifiers};

/// What the event loop should do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) -> Control {
        match app.mode {
            AppMode::Ready => Self::handle_ready_mode(app, key, modifiers),
            AppMode::Notification(_) => {
                Self::handle_notification_mode(app, key);
                Control::Continue
            }
        }
    }

    fn handle_ready_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) -> Control {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('q') => return Control::Quit,
                KeyCode::Char('s') => {
                    app.export();
                    return Control::Continue;
                }
                _ => return Control::Continue,
            }
        }

        match key {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Tab => app.focus_next(),
            KeyCode::BackTab => app.focus_previous(),
            KeyCode::Enter => match app.focus {
                Focus::Distance | Focus::Time | Focus::CalculateButton => app.calculate(),
                Focus::SaveButton => app.export(),
                Focus::Table => {}
            },
            _ => match app.focus {
                Focus::Distance | Focus::Time => Self::handle_field_key(app, key),
                Focus::Table => Self::handle_table_key(app, key),
                Focus::CalculateButton | Focus::SaveButton => {
                    if key == KeyCode::Char(' ') {
                        if app.focus == Focus::CalculateButton {
                            app.calculate();
                        } else {
                            app.export();
                        }
                    }
                }
            },
        }
        Control::Continue
    }

    fn handle_field_key(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Down => {
                app.focus_next();
                return;
            }
            KeyCode::Up => {
                app.focus_previous();
                return;
            }
            _ => {}
        }

        let Some(input) = app.focused_input() else {
            return;
        };
        match key {
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            KeyCode::Char(c) => input.insert(c),
            _ => {}
        }
    }

    fn handle_table_key(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_result(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_result(),
            _ => {}
        }
    }

    fn handle_notification_mode(app: &mut App, key: KeyCode) {
        if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.acknowledge();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::NotificationLevel;
    use crate::infrastructure::ExportSettings;
    use tempfile::TempDir;

    fn press(app: &mut App, key: KeyCode) -> Control {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill_form(app: &mut App, distance: &str, time: &str) {
        app.focus = Focus::Distance;
        type_text(app, distance);
        press(app, KeyCode::Tab);
        type_text(app, time);
    }

    #[test]
    fn test_typing_into_fields() {
        let mut app = App::default();
        fill_form(&mut app, "42", "1.5");

        assert_eq!(app.distance.value, "42");
        assert_eq!(app.time.value, "1.5");
        assert_eq!(app.focus, Focus::Time);
    }

    #[test]
    fn test_enter_in_field_calculates() {
        let mut app = App::default();
        fill_form(&mut app, "10", "2");

        assert_eq!(press(&mut app, KeyCode::Enter), Control::Continue);
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results.rows()[0].average_speed(), 5.0);
    }

    #[test]
    fn test_calculate_button() {
        let mut app = App::default();
        fill_form(&mut app, "9", "3");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::CalculateButton);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.results.len(), 2);
    }

    #[test]
    fn test_invalid_input_shows_notification_until_acknowledged() {
        let mut app = App::default();
        fill_form(&mut app, "abc", "2");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.results.len(), 0);
        assert!(matches!(app.mode, AppMode::Notification(ref n) if n.level == NotificationLevel::Error));

        // Other keys are swallowed while the notification is open.
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.time.value, "2");
        assert!(matches!(app.mode, AppMode::Notification(_)));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Ready);
        assert_eq!(app.distance.value, "abc");
        assert_eq!(app.results.len(), 0);
    }

    #[test]
    fn test_ctrl_s_exports() {
        let dir = TempDir::new().unwrap();
        let mut app = App::with_settings(ExportSettings {
            path: dir.path().join("results.xlsx"),
            ..ExportSettings::default()
        });
        fill_form(&mut app, "10", "2");
        press(&mut app, KeyCode::Enter);

        InputHandler::handle_key_event(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert!(dir.path().join("results.xlsx").exists());
        assert!(matches!(app.mode, AppMode::Notification(ref n) if n.level == NotificationLevel::Info));
        assert_eq!(app.time.value, "2");
    }

    #[test]
    fn test_save_button_exports() {
        let dir = TempDir::new().unwrap();
        let mut app = App::with_settings(ExportSettings {
            path: dir.path().join("results.xlsx"),
            ..ExportSettings::default()
        });
        app.focus = Focus::SaveButton;
        press(&mut app, KeyCode::Enter);

        assert!(dir.path().join("results.xlsx").exists());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        assert_eq!(press(&mut app, KeyCode::Esc), Control::Quit);
        assert_eq!(
            InputHandler::handle_key_event(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL),
            Control::Quit
        );
        // A plain 'q' is just text.
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Continue);
        assert_eq!(app.distance.value, "q");
    }

    #[test]
    fn test_esc_acknowledges_instead_of_quitting() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.mode, AppMode::Notification(_)));

        assert_eq!(press(&mut app, KeyCode::Esc), Control::Continue);
        assert_eq!(app.mode, AppMode::Ready);
    }

    #[test]
    fn test_table_navigation() {
        let mut app = App::default();
        fill_form(&mut app, "10", "2");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        app.focus = Focus::Table;

        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected_result, Some(0));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_result, Some(1));
        // Table keys never edit the fields.
        assert_eq!(app.distance.value, "10");
    }
}
