//! Application state management for the speed calculator.
//!
//! This module contains the main application state, the focus order of the
//! form, and the two actions the form offers: calculate and export.

use crate::domain::{Field, ResultsCollection, SpeedCalculator};
use crate::infrastructure::{ExportSettings, XlsxExporter};

/// Represents the current mode of the application.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    /// Ready for input - the form and table accept keys
    Ready,
    /// A modal message is shown until the user acknowledges it
    Notification(Notification),
}

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A modal message produced by an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }

    pub fn title(&self) -> &'static str {
        match self.level {
            NotificationLevel::Info => "Success",
            NotificationLevel::Error => "Error",
        }
    }
}

/// Focusable elements of the window, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Distance,
    Time,
    CalculateButton,
    SaveButton,
    Table,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Distance,
        Focus::Time,
        Focus::CalculateButton,
        Focus::SaveButton,
        Focus::Table,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// The text field this focus edits, if any.
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Distance => Some(Field::Distance),
            Focus::Time => Some(Field::Time),
            _ => None,
        }
    }
}

/// A single-line text buffer with a cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    pub value: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl TextInput {
    fn byte_index(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }
}

/// Main application state: the form, the results and the current mode.
///
/// # Examples
///
/// ```
/// use formulaspeed::application::{App, AppMode};
///
/// let mut app = App::default();
/// app.distance.value = "10".to_string();
/// app.time.value = "2".to_string();
/// app.calculate();
/// assert_eq!(app.results.len(), 1);
/// assert_eq!(app.mode, AppMode::Ready);
/// ```
#[derive(Debug)]
pub struct App {
    /// Distance field (km)
    pub distance: TextInput,
    /// Time field (hours)
    pub time: TextInput,
    /// Element receiving keyboard input
    pub focus: Focus,
    /// Every successful calculation of this session
    pub results: ResultsCollection,
    /// Highlighted row in the results table
    pub selected_result: Option<usize>,
    /// Current application mode
    pub mode: AppMode,
    /// Export target
    pub settings: ExportSettings,
}

impl Default for App {
    fn default() -> Self {
        Self::with_settings(ExportSettings::default())
    }
}

impl App {
    pub fn with_settings(settings: ExportSettings) -> Self {
        Self {
            distance: TextInput::default(),
            time: TextInput::default(),
            focus: Focus::Distance,
            results: ResultsCollection::default(),
            selected_result: None,
            mode: AppMode::Ready,
            settings,
        }
    }

    /// Parses the form, appends a row on success and raises a notification
    /// on failure. The fields are never cleared.
    pub fn calculate(&mut self) {
        match SpeedCalculator::calculate(&self.distance.value, &self.time.value) {
            Ok(row) => {
                tracing::info!(
                    distance = row.distance(),
                    time = row.time(),
                    average_speed = row.average_speed(),
                    "appended measurement"
                );
                self.results.push(row);
                self.selected_result = Some(self.results.len() - 1);
            }
            Err(err) => {
                tracing::warn!(error = ?err, "rejected input");
                self.mode = AppMode::Notification(Notification::error(err.to_string()));
            }
        }
    }

    /// Exports the whole results collection and reports the outcome.
    pub fn export(&mut self) {
        let notification = match XlsxExporter::new(&self.settings).export(&self.results) {
            Ok(name) => Notification::info(format!("Results saved to {name}")),
            Err(err) => {
                tracing::error!(error = %err, "export failed");
                Notification::error(err.to_string())
            }
        };
        self.mode = AppMode::Notification(notification);
    }

    /// Closes the current notification and returns to ready.
    pub fn acknowledge(&mut self) {
        self.mode = AppMode::Ready;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        tracing::debug!(focus = ?self.focus, "focus changed");
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
        tracing::debug!(focus = ?self.focus, "focus changed");
    }

    /// The text field under focus, if a field has focus.
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus.field()? {
            Field::Distance => Some(&mut self.distance),
            Field::Time => Some(&mut self.time),
        }
    }

    pub fn select_previous_result(&mut self) {
        if let Some(selected) = self.selected_result {
            self.selected_result = Some(selected.saturating_sub(1));
        }
    }

    pub fn select_next_result(&mut self) {
        if let Some(selected) = self.selected_result {
            if selected + 1 < self.results.len() {
                self.selected_result = Some(selected + 1);
            }
        }
    }
}
