//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// Text input widget holding the live search term.
///
/// The value typed here is decoupled from the active search key: only an
/// explicit submission promotes the text to the key used to select cached
/// results.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	/// Create an input seeded with `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: String) -> Self {
		let mut textarea = TextArea::from([initial]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key event into the input. Returns whether the text changed.
	///
	/// Enter is ignored here; submission belongs to the caller, and the input
	/// stays single-line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let input = Input::from(key);
		if matches!(input.key, Key::Enter) {
			return false;
		}
		self.textarea.input(input)
	}

	pub(crate) fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyEvent};

	use super::*;

	#[test]
	fn typing_appends_after_the_seed_text() {
		let mut input = QueryInput::new("redu".to_string());
		assert!(input.input(KeyEvent::from(KeyCode::Char('x'))));
		assert_eq!(input.text(), "redux");
	}

	#[test]
	fn enter_does_not_modify_the_text() {
		let mut input = QueryInput::new("redux".to_string());
		assert!(!input.input(KeyEvent::from(KeyCode::Enter)));
		assert_eq!(input.text(), "redux");
	}
}
