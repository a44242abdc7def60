//! Visual styling for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

/// Styles applied to the UI chrome.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for the table header and borders.
	pub header: Style,
	/// Style for the highlighted row.
	pub row_highlight: Style,
	/// Style for the prompt label.
	pub prompt: Style,
	/// Style for empty states.
	pub empty: Style,
	/// Style for the fetch error line.
	pub error: Style,
	/// Style for key hints.
	pub hint: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			header: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
			row_highlight: Style::new().bg(Color::DarkGray),
			prompt: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
			empty: Style::new().fg(Color::DarkGray),
			error: Style::new().fg(Color::Red),
			hint: Style::new().fg(Color::DarkGray),
		}
	}
}
