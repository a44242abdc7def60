//! Input prompt rendering and fetch progress display.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{BRAILLE_SIX, Throbber, ThrobberState, WhichUse};
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

const PROMPT_SUFFIX: &str = " ▸ ";

/// Everything needed to draw the prompt row.
pub struct InputContext<'a, 'b> {
	/// The query input widget.
	pub search_input: &'a QueryInput<'b>,
	/// Label drawn in front of the input.
	pub title: &'a str,
	/// Row to draw into.
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Right-hand side of the prompt row: a throbber while a fetch is running,
/// otherwise a static summary of the cached results.
pub struct ProgressState<'a> {
	pub status_text: &'a str,
	pub loading: bool,
}

/// Render the prompt row: label, input, and fetch progress.
pub fn render_input(
	frame: &mut Frame,
	ctx: InputContext<'_, '_>,
	progress: ProgressState<'_>,
	throbber_state: &mut ThrobberState,
) {
	let label = format!("{}{PROMPT_SUFFIX}", ctx.title);
	let label_width = label.width() as u16;
	// Throbber glyph plus a space in front of the text.
	let status_width = (progress.status_text.width() as u16).saturating_add(2);

	let layout = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(label_width),
			Constraint::Min(10),
			Constraint::Length(status_width),
		])
		.split(ctx.area);

	let label = Paragraph::new(Line::from(Span::styled(label, ctx.theme.prompt)));
	frame.render_widget(label, layout[0]);

	ctx.search_input.render(frame, layout[1]);

	if progress.loading {
		let throbber = Throbber::default()
			.label(progress.status_text.to_string())
			.throbber_set(BRAILLE_SIX)
			.use_type(WhichUse::Spin);
		frame.render_stateful_widget(throbber, layout[2], throbber_state);
	} else {
		let summary = Paragraph::new(Span::styled(
			progress.status_text.to_string(),
			ctx.theme.hint,
		))
		.right_aligned();
		frame.render_widget(summary, layout[2]);
	}
}
