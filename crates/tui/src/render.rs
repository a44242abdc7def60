use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::sort::SortKey;
use crate::app::{App, FetchState};
use crate::components::{
	InputContext, ProgressState, TableSpec, build_story_rows, render_input, render_table,
};

const INPUT_TITLE: &str = "Search";
const LOADING_LABEL: &str = "Fetching…";
const KEY_HINTS: &str =
	"enter search · ctrl-n more · ctrl-d dismiss · ctrl-s sort · ctrl-r reverse · ctrl-o accept · esc quit";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		let (status_text, loading) = self.progress_status();
		let input_ctx = InputContext {
			search_input: &self.search_input,
			title: INPUT_TITLE,
			area: layout[0],
			theme: &self.theme,
		};
		let progress = ProgressState {
			status_text: &status_text,
			loading,
		};
		render_input(frame, input_ctx, progress, &mut self.throbber_state);

		self.render_results(frame, layout[1]);
		self.render_status_line(frame, layout[2]);
	}

	/// Text for the right side of the prompt row and whether to spin.
	fn progress_status(&self) -> (String, bool) {
		if self.is_loading() {
			return (LOADING_LABEL.to_string(), true);
		}
		if self.cache.needs_fetch(&self.search_key) {
			return (String::new(), false);
		}
		let hits = self.cache.hits(&self.search_key).len();
		let page = self.cache.page(&self.search_key);
		(format!("{hits} hits · page {page}"), false)
	}

	fn header_labels(&self) -> Vec<String> {
		let columns = [
			(SortKey::Title, "Title"),
			(SortKey::Author, "Author"),
			(SortKey::Comments, "Comments"),
			(SortKey::Points, "Points"),
		];
		columns
			.iter()
			.map(|&(key, name)| {
				if key == self.sort.key {
					let descending = matches!(key, SortKey::Comments | SortKey::Points)
						!= self.sort.reverse;
					format!("{name} {}", if descending { "▼" } else { "▲" })
				} else {
					name.to_string()
				}
			})
			.collect()
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		self.results.area = Some(area);

		let order = self.visible_indices();
		let headers = self.header_labels();
		let widths = vec![
			Constraint::Fill(1),
			Constraint::Length(16),
			Constraint::Length(8),
			Constraint::Length(8),
		];

		let hits = self.cache.hits(&self.search_key);
		let rows = build_story_rows(hits, &order);

		let spec = TableSpec {
			headers,
			widths,
			rows,
			title: None,
		};
		render_table(
			frame,
			area,
			&mut self.results.table_state,
			&mut self.results.scrollbar_state,
			&mut self.results.scrollbar_area,
			spec,
			&self.theme,
		);

		if self.visible_len() == 0 && !self.is_loading() {
			self.render_empty_message(frame, area);
		}
	}

	fn render_empty_message(&self, frame: &mut Frame, area: Rect) {
		// Account for border (1 top + 1 bottom) and header + divider (2).
		const BORDER_AND_HEADER_HEIGHT: u16 = 4;
		if area.height <= BORDER_AND_HEADER_HEIGHT {
			return;
		}

		let mut message_area = area;
		message_area.y += 1;
		message_area.x += 1;
		message_area.width = message_area.width.saturating_sub(2);
		message_area.height -= 2;

		const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;
		if message_area.height > HEADER_AND_DIVIDER_HEIGHT {
			message_area.y += HEADER_AND_DIVIDER_HEIGHT;
			message_area.height -= HEADER_AND_DIVIDER_HEIGHT;

			let empty = Paragraph::new(Span::styled("No results", self.theme.empty))
				.alignment(Alignment::Center);
			frame.render_widget(empty, message_area);
		}
	}

	fn render_status_line(&self, frame: &mut Frame, area: Rect) {
		let line = match &self.fetch_state {
			FetchState::Failed(message) => Line::from(Span::styled(
				format!("fetch failed: {message}"),
				self.theme.error,
			)),
			_ => Line::from(Span::styled(KEY_HINTS, self.theme.hint)),
		};
		frame.render_widget(Paragraph::new(line), area);
	}
}
