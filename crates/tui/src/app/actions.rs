use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::state::SearchOutcome;

impl App<'_> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Enter => self.submit_search(),
			// Ctrl+O to accept the selected story
			KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.outcome(true));
			}
			// Ctrl+N fetches the next page for the active key
			KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.request_more();
			}
			// Ctrl+D dismisses the selected story
			KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.dismiss_selected();
			}
			// Ctrl+S cycles the sort column, Ctrl+R flips the order
			KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.cycle_sort();
			}
			KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.toggle_sort_reverse();
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				self.search_input.input(key);
			}
		}
		None
	}

	fn outcome(&self, accepted: bool) -> SearchOutcome {
		SearchOutcome {
			accepted,
			query: self.search_input.text().to_string(),
			story: if accepted {
				self.selected_story().cloned()
			} else {
				None
			},
		}
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		self.results.update_hover(mouse.column, mouse.row);

		match mouse.kind {
			MouseEventKind::ScrollUp if self.results.hovered => self.move_selection_up(),
			MouseEventKind::ScrollDown if self.results.hovered => self.move_selection_down(),
			MouseEventKind::Down(MouseButton::Left) if self.results.hovered => {
				self.results.select_at(self.visible_len(), mouse.row);
			}
			_ => {}
		}
	}
}
