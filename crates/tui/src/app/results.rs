//! State management for the results table.

use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};

use crate::components::tables::TABLE_HEADER_ROWS;

/// Aggregate state for the results table and its interactions.
pub(crate) struct ResultsState {
	/// Selection state for the results table.
	pub table_state: TableState,
	/// Scrollbar state for the results table.
	pub scrollbar_state: ScrollbarState,
	/// Screen area of the scrollbar if rendered.
	pub scrollbar_area: Option<Rect>,
	/// Last known results area on screen.
	pub area: Option<Rect>,
	/// Whether the mouse is currently hovering the results table.
	pub hovered: bool,
}

impl Default for ResultsState {
	fn default() -> Self {
		let mut table_state = TableState::default();
		table_state.select(Some(0));
		Self {
			table_state,
			scrollbar_state: ScrollbarState::default(),
			scrollbar_area: None,
			area: None,
			hovered: false,
		}
	}
}

impl ResultsState {
	/// Ensure the row selection remains valid for a list of `len` rows.
	pub fn ensure_selection(&mut self, len: usize) {
		if len == 0 {
			self.table_state.select(None);
		} else if self.table_state.selected().is_none() {
			self.table_state.select(Some(0));
		} else if let Some(selected) = self.table_state.selected() {
			if selected >= len {
				self.table_state.select(Some(len.saturating_sub(1)));
			}
		}
	}

	pub fn move_up(&mut self, len: usize) {
		if len == 0 {
			return;
		}
		let next = match self.table_state.selected() {
			Some(0) | None => 0,
			Some(selected) => selected - 1,
		};
		self.table_state.select(Some(next));
	}

	pub fn move_down(&mut self, len: usize) {
		if len == 0 {
			return;
		}
		let next = match self.table_state.selected() {
			None => 0,
			Some(selected) => selected.saturating_add(1).min(len - 1),
		};
		self.table_state.select(Some(next));
	}

	/// Update hover state based on mouse position.
	pub fn update_hover(&mut self, column: u16, row: u16) {
		let Some(area) = self.area else {
			self.hovered = false;
			return;
		};

		let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
		let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
		self.hovered = inside_x && inside_y;
	}

	/// Attempt to select a result at the given mouse position.
	/// Returns true if a selection was made.
	pub fn select_at(&mut self, len: usize, row: u16) -> bool {
		let Some(area) = self.area else {
			return false;
		};

		// Table is rendered inside a rounded border block; subtract borders.
		let inner_y = area.y.saturating_add(1);
		let inner_width = area.width.saturating_sub(2);
		let inner_height = area.height.saturating_sub(2);
		if inner_width == 0 || inner_height == 0 {
			return false;
		}

		// Header row (1) + separator (1) → body rows start at inner_y + 2.
		let body_start_y = inner_y.saturating_add(TABLE_HEADER_ROWS as u16);
		if row < body_start_y {
			return false;
		}

		let body_end_y = inner_y.saturating_add(inner_height);
		if row >= body_end_y {
			return false;
		}

		let row_in_view = row.saturating_sub(body_start_y) as usize;
		let visible_index = self.table_state.offset().saturating_add(row_in_view);

		if visible_index >= len {
			return false;
		}

		self.table_state.select(Some(visible_index));
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selection_clamps_to_the_shrinking_list() {
		let mut results = ResultsState::default();
		results.table_state.select(Some(4));
		results.ensure_selection(3);
		assert_eq!(results.table_state.selected(), Some(2));
	}

	#[test]
	fn selection_clears_when_the_list_empties() {
		let mut results = ResultsState::default();
		results.ensure_selection(0);
		assert_eq!(results.table_state.selected(), None);
	}

	#[test]
	fn movement_stays_within_bounds() {
		let mut results = ResultsState::default();
		results.move_up(3);
		assert_eq!(results.table_state.selected(), Some(0));
		results.move_down(3);
		results.move_down(3);
		results.move_down(3);
		assert_eq!(results.table_state.selected(), Some(2));
	}

	#[test]
	fn movement_on_an_empty_list_is_inert() {
		let mut results = ResultsState::default();
		results.ensure_selection(0);
		results.move_down(0);
		results.move_up(0);
		assert_eq!(results.table_state.selected(), None);
	}
}
