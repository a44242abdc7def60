//! UI building blocks shared across rendering and state modules.

/// Input prompt rendering and fetch progress display.
pub mod prompt;
/// Table row construction for stories.
pub mod rows;
/// Scrollbar for the results viewport.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use prompt::{InputContext, ProgressState, render_input};
pub use rows::build_story_rows;
pub use scrollbar::render_scrollbar;
pub use tables::{TableSpec, render_table};
