//! Interactive terminal UI for browsing Hacker News search results.
//!
//! The crate contains the full application: the [`App`] state container, key
//! and mouse handling, the rendering pipeline, and the reusable widgets and
//! style definitions that power the terminal front-end. Network traffic stays
//! on the `hns-api` worker thread; the event loop here only pumps its updates.

mod app;
pub mod components;
pub mod input;
mod render;
mod runtime;
pub mod style;

pub use app::{App, SearchOutcome};
pub use input::QueryInput;
pub use runtime::run;
pub use style::Theme;
