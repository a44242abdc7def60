//! Application state, interaction handling, and fetch coordination.

mod actions;
mod fetch;
mod results;
pub(crate) mod sort;
mod state;

pub use state::{App, SearchOutcome};
pub(crate) use state::FetchState;
