//! Selection state: per-element records, the exclusivity scope, and the
//! per-element controller facade.

mod controller;
mod scope;
mod state;

pub use controller::ElementController;
pub use scope::SelectionScope;
pub use state::ElementState;
