//! UI-facing state containers.
//!
//! These hold what a dashboard page binds to: list contents with loading and
//! error flags, the in-progress form generation flow, and the navigation
//! guard that protects it.

pub mod flow;
pub mod navigation;
pub mod store;

pub use flow::FormFlowState;
pub use navigation::{NavigationGuard, NavigationOutcome, Navigator, FLOW_ROUTES};
pub use store::{ListStore, SEARCH_DEBOUNCE};
