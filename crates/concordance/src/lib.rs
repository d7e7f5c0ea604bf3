pub mod handlers;

pub use handlers::{AppState, SearchState, router};
