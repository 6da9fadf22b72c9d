mod state;

pub(crate) use state::aces_label;
pub use state::{AppState, InputAction};
