mod state;

pub use state::{AppState, Field, InputAction};
