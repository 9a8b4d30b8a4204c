pub mod handlers;

pub use handlers::{AppState, MAX_INPUT_LEN, router};
