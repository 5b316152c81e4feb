mod events;
mod input_state;
mod render;
mod state;
mod suggestion_render;

// Re-export public types
pub use state::App;
