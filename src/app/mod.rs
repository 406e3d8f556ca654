//! Presentation-side helpers: input validation and terminal rendering.

pub mod ip;
pub mod render;

pub use ip::is_valid_ipv4;
pub use render::render_state;
