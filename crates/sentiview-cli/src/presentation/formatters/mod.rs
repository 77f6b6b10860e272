pub mod bar;
pub mod color;
pub mod paint;

pub use bar::render_bar;
pub use color::parse_hex_color;
