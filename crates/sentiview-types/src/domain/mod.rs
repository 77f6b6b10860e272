pub mod chart;
pub mod record;
pub mod sentiment;

pub use chart::*;
pub use record::*;
pub use sentiment::*;
