mod line;
mod markers;

pub use line::Line;
pub use markers::Markers;
