mod segment;
mod side;

pub use segment::LineSegment;
pub use side::Side;
