mod line_offset_2d;

pub use line_offset_2d::{LineOffset2D, OffsetResult};
