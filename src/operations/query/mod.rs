pub mod deviation;
mod point_line_distance;

pub use deviation::{angular_deviation_arcsec, linear_deviation_mm, DeviationPair};
pub use point_line_distance::{PointLineDistance, PointLineDistanceResult};
