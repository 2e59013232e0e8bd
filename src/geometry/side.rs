use std::fmt;

use serde::{Deserialize, Serialize};

/// Side of a directed line, seen while walking from its start to its end.
///
/// `Left` is a +90° (counter-clockwise) rotation of the direction vector,
/// `Right` a −90° (clockwise) rotation. For the baseline `(0,0) → (100,0)`
/// a `Right` offset of 10 lies on `y = -10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Sign of a signed distance on this side: `+1` for `Left`, `-1` for `Right`.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }

    /// Classifies a signed distance. Returns `None` within `tolerance` of the line.
    #[must_use]
    pub fn of_signed_distance(signed: f64, tolerance: f64) -> Option<Self> {
        if signed > tolerance {
            Some(Self::Left)
        } else if signed < -tolerance {
            Some(Self::Right)
        } else {
            None
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}
