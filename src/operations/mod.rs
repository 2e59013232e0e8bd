pub mod offset;
pub mod query;
pub mod verify;

pub use offset::{LineOffset2D, OffsetResult};
pub use query::{DeviationPair, PointLineDistance, PointLineDistanceResult};
pub use verify::{
    AngleCheck, AngleVerdict, CheckKind, CheckTarget, OffsetPosition, Tolerance,
    VerificationRecord, Verdict, VerifyPoint,
};
