mod angle_check;
mod tolerance;
mod verify_point;

pub use angle_check::{AngleCheck, AngleVerdict, CheckKind, CheckTarget, Verdict};
pub use tolerance::Tolerance;
pub use verify_point::{OffsetPosition, VerificationRecord, VerifyPoint};
