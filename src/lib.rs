pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod survey;

pub use config::SurveyConfig;
pub use error::{Result, StakeoutError};
pub use survey::{Survey, SurveyReport, SurveyRequest};
