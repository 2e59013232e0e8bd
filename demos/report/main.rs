//! Survey report demo — runs one request through the engine and prints it.
//!
//! Usage:
//! ```text
//! cargo run --example report                                  # built-in scenario
//! cargo run --example report -- request.json                  # request from file
//! cargo run --example report -- request.json config.json      # with configuration
//! cargo run --example report -- --json request.json           # JSON output
//! ```

use std::process::ExitCode;

use stakeout::geometry::Side;
use stakeout::math::Point2;
use stakeout::{StakeoutError, Survey, SurveyConfig, SurveyRequest};

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for stakeout.
    // Override with RUST_LOG env var (e.g. RUST_LOG=stakeout=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("report=info".parse().unwrap_or_default())
        .add_directive("stakeout=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = if let Some(pos) = args.iter().position(|a| a == "--json") {
        args.remove(pos);
        true
    } else {
        false
    };

    match run(&args, as_json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(DemoError::Stakeout(e)) if e.is_invalid_baseline() => {
            tracing::error!("{e}; enter two distinct baseline points");
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Stakeout(#[from] StakeoutError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn read(path: &str) -> Result<String, DemoError> {
    std::fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_owned(),
        source,
    })
}

fn run(args: &[String], as_json: bool) -> Result<(), DemoError> {
    let request = match args.first() {
        Some(path) => SurveyRequest::from_json_str(&read(path)?)?,
        None => default_request(),
    };
    let config = match args.get(1) {
        Some(path) => SurveyConfig::from_json_str(&read(path)?)?,
        None => SurveyConfig::default(),
    };

    let report = Survey::new(&request, &config).execute()?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn default_request() -> SurveyRequest {
    SurveyRequest::new(
        Point2::new(984.765, 964.723),
        Point2::new(997.622, 980.027),
        10.0,
        Side::Right,
    )
    .with_verification_point(Point2::new(992.424, 955.059))
    .with_verification_point(Point2::new(991.000, 972.000))
    .with_angular_error_arcsec(2.0)
}
