pub mod cli;
pub mod dispatch;
pub mod error;
pub mod samples;
pub mod types;
pub mod utils;
pub mod workouts;

use anyhow::{Context, Result};
use types::{InfoMessage, Sample};
use workouts::Workout;

/// Constructs the workout a sample describes and summarizes it.
pub fn summarize(sample: &Sample) -> Result<InfoMessage> {
    let workout = dispatch::construct(&sample.code, &sample.values)
        .with_context(|| format!("workout {} {:?}", sample.code, sample.values))?;
    let info = workout.summary();
    info.ensure_finite()?;
    dlog!(
        "summary type={} distance_km={:.3} calories={:.3}",
        info.training_type,
        info.distance_km,
        info.calories
    );
    Ok(info)
}

/// Summarizes samples in input order, handing each record to `emit` as soon
/// as it is computed.
///
/// Stops at the first sample that fails; records emitted before it stay emitted.
pub fn process(samples: &[Sample], mut emit: impl FnMut(&InfoMessage)) -> Result<usize> {
    for sample in samples {
        let info = summarize(sample)?;
        emit(&info);
    }
    Ok(samples.len())
}
