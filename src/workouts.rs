//! Workout variants and their formulas.
//!
//! Every variant shares [`Training`] (action count, duration, weight) and the
//! default distance / mean speed formulas from [`Workout`]. Calorie formulas are
//! variant specific, so `spent_calories` has no default.

use crate::error::{WorkoutError, WorkoutResult};
use crate::types::InfoMessage;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Stride length used by running and walking.
pub const STEP_LENGTH_M: f64 = 0.65;
/// Stroke length used by swimming.
pub const STROKE_LENGTH_M: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const WALK_SPEED_EXPONENT: i32 = 2;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Readings common to every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    pub action_count: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl Training {
    pub fn new(action: f64, duration_h: f64, weight_kg: f64) -> WorkoutResult<Self> {
        Ok(Self {
            action_count: count("action_count", action)?,
            duration_h: positive("duration_h", duration_h)?,
            weight_kg: positive("weight_kg", weight_kg)?,
        })
    }
}

pub trait Workout {
    fn training(&self) -> &Training;

    /// Display name used in the summary.
    fn label(&self) -> &'static str;

    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    fn distance_km(&self) -> f64 {
        f64::from(self.training().action_count) * self.step_length_m() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.training().duration_h
    }

    fn spent_calories(&self) -> f64;

    fn summary(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.label(),
            duration_h: self.training().duration_h,
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub training: Training,
}

impl Running {
    pub fn new(action: f64, duration_h: f64, weight_kg: f64) -> WorkoutResult<Self> {
        Ok(Self {
            training: Training::new(action, duration_h, weight_kg)?,
        })
    }
}

impl Workout for Running {
    fn training(&self) -> &Training {
        &self.training
    }

    fn label(&self) -> &'static str {
        "Running"
    }

    fn spent_calories(&self) -> f64 {
        let t = &self.training;
        (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() - RUN_SPEED_SHIFT) * t.weight_kg / M_IN_KM
            * t.duration_h
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub training: Training,
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action: f64, duration_h: f64, weight_kg: f64, height_cm: f64) -> WorkoutResult<Self> {
        Ok(Self {
            training: Training::new(action, duration_h, weight_kg)?,
            height_cm: positive("height_cm", height_cm)?,
        })
    }
}

impl Workout for SportsWalking {
    fn training(&self) -> &Training {
        &self.training
    }

    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    fn spent_calories(&self) -> f64 {
        let t = &self.training;
        // Square first, then floor-divide by height.
        let speed_term = (self.mean_speed_kmh().powi(WALK_SPEED_EXPONENT) / self.height_cm).floor();
        (WALK_WEIGHT_MULTIPLIER * t.weight_kg
            + speed_term * WALK_SPEED_HEIGHT_MULTIPLIER * t.weight_kg)
            * t.duration_h
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub training: Training,
    pub pool_length_m: f64,
    pub lap_count: u32,
}

impl Swimming {
    pub fn new(
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        lap_count: f64,
    ) -> WorkoutResult<Self> {
        Ok(Self {
            training: Training::new(action, duration_h, weight_kg)?,
            pool_length_m: positive("pool_length_m", pool_length_m)?,
            lap_count: count("lap_count", lap_count)?,
        })
    }
}

impl Workout for Swimming {
    fn training(&self) -> &Training {
        &self.training
    }

    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn step_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.lap_count) / M_IN_KM / self.training.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.training.weight_kg
    }
}

/// The closed set of workouts the dispatcher can build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyWorkout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl AnyWorkout {
    fn inner(&self) -> &dyn Workout {
        match self {
            Self::Running(w) => w,
            Self::SportsWalking(w) => w,
            Self::Swimming(w) => w,
        }
    }
}

impl Workout for AnyWorkout {
    fn training(&self) -> &Training {
        self.inner().training()
    }

    fn label(&self) -> &'static str {
        self.inner().label()
    }

    fn step_length_m(&self) -> f64 {
        self.inner().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.inner().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.inner().mean_speed_kmh()
    }

    fn spent_calories(&self) -> f64 {
        self.inner().spent_calories()
    }
}

impl From<Running> for AnyWorkout {
    fn from(w: Running) -> Self {
        Self::Running(w)
    }
}

impl From<SportsWalking> for AnyWorkout {
    fn from(w: SportsWalking) -> Self {
        Self::SportsWalking(w)
    }
}

impl From<Swimming> for AnyWorkout {
    fn from(w: Swimming) -> Self {
        Self::Swimming(w)
    }
}

fn positive(field: &'static str, value: f64) -> WorkoutResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidValue { field, value })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(field: &'static str, value: f64) -> WorkoutResult<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidValue { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_running_metrics() {
        let w = Running::new(15000.0, 1.0, 75.0).unwrap();
        assert!(close(w.distance_km(), 9.75));
        assert!(close(w.mean_speed_kmh(), 9.75));
        assert!(close(w.spent_calories(), 699.75));
    }

    #[test]
    fn test_walking_floor_division_before_multiplication() {
        let w = SportsWalking::new(9000.0, 1.0, 75.0, 180.0).unwrap();
        assert!(close(w.distance_km(), 5.85));
        assert!(close(w.mean_speed_kmh(), 5.85));
        // 5.85^2 / 180 floors to zero, leaving only the weight term.
        assert!(close(w.spent_calories(), 0.035 * 75.0 * 60.0));
    }

    #[test]
    fn test_walking_speed_term_kicks_in() {
        // 30 km in 1 h: 900 / 180 = 5 exactly.
        let steps = 30.0 * M_IN_KM / STEP_LENGTH_M;
        let w = SportsWalking::new(steps.round(), 1.0, 80.0, 180.0).unwrap();
        let speed_term = (w.mean_speed_kmh().powi(2) / 180.0).floor();
        assert!(close(speed_term, 5.0));
        let expected = (0.035 * 80.0 + speed_term * 0.029 * 80.0) * 60.0;
        assert!(close(w.spent_calories(), expected));
    }

    #[test]
    fn test_swimming_metrics() {
        let w = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).unwrap();
        assert!(close(w.distance_km(), 720.0 * 1.38 / 1000.0));
        assert!(close(w.mean_speed_kmh(), 1.0));
        assert!(close(w.spent_calories(), 336.0));
    }

    #[test]
    fn test_summary_is_stable() {
        let w = AnyWorkout::from(Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).unwrap());
        let first = w.summary();
        let second = w.summary();
        assert_eq!(first, second);
        assert_eq!(first.training_type, "Swimming");
        assert!(close(first.calories, 336.0));
    }

    #[test]
    fn test_any_workout_delegates() {
        let run = AnyWorkout::from(Running::new(15000.0, 2.0, 75.0).unwrap());
        assert_eq!(run.label(), "Running");
        assert!(close(run.mean_speed_kmh(), 4.875));

        let walk = AnyWorkout::from(SportsWalking::new(9000.0, 1.0, 75.0, 180.0).unwrap());
        assert_eq!(walk.label(), "SportsWalking");
        assert!(close(walk.step_length_m(), STEP_LENGTH_M));
    }

    #[test]
    fn test_rejects_invalid_readings() {
        assert_eq!(
            Running::new(100.0, 0.0, 70.0),
            Err(WorkoutError::InvalidValue {
                field: "duration_h",
                value: 0.0
            })
        );
        assert!(Running::new(-1.0, 1.0, 70.0).is_err());
        assert!(Running::new(10.5, 1.0, 70.0).is_err());
        assert!(Running::new(10.0, 1.0, f64::NAN).is_err());
        assert!(SportsWalking::new(10.0, 1.0, 70.0, 0.0).is_err());
        assert!(Swimming::new(10.0, 1.0, 70.0, 25.0, -3.0).is_err());
        assert!(Swimming::new(10.0, 1.0, 70.0, -25.0, 3.0).is_err());
    }

    #[test]
    fn test_zero_counts_are_valid() {
        let w = Swimming::new(0.0, 0.5, 70.0, 25.0, 0.0).unwrap();
        assert!(close(w.distance_km(), 0.0));
        assert!(close(w.mean_speed_kmh(), 0.0));
        assert!(close(w.spent_calories(), 1.1 * 2.0 * 70.0));
    }
}
