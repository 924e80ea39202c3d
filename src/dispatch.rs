use crate::dlog;
use crate::error::{WorkoutError, WorkoutResult};
use crate::workouts::{AnyWorkout, Running, SportsWalking, Swimming};
use std::fmt;
use std::str::FromStr;

/// Short type codes accepted by [`construct`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swm,
    Run,
    Wlk,
}

impl WorkoutCode {
    pub const ALL: [Self; 3] = [Self::Swm, Self::Run, Self::Wlk];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swm => "SWM",
            Self::Run => "RUN",
            Self::Wlk => "WLK",
        }
    }

    /// Number of positional values the variant expects.
    pub const fn arity(self) -> usize {
        match self {
            Self::Swm => 5,
            Self::Run => 3,
            Self::Wlk => 4,
        }
    }

    pub fn build(self, values: &[f64]) -> WorkoutResult<AnyWorkout> {
        if values.len() != self.arity() {
            return Err(WorkoutError::ArgumentCount {
                code: self.as_str(),
                expected: self.arity(),
                got: values.len(),
            });
        }

        let workout = match (self, values) {
            (Self::Swm, &[action, duration, weight, pool_length, laps]) => {
                Swimming::new(action, duration, weight, pool_length, laps)?.into()
            }
            (Self::Run, &[action, duration, weight]) => {
                Running::new(action, duration, weight)?.into()
            }
            (Self::Wlk, &[action, duration, weight, height]) => {
                SportsWalking::new(action, duration, weight, height)?.into()
            }
            _ => unreachable!("arity checked above"),
        };
        Ok(workout)
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType(s.to_string()))
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the workout named by `code` from its positional readings.
///
/// Unrecognised codes fail before anything is constructed.
pub fn construct(code: &str, values: &[f64]) -> WorkoutResult<AnyWorkout> {
    let code: WorkoutCode = code.parse()?;
    let workout = code.build(values)?;
    dlog!("constructed code={code} values={values:?} workout={workout:?}");
    Ok(workout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workouts::Workout;

    #[test]
    fn test_construct_running() {
        let w = construct("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let AnyWorkout::Running(r) = w else {
            panic!("expected Running, got {w:?}");
        };
        assert_eq!(r.training.action_count, 15000);
        assert_eq!(r.training.duration_h, 1.0);
        assert_eq!(r.training.weight_kg, 75.0);
    }

    #[test]
    fn test_construct_walking() {
        let w = construct("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        let AnyWorkout::SportsWalking(s) = w else {
            panic!("expected SportsWalking, got {w:?}");
        };
        assert_eq!(s.training.action_count, 9000);
        assert_eq!(s.height_cm, 180.0);
    }

    #[test]
    fn test_construct_swimming() {
        let w = construct("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let AnyWorkout::Swimming(s) = w else {
            panic!("expected Swimming, got {w:?}");
        };
        assert_eq!(s.training.action_count, 720);
        assert_eq!(s.training.weight_kg, 80.0);
        assert_eq!(s.pool_length_m, 25.0);
        assert_eq!(s.lap_count, 40);
        assert_eq!(w.label(), "Swimming");
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(
            construct("BIKE", &[1.0, 1.0, 1.0]),
            Err(WorkoutError::UnknownWorkoutType("BIKE".to_string()))
        );
        // Codes are case sensitive.
        assert_eq!(
            construct("run", &[15000.0, 1.0, 75.0]),
            Err(WorkoutError::UnknownWorkoutType("run".to_string()))
        );
    }

    #[test]
    fn test_unknown_code_checked_before_values() {
        // Bad values must not mask the unknown code.
        assert_eq!(
            construct("XYZ", &[]),
            Err(WorkoutError::UnknownWorkoutType("XYZ".to_string()))
        );
    }

    #[test]
    fn test_wrong_argument_count() {
        assert_eq!(
            construct("WLK", &[9000.0, 1.0, 75.0]),
            Err(WorkoutError::ArgumentCount {
                code: "WLK",
                expected: 4,
                got: 3
            })
        );
    }

    #[test]
    fn test_code_round_trip() {
        for code in WorkoutCode::ALL {
            assert_eq!(code.to_string().parse::<WorkoutCode>(), Ok(code));
        }
    }
}
