use crate::error::{WorkoutError, WorkoutResult};
use serde_json::{Value as JsonValue, json};
use std::fmt;

/// Computed summary of one workout, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    pub training_type: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        self.to_string()
    }

    /// Fails when any metric overflowed, e.g. from a subnormal duration.
    pub fn ensure_finite(&self) -> WorkoutResult<()> {
        let fields = [
            ("duration_h", self.duration_h),
            ("distance_km", self.distance_km),
            ("speed_kmh", self.speed_kmh),
            ("calories", self.calories),
        ];
        match fields.into_iter().find(|(_, v)| !v.is_finite()) {
            Some((field, value)) => Err(WorkoutError::NonFiniteResult {
                training_type: self.training_type,
                field,
                value,
            }),
            None => Ok(()),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        json!({
            "training_type": self.training_type,
            "duration_h": self.duration_h,
            "distance_km": self.distance_km,
            "speed_kmh": self.speed_kmh,
            "calories": self.calories,
        })
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration_h, self.distance_km, self.speed_kmh, self.calories
        )
    }
}

/// One raw input: a type code plus its positional readings.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub code: String,
    pub values: Vec<f64>,
}

impl Sample {
    pub fn new(code: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            values: values.into(),
        }
    }
}
