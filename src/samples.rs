use crate::types::Sample;
use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

/// Readings processed when no sample file is given.
pub fn default_samples() -> Vec<Sample> {
    vec![
        Sample::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Sample::new("RUN", [15000.0, 1.0, 75.0]),
        Sample::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Reads samples from a JSON file.
///
/// Accepts an array whose entries are either `["RUN", [15000, 1, 75]]`
/// or `{"code": "RUN", "values": [15000, 1, 75]}`.
pub fn load_samples(path: &Path) -> Result<Vec<Sample>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading samples: {}", path.display()))?;
    parse_samples(&text).with_context(|| format!("parsing samples: {}", path.display()))
}

pub fn parse_samples(text: &str) -> Result<Vec<Sample>> {
    let root: JsonValue = serde_json::from_str(text)?;
    let Some(entries) = root.as_array() else {
        bail!("expected a JSON array of samples");
    };

    let mut out = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let sample = parse_entry(entry).with_context(|| format!("sample #{i}"))?;
        out.push(sample);
    }

    tracing::info!(samples = out.len(), "loaded samples");
    Ok(out)
}

fn parse_entry(entry: &JsonValue) -> Result<Sample> {
    let (code, values) = match entry {
        JsonValue::Array(pair) if pair.len() == 2 => (&pair[0], &pair[1]),
        JsonValue::Object(map) => {
            let Some(code) = map.get("code") else {
                bail!("missing \"code\"");
            };
            let Some(values) = map.get("values") else {
                bail!("missing \"values\"");
            };
            (code, values)
        }
        other => bail!("expected [code, values] or {{code, values}}, got {other}"),
    };

    let Some(code) = code.as_str() else {
        bail!("code must be a string, got {code}");
    };
    let Some(values) = values.as_array() else {
        bail!("values must be an array, got {values}");
    };

    let values = values
        .iter()
        .map(|v| {
            v.as_f64()
                .with_context(|| format!("value must be a number, got {v}"))
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(Sample::new(code, values))
}
