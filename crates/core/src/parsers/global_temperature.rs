use serde::Deserialize;
use thiserror::Error;

use crate::model::{MonthlyRecord, TemperatureDataset};

#[derive(Debug, Error)]
pub enum MalformedDatasetError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("`monthlyVariance` is empty")]
    Empty,
    #[error("record {index}: month {month} is outside 1-12")]
    MonthOutOfRange { index: usize, month: i64 },
    #[error("record {index}: variance is not finite")]
    NonFiniteVariance { index: usize },
}

/// Wire shape of the global temperature dataset.
///
/// Both top-level fields are optional here so that an absent field is
/// reported by name instead of as a generic serde error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    #[serde(default)]
    base_temperature: Option<f64>,
    #[serde(default)]
    monthly_variance: Option<Vec<RawRecord>>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    year: i32,
    month: i64,
    variance: f64,
}

/// Parse the `{ baseTemperature, monthlyVariance: [{ year, month, variance }] }`
/// document. Unknown fields are ignored; (year, month) uniqueness is not checked.
pub fn parse_global_temperature(data: &[u8]) -> Result<TemperatureDataset, MalformedDatasetError> {
    let raw: RawDataset = serde_json::from_slice(data)?;

    let base_temperature = raw
        .base_temperature
        .ok_or(MalformedDatasetError::MissingField("baseTemperature"))?;
    let raw_records = raw
        .monthly_variance
        .ok_or(MalformedDatasetError::MissingField("monthlyVariance"))?;
    if raw_records.is_empty() {
        return Err(MalformedDatasetError::Empty);
    }

    let mut monthly_variance = Vec::with_capacity(raw_records.len());
    for (index, r) in raw_records.into_iter().enumerate() {
        let month = u8::try_from(r.month)
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or(MalformedDatasetError::MonthOutOfRange {
                index,
                month: r.month,
            })?;
        if !r.variance.is_finite() {
            return Err(MalformedDatasetError::NonFiniteVariance { index });
        }
        monthly_variance.push(MonthlyRecord {
            year: r.year,
            month,
            variance: r.variance,
        });
    }

    tracing::debug!(
        records = monthly_variance.len(),
        base_temperature,
        "parsed temperature dataset"
    );

    Ok(TemperatureDataset {
        base_temperature,
        monthly_variance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_format() {
        let json = br#"{
            "baseTemperature": 8.66,
            "monthlyVariance": [
                { "year": 1753, "month": 1, "variance": -1.366 },
                { "year": 1753, "month": 2, "variance": -2.223 }
            ]
        }"#;
        let ds = parse_global_temperature(json).unwrap();
        assert_eq!(ds.base_temperature, 8.66);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.monthly_variance[1].month, 2);
        assert_eq!(ds.monthly_variance[1].variance, -2.223);
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = br#"{ "baseTemperature": 8.0, "source": "x",
            "monthlyVariance": [{ "year": 2000, "month": 6, "variance": 0.1, "extra": true }] }"#;
        assert!(parse_global_temperature(json).is_ok());
    }

    #[test]
    fn missing_base_temperature() {
        let json = br#"{ "monthlyVariance": [{ "year": 2000, "month": 6, "variance": 0.1 }] }"#;
        assert!(matches!(
            parse_global_temperature(json),
            Err(MalformedDatasetError::MissingField("baseTemperature"))
        ));
    }

    #[test]
    fn missing_monthly_variance() {
        let json = br#"{ "baseTemperature": 8.66 }"#;
        assert!(matches!(
            parse_global_temperature(json),
            Err(MalformedDatasetError::MissingField("monthlyVariance"))
        ));
    }

    #[test]
    fn rejects_empty_records_and_bad_months() {
        let empty = br#"{ "baseTemperature": 8.66, "monthlyVariance": [] }"#;
        assert!(matches!(
            parse_global_temperature(empty),
            Err(MalformedDatasetError::Empty)
        ));

        let bad = br#"{ "baseTemperature": 8.66, "monthlyVariance": [
            { "year": 2000, "month": 1, "variance": 0.1 },
            { "year": 2000, "month": 13, "variance": 0.1 }
        ] }"#;
        assert!(matches!(
            parse_global_temperature(bad),
            Err(MalformedDatasetError::MonthOutOfRange { index: 1, month: 13 })
        ));
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            parse_global_temperature(b"<html>404</html>"),
            Err(MalformedDatasetError::Json(_))
        ));
    }
}
