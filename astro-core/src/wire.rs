//! JSON bodies exchanged with the city lookup and prediction services.
//!
//! Responses are parsed into explicit schemas; any mismatch becomes a
//! `LookupError::Malformed` or `ComputeError::Malformed` instead of a panic.

use crate::birth::{RequestPayload, DATE_FORMAT, TIME_FORMAT};
use crate::city::CityCandidate;
use crate::error::{ComputeError, LookupError};
use crate::prediction::{MajorPeriod, PlanetPosition, PredictionResult};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/search-city`
#[derive(Debug, Serialize)]
pub struct CitySearchRequest<'a> {
    pub query: &'a str,
}

/// Body of `POST /api/get-prediction`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    /// YYYY-MM-DD
    pub birth_date: String,
    /// HH:MM
    pub birth_time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: f64,
}

impl From<&RequestPayload> for PredictionRequest {
    fn from(payload: &RequestPayload) -> Self {
        Self {
            birth_date: payload.birth_date.format(DATE_FORMAT).to_string(),
            birth_time: payload.birth_time.format(TIME_FORMAT).to_string(),
            latitude: payload.latitude,
            longitude: payload.longitude,
            timezone: payload.timezone,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PlanetBody {
    name: String,
    sign: String,
    nakshatra: String,
    #[serde(default, deserialize_with = "house_text")]
    house: String,
}

#[derive(Debug, Deserialize)]
struct PeriodBody {
    planet: String,
    start: String,
    end: String,
}

#[derive(Debug, Deserialize)]
struct PredictionBody {
    planets: Vec<PlanetBody>,
    #[serde(default)]
    vdasha: Option<Vec<PeriodBody>>,
    prediction: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Value,
}

fn house_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!("unexpected house value {other}"))),
    }
}

impl From<PredictionBody> for PredictionResult {
    fn from(body: PredictionBody) -> Self {
        Self {
            planets: body
                .planets
                .into_iter()
                .map(|p| PlanetPosition {
                    name: p.name,
                    sign: p.sign,
                    nakshatra: p.nakshatra,
                    house: p.house,
                })
                .collect(),
            major_periods: body
                .vdasha
                .unwrap_or_default()
                .into_iter()
                .map(|v| MajorPeriod {
                    planet: v.planet,
                    start: v.start,
                    end: v.end,
                })
                .collect(),
            narrative: body.prediction,
        }
    }
}

/// Parse a successful city lookup body.
pub fn parse_candidates(body: &str) -> Result<Vec<CityCandidate>, LookupError> {
    serde_json::from_str(body).map_err(|e| LookupError::Malformed(e.to_string()))
}

/// Parse a successful prediction body.
pub fn parse_prediction(body: &str) -> Result<PredictionResult, ComputeError> {
    serde_json::from_str::<PredictionBody>(body)
        .map(PredictionResult::from)
        .map_err(|e| ComputeError::Malformed(e.to_string()))
}

/// Extract the `detail` message from an error body.
///
/// Only a non-empty string counts; validation errors that carry a list of
/// issues, or bodies that are not JSON at all, yield `None`.
pub fn error_detail(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorBody>(body).ok()?.detail {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn prediction_request_uses_camel_case_and_form_formats() {
        let payload = RequestPayload {
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            birth_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            latitude: 55.7558,
            longitude: 37.6173,
            timezone: 3.0,
        };
        let json = serde_json::to_value(PredictionRequest::from(&payload)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "birthDate": "1990-05-15",
                "birthTime": "14:30",
                "latitude": 55.7558,
                "longitude": 37.6173,
                "timezone": 3.0,
            })
        );
    }

    #[test]
    fn candidates_keep_service_order() {
        let body = r#"[
            {"name":"Moscow, Russia","country":"Russia","latitude":55.7558,"longitude":37.6173,"timezone":3},
            {"name":"Moscow, Idaho","country":"United States","latitude":46.7324,"longitude":-117.0002,"timezone":-8}
        ]"#;
        let cities = parse_candidates(body).unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].country, "Russia");
        assert_eq!(cities[1].timezone, -8.0);
    }

    #[test]
    fn candidate_schema_mismatch_is_malformed() {
        assert!(matches!(
            parse_candidates(r#"{"detail":"City search error"}"#),
            Err(LookupError::Malformed(_))
        ));
        assert!(matches!(
            parse_candidates(r#"[{"name":"Oslo"}]"#),
            Err(LookupError::Malformed(_))
        ));
    }

    #[test]
    fn prediction_body_maps_to_result() {
        let body = r#"{
            "planets": [
                {"name":"Солнце","sign":"Телец","nakshatra":"Криттика","house":9},
                {"name":"Луна","sign":"Рак","nakshatra":"Пушья","house":"11"}
            ],
            "vdasha": [{"planet":"Раху","start":"12-02-2019 10:00","end":"12-02-2037 10:00"}],
            "prediction": "Год роста."
        }"#;
        let result = parse_prediction(body).unwrap();
        assert_eq!(result.planets.len(), 2);
        assert_eq!(result.planets[0].house, "9");
        assert_eq!(result.planets[1].house, "11");
        assert_eq!(result.major_periods[0].planet, "Раху");
        assert_eq!(result.major_periods[0].end, "12-02-2037 10:00");
        assert_eq!(result.narrative, "Год роста.");
    }

    #[test]
    fn missing_or_null_vdasha_is_empty() {
        let absent = r#"{"planets":[],"prediction":"x"}"#;
        let null = r#"{"planets":[],"vdasha":null,"prediction":"x"}"#;
        assert!(parse_prediction(absent).unwrap().major_periods.is_empty());
        assert!(parse_prediction(null).unwrap().major_periods.is_empty());
    }

    #[test]
    fn prediction_schema_mismatch_is_malformed() {
        assert!(matches!(
            parse_prediction(r#"{"planets":[]}"#),
            Err(ComputeError::Malformed(_))
        ));
        assert!(matches!(
            parse_prediction("<html>Bad Gateway</html>"),
            Err(ComputeError::Malformed(_))
        ));
    }

    #[test]
    fn error_detail_only_for_strings() {
        assert_eq!(
            error_detail(r#"{"detail":"Prediction error: quota exceeded"}"#),
            Some("Prediction error: quota exceeded".to_string())
        );
        assert_eq!(
            error_detail(r#"{"detail":[{"loc":["body","latitude"],"msg":"field required"}]}"#),
            None
        );
        assert_eq!(error_detail(r#"{"detail":""}"#), None);
        assert_eq!(error_detail("Internal Server Error"), None);
        assert_eq!(error_detail("{}"), None);
    }
}
