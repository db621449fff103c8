//! `predict` subcommand.

use astro_core::birth::FormField;
use astro_core::service::{CityLookup, PredictionService};
use astro_session::render::{display_state, DisplayState, RenderedResult};
use astro_session::Workflow;
use clap::Args;
use log::{info, warn};

#[derive(Args, Debug, Clone, Default)]
pub struct PredictArgs {
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// Local birth time, HH:MM
    #[arg(long)]
    pub time: String,

    /// City to look up; the picked candidate fills coordinates and timezone
    #[arg(long)]
    pub city: Option<String>,

    /// Index of the candidate to pick from the city lookup
    #[arg(long, default_value_t = 0)]
    pub pick: usize,

    /// Latitude in decimal degrees (overrides the city lookup)
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<String>,

    /// Longitude in decimal degrees (overrides the city lookup)
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<String>,

    /// Hours from UTC, e.g. 3 or 5.5 (overrides the city lookup)
    #[arg(long, allow_hyphen_values = true)]
    pub timezone: Option<String>,
}

/// Fill the form from `args`, submit once and return the rendered result.
///
/// A local rejection or a failed computation becomes an error carrying the
/// message the form would have shown.
pub async fn predict<L, P>(workflow: &Workflow<L, P>, args: &PredictArgs) -> anyhow::Result<RenderedResult>
where
    L: CityLookup,
    P: PredictionService,
{
    workflow.set_field(FormField::BirthDate, args.date.as_str());
    workflow.set_field(FormField::BirthTime, args.time.as_str());

    if let Some(city) = &args.city {
        workflow.search(city).await;
        if workflow.select(args.pick) {
            info!("Using {}", workflow.with_session(|s| s.field(FormField::City).to_string()));
        } else {
            let found = workflow.with_session(|s| s.candidates().len());
            warn!(
                "No candidate #{} for {:?} ({} found); relying on explicit coordinates",
                args.pick, city, found
            );
        }
    }

    let overrides = [
        (FormField::Latitude, &args.latitude),
        (FormField::Longitude, &args.longitude),
        (FormField::Timezone, &args.timezone),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            workflow.set_field(field, value.as_str());
        }
    }

    workflow.submit().await?;

    match workflow.with_session(|s| display_state(s)) {
        DisplayState::Result(rendered) => Ok(rendered),
        DisplayState::Error(message) => anyhow::bail!(message),
        other => anyhow::bail!("Submission finished without an outcome: {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{RecordingPredictor, StaticLookup};
    use astro_core::city::CityCandidate;
    use astro_core::error::{ComputeError, LookupError, FALLBACK_PREDICTION_ERROR};
    use astro_core::prediction::{PlanetPosition, PredictionResult};

    fn yerevan() -> CityCandidate {
        CityCandidate {
            name: "Ереван".to_string(),
            country: "Армения".to_string(),
            latitude: 40.1792,
            longitude: 44.4991,
            timezone: 4.0,
        }
    }

    fn result() -> PredictionResult {
        PredictionResult {
            planets: vec![PlanetPosition {
                name: "Марс".to_string(),
                sign: "Овен".to_string(),
                nakshatra: "Ашвини".to_string(),
                house: "1".to_string(),
            }],
            major_periods: Vec::new(),
            narrative: "Энергичный год.".to_string(),
        }
    }

    fn args() -> PredictArgs {
        PredictArgs {
            date: "1985-11-02".to_string(),
            time: "07:05".to_string(),
            ..PredictArgs::default()
        }
    }

    #[tokio::test]
    async fn city_pick_fills_location_and_overrides_win() {
        let predictor = RecordingPredictor::new(Ok(result()));
        let workflow = Workflow::new(StaticLookup(Ok(vec![yerevan()])), &predictor);
        let args = PredictArgs {
            city: Some("Ереван".to_string()),
            timezone: Some("3".to_string()),
            ..args()
        };

        let rendered = predict(&workflow, &args).await.unwrap();
        assert_eq!(rendered.planets[0].name, "Марс");

        let payloads = predictor.payloads.lock().unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].latitude, 40.1792);
        assert_eq!(payloads[0].longitude, 44.4991);
        assert_eq!(payloads[0].timezone, 3.0);
    }

    #[tokio::test]
    async fn failed_lookup_still_allows_manual_coordinates() {
        let predictor = RecordingPredictor::new(Ok(result()));
        let workflow = Workflow::new(StaticLookup(Err(LookupError::Status(500))), &predictor);
        let args = PredictArgs {
            city: Some("Ереван".to_string()),
            latitude: Some("-40.1792".to_string()),
            longitude: Some("44.4991".to_string()),
            timezone: Some("4".to_string()),
            ..args()
        };

        predict(&workflow, &args).await.unwrap();
        assert_eq!(predictor.payloads.lock().unwrap()[0].latitude, -40.1792);
    }

    #[tokio::test]
    async fn missing_coordinates_are_rejected_locally() {
        let predictor = RecordingPredictor::new(Ok(result()));
        let workflow = Workflow::new(StaticLookup(Ok(Vec::new())), &predictor);

        let err = predict(&workflow, &args()).await.unwrap_err();
        assert!(err.to_string().contains("latitude"), "{err}");
        assert!(predictor.payloads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn computation_failure_carries_user_message() {
        let predictor = RecordingPredictor::new(Err(ComputeError::Timeout));
        let workflow = Workflow::new(StaticLookup(Ok(vec![yerevan()])), &predictor);
        let args = PredictArgs {
            city: Some("Ереван".to_string()),
            ..args()
        };

        let err = predict(&workflow, &args).await.unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_PREDICTION_ERROR);
    }
}
