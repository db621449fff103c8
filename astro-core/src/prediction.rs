use serde::{Deserialize, Serialize};

/// Placement of one planet in the natal chart.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub name: String,
    pub sign: String,
    pub nakshatra: String,
    /// House number as text; the service sends either a number or a string
    pub house: String,
}

/// One major period (mahadasha) of the Vimshottari cycle.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MajorPeriod {
    pub planet: String,
    /// Start as sent by the service, e.g. "15-03-2018 06:12"
    pub start: String,
    pub end: String,
}

/// Everything the computation service returns for one submission.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct PredictionResult {
    /// In the order supplied by the service
    pub planets: Vec<PlanetPosition>,
    /// May be empty
    pub major_periods: Vec<MajorPeriod>,
    pub narrative: String,
}
