//! `search-city` subcommand.

use astro_core::service::{CityLookup, PredictionService};
use astro_session::render::{render_candidates, CandidateRow};
use astro_session::resolver::MIN_QUERY_CHARS;
use astro_session::Workflow;
use log::info;

/// Run one lookup and return the suggestion rows.
///
/// Queries shorter than two characters and failed lookups both yield an empty
/// list; failures are only logged.
pub async fn search_city<L, P>(workflow: &Workflow<L, P>, query: &str) -> Vec<CandidateRow>
where
    L: CityLookup,
    P: PredictionService,
{
    if !workflow.search(query).await {
        info!(
            "No lookup result applied for {:?} (queries need at least {} characters)",
            query, MIN_QUERY_CHARS
        );
    }
    workflow.with_session(|session| render_candidates(session.candidates()))
}
