//! Binding a picked city candidate into the form.

use crate::resolver::CityResolver;
use astro_core::birth::BirthForm;
use astro_core::city::CityCandidate;
use log::debug;

/// Copy the candidate's name, coordinates and timezone into the form, echo
/// its name in the search box and close the suggestion list.
///
/// Infallible. The four location fields are replaced together; any search
/// still in flight is orphaned so it cannot reopen the list.
pub fn bind_candidate(
    form: &mut BirthForm,
    search_text: &mut String,
    resolver: &mut CityResolver,
    candidate: &CityCandidate,
) {
    debug!(
        "Selected {:?} ({}, {})",
        candidate.name, candidate.latitude, candidate.longitude
    );
    form.apply_location(
        &candidate.name,
        candidate.latitude,
        candidate.longitude,
        candidate.timezone,
    );
    search_text.clone_from(&candidate.name);
    resolver.dismiss();
}
