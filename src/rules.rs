//! The METAR decoding rule library.
//!
//! One file per rule family, each exposing `fn rules() -> Vec<Rule>`; [`get`]
//! concatenates the families into the one ordered collection the dispatcher
//! walks. Order is the contract: matchers are not disjoint, and the first
//! hit wins, so families run most-specific-first and the catch-all station
//! matcher (`^[A-Z]{4}$`) goes last so it can never shadow a fixed
//! four-letter code.

use std::sync::Arc;

use crate::Rule;
use crate::api::AirportLookup;

pub(crate) mod helpers;

mod direction;
mod misc;
mod movement;
mod obscuration;
mod precipitation;
mod pressure;
mod report;
mod sky;
mod temperature;
mod thunderstorm;
mod wind;

#[cfg(test)]
mod tests;

/// Build the full rule library in priority order. The lookup capability, when
/// supplied, puts the station rule in strict mode: unrecognized four-letter
/// tokens stay undecoded instead of receiving the generic identifier wording.
pub(crate) fn get(lookup: Option<Arc<dyn AirportLookup>>) -> Vec<Rule> {
    let mut rules = Vec::new();

    rules.extend(report::rules());
    rules.extend(temperature::rules());
    rules.extend(precipitation::rules());
    rules.extend(thunderstorm::rules());
    rules.extend(obscuration::rules());
    rules.extend(sky::rules());
    rules.extend(direction::rules());
    rules.extend(wind::rules());
    rules.extend(movement::rules());
    rules.extend(pressure::rules());
    rules.extend(misc::rules());
    rules.push(report::station(lookup));

    rules
}
