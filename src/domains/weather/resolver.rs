//! Locating the current weather description inside a JMA forecast feed.
//!
//! The JMA forecast document is a list of reports, each holding a
//! `timeSeries` list, each holding an `areas` list. An area looks like
//! `{"area": {"name": "東京地方"}, "weathers": ["晴れ", ...]}`. None of that
//! nesting is guaranteed, so the walk skips anything of the wrong kind.
//!
//! The search is an ordered list of [`Strategy`] values tried in turn; the
//! first one that yields a value wins.

use serde_json::Value;
use tracing::debug;

use super::document::Node;

/// Area names that identify the Tokyo forecast, in preference order.
pub const TOKYO_AREA_NAMES: &[&str] = &["東京地方", "東京", "Tokyo"];

/// One pass over the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// First area, in document order, whose name contains any of the names.
    PreferredName(&'static [&'static str]),
    /// First area anywhere that carries weather entries.
    FirstAvailable,
}

/// The default search: Tokyo areas first, then anything at all.
pub const TOKYO_STRATEGIES: &[Strategy] = &[
    Strategy::PreferredName(TOKYO_AREA_NAMES),
    Strategy::FirstAvailable,
];

/// An area that has at least one weather entry.
#[derive(Debug, Clone, Copy)]
struct Area<'a> {
    name: &'a str,
    weather: &'a str,
}

impl Strategy {
    fn accepts(&self, area: &Area<'_>) -> bool {
        match self {
            Strategy::PreferredName(names) => names.iter().any(|n| area.name.contains(n)),
            Strategy::FirstAvailable => true,
        }
    }

    /// Run this pass over the document.
    pub fn apply(&self, document: &Value) -> Option<String> {
        areas(document)
            .find(|area| self.accepts(area))
            .map(|area| area.weather.to_string())
    }
}

/// Try each strategy in order and return the first weather found.
pub fn resolve(document: &Value, strategies: &[Strategy]) -> Option<String> {
    strategies.iter().find_map(|strategy| {
        let found = strategy.apply(document);
        if let Some(weather) = &found {
            debug!(?strategy, weather = %weather, "Resolved weather");
        }
        found
    })
}

/// Resolve today's Tokyo weather with [`TOKYO_STRATEGIES`].
pub fn resolve_tokyo_weather(document: &Value) -> Option<String> {
    resolve(document, TOKYO_STRATEGIES)
}

/// Every usable area, in document order.
///
/// An area is usable when it is a map whose `weathers` list is non-empty and
/// starts with a non-empty string.
fn areas(document: &Value) -> impl Iterator<Item = Area<'_>> {
    Node::from(document)
        .elements()
        .flat_map(|report| report.field("timeSeries").elements())
        .flat_map(|series| series.field("areas").elements())
        .filter_map(usable_area)
}

fn usable_area(area: Node<'_>) -> Option<Area<'_>> {
    if !area.is_map() {
        return None;
    }
    let weather = area
        .field("weathers")
        .first()
        .as_str()
        .filter(|w| !w.is_empty())?;
    let name = area.path(&["area", "name"]).as_str().unwrap_or("");
    Some(Area { name, weather })
}
