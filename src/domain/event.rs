//! Event records
//!
//! An event record is one synthetic observation. Records are built once by
//! the generator and never mutated afterwards.

use crate::domain::categories::{EventType, Instrument, Severity};
use crate::domain::constants::generation::{ID_INDEX_WIDTH, ID_PREFIX};
use crate::domain::coordinates::Coordinates;
use crate::domain::timestamp::FixtureTimestamp;
use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Identifier of a fixture event, e.g. `perf_test_2024_007`
#[nutype(
    validate(not_empty, regex = r"^perf_test_\d{4}_\d{3,}$"),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct EventId(String);

impl EventId {
    /// Id of the event at zero-based `index` in a fixture for `year`
    pub fn for_index(year: i32, index: usize) -> Self {
        let id = format!("{ID_PREFIX}_{year}_{index:0width$}", width = ID_INDEX_WIDTH);
        Self::try_new(id).expect("four-digit year and padded index always match the id pattern")
    }
}

/// Detection confidence (0.0 inclusive to 1.0 exclusive)
#[nutype(
    validate(finite, greater_or_equal = 0.0, less = 1.0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        PartialOrd,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct Confidence(f64);

/// Observed temperature (20.0 to 70.0)
#[nutype(
    validate(finite, greater_or_equal = 20.0, less_or_equal = 70.0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        PartialOrd,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct Temperature(f64);

/// Where an event came from; fixtures only ever contain generated events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    Generated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    pub confidence: Confidence,
    pub temperature: Temperature,
    pub description: String,
    pub source: EventSource,
    pub processing_time: FixtureTimestamp,
}

/// One synthetic observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    pub title: String,
    pub timestamp: FixtureTimestamp,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub severity: Severity,
    pub instrument: Instrument,
    pub coordinates: Coordinates,
    pub metadata: EventMetadata,
}

/// Human-readable title; numbering is one-based
pub fn event_title(index: usize) -> String {
    format!("Performance Test Event {}", index + 1)
}

/// Metadata description; numbering is one-based
pub fn event_description(index: usize) -> String {
    format!("Test event {} for performance testing", index + 1)
}
