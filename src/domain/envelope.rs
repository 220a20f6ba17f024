//! Fixture envelope: the top-level object of a fixture file

use crate::domain::constants::envelope::{FIXTURE_YEAR, SCHEMA_VERSION};
use crate::domain::event::EventRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub schema_version: u32,
    pub year: i32,
    pub events: Vec<EventRecord>,
}

impl Envelope {
    /// Wraps `events` with the current schema version and fixture year
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            year: FIXTURE_YEAR,
            events,
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
