//! Synthetic event generation
//!
//! The random source is owned by the generator and consulted sequentially,
//! one record at a time, in index order. Seeding it makes a run
//! reproducible; the clock only affects `metadata.processing_time`.

use crate::domain::constants::{calendar, coordinates, envelope::FIXTURE_YEAR, metadata};
use crate::domain::event::{event_description, event_title};
use crate::domain::{
    Clock, Confidence, Coordinates, Envelope, EventId, EventMetadata, EventRecord, EventSource,
    FixtureTimestamp, Latitude, Longitude, SystemClock, Temperature,
};
use crate::log_messages::generation as log;
use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, instrument};

/// Builds fixture events from a random source and a clock
pub struct EventGenerator<R, C = SystemClock> {
    rng: R,
    clock: C,
}

impl<R: Rng> EventGenerator<R, SystemClock> {
    pub fn new(rng: R) -> Self {
        Self::with_clock(rng, SystemClock)
    }
}

impl<R: Rng, C: Clock> EventGenerator<R, C> {
    pub fn with_clock(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }

    /// Builds the record at zero-based `index`
    pub fn generate_event(&mut self, index: usize) -> EventRecord {
        let timestamp = FixtureTimestamp::start_of_day(self.sample_date());

        let lat = Latitude::try_new(
            self.rng
                .gen_range(coordinates::LAT_MIN..=coordinates::LAT_MAX),
        )
        .expect("sampled latitude lies within the latitude range");
        let lng = Longitude::try_new(
            self.rng
                .gen_range(coordinates::LNG_MIN..=coordinates::LNG_MAX),
        )
        .expect("sampled longitude lies within the longitude range");

        let event_type = self.rng.gen();
        let severity = self.rng.gen();
        let instrument = self.rng.gen();

        let confidence = Confidence::try_new(self.rng.gen::<f64>())
            .expect("standard float samples lie in [0, 1)");
        let temperature = Temperature::try_new(
            self.rng
                .gen_range(metadata::TEMPERATURE_MIN..=metadata::TEMPERATURE_MAX),
        )
        .expect("sampled temperature lies within the temperature range");

        EventRecord {
            id: EventId::for_index(FIXTURE_YEAR, index),
            title: event_title(index),
            timestamp,
            event_type,
            severity,
            instrument,
            coordinates: Coordinates::new(lat, lng),
            metadata: EventMetadata {
                confidence,
                temperature,
                description: event_description(index),
                source: EventSource::Generated,
                processing_time: FixtureTimestamp::from_naive(self.clock.now()),
            },
        }
    }

    /// Builds `count` records in index order
    #[instrument(skip(self))]
    pub fn generate_events(&mut self, count: usize) -> Vec<EventRecord> {
        let events: Vec<EventRecord> = (0..count).map(|index| self.generate_event(index)).collect();
        debug!(count = events.len(), "{}", log::EVENTS_GENERATED);
        events
    }

    /// Builds `count` records wrapped in a fixture envelope
    pub fn generate_envelope(&mut self, count: usize) -> Envelope {
        Envelope::new(self.generate_events(count))
    }

    // Day is capped so every month accepts it; 29th to 31st are never drawn.
    fn sample_date(&mut self) -> NaiveDate {
        let month = self
            .rng
            .gen_range(calendar::FIRST_MONTH..=calendar::LAST_MONTH);
        let day = self.rng.gen_range(calendar::FIRST_DAY..=calendar::LAST_DAY);
        NaiveDate::from_ymd_opt(FIXTURE_YEAR, month, day)
            .expect("every month of the fixture year has at least 28 days")
    }
}
