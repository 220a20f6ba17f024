//! Property-based tests for fixture invariants
//!
//! These tests use property-based testing to verify that record invariants
//! hold across arbitrary seeds and event counts, both in memory and after a
//! round trip through the fixture file.

use perf_fixtures::domain::{Envelope, EventRecord, EventType, FixedClock, Instrument, Severity};
use perf_fixtures::{read_envelope, write_envelope, EventGenerator};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

// Property test generators
pub mod generators {
    use super::*;
    use chrono::NaiveDate;

    /// Generate seeds for the random source
    pub fn seed() -> impl Strategy<Value = u64> {
        any::<u64>()
    }

    /// Generate event counts, including empty fixtures
    pub fn event_count() -> impl Strategy<Value = usize> {
        0usize..200
    }

    /// Generate processing clocks with and without sub-second precision
    pub fn clock() -> impl Strategy<Value = FixedClock> {
        let micros = prop_oneof![Just(0u32), 1u32..1_000_000];
        (0u32..86_400, micros).prop_map(|(secs, micros)| {
            let datetime = NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_micro_opt(secs / 3600, (secs / 60) % 60, secs % 60, micros)
                .unwrap();
            FixedClock(datetime)
        })
    }

    /// Generate a full fixture envelope
    pub fn envelope() -> impl Strategy<Value = Envelope> {
        (seed(), event_count(), clock()).prop_map(|(seed, count, clock)| {
            let mut generator = EventGenerator::with_clock(StdRng::seed_from_u64(seed), clock);
            generator.generate_envelope(count)
        })
    }
}

/// Invariant checks over generated records
pub struct FixtureInvariants;

impl FixtureInvariants {
    /// Ids follow `perf_test_2024_<index:03>` and never repeat
    pub fn ids_match_index_and_are_unique(events: &[EventRecord]) -> bool {
        let unique: HashSet<String> = events.iter().map(|e| e.id.to_string()).collect();
        unique.len() == events.len()
            && events
                .iter()
                .enumerate()
                .all(|(index, e)| e.id.to_string() == format!("perf_test_2024_{index:03}"))
    }

    /// Titles count from one
    pub fn titles_are_one_based(events: &[EventRecord]) -> bool {
        events
            .iter()
            .enumerate()
            .all(|(index, e)| e.title == format!("Performance Test Event {}", index + 1))
    }

    /// Categories come from their fixed sets
    pub fn categories_in_domain(events: &[EventRecord]) -> bool {
        events.iter().all(|e| {
            EventType::ALL.contains(&e.event_type)
                && Severity::ALL.contains(&e.severity)
                && Instrument::ALL.contains(&e.instrument)
        })
    }

    /// Centers lie in range and bounds are exactly center ± 0.5
    pub fn coordinates_in_domain(events: &[EventRecord]) -> bool {
        events.iter().all(|e| {
            let lat = e.coordinates.lat.into_inner();
            let lng = e.coordinates.lng.into_inner();
            let bounds = e.coordinates.bounds;
            (-80.0..=80.0).contains(&lat)
                && (-170.0..=170.0).contains(&lng)
                && bounds.north == lat + 0.5
                && bounds.south == lat - 0.5
                && bounds.east == lng + 0.5
                && bounds.west == lng - 0.5
        })
    }

    /// Confidence in [0, 1), temperature in [20, 70]
    pub fn metadata_in_domain(events: &[EventRecord]) -> bool {
        events.iter().all(|e| {
            let confidence = e.metadata.confidence.into_inner();
            let temperature = e.metadata.temperature.into_inner();
            (0.0..1.0).contains(&confidence) && (20.0..=70.0).contains(&temperature)
        })
    }

    /// Dates are midnight in 2024 and never past the 28th
    pub fn timestamps_are_capped_2024_dates(events: &[EventRecord]) -> bool {
        events.iter().all(|e| {
            let text = e.timestamp.as_str();
            let day = text.get(8..10).and_then(|d| d.parse::<u32>().ok());
            text.len() == "2024-01-01T00:00:00Z".len()
                && text.starts_with("2024-")
                && text.ends_with("T00:00:00Z")
                && matches!(day, Some(1..=28))
        })
    }

    pub fn all_hold(envelope: &Envelope) -> bool {
        let events = &envelope.events;
        envelope.schema_version == 1
            && envelope.year == 2024
            && Self::ids_match_index_and_are_unique(events)
            && Self::titles_are_one_based(events)
            && Self::categories_in_domain(events)
            && Self::coordinates_in_domain(events)
            && Self::metadata_in_domain(events)
            && Self::timestamps_are_capped_2024_dates(events)
    }
}

mod property_tests {
    use super::*;
    use tempfile::TempDir;

    proptest! {
        #[test]
        fn prop_generates_exactly_the_requested_count(
            seed in generators::seed(),
            count in generators::event_count(),
        ) {
            let mut generator = EventGenerator::new(StdRng::seed_from_u64(seed));
            let envelope = generator.generate_envelope(count);
            prop_assert_eq!(envelope.events.len(), count);
        }

        #[test]
        fn prop_generated_envelopes_satisfy_invariants(envelope in generators::envelope()) {
            prop_assert!(FixtureInvariants::all_hold(&envelope));
        }

        #[test]
        fn prop_processing_time_round_trips_through_text(clock in generators::clock()) {
            let event = EventGenerator::with_clock(StdRng::seed_from_u64(0), clock)
                .generate_event(0);
            prop_assert_eq!(event.metadata.processing_time.to_naive(), Some(clock.0));
            prop_assert!(event.metadata.processing_time.as_str().ends_with('Z'));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_file_round_trip_is_lossless(envelope in generators::envelope()) {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("events.json");

            write_envelope(&path, &envelope).unwrap();
            let loaded = read_envelope(&path).unwrap();

            prop_assert!(FixtureInvariants::all_hold(&loaded));
            prop_assert_eq!(loaded, envelope);
        }
    }
}
