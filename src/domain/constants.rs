//! Fixture constants
//!
//! Every number and literal that shapes a generated fixture lives here so the
//! generator, the domain types and the tests agree on the same values.

/// Envelope-level constants
pub mod envelope {
    /// Schema version written at the top of every fixture file
    pub const SCHEMA_VERSION: u32 = 1;

    /// Year every generated event is dated in
    pub const FIXTURE_YEAR: i32 = 2024;
}

/// Generation defaults
pub mod generation {
    /// Number of events in a default fixture
    pub const DEFAULT_EVENT_COUNT: usize = 500;

    /// Where the fixture is written unless configured otherwise
    pub const DEFAULT_OUTPUT_PATH: &str = "./data/events.2024-perf.json";

    /// Width of the zero-padded index in event ids
    pub const ID_INDEX_WIDTH: usize = 3;

    /// Prefix shared by every event id (year appended separately)
    pub const ID_PREFIX: &str = "perf_test";

    /// Source tag recorded in event metadata
    pub const SOURCE_TAG: &str = "generated";
}

/// Calendar sampling bounds
pub mod calendar {
    pub const FIRST_MONTH: u32 = 1;
    pub const LAST_MONTH: u32 = 12;
    pub const FIRST_DAY: u32 = 1;

    /// Valid in every month, so the day never needs a month-length check
    pub const LAST_DAY: u32 = 28;
}

/// Coordinate sampling bounds, in degrees
pub mod coordinates {
    pub const LAT_MIN: f64 = -80.0;
    pub const LAT_MAX: f64 = 80.0;
    pub const LNG_MIN: f64 = -170.0;
    pub const LNG_MAX: f64 = 170.0;

    /// Distance from the center to each edge of the bounding box
    pub const BOUNDS_HALF_SPAN: f64 = 0.5;
}

/// Metadata sampling bounds
pub mod metadata {
    pub const TEMPERATURE_MIN: f64 = 20.0;
    pub const TEMPERATURE_MAX: f64 = 70.0;
}
