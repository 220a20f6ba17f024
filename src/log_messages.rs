//! Log message constants
//!
//! Centralizes the text of every log line so wording stays consistent across
//! the generator, the writer and the binary.

/// Process lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting fixture generation";
    pub const SETTINGS_LOADED: &str = "Settings loaded";
    pub const SEEDED_RNG: &str = "Using seeded random source";
    pub const ENTROPY_RNG: &str = "Using entropy-seeded random source";
    pub const FINISHED: &str = "Fixture generation finished";
}

/// Generation messages
pub mod generation {
    pub const EVENTS_GENERATED: &str = "Generated fixture events";
}

/// Fixture file messages
pub mod output {
    pub const WRITING_FIXTURE: &str = "Writing fixture file";
    pub const FIXTURE_WRITTEN: &str = "Fixture file written";
    pub const READING_FIXTURE: &str = "Reading fixture file";
}
