//! Domain types for synthetic event fixtures
//!
//! Every field of a fixture record has a type here; numeric fields carry
//! their sampling range as validation so a fixture read back from disk is
//! checked against the same domains it was generated from.

pub mod categories;
pub mod constants;
pub mod coordinates;
pub mod envelope;
pub mod event;
pub mod timestamp;

pub use categories::{EventType, Instrument, Severity};
pub use coordinates::{Bounds, Coordinates, Latitude, Longitude};
pub use envelope::Envelope;
pub use event::{Confidence, EventId, EventMetadata, EventRecord, EventSource, Temperature};
pub use timestamp::{Clock, FixedClock, FixtureTimestamp, SystemClock};
