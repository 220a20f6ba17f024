//! perf_fixtures - synthetic event fixtures for performance testing
//!
//! Generates mock geospatial/environmental observation records from an
//! injected random source, wraps them in a versioned envelope and writes
//! them to disk as pretty-printed JSON.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod log_messages;
pub mod writer;

pub use application::{Application, GenerationReport};
pub use error::{Error, Result};
pub use generator::EventGenerator;
pub use writer::{read_envelope, write_envelope};
