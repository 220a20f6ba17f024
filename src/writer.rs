//! Fixture file I/O
//!
//! Fixtures are written as pretty-printed JSON with two-space indentation.
//! The target file is truncated or created; its parent directory is never
//! created, so a missing directory is reported as an error.

use crate::domain::Envelope;
use crate::error::{Error, Result};
use crate::log_messages::output as log;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

#[instrument(skip(envelope), fields(events = envelope.len()))]
pub fn write_envelope(path: &Path, envelope: &Envelope) -> Result<()> {
    debug!("{}", log::WRITING_FIXTURE);
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, envelope).map_err(|e| Error::from_json(path, e))?;
    writer.flush().map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), "{}", log::FIXTURE_WRITTEN);
    Ok(())
}

/// Loads a fixture, re-checking every value against its domain type
#[instrument]
pub fn read_envelope(path: &Path) -> Result<Envelope> {
    debug!("{}", log::READING_FIXTURE);
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::from_json(path, e))
}
