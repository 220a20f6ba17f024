use crate::config::Settings;
use crate::domain::Envelope;
use crate::generator::EventGenerator;
use crate::log_messages::application as log;
use crate::writer::write_envelope;
use crate::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub event_count: usize,
    pub path: PathBuf,
}

impl GenerationReport {
    /// Confirmation line printed once the fixture is on disk
    pub fn confirmation(&self) -> String {
        format!(
            "Generated {} test events for performance testing",
            self.event_count
        )
    }
}

/// Generates one fixture and writes it where the settings say
pub struct Application {
    settings: Settings,
}

impl Application {
    pub fn new() -> Result<Self> {
        Ok(Self::with_settings(Settings::new()?))
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    #[instrument(skip(self))]
    pub fn run(&self) -> Result<GenerationReport> {
        debug!(settings = ?self.settings, "{}", log::SETTINGS_LOADED);
        info!(
            count = self.settings.generator.event_count,
            path = %self.settings.output.path.display(),
            "{}",
            log::STARTING
        );

        let envelope = self.generate();
        write_envelope(&self.settings.output.path, &envelope)?;

        info!("{}", log::FINISHED);
        Ok(GenerationReport {
            event_count: envelope.len(),
            path: self.settings.output.path.clone(),
        })
    }

    fn generate(&self) -> Envelope {
        let count = self.settings.generator.event_count;
        let rng = match self.settings.generator.seed {
            Some(seed) => {
                debug!(seed, "{}", log::SEEDED_RNG);
                StdRng::seed_from_u64(seed)
            }
            None => {
                debug!("{}", log::ENTROPY_RNG);
                StdRng::from_entropy()
            }
        };
        EventGenerator::new(rng).generate_envelope(count)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
