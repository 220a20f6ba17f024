//! Enumerated event categories
//!
//! Each category is a closed set serialized as a lowercase string. Sampling
//! through `rand::distributions::Standard` picks every variant with equal
//! probability, independent of the other categories.

use derive_more::Display;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Kind of environmental observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[display("fire")]
    Fire,
    #[display("temperature")]
    Temperature,
    #[display("precipitation")]
    Precipitation,
    #[display("vegetation")]
    Vegetation,
    #[display("ice")]
    Ice,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Fire,
        EventType::Temperature,
        EventType::Precipitation,
        EventType::Vegetation,
        EventType::Ice,
    ];
}

/// How serious an observation is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[display("low")]
    Low,
    #[display("medium")]
    Medium,
    #[display("high")]
    High,
    #[display("critical")]
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];
}

/// Satellite instrument credited with the observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    #[display("modis")]
    Modis,
    #[display("viirs")]
    Viirs,
    #[display("landsat")]
    Landsat,
    #[display("sentinel")]
    Sentinel,
}

impl Instrument {
    pub const ALL: [Instrument; 4] = [
        Instrument::Modis,
        Instrument::Viirs,
        Instrument::Landsat,
        Instrument::Sentinel,
    ];
}

impl Distribution<EventType> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> EventType {
        EventType::ALL[rng.gen_range(0..EventType::ALL.len())]
    }
}

impl Distribution<Severity> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Severity {
        Severity::ALL[rng.gen_range(0..Severity::ALL.len())]
    }
}

impl Distribution<Instrument> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Instrument {
        Instrument::ALL[rng.gen_range(0..Instrument::ALL.len())]
    }
}
