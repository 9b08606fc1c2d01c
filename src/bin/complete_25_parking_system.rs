use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use colored::Colorize;
use daily_practice::harness;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, trace};

// =============================================================================
// Milestone 1: Car sizes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarType {
    Big = 1,
    Medium = 2,
    Small = 3,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarTypeError {
    #[error("Unknown car type code: {0} (expected 1, 2 or 3)")]
    Unknown(i32),
}

impl TryFrom<i32> for CarType {
    type Error = CarTypeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(CarType::Big),
            2 => Ok(CarType::Medium),
            3 => Ok(CarType::Small),
            other => Err(CarTypeError::Unknown(other)),
        }
    }
}

// =============================================================================
// Milestone 2: Parking lot with fixed slots per size
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSystem {
    big: u32,
    medium: u32,
    small: u32,
}

impl ParkingSystem {
    pub fn new(big: u32, medium: u32, small: u32) -> Self {
        Self { big, medium, small }
    }

    /// Parks a car in a slot of its size. Returns `false` if none is left.
    pub fn add_car(&mut self, car: CarType) -> bool {
        let slots = match car {
            CarType::Big => &mut self.big,
            CarType::Medium => &mut self.medium,
            CarType::Small => &mut self.small,
        };

        if *slots == 0 {
            trace!(?car, "no slot left");
            return false;
        }
        *slots -= 1;
        trace!(?car, remaining = *slots, "parked");
        true
    }

    /// Like [`ParkingSystem::add_car`], taking the numeric code. Unknown
    /// codes are turned away.
    pub fn add_car_code(&mut self, code: i32) -> bool {
        match CarType::try_from(code) {
            Ok(car) => self.add_car(car),
            Err(err) => {
                debug!(%err, "rejected arrival");
                false
            }
        }
    }

    pub fn remaining(&self, car: CarType) -> u32 {
        match car {
            CarType::Big => self.big,
            CarType::Medium => self.medium,
            CarType::Small => self.small,
        }
    }
}

// =============================================================================
// Milestone 3: Lot layout from TOML
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid parking layout: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParkingConfig {
    pub big: u32,
    pub medium: u32,
    pub small: u32,
    pub arrivals: Vec<i32>,
}

impl Default for ParkingConfig {
    fn default() -> Self {
        Self {
            big: 1,
            medium: 1,
            small: 0,
            arrivals: vec![1, 2, 3, 1],
        }
    }
}

impl ParkingConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn build(&self) -> ParkingSystem {
        ParkingSystem::new(self.big, self.medium, self.small)
    }
}

/// Feeds every arrival through a fresh lot and collects the verdicts.
pub fn simulate(config: &ParkingConfig) -> Vec<bool> {
    let mut lot = config.build();
    config
        .arrivals
        .iter()
        .map(|&code| lot.add_car_code(code))
        .collect()
}

// =============================================================================
// Harness: optional layout file as first argument
// =============================================================================

fn run() -> Result<(), ConfigError> {
    let config = match env::args().nth(1) {
        Some(path) => ParkingConfig::load(Path::new(&path))?,
        None => ParkingConfig::default(),
    };
    debug!(?config, "parking layout");

    let verdicts = simulate(&config);
    for (code, parked) in config.arrivals.iter().zip(&verdicts) {
        let shown = if *parked {
            "true".green()
        } else {
            "false".red()
        };
        println!("addCar({code}) -> {shown}");
    }
    info!(
        arrivals = verdicts.len(),
        parked = verdicts.iter().filter(|&&parked| parked).count(),
        "simulation finished"
    );
    Ok(())
}

fn main() {
    harness::init_tracing();
    if let Err(err) = run() {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

// =============================================================================
// Tests
// =============================================================================
