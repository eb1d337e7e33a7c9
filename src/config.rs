use crate::world::Continent;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Simulation configuration parameters.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Config {
    pub init: InitConfig,
    pub output: OutputConfig,
}

/// Initial population of the world.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct InitConfig {
    /// Continents populated, in order.
    pub continents: Vec<Continent>,

    /// Herbivores stocked per continent.
    pub herd_size: usize,
    /// Carnivores stocked per continent.
    pub pack_size: usize,

    /// Initial power of every stocked carnivore. Species default if absent.
    pub power: Option<u32>,
}

/// Trajectory output layout.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Number of ticks between snapshots.
    pub ticks_per_save: usize,
    /// Number of snapshots written per trajectory file.
    pub saves_per_file: usize,
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let text =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config: Config = toml::from_str(&text).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.init.continents.len(), 1..100).context("invalid number of continents")?;

        check_num(self.init.herd_size, 0..10_000).context("invalid herd size")?;
        check_num(self.init.pack_size, 0..10_000).context("invalid pack size")?;

        if let Some(power) = self.init.power {
            check_num(power, 1..1_000_000).context("invalid initial power")?;
        }

        check_num(self.output.ticks_per_save, 1..10_000)
            .context("invalid number of ticks per save")?;
        check_num(self.output.saves_per_file, 1..10_000)
            .context("invalid number of saves per file")?;

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
