use crate::config::Config;
use crate::world::{Snapshot, World};
use anyhow::{Context, Result};
use rmp_serde::{decode, encode};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

/// Simulation engine.
///
/// Holds the configuration, the world, and the tick counter, and provides
/// methods to populate, run, save, and load simulations.
#[derive(Serialize, Deserialize)]
pub struct Engine {
    cfg: Config,
    world: World,
    tick: u64,
}

impl Engine {
    /// Create a new `Engine` with a world populated from the configuration.
    pub fn populate_world(cfg: Config) -> Self {
        let mut world = World::new();
        for &continent in &cfg.init.continents {
            world.add_continent(continent);
        }
        world.populate(cfg.init.herd_size, cfg.init.pack_size, cfg.init.power);

        Self {
            cfg,
            world,
            tick: 0,
        }
    }

    pub fn cfg(&self) -> &Config {
        &self.cfg
    }

    /// Perform the simulation and save the resulting snapshots to a binary file.
    pub fn perform_simulation<P: AsRef<Path>>(&mut self, file: P) -> Result<()> {
        let file = file.as_ref();
        let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
        let mut writer = BufWriter::new(file);

        for i_save in 0..self.cfg.output.saves_per_file {
            let mut kills = 0;
            for _ in 0..self.cfg.output.ticks_per_save {
                kills += self.perform_tick();
            }

            let snapshot = Snapshot {
                tick: self.tick,
                kills,
                world: self.world.clone(),
            };
            encode::write(&mut writer, &snapshot).context("failed to serialize snapshot")?;

            let progress = 100.0 * (i_save + 1) as f64 / self.cfg.output.saves_per_file as f64;
            log::info!("completed {progress:06.2}%");
        }

        writer.flush().context("failed to flush writer stream")?;

        Ok(())
    }

    /// Save a checkpoint of the entire engine state.
    ///
    /// Can be used to resume the simulation later.
    pub fn save_checkpoint<P: AsRef<Path>>(&self, file: P) -> Result<()> {
        let file = file.as_ref();
        let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
        let mut writer = BufWriter::new(file);
        encode::write(&mut writer, &self).context("failed to serialize engine")?;
        Ok(())
    }

    /// Load a previously saved engine checkpoint.
    pub fn load_checkpoint<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let file = File::open(file).with_context(|| format!("failed to open {file:?}"))?;
        let mut reader = BufReader::new(file);
        let engine = decode::from_read(&mut reader).context("failed to deserialize engine")?;
        Ok(engine)
    }

    /// One tick: a graze pass followed by a hunt pass. Returns the kills.
    fn perform_tick(&mut self) -> u32 {
        self.tick += 1;
        self.world.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InitConfig, OutputConfig};
    use crate::world::Continent;

    fn test_cfg() -> Config {
        Config {
            init: InitConfig {
                continents: vec![Continent::Africa],
                herd_size: 1,
                pack_size: 1,
                power: None,
            },
            output: OutputConfig {
                ticks_per_save: 1,
                saves_per_file: 1,
            },
        }
    }

    #[test]
    fn populated_world_matches_config() {
        let engine = Engine::populate_world(test_cfg());

        assert_eq!(engine.world.herbivores().len(), 1);
        assert_eq!(engine.world.carnivores().len(), 1);
        assert_eq!(engine.tick, 0);
    }

    #[test]
    fn one_tick_reproduces_the_default_scenario() {
        // Wildebeest 100 grazes to 110; Lion 50 fails the hunt and drops to 40.
        let mut engine = Engine::populate_world(test_cfg());

        let kills = engine.perform_tick();

        assert_eq!(kills, 0);
        assert_eq!(engine.tick, 1);
        assert_eq!(engine.world.herbivores()[0].weight(), 110.0);
        assert!(engine.world.herbivores()[0].is_alive());
        assert_eq!(engine.world.carnivores()[0].power(), 40);
    }
}
