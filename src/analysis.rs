use crate::config::Config;
use crate::stats::Accumulator;
use crate::world::Snapshot;
use anyhow::{Context, Result};
use rmp_serde::decode;
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

pub trait Obs {
    fn update(&mut self, snapshot: &Snapshot) -> Result<()>;
    fn report(&self) -> serde_json::Value;
}

/// Mean herbivore weight per snapshot.
pub struct HerdWeight {
    acc: Accumulator,
}

impl HerdWeight {
    pub fn new() -> Self {
        Self {
            acc: Accumulator::new(),
        }
    }
}

impl Obs for HerdWeight {
    fn update(&mut self, snapshot: &Snapshot) -> Result<()> {
        let herbivores = snapshot.world.herbivores();
        if herbivores.is_empty() {
            return Ok(());
        }

        let total: f64 = herbivores.iter().map(|h| h.weight()).sum();
        self.acc.add(total / herbivores.len() as f64);
        Ok(())
    }

    fn report(&self) -> serde_json::Value {
        serde_json::json!({ "herd_weight": self.acc.report() })
    }
}

/// Fraction of herbivores alive per snapshot.
pub struct AliveFraction {
    acc: Accumulator,
}

impl AliveFraction {
    pub fn new() -> Self {
        Self {
            acc: Accumulator::new(),
        }
    }
}

impl Obs for AliveFraction {
    fn update(&mut self, snapshot: &Snapshot) -> Result<()> {
        let herbivores = snapshot.world.herbivores();
        if herbivores.is_empty() {
            return Ok(());
        }

        let alive = herbivores.iter().filter(|h| h.is_alive()).count();
        self.acc.add(alive as f64 / herbivores.len() as f64);
        Ok(())
    }

    fn report(&self) -> serde_json::Value {
        serde_json::json!({ "alive_fraction": self.acc.report() })
    }
}

/// Mean carnivore power per snapshot.
pub struct PackPower {
    acc: Accumulator,
}

impl PackPower {
    pub fn new() -> Self {
        Self {
            acc: Accumulator::new(),
        }
    }
}

impl Obs for PackPower {
    fn update(&mut self, snapshot: &Snapshot) -> Result<()> {
        let carnivores = snapshot.world.carnivores();
        if carnivores.is_empty() {
            return Ok(());
        }

        let total: f64 = carnivores.iter().map(|c| f64::from(c.power())).sum();
        self.acc.add(total / carnivores.len() as f64);
        Ok(())
    }

    fn report(&self) -> serde_json::Value {
        serde_json::json!({ "pack_power": self.acc.report() })
    }
}

/// Kills per save window, and their running total.
pub struct Kills {
    total: u64,
    per_save: Accumulator,
}

impl Kills {
    pub fn new() -> Self {
        Self {
            total: 0,
            per_save: Accumulator::new(),
        }
    }
}

impl Obs for Kills {
    fn update(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.total += u64::from(snapshot.kills);
        self.per_save.add(f64::from(snapshot.kills));
        Ok(())
    }

    fn report(&self) -> serde_json::Value {
        serde_json::json!({
            "kills": {
                "total": self.total,
                "per_save": self.per_save.report(),
            }
        })
    }
}

pub struct Analyzer {
    cfg: Config,
    obs_ptr_vec: Vec<Box<dyn Obs>>,
}

impl Analyzer {
    pub fn new(cfg: Config) -> Self {
        let mut obs_ptr_vec: Vec<Box<dyn Obs>> = Vec::new();
        obs_ptr_vec.push(Box::new(HerdWeight::new()));
        obs_ptr_vec.push(Box::new(AliveFraction::new()));
        obs_ptr_vec.push(Box::new(PackPower::new()));
        obs_ptr_vec.push(Box::new(Kills::new()));
        Self { cfg, obs_ptr_vec }
    }

    pub fn add_file<P: AsRef<Path>>(&mut self, file: P) -> Result<()> {
        let file = file.as_ref();
        let file = File::open(file).with_context(|| format!("failed to open {file:?}"))?;
        let mut reader = BufReader::new(file);

        for _ in 0..self.cfg.output.saves_per_file {
            let snapshot = decode::from_read(&mut reader).context("failed to read snapshot")?;
            for obs in &mut self.obs_ptr_vec {
                obs.update(&snapshot).context("failed to update observable")?;
            }
        }
        Ok(())
    }

    pub fn save_results<P: AsRef<Path>>(&self, file: P) -> Result<()> {
        let file = file.as_ref();
        let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
        let writer = BufWriter::new(file);

        let reports: Vec<_> = self.obs_ptr_vec.iter().map(|obs| obs.report()).collect();
        serde_json::to_writer_pretty(writer, &reports).context("failed to write reports")?;
        Ok(())
    }
}
