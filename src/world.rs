//! The animal world: continents and the animals living on them.

use crate::model::{Carnivore, CarnivoreKind, Herbivore, HerbivoreKind, HuntOutcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Continent {
    Africa,
    NorthAmerica,
}

impl Continent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::NorthAmerica => "North America",
        }
    }

    /// Species stocked onto this continent at population time.
    pub fn native_species(&self) -> (HerbivoreKind, CarnivoreKind) {
        match self {
            Self::Africa => (HerbivoreKind::Wildebeest, CarnivoreKind::Lion),
            Self::NorthAmerica => (HerbivoreKind::Bison, CarnivoreKind::Wolf),
        }
    }
}

/// The world owns its animals directly, in insertion order.
///
/// Continents only matter at population time: the animal collections are
/// world-flat, so carnivores hunt across continents.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct World {
    continents: Vec<Continent>,
    herbivores: Vec<Herbivore>,
    carnivores: Vec<Carnivore>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_continent(&mut self, continent: Continent) {
        self.continents.push(continent);
    }

    pub fn add_herbivore(&mut self, herbivore: Herbivore) {
        self.herbivores.push(herbivore);
    }

    pub fn add_carnivore(&mut self, carnivore: Carnivore) {
        self.carnivores.push(carnivore);
    }

    pub fn herbivores(&self) -> &[Herbivore] {
        &self.herbivores
    }

    pub fn carnivores(&self) -> &[Carnivore] {
        &self.carnivores
    }

    /// Stock every continent with its native herd and pack.
    ///
    /// Herbivores start at their species' default weight; carnivores start
    /// at `power` if given, else at their species' default.
    pub fn populate(&mut self, herd_size: usize, pack_size: usize, power: Option<u32>) {
        for i_con in 0..self.continents.len() {
            let continent = self.continents[i_con];
            log::info!("populating {} with animals", continent.name());

            let (herbivore_kind, carnivore_kind) = continent.native_species();
            for _ in 0..herd_size {
                self.add_herbivore(Herbivore::new(herbivore_kind));
            }
            for _ in 0..pack_size {
                self.add_carnivore(match power {
                    Some(power) => Carnivore::with_power(carnivore_kind, power),
                    None => Carnivore::new(carnivore_kind),
                });
            }
        }
    }

    /// Every herbivore grazes, dead or alive, in insertion order.
    pub fn graze_all(&mut self) {
        log::debug!("herbivores eat grass");
        for herbivore in &mut self.herbivores {
            herbivore.graze();
        }
    }

    /// Every carnivore attempts to eat every herbivore, both in insertion
    /// order. Returns the number of kills in the pass.
    ///
    /// A herbivore killed early in the pass is skipped by later carnivores.
    pub fn hunt_all(&mut self) -> u32 {
        log::debug!("carnivores hunting on herbivores");
        let mut kills = 0;
        for carnivore in &mut self.carnivores {
            for herbivore in &mut self.herbivores {
                if carnivore.hunt(Some(herbivore)) == HuntOutcome::Kill {
                    log::debug!(
                        "{} ate a {}",
                        carnivore.kind().name(),
                        herbivore.kind().name()
                    );
                    kills += 1;
                }
            }
        }
        kills
    }

    /// One simulation tick: a graze pass followed by a hunt pass.
    pub fn tick(&mut self) -> u32 {
        self.graze_all();
        self.hunt_all()
    }
}

/// Record of the world written once per save window.
#[derive(Serialize, Deserialize)]
pub struct Snapshot {
    /// Tick count at the end of the window.
    pub tick: u64,

    /// Kills during the window.
    pub kills: u32,

    /// World state at the end of the window.
    pub world: World,
}
