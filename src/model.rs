//! Animal records of the simulation.

use serde::{Deserialize, Serialize};

/// Weight gained by a herbivore in one graze.
pub const GRAZE_GAIN: f64 = 10.0;

/// Power gained by a carnivore on a successful hunt, and lost on a failed one.
pub const POWER_SHIFT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HerbivoreKind {
    Wildebeest,
    Bison,
}

impl HerbivoreKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wildebeest => "Wildebeest",
            Self::Bison => "Bison",
        }
    }

    pub fn default_weight(&self) -> f64 {
        match self {
            Self::Wildebeest => 100.0,
            Self::Bison => 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarnivoreKind {
    Lion,
    Wolf,
}

impl CarnivoreKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lion => "Lion",
            Self::Wolf => "Wolf",
        }
    }

    pub fn default_power(&self) -> u32 {
        match self {
            Self::Lion => 50,
            Self::Wolf => 50,
        }
    }
}

/// Herbivore of the simulation.
///
/// Grazing only ever increases the weight, and `alive` goes from true to
/// false at most once.
#[derive(Clone, Serialize, Deserialize)]
pub struct Herbivore {
    kind: HerbivoreKind,
    weight: f64,
    alive: bool,
}

impl Herbivore {
    /// Create a herbivore at its species' default weight.
    pub fn new(kind: HerbivoreKind) -> Self {
        Self::with_weight(kind, kind.default_weight())
    }

    pub fn with_weight(kind: HerbivoreKind, weight: f64) -> Self {
        Self {
            kind,
            weight,
            alive: true,
        }
    }

    pub fn kind(&self) -> HerbivoreKind {
        self.kind
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Eat grass and gain a fixed amount of weight.
    pub fn graze(&mut self) {
        self.weight += GRAZE_GAIN;
    }

    /// Mark the herbivore as dead. Killing a dead herbivore is a no-op.
    pub fn kill(&mut self) {
        self.alive = false;
    }
}

/// Outcome of one hunt attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntOutcome {
    /// Prey was absent or already dead.
    Skipped,
    /// Power matched or exceeded the prey's weight.
    Kill,
    /// Prey was too heavy; the carnivore lost power.
    Repelled,
}

/// Carnivore of the simulation.
///
/// The unsigned `power` carries the never-negative invariant.
#[derive(Clone, Serialize, Deserialize)]
pub struct Carnivore {
    kind: CarnivoreKind,
    power: u32,
}

impl Carnivore {
    /// Create a carnivore at its species' default power.
    pub fn new(kind: CarnivoreKind) -> Self {
        Self::with_power(kind, kind.default_power())
    }

    pub fn with_power(kind: CarnivoreKind, power: u32) -> Self {
        Self { kind, power }
    }

    pub fn kind(&self) -> CarnivoreKind {
        self.kind
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    /// Attempt to eat a herbivore.
    ///
    /// Absent or dead prey is skipped. A carnivore whose power matches or
    /// exceeds the prey's weight (non-strict comparison) kills it and gains
    /// power; otherwise it loses power, saturating at zero.
    pub fn hunt(&mut self, prey: Option<&mut Herbivore>) -> HuntOutcome {
        let Some(prey) = prey else {
            return HuntOutcome::Skipped;
        };
        if !prey.is_alive() {
            return HuntOutcome::Skipped;
        }

        if f64::from(self.power) >= prey.weight() {
            self.power += POWER_SHIFT;
            prey.kill();
            HuntOutcome::Kill
        } else {
            self.power = self.power.saturating_sub(POWER_SHIFT);
            HuntOutcome::Repelled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grazing_accumulates_fixed_gain() {
        let mut wildebeest = Herbivore::new(HerbivoreKind::Wildebeest);
        assert_eq!(wildebeest.weight(), 100.0);

        for n in 1..=7 {
            wildebeest.graze();
            assert_eq!(wildebeest.weight(), 100.0 + GRAZE_GAIN * n as f64);
        }
    }

    #[test]
    fn grazing_does_not_require_being_alive() {
        let mut bison = Herbivore::new(HerbivoreKind::Bison);
        bison.kill();
        bison.graze();
        assert_eq!(bison.weight(), 210.0);
        assert!(!bison.is_alive());
    }

    #[test]
    fn kill_is_idempotent() {
        let mut wildebeest = Herbivore::new(HerbivoreKind::Wildebeest);
        wildebeest.kill();
        assert!(!wildebeest.is_alive());
        wildebeest.kill();
        assert!(!wildebeest.is_alive());
        assert_eq!(wildebeest.weight(), 100.0);
    }

    #[test]
    fn successful_hunt_kills_prey_and_grows_power() {
        let mut lion = Carnivore::with_power(CarnivoreKind::Lion, 150);
        let mut wildebeest = Herbivore::new(HerbivoreKind::Wildebeest);

        let outcome = lion.hunt(Some(&mut wildebeest));

        assert_eq!(outcome, HuntOutcome::Kill);
        assert!(!wildebeest.is_alive());
        assert_eq!(lion.power(), 160);
    }

    #[test]
    fn power_equal_to_weight_wins() {
        // The comparison is non-strict.
        let mut wolf = Carnivore::with_power(CarnivoreKind::Wolf, 100);
        let mut wildebeest = Herbivore::new(HerbivoreKind::Wildebeest);

        let outcome = wolf.hunt(Some(&mut wildebeest));

        assert_eq!(outcome, HuntOutcome::Kill);
        assert!(!wildebeest.is_alive());
        assert_eq!(wolf.power(), 110);
    }

    #[test]
    fn failed_hunt_drains_power_and_spares_prey() {
        let mut lion = Carnivore::with_power(CarnivoreKind::Lion, 50);
        let mut bison = Herbivore::new(HerbivoreKind::Bison);

        let outcome = lion.hunt(Some(&mut bison));

        assert_eq!(outcome, HuntOutcome::Repelled);
        assert!(bison.is_alive());
        assert_eq!(lion.power(), 40);
        assert_eq!(bison.weight(), 200.0);
    }

    #[test]
    fn power_saturates_at_zero() {
        let mut wolf = Carnivore::with_power(CarnivoreKind::Wolf, 5);
        let mut bison = Herbivore::new(HerbivoreKind::Bison);

        assert_eq!(wolf.hunt(Some(&mut bison)), HuntOutcome::Repelled);
        assert_eq!(wolf.power(), 0);

        assert_eq!(wolf.hunt(Some(&mut bison)), HuntOutcome::Repelled);
        assert_eq!(wolf.power(), 0);
        assert!(bison.is_alive());
    }

    #[test]
    fn hunting_dead_prey_changes_nothing() {
        let mut lion = Carnivore::with_power(CarnivoreKind::Lion, 500);
        let mut wildebeest = Herbivore::new(HerbivoreKind::Wildebeest);
        wildebeest.kill();

        let outcome = lion.hunt(Some(&mut wildebeest));

        assert_eq!(outcome, HuntOutcome::Skipped);
        assert_eq!(lion.power(), 500);
        assert_eq!(wildebeest.weight(), 100.0);
    }

    #[test]
    fn hunting_absent_prey_changes_nothing() {
        let mut lion = Carnivore::new(CarnivoreKind::Lion);
        assert_eq!(lion.hunt(None), HuntOutcome::Skipped);
        assert_eq!(lion.power(), 50);
    }

    #[test]
    fn default_lion_never_kills_default_wildebeest() {
        // Wildebeest weight 100 vs Lion power 50: every attempt fails and
        // power decays 50, 40, ..., 0 and stays there.
        let mut lion = Carnivore::new(CarnivoreKind::Lion);
        let mut wildebeest = Herbivore::new(HerbivoreKind::Wildebeest);

        let expected = [40, 30, 20, 10, 0, 0, 0, 0];
        for power in expected {
            assert_eq!(lion.hunt(Some(&mut wildebeest)), HuntOutcome::Repelled);
            assert_eq!(lion.power(), power);
            assert!(wildebeest.is_alive());
        }
        assert_eq!(wildebeest.weight(), 100.0);
    }
}
