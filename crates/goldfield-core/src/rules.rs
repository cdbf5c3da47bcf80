//! Rule presets and TOML rules files.
//!
//! A rules file names a preset and may override any individual value:
//!
//! ```toml
//! ruleset = "outpost"
//! purchase_policy = "selected"
//! spawn_period_secs = 10.0
//!
//! [soldier]
//! hp = 6.0
//! cost = 100.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::error::ConfigError;

/// Per-kind unit statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitStats {
    /// Starting hit points.
    pub hp: f64,
    /// Outpost purchase cost in gold.
    pub cost: f64,
}

/// Every tunable value of a game. Built from a [`Ruleset`] preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub ruleset: Ruleset,
    /// Grid width in cells.
    pub grid_width: u32,
    /// Grid height in cells.
    pub grid_height: u32,
    /// Pixel size of one tile, for click translation.
    pub tile_size: u32,
    /// Probability that a generated tile is gold.
    pub gold_probability: f64,
    pub starting_gold: f64,
    /// Gold per tick per mining unit on a gold tile.
    pub mine_rate: f64,
    pub melee_range: f64,
    /// Damage per tick dealt by attacking units.
    pub unit_damage: f64,
    /// Damage per tick dealt by enemies.
    pub enemy_damage: f64,
    pub enemy_hp: f64,
    /// Seconds of simulated time between enemy spawns. Zero disables spawning.
    pub spawn_period_secs: f64,
    pub worker: UnitStats,
    pub soldier: UnitStats,
    pub attack_policy: AttackPolicy,
    pub purchase_policy: PurchasePolicy,
}

impl Default for Rules {
    fn default() -> Self {
        Self::classic()
    }
}

impl Rules {
    /// Free placement, 3 hp everywhere, an enemy every 5 seconds.
    pub fn classic() -> Self {
        Self {
            ruleset: Ruleset::Classic,
            grid_width: CANVAS_WIDTH / TILE_SIZE,
            grid_height: CANVAS_HEIGHT / TILE_SIZE,
            tile_size: TILE_SIZE,
            gold_probability: GOLD_PROBABILITY,
            starting_gold: STARTING_GOLD,
            mine_rate: MINE_RATE,
            melee_range: MELEE_RANGE,
            unit_damage: UNIT_DAMAGE,
            enemy_damage: ENEMY_DAMAGE,
            enemy_hp: CLASSIC_ENEMY_HP,
            spawn_period_secs: CLASSIC_SPAWN_PERIOD_SECS,
            worker: UnitStats {
                hp: WORKER_HP,
                cost: 0.0,
            },
            soldier: UnitStats {
                hp: WORKER_HP,
                cost: 0.0,
            },
            attack_policy: AttackPolicy::default(),
            purchase_policy: PurchasePolicy::default(),
        }
    }

    /// Base building, purchased units, tougher enemies every 7 seconds.
    pub fn outpost() -> Self {
        Self {
            ruleset: Ruleset::Outpost,
            enemy_hp: OUTPOST_ENEMY_HP,
            spawn_period_secs: OUTPOST_SPAWN_PERIOD_SECS,
            worker: UnitStats {
                hp: WORKER_HP,
                cost: WORKER_COST,
            },
            soldier: UnitStats {
                hp: SOLDIER_HP,
                cost: SOLDIER_COST,
            },
            ..Self::classic()
        }
    }

    pub fn for_ruleset(ruleset: Ruleset) -> Self {
        match ruleset {
            Ruleset::Classic => Self::classic(),
            Ruleset::Outpost => Self::outpost(),
        }
    }

    pub fn unit_stats(&self, kind: UnitKind) -> UnitStats {
        match kind {
            UnitKind::Worker => self.worker,
            UnitKind::Soldier => self.soldier,
        }
    }

    /// Spawn period in whole ticks, or `None` when spawning is disabled.
    pub fn spawn_period_ticks(&self) -> Option<u64> {
        if self.spawn_period_secs <= 0.0 {
            return None;
        }
        let ticks = (self.spawn_period_secs * TICK_RATE as f64).round() as u64;
        Some(ticks.max(1))
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.grid_width > i32::MAX as u32 || self.grid_height > i32::MAX as u32 {
            return Err(ConfigError::Invalid("grid dimensions overflow i32".into()));
        }
        if self.tile_size == 0 {
            return Err(ConfigError::Invalid("tile_size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.gold_probability) {
            return Err(ConfigError::Invalid(format!(
                "gold_probability must be within [0, 1], got {}",
                self.gold_probability
            )));
        }
        let non_negative = [
            ("starting_gold", self.starting_gold),
            ("mine_rate", self.mine_rate),
            ("melee_range", self.melee_range),
            ("unit_damage", self.unit_damage),
            ("enemy_damage", self.enemy_damage),
            ("worker.cost", self.worker.cost),
            ("soldier.cost", self.soldier.cost),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        let positive = [
            ("enemy_hp", self.enemy_hp),
            ("worker.hp", self.worker.hp),
            ("soldier.hp", self.soldier.hp),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !self.spawn_period_secs.is_finite() {
            return Err(ConfigError::Invalid("spawn_period_secs must be finite".into()));
        }
        Ok(())
    }

    /// Parse a rules file body, apply overrides to the named preset and validate.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: RulesFile = toml::from_str(text)?;
        let rules = file.into_rules();
        rules.validate()?;
        Ok(rules)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// On-disk shape of a rules file: a preset plus optional overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RulesFile {
    #[serde(default)]
    ruleset: Ruleset,
    grid_width: Option<u32>,
    grid_height: Option<u32>,
    tile_size: Option<u32>,
    gold_probability: Option<f64>,
    starting_gold: Option<f64>,
    mine_rate: Option<f64>,
    melee_range: Option<f64>,
    unit_damage: Option<f64>,
    enemy_damage: Option<f64>,
    enemy_hp: Option<f64>,
    spawn_period_secs: Option<f64>,
    worker: Option<UnitStats>,
    soldier: Option<UnitStats>,
    attack_policy: Option<AttackPolicy>,
    purchase_policy: Option<PurchasePolicy>,
}

impl RulesFile {
    fn into_rules(self) -> Rules {
        let base = Rules::for_ruleset(self.ruleset);
        Rules {
            ruleset: self.ruleset,
            grid_width: self.grid_width.unwrap_or(base.grid_width),
            grid_height: self.grid_height.unwrap_or(base.grid_height),
            tile_size: self.tile_size.unwrap_or(base.tile_size),
            gold_probability: self.gold_probability.unwrap_or(base.gold_probability),
            starting_gold: self.starting_gold.unwrap_or(base.starting_gold),
            mine_rate: self.mine_rate.unwrap_or(base.mine_rate),
            melee_range: self.melee_range.unwrap_or(base.melee_range),
            unit_damage: self.unit_damage.unwrap_or(base.unit_damage),
            enemy_damage: self.enemy_damage.unwrap_or(base.enemy_damage),
            enemy_hp: self.enemy_hp.unwrap_or(base.enemy_hp),
            spawn_period_secs: self.spawn_period_secs.unwrap_or(base.spawn_period_secs),
            worker: self.worker.unwrap_or(base.worker),
            soldier: self.soldier.unwrap_or(base.soldier),
            attack_policy: self.attack_policy.unwrap_or(base.attack_policy),
            purchase_policy: self.purchase_policy.unwrap_or(base.purchase_policy),
        }
    }
}
