//! Player economy — gold balance, the base flag, and unit purchases.
//!
//! Stored on `SimulationEngine`, NOT as ECS entities.

use serde::{Deserialize, Serialize};

use goldfield_core::enums::{PurchasePolicy, UnitKind};
use goldfield_core::error::CommandError;
use goldfield_core::rules::Rules;
use goldfield_core::state::{gold_label, PlayerView};
use goldfield_core::types::GridPos;

/// Resources and one-shot flags belonging to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Continuous gold accumulator.
    pub gold: f64,
    /// Cell of the base, set by the first outpost click and never reset.
    pub base: Option<GridPos>,
    /// Unit bought under `PurchasePolicy::Selected`.
    pub purchase_selection: UnitKind,
}

impl PlayerState {
    pub fn new(starting_gold: f64) -> Self {
        Self {
            gold: starting_gold,
            base: None,
            purchase_selection: UnitKind::default(),
        }
    }

    pub fn deposit(&mut self, amount: f64) {
        self.gold += amount;
    }

    /// Decide which unit a purchase click buys, without spending anything.
    pub fn choose_purchase(&self, rules: &Rules) -> Result<UnitKind, CommandError> {
        match rules.purchase_policy {
            PurchasePolicy::WorkerFirst => {
                if self.gold >= rules.worker.cost {
                    Ok(UnitKind::Worker)
                } else if self.gold >= rules.soldier.cost {
                    // Only reachable when a soldier is cheaper than a worker.
                    Ok(UnitKind::Soldier)
                } else {
                    Err(self.insufficient(UnitKind::Worker, rules))
                }
            }
            PurchasePolicy::Selected => {
                let kind = self.purchase_selection;
                if self.gold >= rules.unit_stats(kind).cost {
                    Ok(kind)
                } else {
                    Err(self.insufficient(kind, rules))
                }
            }
        }
    }

    /// Choose and pay for a unit. Gold never goes negative: the cost is only
    /// deducted after the affordability check passes.
    pub fn purchase(&mut self, rules: &Rules) -> Result<(UnitKind, f64), CommandError> {
        let kind = self.choose_purchase(rules)?;
        let cost = rules.unit_stats(kind).cost;
        self.gold -= cost;
        Ok((kind, cost))
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            gold: self.gold,
            gold_label: gold_label(self.gold),
            base: self.base,
            purchase_selection: self.purchase_selection,
        }
    }

    fn insufficient(&self, kind: UnitKind, rules: &Rules) -> CommandError {
        CommandError::InsufficientGold {
            kind,
            cost: rules.unit_stats(kind).cost,
            available: self.gold,
        }
    }
}
