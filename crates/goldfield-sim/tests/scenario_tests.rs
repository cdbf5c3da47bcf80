use goldfield_sim::core::commands::PlayerCommand;
use goldfield_sim::core::enums::{TileKind, UnitTask};
use goldfield_sim::core::events::SimEvent;
use goldfield_sim::core::rules::Rules;
use goldfield_sim::core::types::GridPos;
use goldfield_sim::terrain::TileGrid;
use goldfield_sim::{SimConfig, SimulationEngine};

const MINE_CELL: GridPos = GridPos { x: 2, y: 2 };

fn mining_scenario() -> SimulationEngine {
    let grid = TileGrid::from_fn(10, 10, |pos| {
        if pos == MINE_CELL {
            TileKind::Gold
        } else {
            TileKind::Grass
        }
    });
    let rules = Rules {
        spawn_period_secs: 1000.0,
        ..Rules::classic()
    };
    let mut sim = SimulationEngine::with_grid(SimConfig { seed: 3, rules }, grid);

    // Place a worker, then click it again to start mining.
    sim.queue_command(PlayerCommand::Click {
        x: MINE_CELL.x,
        y: MINE_CELL.y,
    });
    sim.queue_command(PlayerCommand::Click {
        x: MINE_CELL.x,
        y: MINE_CELL.y,
    });
    sim
}

#[test]
fn worker_mines_then_fights_off_an_enemy() {
    let mut sim = mining_scenario();

    let mut snap = sim.tick();
    for _ in 1..50 {
        snap = sim.tick();
    }
    assert_eq!(snap.units.len(), 1);
    assert_eq!(snap.units[0].task, UnitTask::Mine);
    assert!((snap.player.gold - 105.0).abs() < 1e-6);
    assert_eq!(snap.player.gold_label, "Gold: 104");

    sim.spawn_enemy_at(GridPos::new(MINE_CELL.x + 3, MINE_CELL.y + 3));

    // Two diagonal steps bring the enemy adjacent.
    sim.tick();
    let snap = sim.tick();
    assert_eq!(snap.enemies[0].position, GridPos::new(3, 3));
    assert_eq!(snap.units[0].hp, 3.0);

    let snap = sim.tick();
    assert!(snap.units[0].hp < 3.0);
    assert_eq!(snap.enemies[0].hp, 3.0);

    sim.queue_command(PlayerCommand::AssignTask {
        x: MINE_CELL.x,
        y: MINE_CELL.y,
        task: UnitTask::Attack,
    });
    let gold_before = snap.player.gold;
    let snap = sim.tick();
    assert!(snap.enemies[0].hp < 3.0);
    // Attacking units do not mine.
    assert_eq!(snap.player.gold, gold_before);
}

#[test]
fn attacking_worker_eventually_wins() {
    let mut sim = mining_scenario();
    sim.queue_command(PlayerCommand::AssignTask {
        x: MINE_CELL.x,
        y: MINE_CELL.y,
        task: UnitTask::Attack,
    });
    sim.spawn_enemy_at(GridPos::new(MINE_CELL.x + 3, MINE_CELL.y + 3));

    let mut killed = false;
    for _ in 0..60 {
        let snap = sim.tick();
        if snap
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::EnemyKilled { .. }))
        {
            killed = true;
            assert_eq!(snap.units.len(), 1);
            assert!(snap.units[0].hp > 0.0);
            break;
        }
    }
    assert!(killed, "worker should kill a same-hp enemy it outdamages");
}

#[test]
fn snapshot_serializes_for_the_renderer() {
    let mut sim = mining_scenario();
    let snap = sim.tick();
    let json = serde_json::to_value(&snap).unwrap();

    assert_eq!(json["grid"]["width"], 10);
    assert_eq!(json["grid"]["tiles"].as_array().unwrap().len(), 100);
    assert_eq!(json["grid"]["tiles"][22], "gold");
    assert_eq!(json["units"][0]["task"], "mine");
    assert_eq!(json["ruleset"], "classic");
}
