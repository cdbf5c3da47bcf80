#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::error::{CommandError, ConfigError};
    use crate::events::SimEvent;
    use crate::rules::Rules;
    use crate::state::{gold_label, GameStateSnapshot};
    use crate::types::{GridPos, SimTime};

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Click { x: 3, y: 4 },
            PlayerCommand::AssignTask {
                x: 1,
                y: 2,
                task: UnitTask::Mine,
            },
            PlayerCommand::SelectPurchase {
                kind: UnitKind::Soldier,
            },
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_command_wire_format() {
        let json = r#"{"type":"AssignTask","x":2,"y":7,"task":"attack"}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        match cmd {
            PlayerCommand::AssignTask { x, y, task } => {
                assert_eq!((x, y), (2, 7));
                assert_eq!(task, UnitTask::Attack);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_sim_event_serde() {
        let event = SimEvent::UnitLost {
            kind: UnitKind::Worker,
            x: 5,
            y: 6,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"UnitLost\""));
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_gold_label_floors() {
        assert_eq!(gold_label(100.0), "Gold: 100");
        assert_eq!(gold_label(104.99), "Gold: 104");
        assert_eq!(gold_label(0.3), "Gold: 0");
    }

    // ---- GridPos geometry ----

    #[test]
    fn test_grid_distance() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, 4);
        assert_eq!(a.distance_sq_to(&b), 25);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        // Diagonal neighbour is inside melee range, two cells away is not.
        assert!(a.distance_to(&GridPos::new(1, 1)) <= crate::constants::MELEE_RANGE);
        assert!(a.distance_to(&GridPos::new(2, 0)) > crate::constants::MELEE_RANGE);
    }

    #[test]
    fn test_step_toward_moves_diagonally() {
        let mut pos = GridPos::new(5, 5);
        pos.step_toward(&GridPos::new(8, 2));
        assert_eq!(pos, GridPos::new(6, 4));
        pos.step_toward(&GridPos::new(6, 9));
        assert_eq!(pos, GridPos::new(6, 5));
    }

    #[test]
    fn test_step_toward_same_cell_is_noop() {
        let mut pos = GridPos::new(2, 2);
        pos.step_toward(&GridPos::new(2, 2));
        assert_eq!(pos, GridPos::new(2, 2));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    // ---- Rules ----

    #[test]
    fn test_classic_preset() {
        let rules = Rules::classic();
        assert_eq!(rules.grid_width, 20);
        assert_eq!(rules.grid_height, 15);
        assert_eq!(rules.enemy_hp, 3.0);
        assert_eq!(rules.worker.hp, 3.0);
        assert_eq!(rules.spawn_period_ticks(), Some(300));
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_outpost_preset() {
        let rules = Rules::outpost();
        assert_eq!(rules.ruleset, Ruleset::Outpost);
        assert_eq!(rules.enemy_hp, 5.0);
        assert_eq!(rules.unit_stats(UnitKind::Worker).cost, 50.0);
        assert_eq!(rules.unit_stats(UnitKind::Soldier).cost, 100.0);
        assert_eq!(rules.unit_stats(UnitKind::Soldier).hp, 5.0);
        assert_eq!(rules.spawn_period_ticks(), Some(420));
        assert_eq!(rules.purchase_policy, PurchasePolicy::WorkerFirst);
    }

    #[test]
    fn test_spawning_can_be_disabled() {
        let rules = Rules {
            spawn_period_secs: 0.0,
            ..Rules::classic()
        };
        assert_eq!(rules.spawn_period_ticks(), None);
    }

    #[test]
    fn test_rules_file_overrides_preset() {
        let text = r#"
            ruleset = "outpost"
            purchase_policy = "selected"
            attack_policy = "sweep_all"
            spawn_period_secs = 10.0

            [soldier]
            hp = 6.0
            cost = 80.0
        "#;
        let rules = Rules::from_toml_str(text).unwrap();
        assert_eq!(rules.ruleset, Ruleset::Outpost);
        assert_eq!(rules.purchase_policy, PurchasePolicy::Selected);
        assert_eq!(rules.attack_policy, AttackPolicy::SweepAll);
        assert_eq!(rules.spawn_period_ticks(), Some(600));
        assert_eq!(rules.soldier.cost, 80.0);
        // Untouched values keep the preset.
        assert_eq!(rules.enemy_hp, 5.0);
        assert_eq!(rules.worker.cost, 50.0);
    }

    #[test]
    fn test_empty_rules_file_is_classic() {
        let rules = Rules::from_toml_str("").unwrap();
        assert_eq!(rules, Rules::classic());
    }

    #[test]
    fn test_rules_file_rejects_unknown_field() {
        let err = Rules::from_toml_str("gold_rush = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rules_validation() {
        let err = Rules::from_toml_str("gold_probability = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Rules::from_toml_str("grid_width = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Rules::from_toml_str("enemy_hp = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rules_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(&path, "ruleset = \"outpost\"\nstarting_gold = 250.0\n").unwrap();
        let rules = Rules::load(&path).unwrap();
        assert_eq!(rules.starting_gold, 250.0);
        assert_eq!(rules.ruleset, Ruleset::Outpost);

        let missing = Rules::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
    }

    #[test]
    fn test_command_error_messages() {
        let err = CommandError::InsufficientGold {
            kind: UnitKind::Soldier,
            cost: 100.0,
            available: 42.5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient gold for Soldier: costs 100, have 42.5"
        );
        assert_eq!(
            CommandError::OutOfBounds { x: -1, y: 3 }.to_string(),
            "cell (-1, 3) is outside the grid"
        );
    }
}
