#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::Command;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::geometry::DistanceTable;
    use crate::level::{CellSpec, LevelError, LevelSpec};
    use crate::state::GameStateSnapshot;
    use crate::types::SimTime;

    fn cell(position: Vec2, faction: Faction, max_drones: u32) -> CellSpec {
        CellSpec {
            position,
            faction,
            max_drones,
            production_period: 100,
            initial_drones: None,
            launch_range: None,
        }
    }

    #[test]
    fn test_faction_hostility() {
        assert!(Faction::Player.is_hostile_to(Faction::Enemy));
        assert!(Faction::Enemy.is_hostile_to(Faction::Player));
        assert!(!Faction::Player.is_hostile_to(Faction::Player));
        // Neutral is never the aggressor, in either direction.
        assert!(!Faction::Neutral.is_hostile_to(Faction::Player));
        assert!(!Faction::Enemy.is_hostile_to(Faction::Neutral));
    }

    #[test]
    fn test_production_multiplier() {
        assert_eq!(Faction::Neutral.production_multiplier(), 3);
        assert_eq!(Faction::Player.production_multiplier(), 1);
        assert_eq!(Faction::Enemy.production_multiplier(), 1);
    }

    #[test]
    fn test_distance_table_symmetric() {
        let positions = vec![Vec2::ZERO, Vec2::new(3.0, 4.0), Vec2::new(-1.0, 0.0)];
        let table = DistanceTable::build(&positions);
        assert_eq!(table.len(), 3);
        assert!((table.between(0, 1) - 5.0).abs() < 1e-6);
        assert_eq!(table.between(0, 1), table.between(1, 0));
        assert_eq!(table.between(2, 2), 0.0);
    }

    #[test]
    fn test_level_defaults() {
        let spec = cell(Vec2::ZERO, Faction::Player, 10);
        // Missing initial drones means a full cell; missing range derives
        // from capacity.
        assert_eq!(spec.starting_drones(), 10);
        assert!((spec.resolved_range() - 3.5).abs() < 1e-6);
    }

    #[test]
    fn test_level_validation() {
        let empty = LevelSpec {
            level_number: 1,
            cells: vec![],
        };
        assert_eq!(empty.validate(), Err(LevelError::Empty));

        let mut zero_cap = LevelSpec {
            level_number: 1,
            cells: vec![cell(Vec2::ZERO, Faction::Player, 0)],
        };
        assert_eq!(zero_cap.validate(), Err(LevelError::ZeroCapacity(0)));

        zero_cap.cells[0].max_drones = 10;
        zero_cap.cells[0].production_period = 0;
        assert_eq!(zero_cap.validate(), Err(LevelError::ZeroPeriod(0)));

        zero_cap.cells[0].production_period = 100;
        zero_cap.cells[0].initial_drones = Some(11);
        assert!(matches!(
            zero_cap.validate(),
            Err(LevelError::OverCapacity { cell: 0, .. })
        ));

        zero_cap.cells[0].initial_drones = Some(10);
        assert_eq!(zero_cap.validate(), Ok(()));
    }

    /// Verify Command round-trips through serde (tagged union).
    #[test]
    fn test_command_serde() {
        let commands = vec![
            Command::SelectOrigin { cell: 3 },
            Command::SelectDestination { cell: 7 },
            Command::ClearDestination,
            Command::CommitMove,
            Command::CancelMove,
            Command::SetPause { paused: true },
            Command::ForceOutcome {
                outcome: Outcome::Win,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: Command = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify SimEvent round-trips through serde.
    #[test]
    fn test_event_serde() {
        let events = vec![
            SimEvent::CellFactionChanged {
                cell: 2,
                old: Faction::Enemy,
                new: Faction::Player,
            },
            SimEvent::DroneSpawned {
                id: 42,
                faction: Faction::Player,
                origin_cell: 0,
                target_cell: 1,
            },
            SimEvent::DroneResolved {
                id: 42,
                outcome: DroneOutcome::Captured,
            },
            SimEvent::LevelEnded {
                outcome: Outcome::Lose,
                level_number: 4,
            },
            SimEvent::MoveRejected {
                reason: MoveRejectReason::OutOfRange,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.outcome, back.outcome);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        // 30 ticks at 30Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }
}
