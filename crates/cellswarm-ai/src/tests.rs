#[cfg(test)]
mod tests {
    use cellswarm_core::enums::Faction;
    use cellswarm_core::geometry::DistanceTable;
    use cellswarm_core::level::{CellSpec, LevelSpec};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::knowledge::IntelTable;
    use crate::planner::{choose_destination, launch_probability, plan, AiWeights};

    fn cell(position: Vec2, faction: Faction, max_drones: u32, period: u32) -> CellSpec {
        CellSpec {
            position,
            faction,
            max_drones,
            production_period: period,
            initial_drones: None,
            launch_range: None,
        }
    }

    fn level(cells: Vec<CellSpec>) -> LevelSpec {
        let spec = LevelSpec {
            level_number: 1,
            cells,
        };
        spec.validate().unwrap();
        spec
    }

    fn distances(level: &LevelSpec) -> DistanceTable {
        let positions: Vec<Vec2> = level.cells.iter().map(|c| c.position).collect();
        DistanceTable::build(&positions)
    }

    #[test]
    fn test_launch_probability_full_cell() {
        // A full cell launches every cycle regardless of steepness.
        assert_eq!(launch_probability(20, 20, 15.0), 1.0);
    }

    #[test]
    fn test_launch_probability_quarter_full() {
        // 5/20 at steepness 15 is (0.25)^15 — effectively never.
        let p = launch_probability(5, 20, 15.0);
        assert!(p < 1e-8, "expected near-zero probability, got {p}");
    }

    #[test]
    fn test_launch_probability_empty_cell() {
        assert_eq!(launch_probability(0, 20, 15.0), 0.0);
    }

    #[test]
    fn test_full_cell_always_ordered() {
        // Enemy cell at capacity must emit an order on every cycle for any
        // rng stream, since p == 1 and gen::<f32>() < 1.0 always.
        let level = level(vec![
            cell(Vec2::ZERO, Faction::Enemy, 20, 100),
            cell(Vec2::new(4.0, 0.0), Faction::Player, 10, 100),
        ]);
        let weights = AiWeights::default();
        let intel = IntelTable::build(&level, &weights);
        let table = distances(&level);

        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let orders = plan(&intel, &table, &[20, 10], &weights, &mut rng);
            assert_eq!(orders.len(), 1);
            assert_eq!(orders[0].origin, 0);
            assert_eq!(orders[0].target, 1);
        }
    }

    #[test]
    fn test_quarter_full_cell_never_ordered() {
        let level = level(vec![
            cell(Vec2::ZERO, Faction::Enemy, 20, 100),
            cell(Vec2::new(4.0, 0.0), Faction::Player, 10, 100),
        ]);
        let weights = AiWeights::default();
        let intel = IntelTable::build(&level, &weights);
        let table = distances(&level);

        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let orders = plan(&intel, &table, &[5, 10], &weights, &mut rng);
            assert!(orders.is_empty(), "5/20 at steepness 15 should never launch");
        }
    }

    #[test]
    fn test_destination_skips_enemy_cells() {
        // The only non-origin cell is Enemy-owned: nowhere to go.
        let level = level(vec![
            cell(Vec2::ZERO, Faction::Enemy, 20, 100),
            cell(Vec2::new(4.0, 0.0), Faction::Enemy, 10, 100),
        ]);
        let weights = AiWeights::default();
        let intel = IntelTable::build(&level, &weights);
        let table = distances(&level);

        assert_eq!(choose_destination(0, 20, &intel, &table, &weights), None);
    }

    #[test]
    fn test_destination_prefers_player_bonus() {
        // Two otherwise identical targets at equal distance; the Player one
        // carries the faction bonus and must win.
        let level = level(vec![
            cell(Vec2::ZERO, Faction::Enemy, 20, 100),
            cell(Vec2::new(0.0, 4.0), Faction::Neutral, 10, 100),
            cell(Vec2::new(0.0, -4.0), Faction::Player, 10, 100),
        ]);
        let weights = AiWeights::default();
        let intel = IntelTable::build(&level, &weights);
        let table = distances(&level);

        assert_eq!(choose_destination(0, 20, &intel, &table, &weights), Some(2));
    }

    #[test]
    fn test_destination_prefers_closer_target() {
        let level = level(vec![
            cell(Vec2::ZERO, Faction::Enemy, 20, 100),
            cell(Vec2::new(0.0, 2.0), Faction::Neutral, 10, 100),
            cell(Vec2::new(0.0, 8.0), Faction::Neutral, 10, 100),
        ]);
        let weights = AiWeights::default();
        let intel = IntelTable::build(&level, &weights);
        let table = distances(&level);

        assert_eq!(choose_destination(0, 20, &intel, &table, &weights), Some(1));
    }

    #[test]
    fn test_destination_tie_resolves_to_first_index() {
        // Identical targets, identical distances: the lower index wins.
        let level = level(vec![
            cell(Vec2::ZERO, Faction::Enemy, 20, 100),
            cell(Vec2::new(0.0, 4.0), Faction::Neutral, 10, 100),
            cell(Vec2::new(0.0, -4.0), Faction::Neutral, 10, 100),
        ]);
        let weights = AiWeights::default();
        let intel = IntelTable::build(&level, &weights);
        let table = distances(&level);

        assert_eq!(choose_destination(0, 20, &intel, &table, &weights), Some(1));
    }

    #[test]
    fn test_faction_mirror_invalidates_bonus() {
        // After the Player cell is captured by the Enemy it stops being an
        // eligible destination at all.
        let level = level(vec![
            cell(Vec2::ZERO, Faction::Enemy, 20, 100),
            cell(Vec2::new(0.0, 4.0), Faction::Neutral, 10, 100),
            cell(Vec2::new(0.0, -4.0), Faction::Player, 10, 100),
        ]);
        let weights = AiWeights::default();
        let mut intel = IntelTable::build(&level, &weights);
        let table = distances(&level);

        assert_eq!(choose_destination(0, 20, &intel, &table, &weights), Some(2));
        intel.update_faction(2, Faction::Enemy);
        assert_eq!(choose_destination(0, 20, &intel, &table, &weights), Some(1));
    }

    #[test]
    fn test_neutral_cells_never_launch() {
        let level = level(vec![
            cell(Vec2::ZERO, Faction::Neutral, 20, 100),
            cell(Vec2::new(4.0, 0.0), Faction::Player, 10, 100),
        ]);
        let weights = AiWeights::default();
        let intel = IntelTable::build(&level, &weights);
        let table = distances(&level);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let orders = plan(&intel, &table, &[20, 10], &weights, &mut rng);
        assert!(orders.is_empty());
    }
}
