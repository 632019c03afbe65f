//! Property tests over random seeds and settings.

use proptest::prelude::*;

use pocket_civ_core::{
    ai, check_invariants, generate_map, GameSettings, GameState, Terrain, UnitType,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Generated maps always have exactly width x height tiles.
    #[test]
    fn map_generation_dimensions(seed in any::<u64>(), width in 2u32..=40, height in 2u32..=40) {
        let settings = GameSettings {
            map_width: width,
            map_height: height,
            ..GameSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let map = generate_map(&settings, &mut rng);

        prop_assert_eq!(map.tile_count(), (width * height) as usize);
        for (_, tile) in map.iter() {
            prop_assert!(Terrain::all().contains(&tile.terrain));
            prop_assert!(tile.unit.is_none());
            prop_assert!(tile.city.is_none());
            prop_assert!(tile.owner.is_none());
            prop_assert!(!tile.improved);
        }
    }

    /// Setup never places anything on impassable terrain.
    #[test]
    fn setup_is_consistent(seed in any::<u64>(), players in 2u8..=8) {
        let mut rng = StdRng::seed_from_u64(seed);
        let game = GameState::new(GameSettings::ai_only(players), &mut rng).unwrap();

        prop_assert_eq!(game.players.len(), usize::from(players));
        for player in &game.players {
            prop_assert_eq!(player.cities.len(), 1);
            prop_assert_eq!(player.cities[0].population, 1);
            let kinds: Vec<UnitType> = player.units.iter().map(|u| u.unit_type).collect();
            prop_assert_eq!(kinds, vec![UnitType::Settler, UnitType::Warrior]);
        }
        let violations = check_invariants(&game);
        prop_assert!(violations.is_empty(), "{:?}", violations);
    }

    /// Score always follows the weighted formula.
    #[test]
    fn score_formula(seed in any::<u64>(), years in 0usize..30) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new(GameSettings::ai_only(3), &mut rng).unwrap();
        for _ in 0..years {
            game.end_year(&mut rng);
        }
        for player in &game.players {
            let cities = player.cities.len() as u32;
            let population = player.total_population();
            let techs = player.techs.len() as u32;
            let tiles = game.map.count_owned_by(player.id) as u32;
            prop_assert_eq!(
                game.calculate_score(player.id),
                100 * cities + 50 * population + 50 * techs + 5 * tiles
            );
        }
    }

    /// Every end_year moves the clock by exactly one step.
    #[test]
    fn end_year_step(seed in any::<u64>(), rounds in 1usize..20) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new(GameSettings::ai_only(2), &mut rng).unwrap();
        for _ in 0..rounds {
            let before = game.year;
            game.end_year(&mut rng);
            prop_assert_eq!(game.year.0 - before.0, 10);
        }
    }

    /// AI play never breaks tile and collection consistency.
    #[test]
    fn ai_play_is_consistent(seed in any::<u64>(), players in 2u8..=8, turns in 1usize..120) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new(GameSettings::ai_only(players), &mut rng).unwrap();
        for _ in 0..turns {
            ai::take_turn(&mut game, &mut rng).unwrap();
            game.finish_turn(&mut rng);
        }
        let violations = check_invariants(&game);
        prop_assert!(violations.is_empty(), "{:?}", violations);
    }
}
