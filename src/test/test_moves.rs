mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right(){
        let level = r#"
#P.#
"#;
        let mut game = GameTestState::new(level);
        game.assert_step(UserAction::Move(Right));

        let expected_level = r#"
#.P#
"#;
        game.assert_matches(expected_level);
        assert_eq!(game.game_state.move_count, 1);
    }

    #[test]
    fn when_push_pushes(){
        let level = r#"
#PM.#
"#;
        let mut game = GameTestState::new(level);
        let update = game.assert_step(UserAction::Move(Right));
        assert!(matches!(update, GameUpdate::NextState(_, GameChangeType::PlayerAndBlockMove)));

        let expected_level = r#"
#.PM#
"#;
        game.assert_matches(expected_level);
        assert_eq!(game.game_state.movable_blocks.iter().copied().collect::<Vec<_>>(), vec![Vec2 { i: 0, j: 3 }]);
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks(){
        let level = r#"
#PMM.#
"#;
        let mut game = GameTestState::new(level);
        let before = game.game_state.clone();
        let update = game.try_step(UserAction::Move(Right));
        assert!(matches!(update, GameUpdate::Rejected(MoveRejection::PushBlocked)));

        let expected_level = r#"
#PMM.#
"#;
        game.assert_matches(expected_level);
        assert_eq!(before, game.game_state);
    }

    #[test]
    fn when_block_pushed_against_wall_or_edge_nothing_moves(){
        let game = GameTestState::new("#PM#\n");
        assert_eq!(game.assert_rejected(Right), MoveRejection::PushBlocked);

        let game = GameTestState::new("#PM\n");
        assert_eq!(game.assert_rejected(Right), MoveRejection::PushBlocked);
    }

    #[test]
    fn when_block_pushed_into_water_the_water_is_displaced(){
        let level = r#"
#PMW..#
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        let expected_level = r#"
#.PM..#
"#;
        game.assert_matches(expected_level);
        assert_eq!(game.game_state.water_cell_count(), 0);
    }

    #[test]
    fn when_block_pushed_into_lava_the_lava_is_displaced(){
        let mut game = GameTestState::new("#PML#\n");
        game.assert_move(Right);

        game.assert_matches("#.PM#");
        assert_eq!(game.game_state.lava_cell_count(), 0);
        assert!(!game.game_state.game_over);
    }

    #[test]
    fn when_walking_into_obstacles_move_is_rejected(){
        let game = GameTestState::new(r#"
#####
#*P##
##T:4##
#####
"#);
        assert_eq!(game.assert_rejected(Left), MoveRejection::Obstructed(Tile::Barrier));
        assert_eq!(game.assert_rejected(Right), MoveRejection::Obstructed(Tile::Wall));
        assert_eq!(game.assert_rejected(Down), MoveRejection::Obstructed(Tile::Timed));
        assert_eq!(game.assert_rejected(Up), MoveRejection::Obstructed(Tile::Wall));
        assert!(valid_moves(&game.game_state).is_empty());
    }

    #[test]
    fn when_walking_off_the_map_move_is_rejected(){
        let game = GameTestState::new("P.\n");
        assert_eq!(game.assert_rejected(Left), MoveRejection::OutOfBounds);
        assert_eq!(game.assert_rejected(Up), MoveRejection::OutOfBounds);
        assert_eq!(valid_moves(&game.game_state), vec![Right]);
    }

    #[test]
    fn rejected_moves_leave_state_equal(){
        let game = GameTestState::new(r#"
#####
#PMM#
#*..#
#####
"#);
        for dir in Direction::ALL {
            if !valid_moves(&game.game_state).contains(&dir) {
                assert_eq!(apply_move(&game.game_state, dir), game.game_state, "{:?} changed the state", dir);
            }
        }
    }

    #[test]
    fn goal_is_locked_until_collectibles_are_taken(){
        let level = r#"
#####
#PG.#
#C..#
#####
"#;
        let mut game = GameTestState::new(level);
        assert_eq!(game.assert_rejected(Right), MoveRejection::GoalLocked);

        let update = game.assert_move(Down);
        assert!(matches!(update, GameUpdate::NextState(_, GameChangeType::Collected)));
        assert_eq!(game.game_state.purple_collected, 1);
        game.assert_matches(r#"
#####
#.G.#
#P..#
#####
"#);

        game.assert_move(Up);
        let update = game.assert_move(Right);
        assert!(matches!(update, GameUpdate::NextState(_, GameChangeType::ReachedGoal)));
        assert!(game.game_state.won);
        assert!(game.game_state.game_over);
    }

    #[test]
    fn walking_to_an_open_goal_wins_in_two_moves(){
        let level = r#"
#####
#P.G#
#####
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);
        assert!(!game.game_state.won);
        game.assert_move(Right);

        assert!(game.game_state.won);
        assert!(game.game_state.game_over);
        assert_eq!(game.game_state.move_count, 2);
    }

    #[test]
    fn winning_move_skips_the_environment(){
        let mut game = GameTestState::new("#P.G#W..T:2#\n");
        game.assert_move(Right);
        assert_eq!(game.game_state.water_cell_count(), 2);
        assert_eq!(game.game_state.timed_blocks.get(&Vec2 { i: 0, j: 8 }), Some(&1));

        game.assert_move(Right);
        assert!(game.game_state.won);
        assert_eq!(game.game_state.move_count, 2);
        // neither the water nor the timer advanced on the winning move
        assert_eq!(game.game_state.water_cell_count(), 2);
        assert_eq!(game.game_state.timed_blocks.get(&Vec2 { i: 0, j: 8 }), Some(&1));
    }

    #[test]
    fn finished_game_accepts_no_moves(){
        let mut game = GameTestState::new("#PG#\n");
        game.assert_move(Right);
        assert!(game.game_state.game_over);

        assert!(valid_moves(&game.game_state).is_empty());
        assert_eq!(game.assert_rejected(Left), MoveRejection::GameOver);
        assert_eq!(apply_move(&game.game_state, Left), game.game_state);
    }

    #[test]
    fn valid_moves_follow_fixed_order(){
        let game = GameTestState::new(r#"
#####
#...#
#.P.#
#...#
#####
"#);
        assert_eq!(valid_moves(&game.game_state), vec![Right, Down, Left, Up]);
    }

    #[test]
    fn valid_moves_include_pushes_only_when_they_succeed(){
        let game = GameTestState::new(r#"
#######
#.....#
#..M..#
#.MPM##
#..M..#
#.....#
#######
"#);
        // right is blocked by the wall behind the block, the others can push
        assert_eq!(valid_moves(&game.game_state), vec![Down, Left, Up]);
    }

    #[test]
    fn when_player_moves_back_only_move_count_differs(){
        let level = r#"
#P.M#
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.game_state.clone();
        game.assert_move(Right);
        game.assert_move(Left);
        let new_state = game.game_state.clone();

        game.assert_matches(level);
        assert_eq!(original_state.grid, new_state.grid);
        assert_eq!(original_state.player, new_state.player);
        assert_ne!(original_state, new_state);
    }

    #[test]
    fn opaque_tiles_are_walkable(){
        let mut game = GameTestState::new("#Px.#\n");
        game.assert_move(Right);
        game.assert_matches("#.P.#");
        assert_eq!(game.game_state.tile_at(Vec2 { i: 0, j: 2 }), Some(Tile::Other('x')));
    }
}
