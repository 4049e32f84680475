mod test {
    use Direction::*;
    use crate::core::*;
    use crate::search::{solve, SearchConfig, SearchOutcome, SearchStats, SearchStrategy, Solution};
    use crate::state_graph::*;
    use crate::test::test_util::parse_test_level;

    const RACE: &str = r#"
######
#LP.G#
######
"#;

    const CORRIDOR: &str = r#"
#######
#P....#
#####.#
#G....#
#######
"#;

    const STRATEGIES: [SearchStrategy; 3] = [
        SearchStrategy::BreadthFirst,
        SearchStrategy::DepthFirst,
        SearchStrategy::UniformCost,
    ];

    #[test]
    fn explore_finds_every_reachable_state(){
        let (graph, exploration) = explore(&parse_test_level(RACE), 1000);
        assert_eq!(exploration, Exploration::Complete);

        // start, one step right, burned on the left, burned after stepping back, won
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.won.len(), 1);
        assert_eq!(graph.lost.len(), 2);
        assert_eq!(graph.open_count(), 0);
    }

    #[test]
    fn interning_an_equal_state_returns_the_same_id(){
        let game = parse_test_level(RACE);
        let mut graph = StateGraph::new(10);
        let first = graph.intern(game.clone());
        let second = graph.intern(game);
        assert_eq!(first, ROOT);
        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.open_count(), 1);
    }

    #[test]
    fn terminal_states_are_never_expanded(){
        let mut graph = StateGraph::new(10);
        let mut over = parse_test_level("#P.G#\n");
        over.game_over = true;
        graph.intern(over);
        assert_eq!(graph.lost.len(), 1);
        assert_eq!(graph.expand_next(), None);
    }

    #[test]
    fn shortest_path_reaches_the_won_node(){
        let (graph, _) = explore(&parse_test_level(RACE), 1000);
        assert_eq!(shortest_winning_path(&graph, ROOT), Some(vec![Right, Right]));
    }

    #[test]
    fn no_path_when_nothing_is_won(){
        let (graph, exploration) = explore(&parse_test_level("#####\n#PL.#\n#####\n"), 1000);
        assert_eq!(exploration, Exploration::Complete);
        assert!(graph.won.is_empty());
        assert_eq!(shortest_winning_path(&graph, ROOT), None);
    }

    #[test]
    fn pruning_keeps_only_winnable_states(){
        let (mut graph, _) = explore(&parse_test_level(RACE), 1000);
        let pruned = retain_winnable(&mut graph);

        assert_eq!(pruned.nodes, 2);
        assert_eq!(pruned.edges, 2);
        assert_eq!(pruned.nodes_left, 3);
        assert!(graph.lost.is_empty());
        assert!(graph.ids.contains_right(&ROOT));
        assert_eq!(shortest_winning_path(&graph, ROOT), Some(vec![Right, Right]));
    }

    #[test]
    fn json_export_lists_nodes_and_moves(){
        let (graph, _) = explore(&parse_test_level(RACE), 1000);
        let json = get_json_data(&graph, ROOT).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let nodes = value["nodes"].as_array().unwrap();
        let moves = value["moves"].as_array().unwrap();
        assert_eq!(value["root"], 0);
        assert_eq!(nodes.len(), 5);
        assert_eq!(moves.len(), 4);
        assert_eq!(nodes[0]["status"], "live");
        assert_eq!(moves[0]["from"], 0);
        assert_eq!(moves[0]["direction"], "right");
        assert_eq!(nodes.iter().filter(|node| node["status"] == "won").count(), 1);
        assert_eq!(nodes.iter().filter(|node| node["status"] == "lost").count(), 2);
    }

    #[test]
    fn exploration_stops_at_the_node_limit(){
        let (graph, exploration) = explore(&parse_test_level(CORRIDOR), 2);
        assert_eq!(exploration, Exploration::Truncated);
        assert_eq!(graph.node_count(), 2);
        assert!(graph.open_count() > 0);
    }

    #[test]
    fn graph_shortest_path_matches_bfs(){
        let game = parse_test_level(CORRIDOR);
        let (mut graph, exploration) = explore(&game, 5000);
        assert_eq!(exploration, Exploration::Truncated);

        let bfs = solve(&game, &SearchConfig::default());
        let path = shortest_winning_path(&graph, ROOT).unwrap();
        assert_eq!(Some(path.as_slice()), bfs.moves());

        retain_winnable(&mut graph);
        assert!(graph.ids.contains_right(&ROOT));
    }

    #[test]
    fn audit_confirms_every_strategy_on_small_levels(){
        let levels = [
            RACE,
            "#####\n#G..#\n#.#.#\n#..P#\n#####\n",
            "#####\n#P#G#\n#####\n",
            "#####\n#PL.#\n#####\n",
        ];
        for level in levels {
            let game = parse_test_level(level);
            let (graph, exploration) = explore(&game, 1000);
            for strategy in STRATEGIES {
                let config = SearchConfig { strategy, max_generated_states: 1000 };
                let outcome = solve(&game, &config);
                let verdict = audit_outcome(&game, &graph, exploration, strategy, &outcome);
                assert!(
                    matches!(verdict, Ok(Verdict::Confirmed { .. })),
                    "{:?} on\n{}\ngave {:?} for {:?}",
                    strategy, level, verdict, outcome
                );
            }
        }
    }

    #[test]
    fn audit_rejects_a_solution_that_does_not_win(){
        let game = parse_test_level(RACE);
        let (graph, exploration) = explore(&game, 1000);
        let outcome = SearchOutcome::Solved(Solution {
            moves: vec![Left],
            stats: SearchStats::default(),
        });
        assert_eq!(
            audit_outcome(&game, &graph, exploration, SearchStrategy::DepthFirst, &outcome),
            Err(AuditError::SolutionDoesNotWin(1))
        );
    }

    #[test]
    fn audit_rejects_a_missed_win(){
        let game = parse_test_level(RACE);
        let (graph, exploration) = explore(&game, 1000);
        let outcome = SearchOutcome::NoSolution(SearchStats::default());
        assert_eq!(
            audit_outcome(&game, &graph, exploration, SearchStrategy::BreadthFirst, &outcome),
            Err(AuditError::MissedWin(2))
        );
    }

    #[test]
    fn audit_rejects_a_long_breadth_first_solution(){
        let game = parse_test_level("#####\n#...#\n#P.G#\n#####\n");
        let (graph, exploration) = explore(&game, 1000);
        let outcome = SearchOutcome::Solved(Solution {
            moves: vec![Up, Right, Down, Right],
            stats: SearchStats::default(),
        });
        assert_eq!(
            audit_outcome(&game, &graph, exploration, SearchStrategy::BreadthFirst, &outcome),
            Err(AuditError::NotShortest { found: 4, shortest: 2 })
        );
        // other strategies make no length promise
        assert_eq!(
            audit_outcome(&game, &graph, exploration, SearchStrategy::DepthFirst, &outcome),
            Ok(Verdict::Confirmed { shortest: Some(2) })
        );
    }

    #[test]
    fn audit_leaves_truncated_failures_unverified(){
        let game = parse_test_level(CORRIDOR);
        let (graph, exploration) = explore(&game, 3);
        let config = SearchConfig { strategy: SearchStrategy::DepthFirst, max_generated_states: 50 };
        let outcome = solve(&game, &config);
        assert!(matches!(outcome, SearchOutcome::Overloaded(_)));
        assert_eq!(
            audit_outcome(&game, &graph, exploration, SearchStrategy::DepthFirst, &outcome),
            Ok(Verdict::Unverified)
        );
    }
}
