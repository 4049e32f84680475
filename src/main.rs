// Lava & Aqua in the terminal, with a built-in solver.
// Controls: W/A/S/D or arrow keys to move, U undo, R restart, X auto-solve, Q quit.

use clap::{Parser, ValueEnum};
use lava_aqua::console_interface::ConsoleInput::*;
use lava_aqua::console_interface::{
    cleanup_terminal, handle_input, handle_input_within, render_game, render_game_to_string, setup_terminal,
};
use lava_aqua::core::GameState;
use lava_aqua::logging::init_file_logger;
use lava_aqua::map_loader::load_level;
use lava_aqua::models::GameRenderState;
use lava_aqua::search::{replay, solve, SearchConfig, SearchOutcome, SearchStrategy};
use lava_aqua::session::PlaySession;
use lava_aqua::state_graph::{
    audit_outcome, explore, get_json_data, retain_winnable, shortest_winning_path, Exploration, ROOT,
};
use log::{info, LevelFilter};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Play in the terminal
    Play,
    /// Run the solver once and print the result
    Solve,
    /// Solve, then check the result against every reachable state up to the budget
    Graph,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the level file
    level: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Mode::Play)]
    mode: Mode,

    /// Overrides the strategy from the config file
    #[arg(short, long, value_enum)]
    strategy: Option<SearchStrategy>,

    /// Overrides the generated-state budget from the config file
    #[arg(long)]
    max_states: Option<usize>,

    /// JSON search configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Delay between moves when replaying a solution
    #[arg(long, default_value_t = 200)]
    replay_delay_ms: u64,

    #[arg(long, default_value = "exports/solve_log.log")]
    log_file: PathBuf,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Where graph mode writes the explored graph as JSON
    #[arg(long)]
    export_json: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_file_logger(&args.log_file, args.log_level)?;

    let mut config = match &args.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(max_states) = args.max_states {
        config.max_generated_states = max_states;
    }

    let game_state = load_level(&args.level)?;
    info!("loaded {} with {:?}", args.level.display(), config);

    match args.mode {
        Mode::Solve => run_solve(game_state, &config),
        Mode::Graph => run_audit(game_state, &config, args.export_json.as_ref()),
        Mode::Play => {
            let mut terminal = setup_terminal()?;
            let delay = Duration::from_millis(args.replay_delay_ms);
            run_interactive(game_state, &config, delay, &mut terminal)
        }
    }
}

fn run_solve(game_state: GameState, config: &SearchConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_game_to_string(&game_state));
    let outcome = solve(&game_state, config);
    let stats = outcome.stats();
    match &outcome {
        SearchOutcome::Solved(solution) => {
            println!("Solution found ({} moves):", solution.moves.len());
            let moves: Vec<String> = solution.moves.iter().map(|m| format!("{:?}", m)).collect();
            println!("  {}", moves.join(" "));
            let final_state = replay(&game_state, &solution.moves);
            println!("\n{}", render_game_to_string(&final_state));
        }
        SearchOutcome::NoSolution(_) => println!("No solution exists."),
        SearchOutcome::Overloaded(_) => println!(
            "Gave up after generating {} states.",
            config.max_generated_states
        ),
    }
    println!(
        "{:?}: generated {} states, expanded {}, in {:?}",
        config.strategy, stats.generated, stats.expanded, stats.elapsed
    );
    Ok(())
}

fn run_audit(
    game_state: GameState,
    config: &SearchConfig,
    export_json: Option<&PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_game_to_string(&game_state));

    let (mut graph, exploration) = explore(&game_state, config.max_generated_states);
    println!(
        "Explored {} states and {} moves ({} won, {} lost){}",
        graph.node_count(),
        graph.edge_count(),
        graph.won.len(),
        graph.lost.len(),
        match exploration {
            Exploration::Complete => String::new(),
            Exploration::Truncated => format!(", stopped at the {} state budget", config.max_generated_states),
        }
    );
    match shortest_winning_path(&graph, ROOT) {
        Some(path) => println!("Shortest win in the graph: {} moves", path.len()),
        None => println!("No win in the graph."),
    }

    let outcome = solve(&game_state, config);
    let verdict = audit_outcome(&game_state, &graph, exploration, config.strategy, &outcome)?;
    println!("{:?} search: {:?}", config.strategy, verdict);

    println!("{}", retain_winnable(&mut graph));

    if let Some(path) = export_json {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, get_json_data(&graph, ROOT)?)?;
        println!("Winnable state graph exported to {}", path.display());
    }

    Ok(())
}

fn run_interactive(
    game_state: GameState,
    config: &SearchConfig,
    replay_delay: Duration,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = PlaySession::new(game_state);
    let mut to_render = GameRenderState::new(session.current().clone());
    render_game(terminal, &to_render)?;

    loop {
        let input = if session.is_replaying() {
            handle_input_within(replay_delay)
        } else {
            handle_input()
        };

        let mut next_render = GameRenderState::new(session.current().clone());
        next_render.status = to_render.status.take();
        match input {
            Ok(Quit) => break,
            Ok(UserAction(lava_aqua::core::UserAction::Move(direction))) => {
                match session.apply(direction) {
                    Ok(change) => next_render.last_change = Some(change),
                    Err(rejection) => next_render.error = Some(rejection.to_string()),
                }
            }
            Ok(Undo) => {
                if !session.undo() {
                    next_render.error = Some("nothing to undo".to_string());
                }
            }
            Ok(Restart) => {
                session.restart();
                next_render.status = None;
            }
            Ok(Solve) => {
                next_render.status = Some(format!("solving with {:?}...", config.strategy));
                next_render.game = session.current().clone();
                render_game(terminal, &next_render)?;

                let outcome = solve(session.current(), config);
                next_render.status = Some(match &outcome {
                    SearchOutcome::Solved(solution) => {
                        session.queue_solution(&solution.moves);
                        format!("solution: {} moves", solution.moves.len())
                    }
                    SearchOutcome::NoSolution(_) => "no solution".to_string(),
                    SearchOutcome::Overloaded(stats) => format!("gave up after {} states", stats.generated),
                });
            }
            Ok(Timeout) => {
                match session.next_replay_move() {
                    Some(Ok(change)) => next_render.last_change = Some(change),
                    Some(Err(rejection)) => next_render.error = Some(rejection.to_string()),
                    None => {
                        // nothing happened, skip the redraw
                        to_render.status = next_render.status;
                        continue;
                    }
                }
            }
            Ok(Unknown) => {
                to_render.status = next_render.status;
                continue;
            }
            Err(_) => {
                println!("error reading input");
                break;
            }
        }

        next_render.game = session.current().clone();
        render_game(terminal, &next_render)?;
        to_render = next_render;
    }

    cleanup_terminal()?;

    Ok(())
}
