use crate::core::{Direction, GameState, Tile, UserAction, Vec2};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Character shown for one cell. Player beats lava beats water beats the tile.
pub fn cell_symbol(game: &GameState, pos: Vec2) -> char {
    if pos == game.player {
        return 'P';
    }
    if game.lava[&pos] {
        return 'L';
    }
    if game.water[&pos] {
        return 'W';
    }
    match game.grid[&pos] {
        Tile::Timed => match game.timed_blocks.get(&pos) {
            Some(&turns) if (1..=9).contains(&turns) => char::from(b'0' + turns as u8),
            _ => 'T',
        },
        tile => tile.symbol(),
    }
}

fn cell_color(symbol: char) -> Color {
    match symbol {
        'P' => Color::LightGreen,
        'L' => Color::LightRed,
        'W' => Color::LightBlue,
        '#' => Color::Gray,
        'M' => Color::Yellow,
        'G' => Color::Magenta,
        '*' => Color::Cyan,
        'C' => Color::LightMagenta,
        '.' => Color::DarkGray,
        c if c.is_ascii_digit() || c == 'T' => Color::Rgb(255, 150, 0),
        _ => Color::White,
    }
}

pub fn render_game_to_string(game: &GameState) -> String {
    let mut result = String::new();
    for i in 0..game.height() {
        for j in 0..game.width() {
            result.push(cell_symbol(game, Vec2 { i, j }));
        }
        result.push('\n');
    }
    result
}

fn render_game_lines(game: &GameState) -> Vec<Line<'static>> {
    (0..game.height())
        .map(|i| {
            let spans: Vec<Span> = (0..game.width())
                .map(|j| {
                    let symbol = cell_symbol(game, Vec2 { i, j });
                    Span::styled(format!("{} ", symbol), Style::default().fg(cell_color(symbol)))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    let game = &state.game;
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        let game_paragraph = Paragraph::new(render_game_lines(game))
            .block(Block::default().borders(Borders::ALL).title("Lava & Aqua"))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let goal_status = if game.goal.is_none() {
            "NONE"
        } else if game.is_goal_unlocked() {
            "UNLOCKED"
        } else {
            "LOCKED"
        };
        let mut summary = format!(
            "Moves: {} | Collected: {}/{} | Goal: {}",
            game.move_count, game.purple_collected, game.purple_total, goal_status
        );
        if let Some(status) = &state.status {
            summary = format!("{} | {}", summary, status);
        }
        let summary_paragraph = Paragraph::new(summary)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(summary_paragraph, chunks[1]);

        let instructions = if game.won {
            "You reached the goal! R to restart, U to undo, Q to quit."
        } else if game.game_over {
            "Consumed by lava! R to restart, U to undo, Q to quit."
        } else {
            "WASD/arrows move, U undo, R restart, X auto-solve, Q quit"
        };

        let instructions = if let Some(err) = &state.error {
            format!("{} | Error: {}", instructions, err)
        } else {
            instructions.to_string()
        };

        let instructions = if let Some(change_type) = &state.last_change {
            format!("{} | Last: {:?}", instructions, change_type)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Restart,
    Undo,
    Solve,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    handle_input_within(Duration::from_millis(50))
}

/// Waits up to `timeout` for a key. `Timeout` means nothing arrived; any event that was
/// read but is not a recognised key press is `Unknown`.
pub fn handle_input_within(timeout: Duration) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if !event::poll(timeout)? {
        return Ok(ConsoleInput::Timeout);
    }
    let Event::Key(KeyEvent {
        code,
        kind: KeyEventKind::Press,
        ..
    }) = event::read()?
    else {
        return Ok(ConsoleInput::Unknown);
    };
    Ok(key_to_input(code))
}

fn key_to_input(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
        KeyCode::Char('u') | KeyCode::Char('U') => ConsoleInput::Undo,
        KeyCode::Char('x') | KeyCode::Char('X') => ConsoleInput::Solve,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        _ => ConsoleInput::Unknown,
    }
}
