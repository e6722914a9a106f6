//! Menu prompts and board rendering for the console game

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use connect4_engine::board::{Board, Cell, Player};
use connect4_engine::{COLS, ROWS};

/// What the human asked for on their turn
pub enum TurnInput {
    Column(usize),
    Undo,
    Quit,
}

pub fn clear_screen() -> Result<()> {
    let mut stdout = stdout();
    stdout
        .queue(Clear(ClearType::All))?
        .queue(MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

pub fn draw_board(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (1..=COLS).map(|column| format!(" {}", column)).collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    for row in 0..ROWS {
        for column in 0..COLS {
            stdout.queue(PrintStyledContent(
                style(" O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.get(row, column) {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n".to_string())))?;
    }
    stdout.flush()?;
    Ok(())
}

pub fn print_main_menu() {
    println!();
    println!("========================================");
    println!("             CONNECT FOUR");
    println!("========================================");
    println!();
    println!("Select game mode:");
    println!("  1. Player vs Player");
    println!("  2. Player vs AI");
    println!("  q. Quit");
    println!();
    print!("Enter choice: ");
    stdout().flush().expect("failed to flush to stdout!");
}

pub fn print_difficulty_menu() {
    println!();
    println!("Select AI difficulty:");
    println!("  1. Easy   (random moves)");
    println!("  2. Medium (wins and blocks)");
    println!("  3. Hard   (positional play)");
    println!("  4. Expert (looks ahead)");
    println!();
    print!("Enter choice: ");
    stdout().flush().expect("failed to flush to stdout!");
}

pub fn print_first_player_menu() {
    println!();
    println!("Who goes first?");
    println!("  1. You (Player 1, red)");
    println!("  2. AI (Player 2, yellow)");
    println!();
    print!("Enter choice: ");
    stdout().flush().expect("failed to flush to stdout!");
}

/// Reads menu input until a number in `min..=max` or 'q' (`None`) arrives
pub fn menu_choice(min: usize, max: usize) -> Result<Option<usize>> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let trimmed = buffer.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match trimmed.parse::<usize>() {
            Ok(choice) if (min..=max).contains(&choice) => return Ok(Some(choice)),
            _ => {
                print!("Invalid. Enter {}-{} or 'q': ", min, max);
                stdout().flush().expect("failed to flush to stdout!");
            }
        }
    }
}

/// Prompts the human for their move, an undo, or a quit
pub fn prompt_turn(player: Player, allow_undo: bool) -> Result<TurnInput> {
    let stdin = stdin();
    loop {
        if allow_undo {
            print!(
                "{} - column 1-{}, 'u' to undo, 'q' to quit > ",
                player.name(),
                COLS
            );
        } else {
            print!("{} - column 1-{}, 'q' to quit > ", player.name(), COLS);
        }
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(TurnInput::Quit);
        }
        let trimmed = buffer.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(TurnInput::Quit);
        }
        if allow_undo && trimmed.eq_ignore_ascii_case("u") {
            return Ok(TurnInput::Undo);
        }
        match trimmed.parse::<usize>() {
            Ok(column) if (1..=COLS).contains(&column) => {
                return Ok(TurnInput::Column(column - 1))
            }
            _ => println!("Invalid input: {}", trimmed),
        }
    }
}
