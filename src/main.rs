use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use connect4_engine::board::Player;
use connect4_engine::game::{Game, GameMode, GameState};
use connect4_engine::strategy::Difficulty;

mod console;
use console::TurnInput;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::from_entropy();

    loop {
        console::print_main_menu();
        let mode = match console::menu_choice(1, 2)? {
            Some(1) => GameMode::PlayerVsPlayer,
            Some(_) => GameMode::PlayerVsAi,
            None => break,
        };

        let mut difficulty = Difficulty::Medium;
        let mut starting_player = Player::One;
        if mode == GameMode::PlayerVsAi {
            console::print_difficulty_menu();
            difficulty = match console::menu_choice(1, 4)? {
                Some(1) => Difficulty::Easy,
                Some(2) => Difficulty::Medium,
                Some(3) => Difficulty::Hard,
                Some(_) => Difficulty::Expert,
                None => break,
            };

            console::print_first_player_menu();
            starting_player = match console::menu_choice(1, 2)? {
                Some(1) => Player::One,
                Some(_) => Player::Two,
                None => break,
            };
        }

        run_game(mode, starting_player, difficulty, &mut rng)?;
    }
    Ok(())
}

fn run_game(
    mode: GameMode,
    starting_player: Player,
    difficulty: Difficulty,
    rng: &mut StdRng,
) -> Result<()> {
    // the human is always Player 1; the AI, when present, Player 2
    let mut game = Game::new(mode, starting_player, Player::Two, difficulty);

    loop {
        console::draw_board(game.board())?;

        match game.state() {
            GameState::Won(player) => {
                println!("{} wins!", player.name());
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
            GameState::Playing => {}
        }

        if game.ai_to_move() {
            println!("AI is thinking...");
            let column = game.ai_column(rng);
            game.play(column)?;
            println!("AI plays column {}", column + 1);
        } else {
            let allow_undo = mode == GameMode::PlayerVsAi && game.moves_played() > 0;
            match console::prompt_turn(game.current_player(), allow_undo)? {
                TurnInput::Quit => break,
                TurnInput::Undo => {
                    let undone = game.undo_round();
                    console::clear_screen()?;
                    println!("{} move(s) undone", undone);
                }
                TurnInput::Column(column) => {
                    if let Err(err) = game.play(column) {
                        println!("{}", err);
                    }
                }
            }
        }
    }
    Ok(())
}
