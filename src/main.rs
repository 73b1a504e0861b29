#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    cli::{describe_outcome, prompt_players, render_board, run_session},
    init_logging, validate_players, GameController, DEFAULT_TOKENS, NUM_CELLS,
};

#[cfg(feature = "std")]
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive two-player game in the terminal.
    Play {
        #[arg(long, help = "First player's name (prompted if omitted)")]
        player1: Option<String>,
        #[arg(long, help = "First player's token (prompted if omitted)")]
        token1: Option<String>,
        #[arg(long, help = "Second player's name (prompted if omitted)")]
        player2: Option<String>,
        #[arg(long, help = "Second player's token (prompted if omitted)")]
        token2: Option<String>,
    },
    /// Replay a scripted game from a list of cell numbers (1-9).
    Replay {
        #[arg(long, default_value = "Player 1")]
        player1: String,
        #[arg(long, default_value = DEFAULT_TOKENS[0])]
        token1: String,
        #[arg(long, default_value = "Player 2")]
        player2: String,
        #[arg(long, default_value = DEFAULT_TOKENS[1])]
        token2: String,
        #[arg(long, value_delimiter = ',', help = "Cells in play order, e.g. --moves 1,5,9")]
        moves: Vec<usize>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            player1,
            token1,
            player2,
            token2,
        } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            let Some((p1, p2)) =
                prompt_players(&mut input, &mut output, [(player1, token1), (player2, token2)])?
            else {
                return Ok(());
            };
            let mut controller = GameController::new();
            run_session(&mut input, &mut output, &mut controller, &p1, &p2)?;
        }
        Commands::Replay {
            player1,
            token1,
            player2,
            token2,
            moves,
        } => {
            let (p1, p2) = validate_players(
                &player1,
                Some(token1.as_str()),
                &player2,
                Some(token2.as_str()),
            )
            .map_err(|e| anyhow::anyhow!(e))?;
            let mut controller = GameController::new();
            controller.start(p1, p2);
            for cell in moves {
                if cell == 0 || cell > NUM_CELLS {
                    return Err(anyhow::anyhow!(
                        "Cell {} out of range - must be 1-{}",
                        cell,
                        NUM_CELLS
                    ));
                }
                let outcome = controller
                    .play_cell(cell - 1)
                    .map_err(|e| anyhow::anyhow!(e))?;
                println!("{}: {}", cell, describe_outcome(&outcome));
            }
            print!("\n{}", render_board(&controller.board()));
        }
    }
    Ok(())
}
