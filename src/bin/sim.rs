use std::collections::BTreeMap;

use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{init_logging, GameController, MoveOutcome, PlayerSpec, DEFAULT_TOKENS};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let p1 = PlayerSpec::new("player1", DEFAULT_TOKENS[0]);
    let p2 = PlayerSpec::new("player2", DEFAULT_TOKENS[1]);
    let mut controller = GameController::new();

    let mut wins: BTreeMap<String, usize> = BTreeMap::new();
    wins.insert(p1.name.clone(), 0);
    wins.insert(p2.name.clone(), 0);
    let mut ties = 0usize;
    let mut moves = 0usize;

    for _ in 0..games {
        controller.reset();
        controller.start(p1.clone(), p2.clone());
        while controller.is_active() {
            let (r, c) = controller
                .random_move(&mut rng)
                .ok_or_else(|| anyhow::anyhow!("active game with a full board"))?;
            match controller.play(r, c).map_err(|e| anyhow::anyhow!(e))? {
                MoveOutcome::Winner { name } => *wins.entry(name).or_default() += 1,
                MoveOutcome::Tie => ties += 1,
                MoveOutcome::NextPlayer { .. } => {}
                MoveOutcome::Rejected(why) => {
                    return Err(anyhow::anyhow!("random move rejected: {:?}", why))
                }
            }
        }
        moves += controller.moves_played();
    }

    let result = json!({
        "seed": seed,
        "games": games,
        "wins": wins,
        "ties": ties,
        "moves": moves,
        "last_board": controller.board(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
