use anyhow::Context;
use clap::Parser;
use rust_draughts::{
    play_match, Color, EngineConfig, GameStatus, MatchConfig, RandomChooser, SideMap,
};

#[derive(Parser, Debug)]
#[command(name = "selfplay", about = "Play random-vs-random English draughts matches")]
struct Args {
    /// Board side length
    #[arg(long, default_value_t = 8)]
    size: usize,
    /// Non-capturing moves before a tie (default: size*size/2)
    #[arg(long)]
    tie_max: Option<usize>,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    games: usize,
    #[arg(long, default_value_t = 500)]
    max_plies: usize,
    /// Print the final board of every game
    #[arg(long)]
    show_board: bool,
    /// Print each match record as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    anyhow::ensure!(a.size > 0, "board size must be positive");

    let mut engine = EngineConfig::new(a.size);
    if let Some(tie_max) = a.tie_max {
        engine = engine.with_tie_max(tie_max);
    }
    let config = MatchConfig::new()
        .with_engine(engine.clone())
        .with_max_plies(a.max_plies);

    let mut wins: SideMap<usize> = SideMap::default();
    let mut ties = 0usize;
    let mut unfinished = 0usize;

    for game_idx in 0..a.games {
        let seed = a.seed.wrapping_add(2 * game_idx as u64);
        let mut black = RandomChooser::new(engine.clone(), Color::Black, seed);
        let mut white = RandomChooser::new(engine.clone(), Color::White, seed.wrapping_add(1));

        let record = play_match(&config, &mut black, &mut white)
            .with_context(|| format!("game {game_idx} (seed {seed})"))?;

        match record.status {
            GameStatus::Tie => ties += 1,
            GameStatus::Unfinished => unfinished += 1,
            status => {
                if let Some(winner) = status.winner() {
                    wins[winner] += 1;
                }
            }
        }

        println!(
            "game {}: {:?} after {} plies (black {}, white {})",
            game_idx,
            record.status,
            record.plies(),
            record.black_count,
            record.white_count
        );

        if a.show_board {
            let final_position = record.replay(&engine)?;
            print!("{}", final_position.board());
        }
        if a.json {
            println!("{}", serde_json::to_string(&record)?);
        }
    }

    println!(
        "black wins: {}, white wins: {}, ties: {}, unfinished: {}",
        wins[Color::Black],
        wins[Color::White],
        ties,
        unfinished
    );
    Ok(())
}
