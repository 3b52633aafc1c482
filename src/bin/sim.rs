use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiPlayer, GameConfig, Match, Player, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let config = GameConfig::default();
    let mut p1 = AiPlayer::new(SmallRng::seed_from_u64(seed1));
    let mut p2 = AiPlayer::new(SmallRng::seed_from_u64(seed2));

    let mut game = Match::new(config.board_size);
    p1.place_ships(game.board_mut(Side::Player), &config.ship_rules)?;
    p2.place_ships(game.board_mut(Side::Opponent), &config.ship_rules)?;
    let outcome = game.play_out(&mut p1, &mut p2)?;

    let result = json!({
        "winner": outcome.winner,
        "reason": outcome.reason,
        "turns": game.turn_count(),
        "player_ships_left": game.board(Side::Player).fleet_len(),
        "opponent_ships_left": game.board(Side::Opponent).fleet_len(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
