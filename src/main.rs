use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, parse_ship_rules, AiPlayer, CliPlayer, EndReason, GameConfig, Match, Player,
    Renderer, Side, Symbols,
};

#[derive(Parser)]
#[command(author, version, about = "Sea Battle against the computer", long_about = None)]
struct Cli {
    /// Side length of the square board (at most 26).
    #[arg(long, default_value_t = seabattle::BOARD_SIZE)]
    size: usize,
    /// Ship lengths in placement order, e.g. "3,2,2,1,1,1,1".
    #[arg(long)]
    ships: Option<String>,
    /// Four display characters for empty, ship, hit and miss cells, e.g. "~■X·".
    #[arg(long)]
    symbols: Option<String>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Place your ships automatically without asking.
    #[arg(long)]
    auto_place: bool,
    /// Pause in milliseconds before each shot's outcome is shown.
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
    /// Do not clear the terminal between screens.
    #[arg(long)]
    no_clear: bool,
}

impl Cli {
    fn config(&self) -> anyhow::Result<GameConfig> {
        let mut config = GameConfig {
            board_size: self.size,
            ..GameConfig::default()
        };
        if let Some(ships) = &self.ships {
            config.ship_rules = parse_ship_rules(ships)?;
        }
        if let Some(symbols) = &self.symbols {
            config.symbols = Symbols::parse(symbols)?;
        }
        config.validate()?;
        Ok(config)
    }

    fn rngs(&self) -> (SmallRng, SmallRng) {
        match self.seed {
            Some(s) => (
                SmallRng::seed_from_u64(s),
                SmallRng::seed_from_u64(s.wrapping_add(1)),
            ),
            None => {
                let mut seed_rng = rand::rng();
                (
                    SmallRng::from_rng(&mut seed_rng),
                    SmallRng::from_rng(&mut seed_rng),
                )
            }
        }
    }
}

fn draw(
    out: &mut impl Write,
    renderer: &Renderer,
    game: &Match,
    reveal: bool,
    clear: bool,
) -> io::Result<()> {
    if clear {
        write!(out, "{}", seabattle::ui::CLEAR_SCREEN)?;
    }
    let view = renderer.render(
        game.board(Side::Player),
        Some(game.board(Side::Opponent)),
        reveal,
    );
    write!(out, "{}", view)?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.config()?;
    let clear = !cli.no_clear;
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    info!(
        "board {}x{}, fleet {:?}",
        config.board_size, config.board_size, config.ship_rules
    );

    let (human_rng, computer_rng) = cli.rngs();
    let renderer = Renderer::new(config.symbols);
    let mut human = CliPlayer::new(
        io::stdin().lock(),
        io::stdout().lock(),
        human_rng,
        renderer.clone(),
    )
    .with_delay(Duration::from_millis(cli.delay_ms))
    .with_clear_screen(clear);
    if cli.auto_place {
        human = human.with_auto_place(true);
    }
    let mut computer = AiPlayer::new(computer_rng);

    let mut game = Match::new(config.board_size);
    loop {
        draw(human.output_mut(), &renderer, &game, false, clear)?;
        human.place_ships(game.board_mut(Side::Player), &config.ship_rules)?;
        computer.place_ships(game.board_mut(Side::Opponent), &config.ship_rules)?;

        let outcome = loop {
            if let Some(outcome) = game.outcome() {
                break outcome;
            }
            draw(human.output_mut(), &renderer, &game, false, clear)?;
            let shooter = match game.active_side() {
                Side::Player => "Player",
                Side::Opponent => "Computer",
            };
            writeln!(
                human.output_mut(),
                "Turn #{} - {}",
                game.turn_count() + 1,
                shooter
            )?;
            game.play_turn(&mut human, &mut computer)?;
        };
        info!("match finished: {:?}", outcome);

        draw(human.output_mut(), &renderer, &game, true, clear)?;
        let out = human.output_mut();
        if outcome.reason == EndReason::TurnCap {
            writeln!(out, "Turn limit of {} reached.", game.turn_cap())?;
        }
        match outcome.winner {
            Side::Player => writeln!(out, "You won!")?,
            Side::Opponent => writeln!(out, "You lost!")?,
        }

        if !human.confirm("Play again? (y/n) ")? {
            break;
        }
        game.reset();
    }

    if clear {
        write!(human.output_mut(), "{}", seabattle::ui::CLEAR_SCREEN)?;
        human.output_mut().flush()?;
    }
    Ok(())
}
