use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::bail;
use log::debug;
use rand::Rng;

use crate::{
    board::Board,
    common::{Coord, ParseError, ShotResult, TargetError},
    coord::{format_coord, parse_coordinate, parse_orientation},
    player::Player,
    ship::{Orientation, Ship},
    ui::{Renderer, CLEAR_SCREEN},
};

/// Human player reading commands from `input` and writing prompts to `output`.
pub struct CliPlayer<B, W, R> {
    input: B,
    output: W,
    rng: R,
    renderer: Renderer,
    delay: Duration,
    auto_place: Option<bool>,
    clear_screen: bool,
}

impl<B: BufRead, W: Write, R: Rng> CliPlayer<B, W, R> {
    /// `rng` is only used when the player hands placement over to the
    /// computer.
    pub fn new(input: B, output: W, rng: R, renderer: Renderer) -> Self {
        Self {
            input,
            output,
            rng,
            renderer,
            delay: Duration::ZERO,
            auto_place: None,
            clear_screen: false,
        }
    }

    /// Pause before revealing each shot's outcome.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Skip the "place automatically?" question with a fixed answer.
    pub fn with_auto_place(mut self, auto: bool) -> Self {
        self.auto_place = Some(auto);
        self
    }

    /// Clear the terminal before drawing the placement board.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and read one line. Closed input ends the session.
    pub fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Ask yes/no; `y` or `yes` counts as yes.
    pub fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        let answer = self.read_line(prompt)?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    /// Read orientation (unless `length` is 1) and anchor for one ship.
    fn read_placement(&mut self, length: usize) -> anyhow::Result<Result<Ship, ParseError>> {
        let orientation = if length > 1 {
            let text =
                self.read_line("Orientation - horizontal (h) or vertical (v): ")?;
            match parse_orientation(&text) {
                Ok(o) => o,
                Err(e) => return Ok(Err(e)),
            }
        } else {
            Orientation::Horizontal
        };
        let prompt = if length > 1 {
            "Top-left cell of the ship: "
        } else {
            "Ship cell: "
        };
        let text = self.read_line(prompt)?;
        Ok(parse_coordinate(&text).map(|anchor| Ship::new(length, orientation, anchor)))
    }

    fn place_manually(&mut self, board: &mut Board, rules: &[usize]) -> anyhow::Result<()> {
        while let Some(&length) = rules.get(board.fleet_len()) {
            if self.clear_screen {
                write!(self.output, "{}", CLEAR_SCREEN)?;
            }
            let view = self.renderer.render(board, None, false);
            write!(self.output, "{}", view)?;
            writeln!(
                self.output,
                "Placement - ship #{}, length {}",
                board.fleet_len() + 1,
                length
            )?;

            let error = match self.read_placement(length)? {
                Ok(ship) => match board.place(ship) {
                    Ok(()) => continue,
                    Err(e) => e.to_string(),
                },
                Err(e) => e.to_string(),
            };
            debug!("manual placement rejected: {}", error);
            writeln!(self.output, "The ship cannot be placed there: {}.", error)?;
            writeln!(self.output, "(r)eset - start placement over.")?;
            writeln!(self.output, "(a)uto - finish placement automatically.")?;
            let choice = self.read_line("<Enter> to try again: ")?.to_ascii_lowercase();
            match choice.as_str() {
                "r" | "reset" => board.reset(),
                "a" | "auto" => {
                    board.auto_place_fleet(&mut self.rng, rules);
                    return Ok(());
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl<B: BufRead, W: Write, R: Rng> Player for CliPlayer<B, W, R> {
    fn place_ships(&mut self, board: &mut Board, rules: &[usize]) -> anyhow::Result<()> {
        let auto = match self.auto_place {
            Some(auto) => auto,
            None => self.confirm("Place ships automatically? (y/n) ")?,
        };
        if auto {
            board.auto_place_fleet(&mut self.rng, rules);
            Ok(())
        } else {
            self.place_manually(board, rules)
        }
    }

    fn select_target(&mut self, _own: &Board, enemy: &Board) -> anyhow::Result<Coord> {
        let mut prompt = "Shot coordinates: ".to_string();
        loop {
            let text = self.read_line(&prompt)?;
            let checked = parse_coordinate(&text)
                .map_err(TargetError::from)
                .and_then(|(r, c)| enemy.check_target(r, c).map(|()| (r, c)));
            match checked {
                Ok(coord) => return Ok(coord),
                Err(e) => prompt = format!("{}. Try again: ", e),
            }
        }
    }

    fn handle_shot_result(&mut self, _coord: Coord, result: ShotResult) {
        self.pause();
        let _ = writeln!(self.output, "{}", describe(result));
        self.pause();
    }

    fn handle_opponent_shot(&mut self, coord: Coord, result: ShotResult) {
        self.pause();
        let _ = writeln!(self.output, "Computer fires at {}", format_coord(coord));
        self.pause();
        let _ = writeln!(self.output, "{}", describe(result));
        self.pause();
    }
}

fn describe(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Hit => "Hit! Ship damaged!",
        ShotResult::Sunk => "Hit! Ship sunk!",
        ShotResult::Miss => "Miss!",
    }
}
