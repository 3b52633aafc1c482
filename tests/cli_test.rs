use std::io::Cursor;

use seabattle::{
    Board, CliPlayer, Orientation, Player, Renderer, Ship, ShotResult, Symbols, SHIP_RULES,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

type TestPlayer<'a> = CliPlayer<Cursor<&'a [u8]>, Vec<u8>, SmallRng>;

fn player(input: &str) -> TestPlayer<'_> {
    CliPlayer::new(
        Cursor::new(input.as_bytes()),
        Vec::new(),
        SmallRng::seed_from_u64(12345),
        Renderer::new(Symbols::default()),
    )
}

fn output(player: &TestPlayer<'_>) -> String {
    String::from_utf8(player.output().clone()).unwrap()
}

fn anchors(board: &Board) -> Vec<(usize, usize)> {
    board.fleet().iter().map(Ship::anchor).collect()
}

#[test]
fn test_auto_placement_on_request() {
    let mut p = player("y\n");
    let mut board = Board::new(6);
    p.place_ships(&mut board, &SHIP_RULES).unwrap();
    assert_eq!(board.fleet_len(), SHIP_RULES.len());
}

#[test]
fn test_auto_placement_preset_skips_question() {
    let mut p = player("").with_auto_place(true);
    let mut board = Board::new(6);
    p.place_ships(&mut board, &SHIP_RULES).unwrap();
    assert_eq!(board.fleet_len(), SHIP_RULES.len());
    assert!(!output(&p).contains("automatically?"));
}

#[test]
fn test_manual_placement_with_retry() {
    let mut p = player("n\nh\na a\nb b\n\nd d\n");
    let mut board = Board::new(6);
    p.place_ships(&mut board, &[3, 1]).unwrap();

    assert_eq!(anchors(&board), vec![(0, 0), (3, 3)]);
    assert_eq!(board.fleet()[0].orientation(), Orientation::Horizontal);
    let out = output(&p);
    assert!(out.contains("ship #2, length 1"));
    assert!(out.contains("cannot be placed there: ship touches another ship"));
    assert!(out.contains("(not available yet)"));
}

#[test]
fn test_manual_placement_reset() {
    let mut p = player("n\na a\nb b\nr\nc c\ne e\n");
    let mut board = Board::new(6);
    p.place_ships(&mut board, &[1, 1]).unwrap();
    assert_eq!(anchors(&board), vec![(2, 2), (4, 4)]);
}

#[test]
fn test_manual_placement_switches_to_auto() {
    let mut p = player("n\nh\na a\nx\na\n");
    let mut board = Board::new(6);
    p.place_ships(&mut board, &SHIP_RULES).unwrap();

    let lengths: Vec<usize> = board.fleet().iter().map(Ship::length).collect();
    assert_eq!(lengths, SHIP_RULES.to_vec());
    assert!(output(&p).contains("orientation must be 'h' or 'v'"));
}

#[test]
fn test_manual_placement_out_of_bounds() {
    let mut p = player("n\nv\ne a\n\nv\na a\n");
    let mut board = Board::new(6);
    p.place_ships(&mut board, &[3]).unwrap();
    assert_eq!(anchors(&board), vec![(0, 0)]);
    assert!(output(&p).contains("ship does not fit on the board"));
}

#[test]
fn test_target_prompt_repeats_until_valid() {
    let mut enemy = Board::new(6);
    enemy.resolve_shot(2, 2).unwrap();
    let own = Board::new(6);
    let mut p = player("zz\nc c\nq\nb a\n");

    assert_eq!(p.select_target(&own, &enemy).unwrap(), (1, 0));
    let out = output(&p);
    assert!(out.contains("no such coordinates"));
    assert!(out.contains("this cell was already targeted. Try again"));
    assert!(out.contains("invalid input format"));
}

#[test]
fn test_closed_input_is_an_error() {
    let enemy = Board::new(6);
    let mut p = player("");
    assert!(p.select_target(&enemy, &enemy).is_err());
}

#[test]
fn test_reports_shots() {
    let mut p = player("");
    p.handle_shot_result((0, 0), ShotResult::Sunk);
    p.handle_opponent_shot((1, 2), ShotResult::Miss);
    let out = output(&p);
    assert!(out.contains("Hit! Ship sunk!"));
    assert!(out.contains("Computer fires at B C"));
    assert!(out.contains("Miss!"));
}
