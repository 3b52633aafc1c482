use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{level_from, parse_ship_rules, Board, ConfigError, GameConfig, Symbols};

#[test]
fn test_default_config_is_valid() {
    let config = GameConfig::default();
    assert_eq!(config.board_size, 6);
    assert_eq!(config.ship_rules, vec![3, 2, 2, 1, 1, 1, 1]);
    assert_eq!(config.turn_cap(), 72);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_rejects_unplayable_configs() {
    let with = |board_size: usize, ship_rules: Vec<usize>| GameConfig {
        board_size,
        ship_rules,
        ..GameConfig::default()
    };
    assert_eq!(with(0, vec![1]).validate(), Err(ConfigError::BadBoardSize(0)));
    assert_eq!(with(27, vec![1]).validate(), Err(ConfigError::BadBoardSize(27)));
    assert_eq!(with(6, vec![]).validate(), Err(ConfigError::EmptyFleet));
    assert_eq!(with(6, vec![2, 0]).validate(), Err(ConfigError::ZeroLengthShip));
    assert_eq!(
        with(4, vec![5]).validate(),
        Err(ConfigError::ShipTooLong { length: 5, size: 4 })
    );
    assert_eq!(
        with(3, vec![1, 1, 1, 1, 1]).validate(),
        Err(ConfigError::FleetTooLarge(3))
    );
    assert_eq!(
        with(2, vec![1, 1]).validate(),
        Err(ConfigError::FleetTooLarge(2))
    );
    assert_eq!(with(2, vec![2]).validate(), Ok(()));
    assert_eq!(with(3, vec![1, 1, 1, 1]).validate(), Ok(()));
    assert_eq!(with(4, vec![4, 4]).validate(), Ok(()));
    assert_eq!(with(26, vec![4, 3, 3, 2, 2, 2, 1, 1, 1, 1]).validate(), Ok(()));
}

#[test]
fn test_accepted_tight_fleets_auto_place() {
    for (size, rules) in [(2, vec![2]), (3, vec![1, 1, 1, 1]), (4, vec![4, 4])] {
        let config = GameConfig {
            board_size: size,
            ship_rules: rules.clone(),
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
        let mut rng = SmallRng::seed_from_u64(11);
        let mut board = Board::new(size);
        board.auto_place_fleet(&mut rng, &rules);
        assert_eq!(board.fleet_len(), rules.len());
    }
}

#[test]
fn test_fleet_fits_needs_separation() {
    assert!(Board::fleet_fits(1, &[1]));
    assert!(!Board::fleet_fits(1, &[1, 1]));
    assert!(!Board::fleet_fits(2, &[1, 1]));
    assert!(Board::fleet_fits(3, &[1, 1, 1, 1]));
    assert!(Board::fleet_fits(3, &[3, 3]));
    assert!(!Board::fleet_fits(3, &[3, 3, 1]));
    assert!(Board::fleet_fits(6, &[3, 2, 2, 1, 1, 1, 1]));
}

#[test]
fn test_parse_ship_rules() {
    assert_eq!(parse_ship_rules("3,2,2,1"), Ok(vec![3, 2, 2, 1]));
    assert_eq!(parse_ship_rules("4 3, 2"), Ok(vec![4, 3, 2]));
    assert_eq!(
        parse_ship_rules("3,x"),
        Err(ConfigError::BadShipLength("x".to_string()))
    );
}

#[test]
fn test_parse_symbols() {
    let symbols = Symbols::parse("~#X.").unwrap();
    assert_eq!(symbols.occupied, '#');
    assert_eq!(Symbols::parse("~#X"), Err(ConfigError::SymbolCount(3)));
    assert_eq!(
        Symbols::parse("~~X."),
        Err(ConfigError::DuplicateSymbols("~~X.".to_string()))
    );
}

#[test]
fn test_log_level_from_env_value() {
    assert_eq!(level_from(None), LevelFilter::Warn);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("nonsense")), LevelFilter::Warn);
}
