use seabattle::{
    axis_label, format_coord, parse_coordinate, parse_orientation, Board, Orientation,
    ParseError, Ship, TargetError,
};

#[test]
fn test_parse_accepts_any_separator() {
    for text in ["B C", "bc", "b-c", "B,C", "  b   c  ", "b1c", "B\tc"] {
        assert_eq!(parse_coordinate(text), Ok((1, 2)), "input {:?}", text);
    }
    assert_eq!(parse_coordinate("a a"), Ok((0, 0)));
    assert_eq!(parse_coordinate("Z Y"), Ok((25, 24)));
}

#[test]
fn test_parse_row_comes_first() {
    assert_eq!(parse_coordinate("C B"), Ok((2, 1)));
    assert_ne!(parse_coordinate("C B"), parse_coordinate("B C"));
}

#[test]
fn test_parse_rejects_malformed() {
    assert_eq!(parse_coordinate(""), Err(ParseError::Empty));
    assert_eq!(parse_coordinate("1 2"), Err(ParseError::Empty));
    assert_eq!(parse_coordinate("a"), Err(ParseError::WrongLabelCount(1)));
    assert_eq!(parse_coordinate("abc"), Err(ParseError::WrongLabelCount(3)));
    assert_eq!(parse_coordinate("ж b"), Err(ParseError::WrongLabelCount(1)));
}

#[test]
fn test_parse_orientation() {
    assert_eq!(parse_orientation("h"), Ok(Orientation::Horizontal));
    assert_eq!(parse_orientation(" V "), Ok(Orientation::Vertical));
    assert_eq!(parse_orientation("vertical"), Ok(Orientation::Vertical));
    assert_eq!(
        parse_orientation("x"),
        Err(ParseError::BadOrientation("x".to_string()))
    );
}

#[test]
fn test_labels_round_trip_through_parser() {
    assert_eq!(axis_label(0), 'A');
    assert_eq!(axis_label(5), 'F');
    assert_eq!(format_coord((3, 0)), "D A");
    assert_eq!(parse_coordinate(&format_coord((3, 0))), Ok((3, 0)));
}

#[test]
fn test_input_layer_filters_bad_targets() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(1, Orientation::Horizontal, (0, 0)))
        .unwrap();
    board.resolve_shot(2, 2).unwrap();

    let check = |text: &str| -> Result<(usize, usize), TargetError> {
        let (r, c) = parse_coordinate(text)?;
        board.check_target(r, c)?;
        Ok((r, c))
    };
    assert_eq!(check("a a"), Ok((0, 0)));
    assert_eq!(
        check("c c"),
        Err(TargetError::AlreadyTargeted { row: 2, col: 2 })
    );
    assert_eq!(
        check("g a"),
        Err(TargetError::OutOfBounds {
            row: 6,
            col: 0,
            size: 6
        })
    );
    assert_eq!(
        check("a"),
        Err(TargetError::Malformed(ParseError::WrongLabelCount(1)))
    );
}

#[test]
fn test_errors_are_descriptive() {
    let err = TargetError::AlreadyTargeted { row: 0, col: 0 };
    assert_eq!(err.to_string(), "this cell was already targeted");
    let err = TargetError::from(ParseError::Empty);
    assert_eq!(err.to_string(), "invalid input format: no coordinates given");
}
