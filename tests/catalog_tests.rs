use broadside::{ConfigError, Game, ShipCatalog, ShipDef, STANDARD_SHIPS};

#[test]
fn standard_game_has_five_ships_in_order() {
    let game = Game::standard().unwrap();
    assert_eq!(game.rows(), 10);
    assert_eq!(game.cols(), 10);
    assert_eq!(game.n_ships(), 5);
    for (id, def) in STANDARD_SHIPS.iter().enumerate() {
        assert_eq!(game.ship_length(id), def.length());
        assert_eq!(game.ship_symbol(id), def.symbol());
        assert_eq!(game.ship_name(id), def.name());
    }
    assert_eq!(game.ship_name(4), "patrol boat");
    assert_eq!(game.ships().total_length(), 17);
}

#[test]
fn mini_game_has_one_rowboat() {
    let game = Game::mini().unwrap();
    assert_eq!((game.rows(), game.cols()), (2, 3));
    assert_eq!(game.n_ships(), 1);
    assert_eq!(game.ship_symbol(0), 'R');
}

#[test]
fn dimensions_are_bounded() {
    assert_eq!(
        Game::new(0, 5).unwrap_err(),
        ConfigError::InvalidDimensions { rows: 0, cols: 5 }
    );
    assert_eq!(
        Game::new(5, 11).unwrap_err(),
        ConfigError::InvalidDimensions { rows: 5, cols: 11 }
    );
    assert!(Game::new(1, 1).is_ok());
    assert!(Game::new(10, 10).is_ok());
}

#[test]
fn add_ship_rejects_bad_definitions_without_mutation() {
    let mut game = Game::new(3, 4).unwrap();
    assert_eq!(game.add_ship(4, 'A', "long"), Ok(0));

    assert_eq!(game.add_ship(0, 'B', "empty"), Err(ConfigError::InvalidLength));
    assert_eq!(
        game.add_ship(5, 'B', "too long"),
        Err(ConfigError::ShipTooLong { length: 5 })
    );
    for reserved in ['X', '.', 'o'] {
        assert_eq!(
            game.add_ship(1, reserved, "reserved"),
            Err(ConfigError::ReservedSymbol(reserved))
        );
    }
    assert_eq!(
        game.add_ship(1, ' ', "space"),
        Err(ConfigError::NonPrintableSymbol(' '))
    );
    assert_eq!(
        game.add_ship(1, '\n', "newline"),
        Err(ConfigError::NonPrintableSymbol('\n'))
    );
    assert_eq!(
        game.add_ship(1, 'é', "accent"),
        Err(ConfigError::NonPrintableSymbol('é'))
    );
    assert_eq!(
        game.add_ship(2, 'A', "dup"),
        Err(ConfigError::DuplicateSymbol('A'))
    );
    assert_eq!(game.n_ships(), 1);
}

#[test]
fn fleet_may_fill_but_not_exceed_the_board() {
    let mut game = Game::new(2, 3).unwrap();
    assert_eq!(game.add_ship(3, 'A', "a"), Ok(0));
    assert_eq!(game.add_ship(2, 'B', "b"), Ok(1));
    assert_eq!(
        game.add_ship(2, 'C', "c"),
        Err(ConfigError::FleetTooLarge { total: 7, area: 6 })
    );
    assert_eq!(game.add_ship(1, 'C', "c"), Ok(2));
    assert_eq!(game.ships().total_length(), 6);
}

#[test]
fn ship_fits_in_either_orientation() {
    // Longer than the rows but not the columns.
    let mut game = Game::new(2, 5).unwrap();
    assert!(game.add_ship(5, 'A', "a").is_ok());
}

#[test]
fn catalog_ids_follow_insertion_order() {
    let dims = Game::new(10, 10).unwrap().dims();
    let mut catalog = ShipCatalog::new();
    assert!(catalog.is_empty());
    assert_eq!(catalog.add(dims, ShipDef::new(2, 'P', "patrol")), Ok(0));
    assert_eq!(catalog.add(dims, ShipDef::named(3, 'S', String::from("sub"))), Ok(1));
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.name(1), "sub");
    let names: Vec<&str> = catalog.iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["patrol", "sub"]);
}

#[test]
#[should_panic]
fn out_of_range_ship_id_is_a_contract_violation() {
    let game = Game::mini().unwrap();
    let _ = game.ship_length(1);
}

#[test]
fn config_errors_describe_the_problem() {
    let msg = ConfigError::DuplicateSymbol('A').to_string();
    assert!(msg.contains("'A'"));
    let msg = ConfigError::FleetTooLarge { total: 7, area: 6 }.to_string();
    assert!(msg.contains('7') && msg.contains('6'));
}
