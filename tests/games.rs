use chessica::{Board, CastleRights, Color, Move, NotationError, Role, Square};

fn play(board: &mut Board, notation: &str) {
    let color = board.turn();
    let m = board
        .resolve(notation, color)
        .unwrap_or_else(|err| panic!("{notation}: {err}"));
    board
        .apply_move(&m)
        .unwrap_or_else(|err| panic!("{notation}: {err}"));
}

#[test]
fn scholars_mate() {
    let mut board = Board::new();
    for notation in ["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6", "Qf7"] {
        play(&mut board, notation);
    }

    let status = board.status().unwrap();
    assert_eq!(status.turn, Color::Black);
    assert!(status.in_check);
    assert!(status.in_checkmate);
    assert_eq!(board.move_log().len(), 7);
}

#[test]
fn kingside_castling_in_a_game() {
    let mut board = Board::new();
    for notation in ["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5"] {
        play(&mut board, notation);
    }

    let castle = board
        .legal_moves_from(Square::E1)
        .unwrap()
        .into_iter()
        .find(Move::is_composite)
        .expect("castling should be available");
    assert_eq!(castle.to_string(), "O-O");

    board.apply_move(&castle).unwrap();
    assert_eq!(board.at(Square::G1).map(|p| p.role), Some(Role::King));
    assert_eq!(board.at(Square::F1).map(|p| p.role), Some(Role::Rook));
    assert!(board.castle_rights(Color::White).is_empty());
    assert_eq!(board.castle_rights(Color::Black), CastleRights::all());
}

#[test]
fn en_passant_in_a_game() {
    let mut board = Board::new();
    for notation in ["e4", "a6", "e5", "d5"] {
        play(&mut board, notation);
    }
    assert_eq!(board.en_passant_targets(), [Square::D6]);

    let capture = Move::capturing(Square::E5, Square::D6, Square::D5);
    assert!(board.legal_moves_from(Square::E5).unwrap().contains(&capture));

    board.apply_move(&capture).unwrap();
    assert!(board.is_empty(Square::D5));
    assert_eq!(board.at(Square::D6).map(|p| p.color), Some(Color::White));
}

#[test]
fn check_at_turn_start_forfeits_castling_rights() {
    let mut board = Board::new();
    for notation in ["e4", "f5", "Qh5"] {
        play(&mut board, notation);
    }

    let status = board.status().unwrap();
    assert_eq!(status.turn, Color::Black);
    assert!(status.in_check);
    assert!(!status.in_checkmate);
    assert!(board.castle_rights(Color::Black).is_empty());
    assert_eq!(board.castle_rights(Color::White), CastleRights::all());
}

#[test]
fn unresolvable_notation_is_an_error() {
    let board = Board::new();
    assert_eq!(
        board.resolve("Qd4", Color::White),
        Err(NotationError::Unresolved {
            role: Role::Queen,
            to: Square::D4
        })
    );
}
