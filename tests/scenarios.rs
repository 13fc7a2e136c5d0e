use lib::chess::{Color, GameStatus, Move, MoveStatus, Piece, Position, Promotion, Role};
use lib::chess::{Setup, Square};
use lib::eval::{depth_bonus, Eval, Standard};
use lib::search::{Minimax, MinimaxConfig, Search};
use lib::util::Build;
use std::cell::Cell;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn play(pos: &Position, m: &str) -> Position {
    let t = pos.make(pos.find(m.parse().unwrap()), &mut Promotion::Queen);
    assert_eq!(t.status(), MoveStatus::Done, "{}", m);
    t.into_position()
}

fn replay(moves: &[&str]) -> Position {
    moves
        .iter()
        .fold(Position::initial(), |pos, m| play(&pos, m))
}

#[test]
fn game_opens_with_twenty_moves() {
    let pos = Position::initial();
    let moves = pos.moves();

    assert_eq!(moves.len(), 20);
    assert_eq!(pos.status(), GameStatus::Ongoing);

    let knights = moves.iter().filter(|m| m.piece().map(|p| p.role()) == Some(Role::Knight));
    assert_eq!(knights.count(), 4);
}

#[test]
fn fools_mate_ends_the_game() {
    let pos = replay(&["f2f3", "e7e6", "g2g4", "d8h4"]);

    assert_eq!(pos.turn(), Color::White);
    assert_eq!(pos.status(), GameStatus::Checkmate);
    assert!(pos.status().is_over());
    assert!(pos.moves().is_empty());
    assert!(pos.player(Color::White).is_in_checkmate());
}

#[test]
fn engine_finds_fools_mate() {
    let pos = replay(&["f2f3", "e7e6", "g2g4"]);
    let mm = MinimaxConfig::default().build().unwrap();

    let m = mm.search(&pos, 2);
    assert_eq!(m.to_string(), "d8h4");
    assert_eq!(play(&pos, "d8h4").status(), GameStatus::Checkmate);
}

#[test]
fn engine_suggests_nothing_once_the_game_is_over() {
    let pos = replay(&["f2f3", "e7e6", "g2g4", "d8h4"]);
    assert_eq!(Minimax::new(Standard::new()).search(&pos, 3), Move::Null);
}

#[test]
fn engine_suggests_a_legal_opening_move_at_depth_one() {
    let pos = Position::initial();
    let m = Minimax::new(Standard::new()).search(&pos, 1);
    assert!(pos.moves().contains(&m));
}

#[test]
fn checkmate_is_weighted_by_remaining_depth() {
    let pos = replay(&["f2f3", "e7e6", "g2g4", "d8h4"]);
    let e = Standard::new();

    assert_eq!(depth_bonus(0), 1);
    assert_eq!(depth_bonus(2), 200);
    assert_eq!(
        e.eval(&pos, 0) - e.eval(&pos, 2),
        Standard::CHECKMATE * (depth_bonus(2) - depth_bonus(0))
    );
}

#[test]
fn en_passant_is_available_only_immediately() {
    let pos = replay(&["e2e4", "a7a6", "e4e5", "d7d5"]);
    let ep = pos.find("e5d6".parse().unwrap());
    assert!(matches!(ep, Move::EnPassant(..)));

    let taken = pos.make(ep, &mut Promotion::Queen);
    assert_eq!(taken.status(), MoveStatus::Done);
    assert_eq!(taken.position()[sq("d5")], None);
    assert_eq!(taken.position()[sq("d6")].map(|p| p.role()), Some(Role::Pawn));
    assert_eq!(taken.position().by_color(Color::Black).count(), 15);

    let later = replay(&["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"]);
    assert_eq!(later.en_passant(), None);
    assert!(!matches!(later.find("e5d6".parse().unwrap()), Move::EnPassant(..)));
}

#[test]
fn castling_rights_are_lost_once_the_king_moves() {
    let castled = replay(&["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"]);
    assert!(castled.has_castled(Color::White));

    let pos = replay(&[
        "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1f1", "f8c5", "f1e1", "d7d6",
    ]);

    let m = pos.find("e1g1".parse().unwrap());
    assert_eq!(m, Move::Null);
    assert_eq!(pos.make(m, &mut Promotion::Queen).status(), MoveStatus::Illegal);
}

#[test]
fn ignoring_check_is_rejected_with_the_original_position() {
    let pos = replay(&["e2e4", "e7e5", "d2d4", "f8b4"]);
    assert_eq!(pos.status(), GameStatus::Check);

    let m = pos.find("a2a3".parse().unwrap());
    assert!(matches!(m, Move::Quiet(_)));

    let t = pos.make(m, &mut Promotion::Queen);
    assert_eq!(t.status(), MoveStatus::LeadsToOwnCheck);
    assert_eq!(t.position(), &pos);
}

#[test]
fn promotion_consults_the_callback_exactly_once() {
    let pawn = Piece::new(Color::White, Role::Pawn, sq("a7"));
    let pos = Setup::default()
        .place(Piece::new(Color::White, Role::King, sq("e1")))
        .place(Piece::new(Color::Black, Role::King, sq("h6")))
        .place(pawn)
        .build()
        .unwrap();

    let m = pos.find("a7a8".parse().unwrap());
    assert!(m.is_promotion());

    let calls = Cell::new(0);
    let mut promote = |p: &Piece| {
        calls.set(calls.get() + 1);
        assert_eq!(p, &pawn);
        Promotion::Knight
    };

    let t = pos.make(m, &mut promote);
    assert_eq!(t.status(), MoveStatus::Done);
    assert_eq!(calls.get(), 1);

    let knight = t.position()[sq("a8")].unwrap();
    assert_eq!(knight.role(), Role::Knight);
    assert_eq!(knight.color(), Color::White);
}

#[test]
fn stalemate_is_not_checkmate() {
    let pos = Setup::default()
        .place(Piece::new(Color::Black, Role::King, sq("a8")))
        .place(Piece::new(Color::White, Role::Queen, sq("b6")))
        .place(Piece::new(Color::White, Role::King, sq("c6")))
        .turn(Color::Black)
        .build()
        .unwrap();

    assert!(!pos.is_check());
    assert_eq!(pos.status(), GameStatus::Stalemate);
    assert!(pos.is_stalemate());
    assert!(!pos.is_checkmate());
}
