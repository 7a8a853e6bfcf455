use lib::chess::*;
use lib::rules::*;

fn play(arbiter: &Arbiter<Promotion>, pos: &mut Position, moves: &[&str]) -> Vec<MoveKind> {
    moves
        .iter()
        .map(|m| {
            let mc = arbiter.judge(pos, m.parse().unwrap()).unwrap();
            pos.apply(&mc);
            mc.kind()
        })
        .collect()
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn an_ordinary_opening_alternates_sides() {
    let arbiter = Arbiter::new(Promotion::None);
    let mut pos = Position::default();

    let kinds = play(
        &arbiter,
        &mut pos,
        &["E2 E4", "E7 E5", "G1 F3", "B8 C6", "F1 B5", "A7 A6", "B5 C6"],
    );

    assert_eq!(
        kinds,
        [
            MoveKind::Movement,
            MoveKind::Movement,
            MoveKind::Movement,
            MoveKind::Movement,
            MoveKind::Movement,
            MoveKind::Movement,
            MoveKind::Capture,
        ]
    );

    assert_eq!(pos.turn, Color::Black);
    assert_eq!(
        pos.captured.last().map(|p| (p.color, p.role)),
        Some((Color::Black, Role::Knight))
    );
}

#[test]
fn the_scholars_mate_delivers_check() {
    let arbiter = Arbiter::new(Promotion::None);
    let mut pos = Position::default();

    play(
        &arbiter,
        &mut pos,
        &["E2 E4", "E7 E5", "F1 C4", "A7 A6", "D1 F3", "A6 A5", "F3 F7"],
    );

    let verdict = arbiter.checkup(&pos, Color::Black);
    assert_eq!(verdict.attackers(), [sq("F7")]);

    // The queen on f7 is guarded by the bishop on c4.
    match arbiter.judge(&pos, "E8 F7".parse().unwrap()) {
        Err(IllegalMove::ExposedKing(by)) => assert_eq!(by, [sq("C4")]),
        verdict => panic!("expected an exposed king, got {:?}", verdict),
    }
}

#[test]
fn en_passant_lasts_exactly_one_move() {
    let arbiter = Arbiter::new(Promotion::None);
    let mut pos = Position::default();

    play(
        &arbiter,
        &mut pos,
        &["E2 E4", "H7 H6", "E4 E5", "D7 D5"],
    );

    assert_eq!(pos.en_passant, Some(sq("D6")));

    let mut declined = pos.clone();
    play(&arbiter, &mut declined, &["B1 C3", "H6 H5"]);

    assert_eq!(
        arbiter.judge(&declined, "E5 D6".parse().unwrap()),
        Err(IllegalMove::ExpiredEnPassant(sq("D6")))
    );

    let kinds = play(&arbiter, &mut pos, &["E5 D6"]);
    assert_eq!(kinds, [MoveKind::EnPassant]);
    assert_eq!(pos[sq("D5")], None);
    assert_eq!(
        pos.captured.last().map(|p| (p.color, p.role)),
        Some((Color::Black, Role::Pawn))
    );
}

#[test]
fn a_pawn_promotes_on_the_far_rank() {
    let arbiter = Arbiter::new(Promotion::Rook);

    let mut pos = Position {
        board: Board::empty(),
        ..Position::default()
    };

    pos.board.put(sq("E1"), Piece::new(Color::White, Role::King));
    pos.board.put(sq("G7"), Piece::new(Color::White, Role::Pawn));
    pos.board.put(sq("A8"), Piece::new(Color::Black, Role::King));

    let mc = arbiter.judge(&pos, "G7 G8".parse().unwrap()).unwrap();
    assert_eq!(mc.promotion(), Promotion::Rook);

    pos.apply(&mc);
    assert_eq!(
        pos[sq("G8")].map(|p| (p.color, p.role)),
        Some((Color::White, Role::Rook))
    );

    // The fresh rook attacks along its new lines at once.
    assert_eq!(arbiter.checkup(&pos, Color::Black).attackers(), [sq("G8")]);
}

#[test]
fn moves_are_read_back_from_their_notation() {
    let arbiter = Arbiter::new(Promotion::None);
    let mut pos = Position::default();

    for input in ["  e2   e4 ", "E7\tE5"] {
        let m: Move = input.parse().unwrap();
        let mc = arbiter.judge(&pos, m).unwrap();
        pos.apply(&mc);
    }

    assert!("e2 e4 e5".parse::<Move>().is_err());
    assert!("i9 a1".parse::<Move>().is_err());
}
