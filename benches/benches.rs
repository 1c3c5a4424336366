#[macro_use]
extern crate bencher;
extern crate chess_core;

use bencher::{black_box, Bencher};
use chess_core::{
    AttackTables, BitBoard, ChessMove, Color, DrawDetector, MoveFlags, Piece, Position,
    PositionSetup, Slider, SlidingTable, Square, Zobrist, ALL_SQUARES,
};

const MIDDLEGAME_FEN: &str = "rn1qkb1r/pbp2ppp/1p2p3/3n4/8/2N2NP1/PP1PPPBP/R1BQ1RK1 b kq - 1 7";

fn middlegame() -> Position<'static> {
    let setup: PositionSetup = MIDDLEGAME_FEN.parse().expect("valid fen");
    Position::new(&setup, Zobrist::shared()).expect("valid position")
}

fn rook_lookups(bench: &mut Bencher) {
    let tables = AttackTables::shared();
    let occupancy = middlegame().combined();
    bench.iter(|| {
        ALL_SQUARES
            .iter()
            .fold(0, |acc, sq| acc ^ tables.rook_attacks(*sq, black_box(occupancy)).0)
    });
}

fn bishop_lookups(bench: &mut Bencher) {
    let tables = AttackTables::shared();
    let occupancy = middlegame().combined();
    bench.iter(|| {
        ALL_SQUARES
            .iter()
            .fold(0, |acc, sq| acc ^ tables.bishop_attacks(*sq, black_box(occupancy)).0)
    });
}

fn every_piece_lookups(bench: &mut Bencher) {
    let tables = AttackTables::shared();
    let pos = middlegame();
    bench.iter(|| {
        let mut all = BitBoard(0);
        for sq in pos.combined() {
            if let Some((piece, color)) = pos.piece_on(sq) {
                all |= tables.attacks(piece, color, sq, pos.combined());
            }
        }
        all
    });
}

fn apply_revert_quiet(bench: &mut Bencher) {
    let mut pos = middlegame();
    let m = ChessMove::quiet(Square::E8, Square::E7);
    bench.iter(|| {
        pos.apply(black_box(m)).expect("legal");
        pos.revert().expect("applied");
    });
}

fn apply_revert_capture(bench: &mut Bencher) {
    let mut pos = middlegame();
    let m = ChessMove::capture(Square::D5, Square::C3);
    bench.iter(|| {
        pos.apply(black_box(m)).expect("legal");
        assert_eq!(pos.side_to_move(), Color::White);
        pos.revert().expect("applied");
    });
}

fn apply_revert_castle(bench: &mut Bencher) {
    let setup: PositionSetup = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().expect("valid fen");
    let mut pos = Position::new(&setup, Zobrist::shared()).expect("valid position");
    let m = ChessMove::new(Square::E1, Square::G1, None, MoveFlags::CASTLING);
    bench.iter(|| {
        pos.apply(black_box(m)).expect("legal");
        pos.revert().expect("applied");
    });
}

fn knight_shuffle_repetition(bench: &mut Bencher) {
    let mut pos = middlegame();
    let shuffle = [
        ChessMove::quiet(Square::B8, Square::D7),
        ChessMove::quiet(Square::F3, Square::G5),
        ChessMove::quiet(Square::D7, Square::B8),
        ChessMove::quiet(Square::G5, Square::F3),
    ];
    for m in shuffle.iter().cycle().take(40) {
        pos.apply(*m).expect("legal");
    }
    bench.iter(|| DrawDetector::is_draw(black_box(&pos)));
}

fn compute_hash(bench: &mut Bencher) {
    let pos = middlegame();
    bench.iter(|| black_box(&pos).compute_hash());
}

fn build_rook_table(bench: &mut Bencher) {
    bench.iter(|| SlidingTable::generate(Slider::Rook).expect("collision free").len());
}

fn build_bishop_table(bench: &mut Bencher) {
    bench.iter(|| SlidingTable::generate(Slider::Bishop).expect("collision free").len());
}

fn build_zobrist(bench: &mut Bencher) {
    bench.iter(|| Zobrist::new(black_box(7)).piece(Piece::King, Color::White, Square::E1));
}

benchmark_group!(
    benches,
    rook_lookups,
    bishop_lookups,
    every_piece_lookups,
    apply_revert_quiet,
    apply_revert_capture,
    apply_revert_castle,
    knight_shuffle_repetition,
    compute_hash,
    build_rook_table,
    build_bishop_table,
    build_zobrist
);
benchmark_main!(benches);
