#![doc(html_root_url = "https://jordanbray.github.io/chess/")]
//! # Chess Core
//!
//! The state at the bottom of a chess engine: a board that can be changed one move at a time and
//! walked back, with its Zobrist hash kept up to date along the way, plus the attack lookups a
//! move generator is built from.
//!
//! The lookup tables (`AttackTables`, `Zobrist`) are built once and then only read.  Every
//! `Position` borrows its `Zobrist` keys, so tests can build private, separately seeded tables
//! while everything else shares `Zobrist::shared()` and `AttackTables::shared()`.
//!
//! ```
//! use chess_core::{ChessMove, DrawDetector, MoveFlags, Position, PositionSetup, Square, Zobrist};
//!
//! let mut position = Position::new(&PositionSetup::default(), Zobrist::shared())?;
//! position.apply(ChessMove::new(Square::E2, Square::E4, None, MoveFlags::DOUBLE_PUSH))?;
//! position.apply(ChessMove::quiet(Square::G8, Square::F6))?;
//! assert_eq!(position.ply(), 2);
//! assert_eq!(position.hash(), position.compute_hash());
//! assert!(!DrawDetector::is_draw(&position));
//!
//! position.revert()?;
//! position.revert()?;
//! assert_eq!(position.hash(), Position::new(&PositionSetup::default(), Zobrist::shared())?.hash());
//! # Ok::<(), chess_core::Error>(())
//! ```

mod bitboard;
pub use crate::bitboard::{BitBoard, DARK_SQUARES, EDGES, EMPTY, LIGHT_SQUARES};

mod castle_rights;
pub use crate::castle_rights::{CastleRights, CastleSide, NUM_CASTLE_RIGHTS};

mod chess_move;
pub use crate::chess_move::{ChessMove, MoveFlags};

mod color;
pub use crate::color::{Color, ALL_COLORS, NUM_COLORS};

mod draw;
pub use crate::draw::DrawDetector;

mod error;
pub use crate::error::Error;

mod file;
pub use crate::file::{File, ALL_FILES, NUM_FILES};

mod piece;
pub use crate::piece::{Piece, ALL_PIECES, NUM_PIECES};

mod position;
pub use crate::position::{Position, StateRecord, MAX_PLY};

mod rank;
pub use crate::rank::{Rank, ALL_RANKS, NUM_RANKS};

mod setup;
pub use crate::setup::{PositionSetup, STARTING_POSITION};

mod square;
pub use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

mod tables;
pub use crate::tables::{
    blocker_subsets, empty_board_rays, magic_mask, questions_and_answers, ray_attacks,
    AttackTables, Direction, LeaperTable, Magic, SlidingTable, Slider, BISHOP_DIRECTIONS,
    BISHOP_MAGICS, ROOK_DIRECTIONS, ROOK_MAGICS,
};

mod zobrist;
pub use crate::zobrist::{Zobrist, DEFAULT_ZOBRIST_SEED};
