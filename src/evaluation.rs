// The granularity of evaluation in this crate is in centipawns.

pub mod parameters;
pub mod score;

use crate::chess::piece::PieceType;

use score::S;

pub const PAWN_VALUE: S = S(136, 208);
pub const KNIGHT_VALUE: S = S(782, 865);
pub const BISHOP_VALUE: S = S(830, 918);
pub const ROOK_VALUE: S = S(1289, 1378);
pub const QUEEN_VALUE: S = S(2529, 2687);
pub const KING_VALUE: S = S::NULL;

/// Material base values, indexed by piece type.
pub const PIECE_VALUES: [S; 6] =
    [PAWN_VALUE, KNIGHT_VALUE, BISHOP_VALUE, ROOK_VALUE, QUEEN_VALUE, KING_VALUE];

/// The largest absolute value that either half of a table entry may take.
/// Keeps a full board's worth of entries summable inside a packed `i16` half.
pub const MAX_ENTRY_MAGNITUDE: i32 = 8192;

const PAWN_PHASE: i32 = 1;
const KNIGHT_PHASE: i32 = 10;
const BISHOP_PHASE: i32 = 10;
const ROOK_PHASE: i32 = 20;
const QUEEN_PHASE: i32 = 40;
const TOTAL_PHASE: i32 =
    16 * PAWN_PHASE + 4 * KNIGHT_PHASE + 4 * BISHOP_PHASE + 4 * ROOK_PHASE + 2 * QUEEN_PHASE;

pub const fn phase_weight(pt: PieceType) -> i32 {
    match pt {
        PieceType::Pawn => PAWN_PHASE,
        PieceType::Knight => KNIGHT_PHASE,
        PieceType::Bishop => BISHOP_PHASE,
        PieceType::Rook => ROOK_PHASE,
        PieceType::Queen => QUEEN_PHASE,
        PieceType::King => 0,
    }
}

/// `game_phase` computes a number between 0 and 256, which is the phase of the game.
/// 0 is the opening, 256 is the endgame.
#[allow(clippy::many_single_char_names)]
pub const fn game_phase(p: u8, n: u8, b: u8, r: u8, q: u8) -> i32 {
    let mut phase = TOTAL_PHASE;
    phase -= PAWN_PHASE * p as i32;
    phase -= KNIGHT_PHASE * n as i32;
    phase -= BISHOP_PHASE * b as i32;
    phase -= ROOK_PHASE * r as i32;
    phase -= QUEEN_PHASE * q as i32;
    max!(phase, 0) * 256 / TOTAL_PHASE
}

/// `lerp` linearly interpolates between `mg` and `eg` by `t`.
/// `t` is between 0 and 256.
pub fn lerp(mg: i32, eg: i32, t: i32) -> i32 {
    let t = t.clamp(0, 256);
    mg * (256 - t) / 256 + eg * t / 256
}
