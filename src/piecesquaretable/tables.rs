use std::fmt::{self, Write};

use crate::{
    chess::{
        piece::{Colour, Piece, PieceType},
        types::{File, QueensideFile, Rank, Square},
    },
    evaluation::{parameters::EvalParams, score::S},
};

use super::PieceSquareTable;

// Scores are explicit for files A to D, implicitly mirrored for E to H.
#[rustfmt::skip]
pub const BONUS: [[[S; 4]; 8]; 6] = [
    // Pawn, unused: see P_BONUS.
    [[S::NULL; 4]; 8],
    [
        // Knight
        [S(-169, -102), S(-96, -74), S(-81, -45), S(-79, -18)],
        [S( -80,  -69), S(-42, -55), S(-24, -15), S(-11,   7)],
        [S( -65,  -40), S(-19, -34), S(  4,  -5), S( 18,  26)],
        [S( -27,  -38), S(  5,   0), S( 40,  13), S( 47,  33)],
        [S( -30,  -40), S( 14, -19), S( 42,   6), S( 51,  36)],
        [S( -11,  -51), S( 28, -39), S( 65, -18), S( 55,  18)],
        [S( -67,  -67), S(-20, -44), S(  6, -37), S( 38,  17)],
        [S(-200,  -98), S(-79, -88), S(-54, -55), S(-33, -16)],
    ],
    [
        // Bishop
        [S(-49, -60), S( -5, -31), S(-10, -39), S(-32, -20)],
        [S(-23, -36), S(  7,  -9), S( 16, -14), S(  1,   2)],
        [S( -8, -23), S( 23,  -2), S( -4,  -4), S( 12,  17)],
        [S(  5, -28), S(  9,  -2), S( 20,  -5), S( 40,  16)],
        [S( -7, -27), S( 26,  -5), S( 13,  -9), S( 29,  13)],
        [S(-18, -24), S( 14,  -3), S( -7,   1), S(  8,  12)],
        [S(-18, -34), S(-12,  -9), S(  7, -12), S(-13,   6)],
        [S(-45, -52), S( -5, -32), S(-18, -35), S(-28, -16)],
    ],
    [
        // Rook
        [S(-24, -1), S(-16,  4), S(-10,  0), S(-1,  5)],
        [S(-19, -7), S( -4, -5), S( -2, -5), S( 0,  1)],
        [S(-21,  7), S(-11, -8), S(  2,  2), S( 1,  5)],
        [S(-23,  0), S( -9,  3), S( -3,  0), S(-2,  4)],
        [S(-21, -7), S(-14,  5), S( -1, -6), S( 3, -7)],
        [S(-21,  4), S(-11,  3), S(  2, -1), S( 7,  4)],
        [S(-11,  0), S( 11,  6), S(  9, 12), S(12,  1)],
        [S(-26,  8), S(-19,  0), S(-13,  9), S( 2,  3)],
    ],
    [
        // Queen
        [S( 4, -70), S(-6, -57), S(-4, -48), S( 5, -28)],
        [S(-2, -54), S( 6, -32), S( 7, -23), S(11,  -2)],
        [S(-3, -38), S( 7, -16), S(13,  -8), S( 7,   3)],
        [S( 3, -22), S( 4,  -4), S( 8,  14), S( 7,  23)],
        [S(-1, -26), S(15,  -7), S(12,   8), S( 3,  21)],
        [S(-4, -37), S(10, -17), S( 6, -11), S( 6,   1)],
        [S(-7, -50), S( 3, -28), S(10, -23), S( 6,  -9)],
        [S(-3, -74), S(-3, -53), S( 0, -44), S(-2, -36)],
    ],
    [
        // King
        [S(273,  -1), S(326,  39), S(272,  78), S(190,  93)],
        [S(277,  59), S(305,  96), S(241, 136), S(186, 130)],
        [S(197,  87), S(253, 137), S(169, 165), S(121, 174)],
        [S(171, 103), S(191, 151), S(136, 168), S(108, 169)],
        [S(145, 100), S(175, 165), S(113, 195), S( 70, 192)],
        [S(123,  87), S(159, 164), S( 85, 177), S( 36, 190)],
        [S( 88,  40), S(120,  95), S( 63, 131), S( 25, 142)],
        [S( 64,   6), S( 85,  60), S( 49,  73), S(  1,  75)],
    ],
];

#[rustfmt::skip]
pub const P_BONUS: [[S; 8]; 8] = [
    // Pawn (asymmetric distribution)
    [ S::NULL; 8 ],
    [ S(  3, -10), S(  3,  -6), S( 10,  10), S( 19,   0), S( 16,  14), S( 19,   7), S(  7,  -5), S( -5, -19) ],
    [ S( -9, -10), S(-15, -10), S( 11, -10), S( 15,   4), S( 32,   4), S( 22,   3), S(  5,  -6), S(-22,  -4) ],
    [ S( -8,   6), S(-23,  -2), S(  6,  -8), S( 20,  -4), S( 40, -13), S( 17, -12), S(  4, -10), S(-12,  -9) ],
    [ S( 13,   9), S(  0,   4), S(-13,   3), S(  1, -12), S( 11, -12), S( -2,  -6), S(-13,  13), S(  5,   8) ],
    [ S( -5,  28), S(-12,  20), S( -7,  21), S( 22,  28), S( -8,  30), S( -5,   7), S(-15,   6), S(-18,  13) ],
    [ S( -7,   0), S(  7, -11), S( -3,  12), S(-13,  21), S(  5,  25), S(-16,  19), S( 10,   4), S( -8,   7) ],
    [ S::NULL; 8 ],
];

/// Expands the compact White, queenside-only bonus data into a full table
/// for both colours, folding in material.
///
/// Every White entry is `material + bonus`; the Black entry for the same
/// piece type sits on the rank-mirrored square with both halves negated.
pub fn construct_piece_square_table(params: &EvalParams) -> PieceSquareTable {
    let mut pst = PieceSquareTable::NULL;
    for pt in PieceType::all() {
        let white = Piece::new(Colour::White, pt);
        let black = white.flip_colour();
        let base = params.piece_values[pt];
        pst.piece_values[white] = base;
        pst.piece_values[black] = base;
        for sq in Square::all() {
            let offset = params.positional_bonus(pt, sq);
            let score = base + offset;
            pst.table[white][sq] = score;
            pst.table[black][sq.flip_rank()] = -score;
        }
        log::debug!("built piece-square entries for {pt} (material {base})");
    }
    pst
}

/// The positional part of a table entry, signed from White's point of view.
pub fn bonus_offset(params: &EvalParams, piece: Piece, sq: Square) -> S {
    let pt = piece.piece_type();
    match piece.colour() {
        Colour::White => params.positional_bonus(pt, sq),
        Colour::Black => -params.positional_bonus(pt, sq.flip_rank()),
    }
}

/// Writes Rust source for `BONUS` and `P_BONUS` that would reproduce
/// the positional part of `pst`.
pub fn write_pst_source(pst: &PieceSquareTable, f: &mut impl Write) -> fmt::Result {
    writeln!(f, "#[rustfmt::skip]")?;
    writeln!(f, "pub const BONUS: [[[S; 4]; 8]; 6] = [")?;
    writeln!(f, "    // Pawn, unused: see P_BONUS.")?;
    writeln!(f, "    [[S::NULL; 4]; 8],")?;
    for pt in PieceType::all().skip(1) {
        let piece = Piece::new(Colour::White, pt);
        let material = pst.material(piece);
        writeln!(f, "    [")?;
        writeln!(f, "        // {pt}")?;
        for rank in Rank::all() {
            write!(f, "        [")?;
            for file in QueensideFile::all() {
                let val = pst.get(piece, file.file().with(rank)) - material;
                write!(f, "{val}, ")?;
            }
            writeln!(f, "],")?;
        }
        writeln!(f, "    ],")?;
    }
    writeln!(f, "];")?;
    writeln!(f)?;
    writeln!(f, "#[rustfmt::skip]")?;
    writeln!(f, "pub const P_BONUS: [[S; 8]; 8] = [")?;
    writeln!(f, "    // Pawn (asymmetric distribution)")?;
    let material = pst.material(Piece::WP);
    for rank in Rank::all() {
        write!(f, "    [ ")?;
        for file in File::all() {
            let val = pst.get(Piece::WP, file.with(rank)) - material;
            write!(f, "{val}, ")?;
        }
        writeln!(f, "],")?;
    }
    writeln!(f, "];")
}
