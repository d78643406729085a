pub mod shared;
pub mod tables;

use std::fmt::{self, Display, Write};

use crate::{
    chess::{
        piece::{Colour, Piece},
        types::{File, Rank, Square},
    },
    evaluation::{parameters::EvalParams, score::S},
};

/// Material plus positional value for every (piece, square) pair.
///
/// White entries are positive and Black entries negative, so a position's
/// score from White's point of view is the plain sum of its pieces' entries.
/// Material is stored unsigned, identical for both colours.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PieceSquareTable {
    table: [[S; 64]; 12],
    piece_values: [S; 12],
}

impl PieceSquareTable {
    pub const NULL: Self = Self { table: [[S::NULL; 64]; 12], piece_values: [S::NULL; 12] };

    pub fn new(params: &EvalParams) -> Self {
        tables::construct_piece_square_table(params)
    }

    pub fn get(&self, piece: Piece, sq: Square) -> S {
        self.table[piece][sq]
    }

    /// The colour-independent material value of a piece.
    pub fn material(&self, piece: Piece) -> S {
        self.piece_values[piece]
    }

    /// Material signed by colour, matching the sign convention of `get`.
    pub fn signed_material(&self, piece: Piece) -> S {
        self.material(piece) * piece.colour().sign()
    }

    pub fn entries(&self) -> impl Iterator<Item = (Piece, Square, S)> + '_ {
        Piece::all().flat_map(move |piece| Square::all().map(move |sq| (piece, sq, self.get(piece, sq))))
    }

    /// Checks the table against the parameters it was built from, returning
    /// every violation found.
    pub fn check_invariants(&self, params: &EvalParams) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();
        for piece in Piece::all().filter(|p| p.colour() == Colour::White) {
            let black = piece.flip_colour();
            if self.material(piece) != self.material(black) {
                violations.push(InvariantViolation::MaterialAsymmetry { piece });
            }
        }
        for (piece, sq, value) in self.entries() {
            let expected = self.signed_material(piece) + tables::bonus_offset(params, piece, sq);
            if value == S::NULL && expected != S::NULL {
                violations.push(InvariantViolation::Unset { piece, square: sq, expected });
            }
            let mirrored = self.get(piece.flip_colour(), sq.flip_rank());
            if mirrored != -value {
                violations.push(InvariantViolation::ColourMirror { piece, square: sq, value, mirrored });
            }
            if piece.colour() == Colour::White && piece.piece_type().file_symmetric() {
                let across = self.get(piece, sq.flip_file());
                if across != value {
                    violations.push(InvariantViolation::FileMirror { piece, square: sq, value, across });
                }
            }
            if value != expected {
                let material = value - tables::bonus_offset(params, piece, sq);
                violations.push(InvariantViolation::NotAdditive { piece, square: sq, material });
            }
        }
        violations
    }

    /// Writes one board diagram per piece and phase, rank 8 at the top.
    pub fn write_tables(&self, f: &mut impl Write) -> fmt::Result {
        for piece in Piece::all() {
            writeln!(f, "{piece}")?;
            for (phase, half) in [("mg", S::mg as fn(S) -> i32), ("eg", S::eg)] {
                writeln!(f, "{phase} eval on a1 (bottom left) {}", half(self.get(piece, Square::A1)))?;
                for rank in Rank::all().rev() {
                    write!(f, "RANK {}: ", rank.index() + 1)?;
                    for file in File::all() {
                        let pst_val = half(self.get(piece, file.with(rank)));
                        write!(f, "{pst_val:>6}")?;
                    }
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InvariantViolation {
    MaterialAsymmetry { piece: Piece },
    ColourMirror { piece: Piece, square: Square, value: S, mirrored: S },
    FileMirror { piece: Piece, square: Square, value: S, across: S },
    NotAdditive { piece: Piece, square: Square, material: S },
    Unset { piece: Piece, square: Square, expected: S },
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaterialAsymmetry { piece } => {
                write!(f, "material for {piece} differs from {}", piece.flip_colour())
            }
            Self::ColourMirror { piece, square, value, mirrored } => write!(
                f,
                "{piece} on {square} is {value} but {} on {} is {mirrored}",
                piece.flip_colour(),
                square.flip_rank()
            ),
            Self::FileMirror { piece, square, value, across } => write!(
                f,
                "{piece} on {square} is {value} but on {} is {across}",
                square.flip_file()
            ),
            Self::NotAdditive { piece, square, material } => {
                write!(f, "{piece} on {square} implies material {material}")
            }
            Self::Unset { piece, square, expected } => {
                write!(f, "{piece} on {square} was never written, expected {expected}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::piece::PieceType;

    fn tuned() -> (EvalParams, PieceSquareTable) {
        let params = EvalParams::default();
        let pst = PieceSquareTable::new(&params);
        (params, pst)
    }

    #[test]
    fn psts_are_mirrored_properly() {
        let (_, pst) = tuned();
        for piece in Piece::all() {
            for sq in Square::all() {
                assert_eq!(
                    pst.get(piece.flip_colour(), sq.flip_rank()),
                    -pst.get(piece, sq),
                    "pst mirroring failed on square {sq} for piece {piece}"
                );
            }
        }
    }

    #[test]
    fn material_is_colour_symmetric() {
        let (params, pst) = tuned();
        for pt in PieceType::all() {
            let white = Piece::new(Colour::White, pt);
            assert_eq!(pst.material(white), params.piece_values[pt]);
            assert_eq!(pst.material(white.flip_colour()), pst.material(white));
        }
    }

    #[test]
    fn non_pawns_are_file_symmetric() {
        let (_, pst) = tuned();
        for pt in PieceType::all().skip(1) {
            let piece = Piece::new(Colour::White, pt);
            for sq in Square::all() {
                assert_eq!(pst.get(piece, sq), pst.get(piece, sq.flip_file()), "{piece} on {sq}");
            }
        }
        // the pawn table is not.
        assert_ne!(pst.get(Piece::WP, Square::A2), pst.get(Piece::WP, Square::H2));
    }

    #[test]
    fn entries_are_material_plus_bonus() {
        let (params, pst) = tuned();
        for (piece, sq, value) in pst.entries() {
            assert_eq!(value - tables::bonus_offset(&params, piece, sq), pst.signed_material(piece));
        }
    }

    #[test]
    fn pawn_example() {
        let (_, pst) = tuned();
        assert_eq!(pst.get(Piece::WP, Square::A2), S(139, 198));
        assert_eq!(pst.get(Piece::BP, Square::A7), S(-139, -198));
    }

    #[test]
    fn pawn_example_with_custom_params() {
        let mut params = EvalParams::NULL;
        params.piece_values[PieceType::Pawn] = S(136, 208);
        params.pawn_bonus[1][0] = S(3, -10);
        let pst = PieceSquareTable::new(&params);
        assert_eq!(pst.get(Piece::WP, Square::A2), S(139, 198));
        assert_eq!(pst.get(Piece::BP, Square::A7), S(-139, -198));
        // no folding for pawns: h2 only gets material.
        assert_eq!(pst.get(Piece::WP, Square::H2), S(136, 208));
    }

    #[test]
    fn knight_corners_fold() {
        let (params, pst) = tuned();
        assert_eq!(pst.get(Piece::WN, Square::A1), pst.get(Piece::WN, Square::H1));
        assert_eq!(
            tables::bonus_offset(&params, Piece::WN, Square::H1),
            params.bonus[PieceType::Knight][0][0]
        );
        assert_eq!(pst.get(Piece::WN, Square::A1), S(782 - 169, 865 - 102));
    }

    #[test]
    fn king_entries_are_pure_bonus() {
        let (params, pst) = tuned();
        assert_eq!(pst.get(Piece::WK, Square::G1), params.bonus[PieceType::King][0][1]);
        assert_eq!(pst.get(Piece::BK, Square::G8), -params.bonus[PieceType::King][0][1]);
    }

    #[test]
    fn rebuilding_is_deterministic() {
        let (params, pst) = tuned();
        assert_eq!(PieceSquareTable::new(&params), pst);
        assert_eq!(PieceSquareTable::new(&params.clone()), pst);
    }

    #[test]
    fn full_coverage() {
        let (params, pst) = tuned();
        assert_eq!(pst.entries().count(), 768);
        for (piece, sq, value) in pst.entries() {
            if value == S::NULL {
                let expected = pst.signed_material(piece) + tables::bonus_offset(&params, piece, sq);
                assert_eq!(expected, S::NULL, "{piece} on {sq} left unset");
            }
        }
    }

    #[test]
    fn tuned_table_passes_invariant_checks() {
        let (params, pst) = tuned();
        let violations = pst.check_invariants(&params);
        assert!(violations.is_empty(), "unexpected violations: {violations:?}");
    }

    #[test]
    fn invariant_checks_catch_corruption() {
        let (params, mut pst) = tuned();
        pst.table[Piece::WB][Square::C1] += S(1, 0);
        let violations = pst.check_invariants(&params);
        assert!(violations.iter().any(|v| matches!(
            v,
            InvariantViolation::ColourMirror { piece: Piece::WB, square: Square::C1, .. }
        )));
        assert!(violations.iter().any(|v| matches!(
            v,
            InvariantViolation::FileMirror { piece: Piece::WB, square: Square::F1, .. }
        )));
        assert!(violations.iter().any(|v| matches!(
            v,
            InvariantViolation::NotAdditive { piece: Piece::WB, square: Square::C1, .. }
        )));
    }

    #[test]
    fn invariant_checks_catch_unset_entries() {
        let (params, mut pst) = tuned();
        pst.table[Piece::WN][Square::E4] = S::NULL;
        let violations = pst.check_invariants(&params);
        assert!(violations.iter().any(|v| matches!(
            v,
            InvariantViolation::Unset { piece: Piece::WN, square: Square::E4, .. }
        )));

        // an entry whose material and bonus cancel out is legitimately zero.
        let mut params = EvalParams::NULL;
        params.bonus[PieceType::Knight][3][3] = S(5, -5);
        let pst = PieceSquareTable::new(&params);
        assert_eq!(pst.get(Piece::WN, Square::A1), S::NULL);
        let violations = pst.check_invariants(&params);
        assert!(violations.is_empty(), "unexpected violations: {violations:?}");
    }

    #[test]
    fn generated_source_matches_tables() {
        let (_, pst) = tuned();
        let mut source = String::new();
        tables::write_pst_source(&pst, &mut source).unwrap();
        assert!(source.contains("S(-169, -102), S(-96, -74), S(-81, -45), S(-79, -18), "));
        assert!(source.contains("[ S(3, -10), S(3, -6), "));
    }

    #[test]
    fn rendering_covers_every_piece() {
        let (_, pst) = tuned();
        let mut out = String::new();
        pst.write_tables(&mut out).unwrap();
        assert_eq!(out.matches("RANK 8: ").count(), 24);
        assert!(out.contains("White Knight"));
    }
}
