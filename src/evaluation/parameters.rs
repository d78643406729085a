use std::{fmt::Display, path::Path};

use crate::{
    chess::{
        piece::{Colour, Piece, PieceType},
        types::{QueensideFile, Rank, Square},
    },
    errors::ParamsError,
    piecesquaretable::tables::{BONUS, P_BONUS},
};

use super::{MAX_ENTRY_MAGNITUDE, PIECE_VALUES, score::S};

/// The tuned inputs to piece-square table generation.
///
/// `bonus` is defined for White and for files A to D only, indexed
/// `[piece type][rank][file]`; its pawn slot is unused. Pawns take their
/// bonuses from `pawn_bonus`, which covers all eight files.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EvalParams {
    pub piece_values: [S; 6],
    pub bonus: [[[S; 4]; 8]; 6],
    pub pawn_bonus: [[S; 8]; 8],
}

const _TUNED_PARAMS_IN_RANGE: () = assert!(EvalParams::tuned().first_out_of_range().is_none());

impl Default for EvalParams {
    fn default() -> Self {
        Self::tuned()
    }
}

impl Display for EvalParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        writeln!(f, "Parameters {{")?;
        writeln!(f, "    piece_values: {:?},", &self.piece_values[..5])?;
        writeln!(f, "    pawn_bonus: {:?},", self.pawn_bonus)?;
        for pt in PieceType::all().skip(1) {
            writeln!(f, "    {}_bonus: {:?},", pt.to_string().to_lowercase(), self.bonus[pt])?;
        }
        write!(f, "}}")?;
        Ok(())
    }
}

impl EvalParams {
    /// The number of integers in a vectorised parameter set:
    /// five material values, the full pawn table, and the half-width
    /// tables of the five other piece types, each as a (mg, eg) pair.
    pub const VECTOR_LEN: usize = 2 * (5 + 64 + 5 * 32);

    pub const NULL: Self = Self {
        piece_values: [S::NULL; 6],
        bonus: [[[S::NULL; 4]; 8]; 6],
        pawn_bonus: [[S::NULL; 8]; 8],
    };

    pub const fn tuned() -> Self {
        Self { piece_values: PIECE_VALUES, bonus: BONUS, pawn_bonus: P_BONUS }
    }

    /// The White-perspective positional bonus for a piece type on a square,
    /// before material is added.
    pub const fn positional_bonus(&self, pt: PieceType, sq: Square) -> S {
        let rank = sq.rank().index();
        if pt.file_symmetric() {
            self.bonus[pt.index()][rank][sq.file().fold_queenside().index()]
        } else {
            self.pawn_bonus[rank][sq.file().index()]
        }
    }

    /// Finds the first White entry, in piece-type then square order, whose
    /// material, positional bonus, or their sum exceeds `MAX_ENTRY_MAGNITUDE`.
    /// The raw terms are checked before they are added, so the sum cannot wrap.
    #[allow(clippy::cast_sign_loss)]
    pub const fn first_out_of_range(&self) -> Option<(PieceType, Square, S)> {
        const LIMIT: u32 = MAX_ENTRY_MAGNITUDE as u32;
        let mut pt_idx = 0;
        while pt_idx < 6 {
            let Some(pt) = PieceType::new(pt_idx) else { unreachable!() };
            let material = self.piece_values[pt.index()];
            let mut sq_idx = 0;
            while sq_idx < 64 {
                let Some(sq) = Square::new(sq_idx) else { unreachable!() };
                if material.magnitude() > LIMIT {
                    return Some((pt, sq, material));
                }
                let bonus = self.positional_bonus(pt, sq);
                if bonus.magnitude() > LIMIT {
                    return Some((pt, sq, bonus));
                }
                // both terms are within the limit, so this cannot overflow.
                let entry = S(material.0 + bonus.0, material.1 + bonus.1);
                if entry.magnitude() > LIMIT {
                    return Some((pt, sq, entry));
                }
                sq_idx += 1;
            }
            pt_idx += 1;
        }
        None
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        match self.first_out_of_range() {
            None => Ok(()),
            Some((pt, square, score)) => {
                log::error!("{pt} on {square} has out-of-range score {score}");
                Err(ParamsError::OutOfRange {
                    piece: Piece::new(Colour::White, pt),
                    square,
                    score,
                    limit: MAX_ENTRY_MAGNITUDE,
                })
            }
        }
    }

    pub fn vectorise(&self) -> Vec<i32> {
        let ss = self.piece_values[..5] // pawn to queen
            .iter()
            .copied()
            .chain(self.pawn_bonus.iter().flatten().copied())
            .chain(self.bonus[1..].iter().flatten().flatten().copied());
        ss.flat_map(|s| [s.0, s.1].into_iter()).collect()
    }

    pub fn devectorise(data: &[i32]) -> Result<Self, ParamsError> {
        if data.len() != Self::VECTOR_LEN {
            return Err(ParamsError::WrongLength { found: data.len(), expected: Self::VECTOR_LEN });
        }
        let mut out = Self::NULL;
        let mut s_iter = data.chunks_exact(2).map(|x| S(x[0], x[1]));
        // the length check above guarantees every `next` below succeeds.
        let mut next = || s_iter.next().unwrap_or(S::NULL);
        for pt in PieceType::all().take(5) {
            out.piece_values[pt] = next();
        }
        for rank in Rank::all() {
            for value in &mut out.pawn_bonus[rank] {
                *value = next();
            }
        }
        for pt in PieceType::all().skip(1) {
            for rank in Rank::all() {
                for file in QueensideFile::all() {
                    out.bonus[pt][rank][file] = next();
                }
            }
        }
        Ok(out)
    }

    pub fn save_param_vec<P: AsRef<Path>>(param_vec: &[i32], path: P) -> Result<(), ParamsError> {
        let out = param_vec.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        std::fs::write(path, out)?;
        Ok(())
    }

    pub fn load_param_vec<P: AsRef<Path>>(path: P) -> Result<Vec<i32>, ParamsError> {
        let input = std::fs::read_to_string(path)?;
        Self::parse_param_vec(&input)
    }

    pub fn parse_param_vec(input: &str) -> Result<Vec<i32>, ParamsError> {
        input
            .trim()
            .split(',')
            .enumerate()
            .map(|(position, param)| {
                let param = param.trim();
                param
                    .parse()
                    .map_err(|_| ParamsError::Parse { position, value: param.to_string() })
            })
            .collect()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        log::info!("loading evaluation parameters from {}", path.display());
        let vec = Self::load_param_vec(path)?;
        let params = Self::devectorise(&vec)?;
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_round_trip() {
        let params = EvalParams::default();
        let vec = params.vectorise();
        assert_eq!(vec.len(), EvalParams::VECTOR_LEN);
        let params2 = EvalParams::devectorise(&vec).unwrap();
        assert_eq!(params.piece_values, params2.piece_values);
        assert_eq!(params.pawn_bonus, params2.pawn_bonus);
        // the pawn slot of `bonus` is not carried by the vector.
        assert_eq!(params.bonus[1..], params2.bonus[1..]);
    }

    #[test]
    fn vector_layout() {
        let vec = EvalParams::default().vectorise();
        // pawn material comes first.
        assert_eq!(&vec[..2], &[136, 208]);
        // then the pawn table, starting from a1.
        let a2 = 2 * (5 + 8);
        assert_eq!(&vec[a2..a2 + 2], &[3, -10]);
    }

    #[test]
    fn wrong_length_rejected() {
        let mut vec = EvalParams::default().vectorise();
        vec.push(0);
        assert!(matches!(
            EvalParams::devectorise(&vec),
            Err(ParamsError::WrongLength { found, expected })
                if found == EvalParams::VECTOR_LEN + 1 && expected == EvalParams::VECTOR_LEN
        ));
    }

    #[test]
    fn unparseable_terms_rejected() {
        assert_eq!(EvalParams::parse_param_vec("1, 2,3\n").unwrap(), vec![1, 2, 3]);
        assert!(matches!(
            EvalParams::parse_param_vec("1,x,3"),
            Err(ParamsError::Parse { position: 1, .. })
        ));
    }

    #[test]
    fn out_of_range_rejected() {
        let mut params = EvalParams::default();
        params.bonus[PieceType::Queen][7][0] = S(0, 6000);
        let Err(ParamsError::OutOfRange { piece, square, .. }) = params.validate() else {
            panic!("expected an out-of-range error");
        };
        assert_eq!(piece, Piece::WQ);
        assert_eq!(square, Square::A8);
        assert!(EvalParams::default().validate().is_ok());
    }

    #[test]
    fn overflowing_terms_rejected() {
        let mut params = EvalParams::default();
        params.piece_values[PieceType::Pawn] = S(i32::MAX, 0);
        for value in params.pawn_bonus.iter_mut().flatten() {
            *value = S(1, 0);
        }
        let path = std::env::temp_dir().join(format!("tapered-overflow-{}.txt", std::process::id()));
        EvalParams::save_param_vec(&params.vectorise(), &path).unwrap();
        let loaded = EvalParams::from_file(&path);
        std::fs::remove_file(&path).unwrap();
        match loaded {
            Err(ParamsError::OutOfRange { piece, square, score, .. }) => {
                assert_eq!(piece, Piece::WP);
                assert_eq!(square, Square::A1);
                assert_eq!(score, S(i32::MAX, 0));
            }
            other => panic!("expected an out-of-range error, got {other:?}"),
        }

        let mut params = EvalParams::default();
        params.bonus[PieceType::Rook][0][0] = S(0, i32::MIN);
        assert!(matches!(
            params.validate(),
            Err(ParamsError::OutOfRange { piece: Piece::WR, square: Square::A1, .. })
        ));
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("tapered-params-{}.txt", std::process::id()));
        let params = EvalParams::default();
        EvalParams::save_param_vec(&params.vectorise(), &path).unwrap();
        let loaded = EvalParams::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.vectorise(), params.vectorise());
    }
}
