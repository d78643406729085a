#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Tapered piece-square tables for chess evaluation.
//!
//! A compact set of tuned positional bonuses, given for White only and, for
//! every piece but the pawn, for the queenside files only, is expanded into a
//! full (piece, square) table with material folded in. Black's entries are
//! White's, rank-mirrored and negated.

#[macro_use]
mod macros;

pub mod chess;
pub mod errors;
pub mod evaluation;
pub mod piecesquaretable;

pub use evaluation::{parameters::EvalParams, score::S};
pub use piecesquaretable::{PieceSquareTable, shared::SharedPieceSquareTable};

/// The name of the crate.
pub static NAME: &str = "tapered";
/// The version of the crate.
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
