use thiserror::Error;

use crate::{
    chess::{piece::Piece, types::Square},
    evaluation::score::S,
};

#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("failed to read or write parameter file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid parameter {value:?} at position {position}")]
    Parse { position: usize, value: String },
    #[error("parameter vector has {found} terms, expected {expected}")]
    WrongLength { found: usize, expected: usize },
    #[error("score {score} for {piece} on {square} exceeds the limit of {limit}")]
    OutOfRange { piece: Piece, square: Square, score: S, limit: i32 },
}
