pub mod piece;
pub mod types;
