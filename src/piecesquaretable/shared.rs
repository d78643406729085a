use std::sync::{Arc, PoisonError, RwLock};

use crate::evaluation::parameters::EvalParams;

use super::PieceSquareTable;

/// A piece-square table that can be swapped out while readers hold it.
///
/// Readers take an `Arc` snapshot and keep using it for as long as they
/// like. A rebuild constructs the new table in full before publishing it,
/// so no reader ever sees a half-written table.
#[derive(Debug)]
pub struct SharedPieceSquareTable {
    current: RwLock<Arc<PieceSquareTable>>,
}

impl SharedPieceSquareTable {
    pub fn new(table: PieceSquareTable) -> Self {
        Self { current: RwLock::new(Arc::new(table)) }
    }

    pub fn from_params(params: &EvalParams) -> Self {
        Self::new(PieceSquareTable::new(params))
    }

    /// A snapshot of the current table.
    pub fn load(&self) -> Arc<PieceSquareTable> {
        // the lock only ever guards a pointer swap, so a poisoned lock
        // still holds a complete table.
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replaces the current table, returning the previous one.
    pub fn publish(&self, table: PieceSquareTable) -> Arc<PieceSquareTable> {
        let table = Arc::new(table);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, table)
    }

    pub fn rebuild(&self, params: &EvalParams) -> Arc<PieceSquareTable> {
        log::info!("rebuilding piece-square table");
        self.publish(PieceSquareTable::new(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chess::{piece::{Piece, PieceType}, types::Square},
        evaluation::score::S,
    };

    #[test]
    fn snapshots_survive_publication() {
        let shared = SharedPieceSquareTable::from_params(&EvalParams::default());
        let before = shared.load();

        let mut params = EvalParams::default();
        params.piece_values[PieceType::Knight] = S(800, 800);
        let previous = shared.rebuild(&params);

        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.material(Piece::WN), S(782, 865));
        assert_eq!(shared.load().material(Piece::WN), S(800, 800));
        assert_eq!(shared.load().material(Piece::BN), S(800, 800));
    }

    #[test]
    fn readers_only_see_complete_tables() {
        let tuned = EvalParams::default();
        let mut flat = EvalParams::default();
        flat.piece_values[PieceType::Pawn] = S(100, 100);
        let shared = SharedPieceSquareTable::from_params(&tuned);

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..200 {
                        let pst = shared.load();
                        let pawn = pst.material(Piece::WP);
                        let expected = if pawn == S(100, 100) { &flat } else { &tuned };
                        assert!(pst.check_invariants(expected).is_empty());
                        assert_eq!(pst.get(Piece::WP, Square::E4) - pawn, expected.pawn_bonus[3][4]);
                    }
                });
            }
            for i in 0..50 {
                shared.rebuild(if i % 2 == 0 { &flat } else { &tuned });
            }
        });
    }
}
