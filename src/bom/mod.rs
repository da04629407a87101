//! Board-scoped bill of materials: the breaker ledger and the strap and
//! interior lines derived from it.

pub mod board;
pub mod derived;

pub use board::{BoardBom, BomLine, Role};
pub use derived::{
    x_spaces_per_frame, BoardSummary, InteriorLine, StrapDerivation, StrapLine, X_SPACES_PER_FRAME,
};
