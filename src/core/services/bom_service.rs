use std::ops::RangeInclusive;

use thiserror::Error;

use crate::bom::{
    x_spaces_per_frame, BoardBom, BoardSummary, BomLine, InteriorLine, Role, StrapDerivation,
    StrapLine,
};
use crate::catalog::{Catalog, STRAP_FRAMES};

/// Quantities accepted by a single breaker commit.
pub const COMMIT_QUANTITY: RangeInclusive<i64> = -1..=10;

/// Frames up to this rating share one strap between two breakers.
const SHARED_STRAP_LIMIT: u32 = 400;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BomError {
    #[error("Breaker not added. Please select a breaker type (main or branch).")]
    MissingSelectionRole,
    #[error("Quantity {0} is outside the allowed range -1..=10")]
    QuantityOutOfRange(i64),
    #[error("Breaker `{0}` is not in the board ledger")]
    UnknownItem(String),
    #[error("No interior covers a {0}A main")]
    NoInteriorFits(u32),
}

pub struct BomService;

impl BomService {
    /// Adds `qty` to the role counter of `item`. Nothing changes on error.
    pub fn commit_breaker<'a>(
        board: &'a mut BoardBom,
        item: &str,
        role: Option<Role>,
        qty: i64,
    ) -> Result<&'a BomLine, BomError> {
        let Some(role) = role else {
            tracing::warn!(item, "breaker commit without a role");
            return Err(BomError::MissingSelectionRole);
        };
        if !COMMIT_QUANTITY.contains(&qty) {
            return Err(BomError::QuantityOutOfRange(qty));
        }
        let line = board
            .line_mut(item)
            .ok_or_else(|| BomError::UnknownItem(item.to_string()))?;
        line.add(role, qty);
        tracing::info!(
            item,
            %role,
            qty,
            main = line.main_qty,
            branch = line.branch_qty,
            "breaker committed"
        );
        Ok(&*line)
    }

    pub fn reset_board(board: &mut BoardBom) {
        board.reset();
        tracing::info!("board BOM reset");
    }

    pub fn derive_straps(board: &BoardBom, catalog: &Catalog) -> StrapDerivation {
        let mut x_spaces = 0;
        let lines = STRAP_FRAMES
            .iter()
            .map(|&frame| {
                let branch_total: i64 = board
                    .lines()
                    .iter()
                    .filter(|line| line.branch_qty > 0 && line.frame_rating == frame)
                    .map(|line| line.branch_qty)
                    .sum();
                let quantity = strap_quantity(frame, branch_total as u32);
                x_spaces += quantity * x_spaces_per_frame(frame).unwrap_or(0);
                StrapLine {
                    frame_rating: frame,
                    quantity,
                    strap: catalog.strap_for_frame(frame).cloned(),
                }
            })
            .collect();
        StrapDerivation { lines, x_spaces }
    }

    /// Interior for the main amperage, sized to the strap X-spaces. With no
    /// X-spaces the quantity is zero, and a missing interior row is `None`
    /// rather than an error.
    pub fn derive_interior(
        catalog: &Catalog,
        main_amperage: u32,
        x_spaces: u32,
    ) -> Result<Option<InteriorLine>, BomError> {
        let Some(interior) = catalog.interior_for_amperage(main_amperage) else {
            if x_spaces == 0 {
                return Ok(None);
            }
            return Err(BomError::NoInteriorFits(main_amperage));
        };
        let quantity = if x_spaces == 0 {
            0
        } else {
            x_spaces.div_ceil(interior.x_spaces)
        };
        Ok(Some(InteriorLine {
            interior: interior.clone(),
            quantity,
        }))
    }

    /// Recomputes every derived quantity from the current ledger.
    pub fn summarize(
        board: &BoardBom,
        catalog: &Catalog,
        main_amperage: u32,
    ) -> Result<BoardSummary, BomError> {
        let straps = Self::derive_straps(board, catalog);
        let interior = Self::derive_interior(catalog, main_amperage, straps.x_spaces)?;
        Ok(BoardSummary {
            main_amperage,
            breakers: board.listed_lines().cloned().collect(),
            straps: straps.listed().cloned().collect(),
            x_spaces: straps.x_spaces,
            interior,
        })
    }
}

fn strap_quantity(frame_rating: u32, branch_total: u32) -> u32 {
    if branch_total > 0 && frame_rating <= SHARED_STRAP_LIMIT {
        branch_total.div_ceil(2)
    } else {
        branch_total
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::catalog::{BreakerRecord, InteriorRecord, TripUnit};

    fn breaker(item: &str, frame: u32) -> BreakerRecord {
        BreakerRecord {
            item: item.into(),
            part_number: format!("PN-{item}"),
            frame_rating: frame,
            amp_rating: frame,
            trip_unit: TripUnit::parse("FTU"),
            performance: 80,
            lsi_capable: frame >= 800,
            kaic_240v: 65,
            kaic_480v: 35,
            list_price: Decimal::ONE,
        }
    }

    fn interior(amperage: u32, x_spaces: u32) -> InteriorRecord {
        InteriorRecord {
            amperage,
            item: format!("INT-{amperage}"),
            part_number: format!("PN-INT-{amperage}"),
            x_spaces,
        }
    }

    fn fixture() -> (Catalog, BoardBom) {
        let catalog = Catalog::new(
            vec![
                breaker("B250", 250),
                breaker("B400", 400),
                breaker("B600", 600),
                breaker("B800", 800),
                breaker("B1600", 1600),
            ],
            Vec::new(),
            vec![interior(4000, 12), interior(1200, 36)],
        );
        let board = BoardBom::from_catalog(&catalog);
        (catalog, board)
    }

    #[test]
    fn commit_without_role_changes_nothing() {
        let (_, mut board) = fixture();
        let before = board.clone();
        let err = BomService::commit_breaker(&mut board, "B250", None, 3).unwrap_err();
        assert_eq!(err, BomError::MissingSelectionRole);
        assert_eq!(board, before);
    }

    #[test]
    fn commits_accumulate_and_allow_corrections() {
        let (_, mut board) = fixture();
        BomService::commit_breaker(&mut board, "B250", Some(Role::Branch), 4).unwrap();
        BomService::commit_breaker(&mut board, "B250", Some(Role::Branch), -1).unwrap();
        BomService::commit_breaker(&mut board, "B250", Some(Role::Main), 1).unwrap();
        let line = board.line("B250").unwrap();
        assert_eq!((line.main_qty, line.branch_qty), (1, 3));
        assert_eq!(
            BomService::commit_breaker(&mut board, "B250", Some(Role::Main), 11),
            Err(BomError::QuantityOutOfRange(11))
        );
    }

    #[test]
    fn small_frames_share_straps() {
        let (catalog, mut board) = fixture();
        for _ in 0..5 {
            BomService::commit_breaker(&mut board, "B250", Some(Role::Branch), 1).unwrap();
        }
        BomService::commit_breaker(&mut board, "B600", Some(Role::Branch), 5).unwrap();
        let straps = BomService::derive_straps(&board, &catalog);
        assert_eq!(straps.quantity_for(250), 3);
        assert_eq!(straps.quantity_for(600), 5);
        assert_eq!(straps.x_spaces, 3 * 4 + 5 * 6);
    }

    #[test]
    fn x_spaces_sum_over_frames() {
        let (catalog, mut board) = fixture();
        BomService::commit_breaker(&mut board, "B400", Some(Role::Branch), 6).unwrap();
        BomService::commit_breaker(&mut board, "B800", Some(Role::Branch), 2).unwrap();
        let straps = BomService::derive_straps(&board, &catalog);
        assert_eq!(straps.quantity_for(400), 3);
        assert_eq!(straps.x_spaces, 36);
    }

    #[test]
    fn main_breakers_and_large_frames_take_no_straps() {
        let (catalog, mut board) = fixture();
        BomService::commit_breaker(&mut board, "B250", Some(Role::Main), 2).unwrap();
        BomService::commit_breaker(&mut board, "B1600", Some(Role::Branch), 1).unwrap();
        let straps = BomService::derive_straps(&board, &catalog);
        assert_eq!(straps.x_spaces, 0);
        assert_eq!(straps.listed().count(), 0);
    }

    #[test]
    fn interior_quantity_rounds_up() {
        let (catalog, _) = fixture();
        let quantity = |main, x| {
            BomService::derive_interior(&catalog, main, x)
                .unwrap()
                .map(|line| line.quantity)
        };
        let line = BomService::derive_interior(&catalog, 4000, 36).unwrap().unwrap();
        assert_eq!(line.interior.item, "INT-4000");
        assert_eq!(line.quantity, 3);
        assert_eq!(quantity(4000, 37), Some(4));
        assert_eq!(quantity(4000, 0), Some(0));
        assert_eq!(
            BomService::derive_interior(&catalog, 1000, 9)
                .unwrap()
                .map(|line| line.interior.item),
            Some("INT-1200".to_string())
        );
        assert_eq!(
            BomService::derive_interior(&catalog, 5000, 9),
            Err(BomError::NoInteriorFits(5000))
        );
    }

    #[test]
    fn uncovered_main_without_straps_is_empty() {
        let (catalog, mut board) = fixture();
        assert_eq!(BomService::derive_interior(&catalog, 5000, 0), Ok(None));

        BomService::commit_breaker(&mut board, "B1600", Some(Role::Main), 1).unwrap();
        let summary = BomService::summarize(&board, &catalog, 5000).unwrap();
        assert_eq!(summary.breakers.len(), 1);
        assert!(summary.interior.is_none());
        assert!(summary.interiors().is_empty());
    }

    #[test]
    fn reset_zeroes_all_rows() {
        let (catalog, mut board) = fixture();
        BomService::commit_breaker(&mut board, "B400", Some(Role::Branch), 2).unwrap();
        BomService::reset_board(&mut board);
        assert!(board.is_empty());
        assert_eq!(board.lines().len(), catalog.breakers().len());
    }
}
