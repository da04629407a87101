use serde::Serialize;

use super::board::BomLine;
use crate::catalog::{InteriorRecord, StrapRecord};

/// Interior mounting space consumed by one strap, per frame rating.
pub const X_SPACES_PER_FRAME: [(u32, u32); 6] = [
    (150, 4),
    (250, 4),
    (400, 6),
    (600, 6),
    (800, 9),
    (1200, 9),
];

pub fn x_spaces_per_frame(frame_rating: u32) -> Option<u32> {
    X_SPACES_PER_FRAME
        .iter()
        .find(|(frame, _)| *frame == frame_rating)
        .map(|(_, spaces)| *spaces)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrapLine {
    pub frame_rating: u32,
    pub quantity: u32,
    /// `None` when the strap catalog has no row for this frame.
    pub strap: Option<StrapRecord>,
}

impl StrapLine {
    pub fn is_listed(&self) -> bool {
        self.quantity > 0 && self.strap.is_some()
    }
}

/// Strap quantities for all six strap frames plus the X-spaces they consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrapDerivation {
    pub lines: Vec<StrapLine>,
    pub x_spaces: u32,
}

impl StrapDerivation {
    pub fn quantity_for(&self, frame_rating: u32) -> u32 {
        self.lines
            .iter()
            .find(|line| line.frame_rating == frame_rating)
            .map_or(0, |line| line.quantity)
    }

    pub fn listed(&self) -> impl Iterator<Item = &StrapLine> {
        self.lines.iter().filter(|line| line.is_listed())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteriorLine {
    pub interior: InteriorRecord,
    pub quantity: u32,
}

impl InteriorLine {
    pub fn is_listed(&self) -> bool {
        self.quantity > 0
    }
}

/// Snapshot of a board, recomputed in full from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub main_amperage: u32,
    pub breakers: Vec<BomLine>,
    pub straps: Vec<StrapLine>,
    pub x_spaces: u32,
    /// `None` only when no interior covers the main and no X-spaces are used.
    pub interior: Option<InteriorLine>,
}

impl BoardSummary {
    pub fn interiors(&self) -> Vec<InteriorLine> {
        self.interior
            .iter()
            .filter(|line| line.is_listed())
            .cloned()
            .collect()
    }
}
