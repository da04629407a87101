use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Where a committed breaker sits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Main,
    Branch,
}

impl Role {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "main" => Some(Role::Main),
            "branch" => Some(Role::Branch),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Main => f.write_str("Main"),
            Role::Branch => f.write_str("Branch"),
        }
    }
}

/// Running quantities for one breaker item. Counters may go negative through
/// corrections; they are never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomLine {
    pub item: String,
    pub part_number: String,
    pub frame_rating: u32,
    pub main_qty: i64,
    pub branch_qty: i64,
}

impl BomLine {
    pub fn total(&self) -> i64 {
        self.main_qty + self.branch_qty
    }

    /// Lines shown on the board BOM.
    pub fn is_listed(&self) -> bool {
        self.main_qty > 0 || self.branch_qty > 0
    }

    pub fn add(&mut self, role: Role, qty: i64) {
        match role {
            Role::Main => self.main_qty += qty,
            Role::Branch => self.branch_qty += qty,
        }
    }
}

/// Per-board ledger with one row per distinct catalog breaker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardBom {
    lines: Vec<BomLine>,
}

impl BoardBom {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut lines: Vec<BomLine> = Vec::with_capacity(catalog.breakers().len());
        for breaker in catalog.breakers() {
            if lines.iter().any(|line| line.item == breaker.item) {
                continue;
            }
            lines.push(BomLine {
                item: breaker.item.clone(),
                part_number: breaker.part_number.clone(),
                frame_rating: breaker.frame_rating,
                main_qty: 0,
                branch_qty: 0,
            });
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[BomLine] {
        &self.lines
    }

    pub fn line(&self, item: &str) -> Option<&BomLine> {
        self.lines.iter().find(|line| line.item == item)
    }

    pub(crate) fn line_mut(&mut self, item: &str) -> Option<&mut BomLine> {
        self.lines.iter_mut().find(|line| line.item == item)
    }

    pub fn listed_lines(&self) -> impl Iterator<Item = &BomLine> {
        self.lines.iter().filter(|line| line.is_listed())
    }

    pub fn is_empty(&self) -> bool {
        !self.lines.iter().any(BomLine::is_listed)
    }

    /// Zeroes every counter; rows stay in place.
    pub fn reset(&mut self) {
        for line in &mut self.lines {
            line.main_qty = 0;
            line.branch_qty = 0;
        }
    }
}
