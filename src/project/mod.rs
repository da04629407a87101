//! Project-level bill of materials assembled from committed boards.

pub mod export;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use export::{parse_csv, to_csv, CSV_HEADERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Breaker,
    Strap,
    Interior,
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductCategory::Breaker => "Breaker",
            ProductCategory::Strap => "Strap",
            ProductCategory::Interior => "Interior",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLine {
    #[serde(rename = "Board")]
    pub board: String,
    #[serde(rename = "Product")]
    pub product: ProductCategory,
    #[serde(rename = "Qty")]
    pub quantity: i64,
    #[serde(rename = "Item #")]
    pub item: String,
    #[serde(rename = "Part #")]
    pub part_number: String,
}

/// Ordered project lines plus the registry of committed board names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectBom {
    lines: Vec<ProjectLine>,
    boards: Vec<String>,
}

impl ProjectBom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[ProjectLine] {
        &self.lines
    }

    /// Board names in commit order.
    pub fn boards(&self) -> &[String] {
        &self.boards
    }

    pub fn contains_board(&self, name: &str) -> bool {
        self.boards.iter().any(|board| board == name)
    }

    pub fn lines_for<'a>(&'a self, board: &'a str) -> impl Iterator<Item = &'a ProjectLine> {
        self.lines.iter().filter(move |line| line.board == board)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.boards.is_empty()
    }

    pub(crate) fn append_board(&mut self, name: String, lines: Vec<ProjectLine>) {
        self.boards.push(name);
        self.lines.extend(lines);
    }

    /// Drops the board and its lines; returns the number of lines removed.
    pub(crate) fn remove_board(&mut self, name: &str) -> Option<usize> {
        let position = self.boards.iter().position(|board| board == name)?;
        self.boards.remove(position);
        let before = self.lines.len();
        self.lines.retain(|line| line.board != name);
        Some(before - self.lines.len())
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
        self.boards.clear();
    }
}
