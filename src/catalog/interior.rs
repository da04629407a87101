use serde::{Deserialize, Serialize};

use super::normalize::parse_integer;
use crate::errors::CatalogError;

const TABLE: &str = "interior";

/// Interior mounting unit, keyed by the main amperage it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteriorRecord {
    pub amperage: u32,
    pub item: String,
    pub part_number: String,
    /// Mounting slots provided by one interior.
    pub x_spaces: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInteriorRow {
    #[serde(rename = "Amperage")]
    pub amperage: String,
    #[serde(rename = "Item #")]
    pub item: String,
    #[serde(rename = "Part #")]
    pub part_number: String,
    #[serde(rename = "X Spaces")]
    pub x_spaces: String,
}

impl RawInteriorRow {
    pub fn normalize(self, row: usize) -> Result<InteriorRecord, CatalogError> {
        let amperage = parse_integer(&self.amperage).ok_or_else(|| {
            CatalogError::invalid_row(
                TABLE,
                row,
                format!("amperage `{}` is not a number", self.amperage),
            )
        })?;
        let x_spaces = match parse_integer(&self.x_spaces) {
            Some(0) | None => {
                return Err(CatalogError::invalid_row(
                    TABLE,
                    row,
                    format!("X spaces `{}` must be a positive number", self.x_spaces),
                ))
            }
            Some(value) => value,
        };
        Ok(InteriorRecord {
            amperage,
            item: self.item.trim().to_string(),
            part_number: self.part_number.trim().to_string(),
            x_spaces,
        })
    }
}
