use serde::{Deserialize, Serialize};

use super::normalize::parse_integer;
use crate::errors::CatalogError;

/// Frame ratings that take a connecting strap, ascending.
pub const STRAP_FRAMES: [u32; 6] = [150, 250, 400, 600, 800, 1200];

const TABLE: &str = "strap";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrapRecord {
    pub frame_rating: u32,
    pub item: String,
    pub part_number: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStrapRow {
    #[serde(rename = "Frame Rating")]
    pub frame_rating: String,
    #[serde(rename = "Item #")]
    pub item: String,
    #[serde(rename = "Part #")]
    pub part_number: String,
}

impl RawStrapRow {
    pub fn normalize(self, row: usize) -> Result<StrapRecord, CatalogError> {
        let frame_rating = parse_integer(&self.frame_rating).ok_or_else(|| {
            CatalogError::invalid_row(
                TABLE,
                row,
                format!("frame rating `{}` is not a number", self.frame_rating),
            )
        })?;
        if !STRAP_FRAMES.contains(&frame_rating) {
            return Err(CatalogError::invalid_row(
                TABLE,
                row,
                format!("frame rating {frame_rating} does not take a strap"),
            ));
        }
        Ok(StrapRecord {
            frame_rating,
            item: self.item.trim().to_string(),
            part_number: self.part_number.trim().to_string(),
        })
    }
}
