use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::normalize::{leading_digits, parse_integer, parse_price};
use crate::errors::CatalogError;

/// Frame ratings at or above this size always carry LSI protection.
pub const LSI_FRAME_THRESHOLD: u32 = 800;

const TABLE: &str = "breaker";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripUnitKind {
    /// FTU
    Fixed,
    /// ATU
    Adjustable,
    /// ETS
    Electronic,
}

impl TripUnitKind {
    pub const ALL: [TripUnitKind; 3] = [
        TripUnitKind::Fixed,
        TripUnitKind::Adjustable,
        TripUnitKind::Electronic,
    ];

    pub fn code(self) -> &'static str {
        match self {
            TripUnitKind::Fixed => "FTU",
            TripUnitKind::Adjustable => "ATU",
            TripUnitKind::Electronic => "ETS",
        }
    }
}

impl fmt::Display for TripUnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Trip unit description as cataloged. A single label may name several kinds
/// (e.g. `FTU/ATU`); a blank label contains none.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TripUnit {
    pub label: String,
    kinds: Vec<TripUnitKind>,
}

impl TripUnit {
    pub fn parse(label: &str) -> Self {
        let upper = label.trim().to_ascii_uppercase();
        let kinds = TripUnitKind::ALL
            .into_iter()
            .filter(|kind| upper.contains(kind.code()))
            .collect();
        Self {
            label: label.trim().to_string(),
            kinds,
        }
    }

    pub fn contains(&self, kind: TripUnitKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn contains_any(&self, kinds: &[TripUnitKind]) -> bool {
        kinds.iter().any(|kind| self.contains(*kind))
    }

    pub fn kinds(&self) -> &[TripUnitKind] {
        &self.kinds
    }
}

/// One normalized row of the breaker catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakerRecord {
    pub item: String,
    pub part_number: String,
    pub frame_rating: u32,
    pub amp_rating: u32,
    pub trip_unit: TripUnit,
    pub performance: u32,
    pub lsi_capable: bool,
    pub kaic_240v: u32,
    pub kaic_480v: u32,
    pub list_price: Decimal,
}

impl BreakerRecord {
    pub fn has_trip_unit(&self, kind: TripUnitKind) -> bool {
        self.trip_unit.contains(kind)
    }
}

/// Breaker row exactly as read from the source table, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBreakerRow {
    #[serde(rename = "Item #")]
    pub item: String,
    #[serde(rename = "Part #")]
    pub part_number: String,
    #[serde(rename = "Frame Rating")]
    pub frame_rating: String,
    #[serde(rename = "Amp Rating")]
    pub amp_rating: String,
    #[serde(rename = "Trip Unit", default)]
    pub trip_unit: String,
    #[serde(rename = "Performance %")]
    pub performance: String,
    #[serde(rename = "240V kAIC")]
    pub kaic_240v: String,
    #[serde(rename = "480V kAIC")]
    pub kaic_480v: String,
    #[serde(rename = "List Price")]
    pub list_price: String,
}

impl RawBreakerRow {
    /// Normalizes the row; `row` is the 1-based data row used in error reports.
    pub fn normalize(self, row: usize) -> Result<BreakerRecord, CatalogError> {
        let invalid = |field: &str, value: &str| {
            CatalogError::invalid_row(TABLE, row, format!("{field} `{value}` is not a number"))
        };

        let item = self.item.trim().to_string();
        if item.is_empty() {
            return Err(CatalogError::invalid_row(TABLE, row, "missing item number"));
        }
        let frame_rating =
            parse_integer(&self.frame_rating).ok_or_else(|| invalid("frame rating", &self.frame_rating))?;
        let amp_rating = leading_digits(&self.amp_rating).ok_or_else(|| {
            CatalogError::invalid_row(
                TABLE,
                row,
                format!("amp rating `{}` contains no digits", self.amp_rating),
            )
        })?;
        let performance =
            parse_integer(&self.performance).ok_or_else(|| invalid("performance", &self.performance))?;
        let kaic_240v = parse_integer(&self.kaic_240v).ok_or_else(|| invalid("240V kAIC", &self.kaic_240v))?;
        let kaic_480v = parse_integer(&self.kaic_480v).ok_or_else(|| invalid("480V kAIC", &self.kaic_480v))?;
        let list_price = parse_price(&self.list_price).ok_or_else(|| {
            CatalogError::invalid_row(
                TABLE,
                row,
                format!("list price `{}` is not a decimal", self.list_price),
            )
        })?;
        let trip_unit = TripUnit::parse(&self.trip_unit);
        let lsi_capable =
            frame_rating >= LSI_FRAME_THRESHOLD || trip_unit.contains(TripUnitKind::Electronic);

        Ok(BreakerRecord {
            item,
            part_number: self.part_number.trim().to_string(),
            frame_rating,
            amp_rating,
            trip_unit,
            performance,
            lsi_capable,
            kaic_240v,
            kaic_480v,
            list_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(frame: &str, amps: &str, trip: &str) -> RawBreakerRow {
        RawBreakerRow {
            item: "CB-1".into(),
            part_number: "PN-1".into(),
            frame_rating: frame.into(),
            amp_rating: amps.into(),
            trip_unit: trip.into(),
            performance: "80".into(),
            kaic_240v: "65".into(),
            kaic_480v: "35".into(),
            list_price: "$1,250.50".into(),
        }
    }

    #[test]
    fn amp_rating_takes_leading_digits() {
        let record = raw("250", "225A", "FTU").normalize(1).unwrap();
        assert_eq!(record.amp_rating, 225);
        assert_eq!(record.list_price, Decimal::new(125050, 2));
    }

    #[test]
    fn amp_rating_without_digits_is_rejected() {
        let err = raw("250", "N/A", "FTU").normalize(7).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRow { row: 7, .. }));
    }

    #[test]
    fn lsi_follows_frame_or_electronic_trip() {
        assert!(!raw("400", "400A", "ATU").normalize(1).unwrap().lsi_capable);
        assert!(raw("400", "400A", "ETS").normalize(1).unwrap().lsi_capable);
        assert!(raw("800", "800A", "ATU").normalize(1).unwrap().lsi_capable);
    }

    #[test]
    fn trip_unit_reads_combined_labels() {
        let unit = TripUnit::parse("ftu/ATU");
        assert!(unit.contains(TripUnitKind::Fixed));
        assert!(unit.contains(TripUnitKind::Adjustable));
        assert!(!unit.contains(TripUnitKind::Electronic));
        assert!(TripUnit::parse("").kinds().is_empty());
    }
}
