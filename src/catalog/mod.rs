//! Read-only reference tables: breakers, straps, and interiors.

pub mod breaker;
pub mod interior;
pub mod loader;
pub mod normalize;
pub mod strap;

use std::ops::RangeInclusive;

pub use breaker::{BreakerRecord, RawBreakerRow, TripUnit, TripUnitKind, LSI_FRAME_THRESHOLD};
pub use interior::{InteriorRecord, RawInteriorRow};
pub use loader::{CatalogPaths, BREAKERS_FILE, INTERIORS_FILE, STRAPS_FILE};
pub use strap::{RawStrapRow, StrapRecord, STRAP_FRAMES};

use crate::errors::CatalogError;

/// In-memory catalog. Built once per session and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    breakers: Vec<BreakerRecord>,
    straps: Vec<StrapRecord>,
    interiors: Vec<InteriorRecord>,
}

impl Catalog {
    pub fn new(
        breakers: Vec<BreakerRecord>,
        straps: Vec<StrapRecord>,
        interiors: Vec<InteriorRecord>,
    ) -> Self {
        Self {
            breakers,
            straps,
            interiors,
        }
    }

    /// Normalizes already-parsed rows. Row numbers in errors are 1-based.
    pub fn from_raw(
        breakers: Vec<RawBreakerRow>,
        straps: Vec<RawStrapRow>,
        interiors: Vec<RawInteriorRow>,
    ) -> Result<Self, CatalogError> {
        let breakers = breakers
            .into_iter()
            .enumerate()
            .map(|(idx, row)| row.normalize(idx + 1))
            .collect::<Result<Vec<_>, _>>()?;
        let straps = straps
            .into_iter()
            .enumerate()
            .map(|(idx, row)| row.normalize(idx + 1))
            .collect::<Result<Vec<_>, _>>()?;
        let interiors = interiors
            .into_iter()
            .enumerate()
            .map(|(idx, row)| row.normalize(idx + 1))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            breakers = breakers.len(),
            straps = straps.len(),
            interiors = interiors.len(),
            "catalog normalized"
        );
        Ok(Self::new(breakers, straps, interiors))
    }

    pub fn breakers(&self) -> &[BreakerRecord] {
        &self.breakers
    }

    pub fn straps(&self) -> &[StrapRecord] {
        &self.straps
    }

    pub fn interiors(&self) -> &[InteriorRecord] {
        &self.interiors
    }

    pub fn breaker(&self, item: &str) -> Option<&BreakerRecord> {
        self.breakers.iter().find(|record| record.item == item)
    }

    pub fn breakers_in_frame(&self, frame_rating: u32) -> impl Iterator<Item = &BreakerRecord> {
        self.breakers_where(move |record| record.frame_rating == frame_rating)
    }

    pub fn breakers_in_amp_range(
        &self,
        range: RangeInclusive<u32>,
    ) -> impl Iterator<Item = &BreakerRecord> {
        self.breakers_where(move |record| range.contains(&record.amp_rating))
    }

    pub fn lsi_capable(&self, capable: bool) -> impl Iterator<Item = &BreakerRecord> {
        self.breakers_where(move |record| record.lsi_capable == capable)
    }

    pub fn with_trip_unit(&self, kind: TripUnitKind) -> impl Iterator<Item = &BreakerRecord> {
        self.breakers_where(move |record| record.has_trip_unit(kind))
    }

    pub fn breakers_where<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a BreakerRecord>
    where
        P: Fn(&BreakerRecord) -> bool + 'a,
    {
        self.breakers.iter().filter(move |record| predicate(record))
    }

    pub fn strap_for_frame(&self, frame_rating: u32) -> Option<&StrapRecord> {
        self.straps
            .iter()
            .find(|strap| strap.frame_rating == frame_rating)
    }

    /// Interior with the smallest amperage that still covers `amperage`.
    /// Ties resolve to the first cataloged row.
    pub fn interior_for_amperage(&self, amperage: u32) -> Option<&InteriorRecord> {
        let threshold = self
            .interiors
            .iter()
            .map(|interior| interior.amperage)
            .filter(|&amps| amps >= amperage)
            .min()?;
        self.interiors
            .iter()
            .find(|interior| interior.amperage == threshold)
    }
}
