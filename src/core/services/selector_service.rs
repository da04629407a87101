use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{BreakerRecord, Catalog, TripUnitKind, LSI_FRAME_THRESHOLD};

/// Frame sizes offered by the catalog, ascending.
pub const FRAME_SIZES: [u32; 11] = [
    150, 250, 400, 600, 800, 1200, 1600, 2000, 2500, 3200, 4000,
];

/// Requests above this rating are air circuit breakers: full LSI, 100%
/// performance, adjustable trip, and top interrupt rating. They skip refinement.
pub const REFINEMENT_LIMIT: u32 = 1200;

/// Minimum interrupt ratings (kA) a board may require.
pub const KAIC_OPTIONS: [u32; 4] = [35, 50, 65, 100];

/// The 3200A frame is cataloged with a 3000A rating for 3000A requests.
const EXCEPTION_FRAME: u32 = 3200;
const EXCEPTION_RATING: u32 = 3000;

const EXACT_FIT_TRIPS: [TripUnitKind; 2] = [TripUnitKind::Fixed, TripUnitKind::Electronic];
const INEXACT_FIT_TRIPS: [TripUnitKind; 2] = [TripUnitKind::Adjustable, TripUnitKind::Electronic];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Voltage {
    /// 120/208V, rated against the 240V interrupt column.
    V208,
    /// 277/480V, rated against the 480V interrupt column.
    V480,
}

impl Voltage {
    pub fn label(self) -> &'static str {
        match self {
            Voltage::V208 => "120/208V",
            Voltage::V480 => "277/480V",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "208" | "120/208" | "120/208v" => Some(Voltage::V208),
            "480" | "277/480" | "277/480v" => Some(Voltage::V480),
            _ => None,
        }
    }

    pub fn interrupt_rating(self, breaker: &BreakerRecord) -> u32 {
        match self {
            Voltage::V208 => breaker.kaic_240v,
            Voltage::V480 => breaker.kaic_480v,
        }
    }
}

impl fmt::Display for Voltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Constraints a recommended breaker has to satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCriteria {
    pub amp_rating: u32,
    pub voltage: Option<Voltage>,
    pub min_kaic: Option<u32>,
    pub performance: u32,
    pub lsi_required: bool,
}

impl Default for SelectionCriteria {
    fn default() -> Self {
        Self {
            amp_rating: 4000,
            voltage: None,
            min_kaic: None,
            performance: 80,
            lsi_required: false,
        }
    }
}

/// The filter stage that emptied the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStage {
    Frame,
    FrameException,
    Performance,
    Lsi,
    TripUnit,
    AmpRating,
    InterruptRating,
}

impl fmt::Display for SelectionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SelectionStage::Frame => "frame size",
            SelectionStage::FrameException => "3000A frame exception",
            SelectionStage::Performance => "performance",
            SelectionStage::Lsi => "LSI",
            SelectionStage::TripUnit => "trip unit",
            SelectionStage::AmpRating => "amp rating",
            SelectionStage::InterruptRating => "interrupt rating",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No frame size fits {amp_rating}A (largest frame is 4000A)")]
    NoFrameFits { amp_rating: u32 },
    #[error("No breaker matches the requested constraints ({stage} filter left no candidates)")]
    NoCandidateFound { stage: SelectionStage },
}

/// Outcome of a successful selection. Holds every price-tied candidate in
/// catalog order; never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub frame_size: u32,
    candidates: Vec<BreakerRecord>,
}

impl Recommendation {
    /// The part committed to the board when several candidates tie on price.
    pub fn primary(&self) -> &BreakerRecord {
        &self.candidates[0]
    }

    pub fn candidates(&self) -> &[BreakerRecord] {
        &self.candidates
    }
}

pub struct SelectorService;

impl SelectorService {
    /// Smallest frame size that holds `amp_rating`.
    pub fn frame_size_for(amp_rating: u32) -> Result<u32, SelectionError> {
        FRAME_SIZES
            .iter()
            .copied()
            .find(|&size| amp_rating <= size)
            .ok_or(SelectionError::NoFrameFits { amp_rating })
    }

    pub fn select(
        catalog: &Catalog,
        criteria: &SelectionCriteria,
    ) -> Result<Recommendation, SelectionError> {
        let amps = criteria.amp_rating;
        let frame = Self::frame_size_for(amps)?;

        let mut pool: Vec<&BreakerRecord> = catalog
            .breakers_in_frame(frame)
            .filter(|breaker| breaker.amp_rating >= amps)
            .collect();
        checkpoint(&pool, SelectionStage::Frame)?;

        if frame == EXCEPTION_FRAME && amps <= EXCEPTION_RATING {
            pool.retain(|breaker| breaker.amp_rating == EXCEPTION_RATING);
            checkpoint(&pool, SelectionStage::FrameException)?;
        }

        if amps <= REFINEMENT_LIMIT {
            pool.retain(|breaker| breaker.performance == criteria.performance);
            checkpoint(&pool, SelectionStage::Performance)?;

            if frame < LSI_FRAME_THRESHOLD {
                pool.retain(|breaker| breaker.lsi_capable == criteria.lsi_required);
                checkpoint(&pool, SelectionStage::Lsi)?;

                let exact_fit = pool.iter().any(|breaker| breaker.amp_rating == amps);
                if exact_fit {
                    pool.retain(|breaker| {
                        breaker.amp_rating == amps && breaker.trip_unit.contains_any(&EXACT_FIT_TRIPS)
                    });
                    checkpoint(&pool, SelectionStage::TripUnit)?;
                } else {
                    pool.retain(|breaker| breaker.trip_unit.contains_any(&INEXACT_FIT_TRIPS));
                    checkpoint(&pool, SelectionStage::TripUnit)?;
                    narrow_to_smallest_rating(&mut pool, amps)?;
                }
            } else {
                narrow_to_smallest_rating(&mut pool, amps)?;
            }

            if let Some(voltage) = criteria.voltage {
                let minimum = criteria.min_kaic.unwrap_or(0);
                let rating = pool
                    .iter()
                    .map(|breaker| voltage.interrupt_rating(breaker))
                    .filter(|&kaic| kaic >= minimum)
                    .min()
                    .ok_or(SelectionError::NoCandidateFound {
                        stage: SelectionStage::InterruptRating,
                    })?;
                pool.retain(|breaker| voltage.interrupt_rating(breaker) == rating);
                tracing::debug!(%voltage, kaic = rating, remaining = pool.len(), "interrupt rating filter");
            }
        }

        let cheapest = pool
            .iter()
            .map(|breaker| breaker.list_price)
            .min()
            .ok_or(SelectionError::NoCandidateFound {
                stage: SelectionStage::AmpRating,
            })?;
        let candidates: Vec<BreakerRecord> = pool
            .into_iter()
            .filter(|breaker| breaker.list_price == cheapest)
            .cloned()
            .collect();

        tracing::debug!(
            amp_rating = amps,
            frame,
            item = %candidates[0].item,
            ties = candidates.len(),
            "breaker selected"
        );
        Ok(Recommendation {
            frame_size: frame,
            candidates,
        })
    }
}

fn checkpoint(pool: &[&BreakerRecord], stage: SelectionStage) -> Result<(), SelectionError> {
    tracing::trace!(%stage, remaining = pool.len(), "selection stage");
    if pool.is_empty() {
        Err(SelectionError::NoCandidateFound { stage })
    } else {
        Ok(())
    }
}

fn narrow_to_smallest_rating(pool: &mut Vec<&BreakerRecord>, amps: u32) -> Result<(), SelectionError> {
    let smallest = pool
        .iter()
        .map(|breaker| breaker.amp_rating)
        .filter(|&rating| rating >= amps)
        .min()
        .ok_or(SelectionError::NoCandidateFound {
            stage: SelectionStage::AmpRating,
        })?;
    pool.retain(|breaker| breaker.amp_rating == smallest);
    Ok(())
}
