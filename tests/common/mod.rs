#![allow(dead_code)]

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use switchboard_bom::{catalog::Catalog, BomSession, SelectionCriteria};

/// Parsed once per test binary; every caller gets its own copy.
static SAMPLE_CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::load_dir(data_dir()).expect("load sample catalog"));

/// Sample catalog tables shipped with the crate.
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn sample_catalog() -> Catalog {
    SAMPLE_CATALOG.clone()
}

pub fn sample_session() -> BomSession {
    BomSession::new(sample_catalog())
}

pub fn criteria(amp_rating: u32) -> SelectionCriteria {
    SelectionCriteria {
        amp_rating,
        ..SelectionCriteria::default()
    }
}
