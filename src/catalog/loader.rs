//! CSV loading for the three catalog tables.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use super::{Catalog, RawBreakerRow, RawInteriorRow, RawStrapRow};
use crate::errors::CatalogError;

pub const BREAKERS_FILE: &str = "LS_CBs.csv";
pub const STRAPS_FILE: &str = "LS_Straps.csv";
pub const INTERIORS_FILE: &str = "LS_Interiors.csv";

/// Locations of the three catalog sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub breakers: PathBuf,
    pub straps: PathBuf,
    pub interiors: PathBuf,
}

impl CatalogPaths {
    /// Standard file names inside a data directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            breakers: dir.join(BREAKERS_FILE),
            straps: dir.join(STRAPS_FILE),
            interiors: dir.join(INTERIORS_FILE),
        }
    }
}

impl Catalog {
    pub fn load(paths: &CatalogPaths) -> Result<Self, CatalogError> {
        let breakers: Vec<RawBreakerRow> = read_rows(open(&paths.breakers)?)?;
        let straps: Vec<RawStrapRow> = read_rows(open(&paths.straps)?)?;
        let interiors: Vec<RawInteriorRow> = read_rows(open(&paths.interiors)?)?;
        let catalog = Catalog::from_raw(breakers, straps, interiors)?;
        tracing::info!(
            breakers = %paths.breakers.display(),
            rows = catalog.breakers().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::load(&CatalogPaths::in_dir(dir))
    }
}

fn open(path: &Path) -> Result<File, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::MissingSource(path.to_path_buf()));
    }
    Ok(File::open(path)?)
}

/// Deserializes rows by header name; unknown columns are ignored.
pub fn read_rows<T, R>(source: R) -> Result<Vec<T>, CatalogError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}
