mod common;

use assert_fs::prelude::*;
use assert_fs::TempDir;
use rust_decimal_macros::dec;
use switchboard_bom::catalog::{
    Catalog, TripUnitKind, BREAKERS_FILE, INTERIORS_FILE, STRAPS_FILE,
};
use switchboard_bom::errors::CatalogError;

const STRAPS: &str = "Frame Rating,Item #,Part #\n150,STP-150,BK-150\n800,STP-800,BK-800\n";
const INTERIORS: &str = "Amperage,Item #,Part #,X Spaces\n4000,INT-4000,PB-4000,12\n";
const BREAKER_HEADER: &str =
    "Item #,Part #,Frame Rating,Amp Rating,Trip Unit,Performance %,240V kAIC,480V kAIC,List Price\n";

fn write_catalog(breakers: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    dir.child(BREAKERS_FILE)
        .write_str(&format!("{BREAKER_HEADER}{breakers}"))
        .unwrap();
    dir.child(STRAPS_FILE).write_str(STRAPS).unwrap();
    dir.child(INTERIORS_FILE).write_str(INTERIORS).unwrap();
    dir
}

#[test]
fn sample_catalog_loads_and_normalizes() {
    let catalog = common::sample_catalog();
    assert_eq!(catalog.breakers().len(), 47);
    assert_eq!(catalog.straps().len(), 6);
    assert_eq!(catalog.interiors().len(), 6);

    let acb = catalog.breaker("ACB-3000").unwrap();
    assert_eq!((acb.frame_rating, acb.amp_rating), (3200, 3000));
    assert!(acb.lsi_capable);
    assert_eq!(acb.list_price, dec!(23400.00));

    let small = catalog.breaker("BKR-150-A40").unwrap();
    assert!(small.has_trip_unit(TripUnitKind::Adjustable));
    assert!(!small.lsi_capable);
    assert!(catalog.breaker("BKR-150-E150").unwrap().lsi_capable);
}

#[test]
fn queries_filter_by_column() {
    let catalog = common::sample_catalog();
    assert_eq!(catalog.breakers_in_frame(250).count(), 7);
    assert!(catalog
        .breakers_in_amp_range(1600..=2000)
        .all(|b| b.item.starts_with("ACB")));
    assert_eq!(catalog.with_trip_unit(TripUnitKind::Adjustable).count(), 9);
    assert_eq!(catalog.strap_for_frame(600).unwrap().item, "STP-600");
    assert!(catalog.strap_for_frame(1600).is_none());
    assert_eq!(catalog.interior_for_amperage(1800).unwrap().item, "INT-2000");
    assert!(catalog.interior_for_amperage(5000).is_none());
}

#[test]
fn price_and_rating_text_is_tolerated() {
    let dir = write_catalog("CB-1,PN-1,250.0,225A,\"FTU, ATU\",80,65,35,\"$1,250.50\"\n");
    let catalog = Catalog::load_dir(dir.path()).unwrap();
    let breaker = &catalog.breakers()[0];
    assert_eq!(breaker.frame_rating, 250);
    assert_eq!(breaker.amp_rating, 225);
    assert_eq!(breaker.list_price, dec!(1250.50));
    assert!(breaker.has_trip_unit(TripUnitKind::Fixed));
    assert!(breaker.has_trip_unit(TripUnitKind::Adjustable));
    assert!(!breaker.lsi_capable);
}

#[test]
fn missing_source_is_reported() {
    let dir = write_catalog("");
    std::fs::remove_file(dir.child(STRAPS_FILE).path()).unwrap();
    let err = Catalog::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::MissingSource(path) if path.ends_with(STRAPS_FILE)));
}

#[test]
fn invalid_rows_name_table_and_row() {
    let dir = write_catalog("CB-1,PN-1,250,225A,FTU,80,65,35,100\nCB-2,PN-2,250,amps,FTU,80,65,35,100\n");
    let err = Catalog::load_dir(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidRow { table: "breaker", row: 2, .. }
    ));
}

#[test]
fn interiors_without_spaces_are_rejected() {
    let dir = write_catalog("");
    dir.child(INTERIORS_FILE)
        .write_str("Amperage,Item #,Part #,X Spaces\n4000,INT-4000,PB-4000,0\n")
        .unwrap();
    let err = Catalog::load_dir(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidRow { table: "interior", row: 1, .. }
    ));
}
