//! CSV encoding of the project BOM.

use super::ProjectLine;

pub const CSV_HEADERS: [&str; 5] = ["Board", "Product", "Qty", "Item #", "Part #"];

/// Serializes lines in order. Identical input always yields identical bytes.
pub fn to_csv(lines: &[ProjectLine]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for line in lines {
        writer.serialize(line)?;
    }
    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}

pub fn parse_csv(bytes: &[u8]) -> Result<Vec<ProjectLine>, csv::Error> {
    let mut reader = csv::Reader::from_reader(bytes);
    reader.deserialize().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProductCategory;

    #[test]
    fn empty_project_exports_header_only() {
        let bytes = to_csv(&[]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Board,Product,Qty,Item #,Part #\n");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let line = ProjectLine {
            board: "MSB, North".into(),
            product: ProductCategory::Strap,
            quantity: 2,
            item: "STP-150".into(),
            part_number: "BK-150".into(),
        };
        let text = String::from_utf8(to_csv(&[line.clone()]).unwrap()).unwrap();
        assert!(text.contains("\"MSB, North\",Strap,2,STP-150,BK-150"));
        assert_eq!(parse_csv(text.as_bytes()).unwrap(), vec![line]);
    }
}
