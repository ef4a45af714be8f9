//! End-to-end generation tests for the resistor library table.
//!
//! These tests drive the full pipeline (parameter resolution, value
//! enumeration, row encoding, CSV emission) and pin down the output
//! contract: exact header, exact row order, exact vendor encodings.

use altium_resistor_gen::library::{
    writer, GenerationParams, Generator, LibraryError, LibraryRow,
};
use tempfile::TempDir;

/// Creates a temporary directory inside `.tmp/` for test isolation.
/// The directory is automatically cleaned up when the returned `TempDir` is dropped.
fn test_temp_dir() -> TempDir {
    let tmp_root = std::path::Path::new(".tmp");
    std::fs::create_dir_all(tmp_root).expect("Failed to create .tmp directory");
    let tmp_root = tmp_root
        .canonicalize()
        .expect("Failed to canonicalize .tmp path");
    tempfile::tempdir_in(&tmp_root).expect("Failed to create temp dir")
}

fn default_rows() -> Vec<LibraryRow> {
    Generator::new(&GenerationParams::default())
        .expect("default parameters must validate")
        .rows()
}

fn render(rows: &[LibraryRow]) -> String {
    let mut buffer = Vec::new();
    writer::write_table(rows, &mut buffer).expect("in-memory write cannot fail");
    String::from_utf8(buffer).expect("output is ASCII")
}

const EXPECTED_HEADER: &str = "Part,Description,Value,Case,Tol,Power,Manufacturer,\
                               Manufacturer P/N,Supplier 1,Supplier Part Number 1,\
                               Library Path,Library Ref,Footprint Path,Footprint Ref,Company";

// =============================================================================
// Row count and ordering
// =============================================================================

#[test]
fn default_configuration_yields_1728_rows() {
    // 3 sizes x 6 generating decades x 96 values. The megohm decade is in
    // the default list but contributes no rows.
    assert_eq!(default_rows().len(), 1728);
}

#[test]
fn rows_are_in_canonical_nested_order() {
    let rows = default_rows();

    // Outer loop: sizes, 576 rows each.
    assert!(rows[..576].iter().all(|r| r.case == "0402"));
    assert!(rows[576..1152].iter().all(|r| r.case == "0603"));
    assert!(rows[1152..].iter().all(|r| r.case == "0805"));

    // Middle loop: decades in ascending order, 96 rows each.
    assert_eq!(rows[0].value, "1.00");
    assert_eq!(rows[96].value, "10.0");
    assert_eq!(rows[192].value, "100R");
    assert_eq!(rows[288].value, "1.00K");
    assert_eq!(rows[384].value, "10.0K");
    assert_eq!(rows[480].value, "100K");

    // Inner loop: mantissa values ascending.
    assert_eq!(rows[1].value, "1.02");
    assert_eq!(rows[95].value, "9.76");
    assert_eq!(rows[575].value, "976K");
}

#[test]
fn no_duplicate_part_names() {
    let rows = default_rows();
    let mut names: Vec<&str> = rows.iter().map(|r| r.part.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), rows.len());
}

#[test]
fn megohm_only_decade_produces_an_empty_table_with_header() {
    let params = GenerationParams {
        decades: vec![1_000_000],
        ..GenerationParams::default()
    };
    let rows = Generator::new(&params).unwrap().rows();
    assert!(rows.is_empty());

    let output = render(&rows);
    assert_eq!(output.lines().count(), 1);
    assert_eq!(output.lines().next().unwrap(), EXPECTED_HEADER);
}

// =============================================================================
// Vendor encodings
// =============================================================================

#[test]
fn golden_row_0603_ones_decade() {
    let rows = default_rows();
    let row = rows
        .iter()
        .find(|r| r.part == "RES_0603_4.32")
        .expect("4.32 ohm 0603 row exists");

    assert_eq!(row.description, "RES SMT 4.32 0603 100ppm 100mW");
    assert_eq!(row.value, "4.32");
    assert_eq!(row.power, "100mW");
    assert_eq!(row.supplier_part, "541-4.32HHCT-ND");
    assert_eq!(row.manufacturer_part, "CRCW06034R32FKEA");
}

#[test]
fn golden_row_0402_kilo_decade() {
    let rows = default_rows();
    let row = rows
        .iter()
        .find(|r| r.part == "RES_0402_1.00K")
        .expect("1.00K 0402 row exists");

    assert_eq!(row.value, "1.00K");
    assert_eq!(row.manufacturer_part, "CRCW04021K00FKED");
    assert_eq!(row.supplier_part, "541-1.00KLCT-ND");
    assert_eq!(row.power, "62mW");
}

#[test]
fn hundreds_decade_encodings_never_contain_a_decimal_point() {
    let rows = default_rows();
    let hundreds: Vec<&LibraryRow> = rows
        .iter()
        .filter(|r| r.value.ends_with('R'))
        .collect();
    assert_eq!(hundreds.len(), 288); // 96 values x 3 sizes

    for row in hundreds {
        assert!(!row.value.contains('.'), "value: {}", row.value);
        assert!(
            !row.manufacturer_part.contains('.'),
            "part number: {}",
            row.manufacturer_part
        );
    }
}

#[test]
fn kilo_tier_part_numbers_drop_the_trailing_unit() {
    let rows = default_rows();

    // 43.2K on 0805: encoded form is 43K2, not 43K2K.
    let row = rows
        .iter()
        .find(|r| r.part == "RES_0805_43.2K")
        .expect("43.2K 0805 row exists");
    assert_eq!(row.manufacturer_part, "CRCW080543K2FKEA");
    assert_eq!(row.supplier_part, "541-43.2KCCT-ND");
}

#[test]
fn ones_decade_uses_the_doubled_ordering_suffix() {
    let rows = default_rows();
    for row in &rows {
        let ones = !row.value.contains('K') && !row.value.ends_with('R') && row.value.contains('.');
        let suffix_doubled = row.supplier_part.contains("LLCT-ND")
            || row.supplier_part.contains("HHCT-ND")
            || row.supplier_part.contains("CCCT-ND");
        // Tens-decade values also contain '.', so only assert one way:
        // every doubled suffix must be a ones-decade value below 10 ohms.
        if suffix_doubled {
            assert!(ones, "doubled suffix on {}", row.part);
            let numeric: f64 = row.value.parse().expect("ones values are plain floats");
            assert!(numeric < 10.0);
        }
    }
    // And the ones decade exists: 96 values per size.
    let doubled = rows
        .iter()
        .filter(|r| {
            r.supplier_part.ends_with("LLCT-ND")
                || r.supplier_part.ends_with("HHCT-ND")
                || r.supplier_part.ends_with("CCCT-ND")
        })
        .count();
    assert_eq!(doubled, 288);
}

// =============================================================================
// Error handling
// =============================================================================

#[test]
fn unsupported_size_fails_fast() {
    let params = GenerationParams {
        sizes: vec!["1206".to_string()],
        ..GenerationParams::default()
    };
    let err = Generator::new(&params).unwrap_err();
    assert!(matches!(err, LibraryError::UnsupportedSize { size } if size == "1206"));
}

#[test]
fn unsupported_decade_fails_fast() {
    let params = GenerationParams {
        decades: vec![1, 10, 47],
        ..GenerationParams::default()
    };
    let err = Generator::new(&params).unwrap_err();
    assert!(matches!(
        err,
        LibraryError::UnsupportedDecade { multiplier: 47 }
    ));
}

#[test]
fn unwritable_destination_reports_the_path() {
    let rows = default_rows();
    let missing_dir = std::path::Path::new("/nonexistent-dir-for-test/library.csv");
    let err = writer::write_table_to_path(&rows, missing_dir).unwrap_err();
    match err {
        LibraryError::FileCreate { path, .. } => {
            assert_eq!(path, missing_dir);
        }
        other => panic!("expected FileCreate, got {other:?}"),
    }
}

// =============================================================================
// File output
// =============================================================================

#[test]
fn written_file_matches_in_memory_output() {
    let temp_dir = test_temp_dir();
    let file_path = temp_dir.path().join("Atlantix_R.csv");

    let rows = default_rows();
    writer::write_table_to_path(&rows, &file_path).expect("Failed to write library");

    let written = std::fs::read_to_string(&file_path).expect("Failed to read library back");
    assert_eq!(written, render(&rows));
    assert_eq!(written.lines().count(), 1729); // header + 1728 rows
    assert_eq!(written.lines().next().unwrap(), EXPECTED_HEADER);
}

#[test]
fn first_data_row_is_byte_exact() {
    let rows = default_rows();
    let output = render(&rows);
    let first_data_line = output.lines().nth(1).unwrap();
    assert_eq!(
        first_data_line,
        "RES_0402_1.00,RES SMT 1.00 0402 100ppm 62mW,1.00,0402,100ppm,62mW,\
         Vishay-Dale,CRCW04021R00FKED,Digi-key,541-1.00LLCT-ND,\
         Atlantix_R.SchLib,Res1,Atlantix_R.PcbLib,RES0402,Atlantix_Engineering"
    );
}
