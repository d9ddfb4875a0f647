//! End-to-end dataset generation and export.

use shg_core::config::SyntheticConfig;
use shg_synthetic::{generate, write_csv};

#[test]
fn generated_csv_has_header_and_all_rows() {
    let config = SyntheticConfig {
        num_groups: Some(40),
        seed: Some(42),
        output_path: None,
    };
    let records = generate(&config).unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("dataset.csv");
    write_csv(&path, &records).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();

    assert_eq!(header.split(',').count(), 30);
    assert!(header.contains("FINAL_CREDIT_SCORE"));
    assert_eq!(lines.count(), 40);
}

#[test]
fn export_then_reimport_is_lossless() {
    let config = SyntheticConfig {
        num_groups: Some(10),
        seed: Some(3),
        output_path: None,
    };
    let records = generate(&config).unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("dataset.csv");
    write_csv(&path, &records).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let reimported: Vec<shg_synthetic::SyntheticShgRecord> =
        reader.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(records, reimported);
}
