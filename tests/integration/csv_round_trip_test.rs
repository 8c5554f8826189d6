use clinical_synth::models::patient::validate_table;
use clinical_synth::{GeneratorConfig, generate_records, read_csv, write_csv};

use crate::utils::scratch_dir;

#[test]
fn test_default_table_round_trips() {
    let dir = scratch_dir("round_trip");
    let path = dir.join("Hybrid_Model.csv");

    let records = generate_records(&GeneratorConfig::default()).unwrap();
    write_csv(&path, &records).unwrap();

    let back = read_csv(&path).unwrap();
    assert_eq!(back, records);
    validate_table(&back).unwrap();
}

#[test]
fn test_file_has_no_index_column() {
    let dir = scratch_dir("no_index");
    let path = dir.join("Hybrid_Model.csv");

    let records = generate_records(&GeneratorConfig::default().with_record_count(5)).unwrap();
    write_csv(&path, &records).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    for line in text.lines() {
        assert_eq!(line.split(',').count(), 12, "{line}");
    }
    assert!(text.starts_with("patient_id,age,gender,"));
}
