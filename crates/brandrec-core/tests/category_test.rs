use std::collections::HashSet;

use brandrec_core::category::*;
use brandrec_core::BrandrecError;

#[test]
fn every_table_key_resolves_to_its_code() {
    for table in all_tables() {
        for &(label, code) in table.entries() {
            assert_eq!(table.lookup(label).unwrap(), code, "{} / {label}", table.field());
        }
    }
}

#[test]
fn codes_are_unique_and_contiguous_from_zero() {
    for table in all_tables() {
        let codes: HashSet<u32> = table.entries().iter().map(|&(_, c)| c).collect();
        assert_eq!(codes.len(), table.len(), "duplicate code in {}", table.field());
        let expected: HashSet<u32> = (0..table.len() as u32).collect();
        assert_eq!(codes, expected, "gap in {}", table.field());
    }
}

#[test]
fn labels_are_unique_per_table() {
    for table in all_tables() {
        let labels: HashSet<&str> = table.labels().collect();
        assert_eq!(labels.len(), table.len());
    }
}

#[test]
fn table_sizes_match_vocabulary() {
    assert_eq!(OPERATING_SYSTEM.len(), 6);
    assert_eq!(SPEAKER.len(), 8);
    assert_eq!(REFRESH_RATE.len(), 5);
    assert_eq!(PICTURE_QUALITY.len(), 3);
}

#[test]
fn webos_maps_to_three() {
    assert_eq!(OPERATING_SYSTEM.lookup("WebOS").unwrap(), 3);
}

#[test]
fn unknown_os_names_the_operating_system_field() {
    let err = OPERATING_SYSTEM.lookup("Unknown OS").unwrap_err();
    match err {
        BrandrecError::InvalidCategory { field, value } => {
            assert_eq!(field, CategoryField::OperatingSystem);
            assert_eq!(value, "Unknown OS");
        }
        other => panic!("expected InvalidCategory, got {other:?}"),
    }
}

#[test]
fn unknown_value_names_each_field() {
    for table in all_tables() {
        let err = table.lookup("definitely not a label").unwrap_err();
        assert!(err.is_input_error());
        assert!(err.to_string().contains(table.field().as_str()));
    }
}

#[test]
fn all_tables_follow_feature_order() {
    let fields: Vec<CategoryField> = all_tables().iter().map(|t| t.field()).collect();
    assert_eq!(fields, CategoryField::ALL.to_vec());
}

#[test]
fn category_field_serializes_snake_case() {
    let json = serde_json::to_string(&CategoryField::PictureQuality).unwrap();
    assert_eq!(json, "\"picture_quality\"");
}
