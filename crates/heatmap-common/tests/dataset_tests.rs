//! Tests for dataset parsing and derived queries.

use heatmap_common::{Dataset, HeatmapError, MonthlyReading};

const SAMPLE_JSON: &str = r#"{
    "baseTemperature": 8.66,
    "monthlyVariance": [
        { "year": 1753, "month": 1, "variance": -1.366 },
        { "year": 1753, "month": 2, "variance": -2.223 },
        { "year": 1754, "month": 1, "variance": -0.98 },
        { "year": 1754, "month": 2, "variance": 0.461 }
    ]
}"#;

#[test]
fn test_parse_sample_document() {
    let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
    assert_eq!(dataset.base_temperature, 8.66);
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.monthly_variance[0].year, 1753);
    assert_eq!(dataset.monthly_variance[0].month, 1);
    assert_eq!(dataset.monthly_variance[0].variance, -1.366);
}

#[test]
fn test_temperature_is_base_plus_variance() {
    let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
    let reading = &dataset.monthly_variance[0];
    assert!((dataset.temperature(reading) - 7.294).abs() < 1e-9);
}

#[test]
fn test_temperature_extent() {
    let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
    let (min, max) = dataset.temperature_extent().unwrap();
    assert!((min - (8.66 - 2.223)).abs() < 1e-9);
    assert!((max - (8.66 + 0.461)).abs() < 1e-9);
}

#[test]
fn test_years_are_distinct_in_first_occurrence_order() {
    let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
    assert_eq!(dataset.years(), vec![1753, 1754]);
    assert_eq!(dataset.year_range(), Some((1753, 1754)));
}

#[test]
fn test_malformed_records_are_skipped() {
    let json = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            { "year": 1753, "month": 1, "variance": -1.366 },
            { "year": 1753, "month": 13, "variance": 0.1 },
            { "year": 1753, "variance": 0.1 },
            { "year": 1753, "month": 2 },
            { "month": 3, "variance": 0.2 },
            { "year": 1753, "month": 0, "variance": 0.3 },
            { "year": 1753, "month": 4, "variance": 0.4 }
        ]
    }"#;

    let dataset = Dataset::from_json(json).unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.monthly_variance[0].month, 1);
    assert_eq!(dataset.monthly_variance[1].month, 4);
}

#[test]
fn test_all_records_malformed_is_an_error() {
    let json = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            { "year": 1753, "month": 13, "variance": 0.1 }
        ]
    }"#;

    match Dataset::from_json(json) {
        Err(HeatmapError::EmptyDataset) => {}
        other => panic!("expected EmptyDataset, got {:?}", other.map(|d| d.len())),
    }
}

#[test]
fn test_empty_record_list_is_an_error() {
    let json = r#"{ "baseTemperature": 8.66, "monthlyVariance": [] }"#;
    assert!(matches!(
        Dataset::from_json(json),
        Err(HeatmapError::EmptyDataset)
    ));
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    assert!(matches!(
        Dataset::from_json("not json"),
        Err(HeatmapError::Parse(_))
    ));
}

#[test]
fn test_scenario_two_records() {
    let dataset = Dataset::new(
        8.66,
        vec![
            MonthlyReading {
                year: 1753,
                month: 1,
                variance: -2.0,
            },
            MonthlyReading {
                year: 2015,
                month: 12,
                variance: 1.5,
            },
        ],
    )
    .unwrap();

    let (min, max) = dataset.temperature_extent().unwrap();
    assert!((min - 6.66).abs() < 1e-9);
    assert!((max - 10.16).abs() < 1e-9);
    assert_eq!(dataset.year_range(), Some((1753, 2015)));
}
