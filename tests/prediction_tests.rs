/// Integration tests for the prediction submit path
///
/// Run with: cargo test --test prediction_tests -- --nocapture

use std::sync::Arc;

use co2_predictor::form::FormService;
use co2_predictor::model::{LinearModel, Predictor};
use co2_predictor::types::{FeatureRecord, PredictError};

/// Deterministic stub capability returning a fixed value per row.
struct StubPredictor(f64);

impl Predictor for StubPredictor {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictError> {
        Ok(vec![self.0; rows.len()])
    }
}

/// Capability that always fails, as a missing/mismatched model would.
struct FailingPredictor;

impl Predictor for FailingPredictor {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictError> {
        Err(PredictError::FeatureLen {
            got: rows.first().map(Vec::len).unwrap_or(0),
            expected: 99,
        })
    }
}

fn trained_feat_list() -> Arc<Vec<String>> {
    Arc::new(vec![
        "engine_size_l".to_string(),
        "cylinders".to_string(),
        "fuel_comb_l_per_100km".to_string(),
        "fuel_city_l_per_100km".to_string(),
        "fuel_hwy_l_per_100km".to_string(),
    ])
}

fn sample_record() -> FeatureRecord {
    serde_json::from_str(
        r#"{
            "engine_size_l": 2.0,
            "cylinders": 4,
            "fuel_comb_l_per_100km": 8.5,
            "fuel_city_l_per_100km": 10.0,
            "fuel_hwy_l_per_100km": 7.0
        }"#,
    )
    .unwrap()
}

#[test]
fn test_stub_result_formatting() {
    println!("\n=== Test: Two-Decimal Formatting ===");
    let svc = FormService::new(Arc::new(StubPredictor(180.456)), trained_feat_list());

    let out = svc.on_submit(&sample_record()).unwrap();
    assert_eq!(out.display, "180.46 g/km");
    assert!((out.co2_g_per_km - 180.456).abs() < 1e-12);
    println!("✓ rendered \"{}\"", out.display);
}

#[test]
fn test_ordered_vector_matches_trained_schema() {
    println!("\n=== Test: Feature Ordering ===");
    let svc = FormService::new(Arc::new(StubPredictor(0.0)), trained_feat_list());

    // Same values, different JSON key order
    let shuffled: FeatureRecord = serde_json::from_str(
        r#"{
            "fuel_hwy_l_per_100km": 7.0,
            "cylinders": 4,
            "fuel_city_l_per_100km": 10.0,
            "engine_size_l": 2.0,
            "fuel_comb_l_per_100km": 8.5
        }"#,
    )
    .unwrap();

    let a = svc.ordered_features(&sample_record()).unwrap();
    let b = svc.ordered_features(&shuffled).unwrap();

    assert_eq!(a.len(), 5, "record must produce exactly five features");
    assert_eq!(a, vec![2.0, 4.0, 8.5, 10.0, 7.0]);
    assert_eq!(a, b, "input ordering must not affect the model row");
    println!("✓ ordered row: {:?}", a);
}

#[test]
fn test_failing_capability_surfaces_error() {
    println!("\n=== Test: Capability Failure ===");
    let svc = FormService::new(Arc::new(FailingPredictor), trained_feat_list());

    let result = svc.on_submit(&sample_record());
    assert!(result.is_err(), "capability failure must surface, not render");
    println!("✓ error surfaced: {}", result.unwrap_err());
}

#[test]
fn test_idempotent_submit() {
    println!("\n=== Test: Idempotence ===");
    let svc = FormService::new(Arc::new(StubPredictor(123.4)), trained_feat_list());

    let first = svc.on_submit(&sample_record()).unwrap();
    let second = svc.on_submit(&sample_record()).unwrap();
    assert_eq!(first.display, second.display);
    println!("✓ identical submits render identically");
}

#[test]
fn test_finite_result_for_valid_inputs() {
    println!("\n=== Test: Finite Output ===");
    let (mdl, feat_list) = LinearModel::from_parts(
        trained_feat_list().as_ref().clone(),
        vec![4.83, 6.71, 10.24, 4.68, 4.21],
        28.7,
    )
    .unwrap();
    let svc = FormService::new(Arc::new(mdl), Arc::new(feat_list));

    let out = svc.on_submit(&sample_record()).unwrap();
    assert!(out.co2_g_per_km.is_finite());
    assert!(out.display.ends_with(" g/km"));
    println!("✓ real model forward: {}", out.display);
}

#[test]
fn test_schema_mismatch_is_an_error() {
    println!("\n=== Test: Schema Mismatch ===");
    // Model trained on a sixth feature the form never collects
    let mut feat_list = trained_feat_list().as_ref().clone();
    feat_list.push("transmission_gears".to_string());
    let svc = FormService::new(Arc::new(StubPredictor(0.0)), Arc::new(feat_list));

    let err = svc.on_submit(&sample_record()).unwrap_err();
    assert!(matches!(err, PredictError::SchemaMismatch(_)));
    println!("✓ mismatch rejected: {}", err);
}
