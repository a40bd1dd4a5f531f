use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use thiserror::Error;

/// One submitted row of vehicle attributes, built fresh on every submit.
///
/// Field names are the training-time schema; the artifact's `feat_list`
/// refers to records by exactly these names.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureRecord {
    pub engine_size_l: f64,
    /// NonZero so a cylinder count below 1 is rejected at deserialization.
    pub cylinders: NonZeroU32,
    pub fuel_comb_l_per_100km: f64,
    pub fuel_city_l_per_100km: f64,
    pub fuel_hwy_l_per_100km: f64,
}

impl FeatureRecord {
    /// Project the record into (name, value) pairs under the training-time names.
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("engine_size_l", self.engine_size_l),
            ("cylinders", self.cylinders.get() as f64),
            ("fuel_comb_l_per_100km", self.fuel_comb_l_per_100km),
            ("fuel_city_l_per_100km", self.fuel_city_l_per_100km),
            ("fuel_hwy_l_per_100km", self.fuel_hwy_l_per_100km),
        ]
    }
}

/// Response for one submit: the raw number and the display string.
#[derive(Debug, Serialize, Clone)]
pub struct PredictionOut {
    pub co2_g_per_km: f64,
    pub display: String,
}

/// Prediction-time failures. All of these surface to the user as-is;
/// none are retried.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("model expects feature \"{0}\" which the request does not carry")]
    SchemaMismatch(String),
    #[error("feature length mismatch: got {got}, expected {expected}")]
    FeatureLen { got: usize, expected: usize },
    #[error("model produced a non-finite value: {0}")]
    NonFinite(f64),
}
