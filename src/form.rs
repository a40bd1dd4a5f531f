use std::sync::Arc;

use crate::model::Predictor;
use crate::types::{FeatureRecord, PredictError, PredictionOut};

/// Format a predicted emission for display: two decimals, fixed unit suffix.
pub fn format_emission(co2_g_per_km: f64) -> String {
    format!("{co2_g_per_km:.2} g/km")
}

/// The prediction form service: turns a submitted record into an ordered
/// feature vector, delegates to the injected prediction capability, and
/// projects the result into a display string.
pub struct FormService {
    predictor: Arc<dyn Predictor>,
    feat_list: Arc<Vec<String>>, // authoritative input order
}

impl FormService {
    pub fn new(predictor: Arc<dyn Predictor>, feat_list: Arc<Vec<String>>) -> Self {
        Self {
            predictor,
            feat_list,
        }
    }

    /// Order the record's fields by the model's training-time feature list.
    ///
    /// A feature the model expects but the record does not carry is a schema
    /// mismatch and fails the request; it is never silently zero-filled.
    pub fn ordered_features(&self, record: &FeatureRecord) -> Result<Vec<f64>, PredictError> {
        let named = record.named();
        let mut v = Vec::with_capacity(self.feat_list.len());
        for name in self.feat_list.iter() {
            match named.iter().find(|(n, _)| *n == name.as_str()) {
                Some((_, value)) => v.push(*value),
                None => return Err(PredictError::SchemaMismatch(name.clone())),
            }
        }
        Ok(v)
    }

    /// Run one submit action: build the single-row batch, invoke the
    /// capability synchronously, and take the first (only) result.
    pub fn on_submit(&self, record: &FeatureRecord) -> Result<PredictionOut, PredictError> {
        let row = self.ordered_features(record)?;
        let out = self.predictor.predict(&[row])?;
        let co2_g_per_km = out[0];
        if !co2_g_per_km.is_finite() {
            return Err(PredictError::NonFinite(co2_g_per_km));
        }
        Ok(PredictionOut {
            co2_g_per_km,
            display: format_emission(co2_g_per_km),
        })
    }
}
