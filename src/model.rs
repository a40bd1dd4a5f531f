use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::types::PredictError;

#[derive(Deserialize)]
struct ArtifactJson {
    feat_list: Vec<String>,
    coef: Vec<f64>,
    intercept: f64,
    target: Option<String>,
}

/// The opaque prediction capability. Takes a batch of ordered feature rows
/// and returns one number per row. The form service only depends on this
/// trait, so tests substitute stubs for the real artifact.
pub trait Predictor: Send + Sync {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictError>;
}

/// Linear regression deserialized from the exported JSON artifact.
/// Read-only after load; shared across requests behind an Arc.
pub struct LinearModel {
    coef: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Load the artifact and return the model together with the
    /// authoritative training-time feature ordering.
    pub fn load(path: &Path) -> Result<(Self, Vec<String>)> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("failed to read model artifact at {}", path.display()))?;
        let artifact: ArtifactJson =
            serde_json::from_str(&txt).with_context(|| "failed to parse model artifact JSON")?;

        if let Some(target) = &artifact.target {
            tracing::info!("model target: {}", target);
        }

        Self::from_parts(artifact.feat_list, artifact.coef, artifact.intercept)
    }

    /// Assemble a model from raw parts, validating that every feature
    /// has exactly one coefficient.
    pub fn from_parts(
        feat_list: Vec<String>,
        coef: Vec<f64>,
        intercept: f64,
    ) -> Result<(Self, Vec<String>)> {
        if coef.len() != feat_list.len() {
            bail!(
                "artifact is corrupt: {} coefficients for {} features",
                coef.len(),
                feat_list.len()
            );
        }
        Ok((Self { coef, intercept }, feat_list))
    }

    pub fn in_dim(&self) -> usize {
        self.coef.len()
    }
}

impl Predictor for LinearModel {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictError> {
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            if row.len() != self.coef.len() {
                return Err(PredictError::FeatureLen {
                    got: row.len(),
                    expected: self.coef.len(),
                });
            }
            let y = self.intercept
                + row.iter().zip(&self.coef).map(|(x, w)| x * w).sum::<f64>();
            out.push(y);
        }
        Ok(out)
    }
}
