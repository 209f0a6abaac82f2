use serde::Deserialize;

use crate::application::ports::{Classifier, ClassifierError};

fn default_threshold() -> f64 {
    0.5
}

/// Standardised logistic regression loaded from a coefficient file.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticModel {
    pub features: Vec<String>,
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub means: Option<Vec<f64>>,
    #[serde(default)]
    pub scales: Option<Vec<f64>>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl LogisticModel {
    /// Checks that every coefficient vector matches `features`.
    pub fn check_shape(&self) -> Result<(), String> {
        let expected = self.features.len();
        if self.weights.len() != expected {
            return Err(format!("{} weights for {} features", self.weights.len(), expected));
        }
        if let Some(means) = &self.means {
            if means.len() != expected {
                return Err(format!("{} means for {} features", means.len(), expected));
            }
        }
        if let Some(scales) = &self.scales {
            if scales.len() != expected {
                return Err(format!("{} scales for {} features", scales.len(), expected));
            }
            if scales.iter().any(|s| *s == 0.0) {
                return Err("scale of zero".to_string());
            }
        }
        Ok(())
    }

    pub fn probability(&self, features: &[f64]) -> Result<f64, ClassifierError> {
        if features.len() != self.weights.len() {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }

        let z: f64 = features
            .iter()
            .enumerate()
            .map(|(i, x)| {
                let mean = self.means.as_ref().map_or(0.0, |m| m[i]);
                let scale = self.scales.as_ref().map_or(1.0, |s| s[i]);
                self.weights[i] * (x - mean) / scale
            })
            .sum::<f64>()
            + self.intercept;

        let p = 1.0 / (1.0 + (-z).exp());
        if p.is_nan() {
            return Err(ClassifierError::PredictionFailed(
                "probability is not a number".to_string(),
            ));
        }
        Ok(p)
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, features: &[f64]) -> Result<i64, ClassifierError> {
        let p = self.probability(features)?;
        Ok(i64::from(p >= self.threshold))
    }
}
