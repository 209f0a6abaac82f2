use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{Classifier, ClassifierError};
use crate::domain::{DiagnosticDomain, FeatureVector, Label};

/// Uniform `{0, 1}` contract over the per-domain models.
#[derive(Clone, Default)]
pub struct ClassifierAdapter {
    models: HashMap<DiagnosticDomain, Arc<dyn Classifier>>,
}

impl ClassifierAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, domain: DiagnosticDomain, model: Arc<dyn Classifier>) -> Self {
        self.models.insert(domain, model);
        self
    }

    pub fn has_model(&self, domain: DiagnosticDomain) -> bool {
        self.models.contains_key(&domain)
    }

    pub fn classify(
        &self,
        domain: DiagnosticDomain,
        vector: &FeatureVector,
    ) -> Result<Label, ClassificationError> {
        if vector.domain() != domain {
            return Err(ClassificationError::DomainMismatch {
                expected: domain,
                actual: vector.domain(),
            });
        }

        let model = self
            .models
            .get(&domain)
            .ok_or(ClassificationError::ModelNotLoaded(domain))?;

        let raw = model
            .predict(vector.values())
            .map_err(|source| ClassificationError::Model { domain, source })?;

        let label = Label::from_raw(raw)
            .ok_or(ClassificationError::LabelOutOfRange { domain, value: raw })?;

        tracing::debug!(domain = %domain, label = label.as_u8(), "Classification completed");

        Ok(label)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("no model loaded for {0}")]
    ModelNotLoaded(DiagnosticDomain),
    #[error("feature vector for {actual} passed to {expected} model")]
    DomainMismatch {
        expected: DiagnosticDomain,
        actual: DiagnosticDomain,
    },
    #[error("{domain} model: {source}")]
    Model {
        domain: DiagnosticDomain,
        source: ClassifierError,
    },
    #[error("{domain} model returned {value}, expected 0 or 1")]
    LabelOutOfRange { domain: DiagnosticDomain, value: i64 },
}
