use super::diagnostic_domain::DiagnosticDomain;

/// Classifier input for one domain, ordered by the domain schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    domain: DiagnosticDomain,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Returns `None` when `values` does not match the schema length.
    pub fn new(domain: DiagnosticDomain, values: Vec<f64>) -> Option<Self> {
        if values.len() != domain.required_fields().len() {
            return None;
        }
        Some(Self { domain, values })
    }

    pub(crate) fn from_ordered(domain: DiagnosticDomain, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), domain.required_fields().len());
        Self { domain, values }
    }

    pub fn domain(&self) -> DiagnosticDomain {
        self.domain
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
