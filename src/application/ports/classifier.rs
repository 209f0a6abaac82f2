/// A pre-trained binary model. Implementations must be read-only after load.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<i64, ClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("prediction failed: {0}")]
    PredictionFailed(String),
}
