use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::services::ClassifierAdapter;
use crate::domain::DiagnosticDomain;

use super::logistic_model::LogisticModel;

/// Loads `<dir>/<domain>.json` for every domain. Runs once at startup; the
/// returned adapter is read-only afterwards.
pub fn load_classifiers(dir: &Path) -> Result<ClassifierAdapter, ModelLoadError> {
    let mut adapter = ClassifierAdapter::new();

    for domain in DiagnosticDomain::ALL {
        let path = dir.join(format!("{}.json", domain.as_str()));
        let model = load_model(&path, domain)?;

        tracing::info!(
            domain = %domain,
            path = %path.display(),
            features = model.features.len(),
            "Classifier loaded"
        );

        adapter = adapter.with_model(domain, Arc::new(model));
    }

    Ok(adapter)
}

pub fn load_model(path: &Path, domain: DiagnosticDomain) -> Result<LogisticModel, ModelLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let model: LogisticModel = serde_json::from_str(&raw).map_err(|source| ModelLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let expected = domain.required_fields();
    if model.features.iter().map(String::as_str).ne(expected.iter().copied()) {
        return Err(ModelLoadError::FeatureOrder {
            domain,
            expected: expected.join(", "),
            actual: model.features.join(", "),
        });
    }

    model
        .check_shape()
        .map_err(|detail| ModelLoadError::Shape { domain, detail })?;

    Ok(model)
}

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("reading {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parsing {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{domain} model features [{actual}] do not match schema [{expected}]")]
    FeatureOrder {
        domain: DiagnosticDomain,
        expected: String,
        actual: String,
    },
    #[error("{domain} model: {detail}")]
    Shape {
        domain: DiagnosticDomain,
        detail: String,
    },
}
