use serde_json::Value;

use crate::domain::{DiagnosticDomain, FeatureVector};

/// Checks `payload` against the schema of `domain` and returns the values in
/// schema order. Fields outside the schema are ignored.
pub fn validate_features(
    domain: DiagnosticDomain,
    payload: &Value,
) -> Result<FeatureVector, ValidationError> {
    let fields = payload.as_object().ok_or(ValidationError::NotAnObject)?;
    let required = domain.required_fields();

    let missing: Vec<&'static str> = required
        .iter()
        .copied()
        .filter(|name| !fields.contains_key(*name))
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields {
            domain,
            required,
            missing,
        });
    }

    let values = required
        .iter()
        .map(|name| coerce_numeric(*name, &fields[*name]))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureVector::from_ordered(domain, values))
}

fn coerce_numeric(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number
        .filter(|n| n.is_finite())
        .ok_or(ValidationError::InvalidValue { field })
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .required.join(", "))]
    MissingFields {
        domain: DiagnosticDomain,
        required: &'static [&'static str],
        missing: Vec<&'static str>,
    },
    #[error("Invalid value for field '{field}': expected a number")]
    InvalidValue { field: &'static str },
    #[error("Request body must be a JSON object")]
    NotAnObject,
}

impl ValidationError {
    /// Field names the client has to fix.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            ValidationError::MissingFields { missing, .. } => missing.clone(),
            ValidationError::InvalidValue { field } => vec![*field],
            ValidationError::NotAnObject => Vec::new(),
        }
    }
}
