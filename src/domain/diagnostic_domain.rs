use std::fmt;
use std::str::FromStr;

/// One of the four diagnostic categories served by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticDomain {
    Kidney,
    Liver,
    Heart,
    Diabetes,
}

impl DiagnosticDomain {
    pub const ALL: [DiagnosticDomain; 4] = [
        DiagnosticDomain::Kidney,
        DiagnosticDomain::Liver,
        DiagnosticDomain::Heart,
        DiagnosticDomain::Diabetes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticDomain::Kidney => "kidney",
            DiagnosticDomain::Liver => "liver",
            DiagnosticDomain::Heart => "heart",
            DiagnosticDomain::Diabetes => "diabetes",
        }
    }

    /// Required payload fields, in the order the classifier consumes them.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            DiagnosticDomain::Kidney => &["age", "bp", "sugar"],
            DiagnosticDomain::Liver => &["age", "sgpt", "sgot"],
            DiagnosticDomain::Heart => &["age", "cholesterol", "bp"],
            DiagnosticDomain::Diabetes => &["age", "glucose", "bmi"],
        }
    }
}

impl FromStr for DiagnosticDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kidney" => Ok(DiagnosticDomain::Kidney),
            "liver" => Ok(DiagnosticDomain::Liver),
            "heart" => Ok(DiagnosticDomain::Heart),
            "diabetes" => Ok(DiagnosticDomain::Diabetes),
            other => Err(format!("Invalid diagnostic domain: {}", other)),
        }
    }
}

impl fmt::Display for DiagnosticDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
