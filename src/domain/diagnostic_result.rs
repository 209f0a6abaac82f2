use super::diagnostic_domain::DiagnosticDomain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Label::Negative),
            1 => Some(Label::Positive),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticResult {
    pub domain: DiagnosticDomain,
    pub label: Label,
    pub disease: String,
}

impl DiagnosticResult {
    pub fn new(domain: DiagnosticDomain, label: Label) -> Self {
        Self {
            domain,
            label,
            disease: domain.as_str().to_string(),
        }
    }
}
