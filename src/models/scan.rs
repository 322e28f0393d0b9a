use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// A secret detected in page HTML or a fetched script bundle. The raw
/// matched value never leaves the scanner; `value` holds the masked form.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SecretFinding {
    #[serde(rename = "type")]
    pub secret_type: String,
    pub pattern: String,
    pub value: String,
    pub location: String,
    pub severity: Severity,
    pub remediation: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExposedFileFinding {
    pub path: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub severity: Severity,
    pub description: String,
    pub remediation: String,
}

/// Composite output of one orchestrated scan. Held in memory for the
/// duration of a grading request; persistence is the caller's concern.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScanResult {
    pub secrets_found: Vec<SecretFinding>,
    pub exposed_files: Vec<ExposedFileFinding>,
    pub security_score: u32,
    pub scan_duration: u64,
}
