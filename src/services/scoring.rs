use crate::models::scan::{ExposedFileFinding, SecretFinding, Severity};

// Fixed penalty weights. These are part of the scoring contract; do not
// re-derive them.
fn secret_penalty(severity: Severity) -> u32 {
    match severity {
        Severity::Critical => 25,
        Severity::High => 15,
        Severity::Medium => 8,
        Severity::Low => 3,
    }
}

fn exposed_file_penalty(severity: Severity) -> u32 {
    match severity {
        Severity::Critical => 20,
        Severity::High => 12,
        Severity::Medium => 6,
        Severity::Low => 2,
    }
}

/// Maps findings to a single bounded score: 100 minus the summed penalties,
/// clamped once at the end.
pub fn calculate_security_score(
    secrets: &[SecretFinding],
    exposed_files: &[ExposedFileFinding],
) -> u32 {
    let total_penalty: i64 = secrets
        .iter()
        .map(|f| i64::from(secret_penalty(f.severity)))
        .chain(
            exposed_files
                .iter()
                .map(|f| i64::from(exposed_file_penalty(f.severity))),
        )
        .sum();

    (100 - total_penalty).clamp(0, 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(severity: Severity) -> SecretFinding {
        SecretFinding {
            secret_type: "AWS Access Key".to_string(),
            pattern: "AKIA[0-9A-Z]{16}".to_string(),
            value: "AKIA***EF (20 chars)".to_string(),
            location: "JavaScript bundle or HTML".to_string(),
            severity,
            remediation: "Rotate the key".to_string(),
        }
    }

    fn exposed(severity: Severity) -> ExposedFileFinding {
        ExposedFileFinding {
            path: "/.env".to_string(),
            file_type: "Environment File".to_string(),
            severity,
            description: "Environment file".to_string(),
            remediation: "Remove or restrict access to /.env.".to_string(),
        }
    }

    #[test]
    fn clean_scan_scores_100() {
        assert_eq!(calculate_security_score(&[], &[]), 100);
    }

    #[test]
    fn one_critical_secret_scores_75() {
        assert_eq!(calculate_security_score(&[secret(Severity::Critical)], &[]), 75);
    }

    #[test]
    fn mixed_findings_sum_their_penalties() {
        let secrets = vec![secret(Severity::High), secret(Severity::Low)];
        let files = vec![exposed(Severity::Critical), exposed(Severity::Medium)];
        // 100 - 15 - 3 - 20 - 6
        assert_eq!(calculate_security_score(&secrets, &files), 56);
    }

    #[test]
    fn score_clamps_to_zero_not_below() {
        let secrets = vec![secret(Severity::Critical); 5];
        assert_eq!(calculate_security_score(&secrets, &[]), 0);
        let many = vec![secret(Severity::Critical); 12];
        assert_eq!(calculate_security_score(&many, &[]), 0);
    }
}
