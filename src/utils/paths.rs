use crate::models::scan::Severity;

pub struct ExposedPathEntry {
    pub path: &'static str,
    pub file_type: &'static str,
    pub severity: Severity,
    pub description: &'static str,
}

/// Well-known sensitive paths, ordered by probe priority: only the first
/// `MAX_PROBED_PATHS` entries are probed per scan, so the highest-value
/// targets come first.
pub const EXPOSED_PATHS: &[ExposedPathEntry] = &[
    ExposedPathEntry {
        path: "/.env",
        file_type: "Environment File",
        severity: Severity::Critical,
        description: "Environment file commonly containing database credentials and API keys",
    },
    ExposedPathEntry {
        path: "/.env.local",
        file_type: "Environment File",
        severity: Severity::Critical,
        description: "Local environment override file with credentials",
    },
    ExposedPathEntry {
        path: "/.env.production",
        file_type: "Environment File",
        severity: Severity::Critical,
        description: "Production environment file with live credentials",
    },
    ExposedPathEntry {
        path: "/.git/config",
        file_type: "Git Repository",
        severity: Severity::Critical,
        description: "Git configuration exposing remotes and enabling full repository download",
    },
    ExposedPathEntry {
        path: "/.git/HEAD",
        file_type: "Git Repository",
        severity: Severity::High,
        description: "Git metadata indicating the repository is publicly reachable",
    },
    ExposedPathEntry {
        path: "/.aws/credentials",
        file_type: "Cloud Credentials",
        severity: Severity::Critical,
        description: "AWS credentials file granting direct cloud account access",
    },
    ExposedPathEntry {
        path: "/credentials.json",
        file_type: "Credentials File",
        severity: Severity::Critical,
        description: "Credentials file with service secrets",
    },
    ExposedPathEntry {
        path: "/secrets.json",
        file_type: "Credentials File",
        severity: Severity::Critical,
        description: "Secrets file with application keys",
    },
    ExposedPathEntry {
        path: "/service-account.json",
        file_type: "Cloud Credentials",
        severity: Severity::Critical,
        description: "Google Cloud service account key",
    },
    ExposedPathEntry {
        path: "/id_rsa",
        file_type: "Private Key",
        severity: Severity::Critical,
        description: "SSH private key",
    },
    ExposedPathEntry {
        path: "/.ssh/id_rsa",
        file_type: "Private Key",
        severity: Severity::Critical,
        description: "SSH private key under a web-served home directory",
    },
    ExposedPathEntry {
        path: "/backup.sql",
        file_type: "Database Dump",
        severity: Severity::Critical,
        description: "SQL dump exposing full database contents",
    },
    ExposedPathEntry {
        path: "/database.sql",
        file_type: "Database Dump",
        severity: Severity::Critical,
        description: "SQL dump exposing full database contents",
    },
    ExposedPathEntry {
        path: "/dump.sql",
        file_type: "Database Dump",
        severity: Severity::Critical,
        description: "SQL dump exposing full database contents",
    },
    ExposedPathEntry {
        path: "/wp-config.php.bak",
        file_type: "Backup File",
        severity: Severity::Critical,
        description: "WordPress configuration backup served as plain text",
    },
    ExposedPathEntry {
        path: "/config.php.bak",
        file_type: "Backup File",
        severity: Severity::Critical,
        description: "PHP configuration backup served as plain text",
    },
    ExposedPathEntry {
        path: "/.htpasswd",
        file_type: "Credentials File",
        severity: Severity::Critical,
        description: "HTTP basic auth password hashes",
    },
    ExposedPathEntry {
        path: "/docker-compose.yml",
        file_type: "Configuration",
        severity: Severity::High,
        description: "Container orchestration file revealing internal services and often secrets",
    },
    ExposedPathEntry {
        path: "/.npmrc",
        file_type: "Package Config",
        severity: Severity::High,
        description: "npm configuration that may include registry auth tokens",
    },
    ExposedPathEntry {
        path: "/appsettings.json",
        file_type: "Configuration",
        severity: Severity::High,
        description: ".NET application settings with connection strings",
    },
    ExposedPathEntry {
        path: "/config.json",
        file_type: "Configuration",
        severity: Severity::High,
        description: "Application configuration that may embed credentials",
    },
    ExposedPathEntry {
        path: "/web.config",
        file_type: "Configuration",
        severity: Severity::Medium,
        description: "IIS configuration revealing server internals",
    },
    ExposedPathEntry {
        path: "/error.log",
        file_type: "Log File",
        severity: Severity::High,
        description: "Server error log leaking stack traces and paths",
    },
    ExposedPathEntry {
        path: "/debug.log",
        file_type: "Log File",
        severity: Severity::Medium,
        description: "Debug log leaking application internals",
    },
    ExposedPathEntry {
        path: "/.DS_Store",
        file_type: "Metadata",
        severity: Severity::Low,
        description: "macOS directory metadata revealing file listings",
    },
];

/// Probed sequentially after the catalog sweep; at most one finding.
pub const SOURCE_MAP_PATHS: &[&str] = &[
    "/main.js.map",
    "/bundle.js.map",
    "/app.js.map",
    "/vendor.js.map",
    "/index.js.map",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_larger_than_the_probe_cap() {
        assert!(EXPOSED_PATHS.len() > 20);
    }

    #[test]
    fn highest_priority_entries_lead_the_catalog() {
        assert_eq!(EXPOSED_PATHS[0].path, "/.env");
        assert!(EXPOSED_PATHS[..20]
            .iter()
            .any(|e| e.path == "/.git/config"));
    }

    #[test]
    fn all_paths_are_root_relative() {
        for entry in EXPOSED_PATHS {
            assert!(entry.path.starts_with('/'), "{}", entry.path);
        }
        for path in SOURCE_MAP_PATHS {
            assert!(path.starts_with('/'));
        }
    }
}
