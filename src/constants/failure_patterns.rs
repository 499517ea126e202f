use crate::enums::severity::Severity;
use crate::structs::failure_category::FailureCategory;
use once_cell::sync::Lazy;
use regex::Regex;

/// The sanctioned failure catalog. Order drives report ordering only;
/// every category is matched independently against the full log text.
pub static FAILURE_CATALOG: &[FailureCategory] = &[
    FailureCategory {
        key: "missing_env_vars",
        signatures: &[
            r"missing environment variable",
            r"environment variable.*not found",
            r"process\.env\..*is undefined",
            r"OPENAI_API_KEY.*not found",
            r"DATABASE_URL.*not found",
            r"RAILWAY_TOKEN.*not found",
        ],
        severity: Severity::Critical,
        remediation: "Add missing environment variables in Railway dashboard under Variables tab",
    },
    FailureCategory {
        key: "port_binding",
        signatures: &[
            r"port binding.*failed",
            r"port.*not bound",
            r"listen.*EADDRINUSE",
            r"address already in use",
            r"port.*required by railway",
        ],
        severity: Severity::Critical,
        remediation: "Ensure your app binds to the PORT environment variable (Railway sets this automatically)",
    },
    FailureCategory {
        key: "build_failure",
        signatures: &[
            r"build failed",
            r"npm.*error",
            r"yarn.*error",
            r"pnpm.*error",
            r"typescript.*error",
            r"compilation.*error",
            r"module.*not found",
            r"dependency.*not found",
        ],
        severity: Severity::Critical,
        remediation: "Check package.json dependencies, run 'npm install' locally to verify, ensure all imports are correct",
    },
    FailureCategory {
        key: "database_connection",
        signatures: &[
            r"database.*connection.*failed",
            r"prisma.*error",
            r"connection.*refused",
            r"database.*not found",
            r"authentication.*failed",
        ],
        severity: Severity::Critical,
        remediation: "Verify DATABASE_URL is correct, check database is running, ensure proper credentials",
    },
    FailureCategory {
        key: "memory_limit",
        signatures: &[
            r"out of memory",
            r"memory.*limit.*exceeded",
            r"heap.*out.*of.*memory",
            r"allocation.*failed",
        ],
        severity: Severity::Warning,
        remediation: "Optimize memory usage, consider upgrading Railway plan, add memory monitoring",
    },
    FailureCategory {
        key: "timeout",
        signatures: &[
            r"timeout",
            r"request.*timed.*out",
            r"connection.*timeout",
            r"operation.*timed.*out",
        ],
        severity: Severity::Warning,
        remediation: "Increase timeout settings, optimize slow operations, check external API responses",
    },
    FailureCategory {
        key: "file_not_found",
        signatures: &[
            r"file.*not.*found",
            r"cannot.*find.*module",
            r"ENOENT",
            r"no such file.*directory",
        ],
        severity: Severity::Critical,
        remediation: "Check file paths, ensure all required files are committed, verify build output includes all assets",
    },
    FailureCategory {
        key: "permission_denied",
        signatures: &[
            r"permission.*denied",
            r"EACCES",
            r"access.*denied",
        ],
        severity: Severity::Critical,
        remediation: "Check file permissions, ensure Railway has proper access to required files",
    },
];

/// Log phrases that mark a deployment as healthy when no failure
/// category matched.
pub static SUCCESS_INDICATORS: &[&str] = &[
    "deployment successful",
    "build completed",
    "server started",
    "listening on port",
    "application ready",
];

/// A catalog entry with its signatures compiled, in listed order.
pub struct CompiledCategory {
    pub category: &'static FailureCategory,
    pub signatures: Vec<Regex>,
}

// Compiled once on first use and cached for the lifetime of the process.
// The catalog is read-only after this point and safe to share.
pub static COMPILED_CATALOG: Lazy<Vec<CompiledCategory>> = Lazy::new(|| {
    FAILURE_CATALOG
        .iter()
        .map(|category| CompiledCategory {
            category,
            signatures: category
                .signatures
                .iter()
                .map(|signature| {
                    Regex::new(&format!("(?i){}", signature)).expect("invalid failure signature")
                })
                .collect(),
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_compiles_every_signature() {
        let compiled = &*COMPILED_CATALOG;
        assert_eq!(compiled.len(), FAILURE_CATALOG.len());
        for entry in compiled {
            assert_eq!(entry.signatures.len(), entry.category.signatures.len());
        }
    }

    #[test]
    fn catalog_keys_are_unique() {
        let mut keys: Vec<&str> = FAILURE_CATALOG.iter().map(|c| c.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), FAILURE_CATALOG.len());
    }
}
