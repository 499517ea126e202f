use crate::enums::severity::Severity;

/// One entry of the failure pattern catalog. The catalog is a static table:
/// adding a category is a data change, not a code change.
#[derive(Debug)]
pub struct FailureCategory {
    pub key: &'static str,
    pub signatures: &'static [&'static str],
    pub severity: Severity,
    pub remediation: &'static str,
}
