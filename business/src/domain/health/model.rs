/// What a storage probe observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageStatus {
    /// No database is configured for this process.
    Disabled,
    /// A trivial round-trip query succeeded.
    Reachable,
    /// The round-trip query failed or timed out.
    Unreachable,
}

/// Outcome of a health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthReport {
    Ok,
    /// Healthy, storage check skipped because no database is configured.
    OkStorageSkipped,
    StorageNotConfigured,
    StorageUnavailable,
}

impl HealthReport {
    pub fn is_healthy(self) -> bool {
        matches!(self, HealthReport::Ok | HealthReport::OkStorageSkipped)
    }
}
