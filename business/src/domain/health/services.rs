use async_trait::async_trait;

use super::model::StorageStatus;

/// Service port for checking that storage answers.
///
/// Probing never fails: any error is folded into [`StorageStatus::Unreachable`].
#[async_trait]
pub trait StorageProbe: Send + Sync {
    async fn probe(&self) -> StorageStatus;
}
