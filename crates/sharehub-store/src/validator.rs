//! Share validity rules.

use async_trait::async_trait;
use chrono::Utc;

use sharehub_core::error::AppError;
use sharehub_core::result::AppResult;
use sharehub_entity::share::ShareRecord;
use sharehub_service::ShareValidator;

/// Rejects cancelled, expired, and exhausted shares.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpiryValidator;

#[async_trait]
impl ShareValidator for ExpiryValidator {
    async fn is_valid(&self, share: &ShareRecord) -> AppResult<()> {
        if !share.is_active {
            return Err(AppError::expired("Share has been cancelled"));
        }
        if share.is_past_expiry(Utc::now()) {
            return Err(AppError::expired("Share has expired"));
        }
        if share.remaining_downloads.is_some_and(|left| left <= 0) {
            return Err(AppError::expired("Share download limit reached"));
        }
        Ok(())
    }
}
