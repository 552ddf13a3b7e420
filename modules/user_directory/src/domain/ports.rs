use async_trait::async_trait;

use crate::contract::User;
use crate::domain::error::DomainError;

/// Where the user collection comes from. One call returns the whole
/// collection; paging happens client-side.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, DomainError>;
}
