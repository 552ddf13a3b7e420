use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::config::UserDirectoryConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::UserSource;
use crate::domain::view_state::ViewState;

/// Owns the view state and the source it is filled from.
pub struct DirectoryService {
    source: Arc<dyn UserSource>,
    state: ViewState,
}

impl DirectoryService {
    pub fn new(source: Arc<dyn UserSource>, config: &UserDirectoryConfig) -> Self {
        Self {
            source,
            state: ViewState::new(config.items_per_page),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Replace the users with a fresh fetch and return how many arrived.
    ///
    /// On failure the error is logged and returned; the users already held
    /// (possibly none) stay in place.
    #[instrument(name = "user_directory.service.refresh", skip(self))]
    pub async fn refresh(&mut self) -> Result<usize, DomainError> {
        debug!("Fetching users");

        match self.source.fetch_users().await {
            Ok(users) => {
                let count = users.len();
                self.state.set_users(users);
                info!(count, "Loaded users");
                Ok(count)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    kept = self.state.users().len(),
                    "User fetch failed; keeping previous users"
                );
                Err(e)
            }
        }
    }
}
