//! User directory: fetch user records once, then search, sort and page
//! through them locally.

// === PUBLIC CONTRACT ===
pub mod contract;

pub use contract::model;
pub use contract::UserDirectoryError;

pub mod config;
pub mod domain;
pub mod infra;

pub use config::UserDirectoryConfig;
pub use domain::error::DomainError;
pub use domain::ports::UserSource;
pub use domain::route::RouteQuery;
pub use domain::service::DirectoryService;
pub use domain::view_state::{FilterUpdate, ViewState};
pub use infra::http_source::HttpUserSource;
pub use infra::traced_client::TracedClient;
