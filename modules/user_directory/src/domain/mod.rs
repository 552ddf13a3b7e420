pub mod columns;
pub mod error;
pub mod filter;
pub mod ports;
pub mod route;
pub mod service;
pub mod view_state;
