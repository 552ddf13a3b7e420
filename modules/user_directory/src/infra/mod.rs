pub mod http_source;
pub mod traced_client;
