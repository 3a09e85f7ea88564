pub mod error;
pub mod local_client;
pub mod service;
pub mod table;

pub use error::DomainError;
pub use local_client::AuthCtxResolverLocalClient;
pub use service::Service;
