pub mod config;
pub mod error;
pub mod naming;
pub mod types;

pub use config::{catalog, config, AppConfig, Catalog};
pub use error::{ErrorKind, PopError, Result};
pub use types::{Gender, PlaceId, PopId};
