pub mod error;
pub mod fetcher;
pub mod parser;
pub mod record;
pub mod registry;
pub mod tunnel;

pub use error::{FetchError, LandscapeError};
pub use fetcher::{ConfigFetcher, DEFAULT_CONFIG_URL};
pub use registry::Properties;
pub use tunnel::TunnelTarget;
